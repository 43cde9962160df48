//! Color types and color space conversions.
//!
//! Provides an immutable RGBA color value with validated construction from
//! hex strings, `rgb()`/`rgba()` strings, named CSS colors, and component
//! tuples, plus HSV/HSL views and the adjustment primitives used by the
//! contrast searches.
//!
//! # References
//!
//! - W3C. *Web Content Accessibility Guidelines (WCAG) 2.1*, relative
//!   luminance definition.

use crate::contrast;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Rounding slack tolerated when re-validating an HSV/HSL round trip.
///
/// Values this close to the [0, 1] bounds are clamped instead of rejected;
/// anything further out is a genuine range violation.
const ROUND_TRIP_SLACK: f64 = 1e-9;

/// Named CSS colors recognized by the string parser.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("aqua", [0x00, 0xff, 0xff]),
    ("beige", [0xf5, 0xf5, 0xdc]),
    ("black", [0x00, 0x00, 0x00]),
    ("blue", [0x00, 0x00, 0xff]),
    ("brown", [0xa5, 0x2a, 0x2a]),
    ("chocolate", [0xd2, 0x69, 0x1e]),
    ("coral", [0xff, 0x7f, 0x50]),
    ("crimson", [0xdc, 0x14, 0x3c]),
    ("cyan", [0x00, 0xff, 0xff]),
    ("fuchsia", [0xff, 0x00, 0xff]),
    ("gold", [0xff, 0xd7, 0x00]),
    ("gray", [0x80, 0x80, 0x80]),
    ("green", [0x00, 0x80, 0x00]),
    ("grey", [0x80, 0x80, 0x80]),
    ("indigo", [0x4b, 0x00, 0x82]),
    ("ivory", [0xff, 0xff, 0xf0]),
    ("khaki", [0xf0, 0xe6, 0x8c]),
    ("lavender", [0xe6, 0xe6, 0xfa]),
    ("lime", [0x00, 0xff, 0x00]),
    ("magenta", [0xff, 0x00, 0xff]),
    ("maroon", [0x80, 0x00, 0x00]),
    ("navy", [0x00, 0x00, 0x80]),
    ("olive", [0x80, 0x80, 0x00]),
    ("orange", [0xff, 0xa5, 0x00]),
    ("orchid", [0xda, 0x70, 0xd6]),
    ("pink", [0xff, 0xc0, 0xcb]),
    ("plum", [0xdd, 0xa0, 0xdd]),
    ("purple", [0x80, 0x00, 0x80]),
    ("red", [0xff, 0x00, 0x00]),
    ("salmon", [0xfa, 0x80, 0x72]),
    ("silver", [0xc0, 0xc0, 0xc0]),
    ("tan", [0xd2, 0xb4, 0x8c]),
    ("teal", [0x00, 0x80, 0x80]),
    ("tomato", [0xff, 0x63, 0x47]),
    ("turquoise", [0x40, 0xe0, 0xd0]),
    ("violet", [0xee, 0x82, 0xee]),
    ("white", [0xff, 0xff, 0xff]),
    ("yellow", [0xff, 0xff, 0x00]),
];

/// Immutable RGBA color with floating-point components in [0, 1].
///
/// Every constructor validates the range invariant; operations never mutate
/// in place and instead return a fresh `Color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0.0-1.0).
    r: f64,
    /// Green component (0.0-1.0).
    g: f64,
    /// Blue component (0.0-1.0).
    b: f64,
    /// Alpha component (0.0-1.0, 1.0 = fully opaque).
    a: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    /// Opaque white.
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    /// Opaque red.
    pub const RED: Self = Self { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
    /// Opaque green (full-intensity, `#00ff00`).
    pub const GREEN: Self = Self { r: 0.0, g: 1.0, b: 0.0, a: 1.0 };
    /// Opaque blue.
    pub const BLUE: Self = Self { r: 0.0, g: 0.0, b: 1.0, a: 1.0 };

    /// Create a new RGBA color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentOutOfRange`] if any component lies outside
    /// [0, 1].
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Result<Self> {
        Ok(Self {
            r: check_component("red", r)?,
            g: check_component("green", g)?,
            b: check_component("blue", b)?,
            a: check_component("alpha", a)?,
        })
    }

    /// Create an opaque RGB color (alpha = 1.0).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentOutOfRange`] if any component lies outside
    /// [0, 1].
    pub fn opaque(r: f64, g: f64, b: f64) -> Result<Self> {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color from 8-bit RGB components (alpha = 1.0).
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: 1.0,
        }
    }

    /// Parse a hex color string: `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if the string is not a valid hex color.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidColor(s.to_string()))?;

        let invalid = || Error::InvalidColor(s.to_string());
        let nibble = |c: char| c.to_digit(16).map(|d| d as u8);

        let bytes: Vec<u8> = match digits.len() {
            3 | 4 => digits
                .chars()
                .map(|c| nibble(c).map(|d| d * 16 + d))
                .collect::<Option<_>>()
                .ok_or_else(invalid)?,
            6 | 8 => digits
                .as_bytes()
                .chunks_exact(2)
                .map(|pair| {
                    let hi = nibble(pair[0] as char)?;
                    let lo = nibble(pair[1] as char)?;
                    Some(hi * 16 + lo)
                })
                .collect::<Option<_>>()
                .ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };

        let a = bytes.get(3).map_or(1.0, |&v| f64::from(v) / 255.0);
        Ok(Self {
            r: f64::from(bytes[0]) / 255.0,
            g: f64::from(bytes[1]) / 255.0,
            b: f64::from(bytes[2]) / 255.0,
            a,
        })
    }

    /// Parse an `rgb(r, g, b)` or `rgba(r, g, b, a)` string.
    ///
    /// Channels are integers in 0-255; alpha is a float in [0, 1].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for malformed strings and
    /// [`Error::ComponentOutOfRange`] for an alpha outside [0, 1].
    pub fn from_rgb_string(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || Error::InvalidColor(s.to_string());

        let (body, has_alpha) = if let Some(rest) = trimmed.strip_prefix("rgba(") {
            (rest.strip_suffix(')').ok_or_else(invalid)?, true)
        } else if let Some(rest) = trimmed.strip_prefix("rgb(") {
            (rest.strip_suffix(')').ok_or_else(invalid)?, false)
        } else {
            return Err(invalid());
        };

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        match (parts.len(), has_alpha) {
            (3, _) | (4, true) => {}
            _ => return Err(invalid()),
        }

        let channel = |p: &str| p.parse::<u8>().map_err(|_| invalid());
        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;

        let a = if parts.len() == 4 {
            let a: f64 = parts[3].parse().map_err(|_| invalid())?;
            check_component("alpha", a)?
        } else {
            1.0
        };

        Ok(Self::from_rgb8(r, g, b).with_alpha_unchecked(a))
    }

    /// Look up a named CSS color.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(n, _)| *n == lower)
            .map(|&(_, [r, g, b])| Self::from_rgb8(r, g, b))
    }

    /// Red component in [0, 1].
    #[must_use]
    pub const fn r(&self) -> f64 {
        self.r
    }

    /// Green component in [0, 1].
    #[must_use]
    pub const fn g(&self) -> f64 {
        self.g
    }

    /// Blue component in [0, 1].
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Alpha component in [0, 1].
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.a
    }

    /// All four components as an array.
    #[must_use]
    pub const fn components(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// 8-bit RGBA components.
    #[must_use]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        ]
    }

    /// Hex string without alpha, e.g. `#ffa500`.
    #[must_use]
    pub fn hex(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Hex string with alpha, e.g. `#ffa50080`.
    #[must_use]
    pub fn hexa(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }

    /// Functional string, e.g. `rgb(255, 165, 0)`.
    #[must_use]
    pub fn rgb_string(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("rgb({r}, {g}, {b})")
    }

    /// Functional string with alpha, e.g. `rgba(255, 165, 0, 0.5)`.
    #[must_use]
    pub fn rgba_string(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("rgba({r}, {g}, {b}, {:.1})", self.a)
    }

    /// Copy with a new alpha.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentOutOfRange`] if `alpha` lies outside [0, 1].
    pub fn with_alpha(&self, alpha: f64) -> Result<Self> {
        Ok(self.with_alpha_unchecked(check_component("alpha", alpha)?))
    }

    const fn with_alpha_unchecked(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// HSV view: hue in degrees [0, 360), saturation and value in [0, 1].
    #[must_use]
    pub fn hsv(&self) -> (f64, f64, f64) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        if (max - min).abs() < f64::EPSILON {
            return (0.0, 0.0, max);
        }
        let delta = max - min;
        let s = delta / max;
        (self.hue_from(max, delta), s, max)
    }

    /// HSL view: hue in degrees [0, 360), saturation and lightness in [0, 1].
    #[must_use]
    pub fn hsl(&self) -> (f64, f64, f64) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (max + min) / 2.0;
        if (max - min).abs() < f64::EPSILON {
            return (0.0, 0.0, l);
        }
        let delta = max - min;
        let s = if l <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };
        (self.hue_from(max, delta), s, l)
    }

    fn hue_from(&self, max: f64, delta: f64) -> f64 {
        let h = if (max - self.r).abs() < f64::EPSILON {
            (self.g - self.b) / delta
        } else if (max - self.g).abs() < f64::EPSILON {
            2.0 + (self.b - self.r) / delta
        } else {
            4.0 + (self.r - self.g) / delta
        };
        (h * 60.0).rem_euclid(360.0)
    }

    /// Build a color from HSV components plus an alpha.
    ///
    /// Hue is in degrees (wrapped mod 360); saturation and value must lie in
    /// [0, 1].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentOutOfRange`] if saturation, value, or alpha
    /// lies outside [0, 1].
    pub fn from_hsv(h: f64, s: f64, v: f64, a: f64) -> Result<Self> {
        let s = check_component("saturation", s)?;
        let v = check_component("value", v)?;
        let h = h.rem_euclid(360.0) / 60.0;

        let i = h.floor();
        let f = h - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match i as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::from_round_trip(r, g, b, a)
    }

    /// Build a color from HSL components plus an alpha.
    ///
    /// Hue is in degrees (wrapped mod 360); saturation and lightness must
    /// lie in [0, 1].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentOutOfRange`] if saturation, lightness, or
    /// alpha lies outside [0, 1].
    pub fn from_hsl(h: f64, s: f64, l: f64, a: f64) -> Result<Self> {
        let s = check_component("saturation", s)?;
        let l = check_component("lightness", l)?;

        if s == 0.0 {
            return Self::from_round_trip(l, l, l, a);
        }

        let h = h.rem_euclid(360.0) / 360.0;
        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        Self::from_round_trip(
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
            a,
        )
    }

    /// Validate a polar round trip, forgiving float drift at the bounds.
    fn from_round_trip(r: f64, g: f64, b: f64, a: f64) -> Result<Self> {
        Self::new(
            snap_to_unit(r),
            snap_to_unit(g),
            snap_to_unit(b),
            snap_to_unit(a),
        )
    }

    /// Relative luminance per WCAG 2.1, in [0, 1].
    ///
    /// Each sRGB channel is linearized (divide by 12.92 below the 0.03928
    /// threshold, gamma-expand otherwise) and the linear values are combined
    /// with the 0.2126 / 0.7152 / 0.0722 weights. Alpha is ignored.
    #[must_use]
    pub fn luminance(&self) -> f64 {
        fn linearize(c: f64) -> f64 {
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126f64.mul_add(
            linearize(self.r),
            0.7152f64.mul_add(linearize(self.g), 0.0722 * linearize(self.b)),
        )
    }

    /// Rotate the hue by `degrees` (HSV basis), wrapping mod 360.
    ///
    /// Saturation, value, and alpha are preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if the HSV round trip produces an out-of-range
    /// component.
    pub fn adjust_hue(&self, degrees: f64) -> Result<Self> {
        let (h, s, v) = self.hsv();
        Self::from_hsv((h + degrees).rem_euclid(360.0), s, v, self.a)
    }

    /// Scale the saturation by `factor` (HSV basis), clamping to [0, 1].
    ///
    /// Hue, value, and alpha are preserved; factors driving saturation out
    /// of range saturate silently.
    ///
    /// # Errors
    ///
    /// Returns an error if the HSV round trip produces an out-of-range
    /// component.
    pub fn adjust_saturation(&self, factor: f64) -> Result<Self> {
        let (h, s, v) = self.hsv();
        Self::from_hsv(h, (s * factor).clamp(0.0, 1.0), v, self.a)
    }

    /// Scale the brightness (HSV value) by `factor`, clamping to [0, 1].
    ///
    /// Hue, saturation, and alpha are preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if the HSV round trip produces an out-of-range
    /// component.
    pub fn adjust_brightness(&self, factor: f64) -> Result<Self> {
        let (h, s, v) = self.hsv();
        Self::from_hsv(h, s, (v * factor).clamp(0.0, 1.0), self.a)
    }

    /// Scale the lightness (HSL basis) by `factor`, clamping to [0, 1].
    ///
    /// Hue, saturation, and alpha are preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if the HSL round trip produces an out-of-range
    /// component.
    pub fn adjust_lightness(&self, factor: f64) -> Result<Self> {
        let (h, s, l) = self.hsl();
        Self::from_hsl(h, s, (l * factor).clamp(0.0, 1.0), self.a)
    }

    /// Linear interpolation toward another color.
    ///
    /// `t` is clamped to [0, 1]; all four channels blend independently.
    #[must_use]
    pub fn interpolate(&self, other: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let blend = |a: f64, b: f64| a + (b - a) * t;
        Self {
            r: blend(self.r, other.r),
            g: blend(self.g, other.g),
            b: blend(self.b, other.b),
            a: blend(self.a, other.a),
        }
    }

    /// The complementary color (hue rotated 180 degrees).
    ///
    /// # Errors
    ///
    /// Returns an error if the HSV round trip fails.
    pub fn complementary(&self) -> Result<Self> {
        self.adjust_hue(180.0)
    }

    /// The two triadic companions (hue rotated 120 and 240 degrees).
    ///
    /// # Errors
    ///
    /// Returns an error if the HSV round trip fails.
    pub fn triadic(&self) -> Result<(Self, Self)> {
        Ok((self.adjust_hue(120.0)?, self.adjust_hue(240.0)?))
    }

    /// The two analogous companions (hue rotated by plus/minus `angle`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HSV round trip fails.
    pub fn analogous(&self, angle: f64) -> Result<(Self, Self)> {
        Ok((self.adjust_hue(angle)?, self.adjust_hue(-angle)?))
    }

    /// WCAG contrast ratio against another color, in [1, 21].
    #[must_use]
    pub fn contrast_ratio(&self, other: &Self) -> f64 {
        contrast::contrast_ratio(self, other)
    }

    /// Whether this color meets the WCAG level against another color.
    #[must_use]
    pub fn is_accessible(&self, other: &Self, level: contrast::WcagLevel) -> bool {
        contrast::is_accessible(self, other, level)
    }
}

fn check_component(component: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::ComponentOutOfRange { component, value })
    }
}

fn snap_to_unit(value: f64) -> f64 {
    if value < 0.0 && value > -ROUND_TRIP_SLACK {
        0.0
    } else if value > 1.0 && value < 1.0 + ROUND_TRIP_SLACK {
        1.0
    } else {
        value
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse any supported string form: hex, `rgb()`/`rgba()`, or a CSS name.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }
        if trimmed.starts_with("rgb") {
            return Self::from_rgb_string(trimmed);
        }
        Self::from_name(trimmed).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl TryFrom<[f64; 3]> for Color {
    type Error = Error;

    fn try_from(rgb: [f64; 3]) -> Result<Self> {
        Self::opaque(rgb[0], rgb[1], rgb[2])
    }
}

impl TryFrom<[f64; 4]> for Color {
    type Error = Error;

    fn try_from(rgba: [f64; 4]) -> Result<Self> {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }
}

impl TryFrom<(f64, f64, f64)> for Color {
    type Error = Error;

    fn try_from((r, g, b): (f64, f64, f64)) -> Result<Self> {
        Self::opaque(r, g, b)
    }
}

impl TryFrom<(f64, f64, f64, f64)> for Color {
    type Error = Error;

    fn try_from((r, g, b, a): (f64, f64, f64, f64)) -> Result<Self> {
        Self::new(r, g, b, a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_validates_range() {
        assert!(Color::new(0.5, 0.5, 0.5, 1.0).is_ok());
        assert!(Color::new(1.5, 0.5, 0.5, 1.0).is_err());
        assert!(Color::new(0.5, -0.1, 0.5, 1.0).is_err());
        assert!(Color::new(0.5, 0.5, 0.5, 2.0).is_err());
    }

    #[test]
    fn test_from_hex_six_digits() {
        let c = Color::from_hex("#ffa500").unwrap();
        assert_eq!(c.to_rgba8(), [255, 165, 0, 255]);
    }

    #[test]
    fn test_from_hex_eight_digits() {
        let c = Color::from_hex("#ffa50080").unwrap();
        assert_eq!(c.to_rgba8(), [255, 165, 0, 128]);
    }

    #[test]
    fn test_from_hex_short_forms() {
        let c = Color::from_hex("#f80").unwrap();
        assert_eq!(c.to_rgba8(), [255, 136, 0, 255]);

        let c = Color::from_hex("#f808").unwrap();
        assert_eq!(c.to_rgba8(), [255, 136, 0, 136]);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Color::from_hex("ffa500").is_err());
        assert!(Color::from_hex("#ggg").is_err());
        assert!(Color::from_hex("#12345").is_err());
    }

    #[test]
    fn test_from_rgb_string() {
        let c = Color::from_rgb_string("rgb(255, 165, 0)").unwrap();
        assert_eq!(c.hex(), "#ffa500");
        assert_relative_eq!(c.alpha(), 1.0);

        let c = Color::from_rgb_string("rgba(0, 0, 255, 0.5)").unwrap();
        assert_eq!(c.hex(), "#0000ff");
        assert_relative_eq!(c.alpha(), 0.5);
    }

    #[test]
    fn test_from_rgb_string_invalid_alpha() {
        assert!(Color::from_rgb_string("rgba(0, 0, 255, 1.5)").is_err());
        assert!(Color::from_rgb_string("rgba(0, 0, 255, -0.1)").is_err());
    }

    #[test]
    fn test_from_rgb_string_malformed() {
        assert!(Color::from_rgb_string("rgb(0, 0)").is_err());
        assert!(Color::from_rgb_string("rgb(0, 0, 300)").is_err());
        assert!(Color::from_rgb_string("rgb 0, 0, 255").is_err());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Color::from_name("black").unwrap(), Color::BLACK);
        assert_eq!(Color::from_name("White").unwrap(), Color::WHITE);
        assert_eq!(Color::from_name("no-such-color"), None);
        // CSS green is the half-intensity one.
        assert_eq!(Color::from_name("green").unwrap().hex(), "#008000");
    }

    #[test]
    fn test_from_str_dispatch() {
        assert_eq!("#ff0000".parse::<Color>().unwrap(), Color::RED);
        assert_eq!("rgb(255, 0, 0)".parse::<Color>().unwrap(), Color::RED);
        assert_eq!("red".parse::<Color>().unwrap(), Color::RED);
        assert!("not a color".parse::<Color>().is_err());
    }

    #[test]
    fn test_try_from_tuples() {
        let c = Color::try_from((1.0, 0.0, 0.0)).unwrap();
        assert_eq!(c, Color::RED);
        let c = Color::try_from([0.0, 0.0, 1.0, 0.5]).unwrap();
        assert_relative_eq!(c.alpha(), 0.5);
        assert!(Color::try_from((2.0, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_hsv_of_primaries() {
        let (h, s, v) = Color::RED.hsv();
        assert_relative_eq!(h, 0.0);
        assert_relative_eq!(s, 1.0);
        assert_relative_eq!(v, 1.0);

        let (h, _, _) = Color::GREEN.hsv();
        assert_relative_eq!(h, 120.0);

        let (h, _, _) = Color::BLUE.hsv();
        assert_relative_eq!(h, 240.0);
    }

    #[test]
    fn test_hsl_of_red() {
        let (h, s, l) = Color::RED.hsl();
        assert_relative_eq!(h, 0.0);
        assert_relative_eq!(s, 1.0);
        assert_relative_eq!(l, 0.5);
    }

    #[test]
    fn test_hsv_of_gray_has_zero_saturation() {
        let gray = Color::opaque(0.5, 0.5, 0.5).unwrap();
        let (h, s, _) = gray.hsv();
        assert_relative_eq!(h, 0.0);
        assert_relative_eq!(s, 0.0);
    }

    #[test]
    fn test_hsv_round_trip() {
        let c = Color::opaque(0.8, 0.3, 0.6).unwrap();
        let (h, s, v) = c.hsv();
        let back = Color::from_hsv(h, s, v, c.alpha()).unwrap();
        assert_relative_eq!(back.r(), c.r(), epsilon = 1e-10);
        assert_relative_eq!(back.g(), c.g(), epsilon = 1e-10);
        assert_relative_eq!(back.b(), c.b(), epsilon = 1e-10);
    }

    #[test]
    fn test_hsl_round_trip() {
        let c = Color::opaque(0.2, 0.7, 0.4).unwrap();
        let (h, s, l) = c.hsl();
        let back = Color::from_hsl(h, s, l, c.alpha()).unwrap();
        assert_relative_eq!(back.r(), c.r(), epsilon = 1e-10);
        assert_relative_eq!(back.g(), c.g(), epsilon = 1e-10);
        assert_relative_eq!(back.b(), c.b(), epsilon = 1e-10);
    }

    #[test]
    fn test_luminance_extremes() {
        assert_relative_eq!(Color::BLACK.luminance(), 0.0);
        assert_relative_eq!(Color::WHITE.luminance(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_luminance_weights() {
        // Full-intensity channels contribute exactly their WCAG weight.
        assert_relative_eq!(Color::RED.luminance(), 0.2126, epsilon = 1e-9);
        assert_relative_eq!(Color::GREEN.luminance(), 0.7152, epsilon = 1e-9);
        assert_relative_eq!(Color::BLUE.luminance(), 0.0722, epsilon = 1e-9);
    }

    #[test]
    fn test_adjust_hue_rotation() {
        let green = Color::RED.adjust_hue(120.0).unwrap();
        assert_eq!(green.hex(), "#00ff00");
    }

    #[test]
    fn test_adjust_hue_wraps_negative() {
        let c = Color::RED.adjust_hue(-90.0).unwrap();
        let (h, _, _) = c.hsv();
        assert_relative_eq!(h, 270.0, epsilon = 1e-9);
    }

    #[test]
    fn test_adjust_hue_full_turns_identity() {
        let c = Color::opaque(0.8, 0.3, 0.6).unwrap();
        let (h0, _, _) = c.hsv();
        for degrees in [360.0, 720.0] {
            let (h1, _, _) = c.adjust_hue(degrees).unwrap().hsv();
            assert_relative_eq!(h1, h0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_adjust_saturation_preserves_hue_and_value() {
        let c = Color::opaque(0.8, 0.3, 0.6).unwrap();
        let (h0, s0, v0) = c.hsv();
        let adjusted = c.adjust_saturation(0.5).unwrap();
        let (h1, s1, v1) = adjusted.hsv();
        assert_relative_eq!(h1, h0, epsilon = 1e-10);
        assert_relative_eq!(v1, v0, epsilon = 1e-10);
        assert_relative_eq!(s1, s0 * 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_adjust_brightness_preserves_hue_and_saturation() {
        let c = Color::opaque(0.8, 0.3, 0.6).unwrap();
        let (h0, s0, v0) = c.hsv();
        let adjusted = c.adjust_brightness(0.5).unwrap();
        let (h1, s1, v1) = adjusted.hsv();
        assert_relative_eq!(h1, h0, epsilon = 1e-10);
        assert_relative_eq!(s1, s0, epsilon = 1e-10);
        assert_relative_eq!(v1, v0 * 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_adjust_clamps_instead_of_failing() {
        let c = Color::opaque(0.8, 0.3, 0.6).unwrap();
        // A huge factor saturates the channel at 1.0 rather than erroring.
        let bright = c.adjust_brightness(100.0).unwrap();
        let (_, _, v) = bright.hsv();
        assert_relative_eq!(v, 1.0);

        let dark = c.adjust_lightness(0.0).unwrap();
        let (_, _, l) = dark.hsl();
        assert_relative_eq!(l, 0.0);
    }

    #[test]
    fn test_adjustments_preserve_alpha() {
        let c = Color::new(0.8, 0.3, 0.6, 0.25).unwrap();
        assert_relative_eq!(c.adjust_hue(90.0).unwrap().alpha(), 0.25);
        assert_relative_eq!(c.adjust_saturation(0.5).unwrap().alpha(), 0.25);
        assert_relative_eq!(c.adjust_brightness(1.2).unwrap().alpha(), 0.25);
        assert_relative_eq!(c.adjust_lightness(0.8).unwrap().alpha(), 0.25);
    }

    #[test]
    fn test_interpolate_midpoint() {
        let mid = Color::BLACK.interpolate(&Color::WHITE, 0.5);
        assert_relative_eq!(mid.r(), 0.5);
        assert_relative_eq!(mid.g(), 0.5);
        assert_relative_eq!(mid.b(), 0.5);
    }

    #[test]
    fn test_interpolate_clamps_t() {
        assert_eq!(Color::BLACK.interpolate(&Color::WHITE, -1.0), Color::BLACK);
        assert_eq!(Color::BLACK.interpolate(&Color::WHITE, 2.0), Color::WHITE);
    }

    #[test]
    fn test_complementary_and_triadic() {
        let cyan = Color::RED.complementary().unwrap();
        assert_eq!(cyan.hex(), "#00ffff");

        let (t1, t2) = Color::RED.triadic().unwrap();
        assert_eq!(t1.hex(), "#00ff00");
        assert_eq!(t2.hex(), "#0000ff");
    }

    #[test]
    fn test_analogous() {
        let (a1, a2) = Color::RED.analogous(30.0).unwrap();
        assert_eq!(a1.hex(), "#ff8000");
        assert_eq!(a2.hex(), "#ff0080");
    }

    #[test]
    fn test_formatting() {
        let orange = Color::from_hex("#ffa500").unwrap().with_alpha(0.5).unwrap();
        assert_eq!(orange.hex(), "#ffa500");
        assert_eq!(orange.hexa(), "#ffa50080");
        assert_eq!(orange.rgb_string(), "rgb(255, 165, 0)");
        assert_eq!(orange.rgba_string(), "rgba(255, 165, 0, 0.5)");
        assert_eq!(orange.to_string(), "#ffa500");
    }
}
