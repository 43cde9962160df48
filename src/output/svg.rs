//! SVG output encoder.
//!
//! Provides vector output for gradients and swatches: a `<linearGradient>`
//! strip for continuous display, per-stop cells for discrete display, and
//! an optional raster mode that embeds a base64 PNG preview.

use crate::error::Result;
use crate::gradient::Gradient;
use crate::output::PngEncoder;
use crate::swatch::Swatch;
use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt::Write as FmtWrite;

/// SVG encoder for gradients and swatches.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// Output width in pixels.
    width: u32,
    /// Strip height in pixels (per row for swatches).
    height: u32,
    /// Render one cell per stop instead of a continuous ramp.
    discrete: bool,
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new(500, 50)
    }
}

impl SvgEncoder {
    /// Create a new SVG encoder with the given strip dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            discrete: false,
        }
    }

    /// Render one cell per color stop instead of a continuous ramp.
    #[must_use]
    pub const fn discrete(mut self, discrete: bool) -> Self {
        self.discrete = discrete;
        self
    }

    /// Render a gradient as an SVG strip.
    #[must_use]
    pub fn render_gradient(&self, gradient: &Gradient) -> String {
        let mut svg = String::new();
        self.open_document(&mut svg, self.height);
        if self.discrete {
            self.push_discrete_strip(&mut svg, gradient, 0.0);
        } else {
            self.push_ramp_defs(&mut svg, gradient, 0);
            self.push_ramp_rect(&mut svg, 0, 0.0);
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// Render a swatch as stacked labeled strips.
    ///
    /// Each gradient occupies one row of the configured strip height plus a
    /// label line above it. In discrete mode, gradients with more stops
    /// than the swatch's display cap are resampled down to the cap.
    #[must_use]
    pub fn render_swatch(&self, swatch: &Swatch) -> String {
        const LABEL_HEIGHT: f32 = 16.0;
        let row_height = self.height as f32 + LABEL_HEIGHT;
        let total_height = (row_height * swatch.len() as f32).ceil() as u32;

        let mut svg = String::new();
        self.open_document(&mut svg, total_height.max(1));

        let cap = swatch.max_display().max(1);
        for (index, gradient) in swatch.iter().enumerate() {
            let top = row_height * index as f32;
            let _ = writeln!(
                svg,
                r#"  <text x="0" y="{:.1}" font-size="12" font-family="monospace">{}</text>"#,
                top + 12.0,
                escape_text(gradient.name()),
            );
            if self.discrete {
                let capped;
                let strip = if gradient.len() > cap {
                    capped = gradient
                        .resize(cap)
                        .unwrap_or_else(|_| gradient.clone());
                    &capped
                } else {
                    gradient
                };
                self.push_discrete_strip(&mut svg, strip, top + LABEL_HEIGHT);
            } else {
                self.push_ramp_defs(&mut svg, gradient, index);
                self.push_ramp_rect(&mut svg, index, top + LABEL_HEIGHT);
            }
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Render a gradient as an SVG document embedding a raster PNG preview.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn render_gradient_raster(&self, gradient: &Gradient) -> Result<String> {
        let png = PngEncoder::gradient_to_bytes(gradient, self.width.max(1), self.height.max(1))?;
        let data = STANDARD.encode(png);

        let mut svg = String::new();
        self.open_document(&mut svg, self.height);
        let _ = writeln!(
            svg,
            r#"  <image x="0" y="0" width="{}" height="{}" href="data:image/png;base64,{data}"/>"#,
            self.width, self.height,
        );
        svg.push_str("</svg>\n");
        Ok(svg)
    }

    fn open_document(&self, svg: &mut String, height: u32) {
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{height}" viewBox="0 0 {} {height}">"#,
            self.width, self.width,
        );
    }

    /// Emit the `<defs>` block with one stop per gradient color.
    fn push_ramp_defs(&self, svg: &mut String, gradient: &Gradient, index: usize) {
        let _ = writeln!(
            svg,
            r#"  <defs><linearGradient id="ramp{index}" x1="0" y1="0" x2="1" y2="0">"#
        );
        let denominator = (gradient.len().saturating_sub(1)).max(1) as f64;
        for (i, color) in gradient.iter().enumerate() {
            let offset = i as f64 / denominator * 100.0;
            let _ = writeln!(
                svg,
                r#"    <stop offset="{offset:.2}%" stop-color="{}" stop-opacity="{:.3}"/>"#,
                color.hex(),
                color.alpha(),
            );
        }
        let _ = writeln!(svg, "  </linearGradient></defs>");
    }

    fn push_ramp_rect(&self, svg: &mut String, index: usize, top: f32) {
        let _ = writeln!(
            svg,
            r#"  <rect x="0" y="{top:.1}" width="{}" height="{}" fill="url(#ramp{index})"/>"#,
            self.width, self.height,
        );
    }

    /// Emit one `<rect>` cell per stop.
    fn push_discrete_strip(&self, svg: &mut String, gradient: &Gradient, top: f32) {
        let cell_width = f64::from(self.width) / gradient.len() as f64;
        for (i, color) in gradient.iter().enumerate() {
            let _ = writeln!(
                svg,
                r#"  <rect x="{:.2}" y="{top:.1}" width="{cell_width:.2}" height="{}" fill="{}" fill-opacity="{:.3}"/>"#,
                cell_width * i as f64,
                self.height,
                color.hex(),
                color.alpha(),
            );
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_gradient() -> Gradient {
        Gradient::from_strs(&["#ff0000", "#00ff00", "#0000ff"], "rgb").expect("valid stops")
    }

    #[test]
    fn test_continuous_gradient_has_linear_gradient() {
        let svg = SvgEncoder::new(500, 50).render_gradient(&rgb_gradient());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<linearGradient"));
        assert!(svg.contains(r##"stop-color="#ff0000""##));
        assert!(svg.contains("offset=\"100.00%\""));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_discrete_gradient_has_cell_per_stop() {
        let svg = SvgEncoder::new(300, 50)
            .discrete(true)
            .render_gradient(&rgb_gradient());
        assert!(!svg.contains("<linearGradient"));
        assert_eq!(svg.matches("<rect").count(), 3);
    }

    #[test]
    fn test_swatch_labels_each_row() {
        let swatch = Swatch::new(vec![rgb_gradient(), rgb_gradient().reversed()]);
        let svg = SvgEncoder::new(500, 40).render_swatch(&swatch);
        assert!(svg.contains(">rgb</text>"));
        assert!(svg.contains(">rgb_r</text>"));
        assert_eq!(svg.matches("<linearGradient").count(), 2);
    }

    #[test]
    fn test_discrete_swatch_respects_display_cap() {
        let wide = rgb_gradient().resize(64).expect("non-zero count");
        let swatch = Swatch::new(vec![wide]).with_max(8);
        let svg = SvgEncoder::new(400, 30).discrete(true).render_swatch(&swatch);
        assert_eq!(svg.matches("<rect").count(), 8);
    }

    #[test]
    fn test_raster_embeds_base64_png() {
        let svg = SvgEncoder::new(64, 16)
            .render_gradient_raster(&rgb_gradient())
            .unwrap();
        assert!(svg.contains("data:image/png;base64,"));
    }

    #[test]
    fn test_label_escaping() {
        let gradient = Gradient::from_strs(&["#ff0000"], "a<b&c").expect("valid stops");
        let swatch = Swatch::new(vec![gradient]);
        let svg = SvgEncoder::new(100, 20).render_swatch(&swatch);
        assert!(svg.contains("a&lt;b&amp;c"));
        assert!(!svg.contains("a<b"));
    }
}
