//! Gradient container: a named, ordered, resizable sequence of colors.
//!
//! A [`Gradient`] owns its color stops and supports fraction-based sampling
//! with linear interpolation, resampling to a new stop count, elementwise
//! color adjustments, and accessibility operations against a background
//! color. It is a standalone container, not a wrapper over any plotting
//! toolkit's colormap type.

use crate::color::Color;
use crate::contrast::{
    self, LuminanceAxis, WcagLevel, DEFAULT_MAX_ATTEMPTS, DEFAULT_PRECISION, DEFAULT_STEP_SIZE,
};
use crate::error::{Error, Result};

/// A named, ordered sequence of color stops with interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    /// Color stops in order.
    colors: Vec<Color>,
    /// Display name.
    name: String,
}

/// Contrast statistics for a gradient against a background color.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastAnalysis {
    /// Mean contrast ratio across all stops.
    pub average_contrast: f64,
    /// Lowest contrast ratio.
    pub min_contrast: f64,
    /// Highest contrast ratio.
    pub max_contrast: f64,
    /// Number of stops meeting AA (4.5:1).
    pub accessible_aa_count: usize,
    /// Number of stops meeting AAA (7:1).
    pub accessible_aaa_count: usize,
    /// Fraction of stops meeting AA.
    pub aa_score: f64,
    /// Fraction of stops meeting AAA.
    pub aaa_score: f64,
    /// Per-stop contrast ratios, in stop order.
    pub contrasts: Vec<f64>,
}

impl Gradient {
    /// Create a gradient from color stops.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGradient`] if `colors` is empty.
    pub fn new(colors: Vec<Color>, name: impl Into<String>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyGradient);
        }
        Ok(Self { colors, name: name.into() })
    }

    /// Create a gradient by parsing color strings (hex, `rgb()`, or names).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGradient`] for an empty list or
    /// [`Error::InvalidColor`] for an unparseable entry.
    pub fn from_strs(colors: &[&str], name: impl Into<String>) -> Result<Self> {
        let parsed = colors
            .iter()
            .map(|s| s.parse())
            .collect::<Result<Vec<Color>>>()?;
        Self::new(parsed, name)
    }

    /// The gradient's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The color stops in order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of color stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the gradient has no stops. Always false for a constructed
    /// gradient; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate over the color stops.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Get a stop by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    /// Sample the gradient at a fraction in [0, 1].
    ///
    /// `t` is clamped; 0.0 yields the first stop and 1.0 the last. Between
    /// stops the two bracketing colors are linearly interpolated.
    #[must_use]
    pub fn sample(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        if self.colors.len() == 1 || t == 0.0 {
            return self.colors[0];
        }
        if t == 1.0 {
            return self.colors[self.colors.len() - 1];
        }

        let position = t * (self.colors.len() - 1) as f64;
        let index = position.floor() as usize;
        let local_t = position - index as f64;
        self.colors[index].interpolate(&self.colors[index + 1], local_t)
    }

    /// Sample at several fractions, producing a new gradient.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGradient`] if `fractions` is empty.
    pub fn sample_many(&self, fractions: &[f64]) -> Result<Self> {
        let colors = fractions.iter().map(|&t| self.sample(t)).collect();
        Self::new(colors, self.name.clone())
    }

    /// Resample to `count` evenly spaced stops.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGradient`] if `count` is zero.
    pub fn resize(&self, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(Error::EmptyGradient);
        }
        let colors = if count == 1 {
            vec![self.sample(0.0)]
        } else {
            (0..count)
                .map(|i| self.sample(i as f64 / (count - 1) as f64))
                .collect()
        };
        Self::new(colors, self.name.clone())
    }

    /// A reversed copy, named with the `_r` suffix.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut colors = self.colors.clone();
        colors.reverse();
        Self { colors, name: format!("{}_r", self.name) }
    }

    /// A renamed copy.
    #[must_use]
    pub fn rename(&self, name: impl Into<String>) -> Self {
        Self { colors: self.colors.clone(), name: name.into() }
    }

    /// A copy with every stop's alpha replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentOutOfRange`] if `alpha` lies outside [0, 1].
    pub fn with_alpha(&self, alpha: f64) -> Result<Self> {
        let colors = self
            .colors
            .iter()
            .map(|c| c.with_alpha(alpha))
            .collect::<Result<_>>()?;
        Ok(Self { colors, name: self.name.clone() })
    }

    /// Concatenate with another gradient.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut colors = self.colors.clone();
        colors.extend_from_slice(&other.colors);
        Self {
            colors,
            name: format!("{}+{}", self.name, other.name),
        }
    }

    /// Repeat the stop sequence `times` times.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGradient`] if `times` is zero.
    pub fn repeat(&self, times: usize) -> Result<Self> {
        if times == 0 {
            return Err(Error::EmptyGradient);
        }
        let mut colors = Vec::with_capacity(self.colors.len() * times);
        for _ in 0..times {
            colors.extend_from_slice(&self.colors);
        }
        Ok(Self { colors, name: self.name.clone() })
    }

    /// Hex strings for every stop, in order.
    #[must_use]
    pub fn hex_colors(&self) -> Vec<String> {
        self.colors.iter().map(Color::hex).collect()
    }

    /// RGBA component arrays for every stop, in order.
    #[must_use]
    pub fn components(&self) -> Vec<[f64; 4]> {
        self.colors.iter().map(Color::components).collect()
    }

    /// Relative luminance for every stop, in order.
    #[must_use]
    pub fn luminances(&self) -> Vec<f64> {
        self.colors.iter().map(Color::luminance).collect()
    }

    /// Rotate every stop's hue by `degrees`.
    ///
    /// # Errors
    ///
    /// Returns an error if any stop's HSV round trip fails.
    pub fn adjust_hue(&self, degrees: f64) -> Result<Self> {
        let colors = self
            .colors
            .iter()
            .map(|c| c.adjust_hue(degrees))
            .collect::<Result<_>>()?;
        Ok(Self {
            colors,
            name: format!("{}_hue{degrees:.0}", self.name),
        })
    }

    /// Scale every stop's saturation by `factor`.
    ///
    /// # Errors
    ///
    /// Returns an error if any stop's HSV round trip fails.
    pub fn adjust_saturation(&self, factor: f64) -> Result<Self> {
        let colors = self
            .colors
            .iter()
            .map(|c| c.adjust_saturation(factor))
            .collect::<Result<_>>()?;
        Ok(Self {
            colors,
            name: format!("{}_sat{factor:.1}", self.name),
        })
    }

    /// Scale every stop's brightness (HSV value) by `factor`.
    ///
    /// # Errors
    ///
    /// Returns an error if any stop's HSV round trip fails.
    pub fn adjust_brightness(&self, factor: f64) -> Result<Self> {
        let colors = self
            .colors
            .iter()
            .map(|c| c.adjust_brightness(factor))
            .collect::<Result<_>>()?;
        Ok(Self {
            colors,
            name: format!("{}_bright{factor:.1}", self.name),
        })
    }

    /// Scale every stop's lightness (HSL) by `factor`.
    ///
    /// # Errors
    ///
    /// Returns an error if any stop's HSL round trip fails.
    pub fn adjust_lightness(&self, factor: f64) -> Result<Self> {
        let colors = self
            .colors
            .iter()
            .map(|c| c.adjust_lightness(factor))
            .collect::<Result<_>>()?;
        Ok(Self {
            colors,
            name: format!("{}_light{factor:.1}", self.name),
        })
    }

    /// The complementary gradient (every hue rotated 180 degrees).
    ///
    /// # Errors
    ///
    /// Returns an error if any stop's HSV round trip fails.
    pub fn complementary(&self) -> Result<Self> {
        let colors = self
            .colors
            .iter()
            .map(Color::complementary)
            .collect::<Result<_>>()?;
        Ok(Self {
            colors,
            name: format!("{}_complementary", self.name),
        })
    }

    /// Adjust every stop until it meets `level` against the background.
    ///
    /// Stops that already meet the level pass through unchanged.
    #[must_use]
    pub fn make_accessible(&self, background: &Color, level: WcagLevel) -> Self {
        let colors = self
            .colors
            .iter()
            .map(|c| {
                contrast::find_accessible_color(c, background, level, LuminanceAxis::Lightness)
            })
            .collect();
        Self {
            colors,
            name: format!("{}_accessible", self.name),
        }
    }

    /// Contrast statistics for every stop against a background.
    #[must_use]
    pub fn analyze_contrast(&self, background: &Color) -> ContrastAnalysis {
        let contrasts: Vec<f64> = self
            .colors
            .iter()
            .map(|c| contrast::contrast_ratio(c, background))
            .collect();
        let total = contrasts.len();
        let accessible_aa_count = contrasts.iter().filter(|&&c| c >= 4.5).count();
        let accessible_aaa_count = contrasts.iter().filter(|&&c| c >= 7.0).count();

        ContrastAnalysis {
            average_contrast: contrasts.iter().sum::<f64>() / total as f64,
            min_contrast: contrasts.iter().copied().fold(f64::INFINITY, f64::min),
            max_contrast: contrasts.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            accessible_aa_count,
            accessible_aaa_count,
            aa_score: accessible_aa_count as f64 / total as f64,
            aaa_score: accessible_aaa_count as f64 / total as f64,
            contrasts,
        }
    }

    /// Maximize every stop's contrast against the background with the
    /// greedy iterative search.
    #[must_use]
    pub fn maximize_contrast_iterative(&self, background: &Color, level: WcagLevel) -> Self {
        let colors = self
            .colors
            .iter()
            .map(|c| {
                contrast::find_maximal_contrast_iterative(
                    c,
                    background,
                    level,
                    LuminanceAxis::Lightness,
                    DEFAULT_STEP_SIZE,
                    DEFAULT_MAX_ATTEMPTS,
                )
            })
            .collect();
        Self {
            colors,
            name: format!("{}_maxcontrast", self.name),
        }
    }

    /// Maximize every stop's contrast against the background with the
    /// binary search.
    #[must_use]
    pub fn maximize_contrast_binary_search(&self, background: &Color, level: WcagLevel) -> Self {
        let colors = self
            .colors
            .iter()
            .map(|c| {
                contrast::find_maximal_contrast_binary_search(
                    c,
                    background,
                    level,
                    LuminanceAxis::Lightness,
                    DEFAULT_PRECISION,
                )
            })
            .collect();
        Self {
            colors,
            name: format!("{}_maxcontrast", self.name),
        }
    }

    /// Maximize every stop's contrast against the background with a
    /// continuous optimizer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMethod`] for an unrecognized method name.
    pub fn maximize_contrast_optimization(
        &self,
        background: &Color,
        level: WcagLevel,
        method: &str,
    ) -> Result<Self> {
        let colors = self
            .colors
            .iter()
            .map(|c| contrast::find_maximal_contrast_optimization(c, background, level, method))
            .collect::<Result<_>>()?;
        Ok(Self {
            colors,
            name: format!("{}_maxcontrast", self.name),
        })
    }
}

impl<'a> IntoIterator for &'a Gradient {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
