//! Swatch: a collection of gradients operated on as a unit.

use crate::color::Color;
use crate::contrast::WcagLevel;
use crate::error::Result;
use crate::gradient::{ContrastAnalysis, Gradient};

/// Default cap on the number of stops shown per gradient when rendering.
pub const DEFAULT_MAX_DISPLAY: usize = 32;

/// A collection of gradients.
///
/// Elementwise operations apply to every contained gradient and return a
/// new swatch; the collection itself is never mutated in place except by
/// [`Swatch::append`].
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    gradients: Vec<Gradient>,
    max_display: usize,
}

/// Aggregated contrast statistics for a swatch against a background.
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchContrastAnalysis {
    /// Per-gradient analyses, in gradient order.
    pub per_gradient: Vec<ContrastAnalysis>,
    /// Mean contrast ratio across every stop of every gradient.
    pub average_contrast: f64,
    /// Lowest contrast ratio across the swatch.
    pub min_contrast: f64,
    /// Highest contrast ratio across the swatch.
    pub max_contrast: f64,
    /// Fraction of all stops meeting AA.
    pub aa_score: f64,
}

impl Swatch {
    /// Create a swatch from gradients.
    #[must_use]
    pub fn new(gradients: Vec<Gradient>) -> Self {
        Self {
            gradients,
            max_display: DEFAULT_MAX_DISPLAY,
        }
    }

    /// A copy with a different per-gradient display cap.
    #[must_use]
    pub fn with_max(&self, max_display: usize) -> Self {
        Self {
            gradients: self.gradients.clone(),
            max_display,
        }
    }

    /// The per-gradient display cap.
    #[must_use]
    pub const fn max_display(&self) -> usize {
        self.max_display
    }

    /// The contained gradients, in order.
    #[must_use]
    pub fn gradients(&self) -> &[Gradient] {
        &self.gradients
    }

    /// Number of gradients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.gradients.len()
    }

    /// Whether the swatch contains no gradients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gradients.is_empty()
    }

    /// Iterate over the gradients.
    pub fn iter(&self) -> std::slice::Iter<'_, Gradient> {
        self.gradients.iter()
    }

    /// Gradient names, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.gradients.iter().map(Gradient::name).collect()
    }

    /// Look up a gradient by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Gradient> {
        self.gradients.iter().find(|g| g.name() == name)
    }

    /// Add a gradient.
    pub fn append(&mut self, gradient: Gradient) {
        self.gradients.push(gradient);
    }

    /// Rotate every gradient's hues by `degrees`.
    ///
    /// # Errors
    ///
    /// Returns an error if any color's HSV round trip fails.
    pub fn adjust_hue(&self, degrees: f64) -> Result<Self> {
        self.map(|g| g.adjust_hue(degrees))
    }

    /// Scale every gradient's saturations by `factor`.
    ///
    /// # Errors
    ///
    /// Returns an error if any color's HSV round trip fails.
    pub fn adjust_saturation(&self, factor: f64) -> Result<Self> {
        self.map(|g| g.adjust_saturation(factor))
    }

    /// Scale every gradient's brightness by `factor`.
    ///
    /// # Errors
    ///
    /// Returns an error if any color's HSV round trip fails.
    pub fn adjust_brightness(&self, factor: f64) -> Result<Self> {
        self.map(|g| g.adjust_brightness(factor))
    }

    /// Scale every gradient's lightness by `factor`.
    ///
    /// # Errors
    ///
    /// Returns an error if any color's HSL round trip fails.
    pub fn adjust_lightness(&self, factor: f64) -> Result<Self> {
        self.map(|g| g.adjust_lightness(factor))
    }

    /// The complementary swatch.
    ///
    /// # Errors
    ///
    /// Returns an error if any color's HSV round trip fails.
    pub fn complementary(&self) -> Result<Self> {
        self.map(Gradient::complementary)
    }

    /// Make every gradient accessible against the background.
    #[must_use]
    pub fn make_accessible(&self, background: &Color, level: WcagLevel) -> Self {
        Self {
            gradients: self
                .gradients
                .iter()
                .map(|g| g.make_accessible(background, level))
                .collect(),
            max_display: self.max_display,
        }
    }

    /// Maximize contrast for every gradient with the iterative search.
    #[must_use]
    pub fn maximize_contrast_iterative(&self, background: &Color, level: WcagLevel) -> Self {
        Self {
            gradients: self
                .gradients
                .iter()
                .map(|g| g.maximize_contrast_iterative(background, level))
                .collect(),
            max_display: self.max_display,
        }
    }

    /// Maximize contrast for every gradient with the binary search.
    #[must_use]
    pub fn maximize_contrast_binary_search(&self, background: &Color, level: WcagLevel) -> Self {
        Self {
            gradients: self
                .gradients
                .iter()
                .map(|g| g.maximize_contrast_binary_search(background, level))
                .collect(),
            max_display: self.max_display,
        }
    }

    /// Maximize contrast for every gradient with a continuous optimizer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownMethod`] for an unrecognized method.
    pub fn maximize_contrast_optimization(
        &self,
        background: &Color,
        level: WcagLevel,
        method: &str,
    ) -> Result<Self> {
        self.map(|g| g.maximize_contrast_optimization(background, level, method))
    }

    /// Aggregated contrast statistics against a background.
    ///
    /// Returns `None` for an empty swatch.
    #[must_use]
    pub fn analyze_contrast(&self, background: &Color) -> Option<SwatchContrastAnalysis> {
        if self.gradients.is_empty() {
            return None;
        }

        let per_gradient: Vec<ContrastAnalysis> = self
            .gradients
            .iter()
            .map(|g| g.analyze_contrast(background))
            .collect();

        let all: Vec<f64> = per_gradient
            .iter()
            .flat_map(|a| a.contrasts.iter().copied())
            .collect();
        let total = all.len();
        let accessible = all.iter().filter(|&&c| c >= 4.5).count();

        Some(SwatchContrastAnalysis {
            average_contrast: all.iter().sum::<f64>() / total as f64,
            min_contrast: all.iter().copied().fold(f64::INFINITY, f64::min),
            max_contrast: all.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            aa_score: accessible as f64 / total as f64,
            per_gradient,
        })
    }

    fn map(&self, op: impl Fn(&Gradient) -> Result<Gradient>) -> Result<Self> {
        Ok(Self {
            gradients: self.gradients.iter().map(op).collect::<Result<_>>()?,
            max_display: self.max_display,
        })
    }
}

impl<'a> IntoIterator for &'a Swatch {
    type Item = &'a Gradient;
    type IntoIter = std::slice::Iter<'a, Gradient>;

    fn into_iter(self) -> Self::IntoIter {
        self.gradients.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_swatch() -> Swatch {
        Swatch::new(vec![
            Gradient::from_strs(&["#ff0000", "#00ff00"], "warm").expect("valid"),
            Gradient::from_strs(&["#000000", "#ffffff"], "grays").expect("valid"),
        ])
    }

    #[test]
    fn test_names_and_get() {
        let swatch = sample_swatch();
        assert_eq!(swatch.names(), vec!["warm", "grays"]);
        assert!(swatch.get("grays").is_some());
        assert!(swatch.get("missing").is_none());
    }

    #[test]
    fn test_append_grows() {
        let mut swatch = sample_swatch();
        swatch.append(Gradient::from_strs(&["#0000ff"], "blue").expect("valid"));
        assert_eq!(swatch.len(), 3);
    }

    #[test]
    fn test_with_max() {
        let swatch = sample_swatch().with_max(8);
        assert_eq!(swatch.max_display(), 8);
        assert_eq!(swatch.len(), 2);
    }

    #[test]
    fn test_adjust_hue_applies_to_all() {
        let shifted = sample_swatch().adjust_hue(180.0).expect("valid rotation");
        assert_eq!(shifted.gradients()[0].hex_colors()[0], "#00ffff");
    }

    #[test]
    fn test_make_accessible_all_gradients() {
        let pale = Swatch::new(vec![
            Gradient::from_strs(&["#ffcccc"], "pink").expect("valid"),
            Gradient::from_strs(&["#ccffcc"], "mint").expect("valid"),
        ]);
        let accessible = pale.make_accessible(&Color::WHITE, WcagLevel::Aa);
        for gradient in &accessible {
            for color in gradient {
                assert!(color.contrast_ratio(&Color::WHITE) >= 4.5);
            }
        }
    }

    #[test]
    fn test_analyze_contrast_aggregates() {
        let analysis = sample_swatch()
            .analyze_contrast(&Color::WHITE)
            .expect("non-empty swatch");
        assert_eq!(analysis.per_gradient.len(), 2);
        assert_relative_eq!(analysis.max_contrast, 21.0, epsilon = 1e-6);
        assert_relative_eq!(analysis.min_contrast, 1.0);
    }

    #[test]
    fn test_analyze_contrast_empty_is_none() {
        assert!(Swatch::new(vec![]).analyze_contrast(&Color::WHITE).is_none());
    }

    #[test]
    fn test_maximize_contrast_optimization_bad_method() {
        assert!(sample_swatch()
            .maximize_contrast_optimization(&Color::WHITE, WcagLevel::Aa, "nope")
            .is_err());
    }
}
