//! Palette generation heuristics and color harmony analysis.
//!
//! Generates small palettes from a base color using classic color-wheel
//! schemes, and scores arbitrary color sets for contrast and accessibility.

use crate::color::Color;
use crate::contrast;
use crate::error::Result;

/// Color-wheel scheme for palette generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteScheme {
    /// Base plus its 180-degree complement, filled with brightness
    /// variations.
    #[default]
    Complementary,
    /// Base plus the two 120-degree companions, filled with saturation
    /// variations.
    Triadic,
    /// Hues stepped around the base (30 degrees apart, compressed for
    /// large palettes).
    Analogous,
    /// A single hue across a brightness ladder.
    Monochromatic,
    /// Base plus the hues 150 and 210 degrees away, filled with saturation
    /// variations.
    SplitComplementary,
}

/// Harmony statistics for a set of colors.
///
/// Fewer than two colors yields the all-zero analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonyAnalysis {
    /// Mean pairwise contrast ratio.
    pub average_contrast: f64,
    /// Lowest pairwise contrast ratio.
    pub min_contrast: f64,
    /// Highest pairwise contrast ratio.
    pub max_contrast: f64,
    /// Fraction of pairs meeting AA (4.5:1).
    pub accessibility_score: f64,
    /// Hues in degrees, sorted ascending.
    pub hue_distribution: Vec<f64>,
    /// (min, max) HSV saturation.
    pub saturation_range: (f64, f64),
    /// (min, max) HSV value.
    pub brightness_range: (f64, f64),
}

impl HarmonyAnalysis {
    fn degenerate() -> Self {
        Self {
            average_contrast: 0.0,
            min_contrast: 0.0,
            max_contrast: 0.0,
            accessibility_score: 0.0,
            hue_distribution: Vec::new(),
            saturation_range: (0.0, 0.0),
            brightness_range: (0.0, 0.0),
        }
    }
}

/// Generate a palette of `count` colors from a base color.
///
/// The base is always first; scheme-specific companions follow, and any
/// remaining slots are filled with brightness or saturation variations of
/// the base. The result is truncated to exactly `count` colors.
///
/// # Errors
///
/// Returns an error if a color adjustment fails numerically.
pub fn generate_palette(
    base: &Color,
    scheme: PaletteScheme,
    count: usize,
) -> Result<Vec<Color>> {
    let mut colors = vec![*base];

    match scheme {
        PaletteScheme::Complementary => {
            if count > 1 {
                colors.push(base.complementary()?);
            }
            if count > 2 {
                for i in 0..count - 2 {
                    let factor = if count > 3 {
                        0.7 + (i as f64) * 0.3 / (count - 3) as f64
                    } else {
                        0.7
                    };
                    colors.push(base.adjust_brightness(factor)?);
                }
            }
        }
        PaletteScheme::Triadic => {
            let (t1, t2) = base.triadic()?;
            colors.push(t1);
            colors.push(t2);
            if count > 3 {
                for i in 0..count - 3 {
                    let factor = if count > 4 {
                        0.6 + (i as f64) * 0.4 / (count - 4) as f64
                    } else {
                        0.6
                    };
                    colors.push(base.adjust_saturation(factor)?);
                }
            }
        }
        PaletteScheme::Analogous => {
            let step = if count <= 5 {
                30.0
            } else {
                60.0 / (count - 1) as f64
            };
            for i in 1..count {
                colors.push(base.adjust_hue(step * i as f64)?);
            }
        }
        PaletteScheme::Monochromatic => {
            for i in 1..count {
                let factor = 0.3 + (i as f64) * 0.7 / (count - 1) as f64;
                colors.push(base.adjust_brightness(factor)?);
            }
        }
        PaletteScheme::SplitComplementary => {
            if count > 1 {
                colors.push(base.adjust_hue(150.0)?);
            }
            if count > 2 {
                colors.push(base.adjust_hue(210.0)?);
            }
            if count > 3 {
                for i in 0..count - 3 {
                    let factor = if count > 4 {
                        0.5 + (i as f64) * 0.5 / (count - 4) as f64
                    } else {
                        0.5
                    };
                    colors.push(base.adjust_saturation(factor)?);
                }
            }
        }
    }

    colors.truncate(count);
    Ok(colors)
}

/// Analyze the harmony of a color set.
///
/// Computes pairwise contrast statistics, the fraction of AA-accessible
/// pairs, and the hue/saturation/brightness spread.
#[must_use]
pub fn analyze_harmony(colors: &[Color]) -> HarmonyAnalysis {
    if colors.len() < 2 {
        return HarmonyAnalysis::degenerate();
    }

    let mut contrasts = Vec::new();
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            contrasts.push(contrast::contrast_ratio(a, b));
        }
    }

    let accessible = contrasts.iter().filter(|&&c| c >= 4.5).count();

    let mut hues: Vec<f64> = colors.iter().map(|c| c.hsv().0).collect();
    hues.sort_by(f64::total_cmp);

    let saturations: Vec<f64> = colors.iter().map(|c| c.hsv().1).collect();
    let values: Vec<f64> = colors.iter().map(|c| c.hsv().2).collect();
    let range = |xs: &[f64]| {
        (
            xs.iter().copied().fold(f64::INFINITY, f64::min),
            xs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        )
    };

    HarmonyAnalysis {
        average_contrast: contrasts.iter().sum::<f64>() / contrasts.len() as f64,
        min_contrast: contrasts.iter().copied().fold(f64::INFINITY, f64::min),
        max_contrast: contrasts.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        accessibility_score: accessible as f64 / contrasts.len() as f64,
        hue_distribution: hues,
        saturation_range: range(&saturations),
        brightness_range: range(&values),
    }
}
