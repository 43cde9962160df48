//! WCAG contrast engine and contrast-maximization searches.
//!
//! Implements the WCAG 2.1 relative-luminance contrast ratio and four
//! strategies for adjusting a color along a luminance axis against a fixed
//! target: a threshold search that stops at AA/AAA, a greedy bidirectional
//! hill-climb, a per-direction binary search, and two continuous optimizers
//! (golden-section and numerical-gradient ascent).
//!
//! The strategies trade solution quality for cost and none guarantees a
//! global optimum; all are deterministic and single-shot.
//!
//! # References
//!
//! - W3C. *Web Content Accessibility Guidelines (WCAG) 2.1*, success
//!   criterion 1.4.3 (contrast minimum).
//! - Kiefer, J. (1953). "Sequential minimax search for a maximum."
//!   *Proceedings of the AMS* (golden-section search).

use crate::color::Color;
use crate::error::{Error, Result};
use std::str::FromStr;

/// Default step size for the iterative search.
pub const DEFAULT_STEP_SIZE: f64 = 0.1;

/// Default attempt cap shared by the threshold and iterative searches.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;

/// Default interval precision for the binary search.
pub const DEFAULT_PRECISION: f64 = 0.001;

/// Factor cap when lightening in the threshold search.
const LIGHTEN_FACTOR_CAP: f64 = 2.0;

/// Factor floor when darkening in the threshold search.
const DARKEN_FACTOR_FLOOR: f64 = 0.1;

/// Golden-section search bounds and tolerance.
const OPT_LOWER_BOUND: f64 = 0.1;
const OPT_UPPER_BOUND: f64 = 3.0;
const GOLDEN_TOLERANCE: f64 = 1e-5;

/// Gradient-ascent parameters.
const ASCENT_ITERATIONS: u32 = 100;
const ASCENT_EPSILON: f64 = 1e-6;
const ASCENT_IMPROVEMENT_TOLERANCE: f64 = 1e-6;

/// WCAG conformance level for contrast requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WcagLevel {
    /// Level AA: contrast ratio of at least 4.5:1.
    #[default]
    Aa,
    /// Level AAA: contrast ratio of at least 7:1.
    Aaa,
}

impl WcagLevel {
    /// The minimum contrast ratio this level requires.
    #[must_use]
    pub const fn required_ratio(self) -> f64 {
        match self {
            Self::Aa => 4.5,
            Self::Aaa => 7.0,
        }
    }

    /// Map a level label to a level.
    ///
    /// `"AAA"` selects [`WcagLevel::Aaa`]; any other label falls back to
    /// [`WcagLevel::Aa`]. The fallback is defined behavior, not an error.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == "AAA" {
            Self::Aaa
        } else {
            Self::Aa
        }
    }
}

/// Which brightness axis an adjustment strategy moves along.
///
/// HSL lightness and HSV value are different decompositions of the same RGB
/// cube, and the two axes reach different colors for the same factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LuminanceAxis {
    /// Scale HSL lightness.
    #[default]
    Lightness,
    /// Scale HSV value (brightness).
    Brightness,
}

impl LuminanceAxis {
    /// Apply this axis's adjustment primitive with the given factor.
    fn adjust(self, color: &Color, factor: f64) -> Result<Color> {
        match self {
            Self::Lightness => color.adjust_lightness(factor),
            Self::Brightness => color.adjust_brightness(factor),
        }
    }
}

/// Optimization method for [`find_maximal_contrast_optimization`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationMethod {
    /// Derivative-free golden-section maximization over the factor interval.
    GoldenSection,
    /// Numerical-gradient ascent with learning-rate decay.
    GradientDescent,
}

impl FromStr for OptimizationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "golden_section" => Ok(Self::GoldenSection),
            "gradient_descent" => Ok(Self::GradientDescent),
            other => Err(Error::UnknownMethod(other.to_string())),
        }
    }
}

/// Relative luminance of a color per WCAG 2.1, in [0, 1].
#[must_use]
pub fn relative_luminance(color: &Color) -> f64 {
    color.luminance()
}

/// WCAG 2.1 contrast ratio between two colors, in [1, 21].
///
/// Computed as `(L_light + 0.05) / (L_dark + 0.05)`; symmetric in its
/// arguments. Identical colors yield exactly 1.0, black versus white exactly
/// 21.0.
#[must_use]
pub fn contrast_ratio(c1: &Color, c2: &Color) -> f64 {
    let l1 = c1.luminance();
    let l2 = c2.luminance();
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether two colors meet the given WCAG level.
#[must_use]
pub fn is_accessible(c1: &Color, c2: &Color, level: WcagLevel) -> bool {
    contrast_ratio(c1, c2) >= level.required_ratio()
}

/// Adjust `base` along the given axis until it meets `level` against
/// `target`.
///
/// If the base already meets the level it is returned unchanged. Otherwise
/// the direction is chosen by luminance (lighter than the target: lighten
/// with factor 1.1 up to a compounded cap of 2.0; darker: darken with factor
/// 0.9 down to a compounded floor of 0.1) and the fixed per-step factor is
/// applied to the *current* color, compounding, for at most 50 attempts.
///
/// Always returns a color. If the threshold is unreachable within the
/// bounds, or an adjustment fails numerically mid-search, the closest color
/// reached is returned — a silent degrade, not an error.
#[must_use]
pub fn find_accessible_color(
    base: &Color,
    target: &Color,
    level: WcagLevel,
    axis: LuminanceAxis,
) -> Color {
    let required = level.required_ratio();
    if contrast_ratio(base, target) >= required {
        return *base;
    }

    let lighten = base.luminance() > target.luminance();
    let factor = if lighten { 1.1 } else { 0.9 };

    let mut current = *base;
    let mut compounded = 1.0;

    for _ in 0..DEFAULT_MAX_ATTEMPTS {
        if contrast_ratio(&current, target) >= required {
            break;
        }
        let Ok(next) = axis.adjust(&current, factor) else {
            break;
        };
        current = next;
        compounded *= factor;

        // The compounded factor is the loop's secondary bound.
        if lighten && compounded >= LIGHTEN_FACTOR_CAP {
            break;
        }
        if !lighten && compounded <= DARKEN_FACTOR_FLOOR {
            break;
        }
    }

    current
}

/// Greedy bidirectional hill-climb for maximal contrast.
///
/// Explores lightening (factor `1 + step_size`) and darkening (factor
/// `1 - step_size`) from the base, compounding on a direction-local current
/// color. A step is accepted only if it strictly improves on the best
/// contrast seen so far; the first non-improving step ends that direction.
/// Numeric failures end the direction silently.
///
/// `_level` is accepted for signature parity across the strategies; the
/// climb has no hard stop at the required ratio.
///
/// Returns the best color found, which may be the unmodified base.
#[must_use]
pub fn find_maximal_contrast_iterative(
    base: &Color,
    target: &Color,
    _level: WcagLevel,
    axis: LuminanceAxis,
    step_size: f64,
    max_attempts: u32,
) -> Color {
    let mut best = *base;
    let mut best_contrast = contrast_ratio(base, target);

    for direction in [1.0, -1.0] {
        let factor = 1.0 + direction * step_size;
        let mut current = *base;

        for _ in 0..max_attempts {
            let Ok(next) = axis.adjust(&current, factor) else {
                break;
            };
            let next_contrast = contrast_ratio(&next, target);
            if next_contrast > best_contrast {
                best_contrast = next_contrast;
                best = next;
                current = next;
            } else {
                break;
            }
        }
    }

    best
}

/// Per-direction binary search for maximal contrast.
///
/// Searches the factor interval [1.0, 3.0] for lightening and [0.1, 1.0]
/// for darkening, always evaluating candidates from the base (not
/// compounding). Every probe updates a global best by achieved contrast;
/// the interval is narrowed using the level's threshold test as the
/// bisection predicate.
///
/// The predicate assumes contrast responds monotonically to the factor
/// within each interval. That holds for most color/target pairs but is not
/// guaranteed; when it fails the search may settle short of the true
/// maximum. The best-tracking still makes the result no worse than the
/// base.
#[must_use]
pub fn find_maximal_contrast_binary_search(
    base: &Color,
    target: &Color,
    level: WcagLevel,
    axis: LuminanceAxis,
    precision: f64,
) -> Color {
    let required = level.required_ratio();
    let mut best = *base;
    let mut best_contrast = contrast_ratio(base, target);

    for lighten in [true, false] {
        let (mut low, mut high) = if lighten { (1.0, 3.0) } else { (0.1, 1.0) };

        while high - low > precision {
            let mid = (low + high) / 2.0;
            let Ok(candidate) = axis.adjust(base, mid) else {
                break;
            };
            let candidate_contrast = contrast_ratio(&candidate, target);

            if candidate_contrast > best_contrast {
                best_contrast = candidate_contrast;
                best = candidate;
            }

            // Lighter direction: push the lower bound while the threshold
            // holds. Darker direction: the mirror image.
            let meets = candidate_contrast >= required;
            if lighten == meets {
                low = mid;
            } else {
                high = mid;
            }
        }
    }

    best
}

/// Continuous optimization of the contrast objective.
///
/// The objective for a scalar factor is the better contrast of the
/// lightness-scaled and brightness-scaled candidates against the target; a
/// numeric failure scores 0.0 and never surfaces. `method` selects
/// `"golden_section"` (bracketing search over [0.1, 3.0], tolerance 1e-5)
/// or `"gradient_descent"` (central-difference ascent from factor 1.0).
/// Both finish by re-evaluating the winning factor under both axes and
/// returning the better candidate; if even that candidate scores below the
/// unmodified base (possible when the optimizer converges onto a clamped
/// plateau), the base is returned instead, so the result is never worse
/// than the input.
///
/// # Errors
///
/// Returns [`Error::UnknownMethod`] for an unrecognized method name — the
/// one case that is treated as caller misuse rather than a data condition.
pub fn find_maximal_contrast_optimization(
    base: &Color,
    target: &Color,
    _level: WcagLevel,
    method: &str,
) -> Result<Color> {
    let method: OptimizationMethod = method.parse()?;

    let objective = |factor: f64| -> f64 {
        let lightness = base
            .adjust_lightness(factor)
            .map_or(0.0, |c| contrast_ratio(&c, target));
        let brightness = base
            .adjust_brightness(factor)
            .map_or(0.0, |c| contrast_ratio(&c, target));
        lightness.max(brightness)
    };

    let best_factor = match method {
        OptimizationMethod::GoldenSection => {
            golden_section_max(&objective, OPT_LOWER_BOUND, OPT_UPPER_BOUND, GOLDEN_TOLERANCE)
        }
        OptimizationMethod::GradientDescent => gradient_ascent(&objective, 1.0, 0.1),
    };

    // The objective collapsed both axes into one score; resolve the winner.
    let lightness = base.adjust_lightness(best_factor);
    let brightness = base.adjust_brightness(best_factor);
    let winner = match (lightness, brightness) {
        (Ok(l), Ok(b)) => {
            if contrast_ratio(&l, target) > contrast_ratio(&b, target) {
                l
            } else {
                b
            }
        }
        (Ok(l), Err(_)) => l,
        (Err(_), Ok(b)) => b,
        (Err(_), Err(_)) => *base,
    };

    if contrast_ratio(&winner, target) >= contrast_ratio(base, target) {
        Ok(winner)
    } else {
        Ok(*base)
    }
}

/// Golden-section maximization over [a, b].
///
/// Tracks the best probe seen across all iterations rather than trusting
/// the final bracket: the bracket width shrinking does not guarantee the
/// optimum sits at its center.
fn golden_section_max(objective: &dyn Fn(f64) -> f64, a: f64, b: f64, tolerance: f64) -> f64 {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let resphi = 2.0 - phi;

    let (mut a, mut b) = (a, b);
    let mut x1 = a + resphi * (b - a);
    let mut x2 = a + (1.0 - resphi) * (b - a);
    let mut f1 = objective(x1);
    let mut f2 = objective(x2);

    let (mut best_factor, mut best_value) = if f1 > f2 { (x1, f1) } else { (x2, f2) };

    while (b - a).abs() > tolerance {
        if f1 > f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = a + resphi * (b - a);
            f1 = objective(x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = a + (1.0 - resphi) * (b - a);
            f2 = objective(x2);
        }

        let (factor, value) = if f1 > f2 { (x1, f1) } else { (x2, f2) };
        if value > best_value {
            best_value = value;
            best_factor = factor;
        }
    }

    best_factor
}

/// Numerical-gradient ascent with learning-rate decay.
///
/// Estimates the derivative by central finite difference and takes an
/// ascent step; a non-improving step decays the learning rate by 0.9
/// instead of moving. Stops after 100 iterations or once the step lands
/// within 1e-6 of the best objective value.
fn gradient_ascent(objective: &dyn Fn(f64) -> f64, start: f64, initial_rate: f64) -> f64 {
    let mut factor = start;
    let mut learning_rate = initial_rate;
    let mut best_factor = factor;
    let mut best_value = objective(factor);

    for _ in 0..ASCENT_ITERATIONS {
        let gradient = (objective(factor + ASCENT_EPSILON)
            - objective(factor - ASCENT_EPSILON))
            / (2.0 * ASCENT_EPSILON);

        let candidate = factor + learning_rate * gradient;
        let value = objective(candidate);
        let improvement = value - best_value;

        if value > best_value {
            best_value = value;
            best_factor = candidate;
            factor = candidate;
        } else {
            learning_rate *= 0.9;
        }

        if improvement.abs() < ASCENT_IMPROVEMENT_TOLERANCE {
            break;
        }
    }

    best_factor
}
