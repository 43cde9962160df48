//! # Chromamap
//!
//! Color-space manipulation, gradients, palettes, and WCAG
//! accessibility-contrast optimization.
//!
//! The crate centers on an immutable [`Color`](color::Color) value with
//! validated construction and HSV/HSL adjustment primitives, and a contrast
//! subsystem offering four search strategies for pushing a color toward (or
//! past) the WCAG AA/AAA contrast thresholds against a target. Around that
//! core sit gradient and swatch containers, palette-generation heuristics, a
//! built-in colormap catalog, and PNG/SVG/terminal renderers.
//!
//! ## Quick Start
//!
//! ```rust
//! use chromamap::prelude::*;
//!
//! let gray: Color = "#888888".parse().expect("valid color");
//! let white = Color::WHITE;
//!
//! // Not enough contrast for body text...
//! assert!(!is_accessible(&gray, &white, WcagLevel::Aa));
//!
//! // ...so darken it until it passes.
//! let fixed = find_accessible_color(&gray, &white, WcagLevel::Aa, LuminanceAxis::Lightness);
//! assert!(contrast_ratio(&fixed, &white) >= 4.5);
//! ```
//!
//! ## Strategy trade-offs
//!
//! - [`find_accessible_color`](contrast::find_accessible_color) stops at the
//!   threshold: cheapest, smallest color change.
//! - [`find_maximal_contrast_iterative`](contrast::find_maximal_contrast_iterative)
//!   greedily climbs both directions with a fixed step.
//! - [`find_maximal_contrast_binary_search`](contrast::find_maximal_contrast_binary_search)
//!   bisects a factor interval per direction.
//! - [`find_maximal_contrast_optimization`](contrast::find_maximal_contrast_optimization)
//!   runs a continuous optimizer over the factor interval.
//!
//! None guarantees a global optimum; all are deterministic, pure, and
//! single-threaded.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in color code
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and color space conversions.
pub mod color;

/// WCAG contrast engine and contrast-maximization searches.
pub mod contrast;

// ============================================================================
// Container Modules
// ============================================================================

/// Gradient container with sampling and resampling.
pub mod gradient;

/// Swatch: a collection of gradients.
pub mod swatch;

// ============================================================================
// Analysis and Catalog Modules
// ============================================================================

/// Palette generation heuristics and harmony analysis.
pub mod palette;

/// Built-in colormap registry.
pub mod catalog;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Output encoders (PNG, SVG, terminal).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for chromamap operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use chromamap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::{catalog, Catalog};
    pub use crate::color::Color;
    pub use crate::contrast::{
        contrast_ratio, find_accessible_color, find_maximal_contrast_binary_search,
        find_maximal_contrast_iterative, find_maximal_contrast_optimization, is_accessible,
        relative_luminance, LuminanceAxis, OptimizationMethod, WcagLevel,
    };
    pub use crate::error::{Error, Result};
    pub use crate::gradient::{ContrastAnalysis, Gradient};
    pub use crate::output::{PngEncoder, SvgEncoder, TerminalEncoder};
    pub use crate::palette::{analyze_harmony, generate_palette, HarmonyAnalysis, PaletteScheme};
    pub use crate::swatch::Swatch;
}
