//! Error types for chromamap operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in chromamap operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Color string that matches no supported format.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Color component outside the [0, 1] range.
    #[error("Color component {component} out of range: {value}")]
    ComponentOutOfRange {
        /// Which channel was out of range.
        component: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A gradient needs at least one color.
    #[error("Gradient requires at least one color")]
    EmptyGradient,

    /// A swatch operation needs at least one gradient.
    #[error("Swatch contains no gradients")]
    EmptySwatch,

    /// Invalid dimensions for rendered output.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Unrecognized optimization method name.
    #[error("Unknown optimization method: {0}")]
    UnknownMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_component_out_of_range_display() {
        let err = Error::ComponentOutOfRange {
            component: "red",
            value: 1.5,
        };
        assert!(err.to_string().contains("red"));
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_unknown_method_display() {
        let err = Error::UnknownMethod("not_a_method".to_string());
        assert!(err.to_string().contains("not_a_method"));
    }
}
