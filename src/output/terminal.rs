//! Terminal output encoder (ANSI 24-bit color).
//!
//! Renders gradients and swatches as rows of truecolor blocks for quick
//! inspection in a terminal.

use crate::gradient::Gradient;
use crate::swatch::Swatch;
use std::fmt::Write as FmtWrite;

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    /// Output width in character cells.
    width: usize,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new(40)
    }
}

impl TerminalEncoder {
    /// Create a new terminal encoder with the given cell width.
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self { width: if width == 0 { 1 } else { width } }
    }

    /// Render a gradient as one line of colored blocks.
    #[must_use]
    pub fn render_gradient(&self, gradient: &Gradient) -> String {
        let mut line = String::new();
        let denominator = (self.width.saturating_sub(1)).max(1) as f64;
        for cell in 0..self.width {
            let [r, g, b, _] = gradient.sample(cell as f64 / denominator).to_rgba8();
            let _ = write!(line, "\x1b[48;2;{r};{g};{b}m ");
        }
        line.push_str(RESET);
        line
    }

    /// Render a swatch as labeled lines, one gradient per line.
    #[must_use]
    pub fn render_swatch(&self, swatch: &Swatch) -> String {
        let label_width = swatch
            .names()
            .iter()
            .map(|n| n.len())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for gradient in swatch {
            let _ = writeln!(
                out,
                "{:label_width$}  {}",
                gradient.name(),
                self.render_gradient(gradient),
            );
        }
        out
    }
}
