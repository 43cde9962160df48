//! Output encoders (PNG, SVG, terminal).

mod png_encoder;
mod svg;
mod terminal;

pub use png_encoder::PngEncoder;
pub use svg::SvgEncoder;
pub use terminal::TerminalEncoder;
