//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. Gradients render as a
//! horizontal strip sampled across the width; swatches as stacked strips.

use crate::error::{Error, Result};
use crate::gradient::Gradient;
use crate::swatch::Swatch;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// PNG encoder for gradients and swatches.
pub struct PngEncoder;

impl PngEncoder {
    /// Encode a gradient strip to PNG bytes.
    ///
    /// Each pixel column is the gradient sampled at its horizontal
    /// fraction, so the strip shows the continuous interpolation.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or PNG encoding fails.
    pub fn gradient_to_bytes(gradient: &Gradient, width: u32, height: u32) -> Result<Vec<u8>> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row = Self::sample_row(gradient, width);
        let mut pixels = Vec::with_capacity(row.len() * height as usize);
        for _ in 0..height {
            pixels.extend_from_slice(&row);
        }

        Self::encode(&pixels, width, height)
    }

    /// Write a gradient strip to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid, file creation fails,
    /// or PNG encoding fails.
    pub fn write_gradient_to_file<P: AsRef<Path>>(
        gradient: &Gradient,
        width: u32,
        height: u32,
        path: P,
    ) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let bytes = Self::gradient_to_bytes(gradient, width, height)?;
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        std::io::Write::write_all(&mut writer, &bytes)?;
        Ok(())
    }

    /// Encode a swatch as vertically stacked gradient strips.
    ///
    /// # Errors
    ///
    /// Returns an error if the swatch is empty, a dimension is zero, or
    /// PNG encoding fails.
    pub fn swatch_to_bytes(swatch: &Swatch, width: u32, row_height: u32) -> Result<Vec<u8>> {
        if width == 0 || row_height == 0 {
            return Err(Error::InvalidDimensions {
                width,
                height: row_height,
            });
        }
        if swatch.is_empty() {
            return Err(Error::EmptySwatch);
        }

        let height = row_height * swatch.len() as u32;
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for gradient in swatch {
            let row = Self::sample_row(gradient, width);
            for _ in 0..row_height {
                pixels.extend_from_slice(&row);
            }
        }

        Self::encode(&pixels, width, height)
    }

    /// Write a swatch grid to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if the swatch is empty, a dimension is zero, file
    /// creation fails, or PNG encoding fails.
    pub fn write_swatch_to_file<P: AsRef<Path>>(
        swatch: &Swatch,
        width: u32,
        row_height: u32,
        path: P,
    ) -> Result<()> {
        let bytes = Self::swatch_to_bytes(swatch, width, row_height)?;
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        std::io::Write::write_all(&mut writer, &bytes)?;
        Ok(())
    }

    /// One row of RGBA pixels sampling the gradient across `width`.
    fn sample_row(gradient: &Gradient, width: u32) -> Vec<u8> {
        let mut row = Vec::with_capacity(width as usize * 4);
        let denominator = (width.saturating_sub(1)).max(1) as f64;
        for x in 0..width {
            let color = gradient.sample(f64::from(x) / denominator);
            row.extend_from_slice(&color.to_rgba8());
        }
        row
    }

    fn encode(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();

        {
            let mut encoder = png::Encoder::new(&mut buffer, width, height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(pixels)?;
        }

        Ok(buffer)
    }
}
