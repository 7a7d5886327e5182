//! RGB8 pixel canvas the renderer plots points into.
//!
//! A `Raster` stores `width * height` pixels in row-major order, three bytes
//! per pixel, with `(0, 0)` at the top-left corner.

use sierpinski_core::{FractalError, Srgb};

/// A fixed-size RGB8 image buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Creates a raster filled with `background`.
    ///
    /// Returns `FractalError::InvalidDimensions` if either dimension is zero
    /// or if the byte length overflows `usize`.
    pub fn new(width: usize, height: usize, background: Srgb) -> Result<Self, FractalError> {
        if width == 0 || height == 0 {
            return Err(FractalError::InvalidDimensions);
        }
        let pixels = width
            .checked_mul(height)
            .ok_or(FractalError::InvalidDimensions)?;
        pixels
            .checked_mul(3)
            .ok_or(FractalError::InvalidDimensions)?;
        let bg = background.to_rgb8();
        Ok(Self {
            width,
            height,
            data: bg.repeat(pixels),
        })
    }

    /// Raster width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the row-major RGB bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the raster, returning its RGB bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the raster.
    pub fn get(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        let i = self.offset(x, y)?;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Sets the pixel at `(x, y)`. Writes outside the raster are ignored.
    pub fn put(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + 3].copy_from_slice(&rgb);
        }
    }

    /// Number of pixels whose color equals `rgb`.
    pub fn count(&self, rgb: [u8; 3]) -> usize {
        self.data.chunks_exact(3).filter(|px| *px == rgb).count()
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| (y * self.width + x) * 3)
    }
}
