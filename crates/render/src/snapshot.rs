//! PNG encoding of a [`Raster`].
//!
//! Feature-gated behind `png` (default on) so the renderer can be used
//! without pulling in the `image` crate.

use sierpinski_core::FractalError;
use std::path::Path;

use crate::raster::Raster;

/// Writes a raster as a PNG file at `path`.
///
/// Returns `FractalError::InvalidDimensions` if the raster dimensions
/// overflow `u32`, or `FractalError::Io` on write failure.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), FractalError> {
    let w = u32::try_from(raster.width()).map_err(|_| FractalError::InvalidDimensions)?;
    let h = u32::try_from(raster.height()).map_err(|_| FractalError::InvalidDimensions)?;
    let img = image::RgbImage::from_raw(w, h, raster.data().to_vec())
        .ok_or_else(|| FractalError::Io("RGB buffer size mismatch".into()))?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| FractalError::Io(e.to_string()))
}
