//! Source image decoding and mosaic export

use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use std::path::Path;

/// Decode an image file into an 8-bit RGB canvas
///
/// Images with alpha, palettes or 16-bit channels go through the `image`
/// crate's RGB8 conversion; alpha is dropped, not composited.
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_source_canvas(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Write a rendered canvas, inferring the format from the path extension
///
/// The parent directory must already exist.
///
/// # Errors
///
/// Returns `ImageExport` if the format is unknown or the file cannot be written
pub fn save_canvas(canvas: &RgbImage, path: &Path) -> Result<()> {
    canvas.save(path).map_err(|e| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
