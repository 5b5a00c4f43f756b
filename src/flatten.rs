//! Image flattening: pixels to a printable character string.
//!
//! Each pixel is reduced to the truncated mean of its R, G and B channels,
//! then mapped into printable ASCII (33..=126). Pixels are visited in
//! row-major order, so the same image always flattens to the same text.

use std::path::Path;

use image::RgbImage;

use crate::error::{Error, Result};

/// Number of printable ASCII characters targeted by [`to_printable`].
pub const PRINTABLE_SPAN: u8 = 94;

/// First printable ASCII character (`!`).
pub const PRINTABLE_START: u8 = 33;

/// Iterate over per-pixel intensities of a packed RGB buffer.
///
/// Intensity is `(r + g + b) / 3` with integer division. Trailing bytes
/// that do not form a full pixel are ignored.
pub fn pixel_intensities(rgb: &[u8]) -> impl Iterator<Item = u8> + '_ {
    rgb.chunks_exact(3).map(|px| {
        let sum = px[0] as u16 + px[1] as u16 + px[2] as u16;
        (sum / 3) as u8
    })
}

/// Map an intensity onto a printable ASCII character.
pub fn to_printable(intensity: u8) -> char {
    char::from(intensity % PRINTABLE_SPAN + PRINTABLE_START)
}

/// Flatten a packed RGB buffer into printable text, one char per pixel.
pub fn flatten_pixels(rgb: &[u8]) -> String {
    pixel_intensities(rgb).map(to_printable).collect()
}

/// Open and decode an image, converting it to 8-bit RGB.
///
/// Alpha is dropped; grayscale and 16-bit images are widened or narrowed
/// to RGB8. The underlying file is closed before this returns.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|source| Error::ImageRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.into_rgb8())
}

/// Load an image from disk and flatten it.
pub fn flatten_image(path: &Path) -> Result<String> {
    let rgb = load_rgb(path)?;
    log::debug!(
        "Decoded {} ({}x{}, {} pixels)",
        path.display(),
        rgb.width(),
        rgb.height(),
        rgb.width() as u64 * rgb.height() as u64
    );
    Ok(flatten_pixels(rgb.as_raw()))
}
