//! Image file decoding and encoding for [`PixelGrid`].

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};

use crate::error::{RasterError, Result};
use crate::raster::{PixelGrid, Rgb};

/// File-name prefix of the default output path.
pub const OUTPUT_PREFIX: &str = "anamo_";

/// Decodes an image file into a [`PixelGrid`], dropping any alpha channel.
///
/// # Errors
///
/// Returns [`RasterError::Codec`] if the file cannot be read or decoded, or
/// [`RasterError::Empty`] for a zero-sized image.
pub fn load_pixel_grid(path: &Path) -> Result<PixelGrid> {
    let img = image::open(path).map_err(RasterError::from)?.to_rgb8();
    from_rgb_image(&img)
}

/// Converts a decoded RGB image into a [`PixelGrid`].
///
/// # Errors
///
/// Returns [`RasterError::Empty`] for a zero-sized image.
pub fn from_rgb_image(img: &RgbImage) -> Result<PixelGrid> {
    let pixels = img.pixels().map(|p| Rgb::from(p.0)).collect();
    PixelGrid::from_pixels(img.width() as usize, img.height() as usize, pixels)
}

/// Converts a [`PixelGrid`] into an RGB image buffer.
///
/// # Errors
///
/// Returns [`RasterError::TooLarge`] if a dimension does not fit in `u32`.
pub fn to_rgb_image(grid: &PixelGrid) -> Result<RgbImage> {
    let too_large = || RasterError::TooLarge {
        width: grid.width(),
        height: grid.height(),
    };
    let width = u32::try_from(grid.width()).map_err(|_| too_large())?;
    let height = u32::try_from(grid.height()).map_err(|_| too_large())?;
    let raw = grid
        .pixels()
        .iter()
        .flat_map(|&c| <[u8; 3]>::from(c))
        .collect();
    RgbImage::from_raw(width, height, raw).ok_or_else(|| too_large().into())
}

/// Encodes a [`PixelGrid`] to `path`. The format follows the file extension,
/// falling back to PNG.
///
/// # Errors
///
/// Returns [`RasterError::Codec`] if encoding or writing fails.
pub fn save_pixel_grid(grid: &PixelGrid, path: &Path) -> Result<()> {
    let img = to_rgb_image(grid)?;
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    img.save_with_format(path, format).map_err(RasterError::from)?;
    Ok(())
}

/// Derives the default output path: `anamo_<name>` next to the input.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map_or_else(|| "output.png".into(), |n| n.to_string_lossy().into_owned());
    input.with_file_name(format!("{OUTPUT_PREFIX}{name}"))
}
