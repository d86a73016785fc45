use std::fs::File;
use std::path::Path;

use patchblend_color::Rgba;
use png::{BitDepth, ColorType, Encoder};

use crate::error::IoError;
use crate::render::{render_rgba8, ImageSize};

/// Writes the given RGBA8 buffer to the given file path as a PNG.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `size` - The image size in pixels.
/// - `data` - The row-major RGBA8 pixel data, `width * height * 4` bytes.
pub fn write_image_png_rgba8(
    file_path: impl AsRef<Path>,
    size: ImageSize,
    data: &[u8],
) -> Result<(), IoError> {
    // check before touching the filesystem so a bad size leaves no file
    let width = u32::try_from(size.width)
        .map_err(|_| IoError::InvalidImageSize(size.width, size.height))?;
    let height = u32::try_from(size.height)
        .map_err(|_| IoError::InvalidImageSize(size.width, size.height))?;

    let file = File::create(file_path)?;

    let mut encoder = Encoder::new(file, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(data)
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    Ok(())
}

/// Renders a per-pixel color producer and writes the result as a PNG.
///
/// The whole image is rasterized in memory before any bytes reach the
/// file, so a failing producer never leaves a partially written image
/// behind.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `size` - The image size in pixels.
/// - `pixel_fn` - The color producer, called once per pixel.
pub fn render_image_png_rgba8<F>(
    file_path: impl AsRef<Path>,
    size: ImageSize,
    pixel_fn: F,
) -> Result<(), IoError>
where
    F: Fn(usize, usize) -> Rgba + Sync,
{
    let buf = render_rgba8(size, pixel_fn);
    write_image_png_rgba8(file_path, size, &buf)
}
