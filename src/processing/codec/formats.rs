//! Encoders for the two supported output formats.
//!
//! JPEG takes a quality value; PNG is always written losslessly at the best
//! compression level, so a quality value has nothing to act on.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, DynamicImage};

use crate::utils::{ImageFormat, OptimizerError};

type Result<T> = std::result::Result<T, OptimizerError>;

/// Quality used when JPEG is written without an explicit value.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// JPEG has no alpha and no 16-bit samples; everything else is flattened to RGB8.
fn jpeg_compatible(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match image.color() {
        ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(image),
        _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
    }
}

/// Encodes `image` as baseline JPEG at `quality` (clamped to 1-100).
pub fn write_jpeg<W: Write>(image: &DynamicImage, writer: &mut W, quality: u8) -> Result<()> {
    let encoder = JpegEncoder::new_with_quality(writer, quality.clamp(1, 100));
    jpeg_compatible(image)
        .write_with_encoder(encoder)
        .map_err(|e| OptimizerError::processing(format!("JPEG save failed: {e}")))
}

/// Encodes `image` as PNG with adaptive filtering and maximum compression.
pub fn write_png<W: Write>(image: &DynamicImage, writer: &mut W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
    image
        .write_with_encoder(encoder)
        .map_err(|e| OptimizerError::processing(format!("PNG save failed: {e}")))
}

/// Dispatches to the encoder for `format`.
///
/// `quality` applies to JPEG only and falls back to [`DEFAULT_JPEG_QUALITY`].
pub fn encode_into<W: Write>(
    image: &DynamicImage,
    writer: &mut W,
    format: ImageFormat,
    quality: Option<u8>,
) -> Result<()> {
    match format {
        ImageFormat::JPEG => write_jpeg(image, writer, quality.unwrap_or(DEFAULT_JPEG_QUALITY)),
        ImageFormat::PNG => write_png(image, writer),
    }
}

/// Writes `image` to `output_path`, creating or truncating the file.
pub fn save_image_as(
    image: &DynamicImage,
    output_path: &Path,
    format: ImageFormat,
    quality: Option<u8>,
) -> Result<()> {
    let file = File::create(output_path).map_err(|e| {
        OptimizerError::io(format!("Cannot create '{}': {e}", output_path.display()))
    })?;
    let mut writer = BufWriter::new(file);
    encode_into(image, &mut writer, format, quality)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        }))
    }

    #[test]
    fn test_lower_quality_encodes_smaller() {
        let image = gradient(256, 256);
        let mut high = Vec::new();
        let mut low = Vec::new();
        write_jpeg(&image, &mut high, 95).unwrap();
        write_jpeg(&image, &mut low, 20).unwrap();
        assert!(low.len() < high.len());
    }

    #[test]
    fn test_jpeg_flattens_alpha() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(32, 16, Rgba([10, 20, 30, 0])));
        let mut buf = Vec::new();
        encode_into(&image, &mut buf, ImageFormat::JPEG, Some(80)).unwrap();

        let decoded = image::load_from_memory(&buf).unwrap();
        assert_eq!(decoded.color(), ColorType::Rgb8);
        assert_eq!((decoded.width(), decoded.height()), (32, 16));
    }

    #[test]
    fn test_png_keeps_alpha_and_ignores_quality() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 128])));
        let mut a = Vec::new();
        let mut b = Vec::new();
        encode_into(&image, &mut a, ImageFormat::PNG, Some(10)).unwrap();
        encode_into(&image, &mut b, ImageFormat::PNG, Some(90)).unwrap();
        assert_eq!(a, b);

        let decoded = image::load_from_memory(&a).unwrap();
        assert!(decoded.color().has_alpha());
    }

    #[test]
    fn test_save_image_as_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.jpg");
        save_image_as(&gradient(40, 30), &path, ImageFormat::JPEG, None).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (40, 30));
    }
}
