//! PNG to JPEG conversion.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::{debug, info};

use crate::processing::codec::save_image_as;
use crate::processing::source::open_reader;
use crate::utils::{extract_filename, jpeg_sibling_path, ImageFormat, OptimizerError, OptimizerResult};

/// Converts the PNG at `path` to a sibling `.jpg` and returns the new path.
///
/// Alpha is discarded, not composited. An existing file with the target name
/// is overwritten. Fails with [`OptimizerError::FormatMismatch`] when the file
/// decodes as anything other than PNG.
pub fn convert_png_to_jpeg(path: &Path, quality: u8) -> OptimizerResult<PathBuf> {
    let (reader, codec) = open_reader(path)?;
    if codec != image::ImageFormat::Png {
        let found = ImageFormat::try_from(codec)
            .map(|f| f.to_string())
            .unwrap_or_else(|_| format!("{codec:?}").to_uppercase());
        return Err(OptimizerError::format_mismatch(ImageFormat::PNG.to_string(), found));
    }

    let image = reader
        .decode()
        .map_err(|e| OptimizerError::processing(format!(
            "Failed to load '{}': {e}", path.display()
        )))?;
    debug!(
        "Converting '{}' ({}×{}, {:?}) to JPEG",
        extract_filename(path),
        image.width(),
        image.height(),
        image.color()
    );

    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    let output_path = jpeg_sibling_path(path);
    save_image_as(&rgb, &output_path, ImageFormat::JPEG, Some(quality))?;

    info!("Converted '{}' → '{}'", path.display(), output_path.display());
    Ok(output_path)
}
