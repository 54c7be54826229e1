//! Loading a source image with its detected format.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::utils::{extract_filename, ImageFormat, OptimizerError, OptimizerResult};

pub type FileReader = ImageReader<BufReader<File>>;

/// Detects the codec from the file contents, not the extension.
pub fn open_reader(path: &Path) -> OptimizerResult<(FileReader, image::ImageFormat)> {
    let reader = ImageReader::open(path)
        .map_err(|e| OptimizerError::io(format!("Cannot open '{}': {e}", path.display())))?
        .with_guessed_format()?;

    let codec = reader.format().ok_or_else(|| {
        OptimizerError::format(format!("Cannot identify image file: {}", path.display()))
    })?;

    Ok((reader, codec))
}

/// A decoded PNG or JPEG together with where it came from.
pub struct SourceImage {
    pub path: PathBuf,
    pub image: DynamicImage,
    pub format: ImageFormat,
}

impl SourceImage {
    pub fn open(path: &Path) -> OptimizerResult<Self> {
        let (reader, codec) = open_reader(path)?;
        let format = ImageFormat::try_from(codec)?;
        let image = reader
            .decode()
            .map_err(|e| OptimizerError::processing(format!(
                "Failed to load '{}': {e}", path.display()
            )))?;

        debug!(
            "Loaded '{}': {}×{} {} ({:?})",
            extract_filename(path),
            image.width(),
            image.height(),
            format,
            image.color()
        );

        Ok(Self {
            path: path.to_path_buf(),
            image,
            format,
        })
    }

    pub fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_format_detected_from_contents() {
        let dir = tempfile::TempDir::new().unwrap();
        let disguised = dir.path().join("really_a_png.jpg");
        RgbImage::from_pixel(4, 4, Rgb([9, 9, 9]))
            .save_with_format(&disguised, image::ImageFormat::Png)
            .unwrap();

        let source = SourceImage::open(&disguised).unwrap();
        assert_eq!(source.format, ImageFormat::PNG);
        assert!(!source.has_alpha());
    }

    #[test]
    fn test_unidentifiable_file_is_a_format_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"definitely not pixels").unwrap();

        let err = SourceImage::open(&path).err().unwrap();
        assert!(matches!(err, OptimizerError::Format(_)));
    }

    #[test]
    fn test_corrupt_png_is_a_processing_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not pixels").unwrap();

        let err = SourceImage::open(&path).err().unwrap();
        assert!(matches!(err, OptimizerError::Processing(_)));
    }
}
