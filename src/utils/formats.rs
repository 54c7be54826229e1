use serde::{Deserialize, Serialize};
use std::fmt;
use crate::utils::OptimizerError;

/// The two formats the optimizer reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    JPEG,
    PNG,
}

impl ImageFormat {
    /// Whether the encoder exposes a quality knob.
    ///
    /// PNG is lossless, so a quality value would be ignored.
    pub fn supports_quality(&self) -> bool {
        matches!(self, Self::JPEG)
    }

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// Get the primary extension for this format
    pub fn primary_extension(&self) -> &str {
        self.extensions()[0]
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JPEG => f.write_str("JPEG"),
            Self::PNG => f.write_str("PNG"),
        }
    }
}

impl TryFrom<image::ImageFormat> for ImageFormat {
    type Error = OptimizerError;

    fn try_from(format: image::ImageFormat) -> Result<Self, Self::Error> {
        match format {
            image::ImageFormat::Jpeg => Ok(Self::JPEG),
            image::ImageFormat::Png => Ok(Self::PNG),
            other => Err(OptimizerError::format(format!(
                "Unsupported image format: {:?}", other
            ))),
        }
    }
}

/// Check whether a path names a PNG by its extension alone (case-insensitive).
pub fn has_png_extension(path: &str) -> bool {
    std::path::Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| ImageFormat::PNG.matches_extension(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_matching() {
        assert!(ImageFormat::JPEG.matches_extension("JPG"));
        assert!(ImageFormat::JPEG.matches_extension("jpeg"));
        assert!(!ImageFormat::JPEG.matches_extension("png"));
        assert_eq!(ImageFormat::PNG.primary_extension(), "png");
    }

    #[test]
    fn test_codec_mapping() {
        assert_eq!(
            ImageFormat::try_from(image::ImageFormat::Png).unwrap(),
            ImageFormat::PNG
        );
        assert!(ImageFormat::try_from(image::ImageFormat::Gif).is_err());
    }

    #[test]
    fn test_png_extension_check() {
        assert!(has_png_extension("/tmp/photo.PNG"));
        assert!(has_png_extension("shot.png"));
        assert!(!has_png_extension("shot.jpg"));
        assert!(!has_png_extension("png"));
    }

    #[test]
    fn test_only_jpeg_has_quality() {
        assert!(ImageFormat::JPEG.supports_quality());
        assert!(!ImageFormat::PNG.supports_quality());
    }
}
