//! Proportional downscaling for the resize phase.

use image::DynamicImage;
use image::imageops::FilterType;

/// Scales both sides by `factor`, truncating, with a 1 px lower bound.
pub fn scaled_dimensions(width: u32, height: u32, factor: f64) -> (u32, u32) {
    let scale = |side: u32| ((side as f64 * factor).floor() as u32).max(1);
    (scale(width), scale(height))
}

/// Shrinks `image` by `factor` using Lanczos3 resampling.
pub fn shrink_by_factor(image: &DynamicImage, factor: f64) -> DynamicImage {
    let (width, height) = scaled_dimensions(image.width(), image.height(), factor);
    image.resize_exact(width, height, FilterType::Lanczos3)
}

pub fn shorter_side(image: &DynamicImage) -> u32 {
    image.width().min(image.height())
}
