//! Fits an image under a byte budget.
//!
//! The search runs in strict order and never backtracks:
//!
//! 1. Format normalization: an opaque PNG is treated as JPEG unless the caller
//!    asks to keep the format. PNGs with alpha always stay PNG.
//! 2. Quality search: full resolution, quality stepped down from the start value
//!    while it stays above the floor. Lossless targets get a single measurement.
//! 3. Resize search: only if still over budget. Restarts from full resolution and
//!    shrinks by a compounding factor, encoding at the quality the search ended on,
//!    until the budget is met or the shorter side reaches the floor.
//!
//! Reaching the dimension floor is not an error; the best effort is written.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::{debug, info};

use crate::core::{OptimizedOutput, SearchSettings, TargetBudget};
use crate::processing::codec::{save_image_as, shorter_side, shrink_by_factor};
use crate::processing::scratch::ScratchFile;
use crate::processing::source::SourceImage;
use crate::utils::{
    bytes_to_kb, extract_filename, get_file_size, jpeg_sibling_path, parent_dir,
    prefixed_output_path, ImageFormat, OptimizerResult,
};

/// The image the search works on, after format normalization.
struct WorkingImage {
    image: DynamicImage,
    format: ImageFormat,
    /// Path the output name is derived from; takes `.jpg` when a PNG became JPEG.
    base_path: PathBuf,
}

struct QualitySearch {
    quality: u8,
    size: u64,
    attempts: u32,
}

struct ResizeSearch<'a> {
    image: Cow<'a, DynamicImage>,
    steps: u32,
}

/// Drives the quality-then-resize search for one image at a time.
pub struct SizeOptimizer<'a> {
    settings: &'a SearchSettings,
}

impl<'a> SizeOptimizer<'a> {
    pub fn new(settings: &'a SearchSettings) -> OptimizerResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Writes `optimized_<name>` next to `path`, sized to fit `budget` when possible.
    ///
    /// `original_kb` in the result is the size of the file at `path` itself.
    pub fn optimize(
        &self,
        path: &Path,
        budget: TargetBudget,
        keep_format: bool,
    ) -> OptimizerResult<OptimizedOutput> {
        let original_size = get_file_size(path)?;
        let source = SourceImage::open(path)?;
        let working = self.normalize_format(source, keep_format);
        let output_path = prefixed_output_path(&working.base_path, &self.settings.output_prefix)?;

        debug!(
            "Optimizing '{}' as {} to fit {} KB",
            extract_filename(path),
            working.format,
            budget.kb()
        );

        let mut scratch = ScratchFile::create_in(parent_dir(&output_path), working.format)?;

        let searched = self.quality_search(&mut scratch, &working, budget)?;
        let resized = if budget.fits(searched.size) {
            ResizeSearch {
                image: Cow::Borrowed(&working.image),
                steps: 0,
            }
        } else {
            self.resize_search(&mut scratch, &working, budget, searched.quality, searched.size)?
        };

        let encode_quality = working.format.supports_quality().then_some(searched.quality);
        save_image_as(&resized.image, &output_path, working.format, encode_quality)?;
        drop(scratch);

        let final_size = get_file_size(&output_path)?;
        let result = OptimizedOutput {
            output_path,
            original_kb: bytes_to_kb(original_size),
            final_kb: bytes_to_kb(final_size),
            quality: searched.quality,
            width: resized.image.width(),
            height: resized.image.height(),
            quality_attempts: searched.attempts,
            resize_steps: resized.steps,
            budget_met: budget.fits(final_size),
        };

        info!(
            "'{}' → '{}': {:.2} KB → {:.2} KB (q{}, {}×{}, budget {})",
            extract_filename(path),
            result.output_path.display(),
            result.original_kb,
            result.final_kb,
            result.quality,
            result.width,
            result.height,
            if result.budget_met { "met" } else { "not met" }
        );

        Ok(result)
    }

    fn normalize_format(&self, source: SourceImage, keep_format: bool) -> WorkingImage {
        if !keep_format && source.format == ImageFormat::PNG && !source.has_alpha() {
            debug!("Opaque PNG will be re-encoded as JPEG");
            return WorkingImage {
                image: DynamicImage::ImageRgb8(source.image.to_rgb8()),
                format: ImageFormat::JPEG,
                base_path: jpeg_sibling_path(&source.path),
            };
        }

        WorkingImage {
            image: source.image,
            format: source.format,
            base_path: source.path,
        }
    }

    fn quality_search(
        &self,
        scratch: &mut ScratchFile,
        working: &WorkingImage,
        budget: TargetBudget,
    ) -> OptimizerResult<QualitySearch> {
        let settings = &self.settings.quality;
        let mut quality = settings.start;
        let mut size = 0;
        let mut attempts = 0;

        while quality > settings.floor {
            size = scratch.measure(&working.image, working.format, quality)?;
            attempts += 1;
            debug!("Quality {quality}: {size} bytes");

            if budget.fits(size) {
                break;
            }
            if !working.format.supports_quality() {
                debug!("{} has no quality setting; going straight to resize", working.format);
                break;
            }
            quality = quality.saturating_sub(settings.step);
        }

        Ok(QualitySearch { quality, size, attempts })
    }

    fn resize_search<'w>(
        &self,
        scratch: &mut ScratchFile,
        working: &'w WorkingImage,
        budget: TargetBudget,
        quality: u8,
        mut size: u64,
    ) -> OptimizerResult<ResizeSearch<'w>> {
        let settings = &self.settings.resize;
        let mut factor = settings.factor;
        let mut image = Cow::Borrowed(&working.image);
        let mut steps = 0;

        debug!("Still {size} bytes after quality search; resizing at quality {quality}");

        while !budget.fits(size) && shorter_side(&image) > settings.min_dimension {
            image = Cow::Owned(shrink_by_factor(&image, factor));
            size = scratch.measure(&image, working.format, quality)?;
            steps += 1;
            debug!(
                "Resize step {steps} (factor {factor:.3}): {}×{} → {size} bytes",
                image.width(),
                image.height()
            );
            factor *= settings.factor;
        }

        Ok(ResizeSearch { image, steps })
    }
}
