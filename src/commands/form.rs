//! The three form commands, as pure functions of the form state and the filesystem.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::commands::Notification;
use crate::core::{FormState, OptimizedOutput, SearchSettings};
use crate::processing::{convert_png_to_jpeg, SizeOptimizer};
use crate::utils::{has_png_extension, parse_target_size, validate_input_path, OptimizerResult};

const SELECT_IMAGE: &str = "Please select a valid image file.";
const SELECT_PNG: &str = "Please select a valid PNG file.";

/// Buttons on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    /// Convert a `.png` to JPEG first, then optimize
    Optimize,
    /// PNG → JPEG only
    ConvertPng,
    /// Optimize without changing the format
    OptimizePng,
}

/// Optimizes the selected file, converting a `.png` to JPEG first.
///
/// The target size is checked before the path, and both before any file is read.
pub fn optimize(form: &FormState, settings: &SearchSettings) -> OptimizerResult<OptimizedOutput> {
    let budget = parse_target_size(&form.target_size)?;
    let path = validate_input_path(&form.image_path)?;

    let source = if has_png_extension(&form.image_path) {
        convert_png_to_jpeg(&path, settings.conversion_quality)?
    } else {
        path
    };

    SizeOptimizer::new(settings)?.optimize(&source, budget, false)
}

/// Converts the selected PNG to a sibling JPEG.
pub fn convert_png(form: &FormState, settings: &SearchSettings) -> OptimizerResult<PathBuf> {
    let path = validate_input_path(&form.image_path)?;
    convert_png_to_jpeg(&path, settings.conversion_quality)
}

/// Optimizes the selected file in its own format.
pub fn optimize_png(form: &FormState, settings: &SearchSettings) -> OptimizerResult<OptimizedOutput> {
    let budget = parse_target_size(&form.target_size)?;
    let path = validate_input_path(&form.image_path)?;
    SizeOptimizer::new(settings)?.optimize(&path, budget, true)
}

/// Runs `command` and turns its outcome into the message box to show.
pub fn run_command(command: Command, form: &FormState, settings: &SearchSettings) -> Notification {
    debug!("Running {:?} on '{}'", command, form.image_path);

    let notification = match command {
        Command::Optimize => match optimize(form, settings) {
            Ok(output) => Notification::optimized(&output),
            Err(e) => Notification::from_error(&e, SELECT_IMAGE),
        },
        Command::ConvertPng => match convert_png(form, settings) {
            Ok(_) => Notification::converted(),
            Err(e) => Notification::from_error(&e, SELECT_PNG),
        },
        Command::OptimizePng => match optimize_png(form, settings) {
            Ok(output) => Notification::optimized(&output),
            Err(e) => Notification::from_error(&e, SELECT_PNG),
        },
    };

    if notification.is_error() {
        warn!("{:?} failed: {}", command, notification.message);
    }
    notification
}
