//! User-facing outcome of a command, shown as a modal message box.

use serde::Serialize;
use crate::core::OptimizedOutput;
use crate::utils::{OptimizerError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }

    pub fn optimized(output: &OptimizedOutput) -> Self {
        Self::info(
            "Success",
            format!(
                "Original size: {:.2}KB\nOptimized size: {:.2}KB\nOptimized image saved as: {}",
                output.original_kb,
                output.final_kb,
                output.output_path.display()
            ),
        )
    }

    pub fn converted() -> Self {
        Self::info("Success", "Image converted successfully.")
    }

    /// Maps an error to its message box.
    ///
    /// `file_hint` is the text shown for a bad path; it differs per command.
    pub fn from_error(err: &OptimizerError, file_hint: &str) -> Self {
        match err {
            OptimizerError::Validation(ValidationError::TargetSize(_)) => Self::error(
                "Input Error",
                "Please enter a valid number for the target size.",
            ),
            OptimizerError::Validation(ValidationError::Path(_)) => {
                Self::error("File Error", file_hint)
            }
            OptimizerError::FormatMismatch { expected, .. } => Self::error(
                "Conversion Error",
                format!("The selected file is not a {expected} image."),
            ),
            other => Self::error("Error", format!("An error occurred: {other}")),
        }
    }
}
