//! Error types for the image size optimizer.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.
//! The interaction layer maps each variant onto a user-facing notification.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use serde::Serialize;

/// Validation errors for user input, raised before any file is touched.
#[derive(Error, Debug, Serialize)]
pub enum ValidationError {
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// Target size is not a positive integer
    #[error("Invalid target size: {0:?}")]
    TargetSize(String),
    /// Search settings are out of range
    #[error("Settings error: {0}")]
    Settings(String),
}

/// File path errors.
#[derive(Error, Debug, Serialize)]
pub enum PathError {
    /// No path was provided
    #[error("No file selected")]
    Empty,
    /// File does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is not a file
    #[error("Not a file: {0}")]
    NotFile(PathBuf),
}

/// Main error type for the optimizer.
///
/// Every operation returns this type; nothing panics past the command boundary.
#[derive(Error, Debug, Serialize)]
pub enum OptimizerError {
    /// User input failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The file decoded, but not as the format the operation requires
    #[error("Expected a {expected} image but found {found}")]
    FormatMismatch { expected: String, found: String },

    /// Unsupported or undetectable image format
    #[error("Format error: {0}")]
    Format(String),

    /// Decoding, encoding or resizing failed
    #[error("Processing error: {0}")]
    Processing(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),
}

/// Convenience result type for optimizer operations.
pub type OptimizerResult<T> = Result<T, OptimizerError>;

impl OptimizerError {
    pub fn processing<T: Into<String>>(msg: T) -> Self {
        Self::Processing(msg.into())
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::IO(msg.into())
    }

    pub fn format_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::FormatMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

impl ValidationError {
    pub fn path_empty() -> Self {
        Self::Path(PathError::Empty)
    }

    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFound(path.into()))
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFile(path.into()))
    }

    pub fn target_size(raw: impl Into<String>) -> Self {
        Self::TargetSize(raw.into())
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

// Convert std::io::Error to OptimizerError
impl From<io::Error> for OptimizerError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert PathError to OptimizerError
impl From<PathError> for OptimizerError {
    fn from(err: PathError) -> Self {
        Self::Validation(ValidationError::Path(err))
    }
}

impl From<image::ImageError> for OptimizerError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Self::IO(e.to_string()),
            image::ImageError::Unsupported(e) => Self::Format(e.to_string()),
            other => Self::Processing(other.to_string()),
        }
    }
}
