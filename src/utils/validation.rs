use std::path::{Path, PathBuf};
use crate::core::TargetBudget;
use crate::utils::{OptimizerResult, ValidationError};

/// Validates the input file path: non-empty, exists, and is a regular file.
pub fn validate_input_path(path: &str) -> OptimizerResult<PathBuf> {
    if path.trim().is_empty() {
        return Err(ValidationError::path_empty().into());
    }

    let path = Path::new(path);

    if !path.exists() {
        return Err(ValidationError::path_not_found(path).into());
    }

    if !path.is_file() {
        return Err(ValidationError::not_a_file(path).into());
    }

    Ok(path.to_path_buf())
}

/// Parses the target size field as a positive number of kilobytes.
pub fn parse_target_size(raw: &str) -> OptimizerResult<TargetBudget> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .and_then(TargetBudget::from_kb)
        .ok_or_else(|| ValidationError::target_size(raw).into())
}
