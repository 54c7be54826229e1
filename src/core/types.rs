//! Core types for search settings, budgets and results.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::utils::{OptimizerResult, ValidationError};

/// Configuration for the size search.
///
/// Defaults reproduce the classic behavior: quality 85 down to 15 in steps of 5,
/// then shrink by a compounding 0.9 factor until the short side reaches 100 px.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchSettings {
    /// Quality search parameters
    pub quality: QualitySettings,
    /// Resize search parameters
    pub resize: ResizeSettings,
    /// File name prefix for the optimized output
    pub output_prefix: String,
    /// JPEG quality used by the PNG converter
    pub conversion_quality: u8,
}

/// Quality search parameters (encoder scale 0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualitySettings {
    /// First quality attempted
    pub start: u8,
    /// Amount subtracted after each failed attempt
    pub step: u8,
    /// The search runs only while quality is strictly above this
    pub floor: u8,
}

/// Resize search parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResizeSettings {
    /// Initial shrink factor; multiplied into itself after every step
    pub factor: f64,
    /// Shrinking continues only while the shorter side is strictly above this
    pub min_dimension: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            quality: QualitySettings::default(),
            resize: ResizeSettings::default(),
            output_prefix: "optimized_".to_string(),
            conversion_quality: 75,
        }
    }
}

impl Default for QualitySettings {
    fn default() -> Self {
        Self {
            start: 85,
            step: 5,
            floor: 10,
        }
    }
}

impl Default for ResizeSettings {
    fn default() -> Self {
        Self {
            factor: 0.9,
            min_dimension: 100,
        }
    }
}

impl SearchSettings {
    /// Rejects settings under which the search would not terminate or would
    /// hand the encoder an out-of-range quality.
    pub fn validate(&self) -> OptimizerResult<()> {
        let q = &self.quality;
        if q.start == 0 || q.start > 100 {
            return Err(ValidationError::settings(format!(
                "Invalid start quality: {}. Must be between 1 and 100", q.start
            )).into());
        }
        if q.step == 0 {
            return Err(ValidationError::settings("Quality step cannot be 0").into());
        }
        if q.floor >= q.start {
            return Err(ValidationError::settings(format!(
                "Quality floor {} must be below start quality {}", q.floor, q.start
            )).into());
        }
        if self.conversion_quality == 0 || self.conversion_quality > 100 {
            return Err(ValidationError::settings(format!(
                "Invalid conversion quality: {}. Must be between 1 and 100",
                self.conversion_quality
            )).into());
        }
        if !(self.resize.factor > 0.0 && self.resize.factor < 1.0) {
            return Err(ValidationError::settings(format!(
                "Shrink factor {} must lie strictly between 0 and 1", self.resize.factor
            )).into());
        }
        if self.resize.min_dimension == 0 {
            return Err(ValidationError::settings("Minimum dimension cannot be 0").into());
        }
        if self.output_prefix.is_empty() {
            return Err(ValidationError::settings("Output prefix cannot be empty").into());
        }
        Ok(())
    }
}

/// A positive size budget in kilobytes (1 KB = 1024 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetBudget(u64);

impl TargetBudget {
    /// Returns `None` for zero, which is not a usable budget.
    pub fn from_kb(kb: u64) -> Option<Self> {
        (kb > 0).then_some(Self(kb))
    }

    pub fn kb(&self) -> u64 {
        self.0
    }

    pub fn bytes(&self) -> u64 {
        self.0.saturating_mul(1024)
    }

    pub fn fits(&self, size_bytes: u64) -> bool {
        size_bytes <= self.bytes()
    }
}

/// Result of one optimize run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedOutput {
    /// Where the optimized file was written
    pub output_path: PathBuf,
    /// Size of the file handed to the optimizer, in KB
    pub original_kb: f64,
    /// Size of the written output, in KB
    pub final_kb: f64,
    /// Quality the output was encoded at (ignored by lossless formats)
    pub quality: u8,
    pub width: u32,
    pub height: u32,
    /// Encodes performed during the quality search
    pub quality_attempts: u32,
    /// Encodes performed during the resize search
    pub resize_steps: u32,
    /// False when the dimension floor stopped the search first
    pub budget_met: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = SearchSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.quality.start, 85);
        assert_eq!(settings.resize.min_dimension, 100);
        assert_eq!(settings.output_prefix, "optimized_");
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = SearchSettings::default();
        settings.quality.step = 0;
        assert!(settings.validate().is_err());

        let mut settings = SearchSettings::default();
        settings.resize.factor = 1.0;
        assert!(settings.validate().is_err());

        let mut settings = SearchSettings::default();
        settings.quality.floor = 90;
        assert!(settings.validate().is_err());

        let mut settings = SearchSettings::default();
        settings.resize.min_dimension = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: SearchSettings =
            serde_json::from_str(r#"{ "quality": { "start": 90 }, "resize": { "minDimension": 64 } }"#)
                .unwrap();
        assert_eq!(settings.quality.start, 90);
        assert_eq!(settings.quality.step, 5);
        assert_eq!(settings.resize.min_dimension, 64);
        assert_eq!(settings.resize.factor, 0.9);
        assert_eq!(settings.conversion_quality, 75);
    }

    #[test]
    fn test_target_budget() {
        assert!(TargetBudget::from_kb(0).is_none());
        let budget = TargetBudget::from_kb(50).unwrap();
        assert_eq!(budget.bytes(), 51_200);
        assert!(budget.fits(51_200));
        assert!(!budget.fits(51_201));
    }
}
