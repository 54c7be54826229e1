//! Application and form state.

use serde::{Deserialize, Serialize};
use crate::core::SearchSettings;

/// Application state shared by every command.
///
/// Holds the search configuration for the lifetime of the app; nothing here is
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    settings: SearchSettings,
}

impl AppState {
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }
}

/// Snapshot of the two input fields at the moment a command fires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    /// Contents of the image path field
    pub image_path: String,
    /// Contents of the target size field, in KB
    pub target_size: String,
}

impl FormState {
    pub fn new(image_path: impl Into<String>, target_size: impl Into<String>) -> Self {
        Self {
            image_path: image_path.into(),
            target_size: target_size.into(),
        }
    }
}
