//! Core application types and state.
//!
//! - [`AppState`]: Application state holding the search configuration
//! - [`FormState`]: The user's current path and target size input
//! - [`SearchSettings`]: Constants driving the quality and resize search
//! - [`TargetBudget`]: A validated size budget
//! - [`OptimizedOutput`]: Result of an optimize run

mod state;
mod types;

pub use state::{AppState, FormState};
pub use types::{SearchSettings, QualitySettings, ResizeSettings, TargetBudget, OptimizedOutput};
