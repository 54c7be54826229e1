// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod commands;
#[cfg(feature = "desktop")]
mod app;

// Public exports for external consumers
pub use crate::core::{AppState, FormState, OptimizedOutput, SearchSettings, TargetBudget};
pub use utils::{OptimizerError, OptimizerResult};
pub use processing::{convert_png_to_jpeg, SizeOptimizer};
pub use commands::{run_command, Command, Notification, NotificationKind};
#[cfg(feature = "desktop")]
pub use app::run;
