//! Command handlers behind the form's buttons.
//!
//! - [`optimize`]: Convert a PNG to JPEG if needed, then fit the budget
//! - [`convert_png`]: PNG to JPEG only
//! - [`optimize_png`]: Fit the budget without changing the format
//!
//! With the `desktop` feature the same commands are exposed to the frontend
//! as Tauri commands that show their result in a native message box.

#[cfg(feature = "desktop")]
pub mod desktop;
mod form;
mod notification;

pub use form::*;
pub use notification::{Notification, NotificationKind};
