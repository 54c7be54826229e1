//! Tauri command handlers for the frontend.
//!
//! Each form command runs on the blocking pool and reports its outcome through a
//! native message box before returning the same notification to the page.

use tauri::{AppHandle, State};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};
use tracing::debug;

use crate::commands::{run_command, Command, Notification, NotificationKind};
use crate::core::{AppState, FormState};
use crate::utils::{OptimizerError, OptimizerResult};

/// Opens a file picker limited to PNG and JPEG; `None` when cancelled.
#[tauri::command]
pub async fn pick_image(app: AppHandle) -> Option<String> {
    let picked = app
        .dialog()
        .file()
        .add_filter("Image Files", &["jpg", "jpeg", "png"])
        .blocking_pick_file()?;

    let path = picked.into_path().ok()?;
    debug!("Picked '{}'", path.display());
    Some(path.to_string_lossy().into_owned())
}

#[tauri::command]
pub async fn run_optimize(
    app: AppHandle,
    state: State<'_, AppState>,
    form: FormState,
) -> OptimizerResult<Notification> {
    dispatch(app, &state, Command::Optimize, form).await
}

#[tauri::command]
pub async fn run_convert_png(
    app: AppHandle,
    state: State<'_, AppState>,
    form: FormState,
) -> OptimizerResult<Notification> {
    dispatch(app, &state, Command::ConvertPng, form).await
}

#[tauri::command]
pub async fn run_optimize_png(
    app: AppHandle,
    state: State<'_, AppState>,
    form: FormState,
) -> OptimizerResult<Notification> {
    dispatch(app, &state, Command::OptimizePng, form).await
}

async fn dispatch(
    app: AppHandle,
    state: &AppState,
    command: Command,
    form: FormState,
) -> OptimizerResult<Notification> {
    let settings = state.settings().clone();
    let notification =
        tauri::async_runtime::spawn_blocking(move || run_command(command, &form, &settings))
            .await
            .map_err(|e| OptimizerError::processing(format!("Task panicked: {e}")))?;

    show_notification(&app, &notification);
    Ok(notification)
}

fn show_notification(app: &AppHandle, notification: &Notification) {
    let kind = match notification.kind {
        NotificationKind::Info => MessageDialogKind::Info,
        NotificationKind::Error => MessageDialogKind::Error,
    };

    app.dialog()
        .message(notification.message.clone())
        .title(notification.title.clone())
        .kind(kind)
        .blocking_show();
}
