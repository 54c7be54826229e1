//! Tauri application wiring.

use anyhow::Context;
use tracing::info;

use crate::commands::desktop;
use crate::core::AppState;

/// Builds the window, registers the commands and blocks until the app exits.
pub fn run() -> anyhow::Result<()> {
    let app = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(AppState::default())
        .invoke_handler(tauri::generate_handler![
            desktop::pick_image,
            desktop::run_optimize,
            desktop::run_convert_png,
            desktop::run_optimize_png,
        ])
        .build(tauri::generate_context!())
        .context("error while building tauri application")?;

    info!("Starting application event loop...");
    app.run(|_app_handle, event| {
        if let tauri::RunEvent::Exit = event {
            info!("Application exiting");
        }
    });
    Ok(())
}
