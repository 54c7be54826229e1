fn main() {
    // Only the desktop shell needs Tauri's config, icons and capability codegen.
    #[cfg(feature = "desktop")]
    tauri_build::build();
}
