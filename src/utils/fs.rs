use std::fs;
use std::path::{Path, PathBuf};
use crate::utils::{OptimizerError, OptimizerResult};

/// Get file size in bytes
pub fn get_file_size(path: impl AsRef<Path>) -> OptimizerResult<u64> {
    fs::metadata(path.as_ref())
        .map(|m| m.len())
        .map_err(|e| OptimizerError::io(format!(
            "Failed to get file size of {}: {}", path.as_ref().display(), e
        )))
}

/// Converts a byte count to kilobytes (1 KB = 1024 bytes).
pub fn bytes_to_kb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

/// Returns the final component of a path for log messages.
pub fn extract_filename(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unnamed>")
}

/// Same directory and stem, `.jpg` extension.
pub fn jpeg_sibling_path(path: &Path) -> PathBuf {
    path.with_extension("jpg")
}

/// `<dir>/<prefix><file name>`, next to `path`.
pub fn prefixed_output_path(path: &Path, prefix: &str) -> OptimizerResult<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| OptimizerError::io(format!(
            "Path has no file name: {}", path.display()
        )))?;

    let mut name = std::ffi::OsString::from(prefix);
    name.push(file_name);
    Ok(parent_dir(path).join(name))
}

/// Directory containing `path`; a bare file name resolves to the current directory.
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_sibling_replaces_last_extension() {
        assert_eq!(
            jpeg_sibling_path(Path::new("/photos/cat.png")),
            PathBuf::from("/photos/cat.jpg")
        );
        assert_eq!(
            jpeg_sibling_path(Path::new("archive.tar.png")),
            PathBuf::from("archive.tar.jpg")
        );
    }

    #[test]
    fn test_prefixed_output_path() {
        let out = prefixed_output_path(Path::new("/photos/cat.jpg"), "optimized_").unwrap();
        assert_eq!(out, PathBuf::from("/photos/optimized_cat.jpg"));

        let bare = prefixed_output_path(Path::new("cat.png"), "optimized_").unwrap();
        assert_eq!(bare, PathBuf::from("./optimized_cat.png"));
    }

    #[test]
    fn test_prefixed_output_path_without_file_name() {
        assert!(prefixed_output_path(Path::new("/"), "optimized_").is_err());
    }

    #[test]
    fn test_bytes_to_kb() {
        assert_eq!(bytes_to_kb(0), 0.0);
        assert_eq!(bytes_to_kb(1536), 1.5);
    }

    #[test]
    fn test_get_file_size() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, [0u8; 2048]).unwrap();
        assert_eq!(get_file_size(&path).unwrap(), 2048);
        assert!(get_file_size(dir.path().join("missing.bin")).is_err());
    }
}
