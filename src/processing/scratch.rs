//! Scratch file used to measure candidate encodings.

use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::DynamicImage;
use tempfile::NamedTempFile;

use crate::processing::codec::encode_into;
use crate::utils::{ImageFormat, OptimizerError, OptimizerResult};

/// A single reusable temp file; every candidate overwrites the previous one.
///
/// The file is removed when the guard drops, on success and error paths alike.
pub struct ScratchFile {
    file: NamedTempFile,
}

impl ScratchFile {
    /// Creates a uniquely named scratch file inside `dir`.
    pub fn create_in(dir: &Path, format: ImageFormat) -> OptimizerResult<Self> {
        let file = tempfile::Builder::new()
            .prefix(".size-search-")
            .suffix(&format!(".{}", format.primary_extension()))
            .tempfile_in(dir)
            .map_err(|e| OptimizerError::io(format!(
                "Cannot create scratch file in '{}': {e}", dir.display()
            )))?;
        Ok(Self { file })
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Encodes `image` over the previous contents and returns the encoded size in bytes.
    pub fn measure(
        &mut self,
        image: &DynamicImage,
        format: ImageFormat,
        quality: u8,
    ) -> OptimizerResult<u64> {
        let file = self.file.as_file_mut();
        file.set_len(0)?;
        file.rewind()?;
        {
            let mut writer = BufWriter::new(&mut *file);
            encode_into(image, &mut writer, format, Some(quality))?;
            writer.flush()?;
        }
        Ok(file.metadata()?.len())
    }
}
