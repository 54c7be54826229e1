pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{OptimizerError, OptimizerResult, PathError, ValidationError};
pub use validation::{parse_target_size, validate_input_path};
pub use formats::{ImageFormat, has_png_extension};
pub use fs::{
    get_file_size,
    bytes_to_kb,
    extract_filename,
    jpeg_sibling_path,
    prefixed_output_path,
    parent_dir,
};
