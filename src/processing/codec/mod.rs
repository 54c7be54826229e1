//! Encoding and resampling built on the `image` crate.
//!
//! - [`formats`]: JPEG/PNG encoders, to any writer or straight to a file.
//! - [`resize`]: Factor-based Lanczos3 downscaling used by the resize phase.

pub mod formats;
pub mod resize;

pub use formats::{encode_into, save_image_as, DEFAULT_JPEG_QUALITY};
pub use resize::{scaled_dimensions, shorter_side, shrink_by_factor};
