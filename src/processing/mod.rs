pub mod codec;
mod converter;
mod optimizer;
mod scratch;
mod source;

pub use converter::convert_png_to_jpeg;
pub use optimizer::SizeOptimizer;
pub use scratch::ScratchFile;
pub use source::SourceImage;
