/// Command-line interface and batch file processing
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error taxonomy
pub mod error;
/// Depth map decoding and stereogram encoding
pub mod image;
/// Batch progress display
pub mod progress;
