//! Synthesis constants and runtime configuration defaults

/// Depth value that maps to the maximum shift (nearest to the viewer)
pub const MAX_DEPTH: u8 = 255;

// Matches the separation the reference pipeline was tuned for
/// Default maximum horizontal shift in pixels
pub const DEFAULT_EYE_SEPARATION: i64 = 15;

// Safety limit to prevent excessive memory allocation when decoding
/// Maximum allowed width or height of a depth map loaded from disk
pub const MAX_IMAGE_DIMENSION: usize = 16_384;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_stereogram";
/// Extension of input files picked up from a directory target
pub const INPUT_EXTENSION: &str = "png";
