//! Raster types shared by the synthesizer and the I/O layer
//!
//! This module contains:
//! - The validated depth field consumed by synthesis
//! - The stereogram raster produced by synthesis

/// Validated single-channel depth grid
pub mod depth;
/// Synthesized stereogram raster
pub mod stereogram;

pub use depth::DepthField;
pub use stereogram::Stereogram;
