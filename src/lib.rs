//! Single-image autostereogram synthesis driven by grayscale depth maps
//!
//! A random carrier texture is repeated horizontally with a period that shrinks
//! as the depth map gets nearer, so that converging the eyes past the image
//! plane fuses neighbouring repeats into a surface floating at the encoded depth.

#![forbid(unsafe_code)]

/// Carrier generation and the row-parallel synthesis recurrence
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Depth to shift mapping and depth normalization
pub mod math;
/// Depth field and stereogram raster types
pub mod spatial;

pub use algorithm::synthesis::{EyeSeparation, synthesize};
pub use io::error::{Result, StereogramError};
pub use spatial::{DepthField, Stereogram};
