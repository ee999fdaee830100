//! Numeric helpers for mapping depth to pixel displacement
//!
//! This module contains:
//! - The proximity to horizontal shift mapping used by synthesis
//! - Linear stretching of arbitrary depth samples into 8-bit proximities

/// Min/max stretching of raw depth samples
pub mod normalization;
/// Proximity to shift conversion
pub mod shift;
