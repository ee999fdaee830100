//! Conversion from 8-bit proximity to horizontal pixel shift
//!
//! The shift is `floor(depth / 255 * eye_separation)`, evaluated in integer
//! arithmetic so that exact multiples never round down through float error.

use crate::io::configuration::MAX_DEPTH;

/// Horizontal shift for a proximity value, in `[0, eye_separation]`
pub const fn shift_for_depth(depth: u8, eye_separation: usize) -> usize {
    // Widened so the product cannot overflow for any separation
    ((depth as u128 * eye_separation as u128) / MAX_DEPTH as u128) as usize
}

/// Precomputed shift for every possible proximity value
pub fn shift_table(eye_separation: usize) -> [usize; 256] {
    let mut table = [0; 256];
    for (depth, slot) in (0..=u8::MAX).zip(table.iter_mut()) {
        *slot = shift_for_depth(depth, eye_separation);
    }
    table
}
