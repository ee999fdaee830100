//! Linear stretching of raw depth estimates into the 8-bit proximity range
//!
//! Depth estimators emit unbounded relative values. They are mapped onto
//! `[0, 255]` by a min/max stretch and truncated toward zero.

use ndarray::Array2;
use num_traits::ToPrimitive;

use crate::io::configuration::MAX_DEPTH;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::DepthField;

/// Stretch arbitrary numeric samples so the minimum maps to 0 and the maximum to 255
///
/// A constant field has no range to stretch and maps to all zeros (farthest).
///
/// # Errors
///
/// Returns an error if:
/// - A sample cannot be represented as a finite `f64`
/// - The input has a zero dimension
pub fn stretch_to_depth<T>(samples: &Array2<T>) -> Result<DepthField>
where
    T: ToPrimitive + Copy,
{
    let mut finite = Array2::<f64>::zeros(samples.dim());
    for (((row, col), sample), slot) in samples.indexed_iter().zip(finite.iter_mut()) {
        *slot = sample
            .to_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                invalid_parameter(
                    "depth",
                    &format!("sample at ({row}, {col})"),
                    &"depth samples must be finite numbers",
                )
            })?;
    }

    let (min, max) = finite
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = max - min;
    let scale = f64::from(MAX_DEPTH);

    let stretched = finite.mapv(|v| {
        if range > 0.0 {
            // Dividing first keeps both endpoints exact; the cast truncates toward zero
            ((v - min) / range * scale) as u8
        } else {
            0
        }
    });

    DepthField::new(stretched)
}
