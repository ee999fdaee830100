//! Row-parallel autostereogram synthesis
//!
//! The carrier is copied in place: walking each row left to right, every pixel
//! at or beyond the eye separation takes the value found `shift` columns to its
//! left, where `shift` grows with proximity. Reads always land on a column that
//! has already been finalized, so one left-to-right pass per row is enough.
//! Rows never read each other and are dispatched to the rayon pool.

use std::fmt;
use std::num::NonZeroUsize;

use ndarray::{ArrayD, ArrayView1, ArrayViewMut1, Zip};

use crate::algorithm::carrier::{Carrier, SeedSource};
use crate::io::error::{Result, invalid_parameter, invalid_shape};
use crate::math::shift::shift_table;
use crate::spatial::{DepthField, Stereogram};

/// Maximum horizontal displacement in pixels, reached at proximity 255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EyeSeparation(NonZeroUsize);

impl EyeSeparation {
    /// Validate a separation given as a signed integer
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or negative
    pub fn new(value: i64) -> Result<Self> {
        usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or_else(|| {
                invalid_parameter("eye_separation", &value, &"must be a positive integer")
            })
    }

    /// Separation in pixels
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for EyeSeparation {
    type Error = crate::io::error::StereogramError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for EyeSeparation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Non-fatal observation about inputs that yield a visually flat stereogram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// No column has a predecessor, so the output is pure carrier noise
    SeparationExceedsWidth {
        /// Requested separation
        eye_separation: usize,
        /// Width of the depth field
        width: usize,
    },
    /// Every pixel has the same proximity, so no relief is encoded
    UniformDepth {
        /// The shared proximity value
        value: u8,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeparationExceedsWidth {
                eye_separation,
                width,
            } => write!(
                f,
                "eye separation {eye_separation} is not smaller than image width {width}; \
                 output will be pure noise"
            ),
            Self::UniformDepth { value } => write!(
                f,
                "depth field is uniformly {value}; output will show no relief"
            ),
        }
    }
}

/// Collect advisories for a depth field and separation
pub fn advisories(depth: &DepthField, eye_separation: EyeSeparation) -> Vec<Advisory> {
    let mut found = Vec::new();
    if eye_separation.get() >= depth.cols() {
        found.push(Advisory::SeparationExceedsWidth {
            eye_separation: eye_separation.get(),
            width: depth.cols(),
        });
    }
    if let Some(value) = depth.uniform_value() {
        found.push(Advisory::UniformDepth { value });
    }
    found
}

/// Synthesis parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Maximum horizontal shift
    pub eye_separation: EyeSeparation,
    /// Carrier seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
    /// Whether rows are processed on the rayon pool
    pub parallel: bool,
}

impl SynthesisConfig {
    /// Parallel configuration with an unseeded carrier
    pub const fn new(eye_separation: EyeSeparation) -> Self {
        Self {
            eye_separation,
            seed: None,
            parallel: true,
        }
    }

    /// Fix the carrier seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Process rows on the calling thread only
    #[must_use]
    pub const fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Turns depth fields into stereograms under a fixed configuration
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer {
    config: SynthesisConfig,
}

impl Synthesizer {
    /// Create a synthesizer
    pub const fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub const fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Generate a carrier for the depth field and synthesize over it
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::synthesize_from_carrier`]; a generated
    /// carrier always matches the depth field, so none are expected
    pub fn synthesize(&self, depth: &DepthField) -> Result<Stereogram> {
        let seed = SeedSource::from(self.config.seed).resolve();
        let carrier = Carrier::generate(depth.rows(), depth.cols(), seed);
        self.synthesize_from_carrier(depth, carrier)
    }

    /// Synthesize over an explicit carrier, which becomes the output buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the carrier and depth field dimensions differ
    pub fn synthesize_from_carrier(
        &self,
        depth: &DepthField,
        carrier: Carrier,
    ) -> Result<Stereogram> {
        if carrier.dimensions() != depth.dimensions() {
            let (rows, cols) = carrier.dimensions();
            return Err(invalid_shape(
                &[rows, cols],
                &format!(
                    "carrier must match depth field dimensions {}x{}",
                    depth.rows(),
                    depth.cols()
                ),
            ));
        }

        let eye_separation = self.config.eye_separation;
        for advisory in advisories(depth, eye_separation) {
            log::warn!("{advisory}");
        }

        let separation = eye_separation.get();
        let shifts = shift_table(separation);
        let (mut pixels, seed) = carrier.into_parts();

        let rows = Zip::from(pixels.rows_mut()).and(depth.values().rows());
        if self.config.parallel {
            rows.par_for_each(|row, depth_row| link_row(row, depth_row, separation, &shifts));
        } else {
            rows.for_each(|row, depth_row| link_row(row, depth_row, separation, &shifts));
        }

        Ok(Stereogram::new(pixels, separation, seed))
    }
}

/// Apply the repetition recurrence to one row in place
///
/// Columns are visited in strictly increasing order; the source column
/// `x - shift` is never to the right of `x`.
fn link_row(
    mut row: ArrayViewMut1<'_, u8>,
    depth: ArrayView1<'_, u8>,
    eye_separation: usize,
    shifts: &[usize; 256],
) {
    for x in eye_separation..row.len() {
        let shift = depth
            .get(x)
            .and_then(|&d| shifts.get(usize::from(d)))
            .copied()
            .unwrap_or(0);
        if shift == 0 {
            continue;
        }
        let Some(&value) = row.get(x - shift) else {
            continue;
        };
        if let Some(cell) = row.get_mut(x) {
            *cell = value;
        }
    }
}

/// Synthesize a stereogram from a depth field
///
/// # Errors
///
/// Returns an error if `eye_separation` is zero or negative
pub fn synthesize(
    depth: &DepthField,
    eye_separation: i64,
    seed: Option<u64>,
) -> Result<Stereogram> {
    let mut config = SynthesisConfig::new(EyeSeparation::new(eye_separation)?);
    config.seed = seed;
    Synthesizer::new(config).synthesize(depth)
}

/// Synthesize from an array of unchecked rank
///
/// Both the shape and the separation are validated before any work is done.
///
/// # Errors
///
/// Returns an error if:
/// - The array is not a non-empty 2D grid
/// - `eye_separation` is zero or negative
pub fn synthesize_dyn(
    depth: ArrayD<u8>,
    eye_separation: i64,
    seed: Option<u64>,
) -> Result<Stereogram> {
    let depth = DepthField::from_dyn(depth)?;
    synthesize(&depth, eye_separation, seed)
}
