//! Seeded noise carrier that the stereogram repeats horizontally
//!
//! Every pixel is an independent uniform sample over the full 8-bit range.
//! Generation is sequential in row-major order so a seed always yields the
//! same carrier regardless of how synthesis is later scheduled.

use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Where the carrier seed comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// Caller-provided seed for reproducible output
    Fixed(u64),
    /// Seed drawn from the thread-local generator at resolution time
    Entropy,
}

impl SeedSource {
    /// Produce a concrete seed, drawing a fresh one for `Entropy`
    pub fn resolve(self) -> u64 {
        match self {
            Self::Fixed(seed) => seed,
            Self::Entropy => {
                let seed = rand::rng().random::<u64>();
                log::debug!("Drew carrier seed {seed}");
                seed
            }
        }
    }
}

impl From<Option<u64>> for SeedSource {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(Self::Entropy, Self::Fixed)
    }
}

/// Initial random texture, consumed by synthesis as its working buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    pixels: Array2<u8>,
    seed: Option<u64>,
}

impl Carrier {
    /// Generate a carrier of the given size from a seed
    pub fn generate(rows: usize, cols: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let pixels = Array2::from_shape_simple_fn((rows, cols), || rng.random::<u8>());
        Self {
            pixels,
            seed: Some(seed),
        }
    }

    /// Use a caller-supplied texture as the carrier
    pub const fn from_array(pixels: Array2<u8>) -> Self {
        Self { pixels, seed: None }
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.pixels.dim()
    }

    /// Carrier intensities
    pub const fn pixels(&self) -> &Array2<u8> {
        &self.pixels
    }

    /// Seed the carrier was generated from, `None` for supplied textures
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Intensity at a position, if inside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.pixels.get((row, col)).copied()
    }

    pub(crate) fn into_parts(self) -> (Array2<u8>, Option<u64>) {
        (self.pixels, self.seed)
    }
}
