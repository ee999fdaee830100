//! Synthesized stereogram raster

use image::{GrayImage, Luma};
use ndarray::{Array2, ArrayView1, Axis};

/// Single-channel 8-bit stereogram with the parameters that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stereogram {
    pixels: Array2<u8>,
    eye_separation: usize,
    seed: Option<u64>,
}

impl Stereogram {
    pub(crate) const fn new(pixels: Array2<u8>, eye_separation: usize, seed: Option<u64>) -> Self {
        Self {
            pixels,
            eye_separation,
            seed,
        }
    }

    /// Number of rows (image height)
    pub fn rows(&self) -> usize {
        self.pixels.nrows()
    }

    /// Number of columns (image width)
    pub fn cols(&self) -> usize {
        self.pixels.ncols()
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.pixels.dim()
    }

    /// Intensity grid
    pub const fn pixels(&self) -> &Array2<u8> {
        &self.pixels
    }

    /// Consume the stereogram, returning its intensity grid
    pub fn into_pixels(self) -> Array2<u8> {
        self.pixels
    }

    /// Intensity at a position, if inside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.pixels.get((row, col)).copied()
    }

    /// View of a single row, if inside the grid
    pub fn row(&self, row: usize) -> Option<ArrayView1<'_, u8>> {
        (row < self.rows()).then(|| self.pixels.index_axis(Axis(0), row))
    }

    /// Maximum shift the stereogram was built with
    pub const fn eye_separation(&self) -> usize {
        self.eye_separation
    }

    /// Carrier seed, for reproducing the same output
    ///
    /// `None` when the stereogram was built from a caller-supplied carrier.
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Convert to an 8-bit grayscale image ready for encoding
    pub fn to_image(&self) -> GrayImage {
        GrayImage::from_fn(self.cols() as u32, self.rows() as u32, |x, y| {
            Luma([self.get(y as usize, x as usize).unwrap_or(0)])
        })
    }
}
