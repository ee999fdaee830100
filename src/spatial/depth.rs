//! Depth field storage with shape validation
//!
//! A depth field is a non-empty 2D grid of 8-bit proximities where larger values
//! are nearer to the viewer. It is never mutated after construction.

use ndarray::{Array2, ArrayD, ArrayView1, Axis, Ix2};

use crate::io::error::{Result, invalid_shape};

/// Read-only grid of 8-bit proximities (0 = farthest, 255 = nearest)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthField {
    values: Array2<u8>,
}

impl DepthField {
    /// Wrap a 2D array of proximities
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn new(values: Array2<u8>) -> Result<Self> {
        let (rows, cols) = values.dim();
        if rows == 0 || cols == 0 {
            return Err(invalid_shape(
                &[rows, cols],
                &"depth field must have at least one row and one column",
            ));
        }
        Ok(Self { values })
    }

    /// Accept an array of any rank, rejecting anything that is not 2D
    ///
    /// Multi-channel images arrive here as rank 3 and must be collapsed to a
    /// single channel by the caller first.
    ///
    /// # Errors
    ///
    /// Returns an error if the array rank is not 2 or a dimension is zero
    pub fn from_dyn(values: ArrayD<u8>) -> Result<Self> {
        let shape = values.shape().to_vec();
        if shape.len() != 2 {
            return Err(invalid_shape(
                &shape,
                &format!(
                    "expected a 2D single-channel grid, got {} dimensions",
                    shape.len()
                ),
            ));
        }
        let values = values
            .into_dimensionality::<Ix2>()
            .map_err(|e| invalid_shape(&shape, &e))?;
        Self::new(values)
    }

    /// Build a depth field from a row-major buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer length does not equal `rows * cols`
    /// or either dimension is zero
    pub fn from_raw(rows: usize, cols: usize, data: Vec<u8>) -> Result<Self> {
        let values = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| invalid_shape(&[rows, cols], &e))?;
        Self::new(values)
    }

    /// Build a depth field where every pixel has the same proximity
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn filled(rows: usize, cols: usize, value: u8) -> Result<Self> {
        Self::new(Array2::from_elem((rows, cols), value))
    }

    /// Number of rows (image height)
    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    /// Number of columns (image width)
    pub fn cols(&self) -> usize {
        self.values.ncols()
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Underlying proximity values
    pub const fn values(&self) -> &Array2<u8> {
        &self.values
    }

    /// Proximity at a position, if inside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.values.get((row, col)).copied()
    }

    /// View of a single row, if inside the grid
    pub fn row(&self, row: usize) -> Option<ArrayView1<'_, u8>> {
        (row < self.rows()).then(|| self.values.index_axis(Axis(0), row))
    }

    /// The shared value when every pixel has the same proximity
    pub fn uniform_value(&self) -> Option<u8> {
        let first = self.values.iter().next().copied()?;
        self.values.iter().all(|&v| v == first).then_some(first)
    }
}
