use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};

/// Scalar type shared by every matrix in the crate.
pub type Scalar = f64;

/// Dense row-major matrix with at least one row and one column.
///
/// All elements live in a single owned buffer, so dropping the matrix
/// releases its storage in one step and no two matrices share elements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRecord", into = "MatrixRecord")]
pub struct Matrix {
    data: Vec<Scalar>,
    rows: usize,
    cols: usize,
}

/// Serialized layout: shape plus the row-major payload.
#[derive(Serialize, Deserialize)]
struct MatrixRecord {
    rows: usize,
    cols: usize,
    data: Vec<Scalar>,
}

impl TryFrom<MatrixRecord> for Matrix {
    type Error = MatrixError;

    fn try_from(record: MatrixRecord) -> Result<Self> {
        Matrix::from_shape_vec((record.rows, record.cols), record.data)
    }
}

impl From<Matrix> for MatrixRecord {
    fn from(m: Matrix) -> Self {
        MatrixRecord {
            rows: m.rows,
            cols: m.cols,
            data: m.data,
        }
    }
}

impl Matrix {
    /// Allocate a `rows x cols` matrix. Contents are zeroed but callers
    /// should treat them as unspecified and fill before use.
    pub fn create(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, 0.0)
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, 0.0)
    }

    /// Allocate a `rows x cols` matrix with every element set to `value`.
    pub fn filled(rows: usize, cols: usize, value: Scalar) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            data: vec![value; len],
            rows,
            cols,
        })
    }

    /// `order x order` identity matrix.
    pub fn identity(order: usize) -> Result<Self> {
        let mut m = Self::zeros(order, order)?;
        for i in 0..order {
            m[(i, i)] = 1.0;
        }
        Ok(m)
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<Scalar>) -> Result<Self> {
        let (rows, cols) = shape;
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(MatrixError::LengthMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from a slice of equally sized rows.
    pub fn from_rows<R: AsRef<[Scalar]>>(rows: &[R]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(MatrixError::InvalidShape {
                    rows: nrows,
                    cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_shape_vec((nrows, ncols), data)
    }

    /// Free the matrix. Taking `self` by value means the handle cannot be
    /// used afterwards.
    pub fn release(self) {
        drop(self);
    }

    /// Copy every element of `src` into `self`; both must have the same shape.
    pub fn copy_from(&mut self, src: &Matrix) -> Result<()> {
        self.ensure_same_shape(src, "copy")?;
        self.data.copy_from_slice(&src.data);
        Ok(())
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: Scalar) {
        self.data.fill(value);
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Scalar] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[Scalar] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Checked element read.
    pub fn get(&self, row: usize, col: usize) -> Result<Scalar> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data[self.offset(row, col)])
    }

    pub fn to_rows(&self) -> Vec<Vec<Scalar>> {
        self.data.chunks(self.cols).map(|r| r.to_vec()).collect()
    }

    pub fn map_in_place<F>(&mut self, mut f: F)
    where
        F: FnMut(Scalar) -> Scalar,
    {
        for v in self.data.iter_mut() {
            *v = f(*v);
        }
    }

    /// True when both matrices have the same shape and every pair of
    /// elements differs by at most `tolerance`.
    pub fn approx_eq(&self, other: &Matrix, tolerance: Scalar) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    pub(crate) fn ensure_same_shape(&self, other: &Matrix, op: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    pub(crate) fn ensure_square(&self) -> Result<usize> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.rows)
    }

    /// Wrap a buffer whose shape the caller has already validated.
    pub(crate) fn from_parts(data: Vec<Scalar>, rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0 && data.len() == rows * cols);
        Self { data, rows, cols }
    }

    /// Replace this matrix with `other`, adopting its shape.
    pub(crate) fn replace_with(&mut self, other: Matrix) {
        *self = other;
    }
}

fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidShape { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(MatrixError::InvalidShape { rows, cols })
}

impl Index<(usize, usize)> for Matrix {
    type Output = Scalar;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}
