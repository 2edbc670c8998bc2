//! Matrix-matrix algebra: sums, products, transpose and the dot product.

use crate::error::{MatrixError, Result};
use crate::math::matrix::Matrix;

impl Matrix {
    /// Elementwise sum of two matrices of identical shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.ensure_same_shape(other, "addition")?;
        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| a + b)
            .collect();
        Matrix::from_shape_vec(self.shape(), data)
    }

    /// `self - other`, computed in one pass. Each element equals
    /// `a + (-1 * b)`, the same value as adding a negated copy of `other`.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        self.ensure_same_shape(other, "subtraction")?;
        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| a + (-1.0 * b))
            .collect();
        Matrix::from_shape_vec(self.shape(), data)
    }

    pub fn add_assign_matrix(&mut self, other: &Matrix) -> Result<()> {
        self.ensure_same_shape(other, "addition")?;
        for (a, b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a += b;
        }
        Ok(())
    }

    pub fn subtract_assign_matrix(&mut self, other: &Matrix) -> Result<()> {
        self.ensure_same_shape(other, "subtraction")?;
        for (a, b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a += -1.0 * b;
        }
        Ok(())
    }

    /// Standard matrix product, `self.ncols()` must equal `other.nrows()`.
    ///
    /// Every output cell is accumulated from zero over the contraction index
    /// in ascending order; cells are produced row by row.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.ncols() != other.nrows() {
            return Err(MatrixError::DimensionMismatch {
                op: "multiplication",
                left: self.shape(),
                right: other.shape(),
            });
        }
        let (rows, cols, inner) = (self.nrows(), other.ncols(), self.ncols());
        log::trace!("multiply {}x{} by {}x{}", rows, inner, inner, cols);

        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            let lhs = self.row_slice(i);
            for j in 0..cols {
                let mut sum = 0.0;
                for (n, a) in lhs.iter().enumerate() {
                    sum += a * other[(n, j)];
                }
                data.push(sum);
            }
        }
        Matrix::from_shape_vec((rows, cols), data)
    }

    /// Replace `self` with `self * other`. The receiver takes the product's shape.
    pub fn multiply_in_place(&mut self, other: &Matrix) -> Result<()> {
        let product = self.multiply(other)?;
        self.replace_with(product);
        Ok(())
    }

    /// New `cols x rows` matrix with `t[(i, j)] == self[(j, i)]`.
    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = (self.ncols(), self.nrows());
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(self[(j, i)]);
            }
        }
        Matrix::from_parts(data, rows, cols)
    }

    pub fn transpose_in_place(&mut self) {
        let t = self.transpose();
        self.replace_with(t);
    }

    /// `self * other^T`; both operands must have the same number of columns.
    pub fn dot_product(&self, other: &Matrix) -> Result<Matrix> {
        if self.ncols() != other.ncols() {
            return Err(MatrixError::DimensionMismatch {
                op: "dot product",
                left: self.shape(),
                right: other.shape(),
            });
        }
        self.multiply(&other.transpose())
    }
}
