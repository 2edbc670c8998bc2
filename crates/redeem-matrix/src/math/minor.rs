//! Minors, cofactor-expansion determinants, adjugate and inverse.
//!
//! The determinant is computed by Laplace expansion along the first row,
//! which costs O(n!) and has no pivoting. It is exact for small integer
//! matrices and fine for the small orders this crate targets; use
//! [`DeterminantMethod::Lu`] for anything larger.

use crate::config::{ComputeConfig, DeterminantMethod};
use crate::error::{MatrixError, Result};
use crate::math::matrix::{Matrix, Scalar};

impl Matrix {
    /// Copy of `self` without `row` and `col`, remaining elements in order.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        let (rows, cols) = self.shape();
        if row >= rows || col >= cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            });
        }
        if rows == 1 || cols == 1 {
            return Err(MatrixError::InvalidShape {
                rows: rows - 1,
                cols: cols - 1,
            });
        }
        Ok(self.minor_unchecked(row, col))
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> Matrix {
        let (rows, cols) = self.shape();
        let mut data = Vec::with_capacity((rows - 1) * (cols - 1));
        for i in (0..rows).filter(|&i| i != row) {
            let src = self.row_slice(i);
            for (j, v) in src.iter().enumerate() {
                if j != col {
                    data.push(*v);
                }
            }
        }
        Matrix::from_parts(data, rows - 1, cols - 1)
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> Result<Scalar> {
        self.determinant_with(&ComputeConfig::default())
    }

    /// Determinant using the method selected in `config`.
    pub fn determinant_with(&self, config: &ComputeConfig) -> Result<Scalar> {
        let order = self.ensure_square()?;
        match config.determinant {
            DeterminantMethod::Cofactor => {
                warn_if_expensive(order, config);
                Ok(expand(self))
            }
            DeterminantMethod::Lu => self.determinant_lu(),
        }
    }

    /// Matrix of signed minor determinants, `(-1)^(i+j) * det(minor(i, j))`.
    pub fn cofactor(&self) -> Result<Matrix> {
        let order = self.ensure_square()?;
        warn_if_expensive(order, &ComputeConfig::default());
        Ok(self.cofactor_matrix(order))
    }

    fn cofactor_matrix(&self, order: usize) -> Matrix {
        if order == 1 {
            // The only minor is empty and its determinant is 1.
            return Matrix::from_parts(vec![1.0], 1, 1);
        }
        let mut data = Vec::with_capacity(order * order);
        for i in 0..order {
            for j in 0..order {
                let v = {
                    let sub = self.minor_unchecked(i, j);
                    expand(&sub)
                };
                data.push(if (i + j) % 2 == 0 { v } else { -v });
            }
        }
        Matrix::from_parts(data, order, order)
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix> {
        Ok(self.cofactor()?.transpose())
    }

    /// `adjugate / det`, or [`MatrixError::Singular`] when the determinant
    /// is exactly zero.
    pub fn inverse(&self) -> Result<Matrix> {
        self.inverse_with(&ComputeConfig::default())
    }

    /// Inverse using the method selected in `config`.
    pub fn inverse_with(&self, config: &ComputeConfig) -> Result<Matrix> {
        if config.determinant == DeterminantMethod::Lu {
            return self.inverse_lu();
        }
        let order = self.ensure_square()?;
        let d = self.determinant_with(config)?;
        if d == 0.0 {
            log::debug!("inverse requested for singular {}x{} matrix", order, order);
            return Err(MatrixError::Singular);
        }
        let mut adj = self.cofactor_matrix(order).transpose();
        adj.scale(1.0 / d);
        Ok(adj)
    }
}

/// Recursive expansion for an already validated square matrix. Each minor is
/// dropped before the next column is expanded.
fn expand(m: &Matrix) -> Scalar {
    let order = m.nrows();
    if order == 1 {
        return m[(0, 0)];
    }
    log::trace!("cofactor expansion of order {}", order);
    let mut d = 0.0;
    for i in 0..order {
        let v = {
            let sub = m.minor_unchecked(0, i);
            expand(&sub) * m[(0, i)]
        };
        d += if i % 2 == 0 { v } else { -v };
    }
    d
}

fn warn_if_expensive(order: usize, config: &ComputeConfig) {
    if order > config.cofactor_warn_order {
        log::warn!(
            "cofactor expansion on a {}x{} matrix is O(n!) and may take a very long time",
            order,
            order
        );
    }
}
