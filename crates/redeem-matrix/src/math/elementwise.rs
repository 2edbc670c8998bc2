//! Scalar arithmetic applied to every element, and the Hadamard product.

use crate::error::Result;
use crate::math::matrix::{Matrix, Scalar};

impl Matrix {
    /// Add `n` to every element in place.
    pub fn add_scalar(&mut self, n: Scalar) {
        for v in self.as_mut_slice() {
            *v += n;
        }
    }

    pub fn subtract_scalar(&mut self, n: Scalar) {
        self.add_scalar(-n);
    }

    /// Multiply every element by `n` in place.
    pub fn scale(&mut self, n: Scalar) {
        for v in self.as_mut_slice() {
            *v *= n;
        }
    }

    /// Copy of `self` with every element multiplied by `n`.
    pub fn scaled(&self, n: Scalar) -> Matrix {
        let mut r = self.clone();
        r.scale(n);
        r
    }

    /// Elementwise product of two matrices of identical shape.
    pub fn hadamard(&self, other: &Matrix) -> Result<Matrix> {
        self.ensure_same_shape(other, "hadamard product")?;
        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| a * b)
            .collect();
        Matrix::from_shape_vec(self.shape(), data)
    }
}
