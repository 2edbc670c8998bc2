//! Integer powers of square matrices.

use crate::config::{ComputeConfig, PowerStrategy};
use crate::error::Result;
use crate::math::matrix::Matrix;

impl Matrix {
    /// `self^n` by repeated multiplication into an identity accumulator.
    ///
    /// Negative exponents invert the matrix first, so a singular matrix
    /// yields [`MatrixError::Singular`](crate::error::MatrixError::Singular).
    pub fn power(&self, n: i32) -> Result<Matrix> {
        self.power_with(n, &ComputeConfig::default())
    }

    /// `self^n` using the strategy and inversion method from `config`.
    pub fn power_with(&self, n: i32, config: &ComputeConfig) -> Result<Matrix> {
        let order = self.ensure_square()?;
        let exponent = n.unsigned_abs();
        let inverted;
        let base = if n < 0 {
            inverted = self.inverse_with(config)?;
            &inverted
        } else {
            self
        };
        log::debug!(
            "raising {}x{} matrix to power {} ({:?})",
            order,
            order,
            n,
            config.power
        );

        let mut acc = Matrix::identity(order)?;
        match config.power {
            PowerStrategy::Linear => {
                for _ in 0..exponent {
                    acc.multiply_in_place(base)?;
                }
            }
            PowerStrategy::Squaring => {
                let mut square = base.clone();
                let mut e = exponent;
                while e > 0 {
                    if e & 1 == 1 {
                        acc.multiply_in_place(&square)?;
                    }
                    e >>= 1;
                    if e > 0 {
                        square = square.multiply(&square)?;
                    }
                }
            }
        }
        Ok(acc)
    }
}
