//! LU decomposition with partial pivoting.
//!
//! An opt-in alternative to cofactor expansion: O(n^3) and numerically
//! better behaved, but results may differ from the cofactor path in the last
//! few bits. Selected with [`DeterminantMethod::Lu`](crate::config::DeterminantMethod).

use crate::error::{MatrixError, Result};
use crate::math::matrix::{Matrix, Scalar};

/// Compact `PA = LU` factorization of a square matrix.
///
/// `L` (unit diagonal implied) and `U` share one packed buffer, and the row
/// permutation is kept as a pivot vector.
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    lu: Vec<Scalar>,
    pivots: Vec<usize>,
    n: usize,
    sign: Scalar,
    /// True when some column had no non-zero pivot candidate.
    singular: bool,
}

impl LuDecomposition {
    pub fn decompose(a: &Matrix) -> Result<Self> {
        let n = a.ensure_square()?;
        let mut lu = a.as_slice().to_vec();
        let mut pivots: Vec<usize> = (0..n).collect();
        let mut sign = 1.0;
        let mut singular = false;

        for k in 0..n {
            let mut max_val = lu[k * n + k].abs();
            let mut max_row = k;
            for i in (k + 1)..n {
                let val = lu[i * n + k].abs();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_row != k {
                for j in 0..n {
                    lu.swap(k * n + j, max_row * n + j);
                }
                pivots.swap(k, max_row);
                sign = -sign;
            }

            let pivot = lu[k * n + k];
            if pivot == 0.0 {
                singular = true;
                continue;
            }

            for i in (k + 1)..n {
                let factor = lu[i * n + k] / pivot;
                lu[i * n + k] = factor;
                for j in (k + 1)..n {
                    let ukj = lu[k * n + j];
                    lu[i * n + j] -= factor * ukj;
                }
            }
        }

        Ok(Self {
            lu,
            pivots,
            n,
            sign,
            singular,
        })
    }

    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    pub fn is_singular(&self) -> bool {
        self.singular
    }

    /// `sign * product(diag(U))`
    pub fn det(&self) -> Scalar {
        if self.singular {
            return 0.0;
        }
        let n = self.n;
        let mut d = self.sign;
        for i in 0..n {
            d *= self.lu[i * n + i];
        }
        d
    }

    /// Solve `A x = b` for one right-hand side.
    pub fn solve(&self, b: &[Scalar]) -> Result<Vec<Scalar>> {
        if self.singular {
            return Err(MatrixError::Singular);
        }
        let n = self.n;
        if b.len() != n {
            return Err(MatrixError::DimensionMismatch {
                op: "lu solve",
                left: (n, n),
                right: (b.len(), 1),
            });
        }

        let mut x: Vec<Scalar> = self.pivots.iter().map(|&pi| b[pi]).collect();

        // Forward substitution: Ly = Pb
        #[allow(clippy::needless_range_loop)]
        for i in 1..n {
            for j in 0..i {
                let lij_xj = self.lu[i * n + j] * x[j];
                x[i] -= lij_xj;
            }
        }

        // Back substitution: Ux = y
        #[allow(clippy::needless_range_loop)]
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                let uij_xj = self.lu[i * n + j] * x[j];
                x[i] -= uij_xj;
            }
            x[i] /= self.lu[i * n + i];
        }

        Ok(x)
    }

    /// Solve `A X = I` column by column.
    pub fn inverse(&self) -> Result<Matrix> {
        let n = self.n;
        let mut inv = Matrix::zeros(n, n)?;
        let mut e = vec![0.0; n];
        for col in 0..n {
            e.fill(0.0);
            e[col] = 1.0;
            let x = self.solve(&e)?;
            for (row, v) in x.into_iter().enumerate() {
                inv[(row, col)] = v;
            }
        }
        Ok(inv)
    }
}

impl Matrix {
    pub fn determinant_lu(&self) -> Result<Scalar> {
        Ok(LuDecomposition::decompose(self)?.det())
    }

    pub fn inverse_lu(&self) -> Result<Matrix> {
        LuDecomposition::decompose(self)?.inverse()
    }
}
