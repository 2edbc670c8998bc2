//! redeem-matrix: dense matrix arithmetic over `f64`.
//!
//! Provides an owned row-major [`Matrix`](math::Matrix) with scalar and
//! elementwise arithmetic, matrix products, cofactor-expansion determinants,
//! adjugates and inverses, integer powers, and a small binary record format
//! for persisting matrices.
//!
//! Every failure is reported through [`MatrixError`](error::MatrixError);
//! nothing in the crate aborts the process on bad input.
pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod utils;

pub use config::{ComputeConfig, DeterminantMethod, PowerStrategy};
pub use error::{MatrixError, Result};
pub use math::{Matrix, Scalar};
