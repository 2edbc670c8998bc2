//! Dense matrix type and the arithmetic built on it.
//!
//! `matrix` owns storage and lifecycle; the other modules add operations to
//! [`Matrix`] through separate `impl` blocks, layered in dependency order:
//! elementwise, algebra, minor (determinant engine), lu, power.
pub mod algebra;
pub mod elementwise;
pub mod lu;
pub mod matrix;
pub mod minor;
pub mod power;

pub use lu::LuDecomposition;
pub use matrix::{Matrix, Scalar};
