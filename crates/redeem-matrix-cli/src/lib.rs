//! Helpers behind the `redeem-matrix` command line tool.
//!
//! Each function wraps one library operation with file handling and
//! `anyhow` context so `main` only has to parse arguments and dispatch.
use std::path::Path;

use anyhow::{Context, Result};

use redeem_matrix::io::{load_from_path, save_to_path};
use redeem_matrix::utils::display::format_matrix;
use redeem_matrix::{ComputeConfig, Matrix, Scalar};

/// Load a compute configuration from a JSON file.
pub fn load_compute_config<P: AsRef<Path>>(path: P) -> Result<ComputeConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ComputeConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    load_from_path(&path)
        .with_context(|| format!("Failed to load matrix: {}", path.as_ref().display()))
}

pub fn write_matrix<P: AsRef<Path>>(m: &Matrix, path: P) -> Result<()> {
    save_to_path(m, &path)
        .with_context(|| format!("Failed to save matrix: {}", path.as_ref().display()))?;
    log::info!(
        "[ReDeeM::Matrix] Wrote {}x{} matrix to {}",
        m.nrows(),
        m.ncols(),
        path.as_ref().display()
    );
    Ok(())
}

/// Read a matrix from JSON (`{"rows": .., "cols": .., "data": [..]}`).
pub fn import_json<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read JSON matrix: {}", path.as_ref().display()))?;
    let m: Matrix = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON matrix: {}", path.as_ref().display()))?;
    Ok(m)
}

pub fn export_json(m: &Matrix) -> Result<String> {
    serde_json::to_string_pretty(m).context("Failed to serialize matrix to JSON")
}

pub fn identity(order: usize) -> Result<Matrix> {
    Matrix::identity(order).with_context(|| format!("Cannot build identity of order {}", order))
}

pub fn fill(rows: usize, cols: usize, value: Scalar) -> Result<Matrix> {
    Matrix::filled(rows, cols, value)
        .with_context(|| format!("Cannot build {}x{} matrix", rows, cols))
}

pub fn determinant(m: &Matrix, config: &ComputeConfig) -> Result<Scalar> {
    log::info!(
        "[ReDeeM::Matrix] Determinant of {}x{} matrix using {:?}",
        m.nrows(),
        m.ncols(),
        config.determinant
    );
    Ok(m.determinant_with(config)?)
}

/// Invert `m` and warn when `m * inverse` strays from the identity by more
/// than `config.tolerance`.
pub fn inverse(m: &Matrix, config: &ComputeConfig) -> Result<Matrix> {
    let inv = m.inverse_with(config)?;
    let check = m.multiply(&inv)?;
    if !check.approx_eq(&Matrix::identity(m.nrows())?, config.tolerance) {
        log::warn!(
            "[ReDeeM::Matrix] Inverse exceeds tolerance {:e}; the matrix may be ill-conditioned",
            config.tolerance
        );
    }
    Ok(inv)
}

pub fn power(m: &Matrix, exponent: i32, config: &ComputeConfig) -> Result<Matrix> {
    Ok(m.power_with(exponent, config)?)
}

pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    Ok(a.multiply(b)?)
}

/// Human readable rendering used by `show`.
pub fn describe(m: &Matrix, decimal_places: usize, edge: Option<usize>) -> String {
    format_matrix(m, decimal_places, edge, edge)
}
