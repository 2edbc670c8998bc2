use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Settings for the expensive square-matrix operations.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ComputeConfig {
    /// Algorithm used for determinants and inverses.
    pub determinant: DeterminantMethod,
    /// Algorithm used by [`Matrix::power_with`](crate::math::Matrix::power_with).
    pub power: PowerStrategy,
    /// Absolute tolerance for approximate comparisons.
    pub tolerance: f64,
    /// Orders above this log a warning before cofactor expansion starts.
    pub cofactor_warn_order: usize,
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self {
            determinant: DeterminantMethod::default(),
            power: PowerStrategy::default(),
            tolerance: 1e-9,
            cofactor_warn_order: 9,
        }
    }
}

impl ComputeConfig {
    pub fn new(determinant: DeterminantMethod, power: PowerStrategy) -> Self {
        Self {
            determinant,
            power,
            ..Self::default()
        }
    }
}

/// How determinants (and therefore inverses) are computed.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeterminantMethod {
    /// Recursive Laplace expansion along the first row.
    #[default]
    Cofactor,
    /// LU decomposition with partial pivoting.
    Lu,
}

impl FromStr for DeterminantMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cofactor" | "laplace" => Ok(DeterminantMethod::Cofactor),
            "lu" => Ok(DeterminantMethod::Lu),
            _ => Err(format!(
                "Unknown determinant method: {}. Expected one of: cofactor, lu",
                s
            )),
        }
    }
}

/// How integer powers are accumulated.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PowerStrategy {
    /// Multiply the accumulator by the base `n` times.
    #[default]
    Linear,
    /// Binary exponentiation. Same result up to rounding.
    Squaring,
}

impl FromStr for PowerStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(PowerStrategy::Linear),
            "squaring" | "square" => Ok(PowerStrategy::Squaring),
            _ => Err(format!(
                "Unknown power strategy: {}. Expected one of: linear, squaring",
                s
            )),
        }
    }
}
