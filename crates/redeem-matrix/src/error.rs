use std::error::Error;
use std::fmt;
use std::io;

/// Errors returned by matrix construction, arithmetic and persistence.
#[derive(Debug)]
pub enum MatrixError {
    /// A dimension was zero (or otherwise unrepresentable).
    InvalidShape { rows: usize, cols: usize },
    /// A flat buffer does not hold exactly `rows * cols` elements.
    LengthMismatch { rows: usize, cols: usize, len: usize },
    /// Operand shapes are incompatible for `op`.
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A square-only operation was given a non-square matrix.
    NotSquare { rows: usize, cols: usize },
    /// The determinant is exactly zero.
    Singular,
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// A persisted record is missing its markers or has an impossible header.
    CorruptFormat(String),
    /// A persisted record ended early.
    UnexpectedEof,
    Io(io::Error),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidShape { rows, cols } => {
                write!(f, "invalid matrix shape ({}x{})", rows, cols)
            }
            MatrixError::LengthMismatch { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            MatrixError::DimensionMismatch { op, left, right } => write!(
                f,
                "wrong dimensions for {} ({}x{} != {}x{})",
                op, left.0, left.1, right.0, right.1
            ),
            MatrixError::NotSquare { rows, cols } => {
                write!(f, "matrix is not square ({}x{})", rows, cols)
            }
            MatrixError::Singular => {
                write!(f, "determinant is 0, the matrix is not invertible")
            }
            MatrixError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "index ({}, {}) out of bounds for {}x{} matrix",
                row, col, rows, cols
            ),
            MatrixError::CorruptFormat(reason) => write!(f, "corrupt matrix record: {}", reason),
            MatrixError::UnexpectedEof => write!(f, "matrix record is truncated"),
            MatrixError::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MatrixError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MatrixError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            MatrixError::UnexpectedEof
        } else {
            MatrixError::Io(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
