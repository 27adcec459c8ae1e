use thiserror::Error;

use crate::math::ShapeError;

pub type Result<T> = std::result::Result<T, LinalgError>;

/// Errors raised by the factorization and eigenvalue routines.
///
/// Linearly dependent inputs are not reported by the orthogonalizer or the
/// QR factorization; the resulting NaN values are only caught by the eigen
/// solver's stopping test (`NonFinite`).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("input is empty")]
    EmptyInput,

    #[error("vector {index} has length {got}, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        got: usize,
    },

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("invalid eigen configuration: {0}")]
    InvalidConfig(String),

    #[error("did not converge within {iterations} iterations (lower-triangular max {residual:e})")]
    NoConvergence { iterations: usize, residual: f64 },

    #[error("non-finite values encountered at iteration {iteration}")]
    NonFinite { iteration: usize },
}
