//! QR decomposition built on classical Gram-Schmidt.

use crate::error::{LinalgError, Result};
use crate::gram_schmidt::orthogonalize;
use crate::math::Array2;

/// Result of [`decompose`]: `a == q · r`.
#[derive(Clone, Debug, PartialEq)]
pub struct QrDecomposition {
    /// Orthonormal columns.
    pub q: Array2<f64>,
    /// Upper-triangular up to rounding.
    pub r: Array2<f64>,
}

impl QrDecomposition {
    /// Multiply the factors back together.
    pub fn reconstruct(&self) -> Result<Array2<f64>> {
        Ok(self.q.matmul(&self.r)?)
    }
}

/// Factor a square matrix into `Q` (orthonormal) and `R` (upper-triangular).
///
/// The columns of `a` are orthonormalized with [`orthogonalize`] to form the
/// columns of `Q`, and `R` is computed as `Qᵗ · a`. Linearly dependent
/// columns produce NaN entries rather than an error.
pub fn decompose(a: &Array2<f64>) -> Result<QrDecomposition> {
    let (rows, cols) = a.shape();
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(LinalgError::EmptyInput);
    }
    log::trace!("QR decomposition of {}x{} matrix", rows, cols);

    let basis = orthogonalize(&a.columns(), true)?;
    let q = Array2::from_columns(&basis)?;
    let r = q.transpose().matmul(a)?;

    Ok(QrDecomposition { q, r })
}
