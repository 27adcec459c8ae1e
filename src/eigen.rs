//! Eigenvalues and eigenvectors by the unshifted QR algorithm.
//!
//! The matrix is repeatedly factored as `M = Q·R` and replaced with the
//! similarity transform `Qᵗ·M·Q`, accumulating the `Q` factors, until the
//! strictly-lower triangle has decayed below the configured tolerance. No
//! shifts or deflation are applied, so matrices with complex or repeated
//! eigenvalues may only stop at the iteration cap.

use crate::config::EigenConfig;
use crate::error::{LinalgError, Result};
use crate::math::{Array1, Array2};
use crate::qr::decompose;

/// Eigenvalues in descending (signed) order, each paired with the eigenvector
/// at the same position.
#[derive(Clone, Debug, PartialEq)]
pub struct EigenResult {
    pub eigenvalues: Array1<f64>,
    pub eigenvectors: Vec<Array1<f64>>,
    /// Number of QR similarity steps that were applied.
    pub iterations: usize,
}

/// [`eigen`] with `EigenConfig::default()`.
pub fn eigen_default(m: &Array2<f64>) -> Result<EigenResult> {
    eigen(m, &EigenConfig::default())
}

/// Approximate the eigenvalues and eigenvectors of a square matrix.
///
/// Iteration stops when the largest strictly-lower-triangular magnitude
/// `max` satisfies `max < absolute_tol` or `max < relative_tol * max`. The
/// relative test is kept in this literal form; for positive `max` it only
/// fires when `relative_tol > 1`.
///
/// Eigenvalues are read off the diagonal and sorted by signed value, largest
/// first; equal values appear in reverse diagonal order. Eigenvectors are the
/// columns of the accumulated `Q`, permuted the same way.
///
/// # Errors
///
/// * `NotSquare` / `EmptyInput` for invalid input shapes.
/// * `InvalidConfig` when `config` fails validation.
/// * `NoConvergence` after `config.max_iterations` steps without meeting the
///   stopping rule.
/// * `NonFinite` when NaN or infinite values reach the stopping test, as
///   happens for linearly dependent columns.
pub fn eigen(m: &Array2<f64>, config: &EigenConfig) -> Result<EigenResult> {
    let (rows, cols) = m.shape();
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(LinalgError::EmptyInput);
    }
    config.validate()?;

    let mut m_current = m.clone();
    let mut q_acc = Array2::<f64>::identity(rows);
    let mut iterations = 0;

    loop {
        let max_val = m_current.strictly_lower_abs_max().unwrap_or(0.0);
        if !max_val.is_finite() {
            return Err(LinalgError::NonFinite {
                iteration: iterations,
            });
        }
        log::debug!("QR iteration {}: lower-triangular max {:e}", iterations, max_val);

        if max_val < config.absolute_tol || max_val < config.relative_tol * max_val {
            break;
        }
        if iterations == config.max_iterations {
            log::warn!(
                "QR algorithm stopped after {} iterations with lower-triangular max {:e}",
                iterations,
                max_val
            );
            return Err(LinalgError::NoConvergence {
                iterations,
                residual: max_val,
            });
        }

        let qr = decompose(&m_current)?;
        q_acc = q_acc.matmul(&qr.q)?;
        m_current = qr.q.transpose().matmul(&m_current)?.matmul(&qr.q)?;
        iterations += 1;
    }
    log::info!("QR algorithm converged after {} iterations", iterations);

    let diagonal = m_current.diagonal();
    let order = diagonal.argsort_desc();
    let eigenvalues = diagonal.select(&order);
    let vectors = q_acc.transpose().select_rows(&order);
    let eigenvectors = (0..vectors.nrows()).map(|k| vectors.row(k)).collect();

    Ok(EigenResult {
        eigenvalues,
        eigenvectors,
        iterations,
    })
}
