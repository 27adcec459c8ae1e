//! Classical Gram-Schmidt orthogonalization.

use crate::error::{LinalgError, Result};
use crate::math::Array1;

/// Turn `vectors` into an orthogonal basis spanning the same space.
///
/// Vectors are processed in order. Each new basis vector is the input minus
/// its projections `dot(u, v) / dot(u, u) * u` onto every basis vector `u`
/// built so far, with all coefficients taken against the original input `v`.
/// When `normalize` is set, each basis vector is scaled to unit length right
/// after it is built, so later projections see the normalized versions.
///
/// Linear independence is not checked. A dependent input leaves a zero
/// remainder, which normalizes to NaN.
///
/// # Errors
///
/// `EmptyInput` for an empty slice and `DimensionMismatch` when a vector's
/// length differs from the first one.
pub fn orthogonalize(vectors: &[Array1<f64>], normalize: bool) -> Result<Vec<Array1<f64>>> {
    let dim = vectors.first().ok_or(LinalgError::EmptyInput)?.len();
    if let Some((index, v)) = vectors.iter().enumerate().find(|(_, v)| v.len() != dim) {
        return Err(LinalgError::DimensionMismatch {
            index,
            expected: dim,
            got: v.len(),
        });
    }

    let mut basis: Vec<Array1<f64>> = Vec::with_capacity(vectors.len());
    for (i, v) in vectors.iter().enumerate() {
        let mut remainder = v.clone();
        for u in &basis {
            let coeff = u.dot(v) / u.dot(u);
            remainder.sub_scaled(u, coeff);
        }

        let norm = remainder.norm();
        if norm == 0.0 {
            log::warn!(
                "Gram-Schmidt remainder {} is zero; input is linearly dependent",
                i
            );
        }
        if normalize {
            remainder.scale_inplace(1.0 / norm);
        }
        basis.push(remainder);
    }

    Ok(basis)
}
