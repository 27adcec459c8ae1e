//! Dense vector and matrix types used by the factorization routines.
//!
//! `Array1` is a plain vector and `Array2` a row-major matrix. Both are
//! value types: every numeric operation allocates and returns a fresh
//! result, with the exception of the explicit `*_inplace`/`sub_scaled`
//! helpers on `Array1<f64>`.
pub mod matrix;
pub mod vector;

pub use matrix::{Array2, ShapeError};
pub use vector::Array1;
