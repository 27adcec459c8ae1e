//! qr-eig: from-scratch dense linear algebra.
//!
//! Three routines, each built on the one before it:
//!
//! * [`gram_schmidt::orthogonalize`] turns a set of vectors into an
//!   orthogonal (optionally orthonormal) basis with classical Gram-Schmidt.
//! * [`qr::decompose`] factors a square matrix into `Q·R`.
//! * [`eigen::eigen`] runs the unshifted QR algorithm to approximate
//!   eigenvalues and eigenvectors.
//!
//! The dense `Array1`/`Array2` types live in [`math`]; JSON helpers used by
//! the `qr-eig` binary live in [`io`].
pub mod config;
pub mod eigen;
pub mod error;
pub mod gram_schmidt;
pub mod io;
pub mod math;
pub mod qr;

pub use config::EigenConfig;
pub use eigen::{eigen, eigen_default, EigenResult};
pub use error::{LinalgError, Result};
pub use gram_schmidt::orthogonalize;
pub use qr::{decompose, QrDecomposition};
