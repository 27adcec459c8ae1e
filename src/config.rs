use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};

/// Stopping parameters for the QR eigenvalue iteration.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EigenConfig {
    /// Stop once every strictly-lower entry is below this magnitude.
    pub absolute_tol: f64,

    /// Relative stopping factor. Compared as `max < relative_tol * max`, so it
    /// only triggers for `relative_tol > 1`.
    pub relative_tol: f64,

    /// Upper bound on the number of QR similarity steps.
    pub max_iterations: usize,
}

impl EigenConfig {
    pub const DEFAULT_ABSOLUTE_TOL: f64 = 1e-6;
    pub const DEFAULT_RELATIVE_TOL: f64 = 1e-5;
    pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

    pub fn new(absolute_tol: f64, relative_tol: f64) -> Self {
        Self {
            absolute_tol,
            relative_tol,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.absolute_tol.is_finite() && self.absolute_tol >= 0.0) {
            return Err(LinalgError::InvalidConfig(format!(
                "absolute_tol must be a finite non-negative number, got {}",
                self.absolute_tol
            )));
        }
        if !(self.relative_tol.is_finite() && self.relative_tol >= 0.0) {
            return Err(LinalgError::InvalidConfig(format!(
                "relative_tol must be a finite non-negative number, got {}",
                self.relative_tol
            )));
        }
        if self.max_iterations == 0 {
            return Err(LinalgError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EigenConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ABSOLUTE_TOL, Self::DEFAULT_RELATIVE_TOL)
    }
}
