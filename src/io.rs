//! JSON readers for matrices, vector sets and eigen configuration, plus the
//! report structs the CLI writes to stdout.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::EigenConfig;
use crate::eigen::EigenResult;
use crate::math::{Array1, Array2};
use crate::qr::QrDecomposition;

/// Parse a matrix given as a JSON array of rows, e.g. `[[2, 1], [1, 2]]`.
pub fn parse_matrix_json(content: &str) -> Result<Array2<f64>> {
    let rows: Vec<Vec<f64>> =
        serde_json::from_str(content).context("Matrix must be a JSON array of rows")?;
    let matrix = Array2::from_rows(rows).context("Matrix rows must all have the same length")?;
    Ok(matrix)
}

/// Parse a list of vectors given as a JSON array of arrays.
pub fn parse_vectors_json(content: &str) -> Result<Vec<Array1<f64>>> {
    let vectors: Vec<Vec<f64>> =
        serde_json::from_str(content).context("Vectors must be a JSON array of arrays")?;
    Ok(vectors.into_iter().map(Array1::from_vec).collect())
}

pub fn read_matrix_json<P: AsRef<Path>>(path: P) -> Result<Array2<f64>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read matrix: {}", path.as_ref().display()))?;
    parse_matrix_json(&content)
        .with_context(|| format!("Failed to parse matrix: {}", path.as_ref().display()))
}

pub fn read_vectors_json<P: AsRef<Path>>(path: P) -> Result<Vec<Array1<f64>>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read vectors: {}", path.as_ref().display()))?;
    parse_vectors_json(&content)
        .with_context(|| format!("Failed to parse vectors: {}", path.as_ref().display()))
}

/// Load an eigen configuration from a JSON file. Missing fields take their
/// default values.
pub fn load_eigen_config<P: AsRef<Path>>(path: P) -> Result<EigenConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: EigenConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EigenReport {
    pub eigenvalues: Vec<f64>,
    pub eigenvectors: Vec<Vec<f64>>,
    pub iterations: usize,
}

impl From<&EigenResult> for EigenReport {
    fn from(result: &EigenResult) -> Self {
        Self {
            eigenvalues: result.eigenvalues.to_vec(),
            eigenvectors: result.eigenvectors.iter().map(|v| v.to_vec()).collect(),
            iterations: result.iterations,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrReport {
    pub q: Vec<Vec<f64>>,
    pub r: Vec<Vec<f64>>,
}

impl From<&QrDecomposition> for QrReport {
    fn from(qr: &QrDecomposition) -> Self {
        Self {
            q: qr.q.to_rows(),
            r: qr.r.to_rows(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasisReport {
    pub basis: Vec<Vec<f64>>,
}

impl From<&[Array1<f64>]> for BasisReport {
    fn from(basis: &[Array1<f64>]) -> Self {
        Self {
            basis: basis.iter().map(|v| v.to_vec()).collect(),
        }
    }
}
