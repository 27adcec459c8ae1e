use std::error::Error;
use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::math::vector::Array1;

/// Dense row-major matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(ShapeError::BufferLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, ShapeError> {
        Self::from_shape_vec((rows, cols), data)
    }

    /// Build a matrix from a list of rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(ShapeError::RaggedRow {
                row,
                expected: ncols,
                got: r.len(),
            });
        }
        Self::from_shape_vec((nrows, ncols), rows.into_iter().flatten().collect())
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn row(&self, row: usize) -> Array1<T>
    where
        T: Clone,
    {
        assert!(row < self.rows, "row index out of bounds");
        Array1::from_vec(self.row_slice(row).to_vec())
    }

    pub fn column(&self, col: usize) -> Array1<T>
    where
        T: Clone,
    {
        assert!(col < self.cols, "column index out of bounds");
        let mut values = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            values.push(self[(row, col)].clone());
        }
        Array1::from_vec(values)
    }

    pub fn columns(&self) -> Vec<Array1<T>>
    where
        T: Clone,
    {
        (0..self.cols).map(|c| self.column(c)).collect()
    }

    pub fn select_rows(&self, indices: &[usize]) -> Array2<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &row in indices {
            data.extend_from_slice(self.row_slice(row));
        }
        Array2 {
            data,
            rows: indices.len(),
            cols: self.cols,
        }
    }

    pub fn transpose(&self) -> Array2<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)].clone());
            }
        }
        Array2 {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Array2<U>
    where
        F: FnMut(&T) -> U,
    {
        Array2 {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.rows).map(|r| self.row_slice(r).to_vec()).collect()
    }
}

impl<T> Array2<T>
where
    T: Clone + Zero,
{
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Array2 {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Assemble a matrix whose `j`-th column is `columns[j]`.
    pub fn from_columns(columns: &[Array1<T>]) -> Result<Self, ShapeError> {
        let rows = columns.first().map_or(0, |c| c.len());
        let cols = columns.len();
        if let Some((column, c)) = columns.iter().enumerate().find(|(_, c)| c.len() != rows) {
            return Err(ShapeError::RaggedColumn {
                column,
                expected: rows,
                got: c.len(),
            });
        }
        let mut out = Self::zeros(rows, cols);
        for (j, column) in columns.iter().enumerate() {
            for (i, value) in column.iter().enumerate() {
                out[(i, j)] = value.clone();
            }
        }
        Ok(out)
    }
}

impl<T> Array2<T>
where
    T: Clone + Zero + One,
{
    pub fn identity(n: usize) -> Self {
        let mut out = Self::zeros(n, n);
        for i in 0..n {
            out[(i, i)] = T::one();
        }
        out
    }
}

impl Array2<f64> {
    /// Matrix product `self · rhs`.
    pub fn matmul(&self, rhs: &Array2<f64>) -> Result<Array2<f64>, ShapeError> {
        if self.cols != rhs.rows {
            return Err(ShapeError::Incompatible {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        let mut out = Array2::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            let lhs_row = self.row_slice(i);
            for (k, &a) in lhs_row.iter().enumerate() {
                for j in 0..rhs.cols {
                    out[(i, j)] += a * rhs[(k, j)];
                }
            }
        }
        Ok(out)
    }

    pub fn diagonal(&self) -> Array1<f64> {
        (0..self.rows.min(self.cols)).map(|i| self[(i, i)]).collect()
    }

    /// Largest absolute value below the main diagonal, or `None` when the
    /// matrix has no such entries. NaN propagates.
    pub fn strictly_lower_abs_max(&self) -> Option<f64> {
        let mut max: Option<f64> = None;
        for row in 1..self.rows {
            for col in 0..row.min(self.cols) {
                let v = self[(row, col)].abs();
                max = Some(match max {
                    None => v,
                    Some(m) if m.is_nan() || v.is_nan() => f64::NAN,
                    Some(m) => m.max(v),
                });
            }
        }
        max
    }

    /// Largest elementwise absolute difference between two same-shaped matrices.
    pub fn max_abs_diff(&self, other: &Array2<f64>) -> f64 {
        assert_eq!(self.shape(), other.shape(), "max_abs_diff requires equal shapes");
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl<T> Index<(usize, usize)> for Array2<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Array2<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    BufferLength { rows: usize, cols: usize, len: usize },
    Incompatible { lhs: (usize, usize), rhs: (usize, usize) },
    RaggedRow { row: usize, expected: usize, got: usize },
    RaggedColumn { column: usize, expected: usize, got: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::BufferLength { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            ShapeError::Incompatible { lhs, rhs } => write!(
                f,
                "cannot multiply {}x{} by {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            ShapeError::RaggedRow { row, expected, got } => write!(
                f,
                "row {} has length {}, expected {}",
                row, got, expected
            ),
            ShapeError::RaggedColumn {
                column,
                expected,
                got,
            } => write!(
                f,
                "column {} has length {}, expected {}",
                column, got, expected
            ),
        }
    }
}

impl Error for ShapeError {}
