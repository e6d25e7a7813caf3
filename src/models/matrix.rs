//! Dense row-major matrix used for tabular pedigree output and descriptors.

use std::ops::{Index, IndexMut};

use crate::error::{PedigreeError, Result};

/// Dense row-major matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Matrix<T> {
    /// Create a `rows x cols` matrix filled with `T::default()`
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }

    /// Matrix with rows and columns swapped
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::new(self.cols, self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                transposed[(col, row)] = self[(row, col)].clone();
            }
        }
        transposed
    }

    /// Copy of one column, top to bottom
    ///
    /// # Panics
    /// Panics if `col` is out of bounds.
    #[must_use]
    pub fn column(&self, col: usize) -> Vec<T> {
        assert!(col < self.cols, "column {col} out of bounds");
        self.iter_rows().map(|row| row[col].clone()).collect()
    }
}

impl<T> Matrix<T> {
    /// Build a matrix from rows that all have the same length
    ///
    /// `cols` is used when `rows` is empty.
    pub fn from_rows(rows: Vec<Vec<T>>, cols: usize) -> Result<Self> {
        let cols = rows.first().map_or(cols, Vec::len);
        let row_count = rows.len();
        let mut data = Vec::with_capacity(row_count * cols);
        for (position, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(PedigreeError::ShapeMismatch(format!(
                    "row {position} has {} columns, expected {cols}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    /// Build a matrix from row-major data
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(PedigreeError::ShapeMismatch(format!(
                "{} values cannot fill a {rows}x{cols} matrix",
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(PedigreeError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.rows).then(|| &self.data[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterate over rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |row| &self.data[row * self.cols..(row + 1) * self.cols])
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        &mut self.data[row * self.cols + col]
    }
}
