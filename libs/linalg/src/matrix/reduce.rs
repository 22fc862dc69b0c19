//! Row reduction.
//!
//! Elementary row operations, reduced row echelon form, upper triangular form, inverse and determinant. The row
//! operations, [`Matrix::rref`] and [`Matrix::upper_triangular`] mutate the matrix in place, [`Matrix::inverse`],
//! [`Matrix::determinant`] and [`Matrix::rank`] work on a copy.

use crate::{errors::MatrixError, matrix::Matrix, tolerance::Tolerance};
use tracing::{debug, trace};

impl Matrix {
    fn check_row(&self, row: usize) -> Result<(), MatrixError> {
        if row >= self.rows() {
            return Err(MatrixError::IndexOutOfBounds { row, column: 0, rows: self.rows(), columns: self.columns() });
        }
        Ok(())
    }

    fn check_square(&self) -> Result<(), MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare(self.rows(), self.columns()));
        }
        Ok(())
    }

    /// Swaps two rows in place.
    pub fn row_swap(&mut self, first: usize, second: usize) -> Result<(), MatrixError> {
        self.check_row(first)?;
        self.check_row(second)?;
        for column in 0..self.columns() {
            let value = self.get(first, column)?;
            let other = std::mem::replace(self.entry_mut(second, column)?, value);
            self.set(first, column, other)?;
        }
        Ok(())
    }

    /// Multiplies a row by a scalar in place.
    pub fn row_scale(&mut self, scalar: f64, row: usize) -> Result<(), MatrixError> {
        for entry in self.row_mut(row)? {
            *entry *= scalar;
        }
        Ok(())
    }

    /// Adds `scalar` times row `from` to row `to` in place.
    pub fn row_add(&mut self, to: usize, scalar: f64, from: usize) -> Result<(), MatrixError> {
        self.check_row(to)?;
        self.check_row(from)?;
        for column in 0..self.columns() {
            let source = self.get(from, column)?;
            *self.entry_mut(to, column)? += source * scalar;
        }
        Ok(())
    }

    /// Column of the first non zero entry of a row, or the number of columns for a zero row.
    pub fn leading_index(&self, row: usize, tolerance: Tolerance) -> Result<usize, MatrixError> {
        let entries = self.row(row)?;
        Ok(entries.iter().position(|entry| !tolerance.is_zero(*entry)).unwrap_or(entries.len()))
    }

    fn leading_entry(&self, row: usize, tolerance: Tolerance) -> Result<f64, MatrixError> {
        Ok(self.row(row)?.iter().copied().find(|entry| !tolerance.is_zero(*entry)).unwrap_or(0.0))
    }

    fn is_zero_row(&self, row: usize, tolerance: Tolerance) -> Result<bool, MatrixError> {
        Ok(self.row(row)?.iter().all(|entry| tolerance.is_zero(*entry)))
    }

    /// Bubble sorts rows `start..` by leading index, returns the number of swaps.
    ///
    /// The sort is stable, so zero rows end up at the bottom and rows sharing a leading index keep their order.
    fn sort_rows(&mut self, start: usize, tolerance: Tolerance) -> Result<usize, MatrixError> {
        let mut swaps = 0;
        loop {
            let mut swapped = false;
            let mut previous = self.leading_index(start, tolerance)?;
            for row in start + 1..self.rows() {
                let current = self.leading_index(row, tolerance)?;
                if previous > current {
                    self.row_swap(row, row - 1)?;
                    swaps += 1;
                    swapped = true;
                    break;
                }
                previous = current;
            }
            if !swapped {
                break;
            }
        }
        trace!(start, swaps, "sorted rows by leading index");
        Ok(swaps)
    }

    /// Reduces the matrix to reduced row echelon form in place.
    ///
    /// Rows are ordered by leading index, each pivot is scaled to one and eliminated from the rows below. A second
    /// pass from the bottom eliminates every pivot column from the rows above, zeroing those entries explicitly so
    /// rounding noise doesn't survive.
    pub fn rref(&mut self, tolerance: Tolerance) -> Result<(), MatrixError> {
        let mut pivots = 0;
        for row in 0..self.rows() {
            self.sort_rows(row, tolerance)?;
            // rows are sorted, everything below a zero row is zero too
            if self.is_zero_row(row, tolerance)? {
                break;
            }
            let lead = self.leading_index(row, tolerance)?;
            self.row_scale(1.0 / self.leading_entry(row, tolerance)?, row)?;
            for below in row + 1..self.rows() {
                let factor = self.get(below, lead)?;
                self.row_add(below, -factor, row)?;
            }
            pivots += 1;
        }

        for row in (1..self.rows()).rev() {
            if self.is_zero_row(row, tolerance)? {
                continue;
            }
            let lead = self.leading_index(row, tolerance)?;
            for above in (0..row).rev() {
                let factor = self.get(above, lead)?;
                self.row_add(above, -factor, row)?;
                self.set(above, lead, 0.0)?;
            }
        }
        debug!(rows = self.rows(), columns = self.columns(), pivots, "reduced to row echelon form");
        Ok(())
    }

    /// Reduces a square matrix to upper triangular form in place.
    ///
    /// Only row swaps and row additions are used, so the determinant is preserved up to sign. Returns that sign,
    /// `-1.0` if an odd number of swaps was performed and `1.0` otherwise.
    pub fn upper_triangular(&mut self, tolerance: Tolerance) -> Result<f64, MatrixError> {
        self.check_square()?;
        let mut sign = 1.0;
        for row in 0..self.rows() {
            if self.sort_rows(row, tolerance)? % 2 != 0 {
                sign = -sign;
            }
            if self.is_zero_row(row, tolerance)? {
                break;
            }
            let lead = self.leading_index(row, tolerance)?;
            let lead_entry = self.leading_entry(row, tolerance)?;
            for below in row + 1..self.rows() {
                let ratio = -self.get(below, lead)? / lead_entry;
                self.row_add(below, ratio, row)?;
            }
        }
        debug!(size = self.rows(), sign, "reduced to upper triangular form");
        Ok(sign)
    }

    /// Inverse of the matrix using Gauss-Jordan elimination, O(N^3).
    pub fn inverse(&self, tolerance: Tolerance) -> Result<Matrix, MatrixError> {
        self.check_square()?;
        let n = self.columns();
        let mut augmented = self.augment(&Matrix::identity(n)?)?;
        augmented.rref(tolerance)?;
        if !augmented.left_columns(n)?.is_identity(tolerance) {
            debug!(size = n, "matrix is singular");
            return Err(MatrixError::Singular);
        }
        augmented.right_columns(n)
    }

    /// Matrix determinant, product of the diagonal of the upper triangular form.
    pub fn determinant(&self, tolerance: Tolerance) -> Result<f64, MatrixError> {
        let mut triangular = self.clone();
        let sign = triangular.upper_triangular(tolerance)?;
        let mut determinant = 1.0;
        for i in 0..triangular.rows() {
            determinant *= triangular.get(i, i)?;
        }
        let determinant = determinant * sign;
        debug!(size = self.rows(), determinant, "computed determinant");
        Ok(determinant)
    }

    /// Number of non zero rows in reduced row echelon form.
    pub fn rank(&self, tolerance: Tolerance) -> Result<usize, MatrixError> {
        let mut reduced = self.clone();
        reduced.rref(tolerance)?;
        let mut rank = 0;
        for row in 0..reduced.rows() {
            if !reduced.is_zero_row(row, tolerance)? {
                rank += 1;
            }
        }
        Ok(rank)
    }
}
