//! Matrix.

use crate::{cursor::IndexCursor, errors::MatrixError, tolerance::Tolerance};

/// Dense matrix of `f64` entries.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    /// Entries in row-major order.
    data: Vec<f64>,

    /// Number of rows.
    rows: usize,

    /// Number of columns.
    columns: usize,
}

impl Matrix {
    /// New matrix from entries laid out row after row.
    pub fn new(data: Vec<f64>, rows: usize, columns: usize) -> Result<Matrix, MatrixError> {
        let n = Self::cell_count(rows, columns)?;
        if n != data.len() {
            return Err(MatrixError::Build(data.len(), n));
        }
        Ok(Matrix { data, rows, columns })
    }

    /// Matrix with every entry set to `value`.
    pub fn filled(rows: usize, columns: usize, value: f64) -> Result<Matrix, MatrixError> {
        let n = Self::cell_count(rows, columns)?;
        Ok(Matrix { data: vec![value; n], rows, columns })
    }

    /// Zero matrix.
    pub fn zero(rows: usize, columns: usize) -> Result<Matrix, MatrixError> {
        Self::filled(rows, columns, 0.0)
    }

    /// Matrix from a grid of rows, which must all have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(grid: &[R]) -> Result<Matrix, MatrixError> {
        let columns = grid.first().map(|row| row.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(Self::cell_count(grid.len(), columns)?);
        for row in grid {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(MatrixError::RaggedRows { expected: columns, found: row.len() });
            }
            data.extend_from_slice(row);
        }
        Matrix::new(data, grid.len(), columns)
    }

    /// Identity matrix.
    pub fn identity(size: usize) -> Result<Matrix, MatrixError> {
        let mut m = Matrix::zero(size, size)?;
        for i in 0..size {
            m.set(i, i, 1.0)?;
        }
        Ok(m)
    }

    /// Builds a matrix whose shape is already known to match the data.
    pub(crate) fn from_parts(data: Vec<f64>, rows: usize, columns: usize) -> Matrix {
        Matrix { data, rows, columns }
    }

    fn cell_count(rows: usize, columns: usize) -> Result<usize, MatrixError> {
        if rows == 0 || columns == 0 {
            return Err(MatrixError::InvalidSize(rows, columns));
        }
        rows.checked_mul(columns).ok_or(MatrixError::Arithmetic)
    }

    /// Returns the entries in row-major order.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns the entries as a Vec consuming the matrix.
    pub fn to_vec(self) -> Vec<f64> {
        self.data
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of entries, `rows * columns`.
    pub fn cells(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    fn out_of_bounds(&self, row: usize, column: usize) -> MatrixError {
        MatrixError::IndexOutOfBounds { row, column, rows: self.rows, columns: self.columns }
    }

    fn index(&self, row: usize, column: usize) -> Result<usize, MatrixError> {
        if row >= self.rows || column >= self.columns {
            return Err(self.out_of_bounds(row, column));
        }
        Ok(row * self.columns + column)
    }

    /// Get the matrix entry `M[row,col]`.
    pub fn entry(&self, row: usize, col: usize) -> Result<&f64, MatrixError> {
        let index = self.index(row, col)?;
        self.data.get(index).ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Get the value at `M[row,column]`.
    pub fn get(&self, row: usize, column: usize) -> Result<f64, MatrixError> {
        let index = self.index(row, column)?;
        self.data.get(index).copied().ok_or_else(|| self.out_of_bounds(row, column))
    }

    /// Set the value at `M[row,column]`.
    pub fn set(&mut self, row: usize, column: usize, value: f64) -> Result<(), MatrixError> {
        *self.entry_mut(row, column)? = value;
        Ok(())
    }

    /// Mutable reference to `M[row,column]`.
    pub fn entry_mut(&mut self, row: usize, column: usize) -> Result<&mut f64, MatrixError> {
        let index = self.index(row, column)?;
        let error = self.out_of_bounds(row, column);
        self.data.get_mut(index).ok_or(error)
    }

    /// Get the value under the cursor.
    pub fn get_at(&self, cursor: &IndexCursor) -> Result<f64, MatrixError> {
        self.check_cursor(cursor)?;
        self.get(cursor.row(), cursor.column())
    }

    /// Set the value under the cursor.
    pub fn set_at(&mut self, cursor: &IndexCursor, value: f64) -> Result<(), MatrixError> {
        self.check_cursor(cursor)?;
        self.set(cursor.row(), cursor.column(), value)
    }

    fn check_cursor(&self, cursor: &IndexCursor) -> Result<(), MatrixError> {
        if cursor.columns() != self.columns || cursor.cells() != self.data.len() {
            return Err(MatrixError::CursorMismatch {
                cursor_cells: cursor.cells(),
                cursor_columns: cursor.columns(),
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// The entries of one row.
    pub fn row(&self, row: usize) -> Result<&[f64], MatrixError> {
        let start = self.index(row, 0)?;
        self.data.get(start..start + self.columns).ok_or_else(|| self.out_of_bounds(row, 0))
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> Result<&mut [f64], MatrixError> {
        let start = self.index(row, 0)?;
        let error = self.out_of_bounds(row, 0);
        let end = start + self.columns;
        self.data.get_mut(start..end).ok_or(error)
    }

    /// Joins `right` to the right of this matrix, `[self | right]`.
    pub fn augment(&self, right: &Matrix) -> Result<Matrix, MatrixError> {
        if self.rows != right.rows {
            return Err(MatrixError::ShapeMismatch {
                operation: "augment",
                left: (self.rows, self.columns),
                right: (right.rows, right.columns),
            });
        }
        let columns = self.columns + right.columns;
        let mut data = Vec::with_capacity(self.rows * columns);
        for row in 0..self.rows {
            data.extend_from_slice(self.row(row)?);
            data.extend_from_slice(right.row(row)?);
        }
        Ok(Matrix::from_parts(data, self.rows, columns))
    }

    /// The first `columns` columns as a new matrix.
    pub fn left_columns(&self, columns: usize) -> Result<Matrix, MatrixError> {
        self.column_block(0, columns)
    }

    /// The last `columns` columns as a new matrix.
    pub fn right_columns(&self, columns: usize) -> Result<Matrix, MatrixError> {
        self.column_block(self.columns.saturating_sub(columns), columns)
    }

    fn column_block(&self, first: usize, columns: usize) -> Result<Matrix, MatrixError> {
        if columns == 0 || columns > self.columns {
            return Err(MatrixError::InvalidColumnCount { requested: columns, columns: self.columns });
        }
        let mut block = Matrix::zero(self.rows, columns)?;
        let mut cursor = IndexCursor::over(&block);
        while cursor.has_more() {
            block.set_at(&cursor, self.get(cursor.row(), first + cursor.column())?)?;
            cursor.advance()?;
        }
        Ok(block)
    }

    /// Whether the matrix is square with ones on the diagonal and zeros elsewhere, within tolerance.
    pub fn is_identity(&self, tolerance: Tolerance) -> bool {
        if !self.is_square() {
            return false;
        }
        self.data.iter().enumerate().all(|(index, entry)| {
            let expected = if index / self.columns == index % self.columns { 1.0 } else { 0.0 };
            tolerance.approx_eq(expected, *entry)
        })
    }

    /// Whether both matrices have the same shape and all entries are equal within tolerance.
    pub fn approx_eq(&self, other: &Matrix, tolerance: Tolerance) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && self.data.iter().zip(&other.data).all(|(left, right)| tolerance.approx_eq(*left, *right))
    }
}
