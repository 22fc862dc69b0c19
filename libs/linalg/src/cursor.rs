//! Cursor over the cells of a row-major grid.

use crate::{
    errors::{CursorError, MatrixError},
    matrix::Matrix,
};

/// Position in a flattened `rows x columns` grid.
///
/// The cursor never holds matrix data, it only derives row and column from a linear position. Operations taking
/// both a matrix and a cursor check that the two describe the same grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexCursor {
    columns: usize,
    cells: usize,
    position: usize,
}

impl IndexCursor {
    /// Cursor at the first cell of a `rows x columns` grid.
    ///
    /// Fails with [`MatrixError::Arithmetic`] if the number of cells overflows.
    pub fn new(rows: usize, columns: usize) -> Result<Self, MatrixError> {
        let cells = rows.checked_mul(columns).ok_or(MatrixError::Arithmetic)?;
        Ok(Self { columns, cells, position: 0 })
    }

    /// Cursor at the first cell of the given matrix.
    pub fn over(matrix: &Matrix) -> Self {
        Self { columns: matrix.columns(), cells: matrix.cells(), position: 0 }
    }

    /// Number of rows in the grid.
    pub fn rows(&self) -> usize {
        self.cells.checked_div(self.columns).unwrap_or(0)
    }

    /// Number of columns in the grid.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of cells in the grid.
    pub fn cells(&self) -> usize {
        self.cells
    }

    /// True while the cursor points at a cell.
    pub fn has_more(&self) -> bool {
        self.position < self.cells
    }

    /// True if the cursor is not on the last row.
    pub fn has_next_row(&self) -> bool {
        self.position.saturating_add(self.columns) < self.cells
    }

    /// Moves to the next cell and returns the new position.
    pub fn advance(&mut self) -> Result<usize, CursorError> {
        if !self.has_more() {
            return Err(CursorError::Exhausted);
        }
        self.position += 1;
        Ok(self.position)
    }

    /// Moves to the first cell of the following row and returns the new position.
    pub fn advance_to_next_row(&mut self) -> Result<usize, CursorError> {
        if !self.has_next_row() {
            return Err(CursorError::LastRow);
        }
        self.position = (self.row() + 1) * self.columns;
        Ok(self.position)
    }

    /// Moves back to the first cell.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Row of the current position.
    pub fn row(&self) -> usize {
        self.position.checked_div(self.columns).unwrap_or(0)
    }

    /// Column of the current position.
    pub fn column(&self) -> usize {
        self.position.checked_rem(self.columns).unwrap_or(0)
    }

    /// The linear position, `row * columns + column`.
    pub fn linear_index(&self) -> usize {
        self.position
    }
}
