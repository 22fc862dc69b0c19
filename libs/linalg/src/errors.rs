//! Crate errors.

use thiserror::Error;

/// Matrix Error.
///
/// Every contract violation of a matrix or vector operation is reported through this type. Checks happen before
/// anything is allocated or mutated, so an error never leaves a partial result behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Index out of bounds.
    #[error("index ({row}, {column}) out of bounds for a {rows}x{columns} matrix")]
    IndexOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Number of rows of the matrix.
        rows: usize,
        /// Number of columns of the matrix.
        columns: usize,
    },

    /// A matrix must have at least one row and one column.
    #[error("invalid matrix size {0}x{1}, both dimensions must be positive")]
    InvalidSize(usize, usize),

    /// Integer overflow computing the number of entries.
    #[error("integer overflow computing the matrix size")]
    Arithmetic,

    /// Error building matrix.
    #[error("error building matrix, given data has {0} entries which does not match rows x columns = {1}")]
    Build(usize, usize),

    /// Rows of different lengths.
    #[error("ragged rows, expected {expected} columns but found a row with {found}")]
    RaggedRows {
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// Operand shapes are not compatible.
    #[error("shape mismatch in {operation}: {left:?} and {right:?}")]
    ShapeMismatch {
        /// Operation that was attempted.
        operation: &'static str,
        /// Shape of the left operand as (rows, columns).
        left: (usize, usize),
        /// Shape of the right operand as (rows, columns).
        right: (usize, usize),
    },

    /// The operation is only defined for square matrices.
    #[error("operation requires a square matrix, got {0}x{1}")]
    NotSquare(usize, usize),

    /// Non-invertible, singular matrix.
    #[error("singular matrix can't be inverted")]
    Singular,

    /// The vector length is zero within tolerance.
    #[error("vector has zero length")]
    ZeroLength,

    /// Cross product on vectors that don't have three components.
    #[error("cross product requires two 3-component vectors, got {0} and {1}")]
    CrossProductDimension(usize, usize),

    /// Requested column slice is empty or wider than the matrix.
    #[error("can't take {requested} columns from a matrix with {columns} columns")]
    InvalidColumnCount {
        /// Requested number of columns.
        requested: usize,
        /// Number of columns of the matrix.
        columns: usize,
    },

    /// The cursor traverses a grid with a different shape.
    #[error("cursor over {cursor_cells} cells with {cursor_columns} columns doesn't fit a {rows}x{columns} matrix")]
    CursorMismatch {
        /// Number of cells of the cursor grid.
        cursor_cells: usize,
        /// Number of columns of the cursor grid.
        cursor_columns: usize,
        /// Number of rows of the matrix.
        rows: usize,
        /// Number of columns of the matrix.
        columns: usize,
    },

    /// Cursor error.
    #[error("cursor error: {0}")]
    Cursor(#[from] CursorError),
}

/// Stepping an [`IndexCursor`](crate::cursor::IndexCursor) past its grid.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum CursorError {
    /// The cursor already passed the last cell.
    #[error("cursor already passed the last entry")]
    Exhausted,

    /// The cursor is on the last row.
    #[error("cursor is on the last row")]
    LastRow,
}
