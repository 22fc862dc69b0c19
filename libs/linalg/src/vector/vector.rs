//! Column vector.

use crate::{errors::MatrixError, matrix::Matrix};
use std::fmt;

/// Column vector, a matrix with a single column.
///
/// The vector wraps its [`Matrix`] rather than extending it: matrix operations are reachable through
/// [`Vector::as_matrix`] and vector specific operations live on this type alone.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    matrix: Matrix,
}

impl Vector {
    /// Creates a new vector from its components.
    pub fn new(components: Vec<f64>) -> Result<Vector, MatrixError> {
        let len = components.len();
        Ok(Vector { matrix: Matrix::new(components, len, 1)? })
    }

    /// Zero vector.
    pub fn zero(len: usize) -> Result<Vector, MatrixError> {
        Ok(Vector { matrix: Matrix::zero(len, 1)? })
    }

    /// Vector with every component set to `value`.
    pub fn filled(len: usize, value: f64) -> Result<Vector, MatrixError> {
        Ok(Vector { matrix: Matrix::filled(len, 1, value)? })
    }

    /// Standard basis vector: zero everywhere except a one at `coordinate`.
    pub fn basis(len: usize, coordinate: usize) -> Result<Vector, MatrixError> {
        if coordinate >= len {
            return Err(MatrixError::IndexOutOfBounds { row: coordinate, column: 0, rows: len, columns: 1 });
        }
        let mut basis = Vector::zero(len)?;
        basis.set(coordinate, 1.0)?;
        Ok(basis)
    }

    /// Wraps a matrix already known to have a single column.
    pub(crate) fn from_column(matrix: Matrix) -> Vector {
        Vector { matrix }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.matrix.rows()
    }

    /// Always false, a vector has at least one component.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the component at `index`.
    pub fn get(&self, index: usize) -> Result<f64, MatrixError> {
        self.matrix.get(index, 0)
    }

    /// Set the component at `index`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), MatrixError> {
        self.matrix.set(index, 0, value)
    }

    /// The components.
    pub fn components(&self) -> &[f64] {
        self.matrix.data()
    }

    /// Iterator over the components.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.components().iter()
    }

    /// The vector as a single column matrix.
    pub fn as_matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Converts into a single column matrix.
    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }
}

impl AsRef<Matrix> for Vector {
    fn as_ref(&self) -> &Matrix {
        &self.matrix
    }
}

impl From<Vector> for Matrix {
    fn from(vector: Vector) -> Self {
        vector.matrix
    }
}

impl TryFrom<Matrix> for Vector {
    type Error = MatrixError;

    fn try_from(matrix: Matrix) -> Result<Self, Self::Error> {
        if matrix.columns() != 1 {
            return Err(MatrixError::ShapeMismatch {
                operation: "vector",
                left: (matrix.rows(), matrix.columns()),
                right: (matrix.rows(), 1),
            });
        }
        Ok(Vector { matrix })
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[test]
    fn new() {
        let v = Vector::new(vec![1.0, -2.0, 3.5]).unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v.components(), &[1.0, -2.0, 3.5]);
        assert_eq!(v.as_matrix().columns(), 1);
    }

    #[test]
    fn empty() {
        assert_eq!(Vector::new(Vec::new()), Err(MatrixError::InvalidSize(0, 1)));
        assert_eq!(Vector::zero(0), Err(MatrixError::InvalidSize(0, 1)));
    }

    #[test]
    fn get_set() {
        let mut v = Vector::filled(3, 2.0).unwrap();
        v.set(2, -1.0).unwrap();
        assert_eq!(v.get(2), Ok(-1.0));
        assert_eq!(v.get(0), Ok(2.0));
        let expected = MatrixError::IndexOutOfBounds { row: 3, column: 0, rows: 3, columns: 1 };
        assert_eq!(v.get(3), Err(expected.clone()));
        assert_eq!(v.set(3, 0.0), Err(expected));
    }

    #[rstest]
    #[case(3, 0, &[1.0, 0.0, 0.0])]
    #[case(3, 2, &[0.0, 0.0, 1.0])]
    #[case(1, 0, &[1.0])]
    fn basis(#[case] len: usize, #[case] coordinate: usize, #[case] expected: &[f64]) {
        let v = Vector::basis(len, coordinate).unwrap();
        assert_eq!(v.components(), expected);
    }

    #[test]
    fn basis_out_of_range() {
        let expected = MatrixError::IndexOutOfBounds { row: 3, column: 0, rows: 3, columns: 1 };
        assert_eq!(Vector::basis(3, 3), Err(expected));
    }

    #[test]
    fn matrix_conversions() {
        let matrix = Matrix::new(vec![1.0, 2.0], 2, 1).unwrap();
        let v = Vector::try_from(matrix.clone()).unwrap();
        assert_eq!(Matrix::from(v), matrix);

        let wide = Matrix::zero(1, 2).unwrap();
        assert!(matches!(Vector::try_from(wide), Err(MatrixError::ShapeMismatch { .. })));
    }

    #[test]
    fn display() {
        let v = Vector::new(vec![1.0, -2.0]).unwrap();
        assert_eq!(v.to_string(), "[  1.0000 ]\n[ -2.0000 ]");
    }
}
