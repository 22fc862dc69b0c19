//! Matrix Operations

use crate::{cursor::IndexCursor, errors::MatrixError, matrix::Matrix, vector::Vector};
use std::ops::{Add, Mul, Neg, Sub};

impl Matrix {
    fn check_same_shape(&self, operation: &'static str, other: &Matrix) -> Result<(), MatrixError> {
        if self.rows() != other.rows() || self.columns() != other.columns() {
            return Err(MatrixError::ShapeMismatch {
                operation,
                left: (self.rows(), self.columns()),
                right: (other.rows(), other.columns()),
            });
        }
        Ok(())
    }

    fn zip_with<O>(&self, other: &Matrix, operation: O) -> Matrix
    where
        O: Fn(f64, f64) -> f64,
    {
        let data = self.data().iter().zip(other.data()).map(|(left, right)| operation(*left, *right)).collect();
        Matrix::from_parts(data, self.rows(), self.columns())
    }

    /// Element-wise sum, both matrices must have the same shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_same_shape("add", other)?;
        Ok(self.zip_with(other, |left, right| left + right))
    }

    /// Element-wise difference, both matrices must have the same shape.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_same_shape("subtract", other)?;
        Ok(self.zip_with(other, |left, right| left - right))
    }

    /// Multiplies every entry by `scalar`.
    pub fn scale(&self, scalar: f64) -> Matrix {
        let data = self.data().iter().map(|entry| entry * scalar).collect();
        Matrix::from_parts(data, self.rows(), self.columns())
    }

    /// Transposed copy, `T[j,i] = M[i,j]`.
    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.cells());
        for column in 0..self.columns() {
            data.extend(self.data().iter().skip(column).step_by(self.columns()));
        }
        Matrix::from_parts(data, self.columns(), self.rows())
    }

    /// Naive matrix multiplication, A: MxK * B: KxN -> C: MxN, O(KMN).
    pub fn multiply(&self, right: &Matrix) -> Result<Matrix, MatrixError> {
        if self.columns() != right.rows() {
            return Err(MatrixError::ShapeMismatch {
                operation: "multiply",
                left: (self.rows(), self.columns()),
                right: (right.rows(), right.columns()),
            });
        }
        let mut product = Matrix::zero(self.rows(), right.columns())?;
        let mut cursor = IndexCursor::over(&product);
        while cursor.has_more() {
            let mut sum = 0.0;
            for k in 0..self.columns() {
                sum += self.get(cursor.row(), k)? * right.get(k, cursor.column())?;
            }
            product.set_at(&cursor, sum)?;
            cursor.advance()?;
        }
        Ok(product)
    }

    /// Matrix-vector product, the vector needs one component per column.
    pub fn multiply_vector(&self, vector: &Vector) -> Result<Vector, MatrixError> {
        if self.columns() != vector.len() {
            return Err(MatrixError::ShapeMismatch {
                operation: "multiply",
                left: (self.rows(), self.columns()),
                right: (vector.len(), 1),
            });
        }
        let mut components: Vec<f64> = Vec::with_capacity(self.rows());
        for row in 0..self.rows() {
            let entries = self.row(row)?;
            components.push(entries.iter().zip(vector.iter()).map(|(entry, component)| entry * component).sum());
        }
        Vector::new(components)
    }
}

impl Add<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn add(self, other: &Matrix) -> Result<Matrix, MatrixError> {
        Matrix::add(self, other)
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn sub(self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.subtract(other)
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.multiply(other)
    }
}

impl Mul<&Vector> for &Matrix {
    type Output = Result<Vector, MatrixError>;

    fn mul(self, vector: &Vector) -> Result<Vector, MatrixError> {
        self.multiply_vector(vector)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.scale(scalar)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.scale(-1.0)
    }
}
