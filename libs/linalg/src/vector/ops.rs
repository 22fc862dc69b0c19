//! Vector Operations

use crate::{errors::MatrixError, tolerance::Tolerance, vector::Vector};
use std::ops::{Add, Mul, Neg, Sub};

impl Vector {
    fn check_same_len(&self, operation: &'static str, other: &Vector) -> Result<(), MatrixError> {
        if self.len() != other.len() {
            return Err(MatrixError::ShapeMismatch { operation, left: (self.len(), 1), right: (other.len(), 1) });
        }
        Ok(())
    }

    /// Sum of the component-wise products.
    pub fn dot_product(&self, other: &Vector) -> Result<f64, MatrixError> {
        self.check_same_len("dot product", other)?;
        Ok(self.iter().zip(other).map(|(left, right)| left * right).sum())
    }

    /// Cross product `self x other`, defined for 3-component vectors only.
    pub fn cross_product(&self, other: &Vector) -> Result<Vector, MatrixError> {
        if self.len() != 3 || other.len() != 3 {
            return Err(MatrixError::CrossProductDimension(self.len(), other.len()));
        }
        let mut product = Vec::with_capacity(3);
        for i in 0..3 {
            let next = (i + 1) % 3;
            let prev = (i + 2) % 3;
            product.push(self.get(next)? * other.get(prev)? - self.get(prev)? * other.get(next)?);
        }
        Vector::new(product)
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Vector) -> Result<Vector, MatrixError> {
        self.check_same_len("add", other)?;
        Ok(Vector::from_column(self.as_matrix().add(other.as_matrix())?))
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(&self, scalar: f64) -> Vector {
        Vector::from_column(self.as_matrix().scale(scalar))
    }

    /// Component-wise difference, `self + (-subtrahend)`.
    pub fn subtract(&self, subtrahend: &Vector) -> Result<Vector, MatrixError> {
        self.add(&subtrahend.scale(-1.0))
    }

    /// Dot product with itself.
    pub fn square_length(&self) -> f64 {
        self.iter().map(|component| component * component).sum()
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.square_length().sqrt()
    }

    /// Distance between the two vectors.
    pub fn distance(&self, to: &Vector) -> Result<f64, MatrixError> {
        Ok(to.subtract(self)?.length())
    }

    /// Unit vector with the same direction.
    ///
    /// Fails with [`MatrixError::ZeroLength`] if the length is zero within tolerance.
    pub fn normalize(&self, tolerance: Tolerance) -> Result<Vector, MatrixError> {
        let length = self.length();
        if tolerance.is_zero(length) {
            return Err(MatrixError::ZeroLength);
        }
        Ok(self.scale(1.0 / length))
    }

    /// Unit vector pointing from this vector towards `to`.
    pub fn direction(&self, to: &Vector, tolerance: Tolerance) -> Result<Vector, MatrixError> {
        to.subtract(self)?.normalize(tolerance)
    }

    /// Projection of this vector onto `onto`, `(a . b) / (b . b) * b`.
    pub fn project(&self, onto: &Vector, tolerance: Tolerance) -> Result<Vector, MatrixError> {
        let dot = self.dot_product(onto)?;
        let onto_square_length = onto.square_length();
        if tolerance.is_zero(onto_square_length) {
            return Err(MatrixError::ZeroLength);
        }
        Ok(onto.scale(dot / onto_square_length))
    }
}

impl Add<&Vector> for &Vector {
    type Output = Result<Vector, MatrixError>;

    fn add(self, other: &Vector) -> Result<Vector, MatrixError> {
        Vector::add(self, other)
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Result<Vector, MatrixError>;

    fn sub(self, other: &Vector) -> Result<Vector, MatrixError> {
        self.subtract(other)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.scale(scalar)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    fn make_vector(values: &[f64]) -> Vector {
        Vector::new(values.to_vec()).unwrap()
    }

    fn tolerance() -> Tolerance {
        Tolerance::default()
    }

    #[rstest]
    #[case(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0], 12.0)]
    #[case(&[1.0, 0.0], &[0.0, 1.0], 0.0)]
    #[case(&[-2.0], &[3.5], -7.0)]
    fn dot_product(#[case] left: &[f64], #[case] right: &[f64], #[case] expected: f64) {
        let left = make_vector(left);
        let right = make_vector(right);
        assert_eq!(left.dot_product(&right), Ok(expected));
        assert_eq!(right.dot_product(&left), Ok(expected));
    }

    #[test]
    fn dot_product_mismatch() {
        let result = make_vector(&[1.0, 2.0]).dot_product(&make_vector(&[1.0, 2.0, 3.0]));
        assert!(matches!(result, Err(MatrixError::ShapeMismatch { .. })));
    }

    #[rstest]
    #[case(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0])]
    #[case(&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0], &[1.0, 0.0, 0.0])]
    #[case(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[-3.0, 6.0, -3.0])]
    #[case(&[2.0, 2.0, 2.0], &[1.0, 1.0, 1.0], &[0.0, 0.0, 0.0])]
    fn cross_product(#[case] left: &[f64], #[case] right: &[f64], #[case] expected: &[f64]) {
        let result = make_vector(left).cross_product(&make_vector(right)).unwrap();
        assert_eq!(result, make_vector(expected));
    }

    #[rstest]
    #[case(&[1.0, 2.0], &[1.0, 2.0, 3.0])]
    #[case(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0, 4.0])]
    fn cross_product_requires_three_components(#[case] left: &[f64], #[case] right: &[f64]) {
        let result = make_vector(left).cross_product(&make_vector(right));
        assert_eq!(result, Err(MatrixError::CrossProductDimension(left.len(), right.len())));
    }

    #[test]
    fn add_subtract_scale() {
        let a = make_vector(&[1.0, 2.0, 3.0]);
        let b = make_vector(&[0.5, -1.0, 4.0]);
        assert_eq!((&a + &b).unwrap(), make_vector(&[1.5, 1.0, 7.0]));
        assert_eq!((&a - &b).unwrap(), make_vector(&[0.5, 3.0, -1.0]));
        assert_eq!(&a * 2.0, make_vector(&[2.0, 4.0, 6.0]));
        assert_eq!(-&b, make_vector(&[-0.5, 1.0, -4.0]));
    }

    #[test]
    fn add_mismatch() {
        let result = make_vector(&[1.0]).add(&make_vector(&[1.0, 2.0]));
        assert!(matches!(result, Err(MatrixError::ShapeMismatch { operation: "add", .. })));
    }

    #[test]
    fn lengths() {
        let v = make_vector(&[3.0, 4.0]);
        assert_eq!(v.square_length(), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn distance() {
        let from = make_vector(&[1.0, 1.0, 1.0]);
        let to = make_vector(&[3.0, 4.0, 7.0]);
        assert_eq!(from.distance(&to), Ok(7.0));
        assert_eq!(to.distance(&from), Ok(7.0));
    }

    #[test]
    fn normalize() {
        let v = make_vector(&[0.0, 3.0, 4.0]);
        let unit = v.normalize(tolerance()).unwrap();
        assert!(unit.as_matrix().approx_eq(make_vector(&[0.0, 0.6, 0.8]).as_matrix(), tolerance()));
        assert!(tolerance().approx_eq(unit.length(), 1.0));
    }

    #[rstest]
    #[case(&[0.0, 0.0, 0.0])]
    #[case(&[0.00001, 0.0, -0.00002])]
    fn normalize_zero_vector(#[case] values: &[f64]) {
        assert_eq!(make_vector(values).normalize(tolerance()), Err(MatrixError::ZeroLength));
    }

    #[test]
    fn direction() {
        let from = make_vector(&[1.0, 1.0]);
        let to = make_vector(&[4.0, 5.0]);
        let direction = from.direction(&to, tolerance()).unwrap();
        assert!(direction.as_matrix().approx_eq(make_vector(&[0.6, 0.8]).as_matrix(), tolerance()));
        assert_eq!(from.direction(&from, tolerance()), Err(MatrixError::ZeroLength));
    }

    #[test]
    fn project() {
        let v = make_vector(&[2.0, 3.0]);
        let onto = make_vector(&[4.0, 0.0]);
        assert_eq!(v.project(&onto, tolerance()), Ok(make_vector(&[2.0, 0.0])));

        let diagonal = make_vector(&[1.0, 1.0]);
        assert_eq!(v.project(&diagonal, tolerance()), Ok(make_vector(&[2.5, 2.5])));
    }

    #[test]
    fn project_onto_zero_vector() {
        let v = make_vector(&[2.0, 3.0]);
        assert_eq!(v.project(&make_vector(&[0.0, 0.0]), tolerance()), Err(MatrixError::ZeroLength));
    }
}
