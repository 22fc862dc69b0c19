//! Floating point comparisons within a tolerance.

/// Default tolerance used when none is configured.
pub const DEFAULT_TOLERANCE: f64 = 0.0001;

/// Tolerance used to decide when a floating point value is zero, or when two values are equal.
///
/// Elimination accumulates representation error, so algorithms that look for zero entries take a `Tolerance`
/// rather than comparing against `0.0` exactly. The tolerance is passed explicitly to every operation that
/// needs it; there is no process wide value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Creates a tolerance, no bounds are checked on `epsilon`.
    pub const fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// The maximum difference still considered equal.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Replaces the epsilon used by subsequent comparisons.
    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon;
    }

    /// Returns true if `|value| < epsilon`.
    pub fn is_zero(&self, value: f64) -> bool {
        value.abs() < self.epsilon
    }

    /// Returns true if the two values differ by less than epsilon.
    pub fn approx_eq(&self, left: f64, right: f64) -> bool {
        self.is_zero(right - left)
    }

    /// Returns true if every value is within epsilon of the first one.
    ///
    /// An empty slice or a single value is trivially equal.
    pub fn are_equal(&self, values: &[f64]) -> bool {
        match values.split_first() {
            Some((first, rest)) => rest.iter().all(|value| self.approx_eq(*first, *value)),
            None => true,
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}
