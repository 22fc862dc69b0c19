//! Vector operations.

pub mod ops;
pub mod vector;

pub use vector::Vector;
