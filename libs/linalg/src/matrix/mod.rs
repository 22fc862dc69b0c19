//! Matrix operations.

pub mod display;
pub mod matrix;
pub mod ops;
pub mod reduce;

pub use crate::errors::MatrixError;
pub use display::DISPLAY_DECIMALS;
pub use matrix::Matrix;
