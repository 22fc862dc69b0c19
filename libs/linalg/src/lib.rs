//! Dense linear algebra over `f64`: matrices, vectors and row-reduction algorithms.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::iterator_step_by_zero,
    clippy::invalid_regex,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod cursor;
pub mod errors;
pub mod matrix;
pub mod tolerance;
pub mod vector;
