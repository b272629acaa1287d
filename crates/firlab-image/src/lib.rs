#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the matrix module.
pub mod error;

/// Dense matrix representation.
pub mod matrix;

/// Element-wise operations on matrices.
pub mod ops;

pub use crate::error::MatrixError;
pub use crate::matrix::{Matrix, MatrixSize};
