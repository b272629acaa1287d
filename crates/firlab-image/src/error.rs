/// An error type for the matrix module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MatrixError {
    /// Error when the data length does not match the matrix size.
    #[error("Data length ({0}) does not match the matrix size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when two matrices are expected to have the same size.
    #[error("Invalid matrix size ({0}x{1}), expected ({2}x{3})")]
    InvalidMatrixSize(usize, usize, usize, usize),

    /// Error when a column index is out of bounds.
    #[error("Column index {0} is out of bounds for {1} columns")]
    ColumnIndexOutOfBounds(usize, usize),

    /// Error when a value cannot be cast to the target type.
    #[error("Failed to cast value to {0}")]
    CastError(String),
}
