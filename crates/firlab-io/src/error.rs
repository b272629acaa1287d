/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to decode or encode the image.
    #[error("Failed to decode or encode the image. {0}")]
    ImageCodecError(#[from] image::ImageError),

    /// Error when the image buffer cannot be built from the matrix.
    #[error("Failed to encode the image. {0}")]
    ImageEncodeError(String),

    /// Error to create the matrix.
    #[error("Failed to create matrix. {0}")]
    MatrixCreationError(#[from] firlab_image::MatrixError),
}
