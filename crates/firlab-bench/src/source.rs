use std::convert::Infallible;
use std::path::PathBuf;

use firlab_image::Matrix;

/// Provides the normalized input matrix of a benchmark.
///
/// Loading may fail; the harness surfaces the error instead of filtering an
/// empty matrix.
pub trait MatrixSource: Sync {
    /// The error returned when the input cannot be loaded.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the input, normalized to a real-valued scale.
    fn load(&self) -> Result<Matrix<f32>, Self::Error>;
}

/// Reads a grayscale image from disk and scales it to `[0, 1]` on every load.
#[derive(Debug, Clone)]
pub struct ImageFileSource {
    path: PathBuf,
}

impl ImageFileSource {
    /// Create a new source for the image at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the image.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl MatrixSource for ImageFileSource {
    type Error = firlab_io::IoError;

    fn load(&self) -> Result<Matrix<f32>, Self::Error> {
        firlab_io::functional::read_image_gray_f32(&self.path)
    }
}

/// Serves copies of a matrix held in memory.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    matrix: Matrix<f32>,
}

impl InMemorySource {
    /// Create a new source serving `matrix`.
    pub fn new(matrix: Matrix<f32>) -> Self {
        Self { matrix }
    }
}

impl MatrixSource for InMemorySource {
    type Error = Infallible;

    fn load(&self) -> Result<Matrix<f32>, Self::Error> {
        Ok(self.matrix.clone())
    }
}
