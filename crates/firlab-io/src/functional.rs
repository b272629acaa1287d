use std::path::Path;

use firlab_image::{ops::cast_and_scale, Matrix, MatrixSize};

use crate::error::IoError;

/// Reads an image from the given file path and converts it to grayscale.
///
/// The method reads any format supported by the image crate. Rows of the
/// matrix are the image rows and columns the image columns.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A matrix with the 8-bit intensities of the image.
pub fn read_image_gray(file_path: impl AsRef<Path>) -> Result<Matrix<u8>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let img = image::ImageReader::open(&file_path)?
        .with_guessed_format()?
        .decode()?
        .into_luma8();

    let size = MatrixSize {
        rows: img.height() as usize,
        cols: img.width() as usize,
    };

    log::debug!("read {} with {}", file_path.display(), size);

    Ok(Matrix::new(size, img.into_raw())?)
}

/// Reads an image as grayscale and scales its intensities to `[0, 1]`.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
pub fn read_image_gray_f32(file_path: impl AsRef<Path>) -> Result<Matrix<f32>, IoError> {
    let image = read_image_gray(file_path)?;
    Ok(cast_and_scale(&image, 1.0 / 255.0)?)
}

/// Writes an 8-bit grayscale matrix to the given file path.
///
/// The format is deduced from the file extension.
///
/// # Arguments
///
/// * `file_path` - The path to the output image.
/// * `matrix` - The intensities to write.
pub fn write_image_gray(file_path: impl AsRef<Path>, matrix: &Matrix<u8>) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let img = image::GrayImage::from_raw(
        matrix.cols() as u32,
        matrix.rows() as u32,
        matrix.as_slice().to_vec(),
    )
    .ok_or_else(|| IoError::ImageEncodeError(format!("invalid buffer for {}", matrix.size())))?;

    img.save(file_path)?;

    Ok(())
}

/// Writes a matrix with values in `[0, 1]` as an 8-bit grayscale image.
///
/// Values outside the range are clamped.
///
/// # Arguments
///
/// * `file_path` - The path to the output image.
/// * `matrix` - The intensities to write.
pub fn write_image_gray_f32(
    file_path: impl AsRef<Path>,
    matrix: &Matrix<f32>,
) -> Result<(), IoError> {
    let matrix_u8 = matrix.map(|&x| (x.clamp(0.0, 1.0) * 255.0).round() as u8);
    write_image_gray(file_path, &matrix_u8)
}
