use crate::{Matrix, MatrixError};

/// Cast the values of a matrix to a different type and scale them.
///
/// # Arguments
///
/// * `src` - The source matrix.
/// * `scale` - The scale to multiply the cast values with.
///
/// Example:
///
/// ```
/// use firlab_image::{Matrix, MatrixSize};
/// use firlab_image::ops::cast_and_scale;
///
/// let matrix = Matrix::new(MatrixSize { rows: 1, cols: 2 }, vec![0u8, 255]).unwrap();
///
/// let matrix_f32: Matrix<f32> = cast_and_scale(&matrix, 1. / 255.0).unwrap();
///
/// assert_eq!(matrix_f32.get(0, 0), Some(&0.0f32));
/// assert_eq!(matrix_f32.get(0, 1), Some(&1.0f32));
/// ```
pub fn cast_and_scale<T, U>(src: &Matrix<T>, scale: U) -> Result<Matrix<U>, MatrixError>
where
    T: Copy + num_traits::NumCast,
    U: Copy + num_traits::NumCast + std::ops::Mul<U, Output = U>,
{
    let data = src
        .as_slice()
        .iter()
        .map(|&x| {
            let xu = U::from(x).ok_or(MatrixError::CastError(
                std::any::type_name::<U>().to_string(),
            ))?;
            Ok(xu * scale)
        })
        .collect::<Result<Vec<U>, MatrixError>>()?;

    Matrix::new(src.size(), data)
}

/// Compute the element-wise absolute difference between two matrices.
///
/// # Errors
///
/// Returns [`MatrixError::InvalidMatrixSize`] if the sizes differ.
pub fn abs_diff<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError>
where
    T: num_traits::Float,
{
    if a.size() != b.size() {
        return Err(MatrixError::InvalidMatrixSize(
            b.rows(),
            b.cols(),
            a.rows(),
            a.cols(),
        ));
    }

    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| (x - y).abs())
        .collect();

    Matrix::new(a.size(), data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatrixSize;

    #[test]
    fn test_cast_and_scale() -> Result<(), MatrixError> {
        let matrix = Matrix::new(MatrixSize { rows: 2, cols: 3 }, vec![0u8, 0, 255, 0, 0, 255])?;
        let matrix_f64: Matrix<f64> = cast_and_scale(&matrix, 1. / 255.0)?;
        assert_eq!(matrix_f64.as_slice(), &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        Ok(())
    }

    #[test]
    fn test_abs_diff() -> Result<(), MatrixError> {
        let size = MatrixSize { rows: 1, cols: 3 };
        let a = Matrix::new(size, vec![1.0f32, 2.0, 3.0])?;
        let b = Matrix::new(size, vec![3.0f32, 2.0, 1.0])?;
        assert_eq!(abs_diff(&a, &b)?.as_slice(), &[2.0, 0.0, 2.0]);

        let c = Matrix::<f32>::zeros(MatrixSize { rows: 3, cols: 1 });
        assert_eq!(
            abs_diff(&a, &c),
            Err(MatrixError::InvalidMatrixSize(3, 1, 1, 3))
        );
        Ok(())
    }
}
