use firlab_image::Matrix;
use num_traits::Float;
use rayon::prelude::*;

use crate::border::BorderMode;

/// A convolution used to cross-check [`crate::FirFilter`].
///
/// Implementors receive the same coefficients as the FIR filter and must
/// return a matrix of the same size as the input.
pub trait ReferenceFilter<T> {
    /// Filter the input along its rows with the given coefficients.
    fn filter(&self, input: &Matrix<T>, coefficients: &[T]) -> Matrix<T>;
}

/// General purpose 2D correlation with a vertical `K x 1` kernel.
///
/// The output row `i` is `sum_k coefficients[k] * input[i + k - anchor]`, where
/// out-of-range rows are resolved with the configured [`BorderMode`]. Rows are
/// computed in parallel.
///
/// With `anchor = 0` and [`BorderMode::Constant`] the result equals the
/// truncated FIR filter. With any other border mode the two differ only in
/// the last `K - 1` rows.
///
/// # Example
///
/// ```
/// use firlab_image::{Matrix, MatrixSize};
/// use firlab_filter::border::BorderMode;
/// use firlab_filter::{Filter2d, ReferenceFilter};
///
/// let input = Matrix::from_size_val(MatrixSize { rows: 4, cols: 1 }, 1.0f32);
///
/// let reference = Filter2d::new(0, BorderMode::Replicate);
/// let output = reference.filter(&input, &[0.5, 0.5]);
///
/// assert_eq!(output.as_slice(), &[1.0, 1.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filter2d {
    /// Row of the kernel aligned with the output row.
    pub anchor: usize,
    /// How rows outside the matrix are resolved.
    pub border: BorderMode,
}

impl Filter2d {
    /// Create a new reference filter.
    pub fn new(anchor: usize, border: BorderMode) -> Self {
        Self { anchor, border }
    }
}

impl<T> ReferenceFilter<T> for Filter2d
where
    T: Float + Send + Sync,
{
    fn filter(&self, input: &Matrix<T>, coefficients: &[T]) -> Matrix<T> {
        let rows = input.rows();
        let cols = input.cols();
        let mut output = Matrix::zeros(input.size());

        if input.is_empty() || coefficients.is_empty() {
            return output;
        }

        let src = input.as_slice();
        let anchor = self.anchor as isize;

        output
            .as_slice_mut()
            .par_chunks_exact_mut(cols)
            .enumerate()
            .for_each(|(r, dst_row)| {
                for (c, dst) in dst_row.iter_mut().enumerate() {
                    let mut acc = T::zero();
                    for (k, &coeff) in coefficients.iter().enumerate() {
                        let y = r as isize + k as isize - anchor;
                        if let Some(y) = self.border.map_index(y, rows) {
                            acc = acc + src[y * cols + c] * coeff;
                        }
                    }
                    *dst = acc;
                }
            });

        output
    }
}
