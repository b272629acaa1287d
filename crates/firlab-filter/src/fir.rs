use firlab_image::Matrix;
use num_traits::Float;

/// Convolve a 1D signal with a truncated forward-looking kernel.
///
/// For every sample `i` the output is
///
/// $ out_i = \sum_{k=0}^{K-1} signal_{i+k} \cdot coefficients_k $
///
/// where terms with `i + k >= len` are omitted. The trailing `K - 1` samples
/// are therefore computed from a shorter window and no padding is involved.
///
/// # Arguments
///
/// * `signal` - The input samples.
/// * `coefficients` - The kernel taps.
/// * `out` - The output samples, same length as `signal`.
///
/// # Panics
///
/// Panics if `signal` and `out` have different lengths.
///
/// # Example
///
/// ```
/// use firlab_filter::convolve_truncated;
///
/// let signal = [1.0f32, 2.0, 3.0];
/// let mut out = [0.0f32; 3];
///
/// convolve_truncated(&signal, &[1.0, 1.0], &mut out);
///
/// assert_eq!(out, [3.0, 5.0, 3.0]);
/// ```
pub fn convolve_truncated<T: Float>(signal: &[T], coefficients: &[T], out: &mut [T]) {
    assert_eq!(
        signal.len(),
        out.len(),
        "signal and output must have the same length"
    );

    for (i, dst) in out.iter_mut().enumerate() {
        // only the taps that land inside the signal contribute
        *dst = signal[i..]
            .iter()
            .zip(coefficients.iter())
            .fold(T::zero(), |acc, (&x, &c)| acc + x * c);
    }
}

/// A finite impulse response filter applied along the row axis of a matrix.
///
/// Each column is filtered independently with [`convolve_truncated`], so
/// output row `i` only looks ahead at rows `i..i + K` of the same column.
///
/// # Example
///
/// ```
/// use firlab_image::{Matrix, MatrixSize};
/// use firlab_filter::FirFilter;
///
/// let input = Matrix::from_size_val(MatrixSize { rows: 10, cols: 1 }, 1.0f32);
/// let fir = FirFilter::new(vec![0.5f32; 5]);
///
/// let output = fir.filter(&input);
///
/// assert_eq!(output.get(0, 0), Some(&2.5));
/// assert_eq!(output.get(9, 0), Some(&0.5));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FirFilter<T = f32> {
    coefficients: Vec<T>,
}

impl<T: Float> FirFilter<T> {
    /// Create a new filter bound to the given coefficients.
    ///
    /// No validation or normalization is applied; an empty sequence is valid
    /// and produces an all-zero output.
    pub fn new(coefficients: Vec<T>) -> Self {
        Self { coefficients }
    }

    /// The coefficients currently bound to the filter.
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Replace the coefficients of the filter.
    pub fn set_coefficients(&mut self, coefficients: Vec<T>) {
        self.coefficients = coefficients;
    }

    /// Filter the input matrix along its rows, column by column.
    ///
    /// # Arguments
    ///
    /// * `input` - The input matrix with shape (R, C).
    ///
    /// # Returns
    ///
    /// A new matrix with shape (R, C). The input is left untouched.
    pub fn filter(&self, input: &Matrix<T>) -> Matrix<T> {
        let rows = input.rows();
        let cols = input.cols();
        let src = input.as_slice();

        let mut output = Matrix::zeros(input.size());
        if self.coefficients.is_empty() || rows == 0 {
            return output;
        }

        let mut column = vec![T::zero(); rows];
        let mut filtered = vec![T::zero(); rows];

        for c in 0..cols {
            // gather
            for (r, dst) in column.iter_mut().enumerate() {
                *dst = src[r * cols + c];
            }

            convolve_truncated(&column, &self.coefficients, &mut filtered);

            // scatter
            let dst = output.as_slice_mut();
            for (r, &val) in filtered.iter().enumerate() {
                dst[r * cols + c] = val;
            }
        }

        output
    }
}
