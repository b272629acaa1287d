use firlab_image::Matrix;

fn mean_std(data: &[f32]) -> (f64, f64) {
    let n = data.len() as f64;
    let mean = data.iter().map(|&x| x as f64).sum::<f64>() / n;
    let var = data
        .iter()
        .map(|&x| {
            let d = x as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    (mean, var.sqrt())
}

/// Compute the Pearson correlation coefficient between two matrices.
///
/// The covariance and the standard deviations are population statistics over
/// all elements.
///
/// # Returns
///
/// A value in `[-1, 1]`, where 1 means the matrices are identical up to an
/// affine transform. If the sizes differ the sentinel value 0 is returned.
/// If either matrix is empty or constant the correlation is undefined and
/// `NaN` is returned.
///
/// # Example
///
/// ```
/// use firlab_image::{Matrix, MatrixSize};
/// use firlab_filter::metrics::correlation;
///
/// let a = Matrix::new(MatrixSize { rows: 1, cols: 3 }, vec![1f32, 2f32, 3f32]).unwrap();
/// let b = Matrix::new(MatrixSize { rows: 1, cols: 3 }, vec![2f32, 4f32, 6f32]).unwrap();
///
/// assert!((correlation(&a, &b) - 1.0).abs() < 1e-6);
/// ```
pub fn correlation(a: &Matrix<f32>, b: &Matrix<f32>) -> f32 {
    if a.size() != b.size() {
        log::warn!(
            "cannot correlate matrices of size {} and {}, returning 0",
            a.size(),
            b.size()
        );
        return 0.0;
    }

    let (mean_a, std_a) = mean_std(a.as_slice());
    let (mean_b, std_b) = mean_std(b.as_slice());

    let covar = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| (x as f64 - mean_a) * (y as f64 - mean_b))
        .sum::<f64>()
        / a.numel() as f64;

    (covar / (std_a * std_b)) as f32
}
