use firlab_image::Matrix;

/// Compute the L2 norm of the difference between two matrices, divided by the
/// number of elements.
///
/// $ E = \frac{\sqrt{\sum_{i=1}^{n} (A_i - B_i)^2}}{n} $
///
/// # Returns
///
/// The normalized error, where 0 means identical matrices. If the matrices
/// are empty or their sizes differ, the sentinel value 0 is returned.
///
/// # Example
///
/// ```
/// use firlab_image::{Matrix, MatrixSize};
/// use firlab_filter::metrics::normalized_error;
///
/// let a = Matrix::new(MatrixSize { rows: 1, cols: 2 }, vec![0f32, 3f32]).unwrap();
/// let b = Matrix::new(MatrixSize { rows: 1, cols: 2 }, vec![4f32, 3f32]).unwrap();
///
/// assert_eq!(normalized_error(&a, &b), 2.0);
/// ```
pub fn normalized_error(a: &Matrix<f32>, b: &Matrix<f32>) -> f32 {
    if a.is_empty() || a.size() != b.size() {
        log::warn!(
            "cannot compare matrices of size {} and {}, returning 0",
            a.size(),
            b.size()
        );
        return 0.0;
    }

    let sum_sq = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| {
            let d = (x - y) as f64;
            d * d
        })
        .sum::<f64>();

    (sum_sq.sqrt() / a.numel() as f64) as f32
}
