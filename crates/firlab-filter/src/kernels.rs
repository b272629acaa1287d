use num_traits::Float;

/// Create a kernel with all taps set to the same value.
///
/// The taps are not normalized; `constant_kernel(5, 0.5)` sums to 2.5.
///
/// # Arguments
///
/// * `kernel_size` - The number of taps.
/// * `value` - The value of every tap.
pub fn constant_kernel<T: Float>(kernel_size: usize, value: T) -> Vec<T> {
    vec![value; kernel_size]
}

/// Create an averaging kernel whose taps sum to one.
///
/// # Arguments
///
/// * `kernel_size` - The number of taps.
pub fn box_kernel_1d<T: Float>(kernel_size: usize) -> Vec<T> {
    let Some(n) = T::from(kernel_size) else {
        return Vec::new();
    };
    vec![T::one() / n; kernel_size]
}

/// Create a causal half-gaussian smoothing kernel.
///
/// Tap `k` weights the sample `k` rows ahead, so the weights decay with the
/// distance from the current row. The kernel is normalized to sum to one.
///
/// # Arguments
///
/// * `kernel_size` - The number of taps.
/// * `sigma` - The standard deviation in rows.
pub fn half_gaussian_kernel_1d(kernel_size: usize, sigma: f32) -> Vec<f32> {
    let sigma_sq = sigma * sigma;

    let mut kernel = (0..kernel_size)
        .map(|i| {
            let x = i as f32;
            (-(x * x) / (2.0 * sigma_sq)).exp()
        })
        .collect::<Vec<_>>();

    let norm = kernel.iter().sum::<f32>();
    if norm > 0.0 {
        kernel.iter_mut().for_each(|k| *k /= norm);
    }
    kernel
}
