//! Matrix similarity metrics.
//!
//! These metrics compare the output of the FIR filter with the output of a
//! reference convolution. They are diagnostics: a size mismatch never fails,
//! it yields a sentinel value instead.
//!
//! # Available Metrics
//!
//! - **Normalized error**: L2 norm of the difference divided by the number of elements
//! - **Correlation**: Pearson correlation coefficient over all elements

mod correlation;
mod normalized_error;

pub use correlation::correlation;
pub use normalized_error::normalized_error;
