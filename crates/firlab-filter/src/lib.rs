#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// border handling for out-of-range indices.
pub mod border;

/// truncated FIR filter module.
pub mod fir;

/// filter kernels module.
pub mod kernels;

/// matrix comparison metrics module.
pub mod metrics;

/// general purpose reference convolution.
pub mod reference;

pub use fir::{convolve_truncated, FirFilter};
pub use reference::{Filter2d, ReferenceFilter};
