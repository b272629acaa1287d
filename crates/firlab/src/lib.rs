#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use firlab_image as image;

#[doc(inline)]
pub use firlab_filter as filter;

#[doc(inline)]
pub use firlab_io as io;

#[doc(inline)]
pub use firlab_bench as bench;
