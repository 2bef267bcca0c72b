/// Compatibility layer for `std`/`no_std`
#[cfg(feature = "std")]
pub use std::borrow::Cow;

#[cfg(not(feature = "std"))]
pub use alloc::borrow::Cow;
