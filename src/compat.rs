/// Compatibility layer for `std`/`no_std`
#[cfg(feature = "std")]
pub use std::{
    borrow::Cow,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(all(test, feature = "std"))]
pub use std::format;

#[cfg(not(feature = "std"))]
pub use alloc::{
    borrow::Cow,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(all(test, not(feature = "std")))]
pub use alloc::format;
