//! Dense analytics array: index arithmetic and persisted-form helpers.

pub mod blob;
pub mod dense;

pub use blob::*;
pub use dense::*;
