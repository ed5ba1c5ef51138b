//! Prelude module: `scalarmath::prelude` re-exports all `scalarmath` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use scalarmath::prelude::*;
//! assert_eq!(clamp(next_pow2(17), 0, 20), 20);
//! ```
//!

// re-exports
pub use crate::angles::*;
pub use crate::bits::*;
pub use crate::floats::*;
pub use crate::ranges::*;
pub use crate::rounding::*;
pub use crate::*;
