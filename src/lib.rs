//! # Scalarmath
//!
//! **Scalarmath** - stateless scalar primitives for game and rendering code.
//!
//! # Prelude
//! All items can be imported with `use scalarmath::prelude::*`.
//!
//! # Model
//! Every item of this crate is a pure function over primitive numbers (`f32`, `i32`, `u32`
//! or a generic ordered numeric type). There is no state, no allocation and no error reporting:
//! invalid inputs (zero passed to bit scans, equal bounds passed to [`ranges::normalize`],
//! negative tolerance) produce unspecified numeric results instead of failing,
//! so callers check preconditions themselves.
//!
//! The only function that writes anything is [`ranges::saturate_in_place`], which stores the
//! result back into the location it was given.
//!
//! Generic [`min`], [`max`], [`sign`] and [`sqr`] live at the crate root, everything else is
//! grouped into themed submodules.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate num_traits;

// submodules and public re-exports
mod scalars;
pub use scalars::*;

pub mod angles;
pub mod bits;
pub mod floats;
pub mod ranges;
pub mod rounding;

// prelude
pub mod prelude;
