//! `scalars` hidden submodule supplies generic scalar operations that work on any ordered
//! numeric type. Those are re-exported at the crate root.
//!

use num_traits::{One, Zero};
use std::ops::{Mul, Neg};

/// Returns the smaller of two values.
///
/// If values are unordered (`NaN` is involved) or equal, `y` is returned.
///
/// # Example
/// ```rust
/// # use scalarmath::min;
/// assert_eq!(min(3, -2), -2);
/// assert_eq!(min(0.5, 1.5), 0.5);
/// ```
///
pub fn min<T: PartialOrd>(x: T, y: T) -> T {
    if x < y {
        x
    } else {
        y
    }
}
/// Returns the larger of two values.
///
/// If values are unordered (`NaN` is involved) or equal, `y` is returned.
///
/// # Example
/// ```rust
/// # use scalarmath::max;
/// assert_eq!(max(3, -2), 3);
/// assert_eq!(max(0.5, 1.5), 1.5);
/// ```
///
pub fn max<T: PartialOrd>(x: T, y: T) -> T {
    if x > y {
        x
    } else {
        y
    }
}

/// Returns `-1` for negative values and `+1` otherwise.
///
/// Zero is treated as positive, so this is not a three-way sign.
/// For `f32` there is a bit-level version in [`crate::floats::sign_f32`].
///
/// # Example
/// ```rust
/// # use scalarmath::sign;
/// assert_eq!(sign(-3), -1);
/// assert_eq!(sign(0), 1);
/// assert_eq!(sign(3.5), 1.0);
/// ```
///
pub fn sign<T>(k: T) -> T
where
    T: PartialOrd + Zero + One + Neg<Output = T>,
{
    if k < T::zero() {
        -T::one()
    } else {
        T::one()
    }
}

/// Returns value multiplied by itself.
///
/// # Example
/// ```rust
/// # use scalarmath::sqr;
/// assert_eq!(sqr(-4), 16);
/// assert_eq!(sqr(1.5), 2.25);
/// ```
///
pub fn sqr<T: Mul<Output = T> + Copy>(k: T) -> T {
    k * k
}
