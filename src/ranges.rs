//! `ranges` submodule implements functions that restrict values to given bounds
//! or map them into the unit interval.
//!

use num_traits::AsPrimitive;
use std::mem;

/// Restricts `value` to `[min; max]`.
///
/// If bounds are inverted (`min > max`), they are swapped before comparison.
///
/// # Example
/// ```rust
/// # use scalarmath::ranges::clamp;
/// assert_eq!(clamp(15, 1, 10), 10);
/// assert_eq!(clamp(5, 10, 1), clamp(5, 1, 10));
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// ```
///
pub fn clamp<T: PartialOrd>(value: T, mut min: T, mut max: T) -> T {
    if min > max {
        mem::swap(&mut min, &mut max);
    }

    if value < min {
        min
    } else if max < value {
        max
    } else {
        value
    }
}

/// Returns relative position of `value` between `min` and `max` as `f32` in `[0; 1]`.
///
/// `value` is clamped into bounds first, so values outside of them give `0.0` or `1.0`.
/// `min == max` divides by zero and returns `NaN`; callers should not pass such bounds.
///
/// Inverted bounds (`min > max`) are accepted: result is still measured from `min`
/// towards `max`, and position at `min` is `+0.0`.
///
/// # Example
/// ```rust
/// # use scalarmath::ranges::normalize;
/// assert_eq!(normalize(5, 0, 10), 0.5);
/// assert_eq!(normalize(-5, 0, 10), 0.0);
/// assert_eq!(normalize(15.0, 0.0, 10.0), 1.0);
/// ```
///
pub fn normalize<T>(value: T, min: T, max: T) -> f32
where
    T: PartialOrd + AsPrimitive<f32>,
{
    let value: f32 = clamp(value, min, max).as_();
    let (min, max): (f32, f32) = (min.as_(), max.as_());
    // adding `+0.0` turns `-0.0` (inverted bounds) into `+0.0`
    (value - min) / (max - min) + 0.0
}

/// Restricts `v` to `[0; 1]`.
///
/// `NaN` is returned as is.
///
/// # Example
/// ```rust
/// # use scalarmath::ranges::saturate;
/// assert_eq!(saturate(-0.5), 0.0);
/// assert_eq!(saturate(1.5), 1.0);
/// assert_eq!(saturate(0.3), 0.3);
/// ```
///
pub fn saturate(v: f32) -> f32 {
    let v = if v > 1.0 { 1.0 } else { v };
    if v < 0.0 {
        0.0
    } else {
        v
    }
}
/// Restricts value behind `v` to `[0; 1]`, writing result back into it.
///
/// # Example
/// ```rust
/// # use scalarmath::ranges::saturate_in_place;
/// let mut alpha: f32 = 1.25;
/// saturate_in_place(&mut alpha);
/// assert_eq!(alpha, 1.0);
/// ```
///
pub fn saturate_in_place(v: &mut f32) {
    *v = saturate(*v);
}
