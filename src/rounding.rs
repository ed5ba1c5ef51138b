//! `rounding` submodule implements rounding to integers, rounding to multiples and
//! fractional part extraction.
//!

/// Rounds `t` by adding `0.5` and truncating towards zero.
///
/// This is correct for non-negative values only: negative values are biased
/// towards positive infinity (`round(-2.6) == -2.0`, `round(-2.4) == -1.0`).
/// Values outside of `i32` range saturate and `NaN` becomes `0.0`.
///
/// # Example
/// ```rust
/// # use scalarmath::rounding::round;
/// assert_eq!(round(2.4), 2.0);
/// assert_eq!(round(2.6), 3.0);
/// assert_eq!(round(-2.6), -2.0);
/// ```
///
pub fn round(t: f32) -> f32 {
    (t + 0.5) as i32 as f32
}

/// Rounds `value` to the nearest multiple of `nearest`.
///
/// If `nearest` is not positive or is greater than `value`, `value` is returned unchanged.
/// Remainders that are exactly half of `nearest` are rounded up.
///
/// # Example
/// ```rust
/// # use scalarmath::rounding::round_to_nearest;
/// assert_eq!(round_to_nearest(7, 5), 5);
/// assert_eq!(round_to_nearest(8, 5), 10);
/// assert_eq!(round_to_nearest(3, 10), 3);
/// ```
///
pub fn round_to_nearest(value: i32, nearest: i32) -> i32 {
    if nearest > value || nearest <= 0 {
        return value;
    }

    // `value >= nearest > 0`, so remainder is never negative
    let remainder = value % nearest;
    if remainder < nearest - remainder {
        value - remainder
    } else {
        value.wrapping_add(nearest - remainder)
    }
}

/// Largest `f32` below `1.0`.
///
const BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;
/// Returns fractional part of `x` (`x - floor(x)`), which lies in `[0; 1)` for finite values.
///
/// Tiny negative values would round `x - floor(x)` up to exactly `1.0`;
/// those give the largest `f32` below `1.0` instead.
///
/// # Example
/// ```rust
/// # use scalarmath::rounding::frac;
/// assert_eq!(frac(3.75), 0.75);
/// assert_eq!(frac(-0.25), 0.75);
/// assert!(frac(-1.0e-10) < 1.0);
/// ```
///
pub fn frac(x: f32) -> f32 {
    let f = x - x.floor();
    if f >= 1.0 {
        BELOW_ONE
    } else {
        f
    }
}

#[cfg(test)]
mod tests {
    use super::{frac, round, round_to_nearest};
    use crate::floats::{approx_equal, EPSILON};
    use proptest::prelude::*;

    #[test]
    fn rounding() {
        assert_eq!(round(2.4), 2.0);
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(2.6), 3.0);
        assert_eq!(round(0.0), 0.0);

        assert_eq!(round(-2.6), -2.0);
        assert_eq!(round(-2.4), -1.0);
        assert_eq!(round(-0.4), 0.0);

        assert_eq!(round(f32::NAN), 0.0);
        assert_eq!(round(1.0e20), i32::MAX as f32);
    }

    #[test]
    fn nearest_multiple() {
        assert_eq!(round_to_nearest(7, 5), 5);
        assert_eq!(round_to_nearest(8, 5), 10);
        assert_eq!(round_to_nearest(10, 5), 10);
        assert_eq!(round_to_nearest(10, 4), 12);
        assert_eq!(round_to_nearest(9, 4), 8);
        assert_eq!(round_to_nearest(5, 5), 5);
        assert_eq!(round_to_nearest(12, 1), 12);

        assert_eq!(round_to_nearest(3, 10), 3);
        assert_eq!(round_to_nearest(7, 0), 7);
        assert_eq!(round_to_nearest(7, -5), 7);
        assert_eq!(round_to_nearest(-7, 5), -7);
    }

    #[test]
    fn fractional_part() {
        assert!(approx_equal(frac(3.75), 0.75, EPSILON));
        assert!(approx_equal(frac(-0.25), 0.75, EPSILON));
        assert_eq!(frac(2.0), 0.0);
        assert_eq!(frac(-2.0), 0.0);
        assert_eq!(frac(-0.0), 0.0);

        // `-1e-10 + 1.0` rounds to `1.0` in `f32`
        assert_eq!(frac(-1.0e-10), 0.99999994);
        assert_eq!(frac(-1.0e-8), 0.99999994);
        assert!(frac(f32::NAN).is_nan());
    }

    proptest! {
        #[test]
        fn nearest_multiple_is_closest(value in 1_i32..100_000, nearest in 1_i32..1000) {
            prop_assume!(nearest <= value);
            let rounded = round_to_nearest(value, nearest);
            prop_assert_eq!(rounded % nearest, 0);
            prop_assert!((rounded - value).abs() * 2 <= nearest);
        }

        #[test]
        fn frac_in_unit_interval(x in -1.0e6_f32..1.0e6) {
            let f = frac(x);
            prop_assert!((0.0..1.0).contains(&f));
        }

        #[test]
        fn frac_of_tiny_negatives_stays_below_one(x in -1.0e-6_f32..0.0) {
            let f = frac(x);
            prop_assert!((0.0..1.0).contains(&f));
        }

        #[test]
        fn round_is_half_up_for_non_negative(t in 0.0_f32..1.0e6) {
            prop_assert_eq!(round(t), (t + 0.5).floor());
        }
    }
}
