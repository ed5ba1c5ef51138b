//! `floats` submodule implements several consts and functions that help in work with `f32` type.
//!
//! [`approx_equal`] function and [`EPSILON`] const are dealing with floating point equality.
//!
//! [`sign_f32`] function and [`SIGN_MASK`], [`ONE_BITS`] consts are dealing with
//! IEEE-754 bit representation of `f32`.
//!

/// Constant that can be used as a tolerance for floating point equality.
///
/// It represents amount of difference that is allowed for two `f32` values to still be considered
/// equal.
///
pub const EPSILON: f32 = 0.00001;
/// Checks whether `a` lies strictly inside `(b - epsilon; b + epsilon)`.
///
/// Boundary values are not considered equal. `epsilon` is not validated:
/// zero or negative tolerance makes the predicate always false.
///
/// # Example
/// ```rust
/// # use scalarmath::floats::{approx_equal, EPSILON};
/// assert!(approx_equal(0.15 + 0.15, 0.1 + 0.2, EPSILON));
/// assert!(!approx_equal(1.0, 1.5, 0.5));
/// ```
///
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    a > b - epsilon && a < b + epsilon
}

/// Mask that selects sign bit of `f32`.
///
pub const SIGN_MASK: u32 = 0x8000_0000;
/// Bit pattern of `1.0_f32` (zero sign, biased exponent 127, empty mantissa).
///
pub const ONE_BITS: u32 = 0x3f80_0000;
/// Returns `-1.0` if sign bit of `k` is set and `+1.0` otherwise.
///
/// Keeps the sign bit of `k` and replaces exponent and mantissa with those of `1.0`,
/// so it gives the same results as generic [`crate::sign`] without comparisons.
/// Since it only looks at the sign bit, `-0.0` yields `-1.0` and `NaN` yields `±1.0`
/// depending on its sign bit.
///
/// # Example
/// ```rust
/// # use scalarmath::floats::sign_f32;
/// assert_eq!(sign_f32(-3.0), -1.0);
/// assert_eq!(sign_f32(0.0), 1.0);
/// assert_eq!(sign_f32(3.0), 1.0);
/// ```
///
pub fn sign_f32(k: f32) -> f32 {
    f32::from_bits((k.to_bits() & SIGN_MASK) | ONE_BITS)
}

#[cfg(test)]
mod tests {
    use super::{approx_equal, sign_f32, EPSILON, ONE_BITS, SIGN_MASK};
    use crate::sign;
    use proptest::prelude::*;

    #[test]
    fn approx() {
        assert!(approx_equal(1.0, 1.0, EPSILON));
        assert!(approx_equal(1.000001, 1.0, EPSILON));
        assert!(!approx_equal(1.0001, 1.0, EPSILON));

        assert!(!approx_equal(1.0, 1.5, 0.5));
        assert!(!approx_equal(2.0, 1.5, 0.5));
        assert!(approx_equal(1.75, 1.5, 0.5));

        assert!(!approx_equal(1.0, 1.0, 0.0));
        assert!(!approx_equal(1.0, 1.0, -1.0));
        assert!(!approx_equal(f32::NAN, f32::NAN, 1.0));
    }

    #[test]
    fn bit_constants() {
        assert_eq!(f32::from_bits(ONE_BITS), 1.0);
        assert_eq!(f32::from_bits(SIGN_MASK | ONE_BITS), -1.0);
        assert_eq!((-0.0_f32).to_bits(), SIGN_MASK);
    }

    #[test]
    fn sign_fast_path() {
        for (value, expected) in [(-3.0, -1.0), (0.0, 1.0), (3.0, 1.0)] {
            assert_eq!(sign_f32(value), expected);
            assert_eq!(sign_f32(value).to_bits(), sign(value).to_bits());
        }

        assert_eq!(sign_f32(f32::INFINITY), 1.0);
        assert_eq!(sign_f32(f32::NEG_INFINITY), -1.0);
        assert_eq!(sign_f32(f32::MIN_POSITIVE), 1.0);
        assert_eq!(sign_f32(-0.0), -1.0);
    }

    proptest! {
        #[test]
        fn approx_reflexive(f in -1000.0_f32..1000.0, epsilon in 0.001_f32..10.0) {
            prop_assert!(approx_equal(f, f, epsilon));
        }

        #[test]
        fn approx_rejects_far_values(b in -1000.0_f32..1000.0, d in 0.5_f32..100.0) {
            prop_assert!(!approx_equal(b + d, b, 0.5));
            prop_assert!(!approx_equal(b - d, b, 0.5));
        }

        #[test]
        fn sign_fast_path_matches_generic(k in -1.0e30_f32..1.0e30) {
            prop_assume!(k != 0.0);
            prop_assert_eq!(sign_f32(k).to_bits(), sign(k).to_bits());
        }
    }
}
