//! `angles` submodule implements conversions between degrees and radians and
//! helpers that derive sine from cosine (and vice versa) through the Pythagorean identity.
//!
//! Conversions do not wrap angles into `[0; 360)`: negative and large values are scaled as is.
//!

use std::f32::consts::PI;

/// Multiplier that converts degrees into radians (`PI / 180`).
///
pub const DEGREES_TO_RADIANS: f32 = PI / 180.0;
/// Multiplier that converts radians into degrees (`180 / PI`).
///
pub const RADIANS_TO_DEGREES: f32 = 180.0 / PI;

/// Converts angle in degrees into radians.
///
/// # Example
/// ```rust
/// # use scalarmath::angles::degrees_to_radians;
/// # use scalarmath::floats::approx_equal;
/// # use std::f32::consts::PI;
/// assert!(approx_equal(degrees_to_radians(180.0), PI, 1e-6));
/// assert!(approx_equal(degrees_to_radians(-720.0), -4.0 * PI, 1e-5));
/// ```
///
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEGREES_TO_RADIANS
}
/// Converts angle in radians into degrees.
///
/// # Example
/// ```rust
/// # use scalarmath::angles::radians_to_degrees;
/// # use scalarmath::floats::approx_equal;
/// # use std::f32::consts::PI;
/// assert!(approx_equal(radians_to_degrees(PI), 180.0, 1e-4));
/// ```
///
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * RADIANS_TO_DEGREES
}

/// Returns non-negative sine that corresponds to given cosine (`sqrt(1 - cos^2)`).
///
/// Any `cos` with `|cos| >= 1` (including values slightly off due to rounding) gives `0.0`,
/// so the square root never sees a negative radicand.
///
/// Only magnitude is returned - sign of the sine is lost and must be supplied by caller.
///
/// # Example
/// ```rust
/// # use scalarmath::angles::sin_from_cos;
/// # use scalarmath::floats::{approx_equal, EPSILON};
/// assert_eq!(sin_from_cos(0.0), 1.0);
/// assert_eq!(sin_from_cos(1.0), 0.0);
/// assert_eq!(sin_from_cos(-1.5), 0.0);
/// assert!(approx_equal(sin_from_cos(0.6), 0.8, EPSILON));
/// ```
///
pub fn sin_from_cos(cos: f32) -> f32 {
    let sin_sqr = 1.0 - cos * cos;
    if sin_sqr <= 0.0 {
        0.0
    } else {
        sin_sqr.sqrt()
    }
}
/// Returns non-negative cosine that corresponds to given sine (`sqrt(1 - sin^2)`).
///
/// This is the same formula as [`sin_from_cos`], so only magnitude of cosine is returned.
///
/// # Example
/// ```rust
/// # use scalarmath::angles::cos_from_sin;
/// assert_eq!(cos_from_sin(-1.0), 0.0);
/// assert_eq!(cos_from_sin(0.0), 1.0);
/// ```
///
pub fn cos_from_sin(sin: f32) -> f32 {
    sin_from_cos(sin)
}
