//! `bits` submodule implements power-of-two arithmetic and bit counting on `u32`.
//!
//! All functions are branch-light bit tricks that never panic. Zero input is a precondition
//! violation for [`log2_floor`], [`highest_bit_set`] and [`highest_bit_set_portable`]
//! (and gives a wrapped result for [`next_pow2`]); returned values for it are unspecified.
//!

/// Propagates highest set bit into every lower position.
///
fn smear(mut x: u32) -> u32 {
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x
}

/// Returns smallest power of two that is greater than or equal to `x`.
///
/// `0` and values above `2^31` wrap around to `0`.
///
/// # Example
/// ```rust
/// # use scalarmath::bits::next_pow2;
/// assert_eq!(next_pow2(1), 1);
/// assert_eq!(next_pow2(17), 32);
/// assert_eq!(next_pow2(1024), 1024);
/// ```
///
pub fn next_pow2(x: u32) -> u32 {
    smear(x.wrapping_sub(1)).wrapping_add(1)
}
/// Returns largest power of two that is less than or equal to `x` (`0` for `0`).
///
/// Doubling loop runs at most 31 times.
///
/// # Example
/// ```rust
/// # use scalarmath::bits::prev_pow2;
/// assert_eq!(prev_pow2(0), 0);
/// assert_eq!(prev_pow2(17), 16);
/// assert_eq!(prev_pow2(1023), 512);
/// ```
///
pub fn prev_pow2(x: u32) -> u32 {
    if x == 0 {
        return x;
    }

    let half = x >> 1;
    let mut pow2: u32 = 1;
    while pow2 <= half {
        pow2 <<= 1;
    }
    pow2
}

/// Returns `floor(log2(x))` for `x > 0`.
///
/// Smears highest bit down, drops the lowest one and counts what is left in parallel.
/// Result is masked to 6 bits, so it is only meaningful for 32-bit inputs (`0..=31`).
/// `log2_floor(0)` returns `0`, which is indistinguishable from `log2_floor(1)`.
///
/// # Example
/// ```rust
/// # use scalarmath::bits::log2_floor;
/// assert_eq!(log2_floor(1), 0);
/// assert_eq!(log2_floor(1000), 9);
/// assert_eq!(log2_floor(u32::MAX), 31);
/// ```
///
pub fn log2_floor(x: u32) -> u32 {
    let mut x = smear(x) >> 1;
    x -= (x >> 1) & 0x5555_5555;
    x = ((x >> 2) & 0x3333_3333) + (x & 0x3333_3333);
    x = ((x >> 4) + x) & 0x0f0f_0f0f;
    x += x >> 8;
    x += x >> 16;
    x & 63
}

/// Returns number of set bits in `u` (MIT HAKMEM count).
///
/// Counts bits in every octal digit, folds neighbouring digits together
/// and sums them up with remainder of division by 63.
///
/// # Example
/// ```rust
/// # use scalarmath::bits::bit_count;
/// assert_eq!(bit_count(0), 0);
/// assert_eq!(bit_count(0b1011), 3);
/// assert_eq!(bit_count(u32::MAX), 32);
/// ```
///
pub fn bit_count(u: u32) -> u32 {
    let count = u
        .wrapping_sub((u >> 1) & 0o33333333333)
        .wrapping_sub((u >> 2) & 0o11111111111);
    (count.wrapping_add(count >> 3) & 0o30707070707) % 63
}

/// Returns index (`0..=31`) of the most significant set bit of `u`.
///
/// Based on leading zero count. `u` must not be zero - current implementation returns `-1`
/// for it, but that value should not be relied upon.
///
/// # Example
/// ```rust
/// # use scalarmath::bits::highest_bit_set;
/// assert_eq!(highest_bit_set(1), 0);
/// assert_eq!(highest_bit_set(0b0110_0000), 6);
/// assert_eq!(highest_bit_set(0x8000_0000), 31);
/// ```
///
pub fn highest_bit_set(u: u32) -> i32 {
    31 - u.leading_zeros() as i32
}
/// Software version of [`highest_bit_set`] that does not rely on leading zero count.
///
/// Smears highest bit down and counts set bits with [`bit_count`].
/// Gives the same results as [`highest_bit_set`] for every input.
///
/// # Example
/// ```rust
/// # use scalarmath::bits::{highest_bit_set, highest_bit_set_portable};
/// assert_eq!(highest_bit_set_portable(0x00f0_0000), highest_bit_set(0x00f0_0000));
/// ```
///
pub fn highest_bit_set_portable(u: u32) -> i32 {
    bit_count(smear(u)) as i32 - 1
}
