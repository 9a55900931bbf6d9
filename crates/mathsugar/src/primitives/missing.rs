//! The missing-value sentinel.
//!
//! R marks a missing double with a specific NaN payload: the high word is
//! `0x7FF00000` and the low word is `1954`. Every other NaN, including the
//! results of invalid arithmetic such as `0.0 / 0.0`, is an ordinary value.
//!
//! ## Invariants
//!
//! * `is_na(NA_REAL)` is true.
//! * `is_na(f64::NAN)` is false.
//! * `is_na(x)` implies `x.is_nan()`.

/// Low word of the `NA` payload.
const NA_LOW_WORD: u32 = 1954;

/// R's missing double (`NA_real_`).
pub const NA_REAL: f64 = f64::from_bits(0x7FF0_0000_0000_0000 | NA_LOW_WORD as u64);

/// Check whether `x` is the missing sentinel.
///
/// Only the low word of the payload is compared, so an `NA` that went
/// through a quieting operation is still recognised.
#[inline]
pub fn is_na(x: f64) -> bool {
    x.is_nan() && (x.to_bits() as u32) == NA_LOW_WORD
}
