//! Gamma, log-gamma and factorials.
//!
//! ## Purpose
//!
//! This module provides Γ(x), log|Γ(x)| (optionally with the sign of Γ), the
//! derived factorials, and the Stirling correction term used by `lbeta`.
//!
//! ## Design notes
//!
//! * **Backend**: Γ and log|Γ| come from `libm` (`tgamma`, `lgamma_r`), which
//!   work under `no_std`.
//! * **Poles**: Γ is undefined at 0 and the negative integers. `gammafn`
//!   returns `NaN` there and `lgammafn` returns `+Inf`, as R does.
//!
//! ## Invariants
//!
//! * `factorial(n) == gammafn(n + 1)` and `lfactorial(n) == lgammafn(n + 1)`.
//! * `lgammafn_sign(x).0 == lgammafn(x)` for every `x`.

// External dependencies
use num_traits::Float;

// ============================================================================
// Constants
// ============================================================================

/// Bernoulli numbers B_2, B_4, ..., B_28.
pub(crate) const BERNOULLI_2K: [f64; 14] = [
    1.0 / 6.0,
    -1.0 / 30.0,
    1.0 / 42.0,
    -1.0 / 30.0,
    5.0 / 66.0,
    -691.0 / 2730.0,
    7.0 / 6.0,
    -3617.0 / 510.0,
    43867.0 / 798.0,
    -174611.0 / 330.0,
    854513.0 / 138.0,
    -236364091.0 / 2730.0,
    8553103.0 / 6.0,
    -23749461029.0 / 870.0,
];

/// Number of Stirling series terms used by [`lgamma_correction`].
const STIRLING_TERMS: usize = 8;

/// ln(sqrt(2*pi)).
pub(crate) const LN_SQRT_2PI: f64 = 0.918938533204672741780329736406;

// ============================================================================
// Gamma Family
// ============================================================================

#[inline]
fn is_pole(x: f64) -> bool {
    x <= 0.0 && x == Float::floor(x)
}

/// Γ(x).
///
/// `NaN` at zero and the negative integers, `+Inf` on overflow.
pub fn gammafn(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if is_pole(x) {
        return f64::NAN;
    }
    libm::tgamma(x)
}

/// log|Γ(x)|.
///
/// `+Inf` at the poles of Γ.
pub fn lgammafn(x: f64) -> f64 {
    lgammafn_sign(x).0
}

/// log|Γ(x)| together with the sign of Γ(x) (`1` or `-1`).
///
/// The sign is reported as `1` at the poles.
pub fn lgammafn_sign(x: f64) -> (f64, i32) {
    if x.is_nan() {
        return (x, 1);
    }
    if is_pole(x) {
        return (f64::INFINITY, 1);
    }
    libm::lgamma_r(x)
}

/// x! = Γ(x + 1).
#[inline]
pub fn factorial(x: f64) -> f64 {
    gammafn(x + 1.0)
}

/// ln(x!) = log Γ(x + 1).
#[inline]
pub fn lfactorial(x: f64) -> f64 {
    lgammafn(x + 1.0)
}

// ============================================================================
// Stirling Correction
// ============================================================================

/// Stirling correction: log Γ(x) - ((x - 1/2) ln x - x + ln sqrt(2*pi)).
///
/// Only accurate for `x >= 10`, which is the only range `lbeta` calls it in.
pub(crate) fn lgamma_correction(x: f64) -> f64 {
    let x2 = x * x;
    let mut power = x;
    let mut sum = 0.0;
    for (k, b) in BERNOULLI_2K.iter().take(STIRLING_TERMS).enumerate() {
        let two_k = 2.0 * (k + 1) as f64;
        sum += b / (two_k * (two_k - 1.0) * power);
        power *= x2;
    }
    sum
}
