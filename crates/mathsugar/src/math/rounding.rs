//! Decimal rounding.
//!
//! ## Purpose
//!
//! This module implements rounding to a number of decimal places (`fround`,
//! R's `round()`), to a number of significant digits (`fprec`, R's
//! `signif()`), and truncation toward zero (`ftrunc`).
//!
//! ## Design notes
//!
//! * **Representable boundary**: `fround` never rounds the decimal string of
//!   `x`. It computes the two decimal candidates below and above `x` as
//!   doubles and returns the closer one; an exact tie goes to the even
//!   candidate. So `fround(0.15, 1)` is `0.1`: the double nearest 0.15 lies
//!   below it.
//! * **Scaling**: Powers of ten are built by repeated squaring, and `fprec`
//!   arranges its scale factor to be `>= 1` so that it is exactly representable.
//!
//! ## Invariants
//!
//! * `digits` is rounded to the nearest integer.
//! * `NaN` in either argument propagates; infinities and zero are returned unchanged.

// External dependencies
use num_traits::Float;

// ============================================================================
// Constants
// ============================================================================

/// Decimal digits a double carries reliably (`DBL_DIG`).
const DBL_DIG: f64 = 15.0;

/// Largest decimal exponent of a finite double (`DBL_MAX_10_EXP`).
const MAX_10_EXP: i32 = 308;

/// Above this many significant digits `fprec` is a no-op.
const MAX_SIGNIF_DIGITS: i32 = 22;

/// log10(2).
const LOG10_2: f64 = 0.301029995663981195213738894724;

// ============================================================================
// Helpers
// ============================================================================

/// x^n by repeated squaring; negative `n` gives the reciprocal.
fn pow_di(mut x: f64, n: i32) -> f64 {
    if n == 0 {
        return 1.0;
    }
    let negative = n < 0;
    let mut n = n.unsigned_abs();
    let mut xn = 1.0;
    loop {
        if n & 1 == 1 {
            xn *= x;
        }
        n >>= 1;
        if n == 0 {
            break;
        }
        x *= x;
    }
    if negative { 1.0 / xn } else { xn }
}

/// Round to the nearest integer, ties to even.
#[inline]
fn rint(x: f64) -> f64 {
    libm::rint(x)
}

// ============================================================================
// Public Functions
// ============================================================================

/// Truncate toward zero.
#[inline]
pub fn ftrunc(x: f64) -> f64 {
    Float::trunc(x)
}

/// Round `x` to `digits` decimal places.
pub fn fround(x: f64, digits: f64) -> f64 {
    if x.is_nan() || digits.is_nan() {
        return x + digits;
    }
    if !x.is_finite() || digits > (MAX_10_EXP + 15) as f64 || x == 0.0 {
        return x;
    }
    if digits < -(MAX_10_EXP as f64) {
        return 0.0;
    }
    if digits == 0.0 {
        return rint(x);
    }

    let dig = Float::floor(digits + 0.5) as i32;
    let (sign, x) = if x < 0.0 { (-1.0, -x) } else { (1.0, x) };

    // cheap estimate of log10(x)
    let l10x = LOG10_2 * (0.5 + libm::ilogb(x) as f64);
    if l10x + dig as f64 > DBL_DIG {
        return sign * x;
    }

    let (i10, lower, upper) = if dig <= MAX_10_EXP {
        let pow10 = pow_di(10.0, dig);
        let x10 = pow10 * x;
        let i10 = Float::floor(x10);
        (i10, i10 / pow10, Float::ceil(x10) / pow10)
    } else {
        // |x| is tiny: split the scale so that neither factor overflows
        let p10 = pow_di(10.0, dig - MAX_10_EXP);
        let pow10 = pow_di(10.0, MAX_10_EXP);
        let x10 = (pow10 * x) * p10;
        let i10 = Float::floor(x10);
        (
            i10,
            i10 / pow10 / p10,
            Float::ceil(x10) / pow10 / p10,
        )
    };

    let du = upper - x;
    let dd = x - lower;
    let round_up = du < dd || (du == dd && i10 % 2.0 == 1.0);
    sign * if round_up { upper } else { lower }
}

/// Round `x` to `digits` significant decimal digits.
pub fn fprec(x: f64, digits: f64) -> f64 {
    if x.is_nan() || digits.is_nan() {
        return x + digits;
    }
    if !x.is_finite() {
        return x;
    }
    let digits = if digits.is_infinite() {
        if digits > 0.0 {
            return x;
        }
        1.0
    } else {
        digits
    };
    if x == 0.0 {
        return x;
    }

    let dig = libm::round(digits);
    if dig > MAX_SIGNIF_DIGITS as f64 {
        return x;
    }
    let dig = if dig < 1.0 { 1 } else { dig as i32 };

    let (sign, x) = if x < 0.0 { (-1.0, -x) } else { (1.0, x) };
    let l10 = Float::log10(x);
    let mut e10 = dig - 1 - Float::floor(l10) as i32;

    if Float::abs(l10) < (MAX_10_EXP - 2) as f64 {
        let mut p10 = 1.0;
        if e10 > MAX_10_EXP {
            // numbers below 10^(dig - 1 - MAX_10_EXP)
            p10 = pow_di(10.0, e10 - MAX_10_EXP);
            e10 = MAX_10_EXP;
        }
        if e10 > 0 {
            let pow10 = pow_di(10.0, e10);
            sign * (rint((x * pow10) * p10) / pow10) / p10
        } else {
            let pow10 = pow_di(10.0, -e10);
            sign * (rint(x / pow10) * pow10)
        }
    } else {
        // very large or very small magnitudes
        let do_round = MAX_10_EXP as f64 - l10 >= pow_di(10.0, -dig);
        let e2 = dig + if e10 > 0 { 1 } else { 6 };
        let p10 = pow_di(10.0, e2);
        let big_p10 = pow_di(10.0, e10 - e2);
        let mut scaled = x * p10 * big_p10;
        if do_round {
            scaled += 0.5;
        }
        scaled = Float::floor(scaled) / p10;
        sign * scaled / big_p10
    }
}
