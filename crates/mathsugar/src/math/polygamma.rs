//! Polygamma functions.
//!
//! ## Purpose
//!
//! This module computes ψ⁽ⁿ⁾(x), the n-th derivative of the digamma function,
//! for `0 <= n <= 100`, and the named special cases digamma (n = 0), trigamma
//! (n = 1), tetragamma (n = 2) and pentagamma (n = 3).
//!
//! ## Design notes
//!
//! * **Recurrence**: ψ⁽ⁿ⁾(x) = ψ⁽ⁿ⁾(x + 1) - (-1)ⁿ n! / xⁿ⁺¹ shifts small
//!   positive arguments up to `n + 15`, where the asymptotic series converges
//!   to full double precision.
//! * **Asymptotics**: Bernoulli-number expansion of ψ⁽ⁿ⁾ at large `x`.
//! * **Reflection**: Negative non-integer arguments use
//!   ψ⁽ⁿ⁾(x) = (-1)ⁿ ψ⁽ⁿ⁾(1 - x) - π dⁿ/dxⁿ cot(πx), with the derivatives of
//!   cot expanded as a polynomial in cot(πx).
//!
//! ## Invariants
//!
//! * `deriv` is rounded to the nearest integer; outside `[0, 100]` the result is `NaN`.
//! * At zero and the negative integers: `+Inf` for odd `n`, `NaN` for even `n`.
//! * ψ⁽ⁿ⁾(+Inf) is `+Inf` for `n = 0` and `0` otherwise.

// External dependencies
use core::f64::consts::PI;
use num_traits::Float;

// Internal dependencies
use crate::math::gamma::BERNOULLI_2K;

// ============================================================================
// Constants
// ============================================================================

/// Largest supported derivative order.
pub const MAX_DERIV: usize = 100;

/// Minimum distance above `n` before switching to the asymptotic series.
const ASYMPTOTIC_OFFSET: f64 = 15.0;

// ============================================================================
// Public Functions
// ============================================================================

/// ψ⁽ⁿ⁾(x) with `n = round(deriv)`.
pub fn psigamma(x: f64, deriv: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if deriv.is_nan() {
        return deriv;
    }
    let deriv = libm::rint(deriv);
    if !(0.0..=MAX_DERIV as f64).contains(&deriv) {
        return f64::NAN;
    }
    let n = deriv as usize;

    if x <= 0.0 && x == Float::floor(x) {
        return if n % 2 == 1 { f64::INFINITY } else { f64::NAN };
    }
    if x == f64::INFINITY {
        return if n == 0 { f64::INFINITY } else { 0.0 };
    }

    if x < 0.0 {
        reflected(x, n)
    } else {
        shifted_asymptotic(x, n)
    }
}

/// ψ(x).
#[inline]
pub fn digamma(x: f64) -> f64 {
    psigamma(x, 0.0)
}

/// ψ'(x).
#[inline]
pub fn trigamma(x: f64) -> f64 {
    psigamma(x, 1.0)
}

/// ψ''(x).
#[inline]
pub fn tetragamma(x: f64) -> f64 {
    psigamma(x, 2.0)
}

/// ψ'''(x).
#[inline]
pub fn pentagamma(x: f64) -> f64 {
    psigamma(x, 3.0)
}

// ============================================================================
// Evaluation Strategies
// ============================================================================

/// (-1)^n.
#[inline]
fn alternating(n: usize) -> f64 {
    if n % 2 == 0 { 1.0 } else { -1.0 }
}

/// n! for `n <= MAX_DERIV`, exact up to the precision of `f64`.
fn integer_factorial(n: usize) -> f64 {
    (2..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// Positive `x`: recurrence upwards, then the asymptotic series.
fn shifted_asymptotic(mut x: f64, n: usize) -> f64 {
    let fact = integer_factorial(n);
    let sign = alternating(n);
    let threshold = ASYMPTOTIC_OFFSET + n as f64;

    let mut shift = 0.0;
    while x < threshold {
        shift -= sign * fact / Float::powi(x, n as i32 + 1);
        x += 1.0;
    }

    shift + asymptotic(x, n, fact)
}

/// Asymptotic expansion of ψ⁽ⁿ⁾(x) for large `x`.
fn asymptotic(x: f64, n: usize, fact: f64) -> f64 {
    let x2 = x * x;

    if n == 0 {
        let mut sum = Float::ln(x) - 0.5 / x;
        let mut power = x2;
        for (k, b) in BERNOULLI_2K.iter().enumerate() {
            let two_k = 2.0 * (k + 1) as f64;
            sum -= b / (two_k * power);
            power *= x2;
        }
        return sum;
    }

    // (-1)^(n+1) [ (n-1)!/x^n + n!/(2 x^(n+1)) + sum B_2k (2k+n-1)!/((2k)! x^(2k+n)) ]
    let nf = n as f64;
    let fact_nm1 = fact / nf;
    let xn = Float::powi(x, n as i32);
    let mut sum = fact_nm1 / xn + fact / (2.0 * xn * x);

    let mut coef = fact_nm1;
    let mut power = xn;
    for (k, b) in BERNOULLI_2K.iter().enumerate() {
        let two_k = 2.0 * (k + 1) as f64;
        coef *= (two_k + nf - 2.0) * (two_k + nf - 1.0) / ((two_k - 1.0) * two_k);
        power *= x2;
        sum += b * coef / power;
    }

    -alternating(n) * sum
}

/// Negative non-integer `x`: reflection through `1 - x`.
fn reflected(x: f64, n: usize) -> f64 {
    // cot(pi x) has period 1; reduce first to keep pi*x accurate.
    let reduced = x - libm::rint(x);
    let cot = 1.0 / Float::tan(PI * reduced);

    let positive = shifted_asymptotic(1.0 - x, n);
    alternating(n) * positive - Float::powi(PI, n as i32 + 1) * cot_derivative(cot, n)
}

/// Evaluate P_n(c), where dⁿ/duⁿ cot(u) = P_n(cot u).
///
/// P_0(c) = c and P_(k+1)(c) = -(1 + c²) P_k'(c); P_n has degree n + 1.
fn cot_derivative(cot: f64, n: usize) -> f64 {
    let mut coeffs = [0.0_f64; MAX_DERIV + 2];
    let mut next = [0.0_f64; MAX_DERIV + 2];
    coeffs[1] = 1.0;

    for step in 0..n {
        let degree = step + 1;
        next.iter_mut().for_each(|c| *c = 0.0);
        // derivative coefficient j is (j + 1) * a[j + 1], for j < degree
        for j in 0..degree {
            let d = (j + 1) as f64 * coeffs[j + 1];
            next[j] -= d;
            next[j + 2] -= d;
        }
        core::mem::swap(&mut coeffs, &mut next);
    }

    coeffs[..=n + 1]
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * cot + c)
}
