//! Elementary scalar functions.
//!
//! Thin wrappers that give each libm operation a plain `fn(f64) -> f64`
//! signature, so they can sit in the sugar catalog as function pointers.
//! Routed through `num_traits::Float` so they also resolve under `no_std`.

// External dependencies
use num_traits::Float;

/// e^x.
#[inline]
pub fn exp(x: f64) -> f64 {
    Float::exp(x)
}

/// Inverse cosine.
#[inline]
pub fn acos(x: f64) -> f64 {
    Float::acos(x)
}

/// Inverse sine.
#[inline]
pub fn asin(x: f64) -> f64 {
    Float::asin(x)
}

/// Inverse tangent.
#[inline]
pub fn atan(x: f64) -> f64 {
    Float::atan(x)
}

/// Smallest integer not less than `x`.
#[inline]
pub fn ceil(x: f64) -> f64 {
    Float::ceil(x)
}

/// Cosine.
#[inline]
pub fn cos(x: f64) -> f64 {
    Float::cos(x)
}

/// Hyperbolic cosine.
#[inline]
pub fn cosh(x: f64) -> f64 {
    Float::cosh(x)
}

/// Largest integer not greater than `x`.
#[inline]
pub fn floor(x: f64) -> f64 {
    Float::floor(x)
}

/// Natural logarithm. Negative input gives `NaN`, zero gives `-Inf`.
#[inline]
pub fn log(x: f64) -> f64 {
    Float::ln(x)
}

/// Base-10 logarithm.
#[inline]
pub fn log10(x: f64) -> f64 {
    Float::log10(x)
}

/// Square root.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    Float::sqrt(x)
}

/// Sine.
#[inline]
pub fn sin(x: f64) -> f64 {
    Float::sin(x)
}

/// Hyperbolic sine.
#[inline]
pub fn sinh(x: f64) -> f64 {
    Float::sinh(x)
}

/// Tangent.
#[inline]
pub fn tan(x: f64) -> f64 {
    Float::tan(x)
}

/// Hyperbolic tangent.
#[inline]
pub fn tanh(x: f64) -> f64 {
    Float::tanh(x)
}

/// Absolute value.
#[inline]
pub fn fabs(x: f64) -> f64 {
    Float::abs(x)
}

/// e^x - 1, accurate near zero.
#[inline]
pub fn expm1(x: f64) -> f64 {
    Float::exp_m1(x)
}

/// ln(1 + x), accurate near zero.
#[inline]
pub fn log1p(x: f64) -> f64 {
    Float::ln_1p(x)
}
