//! Reductions of lazy vectors to a scalar.
//!
//! ## Purpose
//!
//! This module provides `sum` and `mean` with R's missing-value handling, so
//! an adapter chain can be reduced without materializing it first.
//!
//! ## Design notes
//!
//! * **NA first**: Without `na_rm`, the first missing element ends the
//!   reduction with `NA`; remaining elements are not evaluated. A pulled
//!   value that is `NA` (a user function returning it) counts the same.
//! * **na_rm**: Skips missing elements and every other NaN, like R's `na.rm`.
//! * **Two-pass mean**: `mean` refines `s = Σx/n` with a second pass
//!   `s + Σ(x - s)/n`, which pulls each element a second time.
//!
//! ## Invariants
//!
//! * The sum of an empty vector is `0`; the mean of an empty vector is `NaN`.

// Internal dependencies
use crate::primitives::missing::{NA_REAL, is_na};
use crate::primitives::vector::SugarVector;

// ============================================================================
// Internal Accumulation
// ============================================================================

/// Running total over the kept elements, or `None` if a missing element was hit.
fn accumulate<V: SugarVector>(x: &V, na_rm: bool, center: f64) -> Option<(f64, usize)> {
    let mut total = 0.0;
    let mut count = 0;
    for i in 0..x.len() {
        if x.is_missing(i) {
            if na_rm {
                continue;
            }
            return None;
        }
        let value = x.elt(i);
        if value.is_nan() {
            if na_rm {
                continue;
            }
            // a user closure may return NA for a present input
            if is_na(value) {
                return None;
            }
        }
        total += value - center;
        count += 1;
    }
    Some((total, count))
}

// ============================================================================
// Reductions
// ============================================================================

/// Sum of the elements.
pub fn sum<V: SugarVector>(x: V, na_rm: bool) -> f64 {
    match accumulate(&x, na_rm, 0.0) {
        Some((total, _)) => total,
        None => NA_REAL,
    }
}

/// Arithmetic mean of the elements.
pub fn mean<V: SugarVector>(x: V, na_rm: bool) -> f64 {
    let Some((total, count)) = accumulate(&x, na_rm, 0.0) else {
        return NA_REAL;
    };
    if count == 0 {
        return f64::NAN;
    }

    let n = count as f64;
    let s = total / n;
    if !s.is_finite() {
        return s;
    }

    match accumulate(&x, na_rm, s) {
        Some((correction, _)) => s + correction / n,
        None => NA_REAL,
    }
}
