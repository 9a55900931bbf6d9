//! Tests for the binary adapter.
//!
//! The binary adapter is the lazy elementwise view `f(a, b)` over two
//! operands, with the shorter operand recycled. It covers:
//! - The recycling rule and its length errors
//! - Missing-value short-circuit on either operand
//! - Scalar operands on either side
//! - Laziness and evaluation counts
//!
//! ## Test Organization
//!
//! 1. **Recycling** - Result length and index mapping
//! 2. **Length Errors** - Incompatible and empty operands
//! 3. **Missing Values** - NA short-circuit and NaN pass-through
//! 4. **Laziness** - Evaluation counts
//! 5. **Catalog Entries** - `choose`, `beta`, `psigamma`, `round`, `signif`

use approx::assert_relative_eq;
use core::cell::Cell;
use core::f64::consts::PI;
use mathsugar::prelude::*;

// ============================================================================
// Recycling Tests
// ============================================================================

/// Test that the shorter operand is recycled against the longer one.
///
/// Verifies:
/// - Result length is the longer length
/// - Element `i` pairs `a[i % len(a)]` with `b[i % len(b)]`
#[test]
fn test_binary_recycles_shorter_rhs() {
    let a = [10.0, 20.0];
    let b = [1.0, 2.0, 3.0, 4.0];

    let y = Binary::new(&b, &a, |x: f64, y: f64| x + y).expect("4 is a multiple of 2");
    assert_eq!(y.len(), 4);
    assert_eq!(y.materialize().as_slice(), &[11.0, 22.0, 13.0, 24.0]);
}

/// Test that recycling works the same way when the lhs is the shorter one.
#[test]
fn test_binary_recycles_shorter_lhs() {
    let a = [10.0, 20.0];
    let b = [1.0, 2.0, 3.0, 4.0];

    let y = Binary::new(&a, &b, |x: f64, y: f64| x + y).expect("4 is a multiple of 2");
    assert_eq!(y.materialize().as_slice(), &[11.0, 22.0, 13.0, 24.0]);
}

/// Test that argument order reaches the function unchanged.
#[test]
fn test_binary_argument_order() {
    let y = Binary::new(1.0, 3.0, |x: f64, y: f64| x - y).unwrap();
    assert_eq!(y.elt(0), -2.0);
}

/// Test scalar operands on either side.
#[test]
fn test_binary_scalar_operands() {
    let n = [5.0, 6.0, 7.0];
    assert_eq!(
        choose(&n, 2.0).unwrap().materialize().as_slice(),
        &[10.0, 15.0, 21.0]
    );

    let k = [0.0, 1.0, 2.0, 3.0];
    assert_eq!(
        choose(3.0, &k).unwrap().materialize().as_slice(),
        &[1.0, 3.0, 3.0, 1.0]
    );
}

/// Test that both operands of equal length pair up elementwise.
#[test]
fn test_binary_equal_lengths() {
    let n = [4.0, 5.0, 6.0, 7.0];
    let k = [1.0, 2.0, 1.0, 2.0];

    let y = choose(&n, &k).unwrap();
    assert_eq!(y.len(), 4);
    assert_eq!(y.materialize().as_slice(), &[4.0, 10.0, 6.0, 21.0]);
}

// ============================================================================
// Length Error Tests
// ============================================================================

/// Test that incompatible lengths fail at construction.
#[test]
fn test_binary_length_mismatch() {
    let a = [1.0, 2.0, 3.0];
    let b = [1.0, 2.0];

    let err = Binary::new(&a, &b, |x: f64, y: f64| x + y).err();
    assert_eq!(err, Some(SugarError::LengthMismatch { lhs: 3, rhs: 2 }));

    let err = beta(&b, &a).unwrap_err();
    assert_eq!(err, SugarError::LengthMismatch { lhs: 2, rhs: 3 });
}

/// Test that a length error carries a readable message.
#[test]
fn test_binary_length_mismatch_message() {
    let err = lbeta(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("lhs has 3"));
    assert!(message.contains("rhs has 2"));
}

/// Test that two empty operands give an empty result.
#[test]
fn test_binary_both_empty() {
    let a: Vec<f64> = Vec::new();
    let b: Vec<f64> = Vec::new();

    let y = choose(&a, &b).expect("two empty operands recycle to length 0");
    assert_eq!(y.len(), 0);
    assert!(y.materialize().is_empty());
}

/// Test that exactly one empty operand is an error.
#[test]
fn test_binary_one_empty() {
    let empty: Vec<f64> = Vec::new();
    let x = [1.0, 2.0, 3.0];

    assert_eq!(
        choose(&empty, &x).unwrap_err(),
        SugarError::LengthMismatch { lhs: 0, rhs: 3 }
    );
    assert_eq!(
        choose(&x, &empty).unwrap_err(),
        SugarError::LengthMismatch { lhs: 3, rhs: 0 }
    );
}

// ============================================================================
// Missing Value Tests
// ============================================================================

/// Test that a missing element on either side gives a missing result.
#[test]
fn test_binary_missing_either_side() {
    let a = [1.0, NA_REAL, 3.0, 4.0];
    let b = [NA_REAL, 1.0];
    let calls = Cell::new(0);

    let y = Binary::new(&a, &b, |x: f64, y: f64| {
        calls.set(calls.get() + 1);
        x * y
    })
    .unwrap();

    // pairs: (1, NA) (NA, 1) (3, NA) (4, 1)
    assert!(y.is_missing(0));
    assert!(y.is_missing(1));
    assert!(y.is_missing(2));
    assert!(!y.is_missing(3));
    assert_eq!(calls.get(), 0);

    let out = y.materialize();
    assert_eq!(out.count_missing(), 3);
    assert_eq!(out[3], 4.0);
    assert_eq!(calls.get(), 1);
}

/// Test that NaN produced by the function is not the missing sentinel.
#[test]
fn test_binary_nan_is_not_missing() {
    let y = beta(-1.0, 2.0).unwrap();

    assert!(y.elt(0).is_nan());
    assert!(!is_na(y.elt(0)));
    assert!(!y.is_missing(0));
}

/// Test that missingness propagates through nested binary adapters.
#[test]
fn test_binary_missing_through_nesting() {
    let n = [5.0, NA_REAL];
    let y = round(choose(&n, 2.0).unwrap(), 0.0).unwrap();

    let out = y.materialize();
    assert_eq!(out[0], 10.0);
    assert!(is_na(out[1]));
}

// ============================================================================
// Laziness Tests
// ============================================================================

/// Test that construction evaluates nothing and each pull evaluates once.
#[test]
fn test_binary_lazy_evaluation() {
    let a = [1.0, 2.0, 3.0, 4.0];
    let calls = Cell::new(0);
    let y = Binary::new(&a, 10.0, |x: f64, y: f64| {
        calls.set(calls.get() + 1);
        x + y
    })
    .unwrap();
    assert_eq!(calls.get(), 0);

    assert_eq!(y.elt(2), 13.0);
    assert_eq!(calls.get(), 1);

    let _ = y.materialize();
    assert_eq!(calls.get(), 5);
}

/// Test single evaluation per pull through a unary-over-binary pipeline.
#[test]
fn test_binary_nested_single_evaluation() {
    let a = [1.0, 2.0, 3.0, 4.0];
    let b = [1.0, 2.0];
    let inner_calls = Cell::new(0);
    let outer_calls = Cell::new(0);

    let inner = Binary::new(&a, &b, |x: f64, y: f64| {
        inner_calls.set(inner_calls.get() + 1);
        x * y
    })
    .unwrap();
    let outer = Unary::new(inner, |v: f64| {
        outer_calls.set(outer_calls.get() + 1);
        v + 0.5
    });

    assert_eq!(outer.materialize().as_slice(), &[1.5, 4.5, 3.5, 8.5]);
    assert_eq!(inner_calls.get(), 4);
    assert_eq!(outer_calls.get(), 4);
}

// ============================================================================
// Catalog Entry Tests
// ============================================================================

/// Test binomial coefficients including generalized arguments.
#[test]
fn test_choose_values() {
    let n = [5.0, -2.0, 0.5, 50.0, 10.0, 4.0, 5.0];
    let k = [2.0, 3.0, 2.0, 25.0, -1.0, 2.6, 7.0];

    let out = choose(&n, &k).unwrap().materialize();
    assert_eq!(
        out.as_slice(),
        &[10.0, -4.0, -0.125, 126410606437752.0, 0.0, 4.0, 0.0]
    );
}

/// Test the beta function and its logarithm.
#[test]
fn test_beta_values() {
    let out = beta(&[2.0, 0.5, 0.0], &[3.0, 0.5, 2.0]).unwrap().materialize();

    assert_relative_eq!(out[0], 1.0 / 12.0, max_relative = 1e-14);
    assert_relative_eq!(out[1], PI, max_relative = 1e-14);
    assert_eq!(out[2], f64::INFINITY);

    let l = lbeta(15.0, 20.0).unwrap().elt(0);
    assert_relative_eq!(l, -24.049722172259507, max_relative = 1e-12);

    let tiny = 1e-310_f64;
    let l = lbeta(&[tiny], 2.0).unwrap().elt(0);
    assert!(l.is_finite());
    assert_relative_eq!(l, -tiny.ln(), max_relative = 1e-12);
}

/// Test polygamma with a recycled derivative order.
#[test]
fn test_psigamma_recycled_deriv() {
    let x = [1.0, 1.0, 1.0, 1.0];
    let deriv = [0.0, 1.0, 2.0, 3.0];

    let out = psigamma(&x, &deriv).unwrap().materialize();
    assert_relative_eq!(out[0], -0.5772156649015329, max_relative = 1e-13);
    assert_relative_eq!(out[1], PI * PI / 6.0, max_relative = 1e-13);
    assert_relative_eq!(out[2], -2.4041138063191885, max_relative = 1e-12);
    assert_relative_eq!(out[3], 6.493939402266829, max_relative = 1e-12);
}

/// Test decimal rounding at the representable boundary.
#[test]
fn test_round_values() {
    let x = [2.345, 0.125, 0.375, 2.5, -1.5, 123.456, -2.675, 0.15];
    let digits = [2.0, 2.0, 2.0, 0.0, 0.0, -1.0, 2.0, 1.0];

    let out = round(&x, &digits).unwrap().materialize();
    assert_eq!(
        out.as_slice(),
        &[2.35, 0.12, 0.38, 2.0, -2.0, 120.0, -2.67, 0.1]
    );
}

/// Test rounding to significant digits.
#[test]
fn test_signif_values() {
    let x = [123456.0, 0.000123456, -3.14159, 2.5, 15.0, 123.456];
    let digits = [2.0, 3.0, 3.0, 1.0, 1.0, 0.0];

    let out = signif(&x, &digits).unwrap().materialize();
    assert_eq!(
        out.as_slice(),
        &[120000.0, 0.000123, -3.14, 2.0, 20.0, 100.0]
    );
}
