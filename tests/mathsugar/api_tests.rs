//! Tests for the sugar catalog and runtime lookup.
//!
//! The catalog exposes every named function twice: as a generic sugar
//! function and as an entry of a static `{name -> function}` table. These
//! tests check that both views agree and that composition works through
//! the public surface.
//!
//! ## Test Organization
//!
//! 1. **Catalog Contents** - Table entries and their names
//! 2. **Runtime Lookup** - By-name construction and unknown names
//! 3. **Composition** - Pipelines of catalog entries

use approx::assert_relative_eq;
use mathsugar::prelude::*;

// ============================================================================
// Catalog Contents Tests
// ============================================================================

/// Test that every unary entry is listed exactly once.
#[test]
fn test_unary_catalog_names() {
    let expected = [
        "exp", "acos", "asin", "atan", "ceil", "ceiling", "cos", "cosh", "floor", "log", "log10",
        "sqrt", "sin", "sinh", "tan", "tanh", "abs", "gamma", "lgamma", "digamma", "trigamma",
        "tetragamma", "pentagamma", "expm1", "log1p", "factorial", "lfactorial", "trunc",
    ];

    let names: Vec<&str> = UNARY_FUNCTIONS.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, expected);
}

/// Test that every binary entry is listed exactly once.
#[test]
fn test_binary_catalog_names() {
    let names: Vec<&str> = BINARY_FUNCTIONS.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        ["choose", "lchoose", "beta", "lbeta", "psigamma", "round", "signif"]
    );
}

/// Test that each table entry computes the same values as its sugar function.
#[test]
fn test_table_matches_sugar_functions() {
    let x = [0.25, 0.5, 0.75];

    for (name, f) in UNARY_FUNCTIONS {
        let by_name = unary_by_name(name, &x).expect("listed names resolve");
        for (i, &xi) in x.iter().enumerate() {
            let expected = f(xi);
            let got = by_name.elt(i);
            assert!(
                got.to_bits() == expected.to_bits(),
                "{name}({xi}) = {got}, expected {expected}"
            );
        }
    }
}

/// Test that `ceil` and `ceiling` are the same function.
#[test]
fn test_ceiling_alias() {
    let x = [-1.5, 1.5];
    assert_eq!(ceil(&x).materialize(), ceiling(&x).materialize());
}

// ============================================================================
// Runtime Lookup Tests
// ============================================================================

/// Test building adapters by name.
#[test]
fn test_lookup_by_name() {
    let x = [1.0, 4.0];
    let y = unary_by_name("sqrt", &x).unwrap();
    assert_eq!(y.materialize().as_slice(), &[1.0, 2.0]);

    let z = binary_by_name("choose", &[5.0, 6.0], 2.0).unwrap();
    assert_eq!(z.materialize().as_slice(), &[10.0, 15.0]);

    let f = binary_function("beta").unwrap();
    assert_relative_eq!(f(2.0, 3.0), 1.0 / 12.0, max_relative = 1e-14);
}

/// Test that unknown names are reported with the name.
#[test]
fn test_lookup_unknown_name() {
    assert_eq!(
        unary_function("cbrt").unwrap_err(),
        SugarError::UnknownFunction("cbrt".into())
    );
    assert_eq!(
        binary_function("atan2").err(),
        Some(SugarError::UnknownFunction("atan2".into()))
    );
    assert!(unary_by_name("choose", &[1.0]).is_err());

    let message = unary_function("Exp").unwrap_err().to_string();
    assert!(message.contains("'Exp'"));
}

/// Test that a by-name binary adapter still validates recycling.
#[test]
fn test_lookup_binary_length_mismatch() {
    let err = binary_by_name("round", &[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(err, SugarError::LengthMismatch { lhs: 3, rhs: 2 });
}

// ============================================================================
// Composition Tests
// ============================================================================

/// Test a unary pipeline through the crate root re-exports.
#[test]
fn test_root_reexports() {
    let x = [0.0, 1.0];
    let y = mathsugar::lfactorial(mathsugar::floor(mathsugar::exp(&x)));

    assert_eq!(y.len(), 2);
    assert_eq!(y.elt(0), 0.0);
    // floor(e) = 2, log(2!) = ln 2
    assert_relative_eq!(y.elt(1), 2.0_f64.ln(), max_relative = 1e-14);
}

/// Test a binary adapter feeding another binary adapter.
#[test]
fn test_binary_pipeline() {
    let n = [10.0, 20.0, 30.0];
    let y = signif(lchoose(&n, 3.0).unwrap(), 3.0).unwrap().materialize();

    // choose(10, 3) = 120, choose(20, 3) = 1140, choose(30, 3) = 4060
    assert_eq!(y[0], 4.79);
    assert_eq!(y[1], 7.04);
    assert_eq!(y[2], 8.31);
}

/// Test that pipelines can be stored and evaluated later.
#[test]
fn test_deferred_evaluation() {
    let x = vec![1.0, 2.0, 3.0];
    let pipeline = round(sqrt(&x), 2.0).unwrap();

    assert_eq!(pipeline.len(), 3);
    assert_eq!(pipeline.materialize().as_slice(), &[1.0, 1.41, 1.73]);
    assert_relative_eq!(sum(&pipeline, false), 4.14, max_relative = 1e-15);
}
