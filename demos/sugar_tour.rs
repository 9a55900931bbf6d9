//! Vectorized Math Sugar Tour
//!
//! This example walks through the sugar catalog:
//! - Unary sugar over vectors with missing values
//! - Binary sugar with recycling and scalar operands
//! - Composition of lazy pipelines
//! - Length errors, reductions and lookup by name
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use mathsugar::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), SugarError> {
    println!("{}", "=".repeat(80));
    println!("Vectorized Math Sugar - Tour");
    println!("{}", "=".repeat(80));
    println!();

    example_1_unary_sugar();
    example_2_recycling()?;
    example_3_composition()?;
    example_4_length_errors();
    example_5_reductions();
    example_6_lookup_by_name()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Unary Sugar
/// Missing values pass through, NaN from the function is not missing
fn example_1_unary_sugar() {
    println!("Example 1: Unary Sugar");
    println!("{}", "-".repeat(80));

    let x = vec![1.0, NA_REAL, 4.0, -1.0];

    println!("sqrt(x):");
    print!("{}", sqrt(&x).materialize());
    // [1] 1 NA 2 NaN

    println!("trunc vs floor of -3.7: {} {}", trunc(-3.7).elt(0), floor(-3.7).elt(0));
    // trunc vs floor of -3.7: -3 -4

    println!("factorial(0:5):");
    print!("{}", factorial(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).materialize());
    // [1] 1 1 2 6 24 120
    println!();
}

#[cfg(feature = "std")]
/// Example 2: Recycling
/// The shorter operand is reused cyclically; scalars recycle everywhere
fn example_2_recycling() -> Result<(), SugarError> {
    println!("Example 2: Recycling");
    println!("{}", "-".repeat(80));

    let n = vec![4.0, 5.0, 6.0, 7.0];
    let k = vec![1.0, 2.0];

    println!("choose(n, k):");
    print!("{}", choose(&n, &k)?.materialize());
    // [1] 4 10 6 21

    println!("round(x, 2):");
    print!("{}", round(&[2.345, 0.125, 0.15, 1234.5678], 2.0)?.materialize());
    // [1] 2.35 0.12 0.15 1234.57

    println!("psigamma(1, 0:3):");
    print!("{}", psigamma(1.0, &[0.0, 1.0, 2.0, 3.0])?.materialize());
    // [1] -0.5772156649015329 1.6449340668482264 -2.404113806319188 6.493939402266829
    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Composition
/// Adapters nest without intermediate buffers
fn example_3_composition() -> Result<(), SugarError> {
    println!("Example 3: Composition");
    println!("{}", "-".repeat(80));

    let x = vec![0.5, 1.0, 1.5, 2.0];
    let pipeline = signif(lfactorial(floor(exp(&x))), 4.0)?;

    println!("signif(lfactorial(floor(exp(x))), 4):");
    print!("{}", pipeline.materialize());
    // [1] 0 0.6931 3.178 8.525
    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Length Errors
/// Lengths must divide each other
fn example_4_length_errors() {
    println!("Example 4: Length Errors");
    println!("{}", "-".repeat(80));

    match beta(&[1.0, 2.0, 3.0], &[1.0, 2.0]) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("beta(1:3, 1:2): {err}"),
    }
    // beta(1:3, 1:2): Length mismatch: lhs has 3 elements, rhs has 2 (neither is a multiple of the other)
    println!();
}

#[cfg(feature = "std")]
/// Example 5: Reductions
/// Sums and means pull the pipeline without materializing it
fn example_5_reductions() {
    println!("Example 5: Reductions");
    println!("{}", "-".repeat(80));

    let x = vec![1.0, 4.0, NA_REAL, 16.0];

    println!("sum(sqrt(x))             = {}", sum(sqrt(&x), false));
    println!("sum(sqrt(x), na.rm=TRUE) = {}", sum(sqrt(&x), true));
    println!("mean(sqrt(x), na.rm=TRUE) = {}", mean(sqrt(&x), true));
    // sum(sqrt(x))             = NaN
    // sum(sqrt(x), na.rm=TRUE) = 7
    // mean(sqrt(x), na.rm=TRUE) = 2.3333333333333335
    println!();
}

#[cfg(feature = "std")]
/// Example 6: Lookup by Name
/// Select catalog entries at runtime
fn example_6_lookup_by_name() -> Result<(), SugarError> {
    println!("Example 6: Lookup by Name");
    println!("{}", "-".repeat(80));

    let x = vec![0.25, 0.5, 1.0];
    for name in ["gamma", "digamma", "lgamma"] {
        println!("{name}(x):");
        print!("{}", unary_by_name(name, &x)?.materialize());
    }

    if let Err(err) = unary_function("cbrt") {
        println!("{err}");
    }
    // Unknown sugar function: 'cbrt'
    Ok(())
}
