//! Sugar catalog: named vectorized math functions.
//!
//! ## Purpose
//!
//! This module is the user-facing surface. Each catalog entry is a named
//! sugar function (`exp`, `choose`, `round`, ...) that builds a lazy adapter
//! over its operands, and each entry is also listed in a static
//! `{name → function}` table for selection at runtime.
//!
//! ## Design notes
//!
//! * **One list, two outputs**: A `macro_rules!` expands every entry into both
//!   the sugar function and its table row, so the two cannot drift apart.
//! * **Function pointers**: Catalog adapters store `fn` pointers
//!   ([`ScalarFn1`], [`ScalarFn2`]), so adapters of different entries share
//!   one type and can be chosen at runtime.
//! * **Operands**: Pass vectors by reference (`&v`), scalars by value
//!   (`2.0`), and adapters by value or by reference.
//!
//! ## Key concepts
//!
//! * **Unary catalog**: elementary functions, the gamma family, factorials, `trunc`.
//! * **Binary catalog**: `choose`, `lchoose`, `beta`, `lbeta`, `psigamma`,
//!   `round`, `signif`. Binary constructors validate recycling and return a
//!   `Result`.

// Internal dependencies
use crate::math::{combinatorics, elementary, gamma as gamma_fns, polygamma, rounding};

// Publicly re-exported types
pub use crate::adapters::binary::Binary;
pub use crate::adapters::unary::Unary;
pub use crate::engine::materialize::{Materialize, Materialized};
pub use crate::engine::reduce::{mean, sum};
pub use crate::primitives::errors::SugarError;
pub use crate::primitives::missing::{NA_REAL, is_na};
pub use crate::primitives::vector::{Elements, SugarVector};

/// Scalar function of one argument, as stored by catalog adapters.
pub type ScalarFn1 = fn(f64) -> f64;

/// Scalar function of two arguments, as stored by catalog adapters.
pub type ScalarFn2 = fn(f64, f64) -> f64;

// ============================================================================
// Catalog Macros
// ============================================================================

macro_rules! vectorized_math_1 {
    ($( $(#[$doc:meta])* $name:ident => $func:path ),* $(,)?) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<V: SugarVector>(x: V) -> Unary<V, ScalarFn1> {
                Unary::new(x, $func as ScalarFn1)
            }
        )*

        /// The unary catalog as a static `(name, function)` table.
        pub static UNARY_FUNCTIONS: &[(&str, ScalarFn1)] = &[
            $( (stringify!($name), $func as ScalarFn1), )*
        ];
    };
}

macro_rules! sugar_block_2 {
    ($( $(#[$doc:meta])* $name:ident => $func:path ),* $(,)?) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<A: SugarVector, B: SugarVector>(
                lhs: A,
                rhs: B,
            ) -> Result<Binary<A, B, ScalarFn2>, SugarError> {
                Binary::new(lhs, rhs, $func as ScalarFn2)
            }
        )*

        /// The binary catalog as a static `(name, function)` table.
        pub static BINARY_FUNCTIONS: &[(&str, ScalarFn2)] = &[
            $( (stringify!($name), $func as ScalarFn2), )*
        ];
    };
}

// ============================================================================
// Unary Catalog
// ============================================================================

vectorized_math_1! {
    /// Elementwise e^x.
    exp => elementary::exp,
    /// Elementwise inverse cosine.
    acos => elementary::acos,
    /// Elementwise inverse sine.
    asin => elementary::asin,
    /// Elementwise inverse tangent.
    atan => elementary::atan,
    /// Elementwise ceiling.
    ceil => elementary::ceil,
    /// Elementwise ceiling (R spelling).
    ceiling => elementary::ceil,
    /// Elementwise cosine.
    cos => elementary::cos,
    /// Elementwise hyperbolic cosine.
    cosh => elementary::cosh,
    /// Elementwise floor.
    floor => elementary::floor,
    /// Elementwise natural logarithm.
    log => elementary::log,
    /// Elementwise base-10 logarithm.
    log10 => elementary::log10,
    /// Elementwise square root.
    sqrt => elementary::sqrt,
    /// Elementwise sine.
    sin => elementary::sin,
    /// Elementwise hyperbolic sine.
    sinh => elementary::sinh,
    /// Elementwise tangent.
    tan => elementary::tan,
    /// Elementwise hyperbolic tangent.
    tanh => elementary::tanh,
    /// Elementwise absolute value.
    abs => elementary::fabs,
    /// Elementwise Γ(x).
    gamma => gamma_fns::gammafn,
    /// Elementwise log|Γ(x)|.
    lgamma => gamma_fns::lgammafn,
    /// Elementwise ψ(x).
    digamma => polygamma::digamma,
    /// Elementwise ψ'(x).
    trigamma => polygamma::trigamma,
    /// Elementwise ψ''(x).
    tetragamma => polygamma::tetragamma,
    /// Elementwise ψ'''(x).
    pentagamma => polygamma::pentagamma,
    /// Elementwise e^x - 1.
    expm1 => elementary::expm1,
    /// Elementwise ln(1 + x).
    log1p => elementary::log1p,
    /// Elementwise Γ(x + 1).
    factorial => gamma_fns::factorial,
    /// Elementwise log Γ(x + 1).
    lfactorial => gamma_fns::lfactorial,
    /// Elementwise truncation toward zero.
    trunc => rounding::ftrunc,
}

// ============================================================================
// Binary Catalog
// ============================================================================

sugar_block_2! {
    /// Elementwise binomial coefficient `choose(n, k)`.
    choose => combinatorics::choose,
    /// Elementwise `log|choose(n, k)|`.
    lchoose => combinatorics::lchoose,
    /// Elementwise beta function `B(a, b)`.
    beta => combinatorics::beta,
    /// Elementwise `log B(a, b)`.
    lbeta => combinatorics::lbeta,
    /// Elementwise polygamma `psigamma(x, deriv)`.
    psigamma => polygamma::psigamma,
    /// Elementwise `round(x, digits)`, ties to even at the representable boundary.
    round => rounding::fround,
    /// Elementwise `signif(x, digits)`.
    signif => rounding::fprec,
}

// ============================================================================
// Runtime Lookup
// ============================================================================

fn lookup<F: Copy>(table: &[(&str, F)], name: &str) -> Result<F, SugarError> {
    table
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, f)| *f)
        .ok_or_else(|| SugarError::UnknownFunction(name.into()))
}

/// Look up a unary catalog function by name.
pub fn unary_function(name: &str) -> Result<ScalarFn1, SugarError> {
    lookup(UNARY_FUNCTIONS, name)
}

/// Look up a binary catalog function by name.
pub fn binary_function(name: &str) -> Result<ScalarFn2, SugarError> {
    lookup(BINARY_FUNCTIONS, name)
}

/// Build the unary adapter for the catalog entry `name`.
pub fn unary_by_name<V: SugarVector>(name: &str, x: V) -> Result<Unary<V, ScalarFn1>, SugarError> {
    Ok(Unary::new(x, unary_function(name)?))
}

/// Build the binary adapter for the catalog entry `name`.
pub fn binary_by_name<A: SugarVector, B: SugarVector>(
    name: &str,
    lhs: A,
    rhs: B,
) -> Result<Binary<A, B, ScalarFn2>, SugarError> {
    Binary::new(lhs, rhs, binary_function(name)?)
}
