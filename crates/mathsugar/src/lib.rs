//! # mathsugar: lazy elementwise math with R semantics
//!
//! Vectorized ("sugar") versions of R's scalar math functions that work
//! directly on vector-like values. A sugar call such as `sqrt(&v)` does not
//! compute anything: it returns a lightweight adapter that borrows `v` and
//! evaluates the scalar function only when an element is pulled. Results are
//! produced when the adapter is materialized, reduced, or composed into
//! another adapter.
//!
//! The semantics follow R's built-ins:
//!
//! - **Missing values**: `NA` (R's `NA_real_` bit pattern) short-circuits; the
//!   scalar function is never called on it. Ordinary `NaN` is a value, not a
//!   missing marker, and flows through the function.
//! - **Recycling**: binary operations repeat the shorter operand. Lengths that
//!   are not multiples of each other are rejected when the adapter is built.
//! - **Special functions**: `gamma`, `choose`, `beta`, `psigamma`, `round`,
//!   `signif` and friends follow R's `nmath` conventions at edge cases.
//!
//! ## Quick Start
//!
//! ```rust
//! use mathsugar::prelude::*;
//!
//! let x = vec![1.0, 4.0, NA_REAL, 16.0];
//!
//! // Nothing is evaluated yet.
//! let roots = sqrt(&x);
//! assert_eq!(roots.len(), 4);
//!
//! // Pull every element once.
//! let out = roots.materialize();
//! assert_eq!(out[0], 1.0);
//! assert!(is_na(out[2]));
//! # Result::<(), SugarError>::Ok(())
//! ```
//!
//! ### Recycling
//!
//! ```rust
//! use mathsugar::prelude::*;
//!
//! let n = vec![4.0, 5.0, 6.0, 7.0];
//! let k = vec![1.0, 2.0];
//!
//! // k is recycled: choose(4,1), choose(5,2), choose(6,1), choose(7,2)
//! let out = choose(&n, &k)?.materialize();
//! assert_eq!(out.as_slice(), &[4.0, 10.0, 6.0, 21.0]);
//!
//! // Scalars are length-1 operands.
//! let rounded = round(&[2.5, 0.125, 1234.5678], 2.0)?.materialize();
//! assert_eq!(rounded.as_slice(), &[2.5, 0.12, 1234.57]);
//!
//! // Incompatible lengths fail at construction.
//! assert!(matches!(
//!     beta(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
//!     Err(SugarError::LengthMismatch { lhs: 3, rhs: 2 })
//! ));
//! # Result::<(), SugarError>::Ok(())
//! ```
//!
//! ### Composition
//!
//! Adapters are vector-like themselves, so they compose without
//! intermediate allocations:
//!
//! ```rust
//! use mathsugar::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0];
//! let y = lfactorial(floor(exp(&x)));
//! println!("{}", y.materialize());
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to drop the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! mathsugar = { version = "0.3", default-features = false }
//! ```
//!
//! Adapters never allocate. Only [`Materialize::materialize`] and the name
//! lookup error path need `alloc`.
//!
//! ## Safety of Borrowed Operands
//!
//! Adapters hold their operands by value, and the operands of sugar calls are
//! normally references (`&v`). The borrow checker therefore guarantees that
//! the referenced data outlives every adapter built over it. Adapters are
//! `Send`/`Sync` exactly when their operands and functions are; a
//! user-supplied closure that is not reentrant must not be shared.
//!
//! [`Materialize::materialize`]: crate::prelude::Materialize::materialize

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - missing values, the vector contract, errors.
mod primitives;

// Layer 2: Math - the scalar math runtime.
mod math;

// Layer 3: Engine - recycling validation, materialization, reductions.
mod engine;

// Layer 4: Adapters - lazy unary and binary elementwise adapters.
mod adapters;

// Named sugar functions and the static function tables.
mod api;

pub use crate::api::*;

// Standard mathsugar prelude.
pub mod prelude {
    pub use crate::api::{
        BINARY_FUNCTIONS, Binary, Elements, Materialize, Materialized, NA_REAL, ScalarFn1,
        ScalarFn2, SugarError, SugarVector, UNARY_FUNCTIONS, Unary, abs, acos, asin, atan,
        beta, binary_by_name, binary_function, ceil, ceiling, choose, cos, cosh, digamma, exp,
        expm1, factorial, floor, gamma, is_na, lbeta, lchoose, lfactorial, lgamma, log, log1p,
        log10, mean, pentagamma, psigamma, round, signif, sin, sinh, sqrt, sum, tan, tanh,
        tetragamma, trigamma, trunc, unary_by_name, unary_function,
    };
}

// Scalar math runtime.
//
// The same functions the sugar catalog forwards to, usable on plain `f64`.
pub mod scalar {
    pub use crate::math::combinatorics::{beta, choose, lbeta, lchoose};
    pub use crate::math::elementary::*;
    pub use crate::math::gamma::{factorial, gammafn, lfactorial, lgammafn, lgammafn_sign};
    pub use crate::math::polygamma::{digamma, pentagamma, psigamma, tetragamma, trigamma};
    pub use crate::math::rounding::{fprec, fround, ftrunc};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
