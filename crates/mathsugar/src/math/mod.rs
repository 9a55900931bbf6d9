//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer is the scalar math runtime the sugar catalog forwards to:
//! - Elementary functions (IEEE 754 semantics)
//! - The gamma family and its logarithm
//! - Polygamma functions (digamma, trigamma, ...)
//! - Combinatorics (binomial coefficients, the beta function)
//! - Decimal rounding (`round`, `signif`, `trunc`)
//!
//! Every function maps `f64` (or a pair of `f64`) to `f64`, never panics, and
//! reports domain errors as `NaN` the way R's `nmath` library does. None of
//! them knows about missing values; the adapters short-circuit those.
//!
//! # Architecture
//!
//! ```text
//! API (sugar catalog)
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Elementary functions.
pub mod elementary;

/// Gamma, log-gamma and factorials.
pub mod gamma;

/// Polygamma functions.
pub mod polygamma;

/// Binomial coefficients and the beta function.
pub mod combinatorics;

/// Decimal rounding.
pub mod rounding;
