//! Unary elementwise adapter.
//!
//! ## Purpose
//!
//! [`Unary`] pairs a scalar function with a source vector and behaves as the
//! vector `f(source[0]), f(source[1]), ...` without computing or storing it.
//!
//! ## Design notes
//!
//! * **Lazy**: Construction does no work. `elt(i)` calls `f` once; calling it
//!   again calls `f` again, nothing is cached.
//! * **Missing short-circuit**: A missing source element yields `NA` and `f`
//!   is not called.
//! * **Structural missingness**: `is_missing(i)` asks the source, so checking
//!   and then reading an element costs a single evaluation of `f`, at any
//!   nesting depth.
//!
//! ## Invariants
//!
//! * `len() == source.len()`.
//! * `is_missing(i) == source.is_missing(i)`.
//! * If the source is not missing at `i`, `elt(i)` is exactly `f(source.elt(i))`,
//!   including NaN and infinite results.

// Internal dependencies
use crate::primitives::missing::NA_REAL;
use crate::primitives::vector::SugarVector;

/// Lazy `f(x)` over every element of a source vector.
#[derive(Debug, Clone, Copy)]
pub struct Unary<V, F> {
    source: V,
    f: F,
}

impl<V, F> Unary<V, F>
where
    V: SugarVector,
    F: Fn(f64) -> f64,
{
    /// Wrap `source` with the scalar function `f`.
    #[inline]
    pub fn new(source: V, f: F) -> Self {
        Self { source, f }
    }

    /// The wrapped source.
    #[inline]
    pub fn source(&self) -> &V {
        &self.source
    }

    /// The wrapped scalar function.
    #[inline]
    pub fn function(&self) -> &F {
        &self.f
    }
}

impl<V, F> SugarVector for Unary<V, F>
where
    V: SugarVector,
    F: Fn(f64) -> f64,
{
    #[inline]
    fn len(&self) -> usize {
        self.source.len()
    }

    #[inline]
    fn elt(&self, i: usize) -> f64 {
        if self.source.is_missing(i) {
            return NA_REAL;
        }
        (self.f)(self.source.elt(i))
    }

    #[inline]
    fn is_missing(&self, i: usize) -> bool {
        self.source.is_missing(i)
    }
}
