//! The vector-like capability contract.
//!
//! ## Purpose
//!
//! [`SugarVector`] is the narrow interface every sugar operand and every lazy
//! adapter satisfies: a length, random access to an element, and a missing
//! query. Anything implementing it can be fed to a sugar function, composed
//! into another adapter, materialized, or reduced.
//!
//! ## Design notes
//!
//! * **Read-only**: The contract has no mutation; operands are never written.
//! * **Borrowing**: `&V` is a `SugarVector` whenever `V` is, so sugar calls
//!   take `&v` and adapters store the reference.
//! * **Scalars**: A bare `f64` is a length-1 vector, which is what recycling
//!   needs for the scalar side of a binary operation.
//! * **Structural missingness**: Implementations may answer `is_missing`
//!   without computing the element. Adapters do, so a consumer that asks
//!   `is_missing(i)` and then `elt(i)` evaluates the wrapped function once.
//!   The flip side: an adapter whose function itself returns `NA` reports
//!   `is_missing(i) == false` for that element. Consumers that need the
//!   value anyway (materialization, reductions) check the pulled value too.
//!
//! ## Invariants
//!
//! * `elt(i)` and `is_missing(i)` are only defined for `i < len()`.
//! * `is_missing(i)` implies `is_na(elt(i))`.
//! * Reading an element has no observable side effect on the vector.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::iter::FusedIterator;

// Internal dependencies
use crate::primitives::missing::is_na;

// ============================================================================
// Capability Trait
// ============================================================================

/// An immutable, size-queryable, randomly indexable sequence of `f64`.
pub trait SugarVector {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at index `i`.
    ///
    /// # Panics
    ///
    /// May panic if `i >= self.len()`.
    fn elt(&self, i: usize) -> f64;

    /// Whether the element at `i` is `NA`.
    #[inline]
    fn is_missing(&self, i: usize) -> bool {
        is_na(self.elt(i))
    }

    /// Whether the sequence has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the elements in index order, pulling each one once.
    #[inline]
    fn values(&self) -> Elements<'_, Self> {
        Elements::new(self)
    }
}

// ============================================================================
// Host Implementations
// ============================================================================

impl SugarVector for [f64] {
    #[inline]
    fn len(&self) -> usize {
        <[f64]>::len(self)
    }

    #[inline]
    fn elt(&self, i: usize) -> f64 {
        self[i]
    }
}

impl SugarVector for Vec<f64> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn elt(&self, i: usize) -> f64 {
        self[i]
    }
}

impl<const N: usize> SugarVector for [f64; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn elt(&self, i: usize) -> f64 {
        self[i]
    }
}

/// A scalar is a length-1 vector.
impl SugarVector for f64 {
    #[inline]
    fn len(&self) -> usize {
        1
    }

    #[inline]
    fn elt(&self, i: usize) -> f64 {
        debug_assert_eq!(i, 0, "scalar operand indexed at {i}");
        *self
    }
}

impl<V: SugarVector + ?Sized> SugarVector for &V {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn elt(&self, i: usize) -> f64 {
        (**self).elt(i)
    }

    #[inline]
    fn is_missing(&self, i: usize) -> bool {
        (**self).is_missing(i)
    }
}

// ============================================================================
// Element Iterator
// ============================================================================

/// Iterator over the elements of a [`SugarVector`].
#[derive(Debug, Clone)]
pub struct Elements<'a, V: ?Sized> {
    vector: &'a V,
    front: usize,
    back: usize,
}

impl<'a, V: SugarVector + ?Sized> Elements<'a, V> {
    /// Create an iterator over the whole vector.
    #[inline]
    pub fn new(vector: &'a V) -> Self {
        Self {
            vector,
            front: 0,
            back: vector.len(),
        }
    }
}

impl<V: SugarVector + ?Sized> Iterator for Elements<'_, V> {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        let value = self.vector.elt(self.front);
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<V: SugarVector + ?Sized> DoubleEndedIterator for Elements<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.vector.elt(self.back))
    }
}

impl<V: SugarVector + ?Sized> ExactSizeIterator for Elements<'_, V> {}

impl<V: SugarVector + ?Sized> FusedIterator for Elements<'_, V> {}
