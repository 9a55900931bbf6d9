//! Binary elementwise adapter with recycling.
//!
//! ## Purpose
//!
//! [`Binary`] pairs a two-argument scalar function with a left and a right
//! operand and behaves as the vector `f(lhs[i mod la], rhs[i mod lb])`.
//!
//! ## Design notes
//!
//! * **Recycling**: The shorter operand repeats. Its length must divide the
//!   longer one; this is checked once, in [`Binary::new`].
//! * **Argument order**: `f` always receives the left element first.
//! * **Lazy**: Same as the unary adapter: no work at construction, one call
//!   of `f` per pulled element, no caching.
//! * **Missing short-circuit**: If either contributing element is missing the
//!   result is `NA` and `f` is not called.
//!
//! ## Invariants
//!
//! * `len() == max(lhs.len(), rhs.len())`, and both operand lengths divide it.
//! * `is_missing(i) == lhs.is_missing(i % la) || rhs.is_missing(i % lb)`.

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::SugarError;
use crate::primitives::missing::NA_REAL;
use crate::primitives::vector::SugarVector;

/// Lazy `f(a, b)` over two recycled operands.
#[derive(Debug, Clone, Copy)]
pub struct Binary<A, B, F> {
    lhs: A,
    rhs: B,
    f: F,
    lhs_len: usize,
    rhs_len: usize,
    len: usize,
}

impl<A, B, F> Binary<A, B, F>
where
    A: SugarVector,
    B: SugarVector,
    F: Fn(f64, f64) -> f64,
{
    /// Wrap `lhs` and `rhs` with the scalar function `f`.
    ///
    /// Fails with [`SugarError::LengthMismatch`] if the operand lengths cannot
    /// be recycled against each other.
    pub fn new(lhs: A, rhs: B, f: F) -> Result<Self, SugarError> {
        let lhs_len = lhs.len();
        let rhs_len = rhs.len();
        let len = Validator::validate_recycling(lhs_len, rhs_len)?;
        Ok(Self {
            lhs,
            rhs,
            f,
            lhs_len,
            rhs_len,
            len,
        })
    }

    /// The left operand.
    #[inline]
    pub fn lhs(&self) -> &A {
        &self.lhs
    }

    /// The right operand.
    #[inline]
    pub fn rhs(&self) -> &B {
        &self.rhs
    }

    /// The wrapped scalar function.
    #[inline]
    pub fn function(&self) -> &F {
        &self.f
    }

    /// Operand indices that contribute to element `i`.
    #[inline]
    fn operand_indices(&self, i: usize) -> (usize, usize) {
        debug_assert!(i < self.len, "index {i} out of range for length {}", self.len);
        (i % self.lhs_len, i % self.rhs_len)
    }
}

impl<A, B, F> SugarVector for Binary<A, B, F>
where
    A: SugarVector,
    B: SugarVector,
    F: Fn(f64, f64) -> f64,
{
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn elt(&self, i: usize) -> f64 {
        let (ia, ib) = self.operand_indices(i);
        if self.lhs.is_missing(ia) || self.rhs.is_missing(ib) {
            return NA_REAL;
        }
        (self.f)(self.lhs.elt(ia), self.rhs.elt(ib))
    }

    #[inline]
    fn is_missing(&self, i: usize) -> bool {
        let (ia, ib) = self.operand_indices(i);
        self.lhs.is_missing(ia) || self.rhs.is_missing(ib)
    }
}
