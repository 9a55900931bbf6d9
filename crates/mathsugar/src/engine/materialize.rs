//! Materialization of lazy vectors into owned storage.
//!
//! ## Purpose
//!
//! This module turns any [`SugarVector`] (an adapter chain, usually) into
//! concrete values: either a fresh [`Materialized`] buffer or a caller-owned
//! slice.
//!
//! ## Design notes
//!
//! * **Single pass**: Every index is pulled exactly once, in increasing order.
//! * **All or nothing**: `materialize_into` checks the destination length
//!   before it writes anything.
//! * **Re-usable**: `Materialized` is itself a `SugarVector`, so a result can
//!   be fed back into further sugar without copying.
//!
//! ## Invariants
//!
//! * `materialize().len() == source.len()`.
//! * Materializing the same source twice gives bit-identical values as long as
//!   the scalar functions involved are deterministic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use core::ops::Deref;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::SugarError;
use crate::primitives::missing::is_na;
use crate::primitives::vector::SugarVector;

/// Values printed per line by the `Display` implementation.
const VALUES_PER_LINE: usize = 8;

// ============================================================================
// Materialize Trait
// ============================================================================

/// Consumers that pull every element of a [`SugarVector`].
///
/// Implemented for every `SugarVector`.
pub trait Materialize: SugarVector {
    /// Evaluate every element into a new buffer.
    fn materialize(&self) -> Materialized {
        Materialized::from(self.values().collect::<Vec<f64>>())
    }

    /// Evaluate every element into `dest`.
    ///
    /// Fails with [`SugarError::DestinationLength`] without writing anything
    /// if `dest.len() != self.len()`.
    fn materialize_into(&self, dest: &mut [f64]) -> core::result::Result<(), SugarError> {
        Validator::validate_destination(self.len(), dest.len())?;
        for (slot, value) in dest.iter_mut().zip(self.values()) {
            *slot = value;
        }
        Ok(())
    }
}

impl<V: SugarVector + ?Sized> Materialize for V {}

// ============================================================================
// Materialized Result
// ============================================================================

/// Owned result of materializing a lazy vector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Materialized {
    values: Vec<f64>,
}

impl Materialized {
    /// The values as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Consume the result and return the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Number of `NA` elements.
    pub fn count_missing(&self) -> usize {
        self.values.iter().filter(|v| is_na(**v)).count()
    }

    /// Whether any element is `NA`.
    pub fn has_missing(&self) -> bool {
        self.values.iter().any(|v| is_na(*v))
    }
}

impl From<Vec<f64>> for Materialized {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl From<Materialized> for Vec<f64> {
    fn from(result: Materialized) -> Self {
        result.values
    }
}

impl Deref for Materialized {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl SugarVector for Materialized {
    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn elt(&self, i: usize) -> f64 {
        self.values[i]
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

/// Number of decimal digits in `n`.
fn decimal_width(mut n: usize) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

/// Write one value, spelling NA, NaN and the infinities as R does.
fn write_value(f: &mut Formatter<'_>, value: f64) -> Result {
    if is_na(value) {
        write!(f, "NA")
    } else if value.is_nan() {
        write!(f, "NaN")
    } else if value == f64::INFINITY {
        write!(f, "Inf")
    } else if value == f64::NEG_INFINITY {
        write!(f, "-Inf")
    } else {
        write!(f, "{value}")
    }
}

impl Display for Materialized {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.values.is_empty() {
            return writeln!(f, "numeric(0)");
        }

        // "[i]" prefixes are right-aligned on the widest one
        let last_start = (self.values.len() - 1) / VALUES_PER_LINE * VALUES_PER_LINE + 1;
        let width = decimal_width(last_start);

        for (line, chunk) in self.values.chunks(VALUES_PER_LINE).enumerate() {
            let start = line * VALUES_PER_LINE + 1;
            let pad = width - decimal_width(start);
            write!(f, "{:pad$}[{start}]", "")?;
            for &value in chunk {
                write!(f, " ")?;
                write_value(f, value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
