//! Recycling validation for binary operations.
//!
//! ## Purpose
//!
//! R recycles the shorter operand of a binary operation. This module decides
//! whether two operand lengths can be recycled against each other and what
//! the result length is.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Called from adapter constructors, so a bad pair of
//!   lengths is reported before any element is read.
//! * **Strict**: R itself only warns when the longer length is not a multiple
//!   of the shorter one. Here it is an error.
//!
//! ## Invariants
//!
//! * On success the result length is `max(lhs, rhs)`, and both lengths divide it.
//! * Two empty operands give an empty result. One empty operand against a
//!   non-empty one is an error.

// Internal dependencies
use crate::primitives::errors::SugarError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for operand lengths.
pub struct Validator;

impl Validator {
    /// Validate that `lhs` and `rhs` can be recycled and return the result length.
    pub fn validate_recycling(lhs: usize, rhs: usize) -> Result<usize, SugarError> {
        let (short, long) = if lhs <= rhs { (lhs, rhs) } else { (rhs, lhs) };

        // Check 1: both empty is a valid empty result
        if long == 0 {
            return Ok(0);
        }

        // Check 2: the shorter operand must be non-empty and divide the longer one
        if short == 0 || !long.is_multiple_of(short) {
            return Err(SugarError::LengthMismatch { lhs, rhs });
        }

        Ok(long)
    }

    /// Validate that a destination slice matches the length of the source.
    pub fn validate_destination(expected: usize, got: usize) -> Result<(), SugarError> {
        if expected != got {
            return Err(SugarError::DestinationLength { expected, got });
        }
        Ok(())
    }
}
