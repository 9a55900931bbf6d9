#![cfg(feature = "dev")]
//! Tests for the recycling and destination validator.
//!
//! The validator decides the result length of every binary adapter and
//! guards `materialize_into` against mis-sized buffers.
//!
//! ## Test Organization
//!
//! 1. **Recycling** - Compatible and incompatible operand lengths
//! 2. **Destination** - Buffer length checks

use mathsugar::internals::engine::validator::Validator;
use mathsugar::internals::primitives::errors::SugarError;

// ============================================================================
// Recycling Tests
// ============================================================================

/// Test that the result length is the longer operand length.
#[test]
fn test_validate_recycling_compatible() {
    assert_eq!(Validator::validate_recycling(4, 2), Ok(4));
    assert_eq!(Validator::validate_recycling(2, 4), Ok(4));
    assert_eq!(Validator::validate_recycling(5, 1), Ok(5));
    assert_eq!(Validator::validate_recycling(1, 1), Ok(1));
    assert_eq!(Validator::validate_recycling(6, 6), Ok(6));
}

/// Test that lengths which do not divide each other are rejected.
#[test]
fn test_validate_recycling_incompatible() {
    assert_eq!(
        Validator::validate_recycling(3, 2),
        Err(SugarError::LengthMismatch { lhs: 3, rhs: 2 })
    );
    assert_eq!(
        Validator::validate_recycling(4, 6),
        Err(SugarError::LengthMismatch { lhs: 4, rhs: 6 })
    );
}

/// Test the empty operand rules.
///
/// Verifies:
/// - Two empty operands give length 0
/// - Exactly one empty operand is an error
#[test]
fn test_validate_recycling_empty() {
    assert_eq!(Validator::validate_recycling(0, 0), Ok(0));
    assert_eq!(
        Validator::validate_recycling(0, 3),
        Err(SugarError::LengthMismatch { lhs: 0, rhs: 3 })
    );
    assert_eq!(
        Validator::validate_recycling(1, 0),
        Err(SugarError::LengthMismatch { lhs: 1, rhs: 0 })
    );
}

// ============================================================================
// Destination Tests
// ============================================================================

/// Test destination buffer validation.
#[test]
fn test_validate_destination() {
    assert_eq!(Validator::validate_destination(3, 3), Ok(()));
    assert_eq!(Validator::validate_destination(0, 0), Ok(()));
    assert_eq!(
        Validator::validate_destination(3, 2),
        Err(SugarError::DestinationLength {
            expected: 3,
            got: 2
        })
    );
}
