//! Error types for sugar operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that sugar operations can report:
//! operand lengths that cannot be recycled against each other, destination
//! buffers of the wrong size, and unknown catalog names.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending lengths or name.
//! * **Eager**: Recycling errors are raised when an adapter is built, never on
//!   first read.
//! * **No-std**: Supports `no_std` environments by using `alloc` for names.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Recycling**: The shorter operand must divide the longer one.
//! 2. **Materialization**: Writing into a caller slice requires an exact length match.
//! 3. **Lookup**: Runtime selection of a catalog function by name.
//!
//! ## Non-goals
//!
//! * Math-domain failures are not errors here. They come back as `NaN` or
//!   `±Inf` values from the scalar function and pass through untouched.
//! * A missing (`NA`) element is not an error either.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sugar operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SugarError {
    /// Operand lengths are not in an integer-multiple relationship, so
    /// recycling is ill-defined.
    LengthMismatch {
        /// Length of the left operand.
        lhs: usize,
        /// Length of the right operand.
        rhs: usize,
    },

    /// A destination slice does not have the adapter's length.
    DestinationLength {
        /// Length of the adapter being materialized.
        expected: usize,
        /// Length of the destination slice.
        got: usize,
    },

    /// No catalog function is registered under this name.
    UnknownFunction(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SugarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::LengthMismatch { lhs, rhs } => {
                write!(
                    f,
                    "Length mismatch: lhs has {lhs} elements, rhs has {rhs} (neither is a multiple of the other)"
                )
            }
            Self::DestinationLength { expected, got } => {
                write!(
                    f,
                    "Destination length mismatch: expected {expected} elements, got {got}"
                )
            }
            Self::UnknownFunction(name) => write!(f, "Unknown sugar function: '{name}'"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SugarError {}
