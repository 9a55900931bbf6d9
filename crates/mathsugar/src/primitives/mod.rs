//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions every other layer builds
//! on: the missing-value sentinel, the vector-like capability contract, and
//! the crate error type. It has zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// The `NA` sentinel.
pub mod missing;

/// The vector-like capability contract.
pub mod vector;
