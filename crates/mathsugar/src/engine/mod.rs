//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer drives adapters: it validates recycling before an adapter is
//! built, and it consumes adapters by materializing them into owned storage
//! or reducing them to a scalar.
//!
//! # Architecture
//!
//! ```text
//! API (sugar catalog)
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Recycling validation.
pub mod validator;

/// Materialization into owned storage.
pub mod materialize;

/// Reductions to a scalar.
pub mod reduce;
