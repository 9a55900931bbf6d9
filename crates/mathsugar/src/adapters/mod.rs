//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer provides the lazy elementwise adapters that every sugar
//! function returns:
//! - **Unary**: `f(x[i])` over one operand.
//! - **Binary**: `f(a[i mod len(a)], b[i mod len(b)])` over two recycled operands.
//!
//! Both are [`SugarVector`]s themselves, so they nest, and both evaluate their
//! function only when an element is pulled.
//!
//! # Architecture
//!
//! ```text
//! API (sugar catalog)
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```
//!
//! [`SugarVector`]: crate::primitives::vector::SugarVector

/// One-operand adapter.
pub mod unary;

/// Two-operand adapter with recycling.
pub mod binary;
