//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions shared by both the
//! weighted-moment and density components: the error type, axis specifiers,
//! the input abstraction and unit-tagged quantities. It has zero internal
//! dependencies on higher layers.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Axis specifiers and keep-dims reductions.
pub mod axes;

/// Input abstraction over slices, vectors and arrays.
pub mod input;

/// Unit tags and quantities.
pub mod units;
