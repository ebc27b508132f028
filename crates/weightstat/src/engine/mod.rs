//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the algorithms: it validates inputs, conforms
//! weights, applies sigma clipping before a reduction, and wraps the
//! unbounded KDE with boundary reflection.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and parameter validation.
pub mod validator;

/// Weighted-moment execution.
pub mod moments;

/// Boundary-reflected KDE.
pub mod reflected;
