//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks:
//! - The Gaussian kernel and Gaussian constants
//! - Bandwidth rules for kernel density estimation
//! - Support limits and reflection about them
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Gaussian kernel functions and constants.
pub mod kernel;

/// Bandwidth rules.
pub mod bandwidth;

/// Support limits and reflection.
pub mod boundary;
