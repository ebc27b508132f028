//! Layer 3: Algorithms
//!
//! This layer implements the numerical core: the weighted average, central
//! moments and their derived statistics, iterative sigma clipping and the
//! unbounded Gaussian KDE. It is orchestrated by the engine layer.

// Weighted average with keep-dims semantics.
pub mod average;

// Weighted central moments and derived statistics.
pub mod moments;

// Iterative sigma clipping.
pub mod clipping;

// Unbounded Gaussian kernel density estimation.
pub mod density;
