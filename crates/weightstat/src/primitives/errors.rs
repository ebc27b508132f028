//! Error types for weighted statistics and density estimation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while computing
//! weighted moments, sigma clipping, or fitting and evaluating a reflected
//! KDE.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (indices, shapes, axes).
//! * **Deferred**: Builder misuse is recorded and reported by `build()`.
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, shape mismatches, negative weights.
//! 2. **Usage errors**: Sigma clipping on N-D data, bad axes, bad parameters.
//! 3. **Non-convergence**: Sigma clipping that never reaches a fixed point.
//!
//! ## Non-goals
//!
//! * Degenerate numeric results (zero total weight, a single point) are not
//!   errors. They propagate as NaN/Inf.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for weighted statistics and KDE operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Input array has no elements.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Weights cannot be broadcast against the values.
    MismatchedShapes {
        /// Shape of the values array.
        values: Vec<usize>,
        /// Shape of the weights array.
        weights: Vec<usize>,
    },

    /// A weight is negative.
    NegativeWeight {
        /// Flat (row-major) index of the offending weight.
        index: usize,
        /// The offending weight.
        value: f64,
    },

    /// Axis index is out of range for the array.
    InvalidAxis {
        /// The axis requested.
        axis: usize,
        /// Number of dimensions of the array.
        ndim: usize,
    },

    /// The same axis appears more than once in an axis list.
    DuplicateAxis(usize),

    /// Sigma clipping was requested on data that is not 1-D.
    ClippingRequiresOneDimensional {
        /// Number of dimensions of the input.
        ndim: usize,
    },

    /// Sigma clipping did not reach a fixed point within the iteration cap.
    NotConverged {
        /// Number of iterations performed.
        iterations: usize,
    },

    /// Number of points is below the minimum requirement.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Clip threshold must be positive and finite.
    InvalidSigma(f64),

    /// Clipping iteration cap must be at least 1.
    InvalidIterations(usize),

    /// Bandwidth factor must be positive and finite.
    InvalidBandwidth(f64),

    /// Moment order does not fit the exponent range.
    InvalidOrder(u32),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for StatsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input array is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::MismatchedShapes { values, weights } => {
                write!(
                    f,
                    "Shape mismatch: values have shape {values:?}, weights have shape {weights:?}"
                )
            }
            Self::NegativeWeight { index, value } => {
                write!(f, "Negative weight: weights[{index}]={value}")
            }
            Self::InvalidAxis { axis, ndim } => {
                write!(f, "Invalid axis: {axis} (array has {ndim} dimensions)")
            }
            Self::DuplicateAxis(axis) => write!(f, "Axis {axis} listed more than once"),
            Self::ClippingRequiresOneDimensional { ndim } => {
                write!(
                    f,
                    "Sigma clipping works only for 1-D input (got {ndim} dimensions)"
                )
            }
            Self::NotConverged { iterations } => {
                write!(
                    f,
                    "Sigma clipping did not converge within {iterations} iterations"
                )
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidSigma(sigma) => {
                write!(f, "Invalid sigma: {sigma} (must be > 0 and finite)")
            }
            Self::InvalidIterations(iter) => {
                write!(f, "Invalid max_iterations: {iter} (must be >= 1)")
            }
            Self::InvalidBandwidth(factor) => {
                write!(f, "Invalid bandwidth factor: {factor} (must be > 0 and finite)")
            }
            Self::InvalidOrder(order) => {
                write!(f, "Invalid moment order: {order} (must fit in i32)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for StatsError {}
