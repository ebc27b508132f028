//! Weighted average with keep-dims semantics.
//!
//! ## Purpose
//!
//! The weighted arithmetic mean `sum(w*v) / sum(w)` is the primitive every
//! other statistic in this crate is built from.
//!
//! ## Invariants
//!
//! * Inputs are never mutated.
//! * Reduced axes are kept with length 1; `None` yields a 0-d array.
//! * A slice whose weights sum to zero yields NaN (0/0), not an error.
//!
//! ## Non-goals
//!
//! * This module does not validate or broadcast weights; `values` and
//!   `weights` must already share a shape.

// External dependencies
use ndarray::{ArrayD, ArrayViewD};
use num_traits::Float;

// Internal dependencies
use crate::primitives::axes::sum_keepdims;

/// Weighted arithmetic mean of `values` over `axes`.
pub fn weighted_average<T: Float>(
    values: &ArrayViewD<'_, T>,
    weights: &ArrayViewD<'_, T>,
    axes: Option<&[usize]>,
) -> ArrayD<T> {
    let weighted = values * weights;
    let numerator = sum_keepdims(&weighted.view(), axes);
    let denominator = sum_keepdims(weights, axes);
    numerator / denominator
}
