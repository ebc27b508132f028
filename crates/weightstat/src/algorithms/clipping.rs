//! Iterative sigma clipping for 1-D weighted data.
//!
//! ## Purpose
//!
//! This module rejects points lying more than `sigma` weighted standard
//! deviations from the weighted mean, recomputing the mean and deviation on
//! the retained points until the retained set stops changing.
//!
//! ## Design notes
//!
//! * **Full re-evaluation**: Each pass tests every point, not only the
//!   previously retained ones, so rejected points can re-enter.
//! * **Bounded**: The loop stops after `max_iterations` passes and reports
//!   [`StatsError::NotConverged`] instead of spinning.
//! * **Exact fixed point**: Masks are compared element-wise; no tolerance.
//!
//! ## Invariants
//!
//! * The returned mask has the same length as the input.
//! * A mask that rejects everything is a valid fixed point.
//!
//! ## Non-goals
//!
//! * This module does not handle N-D data. Callers check dimensionality.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use ndarray::{Array1, ArrayView1};
use num_traits::Float;
use tracing::{debug, trace};

// Internal dependencies
use crate::primitives::errors::StatsError;

/// Outcome of a converged sigma-clipping run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipOutcome {
    /// `true` for every retained point.
    pub mask: Vec<bool>,

    /// Number of passes performed, including the one that confirmed the fixed point.
    pub iterations: usize,
}

impl ClipOutcome {
    /// Number of retained points.
    pub fn retained(&self) -> usize {
        self.mask.iter().filter(|&&keep| keep).count()
    }
}

/// Iterate sigma clipping to a fixed point.
pub fn clipped_index1d<T: Float>(
    values: &ArrayView1<'_, T>,
    weights: &ArrayView1<'_, T>,
    sigma: T,
    max_iterations: usize,
) -> Result<ClipOutcome, StatsError> {
    let mut mask = vec![true; values.len()];

    for iteration in 1..=max_iterations {
        let (mean, std) = retained_mean_std(values, weights, &mask);
        let threshold = sigma * std;

        let next: Vec<bool> = values.iter().map(|&x| (x - mean).abs() < threshold).collect();

        trace!(
            iteration,
            mean = mean.to_f64(),
            std = std.to_f64(),
            "sigma clipping pass"
        );

        if next == mask {
            debug!(
                iteration,
                retained = next.iter().filter(|&&keep| keep).count(),
                total = values.len(),
                "sigma clipping converged"
            );
            return Ok(ClipOutcome {
                mask: next,
                iterations: iteration,
            });
        }
        mask = next;
    }

    debug!(max_iterations, "sigma clipping hit the iteration cap");
    Err(StatsError::NotConverged {
        iterations: max_iterations,
    })
}

/// Weighted mean and standard deviation over the retained points.
fn retained_mean_std<T: Float>(
    values: &ArrayView1<'_, T>,
    weights: &ArrayView1<'_, T>,
    mask: &[bool],
) -> (T, T) {
    let mut sum_w = T::zero();
    let mut sum_wx = T::zero();
    for ((&x, &w), _) in values
        .iter()
        .zip(weights.iter())
        .zip(mask)
        .filter(|(_, keep)| **keep)
    {
        sum_w = sum_w + w;
        sum_wx = sum_wx + w * x;
    }
    let mean = sum_wx / sum_w;

    let mut sum_wd = T::zero();
    for ((&x, &w), _) in values
        .iter()
        .zip(weights.iter())
        .zip(mask)
        .filter(|(_, keep)| **keep)
    {
        let d = x - mean;
        sum_wd = sum_wd + w * d * d;
    }

    (mean, (sum_wd / sum_w).sqrt())
}

/// Restrict values and weights to the points retained by `mask`.
pub fn select_retained<T: Float>(
    values: &ArrayView1<'_, T>,
    weights: &ArrayView1<'_, T>,
    mask: &[bool],
) -> (Array1<T>, Array1<T>) {
    let (kept_values, kept_weights): (Vec<T>, Vec<T>) = values
        .iter()
        .zip(weights.iter())
        .zip(mask)
        .filter(|(_, keep)| **keep)
        .map(|((&x, &w), _)| (x, w))
        .unzip();
    (Array1::from(kept_values), Array1::from(kept_weights))
}
