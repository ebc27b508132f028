//! Input validation for weighted statistics and KDE configuration.
//!
//! ## Purpose
//!
//! This module checks configuration parameters and input arrays before any
//! statistic is computed, and conforms weights to the shape of the values.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Weight conformance**: Weights either share the values' shape, or are
//!   1-D along a single reduction axis and get broadcast along it.
//! * **Non-negativity**: Negative weights are rejected; NaN weights are not,
//!   they propagate into the result.
//!
//! ## Non-goals
//!
//! * This module does not drop or repair non-finite values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};
#[cfg(feature = "std")]
use std::{string::ToString, vec::Vec};

// External dependencies
use ndarray::{ArrayViewD, CowArray, IxDyn};
use num_traits::Float;

// Internal dependencies
use crate::math::bandwidth::BandwidthMethod;
use crate::primitives::errors::StatsError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for statistics configuration and input data.
///
/// All methods fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate values and weights, returning weights conformed to the values' shape.
    pub fn validate_inputs<'a, T: Float>(
        values: &ArrayViewD<'_, T>,
        weights: ArrayViewD<'a, T>,
        axes: Option<&[usize]>,
    ) -> Result<CowArray<'a, T, IxDyn>, StatsError> {
        // Check 1: Non-empty input
        if values.is_empty() {
            return Err(StatsError::EmptyInput);
        }

        // Check 2: Non-negative weights
        Self::validate_weights(weights.iter().copied())?;

        // Check 3: Conformable shapes
        Self::conform_weights(values, weights, axes)
    }

    /// Validate that no weight is negative.
    pub fn validate_weights<T: Float>(weights: impl IntoIterator<Item = T>) -> Result<(), StatsError> {
        for (index, w) in weights.into_iter().enumerate() {
            if w < T::zero() {
                return Err(StatsError::NegativeWeight {
                    index,
                    value: w.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }

    /// Broadcast weights to the shape of `values`.
    fn conform_weights<'a, T: Float>(
        values: &ArrayViewD<'_, T>,
        weights: ArrayViewD<'a, T>,
        axes: Option<&[usize]>,
    ) -> Result<CowArray<'a, T, IxDyn>, StatsError> {
        if weights.shape() == values.shape() {
            return Ok(CowArray::from(weights));
        }

        let mismatch = || StatsError::MismatchedShapes {
            values: values.shape().to_vec(),
            weights: weights.shape().to_vec(),
        };

        // 1-D weights along a single reduction axis
        match axes {
            Some(&[axis]) if weights.ndim() == 1 && values.shape()[axis] == weights.len() => {
                let mut shape: Vec<usize> = vec![1; values.ndim()];
                shape[axis] = weights.len();
                let column = weights
                    .to_owned()
                    .into_shape_with_order(IxDyn(&shape))
                    .map_err(|_| mismatch())?;
                let full = column
                    .broadcast(values.raw_dim())
                    .ok_or_else(mismatch)?
                    .to_owned();
                Ok(CowArray::from(full))
            }
            _ => Err(mismatch()),
        }
    }

    /// Require a 1-D input for sigma clipping.
    pub fn validate_clippable(ndim: usize) -> Result<(), StatsError> {
        if ndim != 1 {
            return Err(StatsError::ClippingRequiresOneDimensional { ndim });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the clip threshold.
    pub fn validate_sigma<T: Float>(sigma: T) -> Result<(), StatsError> {
        if !sigma.is_finite() || sigma <= T::zero() {
            return Err(StatsError::InvalidSigma(sigma.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate the clipping iteration cap.
    pub fn validate_iterations(max_iterations: usize) -> Result<(), StatsError> {
        if max_iterations == 0 {
            return Err(StatsError::InvalidIterations(max_iterations));
        }
        Ok(())
    }

    /// Validate a moment order and convert it to an exponent.
    pub fn validate_order(order: u32) -> Result<i32, StatsError> {
        i32::try_from(order).map_err(|_| StatsError::InvalidOrder(order))
    }

    /// Validate the bandwidth rule.
    pub fn validate_bandwidth(method: BandwidthMethod) -> Result<(), StatsError> {
        if let BandwidthMethod::Factor(f) = method {
            if !f.is_finite() || f <= 0.0 {
                return Err(StatsError::InvalidBandwidth(f));
            }
        }
        Ok(())
    }

    /// Validate that no builder parameter was set twice.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), StatsError> {
        if let Some(parameter) = duplicate_param {
            return Err(StatsError::DuplicateParameter { parameter });
        }
        Ok(())
    }

    // ========================================================================
    // KDE Sample Validation
    // ========================================================================

    /// Require a sample with at most one non-trivial axis.
    pub fn validate_one_dimensional(shape: &[usize]) -> Result<(), StatsError> {
        if shape.iter().filter(|&&len| len != 1).count() > 1 {
            return Err(StatsError::InvalidInput(
                "reflected KDE can only be used for 1-D input".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate per-sample KDE weights.
    pub fn validate_kde_weights<T: Float>(weights: &[T], n: usize) -> Result<(), StatsError> {
        if weights.len() != n {
            return Err(StatsError::MismatchedShapes {
                values: vec![n],
                weights: vec![weights.len()],
            });
        }
        Self::validate_weights(weights.iter().copied())?;
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(StatsError::InvalidInput(
                "KDE weights must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
