//! Unbounded Gaussian kernel density estimation.
//!
//! ## Purpose
//!
//! This module fits a 1-D Gaussian KDE to a cleaned, optionally weighted
//! sample and evaluates it at arbitrary points. It is the machinery the
//! reflected estimator builds its boundary corrections on.
//!
//! ## Key concepts
//!
//! * **Effective sample size**: `n_eff = 1 / sum(w_i^2)` for normalized weights.
//! * **Kernel covariance**: Unbiased weighted sample variance times the
//!   squared bandwidth factor.
//!
//! ## Invariants
//!
//! * Weights are normalized to sum to one.
//! * The kernel covariance is positive and finite.
//!
//! ## Non-goals
//!
//! * This module does not drop non-finite samples; callers clean first.
//! * This module does not apply support bounds.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};
#[cfg(feature = "std")]
use std::{string::ToString, vec::Vec};

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::math::bandwidth::BandwidthMethod;
use crate::math::kernel::gaussian_pdf;
use crate::primitives::errors::StatsError;

/// Fitted 1-D Gaussian kernel density estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKde<T> {
    dataset: Vec<T>,
    weights: Vec<T>,
    n_eff: T,
    factor: T,
    covariance: T,
    bandwidth: T,
}

impl<T: Float> GaussianKde<T> {
    /// Fit on a non-empty sample of finite values.
    ///
    /// `weights`, if given, must be non-negative, finite and as long as `dataset`.
    pub fn fit(
        dataset: Vec<T>,
        weights: Option<Vec<T>>,
        method: BandwidthMethod,
    ) -> Result<Self, StatsError> {
        let n = dataset.len();
        if n == 0 {
            return Err(StatsError::EmptyInput);
        }

        let raw_weights = match weights {
            Some(w) => w,
            None => vec![T::one(); n],
        };
        let total = raw_weights.iter().fold(T::zero(), |acc, &w| acc + w);
        if !(total > T::zero()) || !total.is_finite() {
            return Err(StatsError::InvalidInput(
                "KDE weights must have a positive, finite sum".to_string(),
            ));
        }
        let weights: Vec<T> = raw_weights.iter().map(|&w| w / total).collect();

        let sum_sq = weights.iter().fold(T::zero(), |acc, &w| acc + w * w);
        let n_eff = T::one() / sum_sq;

        let mean = dataset
            .iter()
            .zip(&weights)
            .fold(T::zero(), |acc, (&x, &w)| acc + w * x);
        let spread = dataset.iter().zip(&weights).fold(T::zero(), |acc, (&x, &w)| {
            let d = x - mean;
            acc + w * d * d
        });
        // Reliability-weight correction; reduces to n-1 for equal weights.
        let sample_variance = spread / (T::one() - sum_sq);

        let factor = method.factor(n_eff);
        let covariance = sample_variance * factor * factor;
        if !(covariance > T::zero()) || !covariance.is_finite() {
            return Err(StatsError::InvalidInput(
                "KDE sample covariance is degenerate (need at least two distinct values)"
                    .to_string(),
            ));
        }

        debug!(
            points = n,
            n_eff = n_eff.to_f64(),
            bandwidth = method.name(),
            factor = factor.to_f64(),
            "fitted Gaussian KDE"
        );

        Ok(Self {
            dataset,
            weights,
            n_eff,
            factor,
            covariance,
            bandwidth: covariance.sqrt(),
        })
    }

    /// Density at each of `points`.
    pub fn evaluate(&self, points: &[T]) -> Vec<T> {
        points.iter().map(|&x| self.density_at(x)).collect()
    }

    #[inline]
    fn density_at(&self, x: T) -> T {
        self.dataset
            .iter()
            .zip(&self.weights)
            .fold(T::zero(), |acc, (&xi, &w)| {
                acc + w * gaussian_pdf(x, xi, self.bandwidth)
            })
    }

    /// Fitted sample values.
    pub fn dataset(&self) -> &[T] {
        &self.dataset
    }

    /// Normalized sample weights.
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Effective sample size.
    pub fn n_eff(&self) -> T {
        self.n_eff
    }

    /// Bandwidth factor from the selected rule.
    pub fn factor(&self) -> T {
        self.factor
    }

    /// Kernel covariance (variance in 1-D).
    pub fn covariance(&self) -> T {
        self.covariance
    }

    /// Kernel standard deviation.
    pub fn bandwidth(&self) -> T {
        self.bandwidth
    }
}
