//! Boundary-reflected kernel density estimation.
//!
//! ## Purpose
//!
//! This module wraps the unbounded Gaussian KDE with the reflection method
//! for densities supported on a finite interval: density leaking past a
//! bound is mirrored back inside, and the estimate is zeroed outside.
//!
//! ## Design notes
//!
//! * **Composition**: [`ReflectedKde`] owns a [`GaussianKde`] and evaluates it
//!   up to three times (grid, lower mirror, upper mirror).
//! * **Immutable**: Fitting happens once; evaluation never mutates.
//! * **Cleaning**: Non-finite samples (and their weights) are dropped before
//!   fitting.
//!
//! ## Invariants
//!
//! * The fitted sample is 1-D and non-empty.
//! * With no bounds, evaluation equals the unbounded density.
//! * With a bound, density beyond the edge tolerance is exactly zero.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};
#[cfg(feature = "std")]
use std::{string::ToString, vec::Vec};

// External dependencies
use num_traits::Float;
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::density::GaussianKde;
use crate::engine::validator::Validator;
use crate::math::bandwidth::BandwidthMethod;
use crate::math::boundary::{Limits, mask_outside, reflect_lower, reflect_upper};
use crate::primitives::errors::StatsError;
use crate::primitives::input::StatsInput;

// ============================================================================
// Model
// ============================================================================

/// Validated KDE configuration, ready to fit samples.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KdeModel {
    pub(crate) bandwidth: BandwidthMethod,
}

impl KdeModel {
    /// Bandwidth rule used for every fit.
    pub fn bandwidth(&self) -> BandwidthMethod {
        self.bandwidth
    }

    /// Fit a reflected KDE on an unweighted 1-D sample.
    ///
    /// Samples of any shape with at most one non-unit axis are flattened.
    /// Samples with more than one non-unit axis fail with
    /// [`StatsError::InvalidInput`].
    pub fn fit<T, S>(&self, sample: &S) -> Result<ReflectedKde<T>, StatsError>
    where
        T: Float,
        S: StatsInput<T> + ?Sized,
    {
        ReflectedKde::fit_with(sample, None::<&[T]>, self.bandwidth)
    }

    /// Fit a reflected KDE on a weighted 1-D sample.
    ///
    /// The sample shape follows the same rules as [`KdeModel::fit`].
    pub fn fit_weighted<T, S, W>(&self, sample: &S, weights: &W) -> Result<ReflectedKde<T>, StatsError>
    where
        T: Float,
        S: StatsInput<T> + ?Sized,
        W: StatsInput<T> + ?Sized,
    {
        ReflectedKde::fit_with(sample, Some(weights), self.bandwidth)
    }
}

// ============================================================================
// Reflected KDE
// ============================================================================

/// Fitted 1-D kernel density estimate with optional support bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectedKde<T> {
    kde: GaussianKde<T>,
    dropped: usize,
}

impl<T: Float> ReflectedKde<T> {
    fn fit_with<S, W>(
        sample: &S,
        weights: Option<&W>,
        bandwidth: BandwidthMethod,
    ) -> Result<Self, StatsError>
    where
        S: StatsInput<T> + ?Sized,
        W: StatsInput<T> + ?Sized,
    {
        let view = sample.as_stats_view();
        Validator::validate_one_dimensional(view.shape())?;
        let raw: Vec<T> = view.iter().copied().collect();

        let raw_weights: Option<Vec<T>> = match weights {
            Some(w) => {
                let w = w.as_stats_view();
                Validator::validate_one_dimensional(w.shape())?;
                let w: Vec<T> = w.iter().copied().collect();
                Validator::validate_kde_weights(&w, raw.len())?;
                Some(w)
            }
            None => None,
        };

        // Drop non-finite samples together with their weights
        let (dataset, kept_weights): (Vec<T>, Option<Vec<T>>) = match raw_weights {
            Some(w) => {
                let (x, w): (Vec<T>, Vec<T>) = raw
                    .iter()
                    .zip(&w)
                    .filter(|(x, _)| x.is_finite())
                    .map(|(&x, &w)| (x, w))
                    .unzip();
                (x, Some(w))
            }
            None => (raw.iter().copied().filter(|x| x.is_finite()).collect(), None),
        };

        let dropped = raw.len() - dataset.len();
        if dataset.is_empty() {
            return Err(StatsError::InvalidInput(
                "no valid data included in input dataset".to_string(),
            ));
        }
        if dropped > 0 {
            debug!(dropped, kept = dataset.len(), "dropped non-finite KDE samples");
        }

        let kde = GaussianKde::fit(dataset, kept_weights, bandwidth)?;
        Ok(Self { kde, dropped })
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Unbounded kernel density at each of `points`.
    pub fn density(&self, points: &[T]) -> Vec<T> {
        self.kde.evaluate(points)
    }

    /// Reflected density on a uniformly spaced grid.
    ///
    /// The bin size is `points[1] - points[0]`; a bounded evaluation needs
    /// at least two points.
    pub fn evaluate(&self, points: &[T], limits: impl Into<Limits<T>>) -> Result<Vec<T>, StatsError> {
        let limits = limits.into();
        if !limits.is_bounded() {
            return Ok(self.density(points));
        }
        if points.len() < 2 {
            return Err(StatsError::TooFewPoints {
                got: points.len(),
                min: 2,
            });
        }

        let binsize = points[1] - points[0];
        trace!(
            points = points.len(),
            lower = limits.lower.and_then(|v| v.to_f64()),
            upper = limits.upper.and_then(|v| v.to_f64()),
            "evaluating reflected KDE"
        );

        let mut pdf = self.density(points);
        if let Some(lower) = limits.lower {
            let mirrored = self.density(&reflect_lower(points, lower, binsize));
            add_assign(&mut pdf, &mirrored);
        }
        if let Some(upper) = limits.upper {
            let mirrored = self.density(&reflect_upper(points, upper, binsize));
            add_assign(&mut pdf, &mirrored);
        }
        mask_outside(&mut pdf, points, &limits, binsize);

        Ok(pdf)
    }

    /// The estimator as a callable with fixed `limits`, equivalent to [`Self::evaluate`].
    pub fn as_fn(
        &self,
        limits: impl Into<Limits<T>>,
    ) -> impl Fn(&[T]) -> Result<Vec<T>, StatsError> + '_ {
        let limits = limits.into();
        move |points: &[T]| self.evaluate(points, limits)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Finite sample values the estimator was fitted on.
    pub fn dataset(&self) -> &[T] {
        self.kde.dataset()
    }

    /// Normalized sample weights.
    pub fn weights(&self) -> &[T] {
        self.kde.weights()
    }

    /// Number of non-finite samples dropped before fitting.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Effective sample size.
    pub fn n_eff(&self) -> T {
        self.kde.n_eff()
    }

    /// Bandwidth factor from the selected rule.
    pub fn factor(&self) -> T {
        self.kde.factor()
    }

    /// Kernel covariance.
    pub fn covariance(&self) -> T {
        self.kde.covariance()
    }

    /// Kernel standard deviation.
    pub fn bandwidth(&self) -> T {
        self.kde.bandwidth()
    }
}

#[inline]
fn add_assign<T: Float>(acc: &mut [T], other: &[T]) {
    for (a, &b) in acc.iter_mut().zip(other) {
        *a = *a + b;
    }
}
