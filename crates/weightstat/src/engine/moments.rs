//! Execution of weighted-moment statistics.
//!
//! ## Purpose
//!
//! This module turns a validated configuration (axes, optional clip
//! threshold, iteration cap) into statistics over caller-supplied arrays:
//! validate, conform weights, optionally sigma-clip, then reduce.
//!
//! ## Design notes
//!
//! * **Stateless**: A [`WeightedMomentsModel`] holds only configuration and
//!   can be reused and shared across threads.
//! * **Unit-aware**: Every statistic has a `*_quantity` counterpart that
//!   propagates the unit tag of the values.
//!
//! ## Invariants
//!
//! * Clipping is applied only to 1-D inputs.
//! * Under clipping, skewness and kurtosis take their numerator from the
//!   clipped subset and their normalizing spread from the unclipped inputs.

// External dependencies
use ndarray::{ArrayD, ArrayView1, ArrayViewD, CowArray, Ix1, IxDyn};
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::average::weighted_average;
use crate::algorithms::clipping::{ClipOutcome, clipped_index1d, select_retained};
use crate::algorithms::moments;
use crate::engine::validator::Validator;
use crate::primitives::axes::Axes;
use crate::primitives::errors::StatsError;
use crate::primitives::input::StatsInput;
use crate::primitives::units::{Quantity, Unit};

/// Default cap on sigma-clipping passes.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Values and conformed weights ready for reduction.
struct Prepared<'a, T> {
    values: CowArray<'a, T, IxDyn>,
    weights: CowArray<'a, T, IxDyn>,
}

// ============================================================================
// Model
// ============================================================================

/// Validated weighted-moment configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedMomentsModel<T> {
    pub(crate) axes: Axes,
    pub(crate) sigma: Option<T>,
    pub(crate) max_iterations: usize,
}

impl<T: Float> WeightedMomentsModel<T> {
    /// Axes reduced by every statistic.
    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    /// Clip threshold, if clipping is enabled.
    pub fn sigma(&self) -> Option<T> {
        self.sigma
    }

    /// Cap on sigma-clipping passes.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Weighted average.
    pub fn average<V, W>(&self, values: &V, weights: &W) -> Result<ArrayD<T>, StatsError>
    where
        V: StatsInput<T> + ?Sized,
        W: StatsInput<T> + ?Sized,
    {
        self.reduce(values, weights, weighted_average)
    }

    /// Weighted `order`-th moment about the weighted average.
    pub fn moment<V, W>(&self, values: &V, weights: &W, order: u32) -> Result<ArrayD<T>, StatsError>
    where
        V: StatsInput<T> + ?Sized,
        W: StatsInput<T> + ?Sized,
    {
        let exponent = Validator::validate_order(order)?;
        self.reduce(values, weights, |v, w, axes| {
            moments::central_moment(v, w, exponent, axes)
        })
    }

    /// Weighted variance.
    pub fn variance<V, W>(&self, values: &V, weights: &W) -> Result<ArrayD<T>, StatsError>
    where
        V: StatsInput<T> + ?Sized,
        W: StatsInput<T> + ?Sized,
    {
        self.reduce(values, weights, moments::variance)
    }

    /// Weighted standard deviation.
    pub fn std<V, W>(&self, values: &V, weights: &W) -> Result<ArrayD<T>, StatsError>
    where
        V: StatsInput<T> + ?Sized,
        W: StatsInput<T> + ?Sized,
    {
        self.reduce(values, weights, moments::standard_deviation)
    }

    /// Gaussian-equivalent full width at half maximum.
    pub fn gauss_fwhm<V, W>(&self, values: &V, weights: &W) -> Result<ArrayD<T>, StatsError>
    where
        V: StatsInput<T> + ?Sized,
        W: StatsInput<T> + ?Sized,
    {
        self.reduce(values, weights, moments::gauss_fwhm)
    }

    /// Weighted skewness.
    ///
    /// With clipping enabled, the third moment is taken on the clipped subset
    /// and divided by the cubed standard deviation of the unclipped inputs.
    pub fn skewness<V, W>(&self, values: &V, weights: &W) -> Result<ArrayD<T>, StatsError>
    where
        V: StatsInput<T> + ?Sized,
        W: StatsInput<T> + ?Sized,
    {
        if self.sigma.is_none() {
            return self.reduce(values, weights, moments::skewness);
        }
        let m3 = self.moment(values, weights, 3)?;
        let std = self.reduce_unclipped(values, weights, moments::standard_deviation)?;
        Ok(m3 / std.mapv(|s| s.powi(3)))
    }

    /// Weighted excess kurtosis.
    ///
    /// With clipping enabled, the fourth moment is taken on the clipped subset
    /// and divided by the squared variance of the unclipped inputs.
    pub fn kurtosis<V, W>(&self, values: &V, weights: &W) -> Result<ArrayD<T>, StatsError>
    where
        V: StatsInput<T> + ?Sized,
        W: StatsInput<T> + ?Sized,
    {
        if self.sigma.is_none() {
            return self.reduce(values, weights, moments::kurtosis);
        }
        let three = T::from(3.0).unwrap_or_else(T::nan);
        let m4 = self.moment(values, weights, 4)?;
        let var = self.reduce_unclipped(values, weights, moments::variance)?;
        Ok((m4 / var.mapv(|v| v * v)).mapv(|k| k - three))
    }

    /// Run sigma clipping with the configured threshold and return the mask.
    ///
    /// Fails with [`StatsError::InvalidInput`] if no threshold was configured.
    pub fn clipped_mask<V, W>(&self, values: &V, weights: &W) -> Result<ClipOutcome, StatsError>
    where
        V: StatsInput<T> + ?Sized,
        W: StatsInput<T> + ?Sized,
    {
        let Some(sigma) = self.sigma else {
            return Err(StatsError::InvalidInput(
                "sigma clipping requires a sigma threshold".into(),
            ));
        };
        let values = values.as_stats_view();
        Validator::validate_clippable(values.ndim())?;
        let axes = self.axes.resolve(values.ndim())?;
        let weights = Validator::validate_inputs(&values, weights.as_stats_view(), axes)?;
        self.clip(&as_1d(values)?, &as_1d(weights.view())?, sigma)
    }

    // ========================================================================
    // Unit-aware statistics
    // ========================================================================

    /// Weighted average, in the unit of the values.
    pub fn average_quantity<U, W>(
        &self,
        values: &Quantity<T, U>,
        weights: &W,
    ) -> Result<Quantity<T, U>, StatsError>
    where
        U: Unit,
        W: StatsInput<T> + ?Sized,
    {
        let value = self.average(values, weights)?;
        Ok(Quantity::new(value, values.unit.clone()))
    }

    /// Weighted `order`-th central moment, in the values' unit raised to `order`.
    pub fn moment_quantity<U, W>(
        &self,
        values: &Quantity<T, U>,
        weights: &W,
        order: u32,
    ) -> Result<Quantity<T, U>, StatsError>
    where
        U: Unit,
        W: StatsInput<T> + ?Sized,
    {
        let exponent = Validator::validate_order(order)?;
        let value = self.moment(values, weights, order)?;
        Ok(Quantity::new(value, values.unit.powi(exponent)))
    }

    /// Weighted variance, in the values' unit squared.
    pub fn variance_quantity<U, W>(
        &self,
        values: &Quantity<T, U>,
        weights: &W,
    ) -> Result<Quantity<T, U>, StatsError>
    where
        U: Unit,
        W: StatsInput<T> + ?Sized,
    {
        let value = self.variance(values, weights)?;
        Ok(Quantity::new(value, values.unit.powi(2)))
    }

    /// Weighted standard deviation, in the unit of the values.
    pub fn std_quantity<U, W>(
        &self,
        values: &Quantity<T, U>,
        weights: &W,
    ) -> Result<Quantity<T, U>, StatsError>
    where
        U: Unit,
        W: StatsInput<T> + ?Sized,
    {
        let value = self.std(values, weights)?;
        Ok(Quantity::new(value, values.unit.clone()))
    }

    /// Gaussian-equivalent FWHM, in the unit of the values.
    pub fn gauss_fwhm_quantity<U, W>(
        &self,
        values: &Quantity<T, U>,
        weights: &W,
    ) -> Result<Quantity<T, U>, StatsError>
    where
        U: Unit,
        W: StatsInput<T> + ?Sized,
    {
        let value = self.gauss_fwhm(values, weights)?;
        Ok(Quantity::new(value, values.unit.clone()))
    }

    /// Weighted skewness; dimensionless.
    pub fn skewness_quantity<U, W>(
        &self,
        values: &Quantity<T, U>,
        weights: &W,
    ) -> Result<Quantity<T, U>, StatsError>
    where
        U: Unit,
        W: StatsInput<T> + ?Sized,
    {
        let value = self.skewness(values, weights)?;
        Ok(Quantity::new(value, U::dimensionless()))
    }

    /// Weighted excess kurtosis; dimensionless.
    pub fn kurtosis_quantity<U, W>(
        &self,
        values: &Quantity<T, U>,
        weights: &W,
    ) -> Result<Quantity<T, U>, StatsError>
    where
        U: Unit,
        W: StatsInput<T> + ?Sized,
    {
        let value = self.kurtosis(values, weights)?;
        Ok(Quantity::new(value, U::dimensionless()))
    }

    // ========================================================================
    // Pipeline
    // ========================================================================

    /// Prepare the inputs and apply a reduction to them.
    fn reduce<V, W, F>(&self, values: &V, weights: &W, statistic: F) -> Result<ArrayD<T>, StatsError>
    where
        V: StatsInput<T> + ?Sized,
        W: StatsInput<T> + ?Sized,
        F: Fn(&ArrayViewD<'_, T>, &ArrayViewD<'_, T>, Option<&[usize]>) -> ArrayD<T>,
    {
        let values = values.as_stats_view();
        let axes = self.axes.resolve(values.ndim())?;
        let prepared = self.prepare(values, weights.as_stats_view(), axes)?;
        Ok(statistic(
            &prepared.values.view(),
            &prepared.weights.view(),
            axes,
        ))
    }

    /// Validate inputs and apply a reduction to all of them, ignoring clipping.
    fn reduce_unclipped<V, W, F>(
        &self,
        values: &V,
        weights: &W,
        statistic: F,
    ) -> Result<ArrayD<T>, StatsError>
    where
        V: StatsInput<T> + ?Sized,
        W: StatsInput<T> + ?Sized,
        F: Fn(&ArrayViewD<'_, T>, &ArrayViewD<'_, T>, Option<&[usize]>) -> ArrayD<T>,
    {
        let values = values.as_stats_view();
        let axes = self.axes.resolve(values.ndim())?;
        let weights = Validator::validate_inputs(&values, weights.as_stats_view(), axes)?;
        Ok(statistic(&values, &weights.view(), axes))
    }

    /// Validate inputs and restrict them to the clipped subset if requested.
    fn prepare<'a>(
        &self,
        values: ArrayViewD<'a, T>,
        weights: ArrayViewD<'a, T>,
        axes: Option<&[usize]>,
    ) -> Result<Prepared<'a, T>, StatsError> {
        let Some(sigma) = self.sigma else {
            let weights = Validator::validate_inputs(&values, weights, axes)?;
            return Ok(Prepared {
                values: CowArray::from(values),
                weights,
            });
        };

        Validator::validate_clippable(values.ndim())?;
        let weights = Validator::validate_inputs(&values, weights, axes)?;
        let values = as_1d(values)?;
        let weights = as_1d(weights.view())?;

        let outcome = self.clip(&values, &weights, sigma)?;
        let (kept_values, kept_weights) = select_retained(&values, &weights, &outcome.mask);

        Ok(Prepared {
            values: CowArray::from(kept_values.into_dyn()),
            weights: CowArray::from(kept_weights.into_dyn()),
        })
    }

    /// Sigma-clip 1-D values that already passed validation.
    fn clip(
        &self,
        values: &ArrayView1<'_, T>,
        weights: &ArrayView1<'_, T>,
        sigma: T,
    ) -> Result<ClipOutcome, StatsError> {
        debug!(
            points = values.len(),
            sigma = sigma.to_f64(),
            max_iterations = self.max_iterations,
            "sigma clipping"
        );
        clipped_index1d(values, weights, sigma, self.max_iterations)
    }
}

/// View a validated 1-D array with its static dimension.
fn as_1d<T>(view: ArrayViewD<'_, T>) -> Result<ArrayView1<'_, T>, StatsError> {
    let ndim = view.ndim();
    view.into_dimensionality::<Ix1>()
        .map_err(|_| StatsError::ClippingRequiresOneDimensional { ndim })
}
