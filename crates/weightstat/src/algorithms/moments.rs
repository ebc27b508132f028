//! Weighted central moments and the statistics derived from them.
//!
//! ## Purpose
//!
//! This module computes the weighted n-th moment about the weighted mean and
//! the usual shape statistics built on it: variance, standard deviation,
//! Gaussian-equivalent FWHM, skewness and excess kurtosis.
//!
//! ## Design notes
//!
//! * **Two-pass**: The weighted mean is computed first and broadcast back
//!   against the values, which is why reductions keep their axes.
//! * **Faithful**: No bias correction and no clamping. Non-finite inputs or
//!   zero total weight propagate as NaN/Inf.
//!
//! ## Key concepts
//!
//! * **Skewness**: `m3 / std^3`, zero for symmetric profiles.
//! * **Excess kurtosis**: `m4 / var^2 - 3`, zero for a Gaussian.

// External dependencies
use ndarray::{ArrayD, ArrayViewD};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::average::weighted_average;
use crate::math::kernel::fwhm_factor;

/// Weighted `order`-th moment about the weighted average.
pub fn central_moment<T: Float>(
    values: &ArrayViewD<'_, T>,
    weights: &ArrayViewD<'_, T>,
    order: i32,
    axes: Option<&[usize]>,
) -> ArrayD<T> {
    let average = weighted_average(values, weights, axes);
    let deviations = (values - &average).mapv(|d| d.powi(order));
    weighted_average(&deviations.view(), weights, axes)
}

/// Weighted variance (second central moment).
pub fn variance<T: Float>(
    values: &ArrayViewD<'_, T>,
    weights: &ArrayViewD<'_, T>,
    axes: Option<&[usize]>,
) -> ArrayD<T> {
    central_moment(values, weights, 2, axes)
}

/// Weighted standard deviation, `sqrt(variance)`.
pub fn standard_deviation<T: Float>(
    values: &ArrayViewD<'_, T>,
    weights: &ArrayViewD<'_, T>,
    axes: Option<&[usize]>,
) -> ArrayD<T> {
    variance(values, weights, axes).mapv(|v| v.sqrt())
}

/// Full width at half maximum of the Gaussian with the same standard deviation.
pub fn gauss_fwhm<T: Float>(
    values: &ArrayViewD<'_, T>,
    weights: &ArrayViewD<'_, T>,
    axes: Option<&[usize]>,
) -> ArrayD<T> {
    let factor = fwhm_factor::<T>();
    standard_deviation(values, weights, axes).mapv(|s| factor * s)
}

/// Weighted skewness, `m3 / std^3`.
pub fn skewness<T: Float>(
    values: &ArrayViewD<'_, T>,
    weights: &ArrayViewD<'_, T>,
    axes: Option<&[usize]>,
) -> ArrayD<T> {
    let norm = standard_deviation(values, weights, axes).mapv(|s| s.powi(3));
    central_moment(values, weights, 3, axes) / norm
}

/// Weighted excess kurtosis, `m4 / var^2 - 3`.
pub fn kurtosis<T: Float>(
    values: &ArrayViewD<'_, T>,
    weights: &ArrayViewD<'_, T>,
    axes: Option<&[usize]>,
) -> ArrayD<T> {
    let three = T::from(3.0).unwrap_or_else(T::nan);
    let norm = variance(values, weights, axes).mapv(|v| v * v);
    (central_moment(values, weights, 4, axes) / norm).mapv(|k| k - three)
}
