//! Gaussian kernel functions.
//!
//! ## Purpose
//!
//! This module provides the Gaussian kernel used by the density estimator and
//! the Gaussian constants used by the moment statistics (FWHM conversion).
//!
//! ## Invariants
//!
//! * The kernel is non-negative, symmetric and integrates to one.
//! * Kernel weights are either zero or normal floats: tails that would land
//!   in the subnormal range are flushed to exactly zero.

// External dependencies
use core::f64::consts::LN_2;
use num_traits::Float;

// ============================================================================
// Mathematical Constants
// ============================================================================

/// Square root of 2*pi, the Gaussian normalization constant.
pub const SQRT_2PI: f64 = 2.506_628_274_631_000_5_f64;

/// Ratio of full width at half maximum to standard deviation for a Gaussian.
///
/// Equal to `2 * sqrt(2 * ln 2)`.
#[inline]
pub fn fwhm_factor<T: Float>() -> T {
    let two = T::one() + T::one();
    two * (two * T::from(LN_2).unwrap_or_else(T::zero)).sqrt()
}

// ============================================================================
// Kernel Evaluation
// ============================================================================

/// Unnormalized Gaussian kernel `exp(-u^2 / 2)`.
///
/// Returns zero where the weight falls below `T::min_positive_value()`.
#[inline]
pub fn gaussian_weight<T: Float>(u: T) -> T {
    let half = T::from(0.5).unwrap_or_else(T::zero);
    let weight = (-half * u * u).exp();
    if weight < T::min_positive_value() {
        T::zero()
    } else {
        weight
    }
}

/// Gaussian probability density at `x` for mean `mu` and standard deviation `sd`.
#[inline]
pub fn gaussian_pdf<T: Float>(x: T, mu: T, sd: T) -> T {
    let norm = T::from(SQRT_2PI).unwrap_or_else(T::one) * sd;
    gaussian_weight((x - mu) / sd) / norm
}
