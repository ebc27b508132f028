//! Tests for the high-level weighted moments API.
//!
//! These tests verify the user-facing behavior of `WeightedMoments` for:
//! - Moment statistics on a sampled Gaussian line profile
//! - Axis reduction with kept dimensions and 1-D weight broadcasting
//! - Iterative sigma clipping and its interaction with every statistic
//! - Builder validation and input error reporting
//!
//! ## Test Organization
//!
//! 1. **Gaussian Profile** - Known moments of a Gaussian
//! 2. **Statistic Relations** - std, FWHM and moments agree with each other
//! 3. **Axis Reduction** - Keep-dims shapes, multiple axes, broadcasting
//! 4. **Sigma Clipping** - Convergence, idempotence, restrictions
//! 5. **Builder Validation** - Parameter checks at build time
//! 6. **Input Errors** - Shapes, signs, emptiness

use approx::assert_relative_eq;
use ndarray::{Array1, Array2, array};

use weightstat::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Gaussian line profile of width 4 centered at 25, sampled on 0..=50.
fn gaussian_profile() -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..=50).map(f64::from).collect();
    let flux = x
        .iter()
        .map(|&v| (-0.5 * (v - 25.0).powi(2) / 16.0).exp())
        .collect();
    (x, flux)
}

/// The Gaussian profile with a weaker shoulder at 31, skewing it to the right.
fn shouldered_profile() -> (Vec<f64>, Vec<f64>) {
    let (x, flux) = gaussian_profile();
    let flux = x
        .iter()
        .zip(flux)
        .map(|(&v, f)| f + 0.3 * (-0.5 * (v - 31.0).powi(2) / 4.0).exp())
        .collect();
    (x, flux)
}

fn scalar(a: &ndarray::ArrayD<f64>) -> f64 {
    as_scalar(a).expect("statistic should reduce to a scalar")
}

// ============================================================================
// Gaussian Profile Tests
// ============================================================================

/// Test moments of a sampled Gaussian.
///
/// Verifies mean, variance, std, skewness and excess kurtosis.
#[test]
fn test_gaussian_profile_moments() {
    let (x, flux) = gaussian_profile();
    let stats = WeightedMoments::new().build().unwrap();

    assert_relative_eq!(scalar(&stats.average(&x, &flux).unwrap()), 25.0, epsilon = 1e-12);
    assert_relative_eq!(scalar(&stats.variance(&x, &flux).unwrap()), 16.0, epsilon = 1e-6);
    assert_relative_eq!(scalar(&stats.std(&x, &flux).unwrap()), 4.0, epsilon = 1e-6);
    assert_relative_eq!(scalar(&stats.skewness(&x, &flux).unwrap()), 0.0, epsilon = 1e-6);
    assert_relative_eq!(scalar(&stats.kurtosis(&x, &flux).unwrap()), 0.0, epsilon = 1e-6);
}

/// Test the Gaussian-equivalent FWHM.
///
/// Verifies FWHM = 2*sqrt(2 ln 2) * sigma for a Gaussian profile.
#[test]
fn test_gaussian_profile_fwhm() {
    let (x, flux) = gaussian_profile();
    let stats = WeightedMoments::new().build().unwrap();

    let fwhm = scalar(&stats.gauss_fwhm(&x, &flux).unwrap());
    assert_relative_eq!(fwhm, 2.0 * (2.0 * 2f64.ln()).sqrt() * 4.0, epsilon = 1e-6);
}

/// Test that a full reduction yields a 0-d array.
#[test]
fn test_full_reduction_is_zero_dimensional() {
    let (x, flux) = gaussian_profile();
    let mean = WeightedMoments::new()
        .build()
        .unwrap()
        .average(&x, &flux)
        .unwrap();

    assert_eq!(mean.ndim(), 0);
    assert_eq!(mean.len(), 1);
}

// ============================================================================
// Statistic Relations Tests
// ============================================================================

/// Test std is exactly the square root of variance.
#[test]
fn test_std_is_sqrt_of_variance() {
    let x = vec![1.0, 2.5, 3.0, 7.0, 11.0];
    let w = vec![0.5, 2.0, 1.0, 3.0, 0.25];
    let stats = WeightedMoments::new().build().unwrap();

    let var = scalar(&stats.variance(&x, &w).unwrap());
    let std = scalar(&stats.std(&x, &w).unwrap());
    assert_eq!(std, var.sqrt());
}

/// Test variance agrees with the second moment.
#[test]
fn test_variance_equals_second_moment() {
    let x = vec![1.0, 2.0, 3.0];
    let w = vec![1.0, 1.0, 2.0];
    let stats = WeightedMoments::new().build().unwrap();

    let var = scalar(&stats.variance(&x, &w).unwrap());
    assert_relative_eq!(var, 0.6875, epsilon = 1e-14);
    assert_eq!(var, scalar(&stats.moment(&x, &w, 2).unwrap()));
}

/// Test low-order moments.
///
/// Verifies the 0th moment is 1 and the 1st moment vanishes.
#[test]
fn test_low_order_moments() {
    let (x, flux) = gaussian_profile();
    let stats = WeightedMoments::new().build().unwrap();

    assert_relative_eq!(scalar(&stats.moment(&x, &flux, 0).unwrap()), 1.0, epsilon = 1e-12);
    assert_relative_eq!(scalar(&stats.moment(&x, &flux, 1).unwrap()), 0.0, epsilon = 1e-10);
}

/// Test skewness of a symmetric profile.
#[test]
fn test_symmetric_profile_has_zero_skewness() {
    let x = vec![-2.0, -1.0, 0.0, 1.0, 2.0];
    let w = vec![1.0, 2.0, 3.0, 2.0, 1.0];
    let stats = WeightedMoments::new().build().unwrap();

    assert_eq!(scalar(&stats.skewness(&x, &w).unwrap()), 0.0);
}

/// Test skewness sign follows the heavier tail.
#[test]
fn test_skewness_sign() {
    let x = vec![0.0, 1.0, 2.0, 10.0];
    let w = vec![1.0, 1.0, 1.0, 1.0];
    let stats = WeightedMoments::new().build().unwrap();

    assert!(scalar(&stats.skewness(&x, &w).unwrap()) > 0.0);

    let mirrored: Vec<f64> = x.iter().map(|v| -v).collect();
    assert!(scalar(&stats.skewness(&mirrored, &w).unwrap()) < 0.0);
}

/// Test kurtosis of a two-point distribution.
///
/// Two equal point masses have var = m4 = 1, so excess kurtosis is -2.
#[test]
fn test_two_point_kurtosis() {
    let x = vec![-1.0, 1.0];
    let w = vec![1.0, 1.0];
    let stats = WeightedMoments::new().build().unwrap();

    assert_relative_eq!(scalar(&stats.kurtosis(&x, &w).unwrap()), -2.0, epsilon = 1e-14);
}

/// Test weights are scale invariant.
#[test]
fn test_weight_scale_invariance() {
    let x = vec![1.0, 4.0, 9.0, 16.0];
    let w = vec![1.0, 3.0, 2.0, 0.5];
    let scaled: Vec<f64> = w.iter().map(|v| v * 1000.0).collect();
    let stats = WeightedMoments::new().build().unwrap();

    assert_relative_eq!(
        scalar(&stats.variance(&x, &w).unwrap()),
        scalar(&stats.variance(&x, &scaled).unwrap()),
        max_relative = 1e-12
    );
}

/// Test degenerate weights propagate NaN instead of erroring.
#[test]
fn test_zero_weights_give_nan() {
    let x = vec![1.0, 2.0, 3.0];
    let w = vec![0.0, 0.0, 0.0];
    let stats = WeightedMoments::new().build().unwrap();

    assert!(scalar(&stats.average(&x, &w).unwrap()).is_nan());
    assert!(scalar(&stats.std(&x, &w).unwrap()).is_nan());
}

/// Test a single point has zero spread and undefined shape statistics.
#[test]
fn test_single_point() {
    let stats = WeightedMoments::new().build().unwrap();

    assert_eq!(scalar(&stats.average(&[3.0], &[2.0]).unwrap()), 3.0);
    assert_eq!(scalar(&stats.variance(&[3.0], &[2.0]).unwrap()), 0.0);
    assert!(scalar(&stats.skewness(&[3.0], &[2.0]).unwrap()).is_nan());
}

/// Test NaN weights propagate into the result.
#[test]
fn test_nan_weight_propagates() {
    let stats = WeightedMoments::new().build().unwrap();
    let mean = stats.average(&[1.0, 2.0], &[1.0, f64::NAN]).unwrap();
    assert!(scalar(&mean).is_nan());
}

// ============================================================================
// Axis Reduction Tests
// ============================================================================

/// Test reduction along a single axis keeps it with length 1.
#[test]
fn test_axis_keeps_dimension() {
    let values = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let weights = Array2::<f64>::ones((2, 3));

    let rows = WeightedMoments::new()
        .axis(1)
        .build()
        .unwrap()
        .average(&values, &weights)
        .unwrap();
    assert_eq!(rows.shape(), &[2, 1]);
    assert_relative_eq!(rows[[0, 0]], 2.0);
    assert_relative_eq!(rows[[1, 0]], 5.0);

    let cols = WeightedMoments::new()
        .axis(0)
        .build()
        .unwrap()
        .average(&values, &weights)
        .unwrap();
    assert_eq!(cols.shape(), &[1, 3]);
    assert_relative_eq!(cols[[0, 2]], 4.5);
}

/// Test reduction along several axes.
#[test]
fn test_multiple_axes() {
    let values = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let weights = Array2::<f64>::ones((2, 3));

    let mean = WeightedMoments::new()
        .axis([0, 1])
        .build()
        .unwrap()
        .average(&values, &weights)
        .unwrap();
    assert_eq!(mean.shape(), &[1, 1]);
    assert_relative_eq!(mean[[0, 0]], 3.5);
}

/// Test `Option<usize>` axis selection.
#[test]
fn test_optional_axis() {
    let values = array![[1.0, 2.0], [3.0, 4.0]];
    let weights = Array2::<f64>::ones((2, 2));

    let all = WeightedMoments::new()
        .axis(None::<usize>)
        .build()
        .unwrap()
        .average(&values, &weights)
        .unwrap();
    assert_eq!(all.ndim(), 0);
    assert_relative_eq!(scalar(&all), 2.5);
}

/// Test per-row variance along an axis matches 1-D results.
#[test]
fn test_axis_variance_matches_rows() {
    let values = array![[1.0, 2.0, 3.0], [2.0, 4.0, 8.0]];
    let weights = array![[1.0, 1.0, 2.0], [3.0, 1.0, 1.0]];

    let by_row = WeightedMoments::new()
        .axis(1)
        .build()
        .unwrap()
        .variance(&values, &weights)
        .unwrap();

    let flat = WeightedMoments::new().build().unwrap();
    for row in 0..2 {
        let v = values.row(row).to_vec();
        let w = weights.row(row).to_vec();
        let expected = scalar(&flat.variance(&v, &w).unwrap());
        assert_relative_eq!(by_row[[row, 0]], expected, epsilon = 1e-12);
    }
}

/// Test 1-D weights broadcast along the reduction axis.
#[test]
fn test_one_dimensional_weights_broadcast() {
    let values = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let weights = Array1::from(vec![1.0, 1.0, 2.0]);

    let mean = WeightedMoments::new()
        .axis(1)
        .build()
        .unwrap()
        .average(&values, &weights)
        .unwrap();
    assert_eq!(mean.shape(), &[2, 1]);
    assert_relative_eq!(mean[[0, 0]], 2.25);
    assert_relative_eq!(mean[[1, 0]], 5.25);
}

/// Test 1-D weights along the wrong axis are rejected.
#[test]
fn test_one_dimensional_weights_wrong_axis() {
    let values = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let weights = vec![1.0, 1.0, 2.0];

    let res = WeightedMoments::new()
        .axis(0)
        .build()
        .unwrap()
        .average(&values, &weights);
    assert!(matches!(res, Err(StatsError::MismatchedShapes { .. })));
}

/// Test out-of-range and repeated axes.
#[test]
fn test_invalid_axes() {
    let values = array![[1.0, 2.0], [3.0, 4.0]];
    let weights = Array2::<f64>::ones((2, 2));

    let res = WeightedMoments::new()
        .axis(2)
        .build()
        .unwrap()
        .average(&values, &weights);
    assert_eq!(res, Err(StatsError::InvalidAxis { axis: 2, ndim: 2 }));

    let res = WeightedMoments::new()
        .axis(vec![1, 1])
        .build()
        .unwrap()
        .average(&values, &weights);
    assert_eq!(res, Err(StatsError::DuplicateAxis(1)));
}

// ============================================================================
// Sigma Clipping Tests
// ============================================================================

/// Test 3.1-sigma clipping of a Gaussian profile.
///
/// Verifies the retained window and the number of passes.
#[test]
fn test_gaussian_clipping_mask() {
    let (x, flux) = gaussian_profile();
    let outcome = WeightedMoments::new()
        .sigma(3.1)
        .build()
        .unwrap()
        .clipped_mask(&x, &flux)
        .unwrap();

    assert_eq!(outcome.mask.len(), 51);
    assert_eq!(outcome.retained(), 25);
    assert_eq!(outcome.iterations, 2);
    assert!(!outcome.mask[12]);
    assert!(outcome.mask[13]);
    assert!(outcome.mask[37]);
    assert!(!outcome.mask[38]);
}

/// Test statistics are computed on the clipped subset.
#[test]
fn test_clipped_statistics() {
    let (x, flux) = gaussian_profile();
    let stats = WeightedMoments::new().sigma(3.1).build().unwrap();

    assert_relative_eq!(scalar(&stats.average(&x, &flux).unwrap()), 25.0, epsilon = 1e-12);
    assert_relative_eq!(
        scalar(&stats.variance(&x, &flux).unwrap()),
        15.702566060619192,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        scalar(&stats.std(&x, &flux).unwrap()),
        3.9626463456406493,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        scalar(&stats.kurtosis(&x, &flux).unwrap()),
        -0.23891579399379692,
        epsilon = 1e-9
    );
}

/// Test clipped shape statistics are normalized by the unclipped spread.
///
/// The numerator comes from the clipped subset, the std or variance from
/// every point.
#[test]
fn test_clipped_shape_statistics_use_unclipped_spread() {
    let (x, flux) = shouldered_profile();
    let clipped = WeightedMoments::new().sigma(3.1).build().unwrap();
    let unclipped = WeightedMoments::new().build().unwrap();

    assert_eq!(clipped.clipped_mask(&x, &flux).unwrap().retained(), 27);

    let m3 = scalar(&clipped.moment(&x, &flux, 3).unwrap());
    let m4 = scalar(&clipped.moment(&x, &flux, 4).unwrap());
    let std = scalar(&unclipped.std(&x, &flux).unwrap());
    let var = scalar(&unclipped.variance(&x, &flux).unwrap());

    let skew = scalar(&clipped.skewness(&x, &flux).unwrap());
    assert_relative_eq!(skew, m3 / std.powi(3), epsilon = 1e-12);
    assert_relative_eq!(skew, -0.06263865871031869, epsilon = 1e-9);

    let kurt = scalar(&clipped.kurtosis(&x, &flux).unwrap());
    assert_relative_eq!(kurt, m4 / (var * var) - 3.0, epsilon = 1e-12);
    assert_relative_eq!(kurt, -0.46694546377317403, epsilon = 1e-9);
}

/// Test clipping the clipped subset again removes nothing.
#[test]
fn test_clipping_is_idempotent() {
    let (x, flux) = gaussian_profile();
    let stats = WeightedMoments::new().sigma(3.1).build().unwrap();
    let first = stats.clipped_mask(&x, &flux).unwrap();

    let (kept_x, kept_w): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(&flux)
        .zip(&first.mask)
        .filter(|(_, keep)| **keep)
        .map(|((&x, &w), _)| (x, w))
        .unzip();

    let second = stats.clipped_mask(&kept_x, &kept_w).unwrap();
    assert_eq!(second.retained(), kept_x.len());
    assert_eq!(second.iterations, 1);
}

/// Test a large threshold keeps every point.
#[test]
fn test_wide_threshold_keeps_everything() {
    let (x, flux) = gaussian_profile();
    let stats = WeightedMoments::new().sigma(100.0).build().unwrap();

    assert_eq!(stats.clipped_mask(&x, &flux).unwrap().retained(), 51);
    let unclipped = WeightedMoments::new().build().unwrap();
    assert_eq!(
        stats.std(&x, &flux).unwrap(),
        unclipped.std(&x, &flux).unwrap()
    );
}

/// Test hitting the iteration cap reports non-convergence.
#[test]
fn test_clipping_iteration_cap() {
    let (x, flux) = gaussian_profile();
    let stats = WeightedMoments::new()
        .sigma(3.1)
        .max_iterations(1)
        .build()
        .unwrap();

    assert_eq!(
        stats.clipped_mask(&x, &flux),
        Err(StatsError::NotConverged { iterations: 1 })
    );
    assert_eq!(
        stats.std(&x, &flux),
        Err(StatsError::NotConverged { iterations: 1 })
    );
}

/// Test clipping is restricted to 1-D input.
#[test]
fn test_clipping_requires_one_dimensional() {
    let values = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let weights = Array2::<f64>::ones((2, 3));
    let stats = WeightedMoments::new().sigma(3.0).build().unwrap();

    assert_eq!(
        stats.average(&values, &weights),
        Err(StatsError::ClippingRequiresOneDimensional { ndim: 2 })
    );
    assert_eq!(
        stats.clipped_mask(&values, &weights),
        Err(StatsError::ClippingRequiresOneDimensional { ndim: 2 })
    );
}

/// Test requesting a mask without a threshold.
#[test]
fn test_clipped_mask_requires_sigma() {
    let (x, flux) = gaussian_profile();
    let res = WeightedMoments::new().build().unwrap().clipped_mask(&x, &flux);
    assert!(matches!(res, Err(StatsError::InvalidInput(_))));
}

/// Test clipping data with no spread rejects every point.
#[test]
fn test_clipping_constant_values() {
    let x = vec![2.0, 2.0, 2.0];
    let w = vec![1.0, 1.0, 1.0];
    let stats = WeightedMoments::new().sigma(3.0).build().unwrap();

    let outcome = stats.clipped_mask(&x, &w).unwrap();
    assert_eq!(outcome.retained(), 0);
    assert!(scalar(&stats.average(&x, &w).unwrap()).is_nan());
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test builder defaults.
#[test]
fn test_builder_defaults() {
    let stats = WeightedMoments::<f64>::new().build().unwrap();

    assert!(stats.axes().is_all());
    assert_eq!(stats.sigma(), None);
    assert_eq!(stats.max_iterations(), 100);
}

/// Test invalid clip thresholds.
#[test]
fn test_builder_invalid_sigma() {
    assert_eq!(
        WeightedMoments::new().sigma(0.0).build(),
        Err(StatsError::InvalidSigma(0.0))
    );
    assert_eq!(
        WeightedMoments::new().sigma(-1.0).build(),
        Err(StatsError::InvalidSigma(-1.0))
    );
    assert!(WeightedMoments::new().sigma(f64::NAN).build().is_err());
}

/// Test invalid iteration cap.
#[test]
fn test_builder_invalid_iterations() {
    assert_eq!(
        WeightedMoments::<f64>::new().max_iterations(0).build(),
        Err(StatsError::InvalidIterations(0))
    );
}

/// Test duplicate parameter detection.
#[test]
fn test_builder_duplicate_parameter() {
    let res = WeightedMoments::new().sigma(3.0).sigma(2.0).build();
    assert_eq!(
        res,
        Err(StatsError::DuplicateParameter { parameter: "sigma" })
    );

    let res = WeightedMoments::<f64>::new().axis(0).axis(1).build();
    assert_eq!(res, Err(StatsError::DuplicateParameter { parameter: "axis" }));
}

// ============================================================================
// Input Error Tests
// ============================================================================

/// Test negative weights are rejected with their position.
#[test]
fn test_negative_weight() {
    let stats = WeightedMoments::new().build().unwrap();
    let res = stats.average(&[1.0, 2.0, 3.0], &[1.0, -1.0, 1.0]);

    assert_eq!(
        res,
        Err(StatsError::NegativeWeight {
            index: 1,
            value: -1.0
        })
    );
}

/// Test mismatched lengths are rejected.
#[test]
fn test_mismatched_shapes() {
    let stats = WeightedMoments::new().build().unwrap();
    let res = stats.average(&[1.0, 2.0, 3.0], &[1.0, 1.0]);

    assert_eq!(
        res,
        Err(StatsError::MismatchedShapes {
            values: vec![3],
            weights: vec![2]
        })
    );
}

/// Test empty input is rejected.
#[test]
fn test_empty_input() {
    let stats = WeightedMoments::new().build().unwrap();
    let empty: Vec<f64> = Vec::new();

    assert_eq!(stats.average(&empty, &empty), Err(StatsError::EmptyInput));
}

/// Test error messages are descriptive.
#[test]
fn test_error_display() {
    let err = StatsError::NegativeWeight {
        index: 4,
        value: -0.5,
    };
    assert!(err.to_string().contains("weights[4]"));

    let err = StatsError::NotConverged { iterations: 100 };
    assert!(err.to_string().contains("100"));
}
