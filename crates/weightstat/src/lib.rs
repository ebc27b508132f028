//! # weightstat: Weighted Moments and Reflected KDE for Rust
//!
//! Weighted descriptive statistics for physically-weighted data (spectral
//! flux as weight over wavelength, counts over velocity bins, ...) with
//! optional iterative sigma clipping, and a boundary-aware kernel density
//! estimator for 1-D samples.
//!
//! ## Weighted Moments
//!
//! Given values `x` and non-negative weights `w`, the n-th moment about the
//! weighted mean is `sum(w * (x - mean)^n) / sum(w)`. Variance, standard
//! deviation, Gaussian-equivalent FWHM, skewness and excess kurtosis are
//! built on it.
//!
//! ```rust
//! use weightstat::prelude::*;
//!
//! // Gaussian line profile of width 4 centered at 25
//! let x: Vec<f64> = (0..=50).map(f64::from).collect();
//! let flux: Vec<f64> = x.iter().map(|&v| (-0.5 * (v - 25.0).powi(2) / 16.0).exp()).collect();
//!
//! let stats = WeightedMoments::new().build()?;
//!
//! let std = as_scalar(&stats.std(&x, &flux)?).unwrap();
//! assert!((std - 4.0).abs() < 1e-6);
//!
//! // Iterative 3.1-sigma clipping keeps the 25 central points
//! let clipped = WeightedMoments::new().sigma(3.1).build()?;
//! assert_eq!(clipped.clipped_mask(&x, &flux)?.retained(), 25);
//! # Result::<(), StatsError>::Ok(())
//! ```
//!
//! ### Axis Reduction
//!
//! With an explicit axis the reduced dimension is kept with length 1, so the
//! result broadcasts against the input.
//!
//! ```rust
//! use ndarray::array;
//! use weightstat::prelude::*;
//!
//! let values = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
//! let weights = array![[1.0, 1.0, 1.0], [0.0, 1.0, 1.0]];
//!
//! let mean = WeightedMoments::new().axis(1).build()?.average(&values, &weights)?;
//! assert_eq!(mean.shape(), &[2, 1]);
//! assert_eq!(mean[[1, 0]], 5.5);
//! # Result::<(), StatsError>::Ok(())
//! ```
//!
//! ## Reflected KDE
//!
//! ```rust
//! use weightstat::prelude::*;
//!
//! let sample = vec![0.1, 0.3, 0.2, 0.8, f64::NAN, 0.5, 0.05];
//! let kde = Kde::new().bandwidth(Silverman).build()?.fit(&sample)?;
//! assert_eq!(kde.dropped(), 1);
//!
//! let grid: Vec<f64> = (0..=100).map(|i| -0.5 + 0.02 * f64::from(i)).collect();
//! let pdf = kde.evaluate(&grid, Limits::lower(0.0))?;
//! assert_eq!(pdf[0], 0.0);
//! # Result::<(), StatsError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every statistic returns `Result<_, StatsError>`. Usage errors (negative
//! weights, mismatched shapes, clipping N-D data, an empty KDE sample) are
//! errors; degenerate numbers (all weights zero, one point) are not and show
//! up as NaN.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to drop the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! weightstat = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, axes, inputs and units.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - moments, clipping and density estimation.
mod algorithms;

// Layer 4: Engine - validation and orchestration.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Axes, BandwidthMethod,
        BandwidthMethod::{Factor, Scott, Silverman},
        ClipOutcome, KdeBuilder as Kde, KdeModel, Limits, Quantity, ReflectedKde, StatsError,
        StatsInput, SymbolicUnit, Unit, WeightedMomentsBuilder as WeightedMoments,
        WeightedMomentsModel, as_scalar,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
