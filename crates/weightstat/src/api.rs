//! High-level API for weighted statistics and reflected KDE.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points. Both components are
//! configured with a fluent builder and validated on `build()`.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Every parameter has a default; only what differs is set.
//! * **Validated**: Parameters are checked once, when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `WeightedMoments::new()` or `Kde::new()`.
//! 2. Chain configuration methods (`.axis()`, `.sigma()`, `.bandwidth()`, ...).
//! 3. Call `.build()` to get a reusable model.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::clipping::ClipOutcome;
pub use crate::engine::moments::{DEFAULT_MAX_ITERATIONS, WeightedMomentsModel};
pub use crate::engine::reflected::{KdeModel, ReflectedKde};
pub use crate::math::bandwidth::BandwidthMethod;
pub use crate::math::boundary::Limits;
pub use crate::primitives::axes::{Axes, as_scalar};
pub use crate::primitives::errors::StatsError;
pub use crate::primitives::input::StatsInput;
pub use crate::primitives::units::{Quantity, SymbolicUnit, Unit};

// ============================================================================
// Weighted Moments Builder
// ============================================================================

/// Fluent builder for weighted-moment statistics.
#[derive(Debug, Clone)]
pub struct WeightedMomentsBuilder<T> {
    /// Axes to reduce (default: all).
    pub axes: Option<Axes>,

    /// Clip threshold in weighted standard deviations (default: no clipping).
    pub sigma: Option<T>,

    /// Cap on sigma-clipping passes (default: 100).
    pub max_iterations: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for WeightedMomentsBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> WeightedMomentsBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            axes: None,
            sigma: None,
            max_iterations: None,
            duplicate_param: None,
        }
    }

    /// Set the axes to reduce (`usize`, `[usize; N]`, `Vec<usize>`, `Option<usize>`).
    pub fn axis(mut self, axes: impl Into<Axes>) -> Self {
        if self.axes.is_some() {
            self.duplicate_param = Some("axis");
        }
        self.axes = Some(axes.into());
        self
    }

    /// Enable sigma clipping at `sigma` weighted standard deviations (1-D input only).
    pub fn sigma(mut self, sigma: T) -> Self {
        if self.sigma.is_some() {
            self.duplicate_param = Some("sigma");
        }
        self.sigma = Some(sigma);
        self
    }

    /// Set the cap on sigma-clipping passes.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Validate the configuration and build a reusable model.
    pub fn build(self) -> Result<WeightedMomentsModel<T>, StatsError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        if let Some(sigma) = self.sigma {
            Validator::validate_sigma(sigma)?;
        }

        let max_iterations = self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS);
        Validator::validate_iterations(max_iterations)?;

        Ok(WeightedMomentsModel {
            axes: self.axes.unwrap_or_default(),
            sigma: self.sigma,
            max_iterations,
        })
    }
}

// ============================================================================
// KDE Builder
// ============================================================================

/// Fluent builder for reflected kernel density estimation.
#[derive(Debug, Clone, Default)]
pub struct KdeBuilder {
    /// Bandwidth rule (default: Scott).
    pub bandwidth: Option<BandwidthMethod>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl KdeBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bandwidth: None,
            duplicate_param: None,
        }
    }

    /// Set the bandwidth rule.
    pub fn bandwidth(mut self, method: BandwidthMethod) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some(method);
        self
    }

    /// Validate the configuration and build a reusable model.
    pub fn build(self) -> Result<KdeModel, StatsError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let bandwidth = self.bandwidth.unwrap_or_default();
        Validator::validate_bandwidth(bandwidth)?;

        Ok(KdeModel { bandwidth })
    }
}
