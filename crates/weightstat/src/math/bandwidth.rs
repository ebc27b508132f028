//! Bandwidth selection for Gaussian kernel density estimation.
//!
//! ## Purpose
//!
//! This module turns a bandwidth rule and an effective sample size into the
//! dimensionless factor that scales the sample covariance into the kernel
//! covariance.
//!
//! ## Key concepts
//!
//! * **Scott's rule**: `n_eff^(-1/5)` for 1-D data.
//! * **Silverman's rule**: `(n_eff * 3/4)^(-1/5)` for 1-D data.
//! * **Fixed factor**: A caller-chosen multiple of the sample standard deviation.
//!
//! ## Non-goals
//!
//! * This module does not compute the sample covariance.

// External dependencies
use num_traits::Float;

/// Rule for choosing the kernel bandwidth factor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BandwidthMethod {
    /// Scott's rule of thumb.
    #[default]
    Scott,

    /// Silverman's rule of thumb.
    Silverman,

    /// Fixed factor applied to the sample standard deviation.
    Factor(f64),
}

impl BandwidthMethod {
    /// Exponent `-1/(d+4)` for one dimension.
    const EXPONENT: f64 = -1.0 / 5.0;

    /// Get the name of the bandwidth rule.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Scott => "Scott",
            Self::Silverman => "Silverman",
            Self::Factor(_) => "Factor",
        }
    }

    /// Compute the bandwidth factor for an effective sample size.
    pub fn factor<T: Float>(&self, n_eff: T) -> T {
        let exponent = T::from(Self::EXPONENT).unwrap_or_else(T::zero);
        match self {
            Self::Scott => n_eff.powf(exponent),
            Self::Silverman => {
                let three_quarters = T::from(0.75).unwrap_or_else(T::one);
                (n_eff * three_quarters).powf(exponent)
            }
            Self::Factor(f) => T::from(*f).unwrap_or_else(T::nan),
        }
    }
}
