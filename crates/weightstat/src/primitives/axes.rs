//! Axis specifiers and keep-dims reductions.
//!
//! ## Purpose
//!
//! This module defines which axes of an array a statistic collapses and the
//! summation helper that collapses them while keeping each reduced axis as a
//! size-1 dimension.
//!
//! ## Invariants
//!
//! * `Axes::All` reduces to a 0-dimensional array.
//! * `Axes::Only` keeps every reduced axis with length 1, so the result
//!   broadcasts against the input without reshaping.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use ndarray::{ArrayD, ArrayViewD, Axis, IxDyn};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::StatsError;

// ============================================================================
// Axis Specifier
// ============================================================================

/// Axes along which a statistic is reduced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Axes {
    /// Reduce the whole array to a scalar.
    #[default]
    All,

    /// Reduce only the listed axes, keeping each as a size-1 dimension.
    Only(Vec<usize>),
}

impl Axes {
    /// Returns `true` if the whole array is reduced.
    #[inline]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Check the axes against an array of `ndim` dimensions.
    ///
    /// Returns `None` for [`Axes::All`] and the validated axis list otherwise.
    pub fn resolve(&self, ndim: usize) -> Result<Option<&[usize]>, StatsError> {
        match self {
            Self::All => Ok(None),
            Self::Only(axes) => {
                for (i, &axis) in axes.iter().enumerate() {
                    if axis >= ndim {
                        return Err(StatsError::InvalidAxis { axis, ndim });
                    }
                    if axes[..i].contains(&axis) {
                        return Err(StatsError::DuplicateAxis(axis));
                    }
                }
                Ok(Some(axes.as_slice()))
            }
        }
    }
}

impl From<usize> for Axes {
    fn from(axis: usize) -> Self {
        Self::Only(vec![axis])
    }
}

impl From<Option<usize>> for Axes {
    fn from(axis: Option<usize>) -> Self {
        axis.map_or(Self::All, Self::from)
    }
}

impl From<Vec<usize>> for Axes {
    fn from(axes: Vec<usize>) -> Self {
        Self::Only(axes)
    }
}

impl From<&[usize]> for Axes {
    fn from(axes: &[usize]) -> Self {
        Self::Only(axes.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Axes {
    fn from(axes: [usize; N]) -> Self {
        Self::Only(axes.to_vec())
    }
}

// ============================================================================
// Reductions
// ============================================================================

/// Sum an array over `axes`, keeping reduced axes as size 1.
///
/// `None` sums every element into a 0-dimensional array.
pub fn sum_keepdims<T: Float>(a: &ArrayViewD<'_, T>, axes: Option<&[usize]>) -> ArrayD<T> {
    match axes {
        None => ArrayD::from_elem(IxDyn(&[]), a.sum()),
        Some(axes) => {
            let mut out = a.to_owned();
            for &axis in axes {
                out = out.sum_axis(Axis(axis)).insert_axis(Axis(axis));
            }
            out
        }
    }
}

/// Extract the single element of a 0-d (or size-1) result.
///
/// Returns `None` when the array holds more than one element.
#[inline]
pub fn as_scalar<T: Copy>(a: &ArrayD<T>) -> Option<T> {
    if a.len() == 1 {
        a.iter().next().copied()
    } else {
        None
    }
}
