//! Input abstractions for weighted statistics.
//!
//! ## Purpose
//!
//! This module lets every statistic accept slices, vectors, `ndarray` arrays
//! of any dimension and unit-tagged quantities through a single trait.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Inputs are exposed as dynamic-dimension views.
//! * **Layout-agnostic**: Non-contiguous arrays are fine, views carry strides.
//!
//! ## Non-goals
//!
//! * This module does not validate values or weights.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use ndarray::{ArrayBase, ArrayView1, ArrayViewD, Data, Dimension};
use num_traits::Float;

/// Types that can be viewed as an N-D array of values or weights.
pub trait StatsInput<T: Float> {
    /// Borrow the input as a dynamic-dimension array view.
    fn as_stats_view(&self) -> ArrayViewD<'_, T>;
}

impl<T: Float> StatsInput<T> for [T] {
    fn as_stats_view(&self) -> ArrayViewD<'_, T> {
        ArrayView1::from(self).into_dyn()
    }
}

impl<T: Float, const N: usize> StatsInput<T> for [T; N] {
    fn as_stats_view(&self) -> ArrayViewD<'_, T> {
        ArrayView1::from(self.as_slice()).into_dyn()
    }
}

impl<T: Float> StatsInput<T> for Vec<T> {
    fn as_stats_view(&self) -> ArrayViewD<'_, T> {
        ArrayView1::from(self.as_slice()).into_dyn()
    }
}

impl<T: Float, S, D> StatsInput<T> for ArrayBase<S, D>
where
    S: Data<Elem = T>,
    D: Dimension,
{
    fn as_stats_view(&self) -> ArrayViewD<'_, T> {
        self.view().into_dyn()
    }
}
