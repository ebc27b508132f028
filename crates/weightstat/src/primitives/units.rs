//! Unit-tagged quantities.
//!
//! ## Purpose
//!
//! Physical data (wavelengths in Angstrom, flux densities, velocities) often
//! travel with a unit. This module pairs an array of magnitudes with a unit
//! tag so that derived statistics report the right unit: a moment of order
//! `k` carries `unit^k`, while weight units cancel in every normalized
//! average.
//!
//! ## Design notes
//!
//! * **Generic**: Any type implementing [`Unit`] can tag a [`Quantity`].
//!   `()` is the dimensionless tag; [`SymbolicUnit`] tracks products of named
//!   base units with integer exponents at run time.
//! * **No conversion**: Tags are never rescaled. Conversions between unit
//!   systems belong to the caller.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::BTreeMap, string::String, vec::Vec};

// External dependencies
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::Mul;
use ndarray::{Array1, ArrayD, ArrayViewD};
use num_traits::Float;

// Internal dependencies
use crate::primitives::axes::as_scalar;
use crate::primitives::input::StatsInput;

// ============================================================================
// Unit Trait
// ============================================================================

/// A unit tag that can be raised to integer powers.
pub trait Unit: Clone + PartialEq + Debug {
    /// The tag of a dimensionless quantity.
    fn dimensionless() -> Self;

    /// Raise the unit to an integer power.
    fn powi(&self, exp: i32) -> Self;
}

impl Unit for () {
    fn dimensionless() -> Self {}

    fn powi(&self, _exp: i32) -> Self {}
}

// ============================================================================
// Symbolic Unit
// ============================================================================

/// Product of named base units with integer exponents, e.g. `erg s^-1 cm^-2`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolicUnit {
    terms: BTreeMap<String, i32>,
}

impl SymbolicUnit {
    /// A single base unit with exponent 1.
    pub fn new(symbol: &str) -> Self {
        let mut terms = BTreeMap::new();
        terms.insert(String::from(symbol), 1);
        Self { terms }
    }

    /// Exponent of `symbol` in this unit (0 if absent).
    pub fn exponent(&self, symbol: &str) -> i32 {
        self.terms.get(symbol).copied().unwrap_or(0)
    }

    /// Returns `true` if every exponent cancelled.
    pub fn is_dimensionless(&self) -> bool {
        self.terms.is_empty()
    }

    fn combine(mut self, other: &Self) -> Self {
        for (symbol, &exp) in &other.terms {
            let entry = self.terms.entry(symbol.clone()).or_insert(0);
            *entry += exp;
            if *entry == 0 {
                self.terms.remove(symbol);
            }
        }
        self
    }
}

impl Unit for SymbolicUnit {
    fn dimensionless() -> Self {
        Self::default()
    }

    fn powi(&self, exp: i32) -> Self {
        if exp == 0 {
            return Self::default();
        }
        let terms = self
            .terms
            .iter()
            .map(|(symbol, &e)| (symbol.clone(), e * exp))
            .collect();
        Self { terms }
    }
}

impl Mul for SymbolicUnit {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.combine(&rhs)
    }
}

impl Mul<&SymbolicUnit> for &SymbolicUnit {
    type Output = SymbolicUnit;

    fn mul(self, rhs: &SymbolicUnit) -> SymbolicUnit {
        self.clone().combine(rhs)
    }
}

impl Display for SymbolicUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (symbol, exp) in &self.terms {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            if *exp == 1 {
                write!(f, "{symbol}")?;
            } else {
                write!(f, "{symbol}^{exp}")?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Quantity
// ============================================================================

/// An array of magnitudes tagged with a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity<T, U = ()> {
    /// Magnitudes.
    pub value: ArrayD<T>,

    /// Unit shared by every element.
    pub unit: U,
}

impl<T: Float, U: Unit> Quantity<T, U> {
    /// Tag an array with a unit.
    pub fn new(value: ArrayD<T>, unit: U) -> Self {
        Self { value, unit }
    }

    /// Tag a 1-D vector with a unit.
    pub fn from_vec(value: Vec<T>, unit: U) -> Self {
        Self {
            value: Array1::from(value).into_dyn(),
            unit,
        }
    }

    /// Borrow the magnitudes.
    pub fn view(&self) -> ArrayViewD<'_, T> {
        self.value.view()
    }

    /// Single magnitude of a 0-d (or size-1) quantity.
    pub fn scalar(&self) -> Option<T> {
        as_scalar(&self.value)
    }
}

impl<T: Float, U> StatsInput<T> for Quantity<T, U> {
    fn as_stats_view(&self) -> ArrayViewD<'_, T> {
        self.value.view()
    }
}
