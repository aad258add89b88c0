//! Named curve registry.
//!
//! This module provides:
//! - [`CurveSet`]: Curves keyed by the reference string a bond position names
//!   in its `curve_ref` field

use super::Curve;
use crate::market_data::error::MarketDataError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Container for curves addressed by name.
///
/// Iteration order is the sorted name order, so anything derived from a
/// `CurveSet` is reproducible.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::{Curve, CurvePoint, CurveSet};
///
/// let mut curves = CurveSet::new();
/// curves.insert("USD", Curve::new(vec![CurvePoint::new(1.0, 0.03, 0.970874)]).unwrap());
///
/// let usd = curves.get_or_err("USD").unwrap();
/// assert_eq!(usd.discount_factor(1.0).unwrap(), 0.970874);
/// assert!(curves.get_or_err("EUR").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurveSet {
    curves: BTreeMap<String, Curve>,
}

impl CurveSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a curve, replacing any curve with the same name.
    pub fn insert(&mut self, name: impl Into<String>, curve: Curve) -> Option<Curve> {
        self.curves.insert(name.into(), curve)
    }

    /// Get a curve by name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Curve> {
        self.curves.get(name)
    }

    /// Get a curve by name, returning an error if not found.
    ///
    /// # Errors
    /// `MarketDataError::CurveNotFound` if no curve with that name exists.
    pub fn get_or_err(&self, name: &str) -> Result<&Curve, MarketDataError> {
        self.curves
            .get(name)
            .ok_or_else(|| MarketDataError::CurveNotFound {
                name: name.to_string(),
            })
    }

    /// Check if a curve with the given name exists.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.curves.contains_key(name)
    }

    /// Number of registered curves.
    #[inline]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// True when no curve is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Iterate over `(name, curve)` in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Curve)> {
        self.curves.iter().map(|(k, v)| (k.as_str(), v))
    }
}
