//! Ordered collection of positions.

use pricer_core::hashing::content_hash;
use pricer_core::types::{PricingError, PricingResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::error::InstrumentError;
use super::position::Position;

/// Positions plus opaque caller metadata.
///
/// Position order is preserved end to end: it does not change any sum, but
/// it is part of the content hash.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{Portfolio, StockPosition};
///
/// let portfolio = Portfolio::new(vec![StockPosition::new("ACME", 10.0, 50.0).into()]);
/// assert_eq!(portfolio.len(), 1);
/// assert_eq!(portfolio.content_hash().unwrap().len(), 64);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Holdings in caller order
    pub positions: Vec<Position>,
    /// Opaque metadata, carried through untouched
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
}

impl Portfolio {
    /// Create a portfolio without metadata.
    pub fn new(positions: Vec<Position>) -> Self {
        Self {
            positions,
            metadata: BTreeMap::new(),
        }
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Map a record onto a portfolio.
    ///
    /// Accepts either `{"positions": [...], "metadata": {...}}` or a bare
    /// array of position records.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` if any position record is invalid.
    pub fn from_record(record: Value) -> PricingResult<Self> {
        let record = match record {
            Value::Array(items) => {
                let mut wrapped = serde_json::Map::new();
                wrapped.insert("positions".to_string(), Value::Array(items));
                Value::Object(wrapped)
            }
            other => other,
        };
        serde_json::from_value(record).map_err(|e| {
            PricingError::from(InstrumentError::InvalidRecord {
                message: e.to_string(),
            })
        })
    }

    /// Number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the portfolio holds no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate positions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }

    /// SHA-256 of the canonical JSON form (positions and metadata).
    ///
    /// # Errors
    /// `PricingError::InvalidInput` if metadata cannot be rendered as JSON.
    pub fn content_hash(&self) -> PricingResult<String> {
        content_hash(self)
    }
}
