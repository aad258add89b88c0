//! Bootstrap instrument definitions.

use pricer_core::types::{PricingError, PricingResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Coupon frequency assumed when a swap carries no `periods_per_year`.
pub const DEFAULT_SWAP_PERIODS_PER_YEAR: u32 = 2;

/// Longest tenor accepted, in years.
pub const MAX_TENOR_YEARS: f64 = 200.0;

/// Highest swap coupon frequency accepted (daily).
pub const MAX_SWAP_PERIODS_PER_YEAR: u32 = 365;

/// Quote convention of a rates instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentType {
    /// Simple-rate deposit: `df = 1 / (1 + r·t)`
    Deposit,
    /// Par swap with fixed coupons `rate / periods_per_year`
    Swap,
}

/// Market quote for one curve pillar.
///
/// Wire form: `{"type": "deposit" | "swap", "tenor": 2.0, "rate": 0.035,
/// "periods_per_year": 2}`.
///
/// # Examples
///
/// ```
/// use pricer_optimiser::bootstrapping::{InstrumentType, RatesInstrument};
/// use serde_json::json;
///
/// let swap = RatesInstrument::from_record(json!({"type": "swap", "tenor": 5, "rate": 0.04})).unwrap();
/// assert_eq!(swap.instrument_type, InstrumentType::Swap);
/// assert_eq!(swap.periods_per_year(), 2);
///
/// assert!(RatesInstrument::from_record(json!({"type": "fra", "tenor": 1, "rate": 0.03})).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatesInstrument {
    /// Quote convention
    #[serde(rename = "type")]
    pub instrument_type: InstrumentType,
    /// Maturity in years
    pub tenor: f64,
    /// Quoted rate
    pub rate: f64,
    /// Coupon frequency for swaps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periods_per_year: Option<u32>,
}

impl RatesInstrument {
    /// Create a deposit quote.
    pub fn deposit(tenor: f64, rate: f64) -> Self {
        Self {
            instrument_type: InstrumentType::Deposit,
            tenor,
            rate,
            periods_per_year: None,
        }
    }

    /// Create a par swap quote with the default frequency.
    pub fn swap(tenor: f64, rate: f64) -> Self {
        Self {
            instrument_type: InstrumentType::Swap,
            tenor,
            rate,
            periods_per_year: None,
        }
    }

    /// Create a par swap quote with an explicit frequency.
    pub fn swap_with_frequency(tenor: f64, rate: f64, periods_per_year: u32) -> Self {
        Self {
            periods_per_year: Some(periods_per_year),
            ..Self::swap(tenor, rate)
        }
    }

    /// Map a plain key-value record onto an instrument.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` for an unknown `type` or a missing field.
    pub fn from_record(record: Value) -> PricingResult<Self> {
        serde_json::from_value(record)
            .map_err(|e| PricingError::invalid_input(format!("invalid rates instrument: {}", e)))
    }

    /// Map a list of records, failing on the first invalid one.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` naming the offending index.
    pub fn from_records(records: Vec<Value>) -> PricingResult<Vec<Self>> {
        records
            .into_iter()
            .enumerate()
            .map(|(i, r)| {
                Self::from_record(r).map_err(|e| {
                    PricingError::invalid_input(format!("instrument {}: {}", i, e))
                })
            })
            .collect()
    }

    /// Coupon frequency: `periods_per_year`, or [`DEFAULT_SWAP_PERIODS_PER_YEAR`].
    #[inline]
    pub fn periods_per_year(&self) -> u32 {
        self.periods_per_year.unwrap_or(DEFAULT_SWAP_PERIODS_PER_YEAR)
    }

    /// Check tenor, rate and frequency.
    pub fn validate(&self) -> Result<(), String> {
        if !self.tenor.is_finite() || self.tenor <= 0.0 {
            return Err(format!("tenor must be positive and finite, got {}", self.tenor));
        }
        if self.tenor > MAX_TENOR_YEARS {
            return Err(format!(
                "tenor {} exceeds the {} year limit",
                self.tenor, MAX_TENOR_YEARS
            ));
        }
        if !self.rate.is_finite() {
            return Err(format!("rate must be finite, got {}", self.rate));
        }
        if self.instrument_type == InstrumentType::Swap
            && !(1..=MAX_SWAP_PERIODS_PER_YEAR).contains(&self.periods_per_year())
        {
            return Err(format!(
                "periods_per_year must lie in 1..={}, got {}",
                MAX_SWAP_PERIODS_PER_YEAR,
                self.periods_per_year()
            ));
        }
        Ok(())
    }
}
