//! Named stress presets.
//!
//! The catalog is fixed at compile time. Each preset hashes its canonical
//! JSON form, so the hash identifies the exact shock vector used for a run.

use pricer_core::hashing::content_hash;
use pricer_core::types::PricingResult;
use pricer_models::instruments::{BondDiscounting, Position};
use serde::Serialize;

use crate::error::RiskError;

/// Shock vector of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StressShocks {
    /// Parallel rate move in basis points
    pub rate_bp: f64,
    /// Relative volatility move in percent
    pub vol_pct: f64,
    /// Relative equity price move in percent
    pub equity_pct: f64,
    /// Credit spread move in basis points
    pub credit_spread_bp: f64,
}

impl StressShocks {
    const fn new(rate_bp: f64, vol_pct: f64, equity_pct: f64, credit_spread_bp: f64) -> Self {
        Self {
            rate_bp,
            vol_pct,
            equity_pct,
            credit_spread_bp,
        }
    }

    /// Yield or spread shift applied to bonds, in decimal.
    #[inline]
    pub fn bond_shift(&self) -> f64 {
        (self.rate_bp + self.credit_spread_bp) / 10_000.0
    }

    #[inline]
    fn equity_factor(&self) -> f64 {
        1.0 + self.equity_pct / 100.0
    }

    #[inline]
    fn vol_factor(&self) -> f64 {
        1.0 + self.vol_pct / 100.0
    }
}

/// Immutable catalog entry.
///
/// # Examples
///
/// ```
/// use pricer_risk::scenarios::StressPreset;
///
/// let preset = StressPreset::find("rates_up_200bp").unwrap();
/// assert_eq!(preset.shocks.rate_bp, 200.0);
/// assert_eq!(preset.hash().unwrap(), preset.hash().unwrap());
/// assert!(StressPreset::find("asteroid").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StressPreset {
    /// Stable identifier
    pub preset_id: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Shock vector
    pub shocks: StressShocks,
}

const CATALOG: [StressPreset; 9] = [
    StressPreset {
        preset_id: "rates_up_100bp",
        label: "Rates +100bp",
        shocks: StressShocks::new(100.0, 0.0, 0.0, 0.0),
    },
    StressPreset {
        preset_id: "rates_up_200bp",
        label: "Rates +200bp",
        shocks: StressShocks::new(200.0, 0.0, 0.0, 0.0),
    },
    StressPreset {
        preset_id: "rates_down_100bp",
        label: "Rates -100bp",
        shocks: StressShocks::new(-100.0, 0.0, 0.0, 0.0),
    },
    StressPreset {
        preset_id: "equity_down_10pct",
        label: "Equity -10%",
        shocks: StressShocks::new(0.0, 0.0, -10.0, 0.0),
    },
    StressPreset {
        preset_id: "equity_down_20pct",
        label: "Equity -20%",
        shocks: StressShocks::new(0.0, 0.0, -20.0, 0.0),
    },
    StressPreset {
        preset_id: "vol_up_25pct",
        label: "Volatility +25%",
        shocks: StressShocks::new(0.0, 25.0, 0.0, 0.0),
    },
    StressPreset {
        preset_id: "credit_widen_100bp",
        label: "Credit spreads +100bp",
        shocks: StressShocks::new(0.0, 0.0, 0.0, 100.0),
    },
    StressPreset {
        preset_id: "gfc_2008",
        label: "Global financial crisis 2008",
        shocks: StressShocks::new(-200.0, 150.0, -40.0, 300.0),
    },
    StressPreset {
        preset_id: "covid_2020",
        label: "COVID-19 crash 2020",
        shocks: StressShocks::new(-150.0, 100.0, -30.0, 150.0),
    },
];

impl StressPreset {
    /// Full catalog in a fixed order.
    pub fn catalog() -> &'static [StressPreset] {
        &CATALOG
    }

    /// Look up a preset by id.
    pub fn find(preset_id: &str) -> Option<&'static StressPreset> {
        CATALOG.iter().find(|p| p.preset_id == preset_id)
    }

    /// Look up a preset by id.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` for an id not in the catalog.
    pub fn get(preset_id: &str) -> PricingResult<&'static StressPreset> {
        Self::find(preset_id).ok_or_else(|| {
            RiskError::UnknownPreset {
                preset_id: preset_id.to_string(),
            }
            .into()
        })
    }

    /// SHA-256 of the canonical JSON definition.
    pub fn hash(&self) -> PricingResult<String> {
        content_hash(self)
    }

    /// Apply this preset to a copy of the positions.
    ///
    /// - Stocks: `price` and `current_price` by `equity_pct`
    /// - Options: `S` and `current_price` by `equity_pct`, `sigma` by `vol_pct`
    /// - Bonds: `yield_to_maturity` shifted by `rate_bp + credit_spread_bp`, or
    ///   `spread` for curve-referenced bonds
    ///
    /// # Errors
    /// `PricingError::InvalidInput` for a bond with no or conflicting
    /// discounting.
    pub fn apply(&self, positions: &[Position]) -> PricingResult<Vec<Position>> {
        let equity = self.shocks.equity_factor();
        let vol = self.shocks.vol_factor();
        let shift = self.shocks.bond_shift();

        let mut stressed = positions.to_vec();
        for position in stressed.iter_mut() {
            match position {
                Position::Stock(s) => {
                    if let Some(p) = s.price.as_mut() {
                        *p *= equity;
                    }
                    if let Some(p) = s.current_price.as_mut() {
                        *p *= equity;
                    }
                }
                Position::Option(o) => {
                    o.spot *= equity;
                    if let Some(p) = o.current_price.as_mut() {
                        *p *= equity;
                    }
                    o.sigma *= vol;
                }
                Position::Bond(b) => {
                    if shift == 0.0 {
                        continue;
                    }
                    let on_curve = matches!(b.discounting()?, BondDiscounting::Curve { .. });
                    if on_curve {
                        b.spread = Some(b.spread.unwrap_or(0.0) + shift);
                    } else if let Some(y) = b.yield_to_maturity.as_mut() {
                        *y += shift;
                    }
                }
            }
        }
        Ok(stressed)
    }
}
