//! Ad hoc scenario shocks.
//!
//! A shock clones the positions and bumps price, volatility or rate
//! fields. The input slice is never touched.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::{PricingError, PricingResult};
use pricer_models::instruments::Position;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RiskError;

/// Kind of ad hoc shock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ShockType {
    /// Scale `price`, `current_price` and `S`
    Price,
    /// Scale option `sigma`
    Volatility,
    /// Shift option `r`
    Rate,
    /// Any subset of the above, by parameter presence
    Combined,
}

impl ShockType {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShockType::Price => "price",
            ShockType::Volatility => "volatility",
            ShockType::Rate => "rate",
            ShockType::Combined => "combined",
        }
    }
}

impl fmt::Display for ShockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShockType {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(ShockType::Price),
            "volatility" => Ok(ShockType::Volatility),
            "rate" => Ok(ShockType::Rate),
            "combined" => Ok(ShockType::Combined),
            other => Err(RiskError::UnknownShockType {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ShockType {
    type Error = RiskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Shock sizes. Absent fields are not applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShockParameters {
    /// Percent change to price fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_pct: Option<f64>,
    /// Percent change to volatility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vol_change_pct: Option<f64>,
    /// Rate shift in basis points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_change_bps: Option<f64>,
}

/// Ad hoc shock: `{shock_type, parameters}`.
///
/// # Examples
///
/// ```
/// use pricer_risk::scenarios::{ScenarioShock, ShockType};
/// use serde_json::json;
///
/// let shock = ScenarioShock::from_record(json!({
///     "shock_type": "price",
///     "parameters": {"price_change_pct": -10}
/// }))
/// .unwrap();
/// assert_eq!(shock.shock_type, ShockType::Price);
///
/// assert!(ScenarioShock::from_record(json!({"shock_type": "fx"})).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioShock {
    /// Kind of shock
    pub shock_type: ShockType,
    /// Shock sizes
    #[serde(default)]
    pub parameters: ShockParameters,
}

/// Resolved multipliers and shifts.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ShockPlan {
    price_factor: Option<f64>,
    vol_factor: Option<f64>,
    rate_shift: Option<f64>,
}

impl ScenarioShock {
    /// Price shock in percent.
    pub fn price(pct: f64) -> Self {
        Self {
            shock_type: ShockType::Price,
            parameters: ShockParameters {
                price_change_pct: Some(pct),
                ..Default::default()
            },
        }
    }

    /// Volatility shock in percent.
    pub fn volatility(pct: f64) -> Self {
        Self {
            shock_type: ShockType::Volatility,
            parameters: ShockParameters {
                vol_change_pct: Some(pct),
                ..Default::default()
            },
        }
    }

    /// Rate shock in basis points.
    pub fn rate(bps: f64) -> Self {
        Self {
            shock_type: ShockType::Rate,
            parameters: ShockParameters {
                rate_change_bps: Some(bps),
                ..Default::default()
            },
        }
    }

    /// Combined shock applying whichever parameters are present.
    pub fn combined(parameters: ShockParameters) -> Self {
        Self {
            shock_type: ShockType::Combined,
            parameters,
        }
    }

    /// Map a plain key-value record onto a shock.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` for an unknown `shock_type` or malformed
    /// parameters.
    pub fn from_record(record: Value) -> PricingResult<Self> {
        serde_json::from_value(record)
            .map_err(|e| PricingError::invalid_input(format!("invalid scenario shock: {}", e)))
    }

    fn plan(&self) -> Result<ShockPlan, RiskError> {
        let p = &self.parameters;
        let require = |value: Option<f64>, parameter: &'static str| {
            value.ok_or(RiskError::MissingShockParameter {
                shock_type: self.shock_type.as_str(),
                parameter,
            })
        };

        let (price, vol, rate) = match self.shock_type {
            ShockType::Price => (Some(require(p.price_change_pct, "price_change_pct")?), None, None),
            ShockType::Volatility => (None, Some(require(p.vol_change_pct, "vol_change_pct")?), None),
            ShockType::Rate => (None, None, Some(require(p.rate_change_bps, "rate_change_bps")?)),
            ShockType::Combined => (p.price_change_pct, p.vol_change_pct, p.rate_change_bps),
        };

        let price = price
            .map(|v| RiskError::check_finite("price_change_pct", v))
            .transpose()?;
        let vol = vol
            .map(|v| RiskError::check_finite("vol_change_pct", v))
            .transpose()?;
        let rate = rate
            .map(|v| RiskError::check_finite("rate_change_bps", v))
            .transpose()?;

        Ok(ShockPlan {
            price_factor: price.map(|pct| 1.0 + pct / 100.0),
            vol_factor: vol.map(|pct| 1.0 + pct / 100.0),
            rate_shift: rate.map(|bps| bps / 10_000.0),
        })
    }
}

fn scale(field: &mut Option<f64>, factor: f64) {
    if let Some(v) = field.as_mut() {
        *v *= factor;
    }
}

/// Apply a shock to a copy of the positions.
///
/// - `price`: `price`, `current_price` and `S` × `(1 + pct/100)`
/// - `volatility`: `sigma` × `(1 + pct/100)`
/// - `rate`: `r += bps/10000`; an absent `r` stays absent
/// - `combined`: each of the above whose parameter is present
///
/// # Errors
/// `PricingError::InvalidInput` if a single-type shock lacks its parameter
/// or a parameter is not finite.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::{Position, StockPosition};
/// use pricer_risk::scenarios::{apply_shock, ScenarioShock};
///
/// let book: Vec<Position> = vec![StockPosition::new("ACME", 1.0, 100.0).into()];
/// let shocked = apply_shock(&book, &ScenarioShock::price(-10.0)).unwrap();
/// assert_eq!(shocked[0].mark_price(), 90.0);
/// assert_eq!(book[0].mark_price(), 100.0);
/// ```
pub fn apply_shock(positions: &[Position], shock: &ScenarioShock) -> PricingResult<Vec<Position>> {
    let plan = shock.plan()?;
    let mut shocked = positions.to_vec();

    for position in shocked.iter_mut() {
        if let Some(factor) = plan.price_factor {
            scale(position.current_price_mut(), factor);
            match position {
                Position::Stock(s) => scale(&mut s.price, factor),
                Position::Option(o) => o.spot *= factor,
                Position::Bond(_) => {}
            }
        }
        if let Position::Option(o) = position {
            if let Some(factor) = plan.vol_factor {
                o.sigma *= factor;
            }
            if let (Some(shift), Some(r)) = (plan.rate_shift, o.rate.as_mut()) {
                *r += shift;
            }
        }
    }
    Ok(shocked)
}
