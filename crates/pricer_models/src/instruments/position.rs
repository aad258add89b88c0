//! Position records.
//!
//! A [`Position`] is a tagged union keyed by the `type` field of its record:
//!
//! ```json
//! {"type": "stock",  "symbol": "AAPL", "quantity": 10, "price": 190.0}
//! {"type": "option", "S": 40, "K": 40, "T": 0.25, "r": 0.03, "sigma": 0.2,
//!  "option_type": "call", "quantity": 5}
//! {"type": "bond",   "face_value": 1000, "coupon_rate": 0.05,
//!  "years_to_maturity": 2, "yield_to_maturity": 0.05, "quantity": 3}
//! ```
//!
//! Every variant may also carry `current_price`, `purchase_price` and an
//! opaque `id`. Optional numeric fields with documented defaults are read
//! through exactly one accessor each.

use pricer_core::types::{PricingError, PricingResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::InstrumentError;
use super::payoff::OptionType;

/// Rate assumed for Greeks aggregation when an option carries no `r`.
pub const DEFAULT_GREEKS_RATE: f64 = 0.05;

/// Coupon frequency assumed when a bond carries no `periods_per_year`.
pub const DEFAULT_PERIODS_PER_YEAR: u32 = 2;

/// Cash equity holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPosition {
    /// Ticker or other identifier
    pub symbol: String,
    /// Number of shares
    pub quantity: f64,
    /// Last price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Mark price for P&L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    /// Cost price for P&L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    /// Opaque caller identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl StockPosition {
    /// Create a stock position with a last price.
    pub fn new(symbol: impl Into<String>, quantity: f64, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            price: Some(price),
            current_price: None,
            purchase_price: None,
            id: None,
        }
    }
}

/// European option holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionPosition {
    /// Underlying spot price
    #[serde(rename = "S")]
    pub spot: f64,
    /// Strike price
    #[serde(rename = "K")]
    pub strike: f64,
    /// Time to expiry in years
    #[serde(rename = "T")]
    pub expiry: f64,
    /// Risk-free rate
    #[serde(rename = "r", default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    /// Volatility
    pub sigma: f64,
    /// Call or put
    pub option_type: OptionType,
    /// Number of contracts
    pub quantity: f64,
    /// Mark price for P&L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    /// Cost price for P&L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    /// Opaque caller identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl OptionPosition {
    /// Create an option position without a rate.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        sigma: f64,
        option_type: OptionType,
        quantity: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate: None,
            sigma,
            option_type,
            quantity,
            current_price: None,
            purchase_price: None,
            id: None,
        }
    }

    /// Set the risk-free rate.
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Rate used by Greeks aggregation: `r`, or [`DEFAULT_GREEKS_RATE`].
    ///
    /// This is the only place the default applies.
    #[inline]
    pub fn rate_for_greeks(&self) -> f64 {
        self.rate.unwrap_or(DEFAULT_GREEKS_RATE)
    }

    /// Rate required for valuation.
    ///
    /// # Errors
    /// `InstrumentError::MissingField` if `r` is absent.
    pub fn required_rate(&self) -> Result<f64, InstrumentError> {
        self.rate.ok_or(InstrumentError::MissingField {
            position_type: "option",
            field: "r",
        })
    }

    /// True when `S`, `K` and `T` are all strictly positive.
    #[inline]
    pub fn has_positive_terms(&self) -> bool {
        self.spot > 0.0 && self.strike > 0.0 && self.expiry > 0.0
    }
}

/// How a bond is discounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BondDiscounting<'a> {
    /// Flat yield to maturity
    FlatYield(f64),
    /// Named curve plus continuous spread
    Curve {
        /// Curve reference
        curve_ref: &'a str,
        /// Continuous spread over the curve
        spread: f64,
    },
}

/// Fixed-rate bullet bond holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondPosition {
    /// Face value per bond
    pub face_value: f64,
    /// Annual coupon rate
    pub coupon_rate: f64,
    /// Time to maturity in years
    pub years_to_maturity: f64,
    /// Flat yield, for yield-priced bonds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield_to_maturity: Option<f64>,
    /// Curve name, for curve-priced bonds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve_ref: Option<String>,
    /// Coupon frequency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periods_per_year: Option<u32>,
    /// Number of bonds
    pub quantity: f64,
    /// Continuous spread over the referenced curve
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    /// Mark price for P&L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    /// Cost price for P&L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    /// Opaque caller identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl BondPosition {
    /// Create a yield-priced bond position.
    pub fn flat(
        face_value: f64,
        coupon_rate: f64,
        years_to_maturity: f64,
        yield_to_maturity: f64,
        quantity: f64,
    ) -> Self {
        Self {
            face_value,
            coupon_rate,
            years_to_maturity,
            yield_to_maturity: Some(yield_to_maturity),
            curve_ref: None,
            periods_per_year: None,
            quantity,
            spread: None,
            current_price: None,
            purchase_price: None,
            id: None,
        }
    }

    /// Create a curve-priced bond position.
    pub fn on_curve(
        face_value: f64,
        coupon_rate: f64,
        years_to_maturity: f64,
        curve_ref: impl Into<String>,
        quantity: f64,
    ) -> Self {
        Self {
            yield_to_maturity: None,
            curve_ref: Some(curve_ref.into()),
            ..Self::flat(face_value, coupon_rate, years_to_maturity, 0.0, quantity)
        }
    }

    /// Set the coupon frequency.
    pub fn with_periods_per_year(mut self, periods_per_year: u32) -> Self {
        self.periods_per_year = Some(periods_per_year);
        self
    }

    /// Coupon frequency: `periods_per_year`, or [`DEFAULT_PERIODS_PER_YEAR`].
    #[inline]
    pub fn periods_per_year(&self) -> u32 {
        self.periods_per_year.unwrap_or(DEFAULT_PERIODS_PER_YEAR)
    }

    /// Resolve how this bond is discounted.
    ///
    /// # Errors
    /// - `InstrumentError::MissingField` if neither `yield_to_maturity` nor
    ///   `curve_ref` is present
    /// - `InstrumentError::InvalidParameter` if both are present
    pub fn discounting(&self) -> Result<BondDiscounting<'_>, InstrumentError> {
        match (&self.yield_to_maturity, &self.curve_ref) {
            (Some(y), None) => Ok(BondDiscounting::FlatYield(*y)),
            (None, Some(name)) => Ok(BondDiscounting::Curve {
                curve_ref: name.as_str(),
                spread: self.spread.unwrap_or(0.0),
            }),
            (Some(_), Some(_)) => Err(InstrumentError::InvalidParameter {
                message: "bond position sets both yield_to_maturity and curve_ref".to_string(),
            }),
            (None, None) => Err(InstrumentError::MissingField {
                position_type: "bond",
                field: "yield_to_maturity",
            }),
        }
    }
}

/// A single holding.
///
/// # Examples
/// ```
/// use pricer_models::instruments::Position;
/// use serde_json::json;
///
/// let pos = Position::from_record(json!({
///     "type": "stock", "symbol": "ACME", "quantity": 10, "price": 50.0,
///     "purchase_price": 45.0
/// }))
/// .unwrap();
///
/// assert_eq!(pos.kind(), "stock");
/// assert_eq!(pos.mark_price(), 50.0);
/// assert_eq!(pos.cost_price(), 45.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Position {
    /// Cash equity
    Stock(StockPosition),
    /// European option
    Option(OptionPosition),
    /// Fixed-rate bond
    Bond(BondPosition),
}

impl Position {
    /// Map a plain key-value record onto a position.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` for an unknown `type` or `option_type`,
    /// a missing required field, or a wrongly typed field.
    pub fn from_record(record: Value) -> PricingResult<Self> {
        serde_json::from_value(record).map_err(|e| {
            PricingError::from(InstrumentError::InvalidRecord {
                message: e.to_string(),
            })
        })
    }

    /// Wire name of the position type.
    pub fn kind(&self) -> &'static str {
        match self {
            Position::Stock(_) => "stock",
            Position::Option(_) => "option",
            Position::Bond(_) => "bond",
        }
    }

    /// Held quantity.
    #[inline]
    pub fn quantity(&self) -> f64 {
        match self {
            Position::Stock(s) => s.quantity,
            Position::Option(o) => o.quantity,
            Position::Bond(b) => b.quantity,
        }
    }

    /// Caller identifier, if any.
    pub fn id(&self) -> Option<&str> {
        match self {
            Position::Stock(s) => s.id.as_deref(),
            Position::Option(o) => o.id.as_deref(),
            Position::Bond(b) => b.id.as_deref(),
        }
    }

    /// Mark price for P&L: `current_price`, else `price`, else `0`.
    ///
    /// Only stocks carry a `price` field.
    pub fn mark_price(&self) -> f64 {
        let mark = match self {
            Position::Stock(s) => s.current_price.or(s.price),
            Position::Option(o) => o.current_price,
            Position::Bond(b) => b.current_price,
        };
        mark.unwrap_or(0.0)
    }

    /// Cost price for P&L: `purchase_price`, else the mark price.
    pub fn cost_price(&self) -> f64 {
        let purchase = match self {
            Position::Stock(s) => s.purchase_price,
            Position::Option(o) => o.purchase_price,
            Position::Bond(b) => b.purchase_price,
        };
        purchase.unwrap_or_else(|| self.mark_price())
    }

    /// Set both P&L marks.
    pub fn with_marks(mut self, current_price: Option<f64>, purchase_price: Option<f64>) -> Self {
        let (current, purchase) = match &mut self {
            Position::Stock(s) => (&mut s.current_price, &mut s.purchase_price),
            Position::Option(o) => (&mut o.current_price, &mut o.purchase_price),
            Position::Bond(b) => (&mut b.current_price, &mut b.purchase_price),
        };
        *current = current_price;
        *purchase = purchase_price;
        self
    }

    /// Mutable access to the P&L mark price.
    pub fn current_price_mut(&mut self) -> &mut Option<f64> {
        match self {
            Position::Stock(s) => &mut s.current_price,
            Position::Option(o) => &mut o.current_price,
            Position::Bond(b) => &mut b.current_price,
        }
    }
}

impl From<StockPosition> for Position {
    fn from(p: StockPosition) -> Self {
        Position::Stock(p)
    }
}

impl From<OptionPosition> for Position {
    fn from(p: OptionPosition) -> Self {
        Position::Option(p)
    }
}

impl From<BondPosition> for Position {
    fn from(p: BondPosition) -> Self {
        Position::Bond(p)
    }
}
