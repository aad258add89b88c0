//! Market valuation of positions.
//!
//! Stocks are worth `quantity · mark_price`, options `quantity · Black-Scholes
//! price` and bonds `quantity · PV`, with bond PV taken from a flat yield or
//! from a named curve in the [`ValuationContext`].

use pricer_core::market_data::{Curve, CurveSet};
use pricer_core::types::{Precision, PricingResult};
use pricer_models::analytical::black_scholes;
use pricer_models::analytical::bond::bond_pv;
use pricer_models::analytical::price_bond_on_curve_with_spread;
use pricer_models::instruments::{BondDiscounting, BondPosition, OptionPosition, Position};
use tracing::warn;

use crate::error::RiskError;
use crate::parallel::{try_ordered_map, ParallelConfig};

/// Market data needed to value a portfolio.
///
/// Holds the named curves that curve-referenced bonds resolve against.
#[derive(Debug, Clone, Default)]
pub struct ValuationContext {
    curves: CurveSet,
}

impl ValuationContext {
    /// Context with no curves.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context over an existing curve set.
    pub fn from_curves(curves: CurveSet) -> Self {
        Self { curves }
    }

    /// Add a named curve.
    pub fn with_curve(mut self, name: impl Into<String>, curve: Curve) -> Self {
        self.curves.insert(name, curve);
        self
    }

    /// Named curves.
    pub fn curves(&self) -> &CurveSet {
        &self.curves
    }

    fn curve(&self, curve_ref: &str) -> Result<&Curve, RiskError> {
        self.curves.get(curve_ref).ok_or_else(|| RiskError::UnknownCurve {
            curve_ref: curve_ref.to_string(),
        })
    }
}

fn option_value(index: usize, option: &OptionPosition) -> PricingResult<f64> {
    if option.spot <= 0.0 || option.strike <= 0.0 {
        warn!(
            index,
            spot = option.spot,
            strike = option.strike,
            "skipping option with non-positive spot or strike in valuation"
        );
        return Ok(0.0);
    }
    let rate = option.required_rate()?;
    let unit = black_scholes::price(
        option.spot,
        option.strike,
        option.expiry,
        rate,
        option.sigma,
        option.option_type,
    )?;
    Ok(option.quantity * unit)
}

fn bond_value(bond: &BondPosition, ctx: &ValuationContext) -> PricingResult<f64> {
    let ppy = bond.periods_per_year();
    let unit = match bond.discounting()? {
        BondDiscounting::FlatYield(ytm) => bond_pv(
            bond.coupon_rate,
            bond.face_value,
            bond.years_to_maturity,
            ytm,
            ppy,
        )?,
        BondDiscounting::Curve { curve_ref, spread } => price_bond_on_curve_with_spread(
            ctx.curve(curve_ref)?,
            bond.face_value,
            bond.coupon_rate,
            bond.years_to_maturity,
            ppy,
            spread,
        )?,
    };
    Ok(bond.quantity * unit)
}

fn value_at(index: usize, position: &Position, ctx: &ValuationContext) -> PricingResult<f64> {
    let raw = match position {
        Position::Stock(stock) => stock.quantity * position.mark_price(),
        Position::Option(option) => option_value(index, option)?,
        Position::Bond(bond) => bond_value(bond, ctx)?,
    };
    Precision::PRICING.finish(raw, "position value")
}

/// Market value of one position, rounded to 8 decimals.
///
/// Options with a non-positive spot or strike are worth `0` and logged.
///
/// # Errors
///
/// - `PricingError::InvalidInput` for an option without `r`, a bond with no
///   or conflicting discounting, an unknown `curve_ref`, or invalid pricer
///   inputs
/// - `PricingError::DegenerateMath` from the underlying pricers
pub fn position_value(position: &Position, ctx: &ValuationContext) -> PricingResult<f64> {
    value_at(0, position, ctx)
}

/// Per-position values in input order.
///
/// Work is spread over the rayon pool when `config` allows.
///
/// # Errors
/// The first failing position's error, as in [`position_value`].
pub fn position_values(
    positions: &[Position],
    ctx: &ValuationContext,
    config: &ParallelConfig,
) -> PricingResult<Vec<f64>> {
    let indexed: Vec<(usize, &Position)> = positions.iter().enumerate().collect();
    try_ordered_map(&indexed, config, |(index, position)| {
        value_at(*index, position, ctx)
    })
}

/// Total market value, summed in input order and rounded to 8 decimals.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::{BondPosition, Position, StockPosition};
/// use pricer_risk::portfolio::{portfolio_value, ValuationContext};
///
/// let positions: Vec<Position> = vec![
///     StockPosition::new("ACME", 10.0, 50.0).into(),
///     BondPosition::flat(1000.0, 0.05, 2.0, 0.05, 2.0).into(),
/// ];
/// let value = portfolio_value(&positions, &ValuationContext::new()).unwrap();
/// assert_eq!(value, 2500.0);
/// ```
///
/// # Errors
/// As in [`position_value`].
pub fn portfolio_value(positions: &[Position], ctx: &ValuationContext) -> PricingResult<f64> {
    PortfolioValuator::default().value(positions, ctx)
}

/// Portfolio valuation with a parallel execution policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortfolioValuator {
    parallel: ParallelConfig,
}

impl PortfolioValuator {
    /// Create a valuator with the given parallel policy.
    pub fn new(parallel: ParallelConfig) -> Self {
        Self { parallel }
    }

    /// Parallel policy in use.
    pub fn parallel_config(&self) -> &ParallelConfig {
        &self.parallel
    }

    /// Total market value.
    ///
    /// # Errors
    /// As in [`position_value`].
    pub fn value(&self, positions: &[Position], ctx: &ValuationContext) -> PricingResult<f64> {
        let values = position_values(positions, ctx, &self.parallel)?;
        let total: f64 = values.iter().sum();
        Precision::PRICING.finish(total, "portfolio value")
    }
}
