//! Greeks and P&L aggregation for portfolio-level risk metrics.

use pricer_core::types::{Precision, PricingResult};
use pricer_models::analytical::{black_scholes, Greeks};
use pricer_models::instruments::{OptionPosition, Position};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Portfolio P&L: `Σ (mark_price - cost_price) · quantity`, rounded to 8
/// decimals.
///
/// Mark and cost prices follow [`Position::mark_price`] and
/// [`Position::cost_price`].
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::{Position, StockPosition};
/// use pricer_risk::portfolio::pnl;
///
/// let held: Position = StockPosition::new("ACME", 10.0, 50.0)
///     .into();
/// let held = held.with_marks(Some(55.0), Some(50.0));
/// assert_eq!(pnl(&[held]).unwrap(), 50.0);
/// assert_eq!(pnl(&[]).unwrap(), 0.0);
/// ```
pub fn pnl(positions: &[Position]) -> PricingResult<f64> {
    let total: f64 = positions
        .iter()
        .map(|p| (p.mark_price() - p.cost_price()) * p.quantity())
        .sum();
    Precision::PRICING.finish(total, "portfolio pnl")
}

/// Sum of quantity-weighted option Greeks, rounded to 8 decimals.
///
/// Stocks and bonds contribute zero. Options with a non-positive `S`, `K`
/// or `T` are skipped. A missing `r` uses
/// [`OptionPosition::rate_for_greeks`].
///
/// # Errors
/// `PricingError::InvalidInput` if an included option has a negative or
/// non-finite volatility.
pub fn aggregate_greeks(positions: &[Position]) -> PricingResult<Greeks> {
    Ok(GreeksAggregator::new().aggregate(positions)?.totals)
}

/// Greeks of one included position, already multiplied by quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionGreeks {
    /// Index in the caller's list
    pub index: usize,
    /// Held quantity
    pub quantity: f64,
    /// Quantity-weighted Greeks
    pub greeks: Greeks,
}

/// Portfolio-level Greeks with bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioGreeks {
    /// Rounded totals
    pub totals: Greeks,
    /// Per-option contributions: rounded unit Greeks times quantity
    pub contributions: Vec<PositionGreeks>,
    /// Indices of options left out for non-positive terms
    pub skipped: Vec<usize>,
}

/// Aggregator for option Greeks.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::{OptionPosition, OptionType, Position};
/// use pricer_risk::portfolio::GreeksAggregator;
///
/// let positions: Vec<Position> = vec![
///     OptionPosition::new(40.0, 40.0, 0.25, 0.2, OptionType::Call, 2.0).with_rate(0.03).into(),
///     OptionPosition::new(40.0, 0.0, 0.25, 0.2, OptionType::Call, 1.0).into(),
/// ];
///
/// let result = GreeksAggregator::new().aggregate(&positions).unwrap();
/// assert_eq!(result.contributions.len(), 1);
/// assert_eq!(result.skipped, vec![1]);
/// assert_eq!(result.totals.delta, 1.09947644);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GreeksAggregator {
    precision: Precision,
}

impl Default for GreeksAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl GreeksAggregator {
    /// Create an aggregator rounding to pricing precision.
    pub fn new() -> Self {
        Self {
            precision: Precision::PRICING,
        }
    }

    /// Greeks of one option times its quantity, or `None` if skipped.
    fn option_contribution(option: &OptionPosition) -> PricingResult<Option<Greeks>> {
        if !option.has_positive_terms() {
            return Ok(None);
        }
        let unit = black_scholes::greeks(
            option.spot,
            option.strike,
            option.expiry,
            option.rate_for_greeks(),
            option.sigma,
            option.option_type,
        )?;
        Ok(Some(unit.scaled(option.quantity)))
    }

    /// Aggregate Greeks across positions.
    ///
    /// # Errors
    /// See [`aggregate_greeks`].
    pub fn aggregate(&self, positions: &[Position]) -> PricingResult<PortfolioGreeks> {
        let mut raw = Greeks::zero();
        let mut contributions = Vec::new();
        let mut skipped = Vec::new();

        for (index, position) in positions.iter().enumerate() {
            let Position::Option(option) = position else {
                continue;
            };
            match Self::option_contribution(option)? {
                Some(greeks) => {
                    raw += greeks;
                    contributions.push(PositionGreeks {
                        index,
                        quantity: option.quantity,
                        greeks,
                    });
                }
                None => {
                    warn!(
                        index,
                        spot = option.spot,
                        strike = option.strike,
                        expiry = option.expiry,
                        "skipping option with non-positive terms in Greeks aggregation"
                    );
                    skipped.push(index);
                }
            }
        }

        Ok(PortfolioGreeks {
            totals: raw.finish(self.precision)?,
            contributions,
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::instruments::{BondPosition, OptionType, StockPosition};

    fn call() -> OptionPosition {
        OptionPosition::new(40.0, 40.0, 0.25, 0.2, OptionType::Call, 1.0).with_rate(0.03)
    }

    // ========================================
    // P&L Tests
    // ========================================

    #[test]
    fn test_pnl_empty() {
        assert_eq!(pnl(&[]).unwrap(), 0.0);
    }

    #[test]
    fn test_pnl_mixed_marks() {
        let stock: Position = StockPosition::new("A", 10.0, 12.0).into();
        let stock = stock.with_marks(None, Some(10.0)); // mark falls back to price
        let option: Position = call().into();
        let option = option.with_marks(Some(2.0), Some(1.5));
        let bond: Position = BondPosition::flat(1000.0, 0.05, 2.0, 0.05, 3.0).into();
        let bond = bond.with_marks(Some(99.0), None); // cost falls back to mark

        let total = pnl(&[stock, option, bond]).unwrap();
        assert_relative_eq!(total, 20.0 + 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_pnl_without_any_prices_is_zero() {
        let option: Position = call().into();
        assert_eq!(pnl(&[option]).unwrap(), 0.0);
    }

    // ========================================
    // Greeks Tests
    // ========================================

    #[test]
    fn test_aggregate_greeks_empty() {
        assert_eq!(aggregate_greeks(&[]).unwrap(), Greeks::zero());
    }

    #[test]
    fn test_aggregate_greeks_scales_by_quantity() {
        let one = aggregate_greeks(&[call().into()]).unwrap();
        let mut three = call();
        three.quantity = 3.0;
        let total = aggregate_greeks(&[three.into()]).unwrap();
        assert_relative_eq!(total.delta, 3.0 * one.delta, epsilon = 1e-7);
        assert_relative_eq!(total.vega, 3.0 * one.vega, epsilon = 1e-7);
    }

    #[test]
    fn test_large_quantity_sums_rounded_unit_greeks() {
        let unit = black_scholes::greeks(40.0, 40.0, 0.25, 0.03, 0.2, OptionType::Call).unwrap();
        let book: Vec<Position> = vec![OptionPosition::new(
            40.0,
            40.0,
            0.25,
            0.2,
            OptionType::Call,
            1000.0,
        )
        .with_rate(0.03)
        .into()];

        let total = aggregate_greeks(&book).unwrap();
        assert_eq!(total, unit.scaled(1000.0).finish(Precision::PRICING).unwrap());
        assert_eq!(total.delta, 549.73822);
        assert_eq!(total.vega, 79.16754);
    }

    #[test]
    fn test_aggregate_greeks_ignores_non_options() {
        let positions: Vec<Position> = vec![
            StockPosition::new("A", 100.0, 10.0).into(),
            BondPosition::flat(1000.0, 0.05, 2.0, 0.05, 1.0).into(),
            call().into(),
        ];
        let greeks = aggregate_greeks(&positions).unwrap();
        assert_eq!(greeks.delta, 0.54973822);
        assert_eq!(greeks.gamma, 0.09895942);
    }

    #[test]
    fn test_missing_rate_defaults_for_greeks() {
        let mut no_rate = call();
        no_rate.rate = None;
        let defaulted = aggregate_greeks(&[no_rate.into()]).unwrap();
        let explicit = aggregate_greeks(&[call().with_rate(0.05).into()]).unwrap();
        assert_eq!(defaulted, explicit);
    }

    #[test]
    fn test_skips_non_positive_terms() {
        let mut expired = call();
        expired.expiry = 0.0;
        let mut no_spot = call();
        no_spot.spot = -1.0;

        let result = GreeksAggregator::new()
            .aggregate(&[expired.into(), call().into(), no_spot.into()])
            .unwrap();
        assert_eq!(result.skipped, vec![0, 2]);
        assert_eq!(result.contributions.len(), 1);
        assert_eq!(result.contributions[0].index, 1);
    }

    #[test]
    fn test_negative_volatility_is_an_error() {
        let mut bad = call();
        bad.sigma = -0.2;
        assert!(aggregate_greeks(&[bad.into()]).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_short_position_flips_sign() {
        let mut short = call();
        short.quantity = -1.0;
        let greeks = aggregate_greeks(&[short.into()]).unwrap();
        assert_eq!(greeks.delta, -0.54973822);
    }
}
