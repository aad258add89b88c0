//! Portfolio P&L, Greeks aggregation and valuation.
//!
//! Empty position lists are a valid boundary case: P&L, Greeks and value
//! are all zero.

mod aggregator;
mod valuation;

pub use aggregator::{aggregate_greeks, pnl, GreeksAggregator, PortfolioGreeks, PositionGreeks};
pub use valuation::{
    portfolio_value, position_value, position_values, PortfolioValuator, ValuationContext,
};
