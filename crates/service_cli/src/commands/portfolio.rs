//! Portfolio command implementation
//!
//! Values a book and reports its P&L and aggregated Greeks.

use pricer_risk::portfolio::{pnl, GreeksAggregator, PortfolioValuator};
use serde_json::{json, Value};
use std::path::Path;
use tracing::info;

use super::{load_context, load_portfolio};
use crate::config::CliConfig;
use crate::Result;

/// Run the portfolio command
pub fn run(portfolio: &Path, curves: Option<&Path>, config: &CliConfig) -> Result<Value> {
    let book = load_portfolio(portfolio)?;
    let ctx = load_context(curves)?;

    let value = PortfolioValuator::new(config.parallel_config()).value(&book.positions, &ctx)?;
    let pnl = pnl(&book.positions)?;
    let greeks = GreeksAggregator::new().aggregate(&book.positions)?;

    info!(positions = book.len(), value, pnl, "portfolio valued");

    Ok(json!({
        "positions": book.len(),
        "portfolio_hash": book.content_hash()?,
        "value": value,
        "pnl": pnl,
        "greeks": greeks.totals,
        "skipped_options": greeks.skipped,
    }))
}
