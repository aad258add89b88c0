//! Scenario command implementation
//!
//! Applies an ad hoc shock from a JSON file and reports the value change.

use pricer_risk::scenarios::{ScenarioEngine, ScenarioShock};
use serde_json::{json, Value};
use std::path::Path;
use tracing::info;

use super::{load_context, load_portfolio, read_json};
use crate::config::CliConfig;
use crate::Result;

/// Run the scenario command
pub fn run(
    portfolio: &Path,
    shock: &Path,
    curves: Option<&Path>,
    config: &CliConfig,
) -> Result<Value> {
    let book = load_portfolio(portfolio)?;
    let shock = ScenarioShock::from_record(read_json(shock)?)?;

    let engine = ScenarioEngine::new(load_context(curves)?)
        .with_parallel_config(config.parallel_config());
    let pnl = engine.run_shock(&book.positions, &shock)?;

    info!(
        shock_type = %shock.shock_type,
        change = pnl.change,
        "scenario complete"
    );

    Ok(json!({
        "shock": shock,
        "portfolio_hash": book.content_hash()?,
        "pnl": pnl,
    }))
}
