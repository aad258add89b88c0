//! Stress command implementation
//!
//! Runs one named preset or the whole catalog against a portfolio.

use pricer_risk::scenarios::{PresetStressResult, ScenarioEngine};
use serde_json::{json, Value};
use std::path::Path;
use tracing::info;

use super::{load_context, load_portfolio};
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the stress command
pub fn run(
    portfolio: &Path,
    preset: Option<&str>,
    all: bool,
    curves: Option<&Path>,
    config: &CliConfig,
) -> Result<Value> {
    let book = load_portfolio(portfolio)?;
    let engine = ScenarioEngine::new(load_context(curves)?)
        .with_parallel_config(config.parallel_config());

    let results = match (preset, all) {
        (Some(id), false) => vec![engine.run_preset(&book, id)?],
        (None, true) => engine.run_all_presets(&book)?,
        _ => {
            return Err(CliError::InvalidArgument(
                "pass exactly one of --preset ID or --all".to_string(),
            ))
        }
    };

    let worst = ScenarioEngine::worst_case(&results).map(|r| r.preset_id.clone());
    info!(presets = results.len(), worst = ?worst, "stress run complete");

    let rows: Vec<Value> = results.iter().map(summary).collect();
    Ok(json!({
        "results": rows,
        "worst_case": worst,
    }))
}

/// Result without the stressed book, which the hash already identifies.
fn summary(result: &PresetStressResult) -> Value {
    json!({
        "preset_id": result.preset_id,
        "preset_hash": result.preset_hash,
        "base_hash": result.base_hash,
        "stressed_hash": result.stressed_hash,
        "pnl": result.pnl,
    })
}
