//! Bootstrap command implementation
//!
//! Reads a JSON list of deposit and swap quotes and prints the bootstrapped
//! curve with its hash.

use pricer_optimiser::bootstrapping::{bootstrap_curve, RatesInstrument};
use serde_json::{json, Value};
use std::path::Path;
use tracing::info;

use super::read_json;
use crate::{CliError, Result};

/// Run the bootstrap command
pub fn run(instruments: &Path) -> Result<Value> {
    let records = match read_json(instruments)? {
        Value::Array(records) => records,
        _ => {
            return Err(CliError::InvalidArgument(format!(
                "{}: expected a JSON array of instruments",
                instruments.display()
            )))
        }
    };

    let quotes = RatesInstrument::from_records(records)?;
    info!(count = quotes.len(), "bootstrapping curve");

    let curve = bootstrap_curve(&quotes)?;
    info!(curve_hash = curve.curve_hash(), pillars = curve.len(), "curve built");

    Ok(json!({
        "instruments": quotes.len(),
        "curve_hash": curve.curve_hash(),
        "points": curve.points(),
    }))
}
