//! Price command implementation
//!
//! Prices a single European option under Black-Scholes and reports its
//! Greeks.

use pricer_models::analytical::black_scholes;
use pricer_models::instruments::{InstrumentError, OptionType};
use serde_json::{json, Value};
use tracing::info;

use crate::{CliError, Result};

/// Run the price command
pub fn run(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    sigma: f64,
    option_type: &str,
) -> Result<Value> {
    let option_type: OptionType = option_type
        .parse()
        .map_err(|e: InstrumentError| CliError::InvalidArgument(e.to_string()))?;

    info!(spot, strike, expiry, rate, sigma, %option_type, "pricing option");

    let price = black_scholes::price(spot, strike, expiry, rate, sigma, option_type)?;
    let greeks = black_scholes::greeks(spot, strike, expiry, rate, sigma, option_type)?;

    Ok(json!({
        "inputs": {
            "S": spot,
            "K": strike,
            "T": expiry,
            "r": rate,
            "sigma": sigma,
            "option_type": option_type,
        },
        "price": price,
        "greeks": greeks,
    }))
}
