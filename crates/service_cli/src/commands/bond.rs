//! Bond command implementation

use pricer_models::analytical::BondAnalytics;
use serde_json::{json, Value};
use tracing::info;

use crate::Result;

/// Run the bond command
pub fn run(
    face_value: f64,
    coupon_rate: f64,
    years: f64,
    yield_rate: f64,
    periods_per_year: u32,
) -> Result<Value> {
    info!(face_value, coupon_rate, years, yield_rate, periods_per_year, "bond analytics");

    let analytics = BondAnalytics::compute(coupon_rate, face_value, years, yield_rate, periods_per_year)?;

    Ok(json!({
        "inputs": {
            "face_value": face_value,
            "coupon_rate": coupon_rate,
            "years_to_maturity": years,
            "yield_to_maturity": yield_rate,
            "periods_per_year": periods_per_year,
        },
        "analytics": analytics,
    }))
}
