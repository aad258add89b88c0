//! Value at Risk (VaR) calculations.
//!
//! VaR estimates the loss over a holding period that should not be
//! exceeded at a given confidence level. Both estimators return a
//! non-negative loss amount rounded to 8 decimals.

mod historical;
mod parametric;

pub use historical::{historical_expected_shortfall, historical_var};
pub use parametric::{parametric_var, z_score, DEFAULT_Z_SCORE, TRADING_DAYS_PER_YEAR, Z_TABLE};

use serde::{Deserialize, Serialize};

/// VaR calculation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarMethod {
    /// Variance-covariance with a fixed z lookup
    Parametric,
    /// Empirical quantile of observed returns
    Historical,
}

/// VaR figure with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarReport {
    /// Method used for calculation
    pub method: VarMethod,
    /// Position or portfolio value
    pub value: f64,
    /// Confidence level (e.g. 0.95)
    pub confidence: f64,
    /// Holding period in days (parametric only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon_days: Option<f64>,
    /// Loss threshold
    pub var: f64,
    /// Mean tail loss (historical only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_shortfall: Option<f64>,
}

impl std::fmt::Display for VarReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.horizon_days {
            Some(days) => write!(
                f,
                "VaR({:.0}%, {}d): {:.2}",
                self.confidence * 100.0,
                days,
                self.var
            ),
            None => write!(f, "VaR({:.0}%): {:.2}", self.confidence * 100.0, self.var),
        }
    }
}
