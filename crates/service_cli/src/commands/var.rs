//! VaR command implementation
//!
//! Parametric VaR from a value and an annual volatility, or historical VaR
//! and expected shortfall from a CSV column of returns.

use clap::Subcommand;
use pricer_risk::var::{
    historical_expected_shortfall, historical_var, parametric_var, VarMethod, VarReport,
};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

use super::ensure_exists;
use crate::config::CliConfig;
use crate::{CliError, Result};

/// VaR method and its inputs.
#[derive(Subcommand, Debug, Clone)]
pub enum VarCommand {
    /// Variance-covariance VaR
    Parametric {
        /// Portfolio value
        #[arg(long)]
        value: f64,

        /// Annualised volatility
        #[arg(long)]
        vol: f64,

        /// Confidence level (0.90, 0.95 or 0.99); defaults to the configuration
        #[arg(long)]
        confidence: Option<f64>,

        /// Holding period in days; defaults to the configuration
        #[arg(long)]
        horizon_days: Option<f64>,
    },

    /// Historical-simulation VaR
    Historical {
        /// Portfolio value
        #[arg(long)]
        value: f64,

        /// CSV file of returns
        #[arg(long)]
        returns: PathBuf,

        /// Column holding the returns
        #[arg(long, default_value = "return")]
        column: String,

        /// Confidence level; defaults to the configuration
        #[arg(long)]
        confidence: Option<f64>,
    },
}

/// Run the var command
pub fn run(method: VarCommand, config: &CliConfig) -> Result<Value> {
    let report = match method {
        VarCommand::Parametric {
            value,
            vol,
            confidence,
            horizon_days,
        } => {
            let confidence = confidence.unwrap_or(config.var.confidence);
            let horizon_days = horizon_days.unwrap_or(config.var.horizon_days);
            VarReport {
                method: VarMethod::Parametric,
                value,
                confidence,
                horizon_days: Some(horizon_days),
                var: parametric_var(value, vol, confidence, horizon_days)?,
                expected_shortfall: None,
            }
        }
        VarCommand::Historical {
            value,
            returns,
            column,
            confidence,
        } => {
            let confidence = confidence.unwrap_or(config.var.confidence);
            let series = read_returns(&returns, &column)?;
            VarReport {
                method: VarMethod::Historical,
                value,
                confidence,
                horizon_days: None,
                var: historical_var(value, &series, confidence)?,
                expected_shortfall: Some(historical_expected_shortfall(
                    value, &series, confidence,
                )?),
            }
        }
    };

    info!("{}", report);
    Ok(serde_json::to_value(&report)?)
}

/// Read one numeric column from a CSV file with a header row.
fn read_returns(path: &Path, column: &str) -> Result<Vec<f64>> {
    ensure_exists(path)?;
    let mut reader = csv::Reader::from_path(path)?;

    let index = reader
        .headers()?
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "column '{}' not found in {}",
                column,
                path.display()
            ))
        })?;

    let mut returns = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let field = record.get(index).unwrap_or("").trim();
        let value = field.parse::<f64>().map_err(|_| {
            CliError::InvalidArgument(format!(
                "row {}: '{}' is not a number",
                row + 1,
                field
            ))
        })?;
        returns.push(value);
    }
    Ok(returns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::file_with;

    const RETURNS: &str = "date,return\n\
        d1,-0.02\nd2,-0.015\nd3,-0.01\nd4,-0.005\nd5,0.0\n\
        d6,0.005\nd7,0.01\nd8,0.015\nd9,0.02\nd10,0.025\n";

    #[test]
    fn test_parametric_uses_config_defaults() {
        let mut config = CliConfig::default();
        config.var.horizon_days = 10.0;

        let report = run(
            VarCommand::Parametric {
                value: 1_000_000.0,
                vol: 0.2,
                confidence: None,
                horizon_days: None,
            },
            &config,
        )
        .unwrap();

        let expected = 1_000_000.0 * 1.645 * 0.2 * (10.0f64 / 252.0).sqrt();
        assert!((report["var"].as_f64().unwrap() - expected).abs() < 1e-6);
        assert_eq!(report["method"], "parametric");
        assert_eq!(report["horizon_days"].as_f64().unwrap(), 10.0);
    }

    #[test]
    fn test_historical_from_csv() {
        let file = file_with(RETURNS);
        let report = run(
            VarCommand::Historical {
                value: 1_000_000.0,
                returns: file.path().to_path_buf(),
                column: "return".to_string(),
                confidence: Some(0.75),
            },
            &CliConfig::default(),
        )
        .unwrap();

        assert_eq!(report["var"].as_f64().unwrap(), 10_000.0);
        let es = report["expected_shortfall"].as_f64().unwrap();
        assert!((es - 15_000.0).abs() < 1e-6);
        assert!(report.get("horizon_days").is_none());
    }

    #[test]
    fn test_missing_column() {
        let file = file_with(RETURNS);
        let err = read_returns(file.path(), "pnl").unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_non_numeric_row() {
        let file = file_with("return\n0.01\nabc\n");
        let err = read_returns(file.path(), "return").unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }
}
