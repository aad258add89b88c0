//! CLI command implementations
//!
//! Each submodule implements a specific CLI command and returns its report
//! as a JSON value; `main` renders it.

pub mod bond;
pub mod bootstrap;
pub mod portfolio;
pub mod presets;
pub mod price;
pub mod scenario;
pub mod stress;
pub mod var;

use pricer_core::market_data::CurveSet;
use pricer_models::instruments::Portfolio;
use pricer_risk::portfolio::ValuationContext;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::{CliError, Result};

/// Fail with `FileNotFound` before attempting to open `path`.
pub(crate) fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(CliError::FileNotFound(path.display().to_string()))
    }
}

/// Read a JSON document.
pub(crate) fn read_json(path: &Path) -> Result<Value> {
    ensure_exists(path)?;
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read a portfolio record file.
pub(crate) fn load_portfolio(path: &Path) -> Result<Portfolio> {
    let portfolio = Portfolio::from_record(read_json(path)?)?;
    debug!(path = %path.display(), positions = portfolio.len(), "portfolio loaded");
    Ok(portfolio)
}

/// Build a valuation context from an optional `{name: curve}` file.
pub(crate) fn load_context(curves: Option<&Path>) -> Result<ValuationContext> {
    match curves {
        Some(path) => {
            let curves: CurveSet = serde_json::from_value(read_json(path)?)?;
            Ok(ValuationContext::from_curves(curves))
        }
        None => Ok(ValuationContext::new()),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Temp file holding `content`, removed on drop.
    pub fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    pub const BOOK: &str = r#"{
        "positions": [
            {"type": "stock", "symbol": "ACME", "quantity": 10, "price": 100,
             "current_price": 110, "purchase_price": 100},
            {"type": "option", "S": 40, "K": 40, "T": 0.25, "r": 0.03, "sigma": 0.2,
             "option_type": "call", "quantity": 2}
        ],
        "metadata": {"desk": "test"}
    }"#;
}
