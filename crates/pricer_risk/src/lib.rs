//! # Pricer Risk (L4: Application)
//!
//! Portfolio-level risk on top of the analytical pricers.
//!
//! This crate provides:
//! - Parametric and historical Value-at-Risk
//! - Portfolio P&L, Greeks aggregation and market valuation
//! - Ad hoc scenario shocks and a hash-stable catalog of stress presets
//! - Rayon-based batch helpers that keep results in input order
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  var/        - Parametric, historical  │
//! │  portfolio/  - P&L, Greeks, valuation  │
//! │  scenarios/  - Shocks, presets, engine │
//! │  parallel/   - Rayon utilities         │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Positions, Black-Scholes, bond pricers │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::{OptionPosition, OptionType, Position, StockPosition};
//! use pricer_risk::portfolio::{aggregate_greeks, pnl};
//! use pricer_risk::var::parametric_var;
//!
//! let positions: Vec<Position> = vec![
//!     StockPosition::new("ACME", 10.0, 50.0).into(),
//!     OptionPosition::new(40.0, 40.0, 0.25, 0.2, OptionType::Call, 1.0)
//!         .with_rate(0.03)
//!         .into(),
//! ];
//!
//! assert_eq!(pnl(&positions).unwrap(), 0.0);
//! let greeks = aggregate_greeks(&positions).unwrap();
//! assert!((greeks.delta - 0.54973822).abs() < 1e-8);
//!
//! let var = parametric_var(1_000_000.0, 0.2, 0.95, 1.0).unwrap();
//! assert!(var > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod parallel;
pub mod portfolio;
pub mod scenarios;
pub mod var;

// Re-export commonly used types
pub use error::RiskError;
pub use parallel::{ParallelConfig, DEFAULT_BATCH_SIZE, DEFAULT_PARALLEL_THRESHOLD};
pub use portfolio::{aggregate_greeks, pnl, portfolio_value, ValuationContext};
pub use scenarios::{ScenarioEngine, ScenarioShock, StressPreset};
pub use var::{historical_expected_shortfall, historical_var, parametric_var};
