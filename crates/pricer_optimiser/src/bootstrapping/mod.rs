//! Yield curve bootstrapping from deposit and swap quotes.
//!
//! ## Architecture
//!
//! - `RatesInstrument`: Market quote (deposit or par swap)
//! - `SequentialBootstrapper`: Closed-form sequential stripping engine
//! - `BootstrapConfig`: Discount factor floor and degeneracy tolerance
//!
//! The output is a [`pricer_core::market_data::Curve`] rounded to 6 decimals
//! and carrying its content hash. The same quotes in any order give the
//! same curve and the same hash.

mod config;
mod engine;
mod error;
mod instrument;

pub use config::{BootstrapConfig, DEFAULT_DENOMINATOR_TOLERANCE, DEFAULT_DF_FLOOR};
pub use engine::{bootstrap_curve, SequentialBootstrapper};
pub use error::BootstrapError;
pub use instrument::{
    InstrumentType, RatesInstrument, DEFAULT_SWAP_PERIODS_PER_YEAR, MAX_SWAP_PERIODS_PER_YEAR,
    MAX_TENOR_YEARS,
};
