//! Scenario analysis and stress testing.
//!
//! This module provides infrastructure for:
//! - Ad hoc shocks to price, volatility and rate fields
//! - A fixed catalog of named stress presets with stable hashes
//! - Scenario execution with before/after valuation
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Scenario Engine                  │
//! ├──────────────────────────────────────────────┤
//! │  ScenarioShock    - Ad hoc field shocks      │
//! │  StressPreset     - Named shock vectors      │
//! │  ScenarioEngine   - Execution & results      │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Every entry point clones before mutating; inputs are never modified.

mod engine;
mod presets;
mod shock;

pub use engine::{run_preset, run_shock, PresetStressResult, ScenarioEngine, ScenarioPnL};
pub use presets::{StressPreset, StressShocks};
pub use shock::{apply_shock, ScenarioShock, ShockParameters, ShockType};
