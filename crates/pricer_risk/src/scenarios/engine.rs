//! Scenario execution engine.
//!
//! Values a portfolio before and after a shock or preset and reports the
//! change. Preset runs also carry audit hashes of the base portfolio, the
//! stressed portfolio and the preset definition.

use pricer_core::types::{Precision, PricingResult};
use pricer_models::instruments::{Portfolio, Position};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::presets::StressPreset;
use super::shock::{apply_shock, ScenarioShock};
use crate::parallel::{try_ordered_map, ParallelConfig};
use crate::portfolio::{PortfolioValuator, ValuationContext};

/// P&L from a single scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPnL {
    /// Value before the scenario
    pub base_value: f64,
    /// Value after the scenario
    pub scenario_value: f64,
    /// `scenario_value - base_value`
    pub change: f64,
    /// `change / |base_value| · 100`, or 0 for a zero base
    pub change_pct: f64,
}

impl ScenarioPnL {
    /// Build from base and scenario values, rounding to 8 decimals.
    ///
    /// # Errors
    /// `PricingError::DegenerateMath` for a non-finite result.
    pub fn new(base_value: f64, scenario_value: f64) -> PricingResult<Self> {
        let p = Precision::PRICING;
        let change = p.finish(scenario_value - base_value, "scenario change")?;
        let change_pct = if base_value != 0.0 {
            p.finish(change / base_value.abs() * 100.0, "scenario change pct")?
        } else {
            0.0
        };
        Ok(Self {
            base_value: p.finish(base_value, "base value")?,
            scenario_value: p.finish(scenario_value, "scenario value")?,
            change,
            change_pct,
        })
    }

    /// Check if P&L is a loss (negative).
    pub fn is_loss(&self) -> bool {
        self.change < 0.0
    }

    /// Check if P&L is a gain (positive).
    pub fn is_gain(&self) -> bool {
        self.change > 0.0
    }
}

/// Outcome of a named preset run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresetStressResult {
    /// Preset identifier
    pub preset_id: String,
    /// Hash of the preset definition
    pub preset_hash: String,
    /// Hash of the portfolio before stress
    pub base_hash: String,
    /// Hash of the stressed portfolio
    pub stressed_hash: String,
    /// Values and change
    pub pnl: ScenarioPnL,
    /// Stressed copy of the portfolio
    pub stressed_portfolio: Portfolio,
}

/// Engine for executing scenarios against portfolios.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::{Portfolio, StockPosition};
/// use pricer_risk::portfolio::ValuationContext;
/// use pricer_risk::scenarios::ScenarioEngine;
///
/// let portfolio = Portfolio::new(vec![StockPosition::new("ACME", 10.0, 100.0).into()]);
/// let engine = ScenarioEngine::new(ValuationContext::new());
///
/// let result = engine.run_preset(&portfolio, "equity_down_20pct").unwrap();
/// assert_eq!(result.pnl.change, -200.0);
/// assert_eq!(result.pnl.change_pct, -20.0);
/// assert_ne!(result.base_hash, result.stressed_hash);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScenarioEngine {
    ctx: ValuationContext,
    parallel: ParallelConfig,
}

impl ScenarioEngine {
    /// Create an engine over a valuation context.
    pub fn new(ctx: ValuationContext) -> Self {
        Self {
            ctx,
            parallel: ParallelConfig::default(),
        }
    }

    /// Set the parallel policy for position valuation and preset batches.
    pub fn with_parallel_config(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Valuation context in use.
    pub fn context(&self) -> &ValuationContext {
        &self.ctx
    }

    fn value(&self, positions: &[Position]) -> PricingResult<f64> {
        PortfolioValuator::new(self.parallel).value(positions, &self.ctx)
    }

    /// Value positions before and after an ad hoc shock.
    ///
    /// # Errors
    /// Shock validation or valuation failures.
    pub fn run_shock(&self, positions: &[Position], shock: &ScenarioShock) -> PricingResult<ScenarioPnL> {
        let shocked = apply_shock(positions, shock)?;
        let base = self.value(positions)?;
        let scenario = self.value(&shocked)?;
        let pnl = ScenarioPnL::new(base, scenario)?;
        debug!(
            shock_type = %shock.shock_type,
            base_value = pnl.base_value,
            scenario_value = pnl.scenario_value,
            "ran scenario shock"
        );
        Ok(pnl)
    }

    fn stress(
        &self,
        portfolio: &Portfolio,
        base_value: f64,
        base_hash: &str,
        preset: &StressPreset,
    ) -> PricingResult<PresetStressResult> {
        let stressed = Portfolio {
            positions: preset.apply(&portfolio.positions)?,
            metadata: portfolio.metadata.clone(),
        };
        let stressed_value = self.value(&stressed.positions)?;
        let pnl = ScenarioPnL::new(base_value, stressed_value)?;
        let result = PresetStressResult {
            preset_id: preset.preset_id.to_string(),
            preset_hash: preset.hash()?,
            base_hash: base_hash.to_string(),
            stressed_hash: stressed.content_hash()?,
            pnl,
            stressed_portfolio: stressed,
        };
        debug!(
            preset_id = preset.preset_id,
            change = result.pnl.change,
            "ran stress preset"
        );
        Ok(result)
    }

    /// Apply a named preset and value the result.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` for an unknown preset id, plus any
    /// valuation failure.
    pub fn run_preset(&self, portfolio: &Portfolio, preset_id: &str) -> PricingResult<PresetStressResult> {
        let preset = StressPreset::get(preset_id)?;
        let base_value = self.value(&portfolio.positions)?;
        let base_hash = portfolio.content_hash()?;
        self.stress(portfolio, base_value, &base_hash, preset)
    }

    /// Run several presets; results follow the order of `preset_ids`.
    ///
    /// The base portfolio is valued and hashed once. Presets fan out over
    /// the rayon pool when the batch reaches the parallel threshold.
    ///
    /// # Errors
    /// As in [`ScenarioEngine::run_preset`]; unknown ids fail before any
    /// valuation.
    pub fn run_presets(
        &self,
        portfolio: &Portfolio,
        preset_ids: &[&str],
    ) -> PricingResult<Vec<PresetStressResult>> {
        let presets = preset_ids
            .iter()
            .map(|id| StressPreset::get(id))
            .collect::<PricingResult<Vec<_>>>()?;
        let base_value = self.value(&portfolio.positions)?;
        let base_hash = portfolio.content_hash()?;
        try_ordered_map(&presets, &self.parallel, |preset| {
            self.stress(portfolio, base_value, &base_hash, preset)
        })
    }

    /// Run the whole catalog in catalog order.
    ///
    /// # Errors
    /// As in [`ScenarioEngine::run_presets`].
    pub fn run_all_presets(&self, portfolio: &Portfolio) -> PricingResult<Vec<PresetStressResult>> {
        let ids: Vec<&str> = StressPreset::catalog().iter().map(|p| p.preset_id).collect();
        self.run_presets(portfolio, &ids)
    }

    /// Result with the most negative change; the first one wins ties.
    pub fn worst_case(results: &[PresetStressResult]) -> Option<&PresetStressResult> {
        results
            .iter()
            .reduce(|worst, r| if r.pnl.change < worst.pnl.change { r } else { worst })
    }
}

/// Run an ad hoc shock with a default engine.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::{Position, StockPosition};
/// use pricer_risk::portfolio::ValuationContext;
/// use pricer_risk::scenarios::{run_shock, ScenarioShock};
///
/// let book: Vec<Position> = vec![StockPosition::new("ACME", 10.0, 100.0).into()];
/// let pnl = run_shock(&book, &ScenarioShock::price(0.0), &ValuationContext::new()).unwrap();
/// assert_eq!(pnl.change, 0.0);
/// assert_eq!(pnl.scenario_value, pnl.base_value);
/// ```
///
/// # Errors
/// As in [`ScenarioEngine::run_shock`].
pub fn run_shock(
    positions: &[Position],
    shock: &ScenarioShock,
    ctx: &ValuationContext,
) -> PricingResult<ScenarioPnL> {
    ScenarioEngine::new(ctx.clone()).run_shock(positions, shock)
}

/// Run a named preset with a default engine.
///
/// # Errors
/// As in [`ScenarioEngine::run_preset`].
pub fn run_preset(
    portfolio: &Portfolio,
    preset_id: &str,
    ctx: &ValuationContext,
) -> PricingResult<PresetStressResult> {
    ScenarioEngine::new(ctx.clone()).run_preset(portfolio, preset_id)
}
