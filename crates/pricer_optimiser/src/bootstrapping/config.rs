//! Bootstrap configuration.

use serde::{Deserialize, Serialize};

/// Lower bound applied to swap-implied discount factors.
pub const DEFAULT_DF_FLOOR: f64 = 1e-8;

/// Magnitude below which a denominator counts as zero.
pub const DEFAULT_DENOMINATOR_TOLERANCE: f64 = 1e-12;

/// Tuning knobs for [`SequentialBootstrapper`](super::SequentialBootstrapper).
///
/// # Examples
///
/// ```
/// use pricer_optimiser::bootstrapping::BootstrapConfig;
///
/// let config = BootstrapConfig::default().with_df_floor(1e-6);
/// assert_eq!(config.df_floor, 1e-6);
/// assert_eq!(config.tolerance, 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Swap discount factors are clamped to at least this value
    pub df_floor: f64,
    /// Denominators with smaller magnitude are degenerate
    pub tolerance: f64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            df_floor: DEFAULT_DF_FLOOR,
            tolerance: DEFAULT_DENOMINATOR_TOLERANCE,
        }
    }
}

impl BootstrapConfig {
    /// Set the discount factor floor.
    pub fn with_df_floor(mut self, df_floor: f64) -> Self {
        self.df_floor = df_floor;
        self
    }

    /// Set the denominator tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}
