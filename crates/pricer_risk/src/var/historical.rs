//! Historical-simulation VaR and expected shortfall.

use crate::error::RiskError;
use pricer_core::types::{Precision, PricingResult};

/// Ascending copy of the returns and the index of the VaR quantile.
fn tail_index(returns: &[f64], confidence: f64) -> Result<(Vec<f64>, usize), RiskError> {
    RiskError::check_confidence(confidence)?;
    for &r in returns {
        RiskError::check_finite("return", r)?;
    }

    let mut sorted = returns.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let raw = (n as f64 * (1.0 - confidence)).floor();
    let index = (raw.max(0.0) as usize).min(n.saturating_sub(1));
    Ok((sorted, index))
}

/// Calculate historical VaR from a series of returns.
///
/// Returns are sorted ascending and the one at
/// `clamp(floor(n · (1 - confidence)), 0, n - 1)` is selected. The VaR is
/// `-value · r` when that return is a loss and `0` otherwise. An empty
/// series gives `0`.
///
/// # Errors
///
/// `PricingError::InvalidInput` for a confidence outside (0, 1) or any
/// non-finite input.
///
/// # Examples
///
/// ```
/// use pricer_risk::var::historical_var;
///
/// let returns = [-0.02, -0.015, -0.01, -0.005, 0.0, 0.005, 0.01, 0.015, 0.02, 0.025];
/// // floor(10 · 0.25) = 2 → third-worst return
/// assert_eq!(historical_var(1_000_000.0, &returns, 0.75).unwrap(), 10_000.0);
///
/// // No losses, no VaR
/// assert_eq!(historical_var(1_000_000.0, &[0.01, 0.02], 0.95).unwrap(), 0.0);
/// ```
pub fn historical_var(value: f64, returns: &[f64], confidence: f64) -> PricingResult<f64> {
    RiskError::check_finite("value", value)?;
    let (sorted, index) = tail_index(returns, confidence)?;
    let var = match sorted.get(index) {
        Some(&r) if r < 0.0 => -value * r,
        _ => 0.0,
    };
    Precision::PRICING.finish(var, "historical VaR")
}

/// Expected shortfall: mean loss over the returns at or below the VaR
/// quantile.
///
/// Uses the same index as [`historical_var`]; the tail is
/// `sorted[0..=index]`. A non-negative tail mean or an empty series gives `0`.
///
/// # Errors
/// Same as [`historical_var`].
pub fn historical_expected_shortfall(
    value: f64,
    returns: &[f64],
    confidence: f64,
) -> PricingResult<f64> {
    RiskError::check_finite("value", value)?;
    let (sorted, index) = tail_index(returns, confidence)?;
    if sorted.is_empty() {
        return Ok(0.0);
    }
    let tail = &sorted[..=index];
    let mean = tail.iter().sum::<f64>() / tail.len() as f64;
    let es = if mean < 0.0 { -value * mean } else { 0.0 };
    Precision::PRICING.finish(es, "expected shortfall")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_returns() -> Vec<f64> {
        vec![
            0.01, -0.03, 0.005, -0.01, 0.02, -0.005, 0.0, 0.015, -0.02, 0.025,
        ]
    }

    // ========================================
    // VaR Tests
    // ========================================

    #[test]
    fn test_historical_var_picks_quantile() {
        // sorted: -0.03, -0.02, -0.01, ...; floor(10 · 0.05) = 0
        let var = historical_var(1000.0, &sample_returns(), 0.95).unwrap();
        assert_relative_eq!(var, 30.0, epsilon = 1e-10);
    }

    #[test]
    fn test_input_order_irrelevant() {
        let mut reversed = sample_returns();
        reversed.reverse();
        assert_eq!(
            historical_var(1000.0, &sample_returns(), 0.8).unwrap(),
            historical_var(1000.0, &reversed, 0.8).unwrap()
        );
    }

    #[test]
    fn test_empty_returns_zero() {
        assert_eq!(historical_var(1000.0, &[], 0.95).unwrap(), 0.0);
        assert_eq!(historical_expected_shortfall(1000.0, &[], 0.95).unwrap(), 0.0);
    }

    #[test]
    fn test_all_positive_returns_zero() {
        assert_eq!(historical_var(1000.0, &[0.01, 0.02, 0.03], 0.99).unwrap(), 0.0);
    }

    #[test]
    fn test_single_return() {
        assert_relative_eq!(
            historical_var(200.0, &[-0.05], 0.5).unwrap(),
            10.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(historical_var(100.0, &[0.01], 1.5).unwrap_err().is_invalid_input());
        assert!(historical_var(100.0, &[f64::NAN], 0.95).unwrap_err().is_invalid_input());
        assert!(historical_var(f64::INFINITY, &[0.01], 0.95).is_err());
    }

    // ========================================
    // Expected Shortfall Tests
    // ========================================

    #[test]
    fn test_expected_shortfall_averages_tail() {
        // floor(10 · 0.25) = 2 → tail -0.03, -0.02, -0.01
        let es = historical_expected_shortfall(1000.0, &sample_returns(), 0.75).unwrap();
        assert_relative_eq!(es, 20.0, epsilon = 1e-10);

        let var = historical_var(1000.0, &sample_returns(), 0.75).unwrap();
        assert_relative_eq!(var, 10.0, epsilon = 1e-10);
    }

    #[test]
    fn test_expected_shortfall_non_negative_tail() {
        assert_eq!(
            historical_expected_shortfall(1000.0, &[0.01, 0.02], 0.5).unwrap(),
            0.0
        );
    }
}
