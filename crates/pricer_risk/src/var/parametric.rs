//! Parametric (variance-covariance) VaR calculation.

use crate::error::RiskError;
use pricer_core::types::{Precision, PricingResult};

/// Trading days used to scale annual volatility to the horizon.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// z-score for any confidence level not in [`Z_TABLE`].
pub const DEFAULT_Z_SCORE: f64 = 1.645;

/// Fixed z-scores for the supported confidence levels.
pub const Z_TABLE: [(f64, f64); 3] = [(0.90, 1.28), (0.95, 1.645), (0.99, 2.326)];

/// z-score for a confidence level.
///
/// Only exact table entries are recognised; anything else falls back to
/// [`DEFAULT_Z_SCORE`]. There is no interpolation.
///
/// ```
/// use pricer_risk::var::z_score;
///
/// assert_eq!(z_score(0.99), 2.326);
/// assert_eq!(z_score(0.975), 1.645);
/// ```
pub fn z_score(confidence: f64) -> f64 {
    Z_TABLE
        .iter()
        .find(|(level, _)| *level == confidence)
        .map(|(_, z)| *z)
        .unwrap_or(DEFAULT_Z_SCORE)
}

/// Calculate parametric VaR.
///
/// `VaR = value · annual_vol · √(horizon_days / 252) · z(confidence)`
///
/// # Arguments
///
/// * `value` - Current portfolio value
/// * `annual_vol` - Annualised volatility of returns
/// * `confidence` - Confidence level in (0, 1)
/// * `horizon_days` - Holding period in trading days
///
/// # Errors
///
/// `PricingError::InvalidInput` for a negative volatility or horizon, a
/// confidence outside (0, 1), or any non-finite input.
///
/// # Examples
///
/// ```
/// use pricer_risk::var::parametric_var;
///
/// let var = parametric_var(1_000_000.0, 0.2, 0.95, 252.0).unwrap();
/// assert_eq!(var, 329_000.0);
/// ```
pub fn parametric_var(
    value: f64,
    annual_vol: f64,
    confidence: f64,
    horizon_days: f64,
) -> PricingResult<f64> {
    let var = raw_parametric_var(value, annual_vol, confidence, horizon_days)?;
    Precision::PRICING.finish(var, "parametric VaR")
}

fn raw_parametric_var(
    value: f64,
    annual_vol: f64,
    confidence: f64,
    horizon_days: f64,
) -> Result<f64, RiskError> {
    RiskError::check_finite("value", value)?;
    RiskError::check_non_negative("annual_vol", annual_vol)?;
    RiskError::check_non_negative("horizon_days", horizon_days)?;
    RiskError::check_confidence(confidence)?;

    let scale = (horizon_days / TRADING_DAYS_PER_YEAR).sqrt();
    Ok(value * annual_vol * scale * z_score(confidence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_parametric_var_one_day() {
        let var = parametric_var(1_000_000.0, 0.2, 0.95, 1.0).unwrap();
        let expected = 1_000_000.0 * 0.2 * (1.0f64 / 252.0).sqrt() * 1.645;
        assert_relative_eq!(var, expected, epsilon = 1e-8);
    }

    #[test]
    fn test_listed_levels_increase() {
        let v90 = parametric_var(100.0, 0.3, 0.90, 10.0).unwrap();
        let v95 = parametric_var(100.0, 0.3, 0.95, 10.0).unwrap();
        let v99 = parametric_var(100.0, 0.3, 0.99, 10.0).unwrap();
        assert!(v90 < v95 && v95 < v99);
    }

    #[test]
    fn test_unlisted_level_uses_default() {
        assert_eq!(
            parametric_var(100.0, 0.3, 0.975, 10.0).unwrap(),
            parametric_var(100.0, 0.3, 0.95, 10.0).unwrap()
        );
    }

    #[test]
    fn test_zero_inputs() {
        assert_eq!(parametric_var(100.0, 0.0, 0.95, 10.0).unwrap(), 0.0);
        assert_eq!(parametric_var(100.0, 0.2, 0.95, 0.0).unwrap(), 0.0);
        assert_eq!(parametric_var(0.0, 0.2, 0.95, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(parametric_var(100.0, -0.1, 0.95, 1.0).unwrap_err().is_invalid_input());
        assert!(parametric_var(100.0, 0.1, 0.95, -1.0).unwrap_err().is_invalid_input());
        assert!(parametric_var(100.0, 0.1, 1.0, 1.0).unwrap_err().is_invalid_input());
        assert!(parametric_var(100.0, 0.1, 0.0, 1.0).unwrap_err().is_invalid_input());
        assert!(parametric_var(f64::NAN, 0.1, 0.95, 1.0).unwrap_err().is_invalid_input());
        assert!(parametric_var(100.0, f64::INFINITY, 0.95, 1.0).is_err());
    }

    proptest! {
        #[test]
        fn prop_monotone_in_vol(
            value in 0.0f64..1e7,
            vol in 0.0f64..1.0,
            bump in 0.0f64..1.0,
            days in 0.0f64..500.0,
        ) {
            let lo = parametric_var(value, vol, 0.95, days).unwrap();
            let hi = parametric_var(value, vol + bump, 0.95, days).unwrap();
            prop_assert!(hi >= lo);
        }

        #[test]
        fn prop_monotone_in_horizon(
            value in 0.0f64..1e7,
            vol in 0.0f64..1.0,
            days in 0.0f64..500.0,
            extra in 0.0f64..500.0,
        ) {
            let lo = parametric_var(value, vol, 0.99, days).unwrap();
            let hi = parametric_var(value, vol, 0.99, days + extra).unwrap();
            prop_assert!(hi >= lo);
        }

        #[test]
        fn prop_monotone_across_listed_levels(value in 0.0f64..1e7, vol in 0.0f64..1.0, days in 0.0f64..500.0) {
            let vars: Vec<f64> = Z_TABLE
                .iter()
                .map(|(c, _)| parametric_var(value, vol, *c, days).unwrap())
                .collect();
            prop_assert!(vars.windows(2).all(|w| w[1] >= w[0]));
        }
    }
}
