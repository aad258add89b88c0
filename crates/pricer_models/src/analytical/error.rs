//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to the closed-form pricers

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidVolatility`: Negative or non-finite volatility
/// - `InvalidParameter`: Any other input outside its domain
/// - `NonPositiveUnderlying`: Spot or strike not positive where `ln(S/K)` is needed
/// - `NumericalInstability`: A denominator collapsed or an intermediate became non-finite
/// - `MarketData`: A curve lookup failed
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (negative or non-finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Parameter outside its domain.
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// Spot or strike not strictly positive in the lognormal branch.
    #[error("Spot and strike must be positive: S = {spot}, K = {strike}")]
    NonPositiveUnderlying {
        /// Spot price
        spot: f64,
        /// Strike price
        strike: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },

    /// Curve lookup failure.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),
}

impl AnalyticalError {
    /// Reject a non-finite parameter.
    pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(AnalyticalError::InvalidParameter { name, value })
        }
    }
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidVolatility { .. } | AnalyticalError::InvalidParameter { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            AnalyticalError::NonPositiveUnderlying { .. }
            | AnalyticalError::NumericalInstability { .. } => {
                PricingError::DegenerateMath(err.to_string())
            }
            AnalyticalError::MarketData(inner) => inner.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = AnalyticalError::InvalidParameter {
            name: "periods_per_year",
            value: 0.0,
        };
        assert_eq!(format!("{}", err), "Invalid parameter periods_per_year: 0");
    }

    #[test]
    fn test_conversion_categories() {
        let invalid: PricingError = AnalyticalError::InvalidVolatility { volatility: -1.0 }.into();
        assert!(invalid.is_invalid_input());

        let degenerate: PricingError = AnalyticalError::NonPositiveUnderlying {
            spot: 0.0,
            strike: 100.0,
        }
        .into();
        assert!(degenerate.is_degenerate());

        let unstable: PricingError = AnalyticalError::NumericalInstability {
            message: "1 + y/m <= 0".to_string(),
        }
        .into();
        assert!(unstable.is_degenerate());

        let curve: PricingError =
            AnalyticalError::MarketData(MarketDataError::InvalidMaturity { t: f64::NAN }).into();
        assert!(curve.is_invalid_input());
    }

    #[test]
    fn test_check_finite() {
        assert_eq!(AnalyticalError::check_finite("S", 1.0), Ok(1.0));
        assert!(AnalyticalError::check_finite("S", f64::INFINITY).is_err());
    }
}
