//! Market data error types.

use crate::types::{InterpolationError, PricingError};
use thiserror::Error;

/// Market data operation errors.
///
/// # Variants
///
/// - `InvalidMaturity`: Non-finite or otherwise unusable time argument
/// - `InvalidPillar`: A curve point with a non-positive or non-finite value
/// - `Interpolation`: Wrapped interpolation error
/// - `InsufficientData`: Not enough pillars for construction
/// - `CurveNotFound`: A named curve lookup failed
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Time argument outside the curve's domain.
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The offending time in years
        t: f64,
    },

    /// A pillar failed validation.
    #[error("Invalid pillar at index {index}: {reason}")]
    InvalidPillar {
        /// Index of the pillar in the supplied list
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Interpolation error during curve evaluation.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Insufficient data for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number required
        need: usize,
    },

    /// No curve registered under the requested name.
    #[error("Unknown curve reference: {name}")]
    CurveNotFound {
        /// The requested curve name
        name: String,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
