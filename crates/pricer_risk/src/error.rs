//! Risk-layer error types.
//!
//! Every variant converts into [`PricingError`] so callers see the shared
//! `InvalidInput` / `DegenerateMath` / `EmptyInput` taxonomy.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors raised by VaR, valuation and scenario code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// Numeric parameter outside its domain.
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Confidence level outside the open interval (0, 1).
    #[error("Confidence must lie strictly between 0 and 1, got {confidence}")]
    InvalidConfidence {
        /// Offending confidence level
        confidence: f64,
    },

    /// Bond references a curve the valuation context does not hold.
    #[error("Unknown curve reference: {curve_ref}")]
    UnknownCurve {
        /// Requested curve name
        curve_ref: String,
    },

    /// Preset id not in the catalog.
    #[error("Unknown stress preset: {preset_id}")]
    UnknownPreset {
        /// Requested preset id
        preset_id: String,
    },

    /// Shock type string not recognised.
    #[error("Unknown shock type: {value}")]
    UnknownShockType {
        /// Offending string
        value: String,
    },

    /// Single-type shock without its parameter.
    #[error("{shock_type} shock requires parameter {parameter}")]
    MissingShockParameter {
        /// Declared shock type
        shock_type: &'static str,
        /// Missing parameter name
        parameter: &'static str,
    },

    /// Error from a lower layer.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl RiskError {
    /// Reject non-finite values.
    pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::InvalidParameter { name, value })
        }
    }

    /// Reject negative or non-finite values.
    pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidParameter { name, value })
        }
    }

    /// Reject confidence levels outside (0, 1).
    pub(crate) fn check_confidence(confidence: f64) -> Result<f64, Self> {
        if confidence.is_finite() && confidence > 0.0 && confidence < 1.0 {
            Ok(confidence)
        } else {
            Err(Self::InvalidConfidence { confidence })
        }
    }
}

impl From<RiskError> for PricingError {
    fn from(err: RiskError) -> Self {
        match err {
            RiskError::Pricing(inner) => inner,
            other => PricingError::InvalidInput(other.to_string()),
        }
    }
}
