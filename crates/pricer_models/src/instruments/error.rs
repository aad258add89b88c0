//! Instrument error types.
//!
//! This module provides structured error handling for position records
//! and their field-level validation.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `UnknownOptionType`: `option_type` is neither `call` nor `put`
/// - `MissingField`: A field required for the declared position type is absent
/// - `InvalidParameter`: Fields present but inconsistent
/// - `InvalidRecord`: The record could not be mapped onto any position type
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::UnknownOptionType { value: "straddle".to_string() };
/// assert!(format!("{}", err).contains("straddle"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Unrecognised option direction.
    #[error("unknown option_type: {value}")]
    UnknownOptionType {
        /// The rejected value
        value: String,
    },

    /// Required field absent.
    #[error("{position_type} position is missing required field {field}")]
    MissingField {
        /// Declared position type
        position_type: &'static str,
        /// Name of the missing field
        field: &'static str,
    },

    /// Invalid parameter (general validation failure).
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the parameter error
        message: String,
    },

    /// Record could not be deserialised.
    #[error("Invalid record: {message}")]
    InvalidRecord {
        /// Deserialiser message
        message: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = InstrumentError::MissingField {
            position_type: "option",
            field: "r",
        };
        assert_eq!(err.to_string(), "option position is missing required field r");
    }

    #[test]
    fn test_all_variants_map_to_invalid_input() {
        let errors = [
            InstrumentError::UnknownOptionType {
                value: "x".to_string(),
            },
            InstrumentError::MissingField {
                position_type: "bond",
                field: "yield_to_maturity",
            },
            InstrumentError::InvalidParameter {
                message: "x".to_string(),
            },
            InstrumentError::InvalidRecord {
                message: "x".to_string(),
            },
        ];
        for err in errors {
            let pricing: PricingError = err.into();
            assert!(pricing.is_invalid_input());
        }
    }
}
