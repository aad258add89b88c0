//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The engine-wide error taxonomy returned by every public operation
//! - `InterpolationError`: Errors from interpolation operations
//!
//! Every layer above defines its own error enum and converts into
//! [`PricingError`], so callers of the engine only ever match on three
//! categories.

use std::fmt;
use thiserror::Error;

/// Result alias used across the engine.
pub type PricingResult<T> = Result<T, PricingError>;

/// Categorised engine errors.
///
/// # Variants
/// - `InvalidInput`: Unknown discriminant (`option_type`, instrument `type`,
///   `shock_type`, preset id), a position missing a field required for its
///   declared type, or a parameter outside its domain
/// - `DegenerateMath`: A denominator collapsed to zero, a logarithm of a
///   non-positive value, or any other non-finite intermediate
/// - `EmptyInput`: An operation that cannot run on an empty collection
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("unknown option_type: straddle".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: unknown option_type: straddle");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Degenerate numerical computation
    DegenerateMath(String),

    /// Empty input where at least one element is required
    EmptyInput(String),
}

impl PricingError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a degenerate math error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateMath(message.into())
    }

    /// Create an empty input error.
    pub fn empty(message: impl Into<String>) -> Self {
        Self::EmptyInput(message.into())
    }

    /// Check if this is an invalid input error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is a degenerate math error.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateMath(_))
    }

    /// Check if this is an empty input error.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput(_))
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::DegenerateMath(msg) => write!(f, "Degenerate math: {}", msg),
            PricingError::EmptyInput(msg) => write!(f, "Empty input: {}", msg),
        }
    }
}

impl std::error::Error for PricingError {}

/// Interpolation errors.
///
/// # Examples
/// ```
/// use pricer_core::types::InterpolationError;
///
/// let err = InterpolationError::NonMonotonicData { index: 2 };
/// assert!(format!("{}", err).contains("index 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Knot abscissae are not strictly increasing.
    #[error("Knots are not strictly increasing at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<InterpolationError> for PricingError {
    fn from(err: InterpolationError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        assert_eq!(
            PricingError::degenerate("log of non-positive value").to_string(),
            "Degenerate math: log of non-positive value"
        );
        assert_eq!(
            PricingError::empty("no instruments").to_string(),
            "Empty input: no instruments"
        );
    }

    #[test]
    fn test_pricing_error_predicates() {
        assert!(PricingError::invalid_input("x").is_invalid_input());
        assert!(PricingError::degenerate("x").is_degenerate());
        assert!(PricingError::empty("x").is_empty_input());
        assert!(!PricingError::empty("x").is_degenerate());
    }

    #[test]
    fn test_interpolation_error_converts_to_invalid_input() {
        let err: PricingError = InterpolationError::NonMonotonicData { index: 3 }.into();
        match err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("index 3")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::invalid_input("bad");
        let _: &dyn std::error::Error = &err;
    }
}
