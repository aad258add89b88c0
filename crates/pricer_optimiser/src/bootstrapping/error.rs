//! Bootstrap-specific error types.
//!
//! This module provides structured error handling for curve bootstrapping
//! with the pillar tenor attached to each failure.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors that can occur during curve bootstrapping.
///
/// # Variants
///
/// - `EmptyInput`: No instruments supplied
/// - `DuplicateTenor`: Two instruments share a tenor at six decimals
/// - `InvalidInstrument`: A tenor, rate or frequency outside its domain
/// - `Degenerate`: A denominator collapsed or a discount factor left the log domain
/// - `MarketData`: The solved pillars failed curve validation
///
/// # Examples
///
/// ```
/// use pricer_optimiser::bootstrapping::BootstrapError;
///
/// let err = BootstrapError::duplicate_tenor(2.5);
/// assert!(format!("{}", err).contains("2.5"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BootstrapError {
    /// No instruments to bootstrap.
    #[error("No instruments supplied for bootstrapping")]
    EmptyInput,

    /// Duplicate tenor detected in input instruments.
    #[error("Duplicate tenor detected: {tenor}")]
    DuplicateTenor {
        /// The duplicated tenor
        tenor: f64,
    },

    /// Instrument failed validation.
    #[error("Invalid instrument at index {index}: {reason}")]
    InvalidInstrument {
        /// Index in the caller's list
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Degenerate arithmetic at a pillar.
    #[error("Degenerate bootstrap at tenor {tenor}: {message}")]
    Degenerate {
        /// Pillar tenor
        tenor: f64,
        /// Description of the failure
        message: String,
    },

    /// Wrapped market data error.
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),
}

impl BootstrapError {
    /// Create a duplicate tenor error.
    pub fn duplicate_tenor(tenor: f64) -> Self {
        Self::DuplicateTenor { tenor }
    }

    /// Create an invalid instrument error.
    pub fn invalid_instrument(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidInstrument {
            index,
            reason: reason.into(),
        }
    }

    /// Create a degenerate arithmetic error.
    pub fn degenerate(tenor: f64, message: impl Into<String>) -> Self {
        Self::Degenerate {
            tenor,
            message: message.into(),
        }
    }

    /// Check if this is a duplicate tenor error.
    pub fn is_duplicate_tenor(&self) -> bool {
        matches!(self, Self::DuplicateTenor { .. })
    }

    /// Check if this is a degenerate arithmetic error.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate { .. })
    }
}

impl From<BootstrapError> for PricingError {
    fn from(err: BootstrapError) -> Self {
        match err {
            BootstrapError::EmptyInput => PricingError::EmptyInput(err.to_string()),
            BootstrapError::Degenerate { .. } => PricingError::DegenerateMath(err.to_string()),
            BootstrapError::DuplicateTenor { .. }
            | BootstrapError::InvalidInstrument { .. }
            | BootstrapError::MarketData(_) => PricingError::InvalidInput(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Display Tests
    // ========================================

    #[test]
    fn test_duplicate_tenor_display() {
        let err = BootstrapError::duplicate_tenor(2.5);
        let display = format!("{}", err);
        assert!(display.contains("Duplicate tenor"));
        assert!(display.contains("2.5"));
        assert!(err.is_duplicate_tenor());
        assert!(!err.is_degenerate());
    }

    #[test]
    fn test_degenerate_display() {
        let err = BootstrapError::degenerate(1.0, "1 + coupon is zero");
        assert_eq!(
            err.to_string(),
            "Degenerate bootstrap at tenor 1: 1 + coupon is zero"
        );
        assert!(err.is_degenerate());
    }

    // ========================================
    // Conversion Tests
    // ========================================

    #[test]
    fn test_into_pricing_error_categories() {
        assert!(PricingError::from(BootstrapError::EmptyInput).is_empty_input());
        assert!(PricingError::from(BootstrapError::degenerate(1.0, "x")).is_degenerate());
        assert!(PricingError::from(BootstrapError::duplicate_tenor(1.0)).is_invalid_input());
        assert!(PricingError::from(BootstrapError::invalid_instrument(0, "x")).is_invalid_input());
    }
}
