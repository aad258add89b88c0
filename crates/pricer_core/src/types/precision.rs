//! Fixed-precision rounding policy.
//!
//! Every public result of the engine passes through [`round_to_precision`]
//! before it is returned. Two policies exist:
//!
//! | Policy | Decimals | Used for |
//! |--------|----------|----------|
//! | [`Precision::PRICING`] | 8 | option prices, Greeks, VaR, P&L, scenario values |
//! | [`Precision::CURVE`] | 6 | zero rates, discount factors, bond analytics |
//!
//! Rounding is half away from zero on the scaled value and negative zero is
//! folded to `0.0`, so identical inputs serialise to identical bytes.

use super::error::PricingError;
use serde::{Deserialize, Serialize};

/// Round `value` to `decimals` decimal places.
///
/// This is the only rounding primitive in the engine.
///
/// # Examples
/// ```
/// use pricer_core::types::round_to_precision;
///
/// assert_eq!(round_to_precision(1.234_567_891, 8), 1.23456789);
/// assert_eq!(round_to_precision(-0.000_000_001, 8), 0.0);
/// assert!(round_to_precision(-0.000_000_001, 8).is_sign_positive());
/// ```
#[inline]
pub fn round_to_precision(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    // Magnitudes this large carry no fractional digits
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Rounding policy value threaded through every pricing call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Precision {
    decimals: u32,
}

impl Precision {
    /// 8 decimal places: prices, Greeks, VaR, P&L and scenario values.
    pub const PRICING: Precision = Precision { decimals: 8 };

    /// 6 decimal places: curves and bond analytics.
    pub const CURVE: Precision = Precision { decimals: 6 };

    /// Number of decimal places kept.
    #[inline]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Round a value under this policy.
    #[inline]
    pub fn round(&self, value: f64) -> f64 {
        round_to_precision(value, self.decimals)
    }

    /// Round a value, rejecting NaN and infinities.
    ///
    /// `what` names the quantity in the error message.
    ///
    /// # Errors
    /// `PricingError::DegenerateMath` if `value` is not finite.
    pub fn finish(&self, value: f64, what: &str) -> Result<f64, PricingError> {
        if !value.is_finite() {
            return Err(PricingError::degenerate(format!(
                "{} is not finite ({})",
                what, value
            )));
        }
        Ok(self.round(value))
    }
}
