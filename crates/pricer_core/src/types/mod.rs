//! Core error and rounding types.
//!
//! This module provides:
//! - `error`: Structured error types shared by every layer of the engine
//! - `precision`: The fixed-precision rounding policy applied to all outputs
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`PricingError`], [`InterpolationError`] from `error`
//! - [`Precision`], [`round_to_precision`] from `precision`

pub mod error;
pub mod precision;

// Re-export commonly used types at module level
pub use error::{InterpolationError, PricingError, PricingResult};
pub use precision::{round_to_precision, Precision};
