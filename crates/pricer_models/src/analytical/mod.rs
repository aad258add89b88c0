//! Closed-form pricers.
//!
//! This module provides:
//! - Black-Scholes price and Greeks for European options
//! - Flat-yield bond PV, duration, convexity and DV01
//! - Bond pricing from a bootstrapped discount curve
//!
//! The free functions (`black_scholes::price`, `bond::bond_pv`,
//! `curve_bond::price_bond_on_curve`, ...) are the rounded entry points;
//! the value types expose unrounded intermediate results for callers that
//! aggregate before rounding.

pub mod black_scholes;
pub mod bond;
pub mod curve_bond;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, Greeks};
pub use bond::{BondAnalytics, BondCashflow, MAX_MATURITY_YEARS, MAX_PERIODS_PER_YEAR};
pub use curve_bond::{price_bond_on_curve, price_bond_on_curve_with_spread};
pub use error::AnalyticalError;
