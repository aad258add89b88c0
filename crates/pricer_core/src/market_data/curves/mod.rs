//! Discount curves.
//!
//! This module provides:
//! - [`CurvePoint`]: One bootstrapped pillar (tenor, zero rate, discount factor)
//! - [`Curve`]: Tenor-sorted pillars with a content hash, interpolated linearly on
//!   discount factors with flat extrapolation
//! - [`CurveSet`]: Curves registered by name, used to resolve curve references

mod curve_set;
mod discount;

pub use curve_set::CurveSet;
pub use discount::{Curve, CurvePoint};
