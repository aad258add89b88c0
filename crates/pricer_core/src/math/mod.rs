//! Mathematical utilities for the pricing kernel.
//!
//! This module provides:
//! - `distributions`: Standard normal CDF/PDF on the closed-form error function
//! - `interpolators`: Linear interpolation with flat extrapolation

pub mod distributions;
pub mod interpolators;
