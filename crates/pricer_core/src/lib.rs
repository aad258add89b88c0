//! # pricer_core: Numeric Foundation for the Vantage Risk Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the engine, providing:
//! - Standard normal CDF/PDF built on the closed-form error function (`math::distributions`)
//! - The single rounding policy used by every public result (`types::precision`)
//! - Linear discount-factor interpolation with flat extrapolation (`math::interpolators`)
//! - The bootstrapped discount curve value type (`market_data::curves`)
//! - Canonical JSON + SHA-256 content hashing (`hashing`)
//! - The engine-wide error taxonomy (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - statrs: erf/erfc special functions
//! - serde / serde_json: canonical serialisation
//! - sha2 / hex: content hashes
//! - thiserror: error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::normal_cdf;
//! use pricer_core::types::Precision;
//!
//! let p = normal_cdf(0.0);
//! assert_eq!(Precision::PRICING.round(p), 0.5);
//!
//! let rounded = Precision::CURVE.round(0.123_456_789);
//! assert_eq!(rounded, 0.123457);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod hashing;
pub mod market_data;
pub mod math;
pub mod types;
