//! # Pricer Models (L2: Business Logic)
//!
//! Positions and the closed-form pricers that value them.
//!
//! This crate provides:
//! - The `Position` / `Portfolio` data model with serde record mapping
//! - Black-Scholes European option price and Greeks with exact `T = 0` and
//!   `sigma = 0` limits
//! - Flat-yield bond PV, duration, convexity and DV01
//! - Bond pricing off a bootstrapped discount curve
//!
//! ## Design Principles
//!
//! - **Enum-based positions** with exhaustive matching
//! - **One accessor per defaulted field**, so defaults never drift between callers
//! - **Rounded outputs**: every public pricer returns values already passed
//!   through `pricer_core::types::Precision`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
