//! # pricer_optimiser
//!
//! Rates-curve bootstrapping for the Vantage risk engine.
//!
//! ## Architecture Position
//!
//! Layer 2.5 of the engine. Depends only on `pricer_core` (L1): the
//! bootstrapper turns deposit and par-swap quotes into a
//! [`pricer_core::market_data::Curve`] that the curve-based bond pricer in
//! `pricer_models` consumes.
//!
//! ## Modules
//!
//! - `bootstrapping`: Sequential deposit + swap stripping with linear
//!   discount-factor interpolation and a content-hashed output curve
//!
//! ## Example
//!
//! ```rust
//! use pricer_optimiser::bootstrapping::{bootstrap_curve, RatesInstrument};
//!
//! let curve = bootstrap_curve(&[
//!     RatesInstrument::swap(2.0, 0.035),
//!     RatesInstrument::deposit(1.0, 0.03),
//! ])
//! .unwrap();
//!
//! assert_eq!(curve.tenors(), vec![1.0, 2.0]);
//! assert_eq!(curve.curve_hash().len(), 64);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod bootstrapping;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bootstrapping::{
        bootstrap_curve, BootstrapConfig, BootstrapError, InstrumentType, RatesInstrument,
        SequentialBootstrapper,
    };
}
