//! Market data structures.
//!
//! # Components
//!
//! - [`curves`]: The bootstrapped discount [`Curve`] and the named [`CurveSet`]
//! - [`error`]: Market data error types ([`MarketDataError`])
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::{Curve, CurvePoint};
//!
//! let curve = Curve::new(vec![
//!     CurvePoint::new(1.0, 0.03, 0.970874),
//!     CurvePoint::new(2.0, 0.035, 0.932394),
//! ])
//! .unwrap();
//!
//! assert_eq!(curve.discount_factor(1.0).unwrap(), 0.970874);
//! assert_eq!(curve.curve_hash().len(), 64);
//! ```

pub mod curves;
pub mod error;

pub use curves::{Curve, CurvePoint, CurveSet};
pub use error::MarketDataError;
