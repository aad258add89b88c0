//! Position and portfolio data model.
//!
//! # Types
//!
//! - [`Position`]: Tagged union of [`StockPosition`], [`OptionPosition`] and [`BondPosition`]
//! - [`Portfolio`]: Ordered positions plus opaque metadata
//! - [`OptionType`]: Call/put direction with strict parsing
//! - [`InstrumentError`]: Record validation failures
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{OptionPosition, OptionType, Position};
//!
//! let pos: Position = OptionPosition::new(40.0, 40.0, 0.25, 0.2, OptionType::Call, 5.0)
//!     .with_rate(0.03)
//!     .into();
//! assert_eq!(pos.kind(), "option");
//! assert_eq!(pos.quantity(), 5.0);
//! ```

mod error;
mod payoff;
mod portfolio;
mod position;

pub use error::InstrumentError;
pub use payoff::OptionType;
pub use portfolio::Portfolio;
pub use position::{
    BondDiscounting, BondPosition, OptionPosition, Position, StockPosition,
    DEFAULT_GREEKS_RATE, DEFAULT_PERIODS_PER_YEAR,
};
