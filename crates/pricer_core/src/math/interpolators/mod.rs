//! Interpolation methods for discount-factor curves.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation, flat outside the knot range
//! - [`interpolate_linear_flat`]: The same rule on borrowed slices, for callers that
//!   grow their knot set incrementally (the bootstrapper)
//!
//! ## Core Trait
//!
//! All 1D interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x) -> Result<f64, InterpolationError>`: Compute interpolated value
//! - `domain() -> (f64, f64)`: Return the knot range
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let interp = LinearInterpolator::new(&[1.0, 2.0, 3.0], &[0.97, 0.93, 0.90]).unwrap();
//! let y = interp.interpolate(2.5).unwrap();
//! assert!((y - 0.915).abs() < 1e-12);
//! ```

mod linear;

pub use linear::{interpolate_linear_flat, LinearInterpolator};

use crate::types::InterpolationError;

/// Common interface for one-dimensional interpolators.
pub trait Interpolator {
    /// Interpolate the value at `x`.
    ///
    /// # Errors
    /// Implementation-specific; flat-extrapolating interpolators only fail on
    /// non-finite queries.
    fn interpolate(&self, x: f64) -> Result<f64, InterpolationError>;

    /// Return the knot range `(x_min, x_max)`.
    fn domain(&self) -> (f64, f64);

    /// Check whether `x` lies within the knot range.
    fn in_domain(&self, x: f64) -> bool {
        let (lo, hi) = self.domain();
        x >= lo && x <= hi
    }
}
