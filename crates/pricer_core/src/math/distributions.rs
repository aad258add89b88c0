//! Standard normal distribution functions.
//!
//! The cumulative distribution is evaluated through the complementary error
//! function from `statrs`, which keeps full relative precision in the far
//! left tail where `1 - Φ(-x)` would cancel.

use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// `1 / √(2π)`
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes `Φ(x) = 0.5 · erfc(-x / √2)`.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::normal_cdf;
///
/// assert_eq!(normal_cdf(0.0), 0.5);
/// assert!((normal_cdf(1.959_963_985) - 0.975).abs() < 1e-9);
/// ```
#[inline]
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::normal_pdf;
///
/// assert!((normal_pdf(0.0) - 0.398_942_280_4).abs() < 1e-10);
/// ```
#[inline]
pub fn normal_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}
