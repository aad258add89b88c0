//! Linear interpolation with flat extrapolation.

use super::Interpolator;
use crate::types::InterpolationError;

/// Interpolate linearly between knots, holding the end values flat outside.
///
/// This is the discount-factor rule shared by the bootstrapper and the
/// curve-based bond pricer: below the first knot the first value is
/// returned, above the last knot the last value, and in between the two
/// bracketing knots are joined by a straight line.
///
/// `xs` must be strictly increasing and the same length as `ys`.
/// Returns `None` when there are no knots or `x` is NaN.
///
/// # Example
///
/// ```
/// use pricer_core::math::interpolators::interpolate_linear_flat;
///
/// let xs = [1.0, 2.0];
/// let ys = [0.97, 0.93];
///
/// assert_eq!(interpolate_linear_flat(&xs, &ys, 0.5), Some(0.97));
/// assert_eq!(interpolate_linear_flat(&xs, &ys, 3.0), Some(0.93));
/// let mid = interpolate_linear_flat(&xs, &ys, 1.5).unwrap();
/// assert!((mid - 0.95).abs() < 1e-12);
/// assert_eq!(interpolate_linear_flat(&[], &[], 1.0), None);
/// assert_eq!(interpolate_linear_flat(&xs, &ys, f64::NAN), None);
/// ```
#[inline]
pub fn interpolate_linear_flat(xs: &[f64], ys: &[f64], x: f64) -> Option<f64> {
    let n = xs.len().min(ys.len());
    if n == 0 || x.is_nan() {
        return None;
    }
    if x <= xs[0] {
        return Some(ys[0]);
    }
    if x >= xs[n - 1] {
        return Some(ys[n - 1]);
    }

    // partition_point returns the first knot strictly above x; x is inside
    // (xs[0], xs[n-1]) so the bracket is [pos-1, pos].
    let pos = xs[..n].partition_point(|&xi| xi <= x);
    let (x0, x1) = (xs[pos - 1], xs[pos]);
    let (y0, y1) = (ys[pos - 1], ys[pos]);

    let t = (x - x0) / (x1 - x0);
    Some(y0 + (y1 - y0) * t)
}

/// Piecewise linear interpolator with flat extrapolation.
///
/// [`Curve`](crate::market_data::Curve) holds one over its pillars.
/// Unlike a bounded interpolator, queries outside the knot range never fail:
/// they return the nearest end value. A single knot is accepted and yields a
/// constant function.
///
/// # Example
///
/// ```
/// use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(&[0.5, 1.0, 2.0], &[0.99, 0.97, 0.93]).unwrap();
/// assert_eq!(interp.domain(), (0.5, 2.0));
/// assert_eq!(interp.interpolate(0.1).unwrap(), 0.99);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearInterpolator {
    /// Strictly increasing x-coordinates
    xs: Vec<f64>,
    /// Corresponding y-values
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Construct an interpolator from knots.
    ///
    /// Knots are taken in the given order and must already be strictly
    /// increasing; they are not re-sorted, because callers rely on the
    /// order they supplied.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InvalidInput` - Empty input, mismatched lengths or non-finite knots
    /// * `InterpolationError::NonMonotonicData` - x-values not strictly increasing
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.is_empty() {
            return Err(InterpolationError::InvalidInput(
                "at least one knot is required".to_string(),
            ));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(InterpolationError::InvalidInput(
                "knots must be finite".to_string(),
            ));
        }
        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(InterpolationError::NonMonotonicData { index: i });
            }
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Returns the x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the y-values.
    #[inline]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Returns the number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// True only for the `Default` placeholder.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> Result<f64, InterpolationError> {
        if !x.is_finite() {
            return Err(InterpolationError::InvalidInput(format!(
                "query point must be finite, got {}",
                x
            )));
        }
        interpolate_linear_flat(&self.xs, &self.ys, x)
            .ok_or_else(|| InterpolationError::InvalidInput("no knots".to_string()))
    }

    #[inline]
    fn domain(&self) -> (f64, f64) {
        match (self.xs.first(), self.xs.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (f64::NAN, f64::NAN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_with_single_knot() {
        let interp = LinearInterpolator::new(&[1.0], &[0.95]).unwrap();
        assert_eq!(interp.len(), 1);
        assert_eq!(interp.interpolate(0.0).unwrap(), 0.95);
        assert_eq!(interp.interpolate(5.0).unwrap(), 0.95);
    }

    #[test]
    fn test_new_rejects_mismatched_lengths() {
        let result = LinearInterpolator::new(&[0.0, 1.0], &[1.0]);
        assert!(matches!(result, Err(InterpolationError::InvalidInput(_))));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(LinearInterpolator::new(&[], &[]).is_err());
    }

    #[test]
    fn test_new_rejects_unsorted() {
        let result = LinearInterpolator::new(&[1.0, 0.5, 2.0], &[0.9, 0.95, 0.8]);
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::NonMonotonicData { index: 1 }
        );
    }

    #[test]
    fn test_new_rejects_duplicate_knots() {
        let result = LinearInterpolator::new(&[1.0, 1.0], &[0.9, 0.8]);
        assert!(result.is_err());
    }

    // ========================================
    // Interpolation Tests
    // ========================================

    #[test]
    fn test_interpolate_at_knots() {
        let interp = LinearInterpolator::new(&[1.0, 2.0, 5.0], &[0.97, 0.93, 0.80]).unwrap();
        assert_eq!(interp.interpolate(1.0).unwrap(), 0.97);
        assert_eq!(interp.interpolate(2.0).unwrap(), 0.93);
        assert_eq!(interp.interpolate(5.0).unwrap(), 0.80);
    }

    #[test]
    fn test_interpolate_between_knots() {
        let interp = LinearInterpolator::new(&[1.0, 2.0, 5.0], &[0.97, 0.93, 0.80]).unwrap();
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 0.95, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(3.5).unwrap(), 0.865, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_extrapolation_both_sides() {
        let interp = LinearInterpolator::new(&[1.0, 2.0], &[0.97, 0.93]).unwrap();
        assert_eq!(interp.interpolate(0.25).unwrap(), 0.97);
        assert_eq!(interp.interpolate(30.0).unwrap(), 0.93);
    }

    #[test]
    fn test_interpolate_rejects_nan_query() {
        let interp = LinearInterpolator::new(&[1.0, 2.0], &[0.97, 0.93]).unwrap();
        assert!(interp.interpolate(f64::NAN).is_err());
    }

    #[test]
    fn test_free_function_matches_struct() {
        let xs = [0.5, 1.0, 2.0, 3.0];
        let ys = [0.99, 0.97, 0.93, 0.90];
        let interp = LinearInterpolator::new(&xs, &ys).unwrap();
        for x in [0.0, 0.5, 0.75, 1.2, 2.9, 3.0, 4.0] {
            assert_eq!(
                interpolate_linear_flat(&xs, &ys, x).unwrap(),
                interp.interpolate(x).unwrap()
            );
        }
    }

    #[test]
    fn test_default_placeholder_has_no_knots() {
        let interp = LinearInterpolator::default();
        assert!(interp.is_empty());
        assert!(interp.interpolate(1.0).is_err());
        assert!(!interp.in_domain(1.0));
    }

    #[test]
    fn test_domain() {
        let interp = LinearInterpolator::new(&[0.25, 10.0], &[0.99, 0.6]).unwrap();
        assert_eq!(interp.domain(), (0.25, 10.0));
        assert!(interp.in_domain(5.0));
        assert!(!interp.in_domain(11.0));
    }
}
