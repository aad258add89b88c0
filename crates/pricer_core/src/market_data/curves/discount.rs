//! Bootstrapped discount curve.

use crate::hashing::{canonical_json, sha256_hex};
use crate::market_data::error::MarketDataError;
use crate::math::interpolators::{Interpolator, LinearInterpolator};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One curve pillar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Pillar time in years
    pub tenor: f64,
    /// Continuously compounded zero rate
    pub zero_rate: f64,
    /// Discount factor at `tenor`
    pub discount_factor: f64,
}

impl CurvePoint {
    /// Create a pillar.
    pub fn new(tenor: f64, zero_rate: f64, discount_factor: f64) -> Self {
        Self {
            tenor,
            zero_rate,
            discount_factor,
        }
    }
}

/// Raw serialised form; the hash is always recomputed on load.
#[derive(Deserialize)]
struct CurveData {
    points: Vec<CurvePoint>,
}

impl TryFrom<CurveData> for Curve {
    type Error = MarketDataError;

    fn try_from(data: CurveData) -> Result<Self, Self::Error> {
        Curve::new(data.points)
    }
}

/// Discount curve built from tenor-sorted pillars.
///
/// Between pillars the discount factor is interpolated linearly; outside
/// the pillar range it is held flat at the nearest pillar. The curve
/// carries a SHA-256 hash of its canonical content so identical curves can
/// be recognised byte-for-byte.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::{Curve, CurvePoint};
///
/// let curve = Curve::new(vec![
///     CurvePoint::new(0.5, 0.02, 0.990099),
///     CurvePoint::new(1.0, 0.03, 0.970874),
/// ])
/// .unwrap();
///
/// // Flat below the first pillar
/// assert_eq!(curve.discount_factor(0.25).unwrap(), 0.990099);
/// // Linear in between
/// let mid = curve.discount_factor(0.75).unwrap();
/// assert!((mid - 0.9804865).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveData")]
pub struct Curve {
    points: Vec<CurvePoint>,
    curve_hash: String,
    /// Pillar tenors and discount factors, rebuilt on every construction
    #[serde(skip)]
    interpolator: LinearInterpolator,
}

impl Curve {
    /// Build a curve from pillars in ascending tenor order.
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InsufficientData` - No pillars
    /// * `MarketDataError::InvalidPillar` - Non-positive or non-finite tenor, negative
    ///   or non-finite discount factor, non-finite zero rate, or tenors not
    ///   strictly increasing
    ///
    /// A discount factor of exactly zero is accepted: a floored factor
    /// rounded to six decimals lands there.
    pub fn new(points: Vec<CurvePoint>) -> Result<Self, MarketDataError> {
        if points.is_empty() {
            return Err(MarketDataError::InsufficientData { got: 0, need: 1 });
        }

        for (index, p) in points.iter().enumerate() {
            let reason = if !p.tenor.is_finite() || p.tenor <= 0.0 {
                Some(format!("tenor must be positive and finite, got {}", p.tenor))
            } else if !p.discount_factor.is_finite() || p.discount_factor < 0.0 {
                Some(format!(
                    "discount factor must be non-negative and finite, got {}",
                    p.discount_factor
                ))
            } else if !p.zero_rate.is_finite() {
                Some(format!("zero rate must be finite, got {}", p.zero_rate))
            } else if index > 0 && p.tenor <= points[index - 1].tenor {
                Some(format!(
                    "tenors must be strictly increasing ({} after {})",
                    p.tenor,
                    points[index - 1].tenor
                ))
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(MarketDataError::InvalidPillar { index, reason });
            }
        }

        let tenors: Vec<f64> = points.iter().map(|p| p.tenor).collect();
        let dfs: Vec<f64> = points.iter().map(|p| p.discount_factor).collect();
        let interpolator = LinearInterpolator::new(&tenors, &dfs)?;

        let curve_hash = Self::hash_points(&points);
        Ok(Self {
            points,
            curve_hash,
            interpolator,
        })
    }

    /// Canonical hash of a pillar set.
    ///
    /// The hashed document is
    /// `{"discount_factors": {tenor: df}, "zero_rates": {tenor: z}}` with tenor
    /// keys written to six decimals, rendered with sorted keys.
    pub fn hash_points(points: &[CurvePoint]) -> String {
        let mut dfs = Map::new();
        let mut zeros = Map::new();
        for p in points {
            let key = format!("{:.6}", p.tenor);
            dfs.insert(key.clone(), Value::from(p.discount_factor));
            zeros.insert(key, Value::from(p.zero_rate));
        }

        let mut doc = Map::new();
        doc.insert("discount_factors".to_string(), Value::Object(dfs));
        doc.insert("zero_rates".to_string(), Value::Object(zeros));
        sha256_hex(canonical_json(&Value::Object(doc)).as_bytes())
    }

    /// Pillars in ascending tenor order.
    #[inline]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Lowercase hex SHA-256 of the canonical curve content.
    #[inline]
    pub fn curve_hash(&self) -> &str {
        &self.curve_hash
    }

    /// Number of pillars.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed curve.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Pillar tenors.
    #[inline]
    pub fn tenors(&self) -> &[f64] {
        self.interpolator.xs()
    }

    /// Pillar discount factors.
    #[inline]
    pub fn discount_factors(&self) -> &[f64] {
        self.interpolator.ys()
    }

    /// Discount factor at time `t` in years.
    ///
    /// # Errors
    /// `MarketDataError::InvalidMaturity` if `t` is not finite.
    pub fn discount_factor(&self, t: f64) -> Result<f64, MarketDataError> {
        if !t.is_finite() {
            return Err(MarketDataError::InvalidMaturity { t });
        }
        Ok(self.interpolator.interpolate(t)?)
    }

    /// Continuously compounded zero rate implied by the interpolated
    /// discount factor at `t`.
    ///
    /// # Errors
    /// `MarketDataError::InvalidMaturity` if `t` is not strictly positive.
    pub fn zero_rate(&self, t: f64) -> Result<f64, MarketDataError> {
        if t <= 0.0 {
            return Err(MarketDataError::InvalidMaturity { t });
        }
        let df = self.discount_factor(t)?;
        Ok(-df.ln() / t)
    }

    /// Continuously compounded forward rate between `t1` and `t2`.
    ///
    /// # Errors
    /// `MarketDataError::InvalidMaturity` if `t2 <= t1`.
    pub fn forward_rate(&self, t1: f64, t2: f64) -> Result<f64, MarketDataError> {
        let dt = t2 - t1;
        if dt <= 0.0 || !dt.is_finite() {
            return Err(MarketDataError::InvalidMaturity { t: dt });
        }
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        Ok(-(df2 / df1).ln() / dt)
    }
}
