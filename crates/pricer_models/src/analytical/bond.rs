//! Fixed-rate bullet bond analytics from a flat yield.
//!
//! ## Cashflow Convention
//!
//! `n = max(1, round(years · m))` periods with `m` periods per year. Each period pays
//! `face · coupon_rate / m`; the face value is paid once, with the final
//! coupon. Period `i` is discounted by `(1 + y/m)^(-i)` and sits at time
//! `i/m` years.
//!
//! ## Formulas
//!
//! ```text
//! PV        = Σ CFᵢ · (1 + y/m)^(-i)
//! D_mac     = Σ tᵢ · PVᵢ / PV
//! Convexity = Σ tᵢ² · PVᵢ / PV
//! D_mod     = D_mac / (1 + y/m)
//! DV01      = D_mod · PV · 0.0001
//! ```
//!
//! A bond with `years = 0` pays its face value immediately: PV equals face,
//! duration and convexity are zero. Any positive maturity has at least one
//! period.

use pricer_core::types::{Precision, PricingResult};
use serde::{Deserialize, Serialize};

use super::error::AnalyticalError;

/// Longest maturity accepted, in years.
pub const MAX_MATURITY_YEARS: f64 = 200.0;

/// Highest coupon frequency accepted (daily).
pub const MAX_PERIODS_PER_YEAR: u32 = 365;

/// One scheduled bond payment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondCashflow {
    /// Period index (1-based; 0 only for an immediately maturing bond)
    pub period: u32,
    /// Payment time in years
    pub time: f64,
    /// Payment amount
    pub amount: f64,
}

/// Build the payment schedule shared by the flat-yield and curve pricers.
///
/// # Errors
/// `AnalyticalError::InvalidParameter` for non-finite inputs, `years`
/// outside `[0, MAX_MATURITY_YEARS]`, or `periods_per_year` outside
/// `[1, MAX_PERIODS_PER_YEAR]`.
pub fn cashflow_schedule(
    coupon_rate: f64,
    face_value: f64,
    years: f64,
    periods_per_year: u32,
) -> Result<Vec<BondCashflow>, AnalyticalError> {
    AnalyticalError::check_finite("coupon_rate", coupon_rate)?;
    AnalyticalError::check_finite("face_value", face_value)?;
    AnalyticalError::check_finite("years_to_maturity", years)?;
    if !(0.0..=MAX_MATURITY_YEARS).contains(&years) {
        return Err(AnalyticalError::InvalidParameter {
            name: "years_to_maturity",
            value: years,
        });
    }
    if periods_per_year == 0 || periods_per_year > MAX_PERIODS_PER_YEAR {
        return Err(AnalyticalError::InvalidParameter {
            name: "periods_per_year",
            value: periods_per_year as f64,
        });
    }

    if years == 0.0 {
        return Ok(vec![BondCashflow {
            period: 0,
            time: 0.0,
            amount: face_value,
        }]);
    }

    let m = periods_per_year as f64;
    let n = ((years * m).round() as u32).max(1);

    let coupon = face_value * coupon_rate / m;
    Ok((1..=n)
        .map(|i| BondCashflow {
            period: i,
            time: i as f64 / m,
            amount: if i == n { coupon + face_value } else { coupon },
        })
        .collect())
}

/// Full analytics bundle for a flat-yield bond, rounded to 6 decimals.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BondAnalytics;
///
/// let a = BondAnalytics::compute(0.05, 1000.0, 2.0, 0.05, 2).unwrap();
/// assert_eq!(a.pv, 1000.0);
/// assert_eq!(a.duration, 1.928012);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondAnalytics {
    /// Present value
    pub pv: f64,
    /// Macaulay duration in years
    pub duration: f64,
    /// Modified duration
    pub modified_duration: f64,
    /// Convexity in years squared
    pub convexity: f64,
    /// Price change for a one basis point yield move
    pub dv01: f64,
}

impl BondAnalytics {
    /// Compute every analytic in one pass over the schedule.
    ///
    /// # Errors
    /// - `PricingError::InvalidInput` for invalid parameters (see [`cashflow_schedule`])
    /// - `PricingError::DegenerateMath` if `1 + y/m ≤ 0` or PV is zero with
    ///   cashflows outstanding
    pub fn compute(
        coupon_rate: f64,
        face_value: f64,
        years: f64,
        yield_rate: f64,
        periods_per_year: u32,
    ) -> PricingResult<Self> {
        let raw = raw_analytics(coupon_rate, face_value, years, yield_rate, periods_per_year)?;
        let p = Precision::CURVE;
        Ok(Self {
            pv: p.finish(raw.pv, "bond pv")?,
            duration: p.finish(raw.duration, "duration")?,
            modified_duration: p.finish(raw.modified_duration, "modified duration")?,
            convexity: p.finish(raw.convexity, "convexity")?,
            dv01: p.finish(raw.dv01, "dv01")?,
        })
    }
}

fn raw_analytics(
    coupon_rate: f64,
    face_value: f64,
    years: f64,
    yield_rate: f64,
    periods_per_year: u32,
) -> Result<BondAnalytics, AnalyticalError> {
    let schedule = cashflow_schedule(coupon_rate, face_value, years, periods_per_year)?;
    AnalyticalError::check_finite("yield_to_maturity", yield_rate)?;

    let base = 1.0 + yield_rate / periods_per_year as f64;
    if base <= 0.0 {
        return Err(AnalyticalError::NumericalInstability {
            message: format!("1 + yield/periods_per_year = {} is not positive", base),
        });
    }

    let mut pv = 0.0;
    let mut time_weighted = 0.0;
    let mut time_sq_weighted = 0.0;
    for cf in &schedule {
        let pv_i = cf.amount * base.powf(-(cf.period as f64));
        pv += pv_i;
        time_weighted += cf.time * pv_i;
        time_sq_weighted += cf.time * cf.time * pv_i;
    }

    let matured = schedule.len() == 1 && schedule[0].period == 0;
    let (duration, convexity) = if matured {
        (0.0, 0.0)
    } else if pv == 0.0 {
        return Err(AnalyticalError::NumericalInstability {
            message: "bond present value is zero".to_string(),
        });
    } else {
        (time_weighted / pv, time_sq_weighted / pv)
    };
    let modified_duration = duration / base;

    Ok(BondAnalytics {
        pv,
        duration,
        modified_duration,
        convexity,
        dv01: modified_duration * pv * 1e-4,
    })
}

/// Present value of a bond at a flat yield, rounded to 6 decimals.
///
/// # Examples
/// ```
/// use pricer_models::analytical::bond::bond_pv;
///
/// // Par bond
/// assert_eq!(bond_pv(0.05, 1000.0, 2.0, 0.05, 2).unwrap(), 1000.0);
/// ```
pub fn bond_pv(
    coupon_rate: f64,
    face_value: f64,
    years: f64,
    yield_rate: f64,
    periods_per_year: u32,
) -> PricingResult<f64> {
    let raw = raw_analytics(coupon_rate, face_value, years, yield_rate, periods_per_year)?;
    Precision::CURVE.finish(raw.pv, "bond pv")
}

/// Macaulay duration in years, rounded to 6 decimals.
pub fn duration(
    coupon_rate: f64,
    face_value: f64,
    years: f64,
    yield_rate: f64,
    periods_per_year: u32,
) -> PricingResult<f64> {
    let raw = raw_analytics(coupon_rate, face_value, years, yield_rate, periods_per_year)?;
    Precision::CURVE.finish(raw.duration, "duration")
}

/// Convexity in years squared, rounded to 6 decimals.
pub fn convexity(
    coupon_rate: f64,
    face_value: f64,
    years: f64,
    yield_rate: f64,
    periods_per_year: u32,
) -> PricingResult<f64> {
    let raw = raw_analytics(coupon_rate, face_value, years, yield_rate, periods_per_year)?;
    Precision::CURVE.finish(raw.convexity, "convexity")
}

/// Modified duration, rounded to 6 decimals.
pub fn modified_duration(
    coupon_rate: f64,
    face_value: f64,
    years: f64,
    yield_rate: f64,
    periods_per_year: u32,
) -> PricingResult<f64> {
    let raw = raw_analytics(coupon_rate, face_value, years, yield_rate, periods_per_year)?;
    Precision::CURVE.finish(raw.modified_duration, "modified duration")
}

/// DV01, rounded to 6 decimals.
pub fn dv01(
    coupon_rate: f64,
    face_value: f64,
    years: f64,
    yield_rate: f64,
    periods_per_year: u32,
) -> PricingResult<f64> {
    let raw = raw_analytics(coupon_rate, face_value, years, yield_rate, periods_per_year)?;
    Precision::CURVE.finish(raw.dv01, "dv01")
}
