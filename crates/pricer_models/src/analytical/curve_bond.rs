//! Bond pricing off a bootstrapped discount curve.
//!
//! Uses the same cashflow schedule as the flat-yield pricer, but discounts
//! each payment with [`Curve::discount_factor`], the interpolation rule the
//! bootstrapper itself used to build the curve. Coupons are discounted at
//! their period times; the face value is discounted at `years`.

use pricer_core::market_data::Curve;
use pricer_core::types::{Precision, PricingResult};

use super::bond::cashflow_schedule;
use super::error::AnalyticalError;

/// Price a bond from a curve, rounded to 6 decimals.
///
/// # Examples
/// ```
/// use pricer_core::market_data::{Curve, CurvePoint};
/// use pricer_models::analytical::curve_bond::price_bond_on_curve;
///
/// let curve = Curve::new(vec![
///     CurvePoint::new(1.0, 0.03, 0.970874),
///     CurvePoint::new(2.0, 0.035, 0.932394),
/// ])
/// .unwrap();
///
/// let zero = price_bond_on_curve(&curve, 100.0, 0.0, 2.0, 1).unwrap();
/// assert_eq!(zero, 93.2394);
/// ```
pub fn price_bond_on_curve(
    curve: &Curve,
    face_value: f64,
    coupon_rate: f64,
    years: f64,
    periods_per_year: u32,
) -> PricingResult<f64> {
    price_bond_on_curve_with_spread(curve, face_value, coupon_rate, years, periods_per_year, 0.0)
}

/// Price a bond from a curve with a continuously compounded spread.
///
/// Every discount factor `df(t)` is multiplied by `e^(-spread·t)`. A zero
/// spread gives exactly [`price_bond_on_curve`].
///
/// # Errors
/// - `PricingError::InvalidInput` for invalid schedule parameters or a non-finite spread
/// - `PricingError::DegenerateMath` for a non-finite result
pub fn price_bond_on_curve_with_spread(
    curve: &Curve,
    face_value: f64,
    coupon_rate: f64,
    years: f64,
    periods_per_year: u32,
    spread: f64,
) -> PricingResult<f64> {
    let raw = raw_price(curve, face_value, coupon_rate, years, periods_per_year, spread)?;
    Precision::CURVE.finish(raw, "curve bond price")
}

fn raw_price(
    curve: &Curve,
    face_value: f64,
    coupon_rate: f64,
    years: f64,
    periods_per_year: u32,
    spread: f64,
) -> Result<f64, AnalyticalError> {
    let schedule = cashflow_schedule(coupon_rate, face_value, years, periods_per_year)?;
    AnalyticalError::check_finite("spread", spread)?;
    if years == 0.0 {
        return Ok(face_value);
    }

    let df = |t: f64| -> Result<f64, AnalyticalError> {
        let base = curve.discount_factor(t)?;
        Ok(if spread == 0.0 {
            base
        } else {
            base * (-spread * t).exp()
        })
    };

    let coupon = face_value * coupon_rate / periods_per_year as f64;
    let mut pv = 0.0;
    for cf in schedule.iter().filter(|cf| cf.period > 0) {
        pv += coupon * df(cf.time)?;
    }
    pv += face_value * df(years)?;
    Ok(pv)
}
