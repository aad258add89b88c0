//! Property and cross-module tests for the closed-form pricers.

use approx::assert_relative_eq;
use pricer_core::market_data::{Curve, CurvePoint};
use pricer_models::analytical::black_scholes::{greeks, price};
use pricer_models::analytical::bond::bond_pv;
use pricer_models::analytical::curve_bond::price_bond_on_curve;
use pricer_models::instruments::{OptionType, Position};
use proptest::prelude::*;
use serde_json::json;

// ========================================
// Black-Scholes Properties
// ========================================

proptest! {
    #[test]
    fn prop_put_call_parity(
        spot in 1.0f64..500.0,
        strike in 1.0f64..500.0,
        expiry in 0.01f64..5.0,
        rate in -0.02f64..0.15,
        sigma in 0.0f64..1.0,
    ) {
        let call = price(spot, strike, expiry, rate, sigma, OptionType::Call).unwrap();
        let put = price(spot, strike, expiry, rate, sigma, OptionType::Put).unwrap();
        let forward = spot - strike * (-rate * expiry).exp();
        prop_assert!((call - put - forward).abs() < 1e-4);
    }

    #[test]
    fn prop_expired_price_is_exact_intrinsic(
        spot in 0.0f64..500.0,
        strike in 0.0f64..500.0,
        sigma in 0.0f64..1.0,
    ) {
        let call = price(spot, strike, 0.0, 0.05, sigma, OptionType::Call).unwrap();
        let expected = pricer_core::types::round_to_precision((spot - strike).max(0.0), 8);
        prop_assert_eq!(call, expected);
    }

    #[test]
    fn prop_zero_vol_call_delta_is_binary(
        spot in 1.0f64..200.0,
        strike in 1.0f64..200.0,
        expiry in 0.01f64..5.0,
    ) {
        let g = greeks(spot, strike, expiry, 0.03, 0.0, OptionType::Call).unwrap();
        let expected = if spot > strike { 1.0 } else { 0.0 };
        prop_assert_eq!(g.delta, expected);
    }

    #[test]
    fn prop_outputs_are_finite(
        spot in 0.01f64..1000.0,
        strike in 0.01f64..1000.0,
        expiry in 0.0f64..10.0,
        sigma in 0.0f64..3.0,
    ) {
        let g = greeks(spot, strike, expiry, 0.05, sigma, OptionType::Put).unwrap();
        prop_assert!(g.delta.is_finite() && g.gamma.is_finite() && g.vega.is_finite());
        prop_assert!(g.theta.is_finite() && g.rho.is_finite());
    }
}

#[test]
fn test_unknown_option_type_string_is_rejected() {
    let err = "binary".parse::<OptionType>().unwrap_err();
    let pricing: pricer_core::types::PricingError = err.into();
    assert!(pricing.is_invalid_input());
}

// ========================================
// Curve Consistency
// ========================================

#[test]
fn test_zero_coupon_on_curve_matches_flat_bond_at_implied_yield() {
    // A one-period annual zero priced off the curve equals the flat-yield
    // price at the yield implied by the same discount factor.
    let df: f64 = 0.95;
    let curve = Curve::new(vec![CurvePoint::new(1.0, -df.ln(), df)]).unwrap();
    let on_curve = price_bond_on_curve(&curve, 100.0, 0.0, 1.0, 1).unwrap();
    let implied_yield = 1.0 / df - 1.0;
    let flat = bond_pv(0.0, 100.0, 1.0, implied_yield, 1).unwrap();
    assert_relative_eq!(on_curve, flat, epsilon = 1e-6);
}

#[test]
fn test_record_round_trip_through_pricer() {
    let pos = Position::from_record(json!({
        "type": "option", "S": 40, "K": 40, "T": 0.25, "r": 0.03,
        "sigma": 0.2, "option_type": "put", "quantity": 1
    }))
    .unwrap();
    let Position::Option(o) = pos else {
        panic!("Expected option position");
    };
    let p = price(o.spot, o.strike, o.expiry, o.required_rate().unwrap(), o.sigma, o.option_type)
        .unwrap();
    assert_relative_eq!(p, 1.444170, epsilon = 1e-6);
}
