//! Integration tests for yield curve bootstrapping.
//!
//! These tests verify end-to-end behaviour of the bootstrapper: curve shape
//! on a realistic quote set, determinism of the curve hash and independence
//! from input order. Bond pricing off a bootstrapped curve is covered in
//! `pricer_risk/tests/curve_bond_integration.rs`.

use pricer_core::hashing::content_hash;
use pricer_core::market_data::Curve;
use pricer_optimiser::bootstrapping::{
    bootstrap_curve, BootstrapError, RatesInstrument, SequentialBootstrapper,
};
use proptest::prelude::*;
use serde_json::json;

fn market_quotes() -> Vec<RatesInstrument> {
    vec![
        RatesInstrument::deposit(0.25, 0.029),
        RatesInstrument::deposit(0.5, 0.030),
        RatesInstrument::deposit(1.0, 0.031),
        RatesInstrument::swap(2.0, 0.033),
        RatesInstrument::swap(3.0, 0.035),
        RatesInstrument::swap(5.0, 0.038),
        RatesInstrument::swap(7.0, 0.040),
        RatesInstrument::swap(10.0, 0.042),
    ]
}

// ============================================================================
// End-to-End Bootstrap Flow Tests
// ============================================================================

#[test]
fn test_end_to_end_curve_shape() {
    let curve = bootstrap_curve(&market_quotes()).unwrap();

    assert_eq!(curve.len(), 8);
    let dfs = curve.discount_factors();
    for i in 1..dfs.len() {
        assert!(
            dfs[i] < dfs[i - 1],
            "DF at {} should be less than DF at {}",
            curve.tenors()[i],
            curve.tenors()[i - 1]
        );
    }
    for p in curve.points() {
        assert!(p.zero_rate > 0.02 && p.zero_rate < 0.05);
    }
}

#[test]
fn test_deposits_reprice_exactly() {
    let curve = bootstrap_curve(&market_quotes()).unwrap();

    for (tenor, rate) in [(0.25, 0.029), (0.5, 0.030), (1.0, 0.031)] {
        let df = curve.discount_factor(tenor).unwrap();
        assert!((df - 1.0 / (1.0 + rate * tenor)).abs() <= 0.5e-6 + 1e-12);
        let point = curve.points().iter().find(|p| p.tenor == tenor).unwrap();
        assert_eq!(point.zero_rate, rate);
    }
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[test]
fn test_hash_is_deterministic() {
    let a = bootstrap_curve(&market_quotes()).unwrap();
    let b = bootstrap_curve(&market_quotes()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.curve_hash(), b.curve_hash());
    assert_eq!(a.curve_hash().len(), 64);
    assert!(a.curve_hash().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_input_order_does_not_matter() {
    let forward = bootstrap_curve(&[
        RatesInstrument::swap(2.0, 0.035),
        RatesInstrument::deposit(1.0, 0.03),
    ])
    .unwrap();
    let reversed = bootstrap_curve(&[
        RatesInstrument::deposit(1.0, 0.03),
        RatesInstrument::swap(2.0, 0.035),
    ])
    .unwrap();

    assert_eq!(forward.tenors(), vec![1.0, 2.0]);
    assert_eq!(forward.curve_hash(), reversed.curve_hash());
}

#[test]
fn test_different_quotes_change_hash() {
    let a = bootstrap_curve(&[RatesInstrument::deposit(1.0, 0.03)]).unwrap();
    let b = bootstrap_curve(&[RatesInstrument::deposit(1.0, 0.031)]).unwrap();
    assert_ne!(a.curve_hash(), b.curve_hash());
}

#[test]
fn test_curve_survives_json_round_trip() {
    let curve = bootstrap_curve(&market_quotes()).unwrap();
    let json = serde_json::to_string(&curve).unwrap();
    let loaded: Curve = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded.curve_hash(), curve.curve_hash());
    assert_eq!(
        content_hash(loaded.points()).unwrap(),
        content_hash(curve.points()).unwrap()
    );
}

// ============================================================================
// Record Input Tests
// ============================================================================

#[test]
fn test_bootstrap_from_records() {
    let records = vec![
        json!({"type": "swap", "tenor": 2, "rate": 0.035}),
        json!({"type": "deposit", "tenor": 1, "rate": 0.03}),
    ];
    let instruments = RatesInstrument::from_records(records).unwrap();
    let curve = bootstrap_curve(&instruments).unwrap();
    assert_eq!(curve.discount_factors()[0], 0.970874);
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_errors_map_to_pricing_categories() {
    assert!(bootstrap_curve(&[]).unwrap_err().is_empty_input());

    let dup = bootstrap_curve(&[
        RatesInstrument::deposit(1.0, 0.03),
        RatesInstrument::deposit(1.0000001, 0.03),
    ])
    .unwrap_err();
    assert!(dup.is_invalid_input());

    let nan = bootstrap_curve(&[RatesInstrument::swap(f64::NAN, 0.03)]).unwrap_err();
    assert!(nan.is_invalid_input());

    let degenerate = bootstrap_curve(&[RatesInstrument::deposit(2.0, -0.5)]).unwrap_err();
    assert!(degenerate.is_degenerate());
}

#[test]
fn test_duplicate_error_detail() {
    let err = SequentialBootstrapper::with_defaults()
        .bootstrap(&[
            RatesInstrument::swap(5.0, 0.04),
            RatesInstrument::deposit(5.0, 0.03),
        ])
        .unwrap_err();
    assert_eq!(err, BootstrapError::duplicate_tenor(5.0));
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_permutation_invariant(
        rates in proptest::collection::vec(0.0f64..0.08, 5),
        rotate in 0usize..5,
    ) {
        let tenors = [0.5, 1.0, 2.0, 3.0, 5.0];
        let quotes: Vec<RatesInstrument> = tenors
            .iter()
            .zip(rates.iter())
            .map(|(&t, &r)| {
                if t <= 1.0 {
                    RatesInstrument::deposit(t, r)
                } else {
                    RatesInstrument::swap(t, r)
                }
            })
            .collect();

        let mut shuffled = quotes.clone();
        shuffled.rotate_left(rotate);
        shuffled.reverse();

        let a = bootstrap_curve(&quotes).unwrap();
        let b = bootstrap_curve(&shuffled).unwrap();
        prop_assert_eq!(a.curve_hash(), b.curve_hash());
        prop_assert_eq!(a.tenors(), tenors.to_vec());
    }

    #[test]
    fn prop_deposit_curve_matches_closed_form(tenor in 0.01f64..5.0, rate in 0.0f64..0.1) {
        let curve = bootstrap_curve(&[RatesInstrument::deposit(tenor, rate)]).unwrap();
        let expected = 1.0 / (1.0 + rate * tenor);
        prop_assert!((curve.discount_factors()[0] - expected).abs() <= 0.5e-6 + 1e-12);
    }
}
