//! Sequential bootstrapping engine.
//!
//! Instruments are stripped in ascending tenor order. Each pillar is solved
//! in closed form from the quote and the pillars already known, so there is
//! no root finding and the result is a pure function of the quote set.

use pricer_core::market_data::{Curve, CurvePoint};
use pricer_core::math::interpolators::interpolate_linear_flat;
use pricer_core::types::{Precision, PricingResult};
use tracing::debug;

use super::config::BootstrapConfig;
use super::error::BootstrapError;
use super::instrument::{InstrumentType, RatesInstrument};

/// Sequential bootstrapping engine.
///
/// 1. Validate every instrument
/// 2. Stable-sort by tenor and reject duplicates
/// 3. Solve each pillar from the previous ones
/// 4. Round to 6 decimals and hash the curve
///
/// Internally the solved discount factors stay unrounded; rounding is
/// applied only to the returned pillars.
///
/// # Examples
///
/// ```
/// use pricer_optimiser::bootstrapping::{RatesInstrument, SequentialBootstrapper};
///
/// let bootstrapper = SequentialBootstrapper::with_defaults();
/// let curve = bootstrapper
///     .bootstrap(&[RatesInstrument::deposit(1.0, 0.03)])
///     .unwrap();
///
/// assert_eq!(curve.discount_factors(), vec![0.970874]);
/// assert_eq!(curve.points()[0].zero_rate, 0.03);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequentialBootstrapper {
    config: BootstrapConfig,
}

impl SequentialBootstrapper {
    /// Create a new sequential bootstrapper.
    pub fn new(config: BootstrapConfig) -> Self {
        Self { config }
    }

    /// Create a bootstrapper with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(BootstrapConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Bootstrap a discount curve from market quotes.
    ///
    /// # Errors
    ///
    /// * `BootstrapError::EmptyInput` - No instruments
    /// * `BootstrapError::InvalidInstrument` - Bad tenor, rate or frequency
    /// * `BootstrapError::DuplicateTenor` - Two quotes at the same tenor
    /// * `BootstrapError::Degenerate` - Zero denominator or non-positive deposit DF
    pub fn bootstrap(&self, instruments: &[RatesInstrument]) -> Result<Curve, BootstrapError> {
        if instruments.is_empty() {
            return Err(BootstrapError::EmptyInput);
        }
        for (index, inst) in instruments.iter().enumerate() {
            inst.validate()
                .map_err(|reason| BootstrapError::invalid_instrument(index, reason))?;
        }

        let mut sorted: Vec<RatesInstrument> = instruments.to_vec();
        sorted.sort_by(|a, b| a.tenor.total_cmp(&b.tenor));
        for pair in sorted.windows(2) {
            if format!("{:.6}", pair[0].tenor) == format!("{:.6}", pair[1].tenor) {
                return Err(BootstrapError::duplicate_tenor(pair[1].tenor));
            }
        }

        let mut tenors: Vec<f64> = Vec::with_capacity(sorted.len());
        let mut dfs: Vec<f64> = Vec::with_capacity(sorted.len());
        let mut zeros: Vec<f64> = Vec::with_capacity(sorted.len());

        for inst in &sorted {
            let (df, zero) = match inst.instrument_type {
                InstrumentType::Deposit => self.solve_deposit(inst)?,
                InstrumentType::Swap => self.solve_swap(inst, &tenors, &dfs)?,
            };
            debug!(
                tenor = inst.tenor,
                kind = ?inst.instrument_type,
                discount_factor = df,
                zero_rate = zero,
                "bootstrapped pillar"
            );
            tenors.push(inst.tenor);
            dfs.push(df);
            zeros.push(zero);
        }

        let points = tenors
            .iter()
            .zip(dfs.iter().zip(zeros.iter()))
            .map(|(&t, (&df, &z))| {
                CurvePoint::new(
                    Precision::CURVE.round(t),
                    Precision::CURVE.round(z),
                    Precision::CURVE.round(df),
                )
            })
            .collect();

        let curve = Curve::new(points)?;
        debug!(pillars = curve.len(), curve_hash = curve.curve_hash(), "curve built");
        Ok(curve)
    }

    fn solve_deposit(&self, inst: &RatesInstrument) -> Result<(f64, f64), BootstrapError> {
        let denom = 1.0 + inst.rate * inst.tenor;
        if denom.abs() < self.config.tolerance {
            return Err(BootstrapError::degenerate(inst.tenor, "1 + rate * tenor is zero"));
        }
        let df = 1.0 / denom;
        if df <= 0.0 {
            return Err(BootstrapError::degenerate(
                inst.tenor,
                format!("deposit discount factor {} is not positive", df),
            ));
        }
        Ok((df, inst.rate))
    }

    fn solve_swap(
        &self,
        inst: &RatesInstrument,
        known_tenors: &[f64],
        known_dfs: &[f64],
    ) -> Result<(f64, f64), BootstrapError> {
        let m = inst.periods_per_year() as f64;
        let coupon = inst.rate / m;
        let n = ((inst.tenor * m).round() as u64).max(1);

        // Coupon dates before maturity use the curve so far; with no
        // pillars yet they are discounted at 1.
        let pv_known: f64 = (1..n)
            .map(|i| {
                let t = i as f64 / m;
                coupon * interpolate_linear_flat(known_tenors, known_dfs, t).unwrap_or(1.0)
            })
            .sum();

        let denom = 1.0 + coupon;
        if denom.abs() < self.config.tolerance {
            return Err(BootstrapError::degenerate(inst.tenor, "1 + coupon is zero"));
        }
        let df = ((1.0 - pv_known) / denom).max(self.config.df_floor);
        let zero = -df.ln() / inst.tenor;
        if !zero.is_finite() {
            return Err(BootstrapError::degenerate(
                inst.tenor,
                format!("zero rate is not finite for discount factor {}", df),
            ));
        }
        Ok((df, zero))
    }
}

/// Bootstrap with the default configuration.
///
/// # Errors
/// Bootstrap failures mapped onto the shared `PricingError` categories.
pub fn bootstrap_curve(instruments: &[RatesInstrument]) -> PricingResult<Curve> {
    Ok(SequentialBootstrapper::with_defaults().bootstrap(instruments)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Deposit Tests
    // ========================================

    #[test]
    fn test_single_deposit() {
        let curve = bootstrap_curve(&[RatesInstrument::deposit(1.0, 0.03)]).unwrap();
        assert_eq!(curve.tenors(), vec![1.0]);
        assert_eq!(curve.discount_factors(), vec![0.970874]);
        assert_eq!(curve.points()[0].zero_rate, 0.03);
    }

    #[test]
    fn test_deposit_degenerate_denominator() {
        let err = SequentialBootstrapper::with_defaults()
            .bootstrap(&[RatesInstrument::deposit(1.0, -1.0)])
            .unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_deposit_negative_discount_factor() {
        let err = SequentialBootstrapper::with_defaults()
            .bootstrap(&[RatesInstrument::deposit(1.0, -2.0)])
            .unwrap_err();
        assert!(err.is_degenerate());
    }

    // ========================================
    // Swap Tests
    // ========================================

    #[test]
    fn test_swap_after_deposit() {
        // Semiannual 2y swap at 3.5%: coupons at 0.5 / 1.0 / 1.5 read the
        // 1y deposit pillar flat or exactly.
        let curve = bootstrap_curve(&[
            RatesInstrument::deposit(1.0, 0.03),
            RatesInstrument::swap(2.0, 0.035),
        ])
        .unwrap();

        let df1 = 1.0 / 1.03;
        let c = 0.0175;
        let expected = (1.0 - 3.0 * c * df1) / (1.0 + c);
        assert_eq!(curve.tenors(), vec![1.0, 2.0]);
        assert_relative_eq!(curve.discount_factors()[1], expected, epsilon = 1e-6);
        assert_relative_eq!(
            curve.points()[1].zero_rate,
            -expected.ln() / 2.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_swap_first_uses_unit_discounting() {
        let curve = bootstrap_curve(&[RatesInstrument::swap_with_frequency(2.0, 0.04, 1)]).unwrap();
        let expected = (1.0 - 0.04) / 1.04;
        assert_relative_eq!(curve.discount_factors()[0], expected, epsilon = 1e-6);
    }

    #[test]
    fn test_short_swap_has_one_period() {
        // tenor * ppy rounds to 0, so one period with no intermediate coupons
        let curve = bootstrap_curve(&[RatesInstrument::swap(0.1, 0.02)]).unwrap();
        assert_relative_eq!(curve.discount_factors()[0], 1.0 / 1.01, epsilon = 1e-6);
    }

    #[test]
    fn test_swap_discount_factor_floor() {
        // Two unit coupons already exceed par, so the raw factor is negative
        let curve = bootstrap_curve(&[
            RatesInstrument::deposit(1.0, 0.0),
            RatesInstrument::swap_with_frequency(3.0, 1.0, 1),
        ])
        .unwrap();
        assert_eq!(curve.discount_factors()[1], 0.0);
        assert_relative_eq!(
            curve.points()[1].zero_rate,
            Precision::CURVE.round(-(1e-8f64).ln() / 3.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_swap_coupon_minus_one_is_degenerate() {
        let err = SequentialBootstrapper::with_defaults()
            .bootstrap(&[RatesInstrument::swap_with_frequency(1.0, -1.0, 1)])
            .unwrap_err();
        assert!(err.is_degenerate());
    }

    // ========================================
    // Validation Tests
    // ========================================

    #[test]
    fn test_empty_input() {
        let err = bootstrap_curve(&[]).unwrap_err();
        assert!(err.is_empty_input());
    }

    #[test]
    fn test_duplicate_tenor() {
        let err = SequentialBootstrapper::with_defaults()
            .bootstrap(&[
                RatesInstrument::deposit(1.0, 0.03),
                RatesInstrument::swap(1.0, 0.031),
            ])
            .unwrap_err();
        assert!(err.is_duplicate_tenor());
    }

    #[test]
    fn test_invalid_tenor_reports_index() {
        let err = SequentialBootstrapper::with_defaults()
            .bootstrap(&[
                RatesInstrument::deposit(1.0, 0.03),
                RatesInstrument::deposit(-1.0, 0.03),
            ])
            .unwrap_err();
        assert!(matches!(err, BootstrapError::InvalidInstrument { index: 1, .. }));
    }

    #[test]
    fn test_unbounded_swap_rejected_before_solving() {
        let err = SequentialBootstrapper::with_defaults()
            .bootstrap(&[
                RatesInstrument::deposit(1.0, 0.03),
                RatesInstrument::swap_with_frequency(1.0e9, 0.03, 12),
            ])
            .unwrap_err();
        assert!(matches!(err, BootstrapError::InvalidInstrument { index: 1, .. }));
    }

    #[test]
    fn test_custom_floor() {
        let bootstrapper =
            SequentialBootstrapper::new(BootstrapConfig::default().with_df_floor(0.5));
        let curve = bootstrapper
            .bootstrap(&[RatesInstrument::swap_with_frequency(1.0, 3.0, 1)])
            .unwrap();
        assert_eq!(curve.discount_factors(), vec![0.5]);
    }
}
