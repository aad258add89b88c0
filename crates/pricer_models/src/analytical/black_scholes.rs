//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Reporting Conventions
//!
//! - Vega per 1 volatility point (÷100)
//! - Rho per 1 rate point (÷100)
//! - Theta per calendar day (annual ÷365)
//!
//! ## Limits
//!
//! | Regime | Price | Delta | Gamma, Vega, Theta | Rho |
//! |--------|-------|-------|--------------------|-----|
//! | `T ≤ 0` | intrinsic | binary | 0 | 0 |
//! | `σ = 0`, `T > 0` | discounted intrinsic | binary | 0 | `±K·T·e^(-rT)/100` when in the money, else 0 |
//! | otherwise | closed form | closed form | closed form | closed form |

use pricer_core::math::distributions::{normal_cdf, normal_pdf};
use pricer_core::types::{Precision, PricingResult};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

use super::error::AnalyticalError;
use crate::instruments::OptionType;

/// Calendar days per year used to express theta per day.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Option sensitivities under the reporting conventions of this module.
///
/// # Examples
/// ```
/// use pricer_models::analytical::Greeks;
///
/// let g = Greeks { delta: 0.5, gamma: 0.1, vega: 0.2, theta: -0.01, rho: 0.05 };
/// let total = g.scaled(10.0) + Greeks::zero();
/// assert_eq!(total.delta, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ per volatility point
    pub vega: f64,
    /// ∂V/∂t per calendar day
    pub theta: f64,
    /// ∂V/∂r per rate point
    pub rho: f64,
}

impl Greeks {
    /// All sensitivities zero.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Multiply every sensitivity by `factor` (position quantity).
    #[inline]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            vega: self.vega * factor,
            theta: self.theta * factor,
            rho: self.rho * factor,
        }
    }

    /// Round every field under `precision`, rejecting non-finite values.
    pub fn finish(&self, precision: Precision) -> PricingResult<Self> {
        Ok(Self {
            delta: precision.finish(self.delta, "delta")?,
            gamma: precision.finish(self.gamma, "gamma")?,
            vega: precision.finish(self.vega, "vega")?,
            theta: precision.finish(self.theta, "theta")?,
            rho: precision.finish(self.rho, "rho")?,
        })
    }
}

impl Add for Greeks {
    type Output = Greeks;

    fn add(self, rhs: Greeks) -> Greeks {
        Greeks {
            delta: self.delta + rhs.delta,
            gamma: self.gamma + rhs.gamma,
            vega: self.vega + rhs.vega,
            theta: self.theta + rhs.theta,
            rho: self.rho + rhs.rho,
        }
    }
}

impl AddAssign for Greeks {
    fn add_assign(&mut self, rhs: Greeks) {
        *self = *self + rhs;
    }
}

/// Which closed form applies to a set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Regime {
    Expired,
    ZeroVolatility,
    Lognormal,
}

/// Black-Scholes valuation of one European option.
///
/// Bundles the inputs once validated; [`BlackScholes::price`] and
/// [`BlackScholes::greeks`] return unrounded values. The free functions
/// [`price`] and [`greeks`] are the rounded public entry points.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::OptionType;
///
/// let call = BlackScholes::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let put = BlackScholes::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call.price().unwrap() - put.price().unwrap() - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
}

impl BlackScholes {
    /// Validate and bundle option inputs.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidVolatility` if volatility is negative or non-finite
    /// - `AnalyticalError::InvalidParameter` if any other input is non-finite
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, AnalyticalError> {
        AnalyticalError::check_finite("S", spot)?;
        AnalyticalError::check_finite("K", strike)?;
        AnalyticalError::check_finite("T", expiry)?;
        AnalyticalError::check_finite("r", rate)?;
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the option direction.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    fn regime(&self) -> Regime {
        if self.expiry <= 0.0 {
            Regime::Expired
        } else if self.volatility == 0.0 {
            Regime::ZeroVolatility
        } else {
            Regime::Lognormal
        }
    }

    #[inline]
    fn discount(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Binary delta used wherever the distribution has collapsed.
    fn binary_delta(&self) -> f64 {
        match self.option_type {
            OptionType::Call if self.spot > self.strike => 1.0,
            OptionType::Put if self.spot < self.strike => -1.0,
            _ => 0.0,
        }
    }

    /// Computes `(d₁, d₂)` for the lognormal regime.
    ///
    /// # Errors
    /// `AnalyticalError::NonPositiveUnderlying` if `S ≤ 0` or `K ≤ 0`.
    pub fn d1_d2(&self) -> Result<(f64, f64), AnalyticalError> {
        if self.spot <= 0.0 || self.strike <= 0.0 {
            return Err(AnalyticalError::NonPositiveUnderlying {
                spot: self.spot,
                strike: self.strike,
            });
        }
        let vol_sqrt_t = self.volatility * self.expiry.sqrt();
        let log_moneyness = (self.spot / self.strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * self.expiry;
        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        Ok((d1, d1 - vol_sqrt_t))
    }

    /// Unrounded option value.
    ///
    /// # Errors
    /// `AnalyticalError::NonPositiveUnderlying` in the lognormal regime when
    /// `S ≤ 0` or `K ≤ 0`.
    pub fn price(&self) -> Result<f64, AnalyticalError> {
        match self.regime() {
            Regime::Expired => Ok(self.option_type.intrinsic(self.spot, self.strike)),
            Regime::ZeroVolatility => Ok(self
                .option_type
                .intrinsic(self.spot, self.strike * self.discount())),
            Regime::Lognormal => {
                let (d1, d2) = self.d1_d2()?;
                let df = self.discount();
                Ok(match self.option_type {
                    // C = S·N(d₁) - K·e^(-rT)·N(d₂)
                    OptionType::Call => self.spot * normal_cdf(d1) - self.strike * df * normal_cdf(d2),
                    // P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
                    OptionType::Put => self.strike * df * normal_cdf(-d2) - self.spot * normal_cdf(-d1),
                })
            }
        }
    }

    /// Unrounded Greeks.
    ///
    /// # Errors
    /// `AnalyticalError::NonPositiveUnderlying` in the lognormal regime when
    /// `S ≤ 0` or `K ≤ 0`.
    pub fn greeks(&self) -> Result<Greeks, AnalyticalError> {
        match self.regime() {
            Regime::Expired => Ok(Greeks {
                delta: self.binary_delta(),
                ..Greeks::zero()
            }),
            Regime::ZeroVolatility => {
                let discounted_strike = self.strike * self.discount();
                let in_the_money = self.option_type.intrinsic(self.spot, discounted_strike) > 0.0;
                let rho = if in_the_money {
                    let magnitude = discounted_strike * self.expiry / 100.0;
                    if self.option_type.is_call() {
                        magnitude
                    } else {
                        -magnitude
                    }
                } else {
                    0.0
                };
                Ok(Greeks {
                    delta: self.binary_delta(),
                    rho,
                    ..Greeks::zero()
                })
            }
            Regime::Lognormal => {
                let (d1, d2) = self.d1_d2()?;
                let sqrt_t = self.expiry.sqrt();
                let df = self.discount();
                let pdf_d1 = normal_pdf(d1);

                let gamma = pdf_d1 / (self.spot * self.volatility * sqrt_t);
                let vega = self.spot * sqrt_t * pdf_d1 / 100.0;
                let decay = -(self.spot * self.volatility * pdf_d1) / (2.0 * sqrt_t);

                let (delta, theta_annual, rho) = match self.option_type {
                    OptionType::Call => (
                        normal_cdf(d1),
                        decay - self.rate * self.strike * df * normal_cdf(d2),
                        self.strike * self.expiry * df * normal_cdf(d2),
                    ),
                    OptionType::Put => (
                        normal_cdf(d1) - 1.0,
                        decay + self.rate * self.strike * df * normal_cdf(-d2),
                        -self.strike * self.expiry * df * normal_cdf(-d2),
                    ),
                };

                Ok(Greeks {
                    delta,
                    gamma,
                    vega,
                    theta: theta_annual / DAYS_PER_YEAR,
                    rho: rho / 100.0,
                })
            }
        }
    }
}

/// Option price rounded to 8 decimals.
///
/// # Errors
/// - `PricingError::InvalidInput` for negative volatility or non-finite inputs
/// - `PricingError::DegenerateMath` for `S ≤ 0` or `K ≤ 0` when `T > 0` and `σ > 0`
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::price;
/// use pricer_models::instruments::OptionType;
///
/// let call = price(40.0, 40.0, 0.25, 0.03, 0.20, OptionType::Call).unwrap();
/// assert!((call - 1.743048).abs() < 1e-6);
///
/// // Expired options pay intrinsic value exactly
/// assert_eq!(price(105.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call).unwrap(), 5.0);
/// ```
pub fn price(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> PricingResult<f64> {
    let model = BlackScholes::new(spot, strike, expiry, rate, volatility, option_type)?;
    Precision::PRICING.finish(model.price()?, "option price")
}

/// Option Greeks rounded to 8 decimals.
///
/// # Errors
/// Same as [`price`].
pub fn greeks(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> PricingResult<Greeks> {
    let model = BlackScholes::new(spot, strike, expiry, rate, volatility, option_type)?;
    model.greeks()?.finish(Precision::PRICING)
}
