use pricing::analytic::d_terms;
use pricing::common::models::{Asset, OptionType};
use pricing::distribution::{cdf, pdf};

use crate::error::RiskError;

/// Sensitivity of the option value to a unit change of the asset price.
/// See https://en.wikipedia.org/wiki/Greeks_(finance)
pub fn delta(
    asset: &Asset,
    strike: f64,
    time: f64,
    option_type: OptionType,
) -> Result<f64, RiskError> {
    let (d1, _) = d_terms(asset, strike, time)?;
    let carry = (-asset.dividend_yield * time).exp();
    let delta = match option_type {
        OptionType::Call => carry * cdf(d1),
        OptionType::Put => carry * (cdf(d1) - 1.0),
    };
    Ok(delta)
}

/// Sensitivity of the option value to a unit change of the volatility,
/// identical for put and call.
pub fn vega(asset: &Asset, strike: f64, time: f64) -> Result<f64, RiskError> {
    let (d1, _) = d_terms(asset, strike, time)?;
    let carry = (-asset.dividend_yield * time).exp();
    Ok(asset.initial_price * carry * pdf(d1) * time.sqrt())
}

/// Sensitivity of the option value to a unit change of the risk-free rate.
pub fn rho(
    asset: &Asset,
    strike: f64,
    time: f64,
    option_type: OptionType,
) -> Result<f64, RiskError> {
    let (_, d2) = d_terms(asset, strike, time)?;
    let disc_strike = strike * time * (-asset.risk_free_rate * time).exp();
    let rho = match option_type {
        OptionType::Call => disc_strike * cdf(d2),
        OptionType::Put => -disc_strike * cdf(-d2),
    };
    Ok(rho)
}

/// Decay of the option value per year of calendar time.
pub fn theta(
    asset: &Asset,
    strike: f64,
    time: f64,
    option_type: OptionType,
) -> Result<f64, RiskError> {
    let (d1, d2) = d_terms(asset, strike, time)?;
    let carry = (-asset.dividend_yield * time).exp();
    let disc_factor = (-asset.risk_free_rate * time).exp();
    let decay =
        -asset.initial_price * carry * pdf(d1) * asset.volatility / (2.0 * time.sqrt());
    let theta = match option_type {
        OptionType::Call => {
            decay + asset.dividend_yield * asset.initial_price * carry * cdf(d1)
                - asset.risk_free_rate * strike * disc_factor * cdf(d2)
        }
        OptionType::Put => {
            decay - asset.dividend_yield * asset.initial_price * carry * cdf(-d1)
                + asset.risk_free_rate * strike * disc_factor * cdf(-d2)
        }
    };
    Ok(theta)
}

/// The first order sensitivities of one European option contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    pub delta: f64,
    pub vega: f64,
    pub rho: f64,
    pub theta: f64,
}

impl Greeks {
    pub fn evaluate(
        asset: &Asset,
        strike: f64,
        time: f64,
        option_type: OptionType,
    ) -> Result<Self, RiskError> {
        Ok(Self {
            delta: delta(asset, strike, time, option_type)?,
            vega: vega(asset, strike, time)?,
            rho: rho(asset, strike, time, option_type)?,
            theta: theta(asset, strike, time, option_type)?,
        })
    }
}
