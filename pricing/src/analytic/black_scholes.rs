use crate::common::models::{Asset, OptionType};
use crate::distribution::cdf;
use crate::error::PricingError;

/// The standardized moneyness terms (d1, d2) of the Black-Scholes formula.
///
/// With zero volatility the diffusion degenerates to the deterministic
/// forward and the terms collapse to the sign limit of the log forward
/// moneyness, which keeps prices and sensitivities finite.
pub fn d_terms(asset: &Asset, strike: f64, time: f64) -> Result<(f64, f64), PricingError> {
    if !strike.is_finite() || strike <= 0.0 {
        return Err(PricingError::InvalidParameter {
            name: "strike",
            value: strike,
        });
    }
    if !time.is_finite() || time <= 0.0 {
        return Err(PricingError::InvalidContract(time));
    }

    let log_moneyness = (asset.spot(time) / strike).ln();
    let sigma_exp = asset.volatility * time.sqrt();
    if sigma_exp == 0.0 {
        let d = if log_moneyness > 0.0 {
            f64::INFINITY
        } else if log_moneyness < 0.0 {
            f64::NEG_INFINITY
        } else {
            0.0
        };
        return Ok((d, d));
    }

    let d1 = (log_moneyness + 0.5 * asset.volatility.powi(2) * time) / sigma_exp;
    Ok((d1, d1 - sigma_exp))
}

/// European option prices under a given model of the asset price.
pub trait OptionPrice {
    fn call(&self, strike: f64, time: f64) -> Result<f64, PricingError>;
    fn put(&self, strike: f64, time: f64) -> Result<f64, PricingError>;

    /// The price of the side selected by `option_type`.
    fn price(&self, strike: f64, time: f64, option_type: OptionType) -> Result<f64, PricingError> {
        match option_type {
            OptionType::Call => self.call(strike, time),
            OptionType::Put => self.put(strike, time),
        }
    }
}

/// European put and call prices, with the asset price s(t) following a
/// geometric Brownian motion.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
impl OptionPrice for Asset {
    fn call(&self, strike: f64, time: f64) -> Result<f64, PricingError> {
        let (d1, d2) = d_terms(self, strike, time)?;
        let disc_factor = (-self.risk_free_rate * time).exp();
        let call = disc_factor * (self.spot(time) * cdf(d1) - strike * cdf(d2));
        Ok(call.max(0.0))
    }

    fn put(&self, strike: f64, time: f64) -> Result<f64, PricingError> {
        let (d1, d2) = d_terms(self, strike, time)?;
        let disc_factor = (-self.risk_free_rate * time).exp();
        let put = disc_factor * (strike * cdf(-d2) - self.spot(time) * cdf(-d1));
        Ok(put.max(0.0))
    }
}
