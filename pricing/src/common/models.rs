use std::str::FromStr;

use crate::error::PricingError;

/// Market environment of a single underlying asset.
///
/// The rate, the volatility and the dividend yield are annualized decimal
/// fractions, i.e. 5% is stored as 0.05. Use [`Asset::from_percentages`] for
/// percentage-scaled inputs; the conversion happens once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    /// the asset's price at time t = 0
    pub initial_price: f64,
    /// the annualized risk-free interest rate
    pub risk_free_rate: f64,
    /// the annualized standard deviation of the asset's returns
    pub volatility: f64,
    /// the annualized continuous dividend yield
    pub dividend_yield: f64,
}

impl Asset {
    pub fn new(
        initial_price: f64,
        risk_free_rate: f64,
        volatility: f64,
        dividend_yield: f64,
    ) -> Result<Self, PricingError> {
        if !initial_price.is_finite() || initial_price <= 0.0 {
            return Err(PricingError::InvalidParameter {
                name: "initial_price",
                value: initial_price,
            });
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(PricingError::InvalidParameter {
                name: "volatility",
                value: volatility,
            });
        }
        if !risk_free_rate.is_finite() {
            return Err(PricingError::InvalidParameter {
                name: "risk_free_rate",
                value: risk_free_rate,
            });
        }
        if !dividend_yield.is_finite() {
            return Err(PricingError::InvalidParameter {
                name: "dividend_yield",
                value: dividend_yield,
            });
        }
        Ok(Self {
            initial_price,
            risk_free_rate,
            volatility,
            dividend_yield,
        })
    }

    /// Asset paying no dividends over the option's life.
    pub fn without_dividends(
        initial_price: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        Self::new(initial_price, risk_free_rate, volatility, 0.0)
    }

    /// Constructor for percentage-scaled rate, volatility and yield
    /// (5 means 5%), converted to decimal fractions exactly once.
    pub fn from_percentages(
        initial_price: f64,
        risk_free_rate: f64,
        volatility: f64,
        dividend_yield: f64,
    ) -> Result<Self, PricingError> {
        Self::new(
            initial_price,
            0.01 * risk_free_rate,
            0.01 * volatility,
            0.01 * dividend_yield,
        )
    }

    /// The no-arbitrage spot price s(t) of the asset with initial price s(0).
    /// Model independent; it holds whether the asset price follows a geometric
    /// Brownian motion or e.g. a Levy process.
    pub fn spot(&self, time: f64) -> f64 {
        self.initial_price * ((self.risk_free_rate - self.dividend_yield) * time).exp()
    }
}

/// Exercise side of a European option contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Call,
    Put,
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Parses a selection like "call" or "Put". Anything else is rejected;
    /// re-prompting on bad input is the caller's concern.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionType(s.to_string())),
        }
    }
}
