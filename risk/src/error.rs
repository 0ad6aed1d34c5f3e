use pricing::error::PricingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskError {
    #[error(transparent)]
    Pricing(#[from] PricingError),
}
