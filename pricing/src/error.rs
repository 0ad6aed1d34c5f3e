use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PricingError {
    /// A market or contract parameter outside its domain.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    /// A time to expiration which does not identify a live contract.
    #[error("time to expiration must be positive, got {0}")]
    InvalidContract(f64),
    /// An option type selection outside call / put.
    #[error("unknown option type '{0}', expected 'call' or 'put'")]
    InvalidOptionType(String),
}
