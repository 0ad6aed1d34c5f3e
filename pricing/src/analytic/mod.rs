mod black_scholes;

pub use black_scholes::{d_terms, OptionPrice};
