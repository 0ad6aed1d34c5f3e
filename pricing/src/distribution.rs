use probability::distribution::{Continuous, Distribution, Gaussian};

/// Standard normal cumulative distribution function.
///
/// `cdf(+inf)` and `cdf(-inf)` return the limits 1 and 0 exactly; a NaN
/// argument propagates to NaN.
pub fn cdf(x: f64) -> f64 {
    if x.is_infinite() {
        return if x > 0.0 { 1.0 } else { 0.0 };
    }
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(x)
}

/// Standard normal probability density `exp(-x^2 / 2) / sqrt(2 * pi)`.
///
/// `pdf(+-inf)` returns the limit 0; a NaN argument propagates to NaN.
pub fn pdf(x: f64) -> f64 {
    if x.is_infinite() {
        return 0.0;
    }
    let normal = Gaussian::new(0.0, 1.0);
    normal.density(x)
}
