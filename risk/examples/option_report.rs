use pricing::analytic::OptionPrice;
use pricing::common::models::{Asset, OptionType};
use risk::sensitivities::Greeks;

/// Prices a half-year European option on an asset trading at 40 with 1.5%
/// rates and 27% volatility, and reports both sides' sensitivities.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let asset = Asset::from_percentages(40.0, 1.5, 27.0, 0.0)?;
    let (strike, time) = (35.0, 0.5);

    println!("forward: {:>9.6}", asset.spot(time));
    println!("call:    {:>9.6}", asset.call(strike, time)?);
    println!("put:     {:>9.6}", asset.put(strike, time)?);

    for option_type in [OptionType::Call, OptionType::Put] {
        let greeks = Greeks::evaluate(&asset, strike, time, option_type)?;
        println!(
            "{:?}: delta {:.6}, vega {:.6}, rho {:.6}, theta {:.6}",
            option_type, greeks.delta, greeks.vega, greeks.rho, greeks.theta
        );
    }

    Ok(())
}
