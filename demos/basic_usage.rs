// ============================================================================
// Basic Usage Example
// ============================================================================

use wadray_math::prelude::*;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    let _ = wadray_math::utils::init_logging();

    println!("=== Wad/Ray Math Example ===\n");

    // Wad arithmetic: 2.0 * 3.0
    let product = wad_mul(&wad(2), &wad(3));
    println!("2.0 * 3.0 (wad)    = {}", product);
    println!("  human            = {}", to_human_string(&product, 18, 18)?);

    // Ray division: 1 / 3
    let third = ray_div(&ray(1), &ray(3))?;
    println!("1 / 3 (ray)        = {}", third);
    println!("  as wad           = {}", ray_to_wad(&third));

    // Percentages: 2.50% fee on 1000
    let fee_rate = Percent::from_bps(250);
    println!("2.50% of 1000      = {}", fee_rate.apply_to(&ScaledDecimal::from(1000)));

    // Token amounts
    let deposit: ScaledDecimal = "1.5".parse()?;
    let raw_usdc = to_integer_amount(&deposit, 6)?;
    println!("1.5 USDC (raw)     = {}", raw_usdc);
    println!("  back to human    = {}", from_integer_amount(&raw_usdc, 6)?);

    // Compound a 5% yearly rate per second over 30 days
    let yearly: ScaledDecimal = "0.05".parse()?;
    let per_second = from_ray(&ray_div(&ray(yearly), &ray(SECONDS_PER_YEAR))?);
    let periods = ScaledDecimal::from(30 * 24 * SECONDS_PER_HOUR);
    let growth = binomial_compound(&per_second, &periods, CompoundConfig::on_chain().terms);
    let display = DisplayConfig::ether().with_display_digits(9);
    println!("\n30-day growth      = {}", display.format(&growth)?);

    // Division by zero is an error, never a silent value
    match wad_div(&wad(1), &ScaledDecimal::zero()) {
        Ok(v) => println!("unexpected result: {}", v),
        Err(e) => println!("wad_div(1, 0)      -> {}", e),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
