//! # RSMortgage Basic Usage Example
//!
//! This example demonstrates the basic usage of the rsmortgage crate
//! for mortgage payment calculations using the builder pattern API.
//!
//! Run with `RUST_LOG=trace` to see the per-frequency rates and factors.

use rsmortgage::prelude::*;

fn main() -> MortgageResult<()> {
    env_logger::init();

    println!("RSMortgage Basic Usage Example");
    println!("==============================");
    println!();

    let principal = 500_000.0;

    // Method 1: Build the loan terms once and reuse them
    println!("Creating LoanTerms using builder pattern...");
    let terms = LoanTerms::builder()
        .rate_pct(5.5)
        .amortization_years(25)
        .build()?;

    println!("\n=== Rates (quoted {}% compounded semi-annually) ===", terms.rate_pct());
    println!("  Effective annual rate: {:.6}", terms.effective_annual_rate());
    for freq in PaymentFrequency::ALL {
        let periodic = terms.periodic_rate(freq)?;
        let nominal = terms.equivalent_nominal_rate(freq)?;
        let n = terms.total_periods(freq)?;
        println!("  {freq:<13} periodic {periodic:.8}  nominal {nominal:.6}  periods {n}");
    }

    println!("\n--- Payment Summary ---");
    let schedule = terms.schedule(principal)?;
    for (label, amount) in schedule.rows() {
        println!("{label} Payment: ${amount:.2}");
    }
    println!("-----------------------------");

    // Method 2: One call with the three scalar inputs
    println!("\n=== Zero-interest loan of 120,000 over 10 years ===");
    let zero = compute_schedule()
        .principal(120_000.0)
        .rate_pct(0.0)
        .amortization_years(10)
        .call()?;
    for (label, amount) in zero.rows() {
        println!("{label} Payment: ${amount:.2}");
    }

    // Invalid input is reported, not panicked on
    println!("\n=== Invalid input ===");
    match compute_schedule()
        .principal(-1.0)
        .rate_pct(5.5)
        .amortization_years(25)
        .call()
    {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("Rejected: {err}"),
    }

    Ok(())
}
