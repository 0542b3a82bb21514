use rust_decimal::{Decimal, RoundingStrategy};

// ================================================
// PUBLIC FUNCTIONS
// ================================================

/// Decimal places of a currency amount.
pub const CURRENCY_DECIMALS: u32 = 2;

/// Round an amount to whole cents.
///
/// Rounds the exact binary value of `x`, so 2.675 (stored as 2.67499999...) rounds
/// down to 2.67. Only exact half-cent ties go to the even cent.
pub fn round_currency(x: f64) -> f64 {
    round_half_even(x, CURRENCY_DECIMALS)
}

// ================================================
// PRIVATE FUNCTIONS
// ================================================

fn round_half_even(x: f64, digits: u32) -> f64 {
    // Not finite, or too large to carry any fraction
    let Some(exact) = Decimal::from_f64_retain(x) else {
        return x;
    };
    let rounded = exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven);
    rounded.mantissa() as f64 / 10f64.powi(rounded.scale() as i32)
}
