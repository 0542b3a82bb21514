//! # Annuities Certain
//!
//! Level-payment annuity factors at a periodic rate, the building block of every
//! mortgage payment in this crate.

use crate::error::{MortgageError, MortgageResult};
use bon::builder;

/// Annuity-certain immediate/in-arrears
///
/// Present value of $1 paid at the end of each of `n` periods at periodic rate `i`.
///
/// # Formula
/// ```text
/// aₙ = (1 - vⁿ) / i,   v = 1/(1+i)
/// aₙ = n               when i = 0
/// ```
/// where:
/// - `i` is the effective rate per payment period
/// - `n` is the total number of payment periods
///
/// A zero rate is special-cased so that a zero-interest loan spreads the principal
/// evenly across the periods.
///
/// # Errors
/// `InvalidArgument` when `n` is 0.
///
/// # Examples
/// ```rust
/// # use rsmortgage::prelude::*;
/// let factor = an().i(0.004532).n(300).call()?;
/// println!("Annuity-certain in arrears: {:.6}", factor);
/// # MortgageResult::Ok(())
/// ```
#[builder]
pub fn an(i: f64, n: u32) -> MortgageResult<f64> {
    check_periods(n)?;
    let n = f64::from(n);
    if i == 0.0 {
        return Ok(n);
    }
    // aₙ = (1 - (1+i)⁻ⁿ) / i
    Ok((1.0 - (1.0 + i).powf(-n)) / i)
}

/// Accumulated value of an annuity-certain immediate (in arrears).
///
/// Value at the end of period `n` of $1 paid at the end of each period.
///
/// # Formula
/// ```text
/// sₙ = ((1+i)ⁿ - 1) / i = aₙ · (1+i)ⁿ
/// sₙ = n               when i = 0
/// ```
///
/// # Errors
/// `InvalidArgument` when `n` is 0.
#[builder]
pub fn sn(i: f64, n: u32) -> MortgageResult<f64> {
    let annuity = an().i(i).n(n).call()?;
    let factor = (1.0 + i).powf(f64::from(n));
    Ok(annuity * factor)
}

fn check_periods(n: u32) -> MortgageResult<()> {
    if n == 0 {
        return Err(MortgageError::invalid_argument(
            "n",
            "total number of periods must be at least 1",
        ));
    }
    Ok(())
}
