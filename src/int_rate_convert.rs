use crate::error::{MortgageError, MortgageResult};

/// Compounding frequency of a quoted Canadian mortgage rate (semi-annual).
pub const CANADIAN_MORTGAGE_COMPOUNDING: u32 = 2;

/// Convert nominal interest rate to effective interest rate.
///
/// # Formula
/// ```text
/// i = (1 + i⁽ᵐ⁾/m)^m - 1
/// ```
/// where:
/// - `nom_i` is the nominal interest rate convertible m times per year
/// - `m` is the number of conversion periods per year (m-payable for nominal i)
///
/// # Errors
/// `InvalidArgument` when `m` is 0.
///
/// # Example
/// ```rust
/// # use rsmortgage::prelude::*;
/// let eff = nom_i_to_eff_i(0.06, 2)?; // semi-annual nominal 6%
/// println!("Effective i: {:.6}", eff);
/// # MortgageResult::Ok(())
/// ```
pub fn nom_i_to_eff_i(nom_i: f64, m: u32) -> MortgageResult<f64> {
    check_frequency("m", m)?;
    let m_f64 = f64::from(m);
    Ok((1.0 + nom_i / m_f64).powf(m_f64) - 1.0)
}

/// Convert a quoted mortgage rate, compounded semi-annually, to the effective annual rate.
///
/// # Formula
/// ```text
/// i = (1 + i⁽²⁾/2)² - 1
/// ```
///
/// Negative rates are not rejected; the result is mathematically valid but has no
/// financial meaning.
///
/// # Example
/// ```rust
/// # use rsmortgage::prelude::semi_annual_nom_to_eff_i;
/// let eff = semi_annual_nom_to_eff_i(0.055);
/// assert!((eff - 0.05575625).abs() < 1e-12);
/// ```
pub fn semi_annual_nom_to_eff_i(nom_i: f64) -> f64 {
    let half = nom_i / f64::from(CANADIAN_MORTGAGE_COMPOUNDING);
    (1.0 + half).powi(CANADIAN_MORTGAGE_COMPOUNDING as i32) - 1.0
}

/// Convert effective annual interest rate to the effective rate for one of `m` periods per year.
///
/// # Formula
/// ```text
/// j = (1 + i)¹⁄ᵐ - 1
/// ```
///
/// # Errors
/// `InvalidArgument` when `m` is 0.
///
/// # Example
/// ```rust
/// # use rsmortgage::prelude::*;
/// let monthly = eff_i_to_periodic_i(0.05575625, 12)?;
/// println!("Monthly rate: {:.8}", monthly);
/// # MortgageResult::Ok(())
/// ```
pub fn eff_i_to_periodic_i(eff_i: f64, m: u32) -> MortgageResult<f64> {
    check_frequency("periods_per_year", m)?;
    Ok((1.0 + eff_i).powf(1.0 / f64::from(m)) - 1.0)
}

/// Convert effective interest rate to nominal interest rate (m-payable).
///
/// # Formula
/// ```text
/// i⁽ᵐ⁾ = m[(1 + i)¹⁄ᵐ - 1]
/// ```
/// where:
/// - `eff_i` is the effective annual interest rate
/// - `m` is the number of conversion periods per year (m-payable for nominal i)
///
/// # Example
/// ```rust
/// # use rsmortgage::prelude::*;
/// let nom = eff_i_to_nom_i(0.0609, 2)?; // effective 6.09% to nominal semi-annual
/// println!("Nominal i: {:.6}", nom);
/// # MortgageResult::Ok(())
/// ```
pub fn eff_i_to_nom_i(eff_i: f64, m: u32) -> MortgageResult<f64> {
    let periodic = eff_i_to_periodic_i(eff_i, m)?;
    Ok(f64::from(m) * periodic)
}

fn check_frequency(name: &'static str, m: u32) -> MortgageResult<()> {
    if m == 0 {
        return Err(MortgageError::invalid_argument(
            name,
            "number of periods per year must be at least 1",
        ));
    }
    Ok(())
}
