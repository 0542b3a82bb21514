//! # Loan Terms
//!
//! The quoted rate and amortization period of a fixed-rate mortgage. Both are
//! required and validated once, at construction; a `LoanTerms` value is immutable
//! afterwards.
//!
//! ## Quick Start
//! ```rust
//! # use rsmortgage::prelude::*;
//! let terms = LoanTerms::builder()
//!     .rate_pct(5.5)
//!     .amortization_years(25)
//!     .build()?;
//! let schedule = terms.schedule(500_000.0)?;
//! println!("Monthly payment: {:.2}", schedule.monthly);
//! # MortgageResult::Ok(())
//! ```
//!
//! ## See Also
//! - [`crate::int_rate_convert`] for the rate conversions
//! - [`crate::schedule`] for the payment calculation

use crate::error::{MortgageError, MortgageResult};
use crate::frequency::PaymentFrequency;
use crate::int_rate_convert::{eff_i_to_nom_i, eff_i_to_periodic_i, semi_annual_nom_to_eff_i};
use crate::schedule::{PaymentSchedule, schedule_for};
use bon::bon;
use garde::Validate;

/// Quoted rate and amortization period of a fixed-rate mortgage.
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct LoanTerms {
    /// Quoted annual rate in percent, compounded semi-annually (5.5 means 5.5%).
    #[garde(custom(validate_rate_pct))]
    rate_pct: f64,

    /// Amortization period in whole years.
    #[garde(range(min = 1))]
    amortization_years: u32,
}

/// Custom validation function for rate_pct field
fn validate_rate_pct(value: &f64, _context: &()) -> garde::Result {
    if !value.is_finite() {
        return Err(garde::Error::new("rate_pct must be a finite number"));
    }
    if *value < 0.0 {
        return Err(garde::Error::new("rate_pct cannot be negative"));
    }
    Ok(())
}

#[bon]
impl LoanTerms {
    #[builder]
    pub fn new(rate_pct: f64, amortization_years: u32) -> MortgageResult<Self> {
        let terms = LoanTerms {
            rate_pct,
            amortization_years,
        };
        terms.validate()?;
        Ok(terms)
    }
}

impl LoanTerms {
    pub fn rate_pct(&self) -> f64 {
        self.rate_pct
    }

    pub fn amortization_years(&self) -> u32 {
        self.amortization_years
    }

    /// Quoted rate as a fraction (0.055 for 5.5%).
    pub fn nominal_rate(&self) -> f64 {
        self.rate_pct / 100.0
    }

    /// Effective annual rate of the semi-annually compounded quoted rate.
    pub fn effective_annual_rate(&self) -> f64 {
        semi_annual_nom_to_eff_i(self.nominal_rate())
    }

    /// Effective rate for a single payment period of `freq`.
    pub fn periodic_rate(&self, freq: PaymentFrequency) -> MortgageResult<f64> {
        eff_i_to_periodic_i(self.effective_annual_rate(), freq.periods_per_year())
    }

    /// Nominal annual rate convertible at `freq`, equivalent to the quoted rate.
    pub fn equivalent_nominal_rate(&self, freq: PaymentFrequency) -> MortgageResult<f64> {
        eff_i_to_nom_i(self.effective_annual_rate(), freq.periods_per_year())
    }

    /// Number of payments over the amortization period at `freq`.
    pub fn total_periods(&self, freq: PaymentFrequency) -> MortgageResult<u32> {
        self.amortization_years
            .checked_mul(freq.periods_per_year())
            .ok_or_else(|| {
                MortgageError::invalid_argument(
                    "amortization_years",
                    format!(
                        "{} years at {} periods per year overflows the period count",
                        self.amortization_years,
                        freq.periods_per_year()
                    ),
                )
            })
    }

    /// Payment amounts for every frequency on a loan of `principal`.
    pub fn schedule(&self, principal: f64) -> MortgageResult<PaymentSchedule> {
        schedule_for(self, principal)
    }
}
