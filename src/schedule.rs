//! # Payment Schedule
//!
//! Level payments for a fixed-rate mortgage at each base frequency, plus the two
//! accelerated payments.
//!
//! The quoted rate is converted once to an effective annual rate. Each base
//! frequency then gets its own periodic rate and annuity factor, and its payment is
//! `principal / aₙ`. Rapid bi-weekly and rapid weekly are half and a quarter of the
//! unrounded monthly payment. Every amount is rounded to cents on its own, so the
//! rapid amounts need not reconcile to the rounded monthly amount to the cent.
//!
//! ## Quick Start
//! ```rust
//! # use rsmortgage::prelude::*;
//! let schedule = compute_schedule()
//!     .principal(500_000.0)
//!     .rate_pct(5.5)
//!     .amortization_years(25)
//!     .call()?;
//! assert_eq!(schedule.monthly, 3051.96);
//! assert_eq!(schedule.rapid_bi_weekly, 1525.98);
//! # MortgageResult::Ok(())
//! ```

use crate::annuities_certain::an;
use crate::error::MortgageResult;
use crate::frequency::{AcceleratedFrequency, PaymentFrequency};
use crate::helpers::round_currency;
use crate::int_rate_convert::eff_i_to_periodic_i;
use crate::loan_terms::LoanTerms;
use crate::params::ScheduleParams;
use bon::builder;
use garde::Validate;
use log::{debug, trace};

/// Payment amounts, in cents precision, for one principal and set of loan terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentSchedule {
    pub monthly: f64,
    pub semi_monthly: f64,
    pub bi_weekly: f64,
    pub weekly: f64,
    /// Half the monthly payment, paid bi-weekly.
    pub rapid_bi_weekly: f64,
    /// A quarter of the monthly payment, paid weekly.
    pub rapid_weekly: f64,
}

impl PaymentSchedule {
    pub fn payment(&self, freq: PaymentFrequency) -> f64 {
        match freq {
            PaymentFrequency::Monthly => self.monthly,
            PaymentFrequency::SemiMonthly => self.semi_monthly,
            PaymentFrequency::BiWeekly => self.bi_weekly,
            PaymentFrequency::Weekly => self.weekly,
        }
    }

    pub fn rapid_payment(&self, accel: AcceleratedFrequency) -> f64 {
        match accel {
            AcceleratedFrequency::RapidBiWeekly => self.rapid_bi_weekly,
            AcceleratedFrequency::RapidWeekly => self.rapid_weekly,
        }
    }

    /// Labelled amounts: the base frequencies first, then the accelerated ones.
    pub fn rows(&self) -> [(&'static str, f64); 6] {
        [
            (PaymentFrequency::Monthly.label(), self.monthly),
            (PaymentFrequency::SemiMonthly.label(), self.semi_monthly),
            (PaymentFrequency::BiWeekly.label(), self.bi_weekly),
            (PaymentFrequency::Weekly.label(), self.weekly),
            (AcceleratedFrequency::RapidBiWeekly.label(), self.rapid_bi_weekly),
            (AcceleratedFrequency::RapidWeekly.label(), self.rapid_weekly),
        ]
    }
}

/// Compute the payment schedule of a fixed-rate mortgage.
///
/// # Parameters
/// - `principal`: Amount borrowed, > 0
/// - `rate_pct`: Quoted annual rate in percent, compounded semi-annually, >= 0
/// - `amortization_years`: Amortization period in years, >= 1
///
/// # Errors
/// `Validation` when any parameter is out of range or not finite.
#[builder]
pub fn compute_schedule(
    principal: f64,
    rate_pct: f64,
    amortization_years: u32,
) -> MortgageResult<PaymentSchedule> {
    let terms = LoanTerms::builder()
        .rate_pct(rate_pct)
        .amortization_years(amortization_years)
        .build()?;
    schedule_for(&terms, principal)
}

pub(crate) fn schedule_for(terms: &LoanTerms, principal: f64) -> MortgageResult<PaymentSchedule> {
    let params = ScheduleParams {
        terms: *terms,
        principal,
    };
    params.validate()?;

    let eff_i = terms.effective_annual_rate();
    debug!(
        "computing schedule: principal={principal}, rate_pct={}, years={}, eff_i={eff_i:.8}",
        terms.rate_pct(),
        terms.amortization_years()
    );

    let monthly = level_payment(terms, eff_i, principal, PaymentFrequency::Monthly)?;
    let semi_monthly = level_payment(terms, eff_i, principal, PaymentFrequency::SemiMonthly)?;
    let bi_weekly = level_payment(terms, eff_i, principal, PaymentFrequency::BiWeekly)?;
    let weekly = level_payment(terms, eff_i, principal, PaymentFrequency::Weekly)?;

    // Derived from the unrounded monthly payment
    let rapid_bi_weekly = accelerated_payment(monthly, AcceleratedFrequency::RapidBiWeekly);
    let rapid_weekly = accelerated_payment(monthly, AcceleratedFrequency::RapidWeekly);

    Ok(PaymentSchedule {
        monthly: round_currency(monthly),
        semi_monthly: round_currency(semi_monthly),
        bi_weekly: round_currency(bi_weekly),
        weekly: round_currency(weekly),
        rapid_bi_weekly: round_currency(rapid_bi_weekly),
        rapid_weekly: round_currency(rapid_weekly),
    })
}

// ================================================
// PRIVATE FUNCTIONS
// ================================================

fn level_payment(
    terms: &LoanTerms,
    eff_i: f64,
    principal: f64,
    freq: PaymentFrequency,
) -> MortgageResult<f64> {
    let i = eff_i_to_periodic_i(eff_i, freq.periods_per_year())?;
    let n = terms.total_periods(freq)?;
    let factor = an().i(i).n(n).call()?;
    trace!("{freq}: periodic_i={i:.10}, n={n}, an={factor:.6}");
    Ok(principal / factor)
}

fn accelerated_payment(monthly: f64, accel: AcceleratedFrequency) -> f64 {
    monthly / f64::from(accel.monthly_divisor())
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MortgageError;

    #[test]
    fn test_reference_schedules() {
        // (principal, rate %, years) -> monthly, semi-monthly, bi-weekly, weekly, rapid bi-weekly, rapid weekly
        let cases = [
            (
                (500_000.0, 5.5, 25),
                [3051.96, 1524.25, 1406.88, 703.07, 1525.98, 762.99],
            ),
            (
                (100_000.0, 4.0, 1),
                [8513.49, 4253.23, 3925.81, 1962.16, 4256.74, 2128.37],
            ),
            (
                (350_000.0, 7.25, 50),
                [2144.26, 1070.54, 988.08, 493.70, 1072.13, 536.07],
            ),
            (
                (250_000.0, 3.0, 30),
                [1051.51, 525.43, 484.99, 242.42, 525.75, 262.88],
            ),
            // rapid amounts that only the unrounded monthly payment produces
            (
                (1_000.0, 0.8, 1),
                [83.69, 41.84, 38.62, 19.31, 41.85, 20.92],
            ),
            (
                (1_000.0, 4.1, 1),
                [85.18, 42.55, 39.28, 19.63, 42.59, 21.29],
            ),
            (
                (1_000.0, 2.35, 20),
                [5.22, 2.61, 2.41, 1.20, 2.61, 1.31],
            ),
            // amounts stored just below and just above a half cent
            (
                (2_994.0, 0.0, 10),
                [24.95, 12.47, 11.52, 5.76, 12.47, 6.24],
            ),
            (
                (11_967.0, 0.0, 25),
                [39.89, 19.95, 18.41, 9.21, 19.95, 9.97],
            ),
        ];
        for ((principal, rate_pct, years), expected) in cases {
            let schedule = compute_schedule()
                .principal(principal)
                .rate_pct(rate_pct)
                .amortization_years(years)
                .call()
                .unwrap();
            let actual: Vec<f64> = schedule.rows().iter().map(|(_, v)| *v).collect();
            assert_eq!(actual, expected, "{principal} at {rate_pct}% over {years}y");
        }
    }

    #[test]
    fn test_zero_rate_schedule() {
        let schedule = compute_schedule()
            .principal(120_000.0)
            .rate_pct(0.0)
            .amortization_years(10)
            .call()
            .unwrap();
        assert_eq!(schedule.monthly, 1000.0);
        assert_eq!(schedule.semi_monthly, 500.0);
        assert_eq!(schedule.bi_weekly, 461.54);
        assert_eq!(schedule.weekly, 230.77);
        assert_eq!(schedule.rapid_bi_weekly, 500.0);
        assert_eq!(schedule.rapid_weekly, 250.0);
    }

    #[test]
    fn test_rapid_uses_unrounded_monthly() {
        let terms = LoanTerms::builder()
            .rate_pct(0.8)
            .amortization_years(1)
            .build()
            .unwrap();
        let eff_i = terms.effective_annual_rate();
        let monthly = level_payment(&terms, eff_i, 1_000.0, PaymentFrequency::Monthly).unwrap();
        let schedule = terms.schedule(1_000.0).unwrap();
        assert_eq!(schedule.rapid_bi_weekly, round_currency(monthly / 2.0));
        assert_eq!(schedule.rapid_weekly, round_currency(monthly / 4.0));

        // halving the rounded 83.69 would give 41.84
        assert_eq!(schedule.monthly, 83.69);
        assert_eq!(schedule.rapid_bi_weekly, 41.85);
        assert_ne!(schedule.rapid_bi_weekly, round_currency(schedule.monthly / 2.0));
    }

    #[test]
    fn test_accessors() {
        let schedule = compute_schedule()
            .principal(500_000.0)
            .rate_pct(5.5)
            .amortization_years(25)
            .call()
            .unwrap();
        assert_eq!(schedule.payment(PaymentFrequency::Weekly), schedule.weekly);
        assert_eq!(
            schedule.rapid_payment(AcceleratedFrequency::RapidWeekly),
            schedule.rapid_weekly
        );
        assert_eq!(schedule.rows()[4].0, "Rapid bi-weekly");
    }

    #[test]
    fn test_invalid_inputs() {
        let zero_principal = compute_schedule()
            .principal(0.0)
            .rate_pct(5.5)
            .amortization_years(25)
            .call();
        assert!(matches!(zero_principal, Err(MortgageError::Validation(_))));

        let zero_years = compute_schedule()
            .principal(100_000.0)
            .rate_pct(5.5)
            .amortization_years(0)
            .call();
        assert!(matches!(zero_years, Err(MortgageError::Validation(_))));

        let negative_rate = compute_schedule()
            .principal(100_000.0)
            .rate_pct(-1.0)
            .amortization_years(25)
            .call();
        assert!(negative_rate.is_err());
    }
}
