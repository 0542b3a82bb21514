//! # Payment Frequencies
//!
//! The four base frequencies each carry their own periodic rate. The accelerated
//! (rapid) variants do not: they are fixed fractions of the monthly payment.

use std::fmt;

/// Base payment frequency with a fixed number of periods per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentFrequency {
    /// 12 payments per year.
    Monthly,

    /// 24 payments per year, twice a month.
    SemiMonthly,

    /// 26 payments per year, every second week.
    BiWeekly,

    /// 52 payments per year.
    Weekly,
}

impl PaymentFrequency {
    /// All base frequencies, least to most frequent.
    pub const ALL: [PaymentFrequency; 4] = [
        PaymentFrequency::Monthly,
        PaymentFrequency::SemiMonthly,
        PaymentFrequency::BiWeekly,
        PaymentFrequency::Weekly,
    ];

    pub fn periods_per_year(self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::SemiMonthly => 24,
            PaymentFrequency::BiWeekly => 26,
            PaymentFrequency::Weekly => 52,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "Monthly",
            PaymentFrequency::SemiMonthly => "Semi-monthly",
            PaymentFrequency::BiWeekly => "Bi-weekly",
            PaymentFrequency::Weekly => "Weekly",
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Accelerated payment derived from the ordinary monthly payment.
///
/// Rapid bi-weekly is half and rapid weekly a quarter of the monthly payment.
/// Paid 26 or 52 times a year, this amounts to one extra monthly payment per year.
/// These are not the true bi-weekly and weekly payments, which are recomputed at
/// their own periodic rate (see [`PaymentFrequency::BiWeekly`] and
/// [`PaymentFrequency::Weekly`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcceleratedFrequency {
    RapidBiWeekly,
    RapidWeekly,
}

impl AcceleratedFrequency {
    pub const ALL: [AcceleratedFrequency; 2] = [
        AcceleratedFrequency::RapidBiWeekly,
        AcceleratedFrequency::RapidWeekly,
    ];

    /// Divisor applied to the monthly payment.
    pub fn monthly_divisor(self) -> u32 {
        match self {
            AcceleratedFrequency::RapidBiWeekly => 2,
            AcceleratedFrequency::RapidWeekly => 4,
        }
    }

    /// The base frequency at which the accelerated amount is paid.
    pub fn paid_as(self) -> PaymentFrequency {
        match self {
            AcceleratedFrequency::RapidBiWeekly => PaymentFrequency::BiWeekly,
            AcceleratedFrequency::RapidWeekly => PaymentFrequency::Weekly,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AcceleratedFrequency::RapidBiWeekly => "Rapid bi-weekly",
            AcceleratedFrequency::RapidWeekly => "Rapid weekly",
        }
    }
}

impl fmt::Display for AcceleratedFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_per_year() {
        let periods: Vec<u32> = PaymentFrequency::ALL
            .iter()
            .map(|f| f.periods_per_year())
            .collect();
        assert_eq!(periods, vec![12, 24, 26, 52]);
    }

    #[test]
    fn test_accelerated_pays_one_extra_monthly_per_year() {
        // 26 × (M/2) = 13M and 52 × (M/4) = 13M
        for accel in AcceleratedFrequency::ALL {
            let per_year = accel.paid_as().periods_per_year() / accel.monthly_divisor();
            assert_eq!(per_year, 13);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(PaymentFrequency::SemiMonthly.to_string(), "Semi-monthly");
        assert_eq!(AcceleratedFrequency::RapidWeekly.to_string(), "Rapid weekly");
    }
}
