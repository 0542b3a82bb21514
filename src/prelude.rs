//! # RSMortgage Prelude
//!
//! Conveniently re-exports the most common types and functions for mortgage payment calculations.
//! Import this module to access all primary RSMortgage features with a single `use` statement.
//!
//! ## Example
//!
//! ```rust
//! # use rsmortgage::prelude::*;
//! let schedule = compute_schedule()
//!     .principal(120_000.0)
//!     .rate_pct(0.0)
//!     .amortization_years(10)
//!     .call()?;
//! assert_eq!(schedule.monthly, 1000.0);
//! # MortgageResult::Ok(())
//! ```

// Package Result and error types
pub use crate::error::{MortgageError, MortgageResult};

// Interest rate conversion functions
pub use crate::int_rate_convert::*;

// Certain annuities
pub use crate::annuities_certain::*;

// Loan terms and payment frequencies
pub use crate::frequency::{AcceleratedFrequency, PaymentFrequency};
pub use crate::loan_terms::LoanTerms;

// Payment calculation
pub use crate::helpers::round_currency;
pub use crate::schedule::{PaymentSchedule, compute_schedule};
