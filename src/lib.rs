//! # RSMortgage
//!
//! Payment calculations for fixed-rate Canadian mortgages, where the quoted rate is
//! compounded semi-annually.
//!
//! ## Features
//! - **Rate Conversions**: quoted semi-annual rate → effective annual rate → periodic rate for any frequency
//! - **Annuities Certain**: present and accumulated value factors, zero rate handled exactly
//! - **Payment Schedule**: monthly, semi-monthly, bi-weekly and weekly payments, plus rapid bi-weekly and rapid weekly
//! - **Validated Inputs**: loan terms are built with a builder and validated on construction
//!
//! ## Quick Start
//!
//! ```rust
//! use rsmortgage::prelude::*;
//!
//! let terms = LoanTerms::builder()
//!     .rate_pct(5.5)
//!     .amortization_years(25)
//!     .build()?;
//!
//! let schedule = terms.schedule(500_000.0)?;
//! for (label, amount) in schedule.rows() {
//!     println!("{label}: {amount:.2}");
//! }
//! # MortgageResult::Ok(())
//! ```
//!
//! ## Notes
//! - Rapid (accelerated) payments are half and a quarter of the ordinary monthly
//!   payment. They are not recomputed at the bi-weekly or weekly periodic rate.
//! - Every amount is rounded to cents independently.
//! - The library logs through the `log` facade and never installs a logger.

pub mod annuities_certain;
pub mod error;
pub mod frequency;
pub mod helpers;
pub mod int_rate_convert;
pub mod loan_terms;
pub mod params;
pub mod prelude;
pub mod schedule;

pub use error::{MortgageError, MortgageResult};
