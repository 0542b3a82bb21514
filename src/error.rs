//! # Errors
//!
//! Every fallible function in the crate returns [`MortgageResult`].

use thiserror::Error;

/// Package Result type for RSMortgage functions
pub type MortgageResult<T> = Result<T, MortgageError>;

#[derive(Error, Debug)]
pub enum MortgageError {
    /// A caller supplied an argument outside the domain of the formula,
    /// e.g. zero periods per year or zero total periods.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },

    /// Field validation failed while building loan terms or schedule parameters.
    #[error("validation failed: {0}")]
    Validation(#[from] garde::Report),
}

impl MortgageError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        MortgageError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
