use crate::loan_terms::LoanTerms;
use garde::Validate;

// =======================================
// SCHEDULE PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Copy, Validate)]
pub struct ScheduleParams {
    // Loan terms are already validated on construction
    // Validate again in case the struct is assembled by hand
    #[garde(dive)]
    pub terms: LoanTerms,

    // Amount borrowed, must be a positive finite amount
    #[garde(custom(validate_principal))]
    pub principal: f64,
}

/// Custom validation function for principal field
fn validate_principal(value: &f64, _context: &()) -> garde::Result {
    if !value.is_finite() {
        return Err(garde::Error::new("principal must be a finite amount"));
    }
    if *value <= 0.0 {
        return Err(garde::Error::new(
            "principal must be greater than 0.0 for a payment to exist",
        ));
    }
    Ok(())
}
