use super::entity::Patient;
use crate::domain::validation::{check_age, check_email, check_id, check_name, check_not_empty};
use crate::domain::DomainResult;

/// Validates all Patient invariants
pub fn validate_patient(patient: &Patient) -> DomainResult<()> {
    check_id("patient id", &patient.id)?;
    check_name("patient name", &patient.name)?;
    check_age(patient.age)?;
    check_not_empty("contact", &patient.contact)?;
    check_email(&patient.email)?;
    Ok(())
}

/// Patient invariants:
///
/// 1. ID is non-empty and alphanumeric (hyphen and underscore allowed)
/// 2. Name is 2..=100 characters after trimming
/// 3. Age is between 1 and 120
/// 4. Contact cannot be empty
/// 5. Email is optional, but must be well formed when present
