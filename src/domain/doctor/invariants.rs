use super::entity::Doctor;
use crate::domain::validation::{
    check_age, check_email, check_id, check_name, check_not_empty, check_price,
};
use crate::domain::DomainResult;

/// Validates all Doctor invariants
pub fn validate_doctor(doctor: &Doctor) -> DomainResult<()> {
    check_id("doctor id", &doctor.id)?;
    check_name("doctor name", &doctor.name)?;
    check_age(doctor.age)?;
    check_not_empty("contact", &doctor.contact)?;
    check_email(&doctor.email)?;
    check_price("consultation fee", doctor.consultation_fee)?;
    Ok(())
}
