use super::entity::Medicine;
use crate::domain::validation::{check_id, check_name, check_price, check_quantity};
use crate::domain::DomainResult;

/// Validates all Medicine invariants
pub fn validate_medicine(medicine: &Medicine) -> DomainResult<()> {
    check_id("medicine id", &medicine.medicine_id)?;
    check_name("medicine name", &medicine.name)?;
    check_price("price", medicine.price)?;
    check_quantity(medicine.quantity)?;
    Ok(())
}

/// Medicine invariants:
///
/// 1. ID is non-empty and alphanumeric (hyphen and underscore allowed)
/// 2. Name is 2..=100 characters after trimming
/// 3. Price is between 0 and 999999.99
/// 4. Quantity never goes below zero (enforced by u32) and stays <= 999999
