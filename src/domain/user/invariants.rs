use super::entity::User;
use crate::domain::validation::{check_id, check_not_empty};
use crate::domain::DomainResult;

/// Validates all User invariants
///
/// The password field holds a digest, so only presence is checked here.
/// Plain-text password rules are applied by the user service before hashing.
pub fn validate_user(user: &User) -> DomainResult<()> {
    check_id("username", &user.username)?;
    check_not_empty("password", &user.password)?;
    check_not_empty("full name", &user.full_name)?;
    check_not_empty("role", user.role.as_str())?;
    Ok(())
}
