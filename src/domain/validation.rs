// src/domain/validation.rs
//
// Field-level validation.
//
// `is_valid_*` are pure predicates over primitive values. `check_*` wrap them
// into DomainResult so entity invariants can chain them with `?`.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{DomainError, DomainResult};

pub const MAX_AGE: u32 = 120;
pub const MAX_PRICE: f64 = 999_999.99;
pub const MAX_QUANTITY: u32 = 999_999;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_PASSWORD_LEN: usize = 50;

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid id pattern"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

pub fn is_valid_id(id: &str) -> bool {
    let id = id.trim();
    !id.is_empty() && ID_PATTERN.is_match(id)
}

pub fn is_valid_name(name: &str) -> bool {
    let len = name.trim().chars().count();
    (2..=100).contains(&len)
}

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_age(age: u32) -> bool {
    (1..=MAX_AGE).contains(&age)
}

pub fn is_valid_price(price: f64) -> bool {
    (0.0..=MAX_PRICE).contains(&price)
}

pub fn is_valid_quantity(quantity: u32) -> bool {
    quantity <= MAX_QUANTITY
}

pub fn is_valid_password(password: &str) -> bool {
    (MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&password.chars().count())
}

fn invalid(field: &'static str, reason: impl Into<String>) -> DomainError {
    DomainError::InvalidField {
        field,
        reason: reason.into(),
    }
}

pub(crate) fn check_id(field: &'static str, id: &str) -> DomainResult<()> {
    if !is_valid_id(id) {
        return Err(invalid(
            field,
            format!("{id:?} must be letters, digits, '-' or '_'"),
        ));
    }
    Ok(())
}

pub(crate) fn check_name(field: &'static str, name: &str) -> DomainResult<()> {
    if !is_valid_name(name) {
        return Err(invalid(field, "must be between 2 and 100 characters"));
    }
    Ok(())
}

pub(crate) fn check_not_empty(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, "cannot be empty"));
    }
    Ok(())
}

/// Email is optional; only a non-empty value is checked.
pub(crate) fn check_email(email: &str) -> DomainResult<()> {
    if !email.trim().is_empty() && !is_valid_email(email) {
        return Err(invalid("email", format!("{email:?} is not a valid address")));
    }
    Ok(())
}

pub(crate) fn check_age(age: u32) -> DomainResult<()> {
    if !is_valid_age(age) {
        return Err(invalid("age", format!("{age} must be between 1 and {MAX_AGE}")));
    }
    Ok(())
}

pub(crate) fn check_price(field: &'static str, price: f64) -> DomainResult<()> {
    if !is_valid_price(price) {
        return Err(invalid(field, format!("{price} must be between 0 and {MAX_PRICE}")));
    }
    Ok(())
}

pub(crate) fn check_quantity(quantity: u32) -> DomainResult<()> {
    if !is_valid_quantity(quantity) {
        return Err(invalid(
            "quantity",
            format!("{quantity} exceeds {MAX_QUANTITY}"),
        ));
    }
    Ok(())
}

pub(crate) fn check_password(password: &str) -> DomainResult<()> {
    if !is_valid_password(password) {
        return Err(invalid(
            "password",
            format!("must be between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters"),
        ));
    }
    Ok(())
}
