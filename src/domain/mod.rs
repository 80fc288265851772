// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// Entities are plain data plus invariants. Nothing here touches the
// filesystem; persistence lives in `codec`, `store` and `repositories`.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod doctor;
pub mod medicine;
pub mod patient;
pub mod user;
pub mod validation;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use doctor::{validate_doctor, Doctor};
pub use medicine::{validate_medicine, Medicine};
pub use patient::{validate_patient, Patient};
pub use user::{validate_user, User, UserRole};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
