// src/util/password.rs
//
// Password digests. Stored passwords are lowercase hex SHA-256.

use sha2::{Digest, Sha256};

use crate::domain::DomainError;
use crate::domain::DomainResult;

/// Hex SHA-256 digest of `password`. Empty passwords are rejected.
pub fn hash_password(password: &str) -> DomainResult<String> {
    if password.is_empty() {
        return Err(DomainError::InvalidField {
            field: "password",
            reason: "must not be empty".to_string(),
        });
    }

    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
