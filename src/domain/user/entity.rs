use serde::{Deserialize, Serialize};

/// A login account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identity field, unique within the user store
    pub username: String,

    /// SHA-256 hex digest of the password, never the plain text
    pub password: String,

    pub full_name: String,
    pub role: UserRole,

    /// Inactive users cannot log in
    pub active: bool,
}

/// Role of an account within the clinic
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Doctor,
    Nurse,
    Receptionist,
    Pharmacist,
    /// Any role name not known above, kept verbatim
    Other(String),
}

impl User {
    /// Create an active user. `password_hash` must already be hashed.
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        full_name: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            username: username.into(),
            password: password_hash.into(),
            full_name: full_name.into(),
            role,
            active: true,
        }
    }
}

impl UserRole {
    /// Parse a stored role name. Matching is case-insensitive; unknown names
    /// become `Other` so nothing is lost.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => UserRole::Admin,
            "DOCTOR" => UserRole::Doctor,
            "NURSE" => UserRole::Nurse,
            "RECEPTIONIST" => UserRole::Receptionist,
            "PHARMACIST" => UserRole::Pharmacist,
            _ => UserRole::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Doctor => "DOCTOR",
            UserRole::Nurse => "NURSE",
            UserRole::Receptionist => "RECEPTIONIST",
            UserRole::Pharmacist => "PHARMACIST",
            UserRole::Other(name) => name,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
