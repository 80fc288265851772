// src/codec/user_codec.rs
//
// User line layout
//   username,password_digest,full_name,role[,active]

use super::line::{join_fields, Fields};
use super::{DecodeError, RecordCodec};
use crate::domain::{User, UserRole};

const MIN_FIELDS: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct UserCodec;

impl RecordCodec for UserCodec {
    type Record = User;

    fn decode(&self, line: &str) -> Result<User, DecodeError> {
        let fields = Fields::parse(line);
        if fields.len() < MIN_FIELDS {
            return Err(DecodeError::FieldCount {
                found: fields.len(),
                expected: "at least 4",
            });
        }

        let mut user = User::new(
            fields.required(0, "username")?,
            fields.text(1),
            fields.text(2),
            UserRole::parse(fields.text(3)),
        );

        // Anything other than "true" reads as inactive once the column exists.
        if fields.len() > MIN_FIELDS {
            user.active = fields.text(4).trim().eq_ignore_ascii_case("true");
        }

        Ok(user)
    }

    fn encode(&self, user: &User) -> String {
        join_fields([
            user.username.as_str(),
            user.password.as_str(),
            user.full_name.as_str(),
            user.role.as_str(),
            if user.active { "true" } else { "false" },
        ])
    }
}
