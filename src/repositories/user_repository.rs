// src/repositories/user_repository.rs
//
// User persistence. Passwords are only ever seen here as digests.

use std::path::PathBuf;

use crate::codec::UserCodec;
use crate::domain::{User, UserRole};
use crate::error::AppResult;
use crate::store::{contains_ignore_case, search_term, EntityStore, FieldValue, FlatFileStore, Record};

impl Record for User {
    fn id(&self) -> &str {
        &self.username
    }

    fn matches_property(&self, property: &str, value: &FieldValue) -> bool {
        match property {
            "username" | "id" => value.equals_exactly(&self.username),
            "role" => value.equals_ignore_case(self.role.as_str()),
            "fullname" | "full_name" | "name" => value.found_in(&self.full_name),
            "active" => value.equals_bool(self.active),
            _ => false,
        }
    }
}

pub trait UserRepository: EntityStore<User> {
    fn find_by_role(&self, role: &UserRole) -> AppResult<Vec<User>> {
        self.find_by_property("role", &FieldValue::from(role.as_str()))
    }

    fn find_active(&self) -> AppResult<Vec<User>> {
        self.find_by_property("active", &FieldValue::Bool(true))
    }

    /// Free-text search over username, full name and role.
    fn search(&self, query: Option<&str>) -> AppResult<Vec<User>> {
        let Some(term) = search_term(query) else {
            return self.find_all();
        };

        self.find_by_predicate(&|u: &User| {
            contains_ignore_case(&u.username, &term)
                || contains_ignore_case(&u.full_name, &term)
                || contains_ignore_case(u.role.as_str(), &term)
        })
    }

    /// The active user with this username and password digest, if any.
    fn authenticate(&self, username: &str, password_hash: &str) -> AppResult<Option<User>> {
        Ok(self
            .find_by_id(username)?
            .filter(|u| u.active && u.password == password_hash))
    }

    fn set_active(&self, username: &str, active: bool) -> AppResult<User> {
        self.modify(username, &mut |u: &mut User| {
            u.active = active;
            Ok(())
        })
    }

    fn set_password_hash(&self, username: &str, password_hash: &str) -> AppResult<User> {
        self.modify(username, &mut |u: &mut User| {
            u.password = password_hash.to_string();
            Ok(())
        })
    }
}

pub type FileUserRepository = FlatFileStore<UserCodec>;

impl FileUserRepository {
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        Self::with_codec(path, UserCodec)
    }
}

impl UserRepository for FileUserRepository {}
