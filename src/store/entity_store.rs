// src/store/entity_store.rs

use super::record::{FieldValue, Record};
use crate::error::AppResult;

/// Generic CRUD over one collection of records.
///
/// Callers depend on this trait, not on how records are laid out on disk.
/// The flat-file implementation re-reads its file on every call and rewrites
/// it on every mutation; another implementation only has to keep the same
/// observable behaviour.
pub trait EntityStore<R: Record>: Send + Sync {
    /// Append a record. Identity uniqueness is NOT checked here.
    fn save(&self, record: &R) -> AppResult<()>;

    /// Append a record unless one with the same identity is already stored,
    /// checked and written as one step. `AppError::Duplicate` otherwise.
    fn insert(&self, record: &R) -> AppResult<()>;

    /// First record, in storage order, whose identity equals `id` exactly.
    fn find_by_id(&self, id: &str) -> AppResult<Option<R>>;

    /// Every readable record in storage order. Malformed entries are skipped.
    fn find_all(&self) -> AppResult<Vec<R>>;

    /// Records whose property `property` (case-insensitive name) matches `value`.
    /// Unknown property names match nothing.
    fn find_by_property(&self, property: &str, value: &FieldValue) -> AppResult<Vec<R>>;

    fn find_by_predicate(&self, predicate: &dyn Fn(&R) -> bool) -> AppResult<Vec<R>>;

    /// Replace the first record with the same identity.
    /// `AppError::NotFound` if there is none; nothing is inserted.
    fn update(&self, record: &R) -> AppResult<()>;

    /// Remove every record with identity `id`, returning how many went.
    /// `AppError::NotFound` if none matched.
    fn delete(&self, id: &str) -> AppResult<usize>;

    /// Read the first record with identity `id`, apply `mutation` to it and
    /// persist the result, as one step with respect to other writers.
    ///
    /// If `mutation` fails nothing is written and its error is returned.
    fn modify(
        &self,
        id: &str,
        mutation: &mut dyn FnMut(&mut R) -> AppResult<()>,
    ) -> AppResult<R>;

    fn exists(&self, id: &str) -> AppResult<bool> {
        Ok(self.find_by_id(id)?.is_some())
    }

    fn count(&self) -> AppResult<usize> {
        Ok(self.find_all()?.len())
    }
}
