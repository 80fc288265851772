// src/store/mod.rs
//
// Store layer
//
// RULES:
// - Stores are generic; they know nothing about patients or medicines
// - NO validation of record contents
// - NO uniqueness checks
// - One backing file per store

pub mod backing_file;
pub mod entity_store;
pub mod flat_file;
pub mod record;

#[cfg(test)]
mod flat_file_tests;

pub use entity_store::EntityStore;
pub use flat_file::{FlatFileStore, LoadedRecords, SkippedLine};
pub use record::{contains_ignore_case, search_term, FieldValue, Record};
