// src/codec/mod.rs
//
// Record codecs: one stored line <-> one typed record.
//
// Codecs are pure. They never touch the filesystem and never panic on bad
// input; a line that cannot be decoded comes back as a DecodeError and the
// store decides whether to skip it or surface it.

pub mod doctor_codec;
pub mod line;
pub mod medicine_codec;
pub mod patient_codec;
pub mod user_codec;

pub use doctor_codec::DoctorCodec;
pub use line::{escape_field, join_fields, split_fields, Fields, DELIMITER};
pub use medicine_codec::MedicineCodec;
pub use patient_codec::PatientCodec;
pub use user_codec::UserCodec;

use thiserror::Error;

use crate::store::Record;

/// Why a single line failed to decode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { found: usize, expected: &'static str },

    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("{0}")]
    Invalid(String),
}

/// Bidirectional line format for one record type.
///
/// `decode(&encode(r))` must be field-equivalent to `r` for every valid `r`.
pub trait RecordCodec: Send + Sync + 'static {
    type Record: Record;

    fn decode(&self, line: &str) -> Result<Self::Record, DecodeError>;

    fn encode(&self, record: &Self::Record) -> String;
}
