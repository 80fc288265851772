// src/error/types.rs
use crate::codec::DecodeError;
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record at line {line_number}: {reason} ({line:?})")]
    Decode {
        line_number: usize,
        line: String,
        reason: DecodeError,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Record already exists: {0}")]
    Duplicate(String),

    #[error("Insufficient stock for {medicine_id}: requested {requested}, available {available}")]
    InsufficientStock {
        medicine_id: String,
        requested: u32,
        available: u32,
    },

    #[error("Invalid username or password")]
    Authentication,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Resource not found")]
    NotFound,

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
