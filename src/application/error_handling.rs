// src/application/error_handling.rs
//
// Error responses for front ends
//
// ARCHITECTURE:
// - Maps internal errors to user-facing responses
// - Consistent error format for every caller
// - Never exposes raw file contents of other records
// - Logs the internal cause before it is flattened

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// No record with that identity
    NotFound,

    /// Invalid input or domain rule violated
    Validation,

    /// Identity already taken
    Conflict,

    /// Not enough units to dispense
    InsufficientStock,

    /// Bad credentials or inactive account
    Authentication,

    /// Stored data could not be decoded
    CorruptData,

    /// File system error
    FileSystem,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::new(ErrorType::NotFound, "Resource not found", None),

            AppError::Domain(domain_error) => Self::new(
                ErrorType::Validation,
                "Validation failed",
                Some(domain_error.to_string()),
            ),

            AppError::Duplicate(id) => Self::new(
                ErrorType::Conflict,
                format!("A record with id {} already exists", id),
                None,
            ),

            err @ AppError::InsufficientStock { .. } => {
                Self::new(ErrorType::InsufficientStock, err.to_string(), None)
            }

            AppError::Authentication => {
                Self::new(ErrorType::Authentication, "Invalid username or password", None)
            }

            AppError::Decode {
                line_number,
                reason,
                ..
            } => {
                error!("Decode error at line {}: {}", line_number, reason);
                Self::new(
                    ErrorType::CorruptData,
                    "Stored data is malformed",
                    Some(format!("line {}: {}", line_number, reason)),
                )
            }

            AppError::Io(io_error) => {
                error!("IO error: {:?}", io_error);
                Self::new(
                    ErrorType::FileSystem,
                    "File system operation failed",
                    Some(io_error.to_string()),
                )
            }

            AppError::Serialization(serde_error) => {
                error!("Serialization error: {:?}", serde_error);
                Self::new(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Other(message) => {
                error!("Other error: {}", message);
                Self::new(ErrorType::Internal, message, None)
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "Internal error".to_string())
    }
}

/// Helper trait to convert Results to a JSON error string
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| ErrorResponse::from_app_error(e).to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::DecodeError;
    use crate::domain::DomainError;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Resource not found");
    }

    #[test]
    fn test_domain_error_is_validation() {
        let error = ErrorResponse::from_app_error(AppError::Domain(DomainError::InvalidField {
            field: "age",
            reason: "0 must be between 1 and 120".to_string(),
        }));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert!(error.details.unwrap().contains("age"));
    }

    #[test]
    fn test_insufficient_stock_message() {
        let error = ErrorResponse::from_app_error(AppError::InsufficientStock {
            medicine_id: "M001".to_string(),
            requested: 200,
            available: 100,
        });
        assert_eq!(error.error_type, ErrorType::InsufficientStock);
        assert!(error.message.contains("M001"));
    }

    #[test]
    fn test_decode_error_hides_raw_line() {
        let error = ErrorResponse::from_app_error(AppError::Decode {
            line_number: 7,
            line: "P9,secret stuff".to_string(),
            reason: DecodeError::MissingField("name"),
        });
        assert_eq!(error.error_type, ErrorType::CorruptData);
        assert!(!error.details.unwrap().contains("secret"));
    }

    #[test]
    fn test_to_error_response_serializes() {
        let result: Result<(), AppError> = Err(AppError::Duplicate("P001".to_string()));
        let json = result.to_error_response().unwrap_err();
        assert!(json.contains("\"conflict\""));
        assert!(json.contains("P001"));
    }
}
