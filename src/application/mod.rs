// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits above services; wires stores and services once
// - Translates errors into a stable, serializable shape for front ends

pub mod error_handling;
pub mod state;

pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
