// src/lib.rs
// ClinicDesk - Local-first clinic record keeper
//
// Architecture:
// - Domain-centric: entities and their invariants live in `domain`
// - Persistence: one generic flat-file store, bound per entity to a codec
// - Explicit: every failure is an AppError, nothing is collapsed to a bool
// - Local-first: plain text files the clinic owns

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;
pub mod store;
pub mod util;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod reports;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_doctor, validate_medicine, validate_patient, validate_user, Doctor, DomainError,
    Medicine, Patient, User, UserRole,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Persistence
// ============================================================================

pub use codec::{DecodeError, DoctorCodec, MedicineCodec, PatientCodec, RecordCodec, UserCodec};
pub use store::{EntityStore, FieldValue, FlatFileStore, LoadedRecords, Record, SkippedLine};

pub use repositories::{
    DoctorRepository, FileDoctorRepository, FileMedicineRepository, FilePatientRepository,
    FileUserRepository, MedicineRepository, PatientRepository, UserRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    ClinicSummary, CreateMedicineRequest, CreatePatientRequest, CreateUserRequest,
    DashboardService, DoctorService, MedicineService, PatientService, UpdateUserRequest,
    UserService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ErrorResponse, ErrorType};
pub use config::AppConfig;
pub use reports::{InventoryReport, PatientReport, ReportGenerator};
