// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// Services own the business rules the stores do not: validation before any
// write, identity uniqueness, id generation, password hashing.

pub mod dashboard_service;
pub mod doctor_service;
pub mod medicine_service;
pub mod patient_service;
pub mod user_service;


pub use dashboard_service::{ClinicSummary, DashboardService};
pub use doctor_service::DoctorService;
pub use medicine_service::{CreateMedicineRequest, MedicineService};
pub use patient_service::{CreatePatientRequest, PatientService};
pub use user_service::{CreateUserRequest, UpdateUserRequest, UserService};
