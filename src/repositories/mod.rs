// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Each repository is a flat-file store bound to one codec
// - Only query shortcuts and stock bookkeeping live here
// - NO uniqueness checks (services own those)
// - NO cross-repository calls

pub mod doctor_repository;
pub mod medicine_repository;
pub mod patient_repository;
pub mod user_repository;

pub use doctor_repository::{DoctorRepository, FileDoctorRepository};
pub use medicine_repository::{FileMedicineRepository, MedicineRepository};
pub use patient_repository::{FilePatientRepository, PatientRepository};
pub use user_repository::{FileUserRepository, UserRepository};
