// src/services/dashboard_service.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppResult;
use crate::repositories::{DoctorRepository, MedicineRepository, PatientRepository, UserRepository};

/// Headline numbers for the clinic front page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClinicSummary {
    pub total_patients: usize,
    pub total_doctors: usize,
    pub total_medicines: usize,
    pub total_users: usize,
    pub low_stock_medicines: usize,
    pub out_of_stock_medicines: usize,
    pub low_stock_threshold: u32,
    pub generated_at: DateTime<Utc>,
}

pub struct DashboardService {
    patient_repo: Arc<dyn PatientRepository>,
    doctor_repo: Arc<dyn DoctorRepository>,
    medicine_repo: Arc<dyn MedicineRepository>,
    user_repo: Arc<dyn UserRepository>,
    low_stock_threshold: u32,
}

impl DashboardService {
    pub fn new(
        patient_repo: Arc<dyn PatientRepository>,
        doctor_repo: Arc<dyn DoctorRepository>,
        medicine_repo: Arc<dyn MedicineRepository>,
        user_repo: Arc<dyn UserRepository>,
        low_stock_threshold: u32,
    ) -> Self {
        Self {
            patient_repo,
            doctor_repo,
            medicine_repo,
            user_repo,
            low_stock_threshold,
        }
    }

    pub fn summary(&self) -> AppResult<ClinicSummary> {
        let medicines = self.medicine_repo.find_all()?;
        let low_stock_medicines = medicines
            .iter()
            .filter(|m| m.quantity < self.low_stock_threshold)
            .count();
        let out_of_stock_medicines = medicines.iter().filter(|m| m.is_out_of_stock()).count();

        Ok(ClinicSummary {
            total_patients: self.patient_repo.count()?,
            total_doctors: self.doctor_repo.count()?,
            total_medicines: medicines.len(),
            total_users: self.user_repo.count()?,
            low_stock_medicines,
            out_of_stock_medicines,
            low_stock_threshold: self.low_stock_threshold,
            generated_at: Utc::now(),
        })
    }
}
