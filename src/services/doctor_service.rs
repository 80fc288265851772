// src/services/doctor_service.rs
use crate::domain::{validate_doctor, Doctor};
use crate::error::{AppError, AppResult};
use crate::repositories::DoctorRepository;
use crate::util::generate_id;
use log::info;
use std::sync::Arc;

pub struct DoctorService {
    doctor_repo: Arc<dyn DoctorRepository>,
}

impl DoctorService {
    pub fn new(doctor_repo: Arc<dyn DoctorRepository>) -> Self {
        Self { doctor_repo }
    }

    pub fn generate_doctor_id(&self) -> String {
        generate_id("D")
    }

    pub fn add_doctor(&self, doctor: &Doctor) -> AppResult<()> {
        validate_doctor(doctor).map_err(AppError::Domain)?;
        self.doctor_repo.insert(doctor)?;
        info!("Registered doctor {}", doctor.id);
        Ok(())
    }

    pub fn get_doctor(&self, id: &str) -> AppResult<Option<Doctor>> {
        self.doctor_repo.find_by_id(id)
    }

    pub fn list_doctors(&self) -> AppResult<Vec<Doctor>> {
        self.doctor_repo.find_all()
    }

    pub fn update_doctor(&self, doctor: &Doctor) -> AppResult<()> {
        validate_doctor(doctor).map_err(AppError::Domain)?;
        self.doctor_repo.update(doctor)
    }

    pub fn delete_doctor(&self, id: &str) -> AppResult<()> {
        self.doctor_repo.delete(id)?;
        Ok(())
    }

    pub fn search_doctors(&self, query: Option<&str>) -> AppResult<Vec<Doctor>> {
        self.doctor_repo.search(query)
    }

    pub fn find_by_specialization(&self, specialization: &str) -> AppResult<Vec<Doctor>> {
        self.doctor_repo.find_by_specialization(specialization)
    }

    pub fn count(&self) -> AppResult<usize> {
        self.doctor_repo.count()
    }
}
