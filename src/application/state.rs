// src/application/state.rs

use std::sync::Arc;

use log::debug;

use crate::config::AppConfig;
use crate::repositories::{
    DoctorRepository, FileDoctorRepository, FileMedicineRepository, FilePatientRepository,
    FileUserRepository, MedicineRepository, PatientRepository, UserRepository,
};
use crate::services::{
    DashboardService, DoctorService, MedicineService, PatientService, UserService,
};

/// Everything a front end needs, built once.
///
/// Each backing file gets exactly one store (and so one write lock); every
/// service that touches that file shares it through `Arc`.
pub struct AppState {
    pub config: AppConfig,
    pub patient_service: Arc<PatientService>,
    pub doctor_service: Arc<DoctorService>,
    pub medicine_service: Arc<MedicineService>,
    pub user_service: Arc<UserService>,
    pub dashboard_service: Arc<DashboardService>,
}

impl AppState {
    pub fn initialize(config: AppConfig) -> crate::error::AppResult<Self> {
        debug!("Opening clinic data in {}", config.data_dir.display());

        // 1. REPOSITORIES
        let patient_repo: Arc<dyn PatientRepository> =
            Arc::new(FilePatientRepository::open(config.patients_file())?);
        let doctor_repo: Arc<dyn DoctorRepository> =
            Arc::new(FileDoctorRepository::open(config.doctors_file())?);
        let medicine_repo: Arc<dyn MedicineRepository> =
            Arc::new(FileMedicineRepository::open(config.medicines_file())?);
        let user_repo: Arc<dyn UserRepository> =
            Arc::new(FileUserRepository::open(config.users_file())?);

        // 2. SERVICES
        let patient_service = Arc::new(PatientService::new(patient_repo.clone()));
        let doctor_service = Arc::new(DoctorService::new(doctor_repo.clone()));
        let medicine_service = Arc::new(MedicineService::new(
            medicine_repo.clone(),
            config.low_stock_threshold,
        ));
        let user_service = Arc::new(UserService::new(user_repo.clone())?);
        let dashboard_service = Arc::new(DashboardService::new(
            patient_repo,
            doctor_repo,
            medicine_repo,
            user_repo,
            config.low_stock_threshold,
        ));

        Ok(Self {
            config,
            patient_service,
            doctor_service,
            medicine_service,
            user_service,
            dashboard_service,
        })
    }
}
