// src/services/patient_service.rs
use crate::domain::{validate_patient, Patient};
use crate::error::{AppError, AppResult};
use crate::repositories::PatientRepository;
use crate::util::generate_id;
use log::info;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct CreatePatientRequest {
    /// Generated when absent
    pub id: Option<String>,
    pub name: String,
    pub age: u32,
    pub contact: String,
    pub disease: String,
    pub email: String,
    pub address: String,
    pub gender: String,
    pub blood_group: String,
    pub allergies: String,
}

pub struct PatientService {
    patient_repo: Arc<dyn PatientRepository>,
}

impl PatientService {
    pub fn new(patient_repo: Arc<dyn PatientRepository>) -> Self {
        Self { patient_repo }
    }

    pub fn generate_patient_id(&self) -> String {
        generate_id("P")
    }

    pub fn register_patient(&self, request: CreatePatientRequest) -> AppResult<Patient> {
        let id = request.id.unwrap_or_else(|| self.generate_patient_id());
        let patient = Patient::new(id, request.name, request.age, request.contact, request.disease)
            .with_details(request.email, request.address, request.gender)
            .with_medical_info(request.blood_group, request.allergies);

        self.add_patient(&patient)?;
        Ok(patient)
    }

    pub fn add_patient(&self, patient: &Patient) -> AppResult<()> {
        validate_patient(patient).map_err(AppError::Domain)?;
        self.patient_repo.insert(patient)?;
        info!("Registered patient {}", patient.id);
        Ok(())
    }

    pub fn get_patient(&self, id: &str) -> AppResult<Option<Patient>> {
        self.patient_repo.find_by_id(id)
    }

    pub fn list_patients(&self) -> AppResult<Vec<Patient>> {
        self.patient_repo.find_all()
    }

    pub fn update_patient(&self, patient: &Patient) -> AppResult<()> {
        validate_patient(patient).map_err(AppError::Domain)?;
        self.patient_repo.update(patient)
    }

    pub fn delete_patient(&self, id: &str) -> AppResult<()> {
        self.patient_repo.delete(id)?;
        info!("Deleted patient {}", id);
        Ok(())
    }

    pub fn search_patients(&self, query: Option<&str>) -> AppResult<Vec<Patient>> {
        self.patient_repo.search(query)
    }

    pub fn find_by_disease(&self, disease: &str) -> AppResult<Vec<Patient>> {
        self.patient_repo.find_by_disease(disease)
    }

    pub fn count(&self) -> AppResult<usize> {
        self.patient_repo.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::FilePatientRepository;
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> PatientService {
        let repo = FilePatientRepository::open(dir.path().join("patients.txt")).unwrap();
        PatientService::new(Arc::new(repo))
    }

    fn request(id: &str) -> CreatePatientRequest {
        CreatePatientRequest {
            id: Some(id.to_string()),
            name: "John Doe".to_string(),
            age: 45,
            contact: "555-1234".to_string(),
            disease: "Flu".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_register_and_get() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        let patient = service.register_patient(request("P001")).unwrap();

        assert_eq!(service.get_patient("P001").unwrap(), Some(patient));
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_register_generates_id() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        let patient = service
            .register_patient(CreatePatientRequest { id: None, ..request("") })
            .unwrap();

        assert!(patient.id.starts_with('P'));
        assert!(service.get_patient(&patient.id).unwrap().is_some());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        service.register_patient(request("P001")).unwrap();

        let result = service.register_patient(request("P001"));

        assert!(matches!(result, Err(AppError::Duplicate(id)) if id == "P001"));
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_invalid_patient_not_stored() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        let result = service.register_patient(CreatePatientRequest { age: 0, ..request("P001") });

        assert!(matches!(result, Err(AppError::Domain(_))));
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_update_and_delete() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let mut patient = service.register_patient(request("P001")).unwrap();

        patient.disease = "Bronchitis".to_string();
        service.update_patient(&patient).unwrap();
        assert_eq!(service.find_by_disease("bronch").unwrap().len(), 1);

        service.delete_patient("P001").unwrap();
        assert!(matches!(service.delete_patient("P001"), Err(AppError::NotFound)));
        assert!(matches!(service.update_patient(&patient), Err(AppError::NotFound)));
    }

    #[test]
    fn test_concurrent_registration_keeps_id_unique() {
        use std::sync::Barrier;
        use std::thread;

        let dir = TempDir::new().unwrap();
        let service = Arc::new(service(&dir));
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = Arc::clone(&service);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    service.register_patient(request("P001")).is_ok()
                })
            })
            .collect();
        let registered = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(registered, 1);
        assert_eq!(service.count().unwrap(), 1);
    }
}
