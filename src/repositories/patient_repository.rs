// src/repositories/patient_repository.rs
//
// Patient persistence

use std::path::PathBuf;

use crate::codec::PatientCodec;
use crate::domain::Patient;
use crate::error::AppResult;
use crate::store::{contains_ignore_case, search_term, EntityStore, FieldValue, FlatFileStore, Record};

impl Record for Patient {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches_property(&self, property: &str, value: &FieldValue) -> bool {
        match property {
            "id" => value.equals_exactly(&self.id),
            "name" => value.found_in(&self.name),
            "age" => value.equals_integer(i64::from(self.age)),
            "disease" => value.found_in(&self.disease),
            "contact" => value.found_in(&self.contact),
            "email" => value.found_in(&self.email),
            "gender" => value.equals_ignore_case(&self.gender),
            "bloodgroup" | "blood_group" => value.equals_ignore_case(&self.blood_group),
            _ => false,
        }
    }
}

pub trait PatientRepository: EntityStore<Patient> {
    fn find_by_disease(&self, disease: &str) -> AppResult<Vec<Patient>> {
        self.find_by_property("disease", &FieldValue::from(disease))
    }

    /// Free-text search over id, name, disease and contact.
    /// A missing or blank query returns every patient.
    fn search(&self, query: Option<&str>) -> AppResult<Vec<Patient>> {
        let Some(term) = search_term(query) else {
            return self.find_all();
        };

        self.find_by_predicate(&|p: &Patient| {
            contains_ignore_case(&p.id, &term)
                || contains_ignore_case(&p.name, &term)
                || contains_ignore_case(&p.disease, &term)
                || contains_ignore_case(&p.contact, &term)
        })
    }
}

pub type FilePatientRepository = FlatFileStore<PatientCodec>;

impl FilePatientRepository {
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        Self::with_codec(path, PatientCodec)
    }
}

impl PatientRepository for FilePatientRepository {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seeded(dir: &TempDir) -> FilePatientRepository {
        let repo = FilePatientRepository::open(dir.path().join("patients.txt")).unwrap();
        repo.save(&Patient::new("P001", "John Doe", 45, "555-1234", "Flu")).unwrap();
        repo.save(
            &Patient::new("P002", "Jane Roe", 30, "555-9876", "Migraine, chronic")
                .with_medical_info("O+", "Penicillin"),
        )
        .unwrap();
        repo.save(&Patient::new("P003", "Ann Flute", 61, "555-0000", "Diabetes")).unwrap();
        repo
    }

    #[test]
    fn test_find_by_disease_is_substring_match() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);

        let found = repo.find_by_disease("migraine").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "P002");
        assert_eq!(found[0].blood_group, "O+");
    }

    #[test]
    fn test_search_matches_across_fields() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);

        let ids: Vec<String> = repo.search(Some("flu")).unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["P001", "P003"]);

        assert_eq!(repo.search(Some("555-98")).unwrap().len(), 1);
    }

    #[test]
    fn test_blank_search_returns_everything() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        let all = repo.find_all().unwrap();

        assert_eq!(repo.search(None).unwrap(), all);
        assert_eq!(repo.search(Some("")).unwrap(), all);
        assert_eq!(repo.search(Some("   ")).unwrap(), all);
    }

    #[test]
    fn test_property_by_age() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);

        let found = repo.find_by_property("Age", &FieldValue::from(61)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ann Flute");
    }
}
