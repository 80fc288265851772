// src/repositories/doctor_repository.rs
//
// Doctor persistence

use std::path::PathBuf;

use crate::codec::DoctorCodec;
use crate::domain::Doctor;
use crate::error::AppResult;
use crate::store::{contains_ignore_case, search_term, EntityStore, FieldValue, FlatFileStore, Record};

impl Record for Doctor {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches_property(&self, property: &str, value: &FieldValue) -> bool {
        match property {
            "id" => value.equals_exactly(&self.id),
            "name" => value.found_in(&self.name),
            "age" => value.equals_integer(i64::from(self.age)),
            "specialization" => value.found_in(&self.specialization),
            "availability" => value.found_in(&self.availability),
            "qualification" => value.found_in(&self.qualification),
            "consultationfee" | "consultation_fee" | "fee" => {
                value.equals_float(self.consultation_fee)
            }
            _ => false,
        }
    }
}

pub trait DoctorRepository: EntityStore<Doctor> {
    fn find_by_specialization(&self, specialization: &str) -> AppResult<Vec<Doctor>> {
        self.find_by_property("specialization", &FieldValue::from(specialization))
    }

    /// Free-text search over id, name and specialization.
    fn search(&self, query: Option<&str>) -> AppResult<Vec<Doctor>> {
        let Some(term) = search_term(query) else {
            return self.find_all();
        };

        self.find_by_predicate(&|d: &Doctor| {
            contains_ignore_case(&d.id, &term)
                || contains_ignore_case(&d.name, &term)
                || contains_ignore_case(&d.specialization, &term)
        })
    }
}

pub type FileDoctorRepository = FlatFileStore<DoctorCodec>;

impl FileDoctorRepository {
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        Self::with_codec(path, DoctorCodec)
    }
}

impl DoctorRepository for FileDoctorRepository {}
