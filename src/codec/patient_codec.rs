// src/codec/patient_codec.rs
//
// Patient line layout
//   short (5):  id,name,age,contact,disease
//   full (10+): id,name,age,contact,email,address,gender,blood_group,allergies,disease

use super::line::{join_fields, Fields};
use super::{DecodeError, RecordCodec};
use crate::domain::Patient;

const SHORT_FIELDS: usize = 5;
const FULL_FIELDS: usize = 10;

#[derive(Debug, Clone, Copy, Default)]
pub struct PatientCodec;

impl RecordCodec for PatientCodec {
    type Record = Patient;

    fn decode(&self, line: &str) -> Result<Patient, DecodeError> {
        let fields = Fields::parse(line);

        match fields.len() {
            SHORT_FIELDS => Ok(Patient::new(
                fields.required(0, "id")?,
                fields.text(1),
                fields.number(2, "age")?,
                fields.text(3),
                fields.optional(4),
            )),
            n if n >= FULL_FIELDS => Ok(Patient {
                id: fields.required(0, "id")?,
                name: fields.text(1).to_string(),
                age: fields.number(2, "age")?,
                contact: fields.text(3).to_string(),
                email: fields.optional(4),
                address: fields.optional(5),
                gender: fields.optional(6),
                blood_group: fields.optional(7),
                allergies: fields.optional(8),
                disease: fields.optional(9),
            }),
            found => Err(DecodeError::FieldCount {
                found,
                expected: "5 or at least 10",
            }),
        }
    }

    fn encode(&self, patient: &Patient) -> String {
        let age = patient.age.to_string();
        join_fields([
            patient.id.as_str(),
            patient.name.as_str(),
            age.as_str(),
            patient.contact.as_str(),
            patient.email.as_str(),
            patient.address.as_str(),
            patient.gender.as_str(),
            patient.blood_group.as_str(),
            patient.allergies.as_str(),
            patient.disease.as_str(),
        ])
    }
}
