// src/reports/patient_report.rs

use std::fmt;

use chrono::{DateTime, Utc};

use super::{or_na, ReportGenerator};
use crate::domain::Patient;

pub struct PatientReport {
    generated_at: DateTime<Utc>,
}

impl PatientReport {
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(generated_at: DateTime<Utc>) -> Self {
        Self { generated_at }
    }
}

impl Default for PatientReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator<Patient> for PatientReport {
    fn render_into(&self, patient: &Patient, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "PATIENT REPORT")?;
        writeln!(out, "Generated: {}", self.generated_at.format("%Y-%m-%d %H:%M"))?;
        writeln!(out)?;
        writeln!(out, "Patient Information:")?;
        writeln!(out, "ID: {}", patient.id)?;
        writeln!(out, "Name: {}", patient.name)?;
        writeln!(out, "Age: {}", patient.age)?;
        writeln!(out, "Contact: {}", or_na(&patient.contact))?;
        writeln!(out, "Email: {}", or_na(&patient.email))?;
        writeln!(out, "Address: {}", or_na(&patient.address))?;
        writeln!(out, "Gender: {}", or_na(&patient.gender))?;
        writeln!(out, "Disease: {}", or_na(&patient.disease))?;
        writeln!(out, "Blood Group: {}", or_na(&patient.blood_group))?;
        writeln!(out, "Allergies: {}", or_na(&patient.allergies))
    }
}
