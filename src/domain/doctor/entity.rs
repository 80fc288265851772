use serde::{Deserialize, Serialize};

/// A practising doctor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    /// Identity field, unique within the doctor store
    pub id: String,

    pub name: String,
    pub age: u32,
    pub contact: String,
    pub email: String,
    pub address: String,
    pub gender: String,

    /// Medical specialty (e.g. "Cardiology")
    pub specialization: String,

    pub qualification: String,

    /// Free-form availability, e.g. "Mon-Fri 9-17"
    pub availability: String,

    /// Fee per consultation; never negative for a valid record
    pub consultation_fee: f64,
}

impl Doctor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        contact: impl Into<String>,
        specialization: impl Into<String>,
        availability: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            contact: contact.into(),
            specialization: specialization.into(),
            availability: availability.into(),
            ..Self::default()
        }
    }

    pub fn with_details(
        mut self,
        email: impl Into<String>,
        address: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        self.email = email.into();
        self.address = address.into();
        self.gender = gender.into();
        self
    }

    pub fn with_practice(mut self, qualification: impl Into<String>, consultation_fee: f64) -> Self {
        self.qualification = qualification.into();
        self.consultation_fee = consultation_fee;
        self
    }
}

impl std::fmt::Display for Doctor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Specialization: {}, Availability: {}",
            self.id, self.name, self.specialization, self.availability
        )
    }
}
