use serde::{Deserialize, Serialize};

/// A registered patient of the clinic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Identity field, unique within the patient store
    pub id: String,

    pub name: String,

    /// Age in years (1..=120 for a valid record)
    pub age: u32,

    /// Phone number or other primary contact
    pub contact: String,

    pub email: String,
    pub address: String,
    pub gender: String,
    pub blood_group: String,
    pub allergies: String,

    /// Current diagnosis or reason for the visit
    pub disease: String,
}

impl Patient {
    /// Create a patient with the minimal field set.
    /// Optional details start empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        contact: impl Into<String>,
        disease: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            contact: contact.into(),
            disease: disease.into(),
            ..Self::default()
        }
    }

    /// Fill in the optional person details.
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

    /// Fill in the optional medical details.
    pub fn with_medical_info(
        mut self,
        blood_group: impl Into<String>,
        allergies: impl Into<String>,
    ) -> Self {
        self.blood_group = blood_group.into();
        self.allergies = allergies.into();
        self
    }
}

impl std::fmt::Display for Patient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Age: {}, Contact: {}, Disease: {}",
            self.id, self.name, self.age, self.contact, self.disease
        )
    }
}
