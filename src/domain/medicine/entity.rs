use serde::{Deserialize, Serialize};

/// A medicine held in the clinic pharmacy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    /// Identity field, unique within the medicine store
    pub medicine_id: String,

    pub name: String,
    pub manufacturer: String,

    /// Therapeutic category (e.g. "Pain Relief")
    pub category: String,

    /// Unit price
    pub price: f64,

    /// Units in stock
    pub quantity: u32,

    pub description: String,
}

impl Medicine {
    /// Create an inventory entry. Text fields are trimmed.
    pub fn new(
        medicine_id: impl Into<String>,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            medicine_id: medicine_id.into().trim().to_string(),
            name: name.into().trim().to_string(),
            manufacturer: manufacturer.into().trim().to_string(),
            price,
            quantity,
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into().trim().to_string();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into().trim().to_string();
        self
    }

    /// Stock left after taking `amount` units, or `None` if there is not enough.
    pub fn remaining_after(&self, amount: u32) -> Option<u32> {
        self.quantity.checked_sub(amount)
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }
}

impl std::fmt::Display for Medicine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Medicine: {}, Manufacturer: {}, Price: {}, Quantity: {}",
            self.name, self.manufacturer, self.price, self.quantity
        )
    }
}
