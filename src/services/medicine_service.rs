// src/services/medicine_service.rs
use crate::domain::{validate_medicine, DomainError, Medicine};
use crate::error::{AppError, AppResult};
use crate::repositories::MedicineRepository;
use crate::util::generate_id;
use log::info;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct CreateMedicineRequest {
    /// Generated when absent
    pub medicine_id: Option<String>,
    pub name: String,
    pub manufacturer: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub description: String,
}

pub struct MedicineService {
    medicine_repo: Arc<dyn MedicineRepository>,
    low_stock_threshold: u32,
}

impl MedicineService {
    pub fn new(medicine_repo: Arc<dyn MedicineRepository>, low_stock_threshold: u32) -> Self {
        Self {
            medicine_repo,
            low_stock_threshold,
        }
    }

    pub fn generate_medicine_id(&self) -> String {
        generate_id("M")
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.low_stock_threshold
    }

    pub fn create_medicine(&self, request: CreateMedicineRequest) -> AppResult<Medicine> {
        let medicine_id = request
            .medicine_id
            .unwrap_or_else(|| self.generate_medicine_id());
        let medicine = Medicine::new(
            medicine_id,
            request.name,
            request.manufacturer,
            request.price,
            request.quantity,
        )
        .with_category(request.category)
        .with_description(request.description);

        self.add_medicine(&medicine)?;
        Ok(medicine)
    }

    pub fn add_medicine(&self, medicine: &Medicine) -> AppResult<()> {
        validate_medicine(medicine).map_err(AppError::Domain)?;
        self.medicine_repo.insert(medicine)?;
        info!("Added medicine {} ({})", medicine.medicine_id, medicine.name);
        Ok(())
    }

    pub fn get_medicine(&self, medicine_id: &str) -> AppResult<Option<Medicine>> {
        self.medicine_repo.find_by_id(medicine_id)
    }

    pub fn list_medicines(&self) -> AppResult<Vec<Medicine>> {
        self.medicine_repo.find_all()
    }

    pub fn update_medicine(&self, medicine: &Medicine) -> AppResult<()> {
        validate_medicine(medicine).map_err(AppError::Domain)?;
        self.medicine_repo.update(medicine)
    }

    pub fn delete_medicine(&self, medicine_id: &str) -> AppResult<()> {
        self.medicine_repo.delete(medicine_id)?;
        Ok(())
    }

    pub fn search_medicines(&self, query: Option<&str>) -> AppResult<Vec<Medicine>> {
        self.medicine_repo.search(query)
    }

    /// Blank category lists everything.
    pub fn find_by_category(&self, category: &str) -> AppResult<Vec<Medicine>> {
        if category.trim().is_empty() {
            return self.list_medicines();
        }
        self.medicine_repo.find_by_category(category)
    }

    pub fn update_quantity(&self, medicine_id: &str, quantity: u32) -> AppResult<Medicine> {
        self.medicine_repo.set_quantity(medicine_id, quantity)
    }

    /// Zero is never "in stock" as a request.
    pub fn is_in_stock(&self, medicine_id: &str, required: u32) -> AppResult<bool> {
        if required == 0 {
            return Ok(false);
        }
        self.medicine_repo.is_in_stock(medicine_id, required)
    }

    pub fn dispense(&self, medicine_id: &str, amount: u32) -> AppResult<Medicine> {
        ensure_positive(amount)?;
        self.medicine_repo.reduce_quantity(medicine_id, amount)
    }

    pub fn restock(&self, medicine_id: &str, amount: u32) -> AppResult<Medicine> {
        ensure_positive(amount)?;
        self.medicine_repo.add_quantity(medicine_id, amount)
    }

    pub fn low_stock_medicines(&self) -> AppResult<Vec<Medicine>> {
        self.medicine_repo.find_low_stock(self.low_stock_threshold)
    }

    pub fn out_of_stock_medicines(&self) -> AppResult<Vec<Medicine>> {
        self.medicine_repo.find_out_of_stock()
    }

    pub fn count(&self) -> AppResult<usize> {
        self.medicine_repo.count()
    }
}

fn ensure_positive(amount: u32) -> AppResult<()> {
    if amount == 0 {
        return Err(AppError::Domain(DomainError::InvariantViolation(
            "stock change must be at least one unit".to_string(),
        )));
    }
    Ok(())
}
