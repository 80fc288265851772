// src/repositories/medicine_repository.rs
//
// Medicine persistence and stock bookkeeping
//
// Every stock change goes through `EntityStore::modify`, so the check and the
// write happen under the store's write lock.

use std::path::PathBuf;

use log::info;

use crate::codec::MedicineCodec;
use crate::domain::validation::check_quantity;
use crate::domain::Medicine;
use crate::error::{AppError, AppResult};
use crate::store::{contains_ignore_case, search_term, EntityStore, FieldValue, FlatFileStore, Record};

impl Record for Medicine {
    fn id(&self) -> &str {
        &self.medicine_id
    }

    fn matches_property(&self, property: &str, value: &FieldValue) -> bool {
        match property {
            "medicineid" | "medicine_id" | "id" => value.found_in(&self.medicine_id),
            "name" => value.found_in(&self.name),
            "manufacturer" => value.found_in(&self.manufacturer),
            "category" => value.found_in(&self.category),
            "price" => value.equals_float(self.price),
            "quantity" => value.equals_integer(i64::from(self.quantity)),
            _ => false,
        }
    }
}

pub trait MedicineRepository: EntityStore<Medicine> {
    fn find_by_category(&self, category: &str) -> AppResult<Vec<Medicine>> {
        self.find_by_property("category", &FieldValue::from(category))
    }

    /// Free-text search over id, name, manufacturer and category.
    fn search(&self, query: Option<&str>) -> AppResult<Vec<Medicine>> {
        let Some(term) = search_term(query) else {
            return self.find_all();
        };

        self.find_by_predicate(&|m: &Medicine| {
            contains_ignore_case(&m.medicine_id, &term)
                || contains_ignore_case(&m.name, &term)
                || contains_ignore_case(&m.manufacturer, &term)
                || contains_ignore_case(&m.category, &term)
        })
    }

    /// Medicines with strictly fewer than `threshold` units.
    fn find_low_stock(&self, threshold: u32) -> AppResult<Vec<Medicine>> {
        self.find_by_predicate(&|m: &Medicine| m.quantity < threshold)
    }

    fn find_out_of_stock(&self) -> AppResult<Vec<Medicine>> {
        self.find_by_predicate(&|m: &Medicine| m.is_out_of_stock())
    }

    fn is_in_stock(&self, medicine_id: &str, required: u32) -> AppResult<bool> {
        Ok(self
            .find_by_id(medicine_id)?
            .is_some_and(|m| m.quantity >= required))
    }

    fn set_quantity(&self, medicine_id: &str, quantity: u32) -> AppResult<Medicine> {
        check_quantity(quantity)?;
        self.modify(medicine_id, &mut |m: &mut Medicine| {
            m.quantity = quantity;
            Ok(())
        })
    }

    /// Take `amount` units out of stock.
    ///
    /// Fails with `InsufficientStock` (file untouched) when fewer than
    /// `amount` units are left.
    fn reduce_quantity(&self, medicine_id: &str, amount: u32) -> AppResult<Medicine> {
        let medicine = self.modify(medicine_id, &mut |m: &mut Medicine| -> AppResult<()> {
            m.quantity = m
                .remaining_after(amount)
                .ok_or_else(|| AppError::InsufficientStock {
                    medicine_id: m.medicine_id.clone(),
                    requested: amount,
                    available: m.quantity,
                })?;
            Ok(())
        })?;

        info!(
            "Dispensed {} of {}; {} left",
            amount, medicine.medicine_id, medicine.quantity
        );
        Ok(medicine)
    }

    /// Put `amount` units back into stock.
    fn add_quantity(&self, medicine_id: &str, amount: u32) -> AppResult<Medicine> {
        let medicine = self.modify(medicine_id, &mut |m: &mut Medicine| -> AppResult<()> {
            let restocked = m.quantity.saturating_add(amount);
            check_quantity(restocked)?;
            m.quantity = restocked;
            Ok(())
        })?;

        info!(
            "Restocked {} of {}; {} now",
            amount, medicine.medicine_id, medicine.quantity
        );
        Ok(medicine)
    }
}

pub type FileMedicineRepository = FlatFileStore<MedicineCodec>;

impl FileMedicineRepository {
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        Self::with_codec(path, MedicineCodec)
    }
}

impl MedicineRepository for FileMedicineRepository {}
