// src/reports/inventory_report.rs

use std::fmt;

use chrono::{DateTime, Utc};

use super::{money, or_na, ReportGenerator};
use crate::domain::Medicine;

/// Stock listing with a low-stock section at the end
pub struct InventoryReport {
    low_stock_threshold: u32,
    generated_at: DateTime<Utc>,
}

impl InventoryReport {
    pub fn new(low_stock_threshold: u32) -> Self {
        Self::at(low_stock_threshold, Utc::now())
    }

    pub fn at(low_stock_threshold: u32, generated_at: DateTime<Utc>) -> Self {
        Self {
            low_stock_threshold,
            generated_at,
        }
    }
}

impl ReportGenerator<[Medicine]> for InventoryReport {
    fn render_into(&self, medicines: &[Medicine], out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "INVENTORY REPORT")?;
        writeln!(out, "Generated: {}", self.generated_at.format("%Y-%m-%d %H:%M"))?;
        writeln!(out)?;

        if medicines.is_empty() {
            return writeln!(out, "No medicines in stock.");
        }

        writeln!(
            out,
            "{:<10} {:<24} {:<18} {:<16} {:>10} {:>8}",
            "ID", "Name", "Manufacturer", "Category", "Price", "Qty"
        )?;
        for m in medicines {
            writeln!(
                out,
                "{:<10} {:<24} {:<18} {:<16} {:>10} {:>8}",
                m.medicine_id,
                m.name,
                or_na(&m.manufacturer),
                or_na(&m.category),
                money(m.price),
                m.quantity
            )?;
        }

        let units: u64 = medicines.iter().map(|m| u64::from(m.quantity)).sum();
        let value: f64 = medicines.iter().map(|m| m.price * f64::from(m.quantity)).sum();
        writeln!(out)?;
        writeln!(out, "Total items: {}", medicines.len())?;
        writeln!(out, "Total units: {}", units)?;
        writeln!(out, "Stock value: {}", money(value))?;

        let low: Vec<&Medicine> = medicines
            .iter()
            .filter(|m| m.quantity < self.low_stock_threshold)
            .collect();
        writeln!(out)?;
        writeln!(out, "Low stock (below {}):", self.low_stock_threshold)?;
        if low.is_empty() {
            writeln!(out, "  none")?;
        }
        for m in low {
            let marker = if m.is_out_of_stock() { " OUT OF STOCK" } else { "" };
            writeln!(out, "  {} {}: {}{}", m.medicine_id, m.name, m.quantity, marker)?;
        }
        Ok(())
    }
}
