// src/reports/mod.rs
//
// Plain-text reports built from fully decoded records.
//
// Generators never read the stores themselves; callers hand them finished
// records and a destination.

pub mod inventory_report;
pub mod patient_report;

pub use inventory_report::InventoryReport;
pub use patient_report::PatientReport;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::AppResult;

pub trait ReportGenerator<T: ?Sized> {
    fn render_into(&self, data: &T, out: &mut dyn fmt::Write) -> fmt::Result;

    fn render(&self, data: &T) -> String {
        let mut out = String::new();
        // Writing into a String only fails if a Display impl does
        let _ = self.render_into(data, &mut out);
        out
    }

    /// Render `data` into `destination`, creating parent directories.
    /// Returns the path written.
    fn write_report(&self, data: &T, destination: &Path) -> AppResult<PathBuf> {
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(destination, self.render(data))?;
        info!("Wrote report {}", destination.display());
        Ok(destination.to_path_buf())
    }
}

/// `$1234.50`
pub(crate) fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Empty values print as "N/A".
pub(crate) fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}
