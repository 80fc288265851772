// src/config.rs
//
// Where the clinic data lives and the few tunables the services need.
//
// Resolution order (later wins):
//   1. {APP_DATA}/clinicdesk
//   2. CLINICDESK_DATA_DIR / CLINICDESK_REPORTS_DIR / CLINICDESK_LOW_STOCK_THRESHOLD
//   3. explicit overrides from the command line

use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{AppError, AppResult};

pub const APP_DIR_NAME: &str = "clinicdesk";
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

pub const ENV_DATA_DIR: &str = "CLINICDESK_DATA_DIR";
pub const ENV_REPORTS_DIR: &str = "CLINICDESK_REPORTS_DIR";
pub const ENV_LOW_STOCK_THRESHOLD: &str = "CLINICDESK_LOW_STOCK_THRESHOLD";

const PATIENTS_FILE: &str = "patients.txt";
const DOCTORS_FILE: &str = "doctors.txt";
const MEDICINES_FILE: &str = "medicines.txt";
const USERS_FILE: &str = "users.txt";
const REPORTS_DIR: &str = "reports";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    /// Defaults to `{data_dir}/reports`
    pub reports_dir: Option<PathBuf>,
    pub low_stock_threshold: u32,
}

impl AppConfig {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            reports_dir: None,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }

    /// Platform default, environment applied, then `data_dir_override` if given.
    pub fn resolve(data_dir_override: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::with_data_dir(default_data_dir()?);
        config.apply_env_overrides();
        if let Some(data_dir) = data_dir_override {
            config.data_dir = data_dir;
        }
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(val) = get(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(val);
        }
        if let Some(val) = get(ENV_REPORTS_DIR) {
            self.reports_dir = Some(PathBuf::from(val));
        }
        if let Some(val) = get(ENV_LOW_STOCK_THRESHOLD) {
            match val.trim().parse() {
                Ok(threshold) => self.low_stock_threshold = threshold,
                Err(_) => warn!(
                    "Ignoring {}={:?}: not a whole number",
                    ENV_LOW_STOCK_THRESHOLD, val
                ),
            }
        }
    }

    pub fn patients_file(&self) -> PathBuf {
        self.data_dir.join(PATIENTS_FILE)
    }

    pub fn doctors_file(&self) -> PathBuf {
        self.data_dir.join(DOCTORS_FILE)
    }

    pub fn medicines_file(&self) -> PathBuf {
        self.data_dir.join(MEDICINES_FILE)
    }

    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join(USERS_FILE)
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.reports_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join(REPORTS_DIR))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// `{APP_DATA}/clinicdesk`
pub fn default_data_dir() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;
    Ok(app_data_dir.join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_file_layout() {
        let config = AppConfig::with_data_dir("/tmp/clinic");
        assert_eq!(config.patients_file(), PathBuf::from("/tmp/clinic/patients.txt"));
        assert_eq!(config.medicines_file(), PathBuf::from("/tmp/clinic/medicines.txt"));
        assert_eq!(config.reports_dir(), PathBuf::from("/tmp/clinic/reports"));
        assert_eq!(config.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::with_data_dir("/tmp/clinic");
        config.apply_overrides(lookup(&[
            (ENV_DATA_DIR, "/srv/clinic"),
            (ENV_REPORTS_DIR, "/srv/out"),
            (ENV_LOW_STOCK_THRESHOLD, " 25 "),
        ]));

        assert_eq!(config.users_file(), PathBuf::from("/srv/clinic/users.txt"));
        assert_eq!(config.reports_dir(), PathBuf::from("/srv/out"));
        assert_eq!(config.low_stock_threshold, 25);
    }

    #[test]
    fn test_bad_or_blank_values_are_ignored() {
        let mut config = AppConfig::with_data_dir("/tmp/clinic");
        config.apply_overrides(lookup(&[
            (ENV_DATA_DIR, "   "),
            (ENV_LOW_STOCK_THRESHOLD, "lots"),
        ]));

        assert_eq!(config.data_dir(), Path::new("/tmp/clinic"));
        assert_eq!(config.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
    }
}
