// src/util/ids.rs

use chrono::Utc;

/// `prefix` followed by the current Unix time in milliseconds, e.g. "P1718000000000".
pub fn generate_id(prefix: &str) -> String {
    format!("{}{}", prefix, Utc::now().timestamp_millis())
}
