// src/util/mod.rs

pub mod ids;
pub mod password;

pub use ids::generate_id;
pub use password::hash_password;
