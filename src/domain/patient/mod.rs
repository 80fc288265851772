pub mod entity;
pub mod invariants;

pub use entity::Patient;
pub use invariants::validate_patient;
