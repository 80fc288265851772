pub mod entity;
pub mod invariants;

pub use entity::Doctor;
pub use invariants::validate_doctor;
