pub mod entity;
pub mod invariants;

pub use entity::Medicine;
pub use invariants::validate_medicine;
