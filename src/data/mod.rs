//! Data module - CSV loading, normalization and typed records

pub mod coords;
mod loader;
mod records;

pub use loader::{load_context, load_drug_dataset, load_weapon_dataset, LoaderError};
pub use records::{DataContext, DrugRecord, WeaponRecord};
