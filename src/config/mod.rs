// src/config/mod.rs

//! TOML catalog files: model, loading and validation.

pub mod loader;
pub mod model;
mod validate;

pub use loader::{load_and_validate, load_from_path, load_from_str};
pub use model::{CatalogFile, CourseConfig, PlanSection, RawCatalogFile};
