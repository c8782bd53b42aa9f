// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{CatalogFile, RawCatalogFile};
use crate::errors::Result;

/// Read a catalog file and deserialize it without validation.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawCatalogFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    load_from_str(&contents)
}

/// Deserialize catalog TOML held in memory.
pub fn load_from_str(contents: &str) -> Result<RawCatalogFile> {
    let catalog: RawCatalogFile = toml::from_str(contents)?;
    Ok(catalog)
}

/// Read a catalog file and validate it.
///
/// Rejects non-positive units or limits, duplicate names and `after` entries
/// that do not name a course in the file. A file without courses is valid and
/// schedules to zero terms.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<CatalogFile> {
    let raw = load_from_path(&path)?;
    CatalogFile::try_from(raw)
}
