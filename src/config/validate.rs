// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{CatalogFile, RawCatalogFile};
use crate::errors::{PlannerError, Result};

impl TryFrom<RawCatalogFile> for CatalogFile {
    type Error = crate::errors::PlannerError;

    fn try_from(raw: RawCatalogFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_catalog(&raw)?;
        Ok(CatalogFile::new_unchecked(raw.plan, raw.course))
    }
}

fn validate_raw_catalog(cfg: &RawCatalogFile) -> Result<()> {
    validate_plan(cfg)?;
    validate_courses(cfg)?;
    validate_prerequisites(cfg)?;
    Ok(())
}

fn validate_plan(cfg: &RawCatalogFile) -> Result<()> {
    match cfg.plan.unit_limit {
        Some(0) => Err(PlannerError::InvalidUnitLimit(0)),
        _ => Ok(()),
    }
}

fn validate_courses(cfg: &RawCatalogFile) -> Result<()> {
    let mut seen = HashSet::new();
    for course in cfg.course.iter() {
        if course.name.trim().is_empty() {
            return Err(PlannerError::ConfigError(
                "course name must not be empty".to_string(),
            ));
        }
        if !seen.insert(course.name.as_str()) {
            return Err(PlannerError::DuplicateName(course.name.clone()));
        }
        if course.units == 0 {
            return Err(PlannerError::InvalidUnits {
                course: course.name.clone(),
                units: course.units,
            });
        }
    }
    Ok(())
}

fn validate_prerequisites(cfg: &RawCatalogFile) -> Result<()> {
    let names: HashSet<&str> = cfg.course.iter().map(|c| c.name.as_str()).collect();

    for course in cfg.course.iter() {
        for prereq in course.after.iter() {
            if !names.contains(prereq.as_str()) {
                return Err(PlannerError::ConfigError(format!(
                    "course '{}' has unknown prerequisite '{}' in `after`",
                    course.name, prereq
                )));
            }
            if prereq == &course.name {
                return Err(PlannerError::ConfigError(format!(
                    "course '{}' cannot be its own prerequisite",
                    course.name
                )));
            }
        }
    }
    Ok(())
}
