// src/config/model.rs

use serde::Deserialize;

use crate::catalog::Units;

/// Catalog file as read from TOML, before validation.
///
/// ```toml
/// [plan]
/// unit_limit = 15
///
/// [[course]]
/// name = "CS101"
/// units = 4
///
/// [[course]]
/// name = "CS201"
/// units = 4
/// after = ["CS101"]
/// ```
///
/// Courses are an array of tables so the file order becomes the catalog order.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCatalogFile {
    #[serde(default)]
    pub plan: PlanSection,

    #[serde(default)]
    pub course: Vec<CourseConfig>,
}

/// `[plan]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanSection {
    /// Maximum units per term. May instead be given on the command line.
    #[serde(default)]
    pub unit_limit: Option<Units>,
}

/// One `[[course]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseConfig {
    pub name: String,

    pub units: Units,

    /// Courses that must be completed in an earlier term.
    #[serde(default)]
    pub after: Vec<String>,
}

/// A validated catalog file.
///
/// Only obtainable through `CatalogFile::try_from(RawCatalogFile)` (or the
/// loader), so holders can rely on unique names and resolvable `after` lists.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    plan: PlanSection,
    course: Vec<CourseConfig>,
}

impl CatalogFile {
    pub(crate) fn new_unchecked(plan: PlanSection, course: Vec<CourseConfig>) -> Self {
        Self { plan, course }
    }

    pub fn plan(&self) -> &PlanSection {
        &self.plan
    }

    /// Courses in file order.
    pub fn courses(&self) -> &[CourseConfig] {
        &self.course
    }

    /// The unit limit to use, preferring `override_limit` over the file.
    pub fn effective_unit_limit(&self, override_limit: Option<Units>) -> Option<Units> {
        override_limit.or(self.plan.unit_limit)
    }
}
