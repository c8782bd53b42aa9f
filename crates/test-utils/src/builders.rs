#![allow(dead_code)]

use termplan::catalog::Units;
use termplan::config::{CatalogFile, CourseConfig, PlanSection, RawCatalogFile};
use termplan::dag::Scheduler;

/// Builder for `CatalogFile` to simplify test setup.
pub struct CatalogFileBuilder {
    catalog: RawCatalogFile,
}

impl CatalogFileBuilder {
    pub fn new() -> Self {
        Self {
            catalog: RawCatalogFile {
                plan: PlanSection::default(),
                course: Vec::new(),
            },
        }
    }

    pub fn with_unit_limit(mut self, limit: Units) -> Self {
        self.catalog.plan.unit_limit = Some(limit);
        self
    }

    pub fn with_course(mut self, course: CourseConfig) -> Self {
        self.catalog.course.push(course);
        self
    }

    pub fn build_raw(self) -> RawCatalogFile {
        self.catalog
    }

    pub fn build(self) -> CatalogFile {
        CatalogFile::try_from(self.catalog).expect("Failed to build valid catalog from builder")
    }

    pub fn build_scheduler(self) -> Scheduler {
        Scheduler::from_config(&self.build()).expect("Failed to build scheduler from builder")
    }
}

impl Default for CatalogFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `CourseConfig`.
pub struct CourseConfigBuilder {
    course: CourseConfig,
}

impl CourseConfigBuilder {
    pub fn new(name: &str, units: Units) -> Self {
        Self {
            course: CourseConfig {
                name: name.to_string(),
                units,
                after: vec![],
            },
        }
    }

    pub fn after(mut self, prereq: &str) -> Self {
        self.course.after.push(prereq.to_string());
        self
    }

    pub fn build(self) -> CourseConfig {
        self.course
    }
}
