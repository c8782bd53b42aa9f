// src/dag/scheduler.rs

use std::collections::HashMap;

use tracing::{debug, info};

use crate::catalog::{Course, CourseId, Term, Units};
use crate::config::CatalogFile;
use crate::dag::graph::DependencyGraph;
use crate::dag::layering::Layering;
use crate::errors::{PlannerError, Result};

/// Course catalog plus prerequisite graph, and the term layering over them.
///
/// Built up with [`Scheduler::add_course`] and [`Scheduler::add_prerequisite`],
/// then queried with [`Scheduler::schedule`]. Scheduling works on a private
/// copy of the prerequisite graph, so it can be called any number of times
/// with the same result.
///
/// Courses in a term are offered in catalog order and packed first-fit; the
/// number of terms is not guaranteed to be minimal.
#[derive(Debug, Clone)]
pub struct Scheduler {
    courses: Vec<Course>,
    node_ids: HashMap<String, CourseId>,
    prerequisites: DependencyGraph,
    unit_limit: Units,
}

impl Scheduler {
    /// Create an empty scheduler whose terms hold at most `unit_limit` units.
    pub fn new(unit_limit: Units) -> Result<Self> {
        if unit_limit == 0 {
            return Err(PlannerError::InvalidUnitLimit(unit_limit));
        }

        Ok(Self {
            courses: Vec::new(),
            node_ids: HashMap::new(),
            prerequisites: DependencyGraph::new(),
            unit_limit,
        })
    }

    /// Construct a scheduler from a validated [`CatalogFile`].
    ///
    /// Fails if the file has no `[plan].unit_limit`.
    pub fn from_config(cfg: &CatalogFile) -> Result<Self> {
        let unit_limit = cfg.effective_unit_limit(None).ok_or_else(|| {
            PlannerError::ConfigError(
                "no term unit limit: set [plan].unit_limit or pass --unit-limit".to_string(),
            )
        })?;
        Self::from_config_with_limit(cfg, unit_limit)
    }

    /// Like [`Scheduler::from_config`], but with the term unit limit overridden.
    pub fn from_config_with_limit(cfg: &CatalogFile, unit_limit: Units) -> Result<Self> {
        let mut scheduler = Self::new(unit_limit)?;

        for course in cfg.courses().iter() {
            scheduler.add_course(Course::new(course.name.clone(), course.units))?;
        }

        for course in cfg.courses().iter() {
            for prereq in course.after.iter() {
                scheduler.add_prerequisite(&course.name, prereq)?;
            }
        }

        debug!(
            courses = scheduler.courses.len(),
            prerequisites = scheduler.prerequisites.edge_count(),
            unit_limit,
            "scheduler built from catalog file"
        );

        Ok(scheduler)
    }

    /// Append a course to the catalog and return its identifier.
    ///
    /// Names must be unique; a second course with the same name is rejected
    /// rather than shadowing the first.
    pub fn add_course(&mut self, course: Course) -> Result<CourseId> {
        if self.node_ids.contains_key(course.name()) {
            return Err(PlannerError::DuplicateName(course.name().to_string()));
        }
        if course.units() == 0 {
            return Err(PlannerError::InvalidUnits {
                course: course.name().to_string(),
                units: course.units(),
            });
        }

        let id = self.courses.len();
        debug!(course = %course.name(), id, units = course.units(), "added course");
        self.node_ids.insert(course.name().to_string(), id);
        self.courses.push(course);
        Ok(id)
    }

    /// Record that `dependent` cannot be taken before `prerequisite`.
    pub fn add_prerequisite(&mut self, dependent: &str, prerequisite: &str) -> Result<()> {
        let from = self.node_id(dependent)?;
        let to = self.node_id(prerequisite)?;

        debug!(dependent, prerequisite, "added prerequisite");
        self.prerequisites.add_edge(from, to);
        Ok(())
    }

    /// Identifier of the course called `name`.
    pub fn node_id(&self, name: &str) -> Result<CourseId> {
        self.node_ids
            .get(name)
            .copied()
            .ok_or_else(|| PlannerError::UnknownCourse(name.to_string()))
    }

    pub fn course(&self, name: &str) -> Option<&Course> {
        let id = *self.node_ids.get(name)?;
        self.courses.get(id)
    }

    /// The catalog, in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn unit_limit(&self) -> Units {
        self.unit_limit
    }

    pub fn prerequisite_graph(&self) -> &DependencyGraph {
        &self.prerequisites
    }

    /// Direct prerequisites registered for `name`.
    pub fn prerequisites_of(&self, name: &str) -> Result<Vec<&Course>> {
        let id = self.node_id(name)?;
        Ok(self
            .prerequisites
            .prerequisites_of(id)
            .filter_map(|p| self.courses.get(p))
            .collect())
    }

    /// Courses with no outstanding prerequisite in `working`, in catalog order.
    ///
    /// Already-placed courses are included; the caller filters those.
    pub fn ready_courses(&self, working: &DependencyGraph) -> Result<Vec<(CourseId, &Course)>> {
        let mut ready = Vec::new();
        for course in self.courses.iter() {
            let id = self.node_id(course.name())?;
            if !working.contains(id) {
                ready.push((id, course));
            }
        }
        Ok(ready)
    }

    /// Start a step-wise scheduling run.
    pub fn layering(&self) -> Layering<'_> {
        Layering::new(self)
    }

    /// Pack every course into consecutive terms.
    ///
    /// Fails with [`PlannerError::NoProgress`] if a term cannot take any
    /// course. Terms filled before the stall are discarded; use
    /// [`Scheduler::layering`] to keep them.
    pub fn schedule(&self) -> Result<Vec<Term>> {
        let mut layering = self.layering();
        let mut terms = Vec::new();

        while let Some(step) = layering.next_term()? {
            terms.push(step.term);
        }

        info!(
            terms = terms.len(),
            courses = self.courses.len(),
            "schedule complete"
        );
        Ok(terms)
    }
}
