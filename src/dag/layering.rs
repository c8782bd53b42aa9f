// src/dag/layering.rs

//! Per-run working state for one pass of the layering algorithm.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::catalog::{Course, CourseId, Term};
use crate::dag::graph::DependencyGraph;
use crate::dag::scheduler::Scheduler;
use crate::dag::scheduler_step::TermStep;
use crate::errors::{PlannerError, Result};

/// Working state of a single scheduling run.
///
/// Owns its own copy of the prerequisite graph, so draining it never touches
/// the [`Scheduler`] it came from. Each call to [`Layering::next_term`] fills
/// one term from the current ready frontier and then clears the placed
/// courses as blockers.
///
/// After an error the partial state stays readable through
/// [`Layering::visited`], [`Layering::remaining`] and [`Layering::working_graph`].
#[derive(Debug)]
pub struct Layering<'a> {
    scheduler: &'a Scheduler,
    working: DependencyGraph,
    visited: HashSet<CourseId>,
    terms_filled: usize,
}

impl<'a> Layering<'a> {
    pub(crate) fn new(scheduler: &'a Scheduler) -> Self {
        Self {
            scheduler,
            working: scheduler.prerequisite_graph().clone(),
            visited: HashSet::new(),
            terms_filled: 0,
        }
    }

    /// Whether every catalog course has been placed.
    pub fn is_done(&self) -> bool {
        self.visited.len() == self.scheduler.courses().len()
    }

    /// Prerequisite edges not yet satisfied in this run.
    pub fn working_graph(&self) -> &DependencyGraph {
        &self.working
    }

    /// Placed courses, in catalog order.
    pub fn visited(&self) -> Vec<&'a Course> {
        self.courses_where(|id| self.visited.contains(&id))
    }

    /// Unplaced courses, in catalog order.
    pub fn remaining(&self) -> Vec<&'a Course> {
        self.courses_where(|id| !self.visited.contains(&id))
    }

    /// Fill the next term.
    ///
    /// Returns `Ok(None)` once every course has been placed, and
    /// [`PlannerError::NoProgress`] if the term would come out empty.
    pub fn next_term(&mut self) -> Result<Option<TermStep>> {
        if self.is_done() {
            return Ok(None);
        }

        let scheduler = self.scheduler;
        let index = self.terms_filled + 1;
        let mut term = Term::new(scheduler.unit_limit());
        let mut placed: Vec<CourseId> = Vec::new();

        for (id, course) in scheduler.ready_courses(&self.working)? {
            if self.visited.contains(&id) {
                continue;
            }

            if !term.add_course(course) {
                debug!(
                    term = index,
                    course = %course.name(),
                    units = course.units(),
                    remaining_units = term.remaining_units(),
                    "course does not fit; leaving it for a later term"
                );
                continue;
            }

            debug!(term = index, course = %course.name(), "placed course");
            self.visited.insert(id);
            placed.push(id);
        }

        if placed.is_empty() {
            let remaining: Vec<String> = self
                .remaining()
                .into_iter()
                .map(|c| c.name().to_string())
                .collect();
            warn!(
                term = index,
                ?remaining,
                "no course could be placed; prerequisites are cyclic or a course exceeds the unit limit"
            );
            return Err(PlannerError::NoProgress {
                term: index,
                remaining,
            });
        }

        let blocked_before: Vec<CourseId> = self
            .unvisited_ids()
            .filter(|id| self.working.contains(*id))
            .collect();

        for id in &placed {
            self.working.remove(*id);
        }

        let newly_unblocked = blocked_before
            .into_iter()
            .filter(|id| !self.working.contains(*id))
            .map(|id| scheduler.courses()[id].name().to_string())
            .collect::<Vec<_>>();

        self.terms_filled = index;
        let remaining = scheduler.courses().len() - self.visited.len();

        info!(
            term = index,
            units = term.units(),
            unit_limit = term.unit_limit(),
            courses = term.len(),
            remaining,
            "term filled"
        );

        Ok(Some(TermStep {
            index,
            term,
            newly_unblocked,
            remaining,
        }))
    }

    fn unvisited_ids(&self) -> impl Iterator<Item = CourseId> + '_ {
        (0..self.scheduler.courses().len()).filter(|id| !self.visited.contains(id))
    }

    fn courses_where(&self, keep: impl Fn(CourseId) -> bool) -> Vec<&'a Course> {
        let courses: &'a [Course] = self.scheduler.courses();
        courses
            .iter()
            .enumerate()
            .filter_map(|(id, c)| keep(id).then_some(c))
            .collect()
    }
}
