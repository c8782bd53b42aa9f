// src/dag/scheduler_step.rs

//! Step-by-step result type for the layering loop.

use crate::catalog::Term;

/// Structured result of filling a single term.
///
/// Useful for callers (and tests) that want to walk the schedule one term at
/// a time and inspect what each term unlocked.
#[derive(Debug, Clone)]
pub struct TermStep {
    /// 1-based position of this term in the schedule.
    pub index: usize,
    /// The completed term.
    pub term: Term,
    /// Courses that were blocked before this term and became ready because of it.
    pub newly_unblocked: Vec<String>,
    /// Number of courses still unplaced after this term.
    pub remaining: usize,
}

impl TermStep {
    /// Whether this step placed the last course of the catalog.
    pub fn is_last(&self) -> bool {
        self.remaining == 0
    }
}
