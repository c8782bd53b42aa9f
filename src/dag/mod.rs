// src/dag/mod.rs

//! Prerequisite graph and term scheduling.
//!
//! - [`graph`] holds the "course needs course" edge sets.
//! - [`scheduler`] owns the catalog and runs the term layering.
//! - [`layering`] is the per-run working state, one term per step.
//! - [`scheduler_step`] defines the result type for a single step.

pub mod graph;
pub mod layering;
pub mod scheduler;
pub mod scheduler_step;

pub use graph::DependencyGraph;
pub use layering::Layering;
pub use scheduler::Scheduler;
pub use scheduler_step::TermStep;
