// src/catalog/mod.rs

//! Value types shared by the scheduler and its callers.
//!
//! - [`course`] holds the immutable [`Course`] record.
//! - [`term`] holds the [`Term`] accumulator that courses are packed into.

pub mod course;
pub mod term;

pub use course::Course;
pub use term::Term;

/// Stable identifier of a course: its index in the scheduler's catalog.
pub type CourseId = usize;

/// Unit cost of a course, and the capacity of a term.
pub type Units = u32;
