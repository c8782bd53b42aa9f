// src/catalog/term.rs

//! A single term being filled with courses.

use crate::catalog::{Course, Units};

/// Courses packed into one term, in the order they were added.
///
/// Invariant: `units()` is the sum of the contained courses' units and never
/// exceeds `unit_limit()`. The only mutation is [`Term::add_course`], which
/// refuses courses that would break it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    courses: Vec<Course>,
    units: Units,
    unit_limit: Units,
}

impl Term {
    pub fn new(unit_limit: Units) -> Self {
        Self {
            courses: Vec::new(),
            units: 0,
            unit_limit,
        }
    }

    /// Units used by the courses added so far.
    pub fn units(&self) -> Units {
        self.units
    }

    pub fn unit_limit(&self) -> Units {
        self.unit_limit
    }

    pub fn remaining_units(&self) -> Units {
        self.unit_limit - self.units
    }

    /// Add `course` if it fits in the remaining capacity.
    ///
    /// Returns `false` (and leaves the term untouched) if it does not fit.
    pub fn add_course(&mut self, course: &Course) -> bool {
        if course.units() > self.remaining_units() {
            return false;
        }

        self.courses.push(course.clone());
        self.units += course.units();
        true
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course_names(&self) -> Vec<&str> {
        self.courses.iter().map(Course::name).collect()
    }

    pub fn contains_course(&self, name: &str) -> bool {
        self.courses.iter().any(|c| c.name() == name)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
