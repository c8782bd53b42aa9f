// src/catalog/course.rs

use std::fmt;

use crate::catalog::Units;

/// A course in the catalog.
///
/// The name is unique within one scheduler; units is the cost charged against
/// a term's unit limit. Courses are never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Course {
    name: String,
    units: Units,
}

impl Course {
    pub fn new(name: impl Into<String>, units: Units) -> Self {
        Self {
            name: name.into(),
            units,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> Units {
        self.units
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} units)", self.name, self.units)
    }
}
