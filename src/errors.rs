// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Duplicate course name: {0}")]
    DuplicateName(String),

    #[error("Unknown course: {0}")]
    UnknownCourse(String),

    /// Layering stalled: courses remain but none could be placed in a fresh
    /// term. Either the prerequisites form a cycle or a course is larger than
    /// the unit limit.
    #[error(
        "No progress while filling term {term}; unplaced courses: {}",
        .remaining.join(", ")
    )]
    NoProgress { term: usize, remaining: Vec<String> },

    #[error("Term unit limit must be positive (got {0})")]
    InvalidUnitLimit(u32),

    #[error("Course '{course}' must have a positive unit count (got {units})")]
    InvalidUnits { course: String, units: u32 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
