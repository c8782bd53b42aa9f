// src/lib.rs

pub mod catalog;
pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::catalog::Term;
use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::dag::Scheduler;
use crate::errors::PlannerError;

/// High-level entry point used by `main.rs`.
///
/// Loads and validates the catalog, builds the scheduler with the effective
/// unit limit, then either prints the catalog (`--dry-run`) or the schedule.
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(&args.catalog)
        .with_context(|| format!("loading catalog {}", args.catalog))?;

    let unit_limit = cfg
        .effective_unit_limit(args.unit_limit)
        .ok_or_else(|| {
            PlannerError::ConfigError(
                "no term unit limit: set [plan].unit_limit or pass --unit-limit".to_string(),
            )
        })?;
    let scheduler = Scheduler::from_config_with_limit(&cfg, unit_limit)?;
    info!(
        courses = scheduler.courses().len(),
        unit_limit, "catalog loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.dry_run {
        write_catalog(&scheduler, &mut out)?;
        debug!("dry-run complete (no schedule built)");
        return Ok(());
    }

    let terms = scheduler.schedule()?;
    write_schedule(&terms, &mut out)?;
    Ok(())
}

/// Print the catalog: unit limit, then each course with its prerequisites.
pub fn write_catalog(scheduler: &Scheduler, out: &mut impl Write) -> Result<()> {
    writeln!(out, "termplan dry-run")?;
    writeln!(out, "  unit_limit = {}", scheduler.unit_limit())?;
    writeln!(out)?;

    writeln!(out, "courses ({}):", scheduler.courses().len())?;
    for course in scheduler.courses() {
        writeln!(out, "  - {}", course.name())?;
        writeln!(out, "      units: {}", course.units())?;

        let prereqs = scheduler.prerequisites_of(course.name())?;
        if !prereqs.is_empty() {
            let names: Vec<&str> = prereqs.iter().map(|c| c.name()).collect();
            writeln!(out, "      after: {:?}", names)?;
        }
    }
    Ok(())
}

/// Print one line per term: `Term N (used/limit units): A, B`.
pub fn write_schedule(terms: &[Term], out: &mut impl Write) -> Result<()> {
    for (i, term) in terms.iter().enumerate() {
        writeln!(
            out,
            "Term {} ({}/{} units): {}",
            i + 1,
            term.units(),
            term.unit_limit(),
            term.course_names().join(", ")
        )?;
    }
    Ok(())
}
