// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::catalog::Units;

/// Command-line arguments for `termplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "termplan",
    version,
    about = "Pack a course catalog into terms, respecting prerequisites and a per-term unit limit.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the catalog file (TOML).
    ///
    /// Default: `Termplan.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Termplan.toml")]
    pub catalog: String,

    /// Maximum units per term; overrides `[plan].unit_limit`.
    #[arg(long, value_name = "UNITS")]
    pub unit_limit: Option<Units>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TERMPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the catalog, but don't build a schedule.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
