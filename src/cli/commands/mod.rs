//! Command implementations for PyMoDAQ processor CLI
//!
//! This module contains the command execution logic for the CLI interface.
//! Each command is implemented in its own module.

pub mod convert;
pub mod inspect;
pub mod shared;
pub mod validate;

use crate::Result;
use crate::app::services::measurement_parser::ParseStats;
use crate::cli::args::Commands;

/// Main command runner
///
/// Dispatches to the subcommand handler:
/// - `inspect`: Header, channel summary and diagnostics report
/// - `validate`: Well-formedness check, optionally strict
/// - `convert`: JSON or canonical delimited output
pub fn run(command: Commands) -> Result<ParseStats> {
    match command {
        Commands::Inspect(args) => inspect::run_inspect(args),
        Commands::Validate(args) => validate::run_validate(args),
        Commands::Convert(args) => convert::run_convert(args),
    }
}
