//! Validate command implementation
//!
//! Parses a measurement file and reports whether it is well formed.
//! Structural errors always fail; diagnostics fail only in strict mode.

use super::shared::{load_document, setup_logging};
use crate::app::services::measurement_parser::ParseStats;
use crate::cli::args::ValidateArgs;
use crate::{Error, Result};
use colored::*;
use tracing::{info, warn};

/// Validate command runner
pub fn run_validate(args: ValidateArgs) -> Result<ParseStats> {
    setup_logging(&args.common)?;
    info!(
        "Validating {} (strict: {})",
        args.common.input_file().display(),
        args.strict
    );

    let (document, stats) = load_document(&args.common)?;

    for diagnostic in &document.diagnostics {
        println!("{} {}", "warning:".yellow().bold(), diagnostic);
    }

    check_outcome(&stats, args.strict)?;

    println!(
        "{} {}: {} channels, {:.1}% consistent",
        "ok".green().bold(),
        args.common.input_file().display(),
        stats.channels,
        stats.consistency_rate()
    );
    Ok(stats)
}

/// Decide whether a parsed document passes validation
pub fn check_outcome(stats: &ParseStats, strict: bool) -> Result<()> {
    if strict && stats.diagnostics > 0 {
        warn!("Strict validation failed with {} diagnostics", stats.diagnostics);
        return Err(Error::validation_failed(stats.diagnostics));
    }
    Ok(())
}
