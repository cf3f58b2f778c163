//! Shared components for CLI commands
//!
//! This module contains logging setup and document loading used by every
//! command implementation.

use crate::app::models::MeasurementDocument;
use crate::app::services::measurement_parser::{MeasurementParser, ParseStats};
use crate::cli::args::CommonArgs;
use crate::constants::LOG_TARGET;
use crate::Result;
use tracing::{debug, info};

/// Set up structured logging for a command
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Parse the input file named by the common arguments
pub fn load_document(args: &CommonArgs) -> Result<(MeasurementDocument, ParseStats)> {
    let config = args.parser_config()?;
    debug!("Parser configuration: {:?}", config);

    let parser = MeasurementParser::new(config)?;
    let document = parser.parse_file(args.input_file())?;
    let stats = ParseStats::from_document(&document);

    info!(
        "Loaded {} channels ({} intensity / {} time samples)",
        stats.channels, stats.intensity_samples, stats.time_samples
    );
    Ok((document, stats))
}

/// Format a value range for reports
pub fn format_range(range: Option<(f64, f64)>, unit: &str) -> String {
    match range {
        Some((min, max)) => format!("{} .. {} {}", min, max, unit),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_range() {
        assert_eq!(format_range(Some((0.5, 2.0)), "V"), "0.5 .. 2 V");
        assert_eq!(format_range(None, "s"), "-");
    }
}
