//! Inspect command implementation
//!
//! Prints the header, a per-channel summary and any diagnostics of a
//! measurement file, either for humans or as JSON.

use super::shared::{format_range, load_document, setup_logging};
use crate::app::models::{ChannelRecord, Diagnostic, Header, MeasurementDocument};
use crate::app::services::measurement_parser::ParseStats;
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use tracing::info;

/// Per-channel entry of the JSON report
#[derive(Debug, Serialize)]
struct ChannelSummary<'a> {
    name: &'a str,
    intensity_samples: usize,
    time_samples: usize,
    intensity_unit: &'static str,
    time_unit: &'static str,
    intensity_range: Option<(f64, f64)>,
    time_range: Option<(f64, f64)>,
}

impl<'a> From<&'a ChannelRecord> for ChannelSummary<'a> {
    fn from(record: &'a ChannelRecord) -> Self {
        Self {
            name: &record.name,
            intensity_samples: record.intensity.len(),
            time_samples: record.time.len(),
            intensity_unit: ChannelRecord::INTENSITY_UNIT,
            time_unit: ChannelRecord::TIME_UNIT,
            intensity_range: record.intensity_range(),
            time_range: record.time_range(),
        }
    }
}

/// JSON report for a whole file
#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    file: String,
    header: &'a Header,
    stats: &'a ParseStats,
    channels: Vec<ChannelSummary<'a>>,
    diagnostics: &'a [Diagnostic],
}

/// Inspect command runner
pub fn run_inspect(args: InspectArgs) -> Result<ParseStats> {
    setup_logging(&args.common)?;
    info!("Inspecting {}", args.common.input_file().display());

    let (document, stats) = load_document(&args.common)?;

    match args.output_format {
        OutputFormat::Human => print_human_report(&args, &document, &stats),
        OutputFormat::Json => print_json_report(&args, &document, &stats)?,
    }

    Ok(stats)
}

fn print_human_report(args: &InspectArgs, document: &MeasurementDocument, stats: &ParseStats) {
    println!("{}", "Measurement File".bold().blue());
    println!("{}", "================".blue());
    println!("File:        {}", args.common.input_file().display());
    println!("Subject:     {}", document.header.subject_name.bold());
    println!(
        "Recorded:    {}",
        document.header.recorded_at.format("%Y-%m-%d")
    );
    println!("Channels:    {}", stats.channels);
    println!();

    if !document.records.is_empty() {
        println!("{}", "Channels".bold());
        for (index, record) in document.records.iter().enumerate() {
            let counts = format!(
                "{} intensity / {} time",
                record.intensity.len(),
                record.time.len()
            );
            let counts = if record.lengths_match() {
                counts.green()
            } else {
                counts.yellow()
            };

            println!("  {:>3}. {:<20} {}", index + 1, record.name.cyan(), counts);
            println!(
                "       intensity: {}",
                format_range(record.intensity_range(), ChannelRecord::INTENSITY_UNIT)
            );
            println!(
                "       time:      {}",
                format_range(record.time_range(), ChannelRecord::TIME_UNIT)
            );
        }
        println!();
    }

    if document.diagnostics.is_empty() {
        println!("{}", "No diagnostics".green());
    } else {
        println!(
            "{}",
            format!("{} diagnostic(s)", document.diagnostics.len())
                .yellow()
                .bold()
        );
        for diagnostic in &document.diagnostics {
            println!("  {} {}", "⚠".yellow(), diagnostic);
        }
    }
}

fn print_json_report(
    args: &InspectArgs,
    document: &MeasurementDocument,
    stats: &ParseStats,
) -> Result<()> {
    let report = InspectReport {
        file: args.common.input_file().display().to_string(),
        header: &document.header,
        stats,
        channels: document.records.iter().map(ChannelSummary::from).collect(),
        diagnostics: &document.diagnostics,
    };

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| Error::serialization("Failed to serialize inspect report", e))?;
    println!("{}", json);
    Ok(())
}
