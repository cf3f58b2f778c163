//! Convert command implementation
//!
//! Writes a parsed measurement file as JSON or in the canonical delimited
//! format, to a file or to stdout.

use super::shared::{load_document, setup_logging};
use crate::app::services::measurement_parser::writer::{write_json, write_json_file};
use crate::app::services::measurement_parser::{MeasurementWriter, ParseStats};
use crate::cli::args::{ConvertArgs, ConvertFormat};
use crate::Result;
use std::io::Write;
use tracing::info;

/// Convert command runner
pub fn run_convert(args: ConvertArgs) -> Result<ParseStats> {
    setup_logging(&args.common)?;

    let (document, stats) = load_document(&args.common)?;

    match (&args.output_path, args.output_format) {
        (Some(path), ConvertFormat::Json) => write_json_file(&document, path)?,
        (Some(path), ConvertFormat::Csv) => {
            let writer = MeasurementWriter::new(args.common.parser_config()?)?;
            writer.write_file(&document, path)?;
        }
        (None, ConvertFormat::Json) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            write_json(&document, &mut out)?;
            out.flush()?;
        }
        (None, ConvertFormat::Csv) => {
            let writer = MeasurementWriter::new(args.common.parser_config()?)?;
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            writer.write_document(&document, &mut out)?;
            out.flush()?;
        }
    }

    info!(
        "Converted {} channels from {}",
        stats.channels,
        args.common.input_file().display()
    );
    Ok(stats)
}
