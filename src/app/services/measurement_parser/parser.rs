//! Core measurement file parser implementation
//!
//! This module provides the block state machine that turns rows into a
//! [`MeasurementDocument`], plus the entry points for pre-split rows,
//! in-memory text, readers and files.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use super::field_parsers::{channel_name, parse_f64_row, parse_header};
use super::reader::{Row, number_rows, read_rows, read_rows_from_str, trim_trailing_blank_rows};
use super::validation::validate_record;
use crate::app::models::{ChannelRecord, MeasurementDocument};
use crate::config::ParserConfig;
use crate::constants::block_rows;
use crate::{Error, Result};

/// Position of the parser within the file layout
///
/// Running out of rows is only a clean end in `ExpectName`; in any other
/// state it means the file is malformed.
#[derive(Debug)]
enum ParseState {
    ExpectHeader,
    ExpectName,
    ExpectIntensity {
        name: String,
        line: usize,
    },
    ExpectTime {
        name: String,
        line: usize,
        intensity: Vec<f64>,
    },
    Done,
}

/// Parser for PyMoDAQ simple measurement files
///
/// Holds only its configuration, so a single parser can be reused for any
/// number of independent parses.
#[derive(Debug, Clone, Default)]
pub struct MeasurementParser {
    config: ParserConfig,
}

impl MeasurementParser {
    /// Create a parser with a validated configuration
    pub fn new(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse rows that were already split into fields
    ///
    /// Rows are numbered from 1 in the order given. Blank rows follow the
    /// same policy as text input: trailing ones are dropped when
    /// `skip_trailing_blank_lines` is set, all others are parsed as rows.
    pub fn parse_rows<I, R, S>(&self, rows: I) -> Result<MeasurementDocument>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rows = number_rows(rows);
        if self.config.skip_trailing_blank_lines {
            trim_trailing_blank_rows(&mut rows);
        }
        self.parse_numbered_rows(rows)
    }

    /// Parse in-memory text
    pub fn parse_str(&self, text: &str) -> Result<MeasurementDocument> {
        let rows = read_rows_from_str(text, &self.config)?;
        self.parse_numbered_rows(rows)
    }

    /// Parse everything available from a reader
    pub fn parse_reader<R: Read>(&self, source: R) -> Result<MeasurementDocument> {
        let rows = read_rows(source, &self.config)?;
        self.parse_numbered_rows(rows)
    }

    /// Parse a measurement file from disk
    ///
    /// The file handle is owned by this call and closed on every return path.
    pub fn parse_file(&self, file_path: &Path) -> Result<MeasurementDocument> {
        info!("Parsing measurement file: {}", file_path.display());

        let file = File::open(file_path).map_err(|e| {
            Error::io(format!("Failed to open file {}", file_path.display()), e)
        })?;
        let document = self.parse_reader(file)?;

        debug!(
            "Parsed header: subject='{}', recorded_at={}",
            document.header.subject_name, document.header.recorded_at
        );
        for record in &document.records {
            debug!(
                "Channel '{}': {} intensity / {} time samples",
                record.name,
                record.intensity.len(),
                record.time.len()
            );
        }
        for diagnostic in &document.diagnostics {
            warn!("{}: {}", file_path.display(), diagnostic);
        }

        info!(
            "Parsed {} channels from {} ({} diagnostics)",
            document.records.len(),
            file_path.display(),
            document.diagnostics.len()
        );

        Ok(document)
    }

    /// Run the block state machine over numbered rows
    pub fn parse_numbered_rows<I>(&self, rows: I) -> Result<MeasurementDocument>
    where
        I: IntoIterator<Item = Row>,
    {
        let mut rows = rows.into_iter();
        let mut state = ParseState::ExpectHeader;
        let mut header = None;
        let mut records = Vec::new();
        let mut diagnostics = Vec::new();

        loop {
            state = match state {
                ParseState::ExpectHeader => {
                    let row = rows
                        .next()
                        .ok_or_else(|| Error::malformed_header(1, "input is empty"))?;
                    header = Some(parse_header(&row, &self.config.date_format)?);
                    ParseState::ExpectName
                }
                ParseState::ExpectName => match rows.next() {
                    Some(row) => ParseState::ExpectIntensity {
                        name: channel_name(&row),
                        line: row.line,
                    },
                    None => ParseState::Done,
                },
                ParseState::ExpectIntensity { name, line } => {
                    let row = rows.next().ok_or_else(|| {
                        Error::truncated_block(name.as_str(), line, block_rows::INTENSITY)
                    })?;
                    ParseState::ExpectTime {
                        intensity: parse_f64_row(&row)?,
                        name,
                        line,
                    }
                }
                ParseState::ExpectTime {
                    name,
                    line,
                    intensity,
                } => {
                    let row = rows.next().ok_or_else(|| {
                        Error::truncated_block(name.as_str(), line, block_rows::TIME)
                    })?;
                    let time = parse_f64_row(&row)?;

                    let record = ChannelRecord::new(name, intensity, time);
                    if let Some(diagnostic) = validate_record(&record, records.len(), line) {
                        diagnostics.push(diagnostic);
                    }
                    records.push(record);
                    ParseState::ExpectName
                }
                ParseState::Done => break,
            };
        }

        let header =
            header.ok_or_else(|| Error::malformed_header(1, "header row was not consumed"))?;

        Ok(MeasurementDocument::new(header, records, diagnostics))
    }
}
