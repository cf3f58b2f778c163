//! Row input for measurement files
//!
//! Splits raw text into numbered rows of fields with a `csv` reader. Quoting
//! is disabled: every occurrence of the delimiter separates two fields and no
//! other character is special.
//!
//! Every physical line becomes a row, blank lines included, so a blank line
//! inside a channel block is read as an empty row rather than dropped. Only
//! blank lines after the last non-blank row are discarded (when
//! `skip_trailing_blank_lines` is set).

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};

use crate::config::ParserConfig;
use crate::{Error, Result};

/// One delimited row of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line (text input) or row position (pre-split input)
    pub line: usize,

    /// Fields in order of appearance
    pub fields: Vec<String>,
}

impl Row {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// An empty line: a single empty field
    pub fn blank(line: usize) -> Self {
        Self {
            line,
            fields: vec![String::new()],
        }
    }

    fn from_record(line: usize, record: &StringRecord) -> Self {
        Self {
            line,
            fields: record.iter().map(str::to_string).collect(),
        }
    }

    /// A row with no fields or a single empty field
    pub fn is_blank(&self) -> bool {
        self.fields.is_empty() || (self.fields.len() == 1 && self.fields[0].is_empty())
    }
}

/// Number pre-split rows sequentially, starting at 1
pub fn number_rows<I, R, S>(rows: I) -> Vec<Row>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: Into<String>,
{
    rows.into_iter()
        .enumerate()
        .map(|(index, fields)| Row::new(index + 1, fields.into_iter().map(Into::into).collect()))
        .collect()
}

/// Drop blank rows that follow the last non-blank row
pub fn trim_trailing_blank_rows(rows: &mut Vec<Row>) {
    while rows.last().is_some_and(Row::is_blank) {
        rows.pop();
    }
}

/// Tracks the physical line of each record from its byte offset
///
/// The csv reader skips empty lines, and a record's position is the offset
/// just past the previous record's terminator, so the record itself starts
/// after any line terminator bytes found there.
struct LineCursor<'a> {
    bytes: &'a [u8],
    offset: usize,
    line: usize,
}

impl<'a> LineCursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            offset: 0,
            line: 1,
        }
    }

    /// Line on which the record read from `position` actually starts
    fn record_line(&mut self, position: usize) -> usize {
        let from = position.clamp(self.offset, self.bytes.len());
        let start = self.bytes[from..]
            .iter()
            .position(|b| *b != b'\r' && *b != b'\n')
            .map_or(self.bytes.len(), |skipped| from + skipped);

        self.line += count_newlines(&self.bytes[self.offset..start]);
        self.offset = start;
        self.line
    }

    /// Number of physical lines in the whole input
    fn total_lines(&self) -> usize {
        let newlines = count_newlines(self.bytes);
        match self.bytes.last() {
            Some(b'\n') | None => newlines,
            Some(_) => newlines + 1,
        }
    }
}

fn count_newlines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|b| **b == b'\n').count()
}

/// Read every row from a reader
///
/// Line terminators (`\n` or `\r\n`) are stripped. Line numbers count every
/// physical line.
pub fn read_rows<R: Read>(mut source: R, config: &ParserConfig) -> Result<Vec<Row>> {
    let mut bytes = Vec::new();
    source
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io("Failed to read measurement data", e))?;

    rows_from_bytes(&bytes, config)
}

/// Read every row from in-memory text
pub fn read_rows_from_str(text: &str, config: &ParserConfig) -> Result<Vec<Row>> {
    rows_from_bytes(text.as_bytes(), config)
}

fn rows_from_bytes(bytes: &[u8], config: &ParserConfig) -> Result<Vec<Row>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(config.delimiter)
        .from_reader(bytes);

    let mut cursor = LineCursor::new(bytes);
    let mut rows = Vec::new();

    for result in csv_reader.records() {
        let record = result.map_err(|e| {
            Error::csv_parsing(format!("Failed to read row after line {}", rows.len()), e)
        })?;

        let position = record
            .position()
            .map_or(cursor.offset, |pos| pos.byte() as usize);
        let line = cursor.record_line(position);

        // Lines the csv reader skipped were empty
        for blank_line in (rows.len() + 1)..line {
            rows.push(Row::blank(blank_line));
        }
        rows.push(Row::from_record(line, &record));
    }

    for blank_line in (rows.len() + 1)..=cursor.total_lines() {
        rows.push(Row::blank(blank_line));
    }

    if config.skip_trailing_blank_lines {
        trim_trailing_blank_rows(&mut rows);
    }

    Ok(rows)
}
