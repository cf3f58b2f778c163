//! Field parsing utilities for measurement rows
//!
//! This module provides helper functions for converting header and sample
//! fields with error reporting that identifies the offending row and field.

use chrono::NaiveDate;

use super::reader::Row;
use crate::app::models::Header;
use crate::constants::HEADER_MIN_FIELDS;
use crate::{Error, Result};

/// Parse the header row into subject name and recording date
///
/// Fields beyond the second are ignored. The subject name is kept verbatim.
pub fn parse_header(row: &Row, date_format: &str) -> Result<Header> {
    if row.fields.len() < HEADER_MIN_FIELDS {
        return Err(Error::malformed_header(
            row.line,
            format!(
                "expected at least {} fields (subject name, date), found {}",
                HEADER_MIN_FIELDS,
                row.fields.len()
            ),
        ));
    }

    let subject_name = row.fields[0].clone();
    let recorded_at = parse_date(&row.fields[1], row.line, date_format)?;

    Ok(Header::new(subject_name, recorded_at))
}

/// Parse a date field with the given chrono layout
pub fn parse_date(value: &str, line: usize, date_format: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, date_format)
        .map_err(|e| Error::invalid_date(line, value, date_format, e))
}

/// Parse every field of a row as a 64-bit float
///
/// Fields are not trimmed: surrounding whitespace or an empty field is an
/// error rather than a silent zero.
pub fn parse_f64_row(row: &Row) -> Result<Vec<f64>> {
    row.fields
        .iter()
        .enumerate()
        .map(|(field_index, value)| parse_f64_field(value, row.line, field_index))
        .collect()
}

/// Parse a single sample field
pub fn parse_f64_field(value: &str, line: usize, field_index: usize) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|e| Error::numeric_field(line, field_index, value, e))
}

/// Channel name from a name row (extra fields are ignored)
pub fn channel_name(row: &Row) -> String {
    row.fields.first().cloned().unwrap_or_default()
}
