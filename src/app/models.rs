//! Data models for PyMoDAQ measurement processing
//!
//! This module contains the core data structures for representing a parsed
//! measurement file: the subject/date header, the named channels with their
//! intensity and time samples, and the advisory diagnostics raised while
//! validating them.

use crate::constants::units;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Header
// =============================================================================

/// Leading row of a measurement file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Free-text subject identifier, taken verbatim from the first field
    pub subject_name: String,

    /// Recording date from the second field
    pub recorded_at: NaiveDate,
}

impl Header {
    pub fn new(subject_name: impl Into<String>, recorded_at: NaiveDate) -> Self {
        Self {
            subject_name: subject_name.into(),
            recorded_at,
        }
    }
}

// =============================================================================
// Channel Record
// =============================================================================

/// One named series of paired intensity/time samples
///
/// A well-formed record has as many intensity samples as time samples. This
/// is checked after parsing rather than enforced here, so a record with
/// mismatched lengths can still be constructed and kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelRecord {
    /// Channel name
    pub name: String,

    /// Intensity samples in volts
    pub intensity: Vec<f64>,

    /// Time samples in seconds
    pub time: Vec<f64>,
}

impl ChannelRecord {
    /// Unit of the intensity samples
    pub const INTENSITY_UNIT: &'static str = units::INTENSITY;

    /// Unit of the time samples
    pub const TIME_UNIT: &'static str = units::TIME;

    pub fn new(name: impl Into<String>, intensity: Vec<f64>, time: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            intensity,
            time,
        }
    }

    /// Whether intensity and time have the same number of samples
    pub fn lengths_match(&self) -> bool {
        self.intensity.len() == self.time.len()
    }

    /// Number of complete (intensity, time) pairs
    pub fn paired_len(&self) -> usize {
        self.intensity.len().min(self.time.len())
    }

    /// Iterate over (time, intensity) pairs, stopping at the shorter series
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.intensity.iter().copied())
    }

    /// Minimum and maximum intensity, ignoring NaN
    pub fn intensity_range(&self) -> Option<(f64, f64)> {
        value_range(&self.intensity)
    }

    /// Minimum and maximum time, ignoring NaN
    pub fn time_range(&self) -> Option<(f64, f64)> {
        value_range(&self.time)
    }
}

fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

// =============================================================================
// Diagnostics
// =============================================================================

/// Kind of a non-fatal finding attached to a successful parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Intensity and time rows of a channel have different lengths
    ChannelLengthMismatch {
        intensity_len: usize,
        time_len: usize,
    },
}

/// Structured diagnostic referencing the channel it concerns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    #[serde(flatten)]
    pub kind: DiagnosticKind,

    /// Name of the affected channel
    pub channel: String,

    /// Position of the affected record in the document (0-based)
    pub record_index: usize,

    /// Line of the channel's name row (1-based)
    pub line: usize,
}

impl Diagnostic {
    pub fn channel_length_mismatch(
        record: &ChannelRecord,
        record_index: usize,
        line: usize,
    ) -> Self {
        Self {
            kind: DiagnosticKind::ChannelLengthMismatch {
                intensity_len: record.intensity.len(),
                time_len: record.time.len(),
            },
            channel: record.name.clone(),
            record_index,
            line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::ChannelLengthMismatch {
                intensity_len,
                time_len,
            } => write!(
                f,
                "channel '{}' (line {}): intensity has {} samples but time has {}",
                self.channel, self.line, intensity_len, time_len
            ),
        }
    }
}

// =============================================================================
// Measurement Document
// =============================================================================

/// Complete result of parsing one measurement file
///
/// Built in a single pass and never mutated afterwards; each parse produces
/// a fresh document owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementDocument {
    pub header: Header,

    /// Channels in order of appearance in the source
    pub records: Vec<ChannelRecord>,

    /// Advisory findings; records they reference are still in `records`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl MeasurementDocument {
    pub fn new(header: Header, records: Vec<ChannelRecord>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            header,
            records,
            diagnostics,
        }
    }

    /// First channel with the given name
    pub fn channel(&self, name: &str) -> Option<&ChannelRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    /// Channel names in source order
    pub fn channel_names(&self) -> Vec<&str> {
        self.records.iter().map(|record| record.name.as_str()).collect()
    }

    /// Whether the parse produced no diagnostics
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Total number of intensity and time values across all channels
    pub fn total_values(&self) -> usize {
        self.records
            .iter()
            .map(|record| record.intensity.len() + record.time.len())
            .sum()
    }
}
