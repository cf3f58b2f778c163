//! PyMoDAQ Processor Library
//!
//! A Rust library for reading PyMoDAQ "simple" measurement files: a delimited
//! text table carrying a subject/date header followed by any number of named
//! channels, each made of an intensity row and a time row.
//!
//! This library provides tools for:
//! - Parsing measurement files into an immutable [`MeasurementDocument`]
//! - Structural validation with fatal errors for corrupt input
//! - Advisory diagnostics for channels whose intensity and time lengths differ
//! - Writing documents back to the canonical delimited format or JSON
//!
//! ## Usage
//!
//! ```rust
//! use pymodaq_processor::MeasurementParser;
//!
//! let text = "Alice,01/03/2024\nChanA\n1.0,2.0\n0,1\n";
//! let document = MeasurementParser::default().parse_str(text)?;
//!
//! assert_eq!(document.header.subject_name, "Alice");
//! assert_eq!(document.records.len(), 1);
//! # Ok::<(), pymodaq_processor::Error>(())
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod measurement_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ChannelRecord, Diagnostic, DiagnosticKind, Header, MeasurementDocument};
pub use app::services::measurement_parser::MeasurementParser;
pub use config::ParserConfig;

/// Result type alias for the PyMoDAQ processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for measurement file processing
///
/// The first four variants are structural failures of the input file and
/// abort a parse. Length mismatches between a channel's intensity and time
/// rows are not errors; they are reported as [`Diagnostic`]s.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Header row absent or missing required fields
    #[error("Malformed header at line {line}: {reason}")]
    MalformedHeader { line: usize, reason: String },

    /// Header date does not match the configured layout
    #[error("Invalid date '{value}' at line {line} (expected layout '{expected}')")]
    InvalidDate {
        line: usize,
        value: String,
        expected: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Input ended part-way through a channel block
    #[error("Truncated block for channel '{channel}' starting at line {line}: missing {missing} row")]
    TruncatedBlock {
        channel: String,
        line: usize,
        missing: &'static str,
    },

    /// A sample field is not a valid 64-bit float
    #[error("Invalid numeric value '{value}' at line {line}, field {field_index}")]
    NumericField {
        line: usize,
        field_index: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Strict validation found diagnostics
    #[error("Validation failed: {count} diagnostic(s) reported")]
    ValidationFailed { count: usize },

    /// Document cannot be represented in the delimited format
    #[error("Cannot write document: {message}")]
    InvalidDocument { message: String },

    /// Row could not be read as delimited text
    #[error("CSV parsing error: {message}")]
    CsvParsing {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a malformed header error
    pub fn malformed_header(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedHeader {
            line,
            reason: reason.into(),
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(
        line: usize,
        value: impl Into<String>,
        expected: impl Into<String>,
        source: chrono::ParseError,
    ) -> Self {
        Self::InvalidDate {
            line,
            value: value.into(),
            expected: expected.into(),
            source,
        }
    }

    /// Create a truncated block error
    pub fn truncated_block(channel: impl Into<String>, line: usize, missing: &'static str) -> Self {
        Self::TruncatedBlock {
            channel: channel.into(),
            line,
            missing,
        }
    }

    /// Create a numeric field error
    pub fn numeric_field(
        line: usize,
        field_index: usize,
        value: impl Into<String>,
        source: std::num::ParseFloatError,
    ) -> Self {
        Self::NumericField {
            line,
            field_index,
            value: value.into(),
            source,
        }
    }

    /// Create a strict validation failure
    pub fn validation_failed(count: usize) -> Self {
        Self::ValidationFailed { count }
    }

    /// Create an unwritable document error
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(message: impl Into<String>, source: csv::Error) -> Self {
        Self::CsvParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Whether this error comes from the content of the input file rather than
    /// from the environment
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedHeader { .. }
                | Self::InvalidDate { .. }
                | Self::TruncatedBlock { .. }
                | Self::NumericField { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            message: "Failed to read delimited row".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_classification() {
        assert!(Error::malformed_header(1, "empty input").is_format_error());
        assert!(Error::truncated_block("ChanA", 2, "time").is_format_error());
        assert!(!Error::configuration("bad delimiter").is_format_error());
        assert!(!Error::validation_failed(2).is_format_error());
    }

    #[test]
    fn test_error_messages() {
        let err = Error::truncated_block("ChanA", 2, "time");
        assert_eq!(
            err.to_string(),
            "Truncated block for channel 'ChanA' starting at line 2: missing time row"
        );

        let source = "x".parse::<f64>().unwrap_err();
        let err = Error::numeric_field(3, 1, "x", source);
        assert_eq!(
            err.to_string(),
            "Invalid numeric value 'x' at line 3, field 1"
        );
    }
}
