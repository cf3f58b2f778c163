//! Configuration management and validation.
//!
//! Provides the parser configuration: the field delimiter, the header date
//! layout and the trailing blank-line policy, with builder-style setters and
//! validation rules.

use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_DELIMITER};
use crate::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Characters that may appear inside numeric text and so cannot delimit fields
const NUMERIC_CHARS: &[u8] = b"0123456789.-+eE";

/// Measurement parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Field delimiter (a single ASCII byte, no quoting or escaping)
    pub delimiter: u8,

    /// chrono format string for the header date field
    pub date_format: String,

    /// Drop empty lines after the last non-blank row (e.g. trailing newlines)
    pub skip_trailing_blank_lines: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            skip_trailing_blank_lines: true,
        }
    }
}

impl ParserConfig {
    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the header date layout
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Treat trailing blank lines as regular (empty) rows
    pub fn keep_trailing_blank_lines(mut self) -> Self {
        self.skip_trailing_blank_lines = false;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(Error::configuration(format!(
                "Delimiter must be a single ASCII character, got byte 0x{:02x}",
                self.delimiter
            )));
        }

        if self.delimiter == b'\n' || self.delimiter == b'\r' {
            return Err(Error::configuration(
                "Delimiter cannot be a line terminator",
            ));
        }

        if NUMERIC_CHARS.contains(&self.delimiter) {
            return Err(Error::configuration(format!(
                "Delimiter '{}' collides with numeric text",
                self.delimiter as char
            )));
        }

        if self.date_format.trim().is_empty() {
            return Err(Error::configuration("Date format cannot be empty"));
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::configuration(format!(
                "Invalid date format '{}'",
                self.date_format
            )));
        }

        // The date shares the header row with the subject name
        if self.date_format.contains(self.delimiter as char) {
            return Err(Error::configuration(format!(
                "Date format '{}' contains the delimiter '{}'",
                self.date_format, self.delimiter as char
            )));
        }

        debug!(
            "Parser configuration valid: delimiter='{}', date_format='{}'",
            self.delimiter as char, self.date_format
        );
        Ok(())
    }

    /// Parse a delimiter given on the command line
    ///
    /// Accepts a single ASCII character or the names `tab`, `comma`,
    /// `semicolon`.
    pub fn parse_delimiter(value: &str) -> Result<u8> {
        match value {
            "tab" | "\\t" => Ok(b'\t'),
            "comma" => Ok(b','),
            "semicolon" => Ok(b';'),
            other if other.len() == 1 && other.is_ascii() => Ok(other.as_bytes()[0]),
            other => Err(Error::configuration(format!(
                "Invalid delimiter '{}': expected a single ASCII character",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ParserConfig::default();
        assert_eq!(config.delimiter, b',');
        assert_eq!(config.date_format, "%d/%m/%Y");
        assert!(config.skip_trailing_blank_lines);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = ParserConfig::default()
            .with_delimiter(b';')
            .with_date_format("%Y-%m-%d")
            .keep_trailing_blank_lines();

        assert_eq!(config.delimiter, b';');
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert!(!config.skip_trailing_blank_lines);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_numeric_delimiters() {
        for delimiter in [b'.', b'-', b'5', b'e'] {
            let config = ParserConfig::default().with_delimiter(delimiter);
            assert!(
                matches!(config.validate(), Err(Error::Configuration { .. })),
                "delimiter {:?} should be rejected",
                delimiter as char
            );
        }
    }

    #[test]
    fn test_rejects_line_terminator_and_empty_format() {
        assert!(ParserConfig::default().with_delimiter(b'\n').validate().is_err());
        assert!(ParserConfig::default().with_date_format("  ").validate().is_err());
        assert!(ParserConfig::default().with_date_format("%d/%Q").validate().is_err());
        assert!(ParserConfig::default().with_delimiter(0xE9).validate().is_err());
    }

    #[test]
    fn test_rejects_date_format_containing_delimiter() {
        let config = ParserConfig::default().with_date_format("%d,%m,%Y");
        assert!(matches!(config.validate(), Err(Error::Configuration { .. })));

        let config = ParserConfig::default()
            .with_delimiter(b'/')
            .with_date_format(crate::constants::DEFAULT_DATE_FORMAT);
        assert!(config.validate().is_err());

        let config = ParserConfig::default()
            .with_delimiter(b';')
            .with_date_format("%d,%m,%Y");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(ParserConfig::parse_delimiter(",").unwrap(), b',');
        assert_eq!(ParserConfig::parse_delimiter("tab").unwrap(), b'\t');
        assert_eq!(ParserConfig::parse_delimiter("semicolon").unwrap(), b';');
        assert!(ParserConfig::parse_delimiter(",,").is_err());
        assert!(ParserConfig::parse_delimiter("é").is_err());
    }
}
