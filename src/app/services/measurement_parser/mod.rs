//! Parser for PyMoDAQ simple measurement files
//!
//! A measurement file is a delimited text table with no quoting:
//!
//! ```text
//! <subject name>,<DD/MM/YYYY>
//! <channel name>[,ignored...]
//! <intensity 1>,<intensity 2>,...
//! <time 1>,<time 2>,...
//! [channel block repeated zero or more times]
//! ```
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`reader`] - Text and file input split into numbered rows
//! - [`field_parsers`] - Date and numeric field conversion
//! - [`parser`] - Block state machine producing a [`MeasurementDocument`]
//! - [`validation`] - Per-record consistency checks yielding diagnostics
//! - [`writer`] - Serialization back to the delimited format
//! - [`stats`] - Summary statistics for parsed documents
//!
//! ## Usage
//!
//! ```rust
//! use pymodaq_processor::app::services::measurement_parser::MeasurementParser;
//!
//! let parser = MeasurementParser::default();
//! let document = parser.parse_str("Alice,01/03/2024\nChanA\n1,2,3\n0,1\n")?;
//!
//! assert_eq!(document.records[0].intensity, vec![1.0, 2.0, 3.0]);
//! assert_eq!(document.diagnostics.len(), 1);
//! # Ok::<(), pymodaq_processor::Error>(())
//! ```
//!
//! [`MeasurementDocument`]: crate::app::models::MeasurementDocument

pub mod field_parsers;
pub mod parser;
pub mod reader;
pub mod stats;
pub mod validation;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::MeasurementParser;
pub use reader::Row;
pub use stats::ParseStats;
pub use writer::MeasurementWriter;
