//! Test fixtures for measurement parser testing
//!
//! This module provides sample measurement files and helper functions used
//! across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::app::services::measurement_parser::MeasurementParser;

// Test modules
mod header_tests;

/// Helper to create the single-channel file from the format description
pub fn create_single_channel_file() -> String {
    r#"Alice,01/03/2024
ChanA
1.0,2.0,3.0,4.0,5.0
0,1,2,3,4"#
        .to_string()
}

/// Helper to create a file with several channels, one of them inconsistent
pub fn create_multi_channel_file() -> String {
    r#"Bob,15/11/2023
Photodiode,unit,V
0.12,0.15,0.11,0.09
0,0.5,1,1.5
Reference
1e-3,2e-3,3e-3
0,0.5
Monitor
-1.5,2.25
10,20"#
        .to_string()
}

/// Helper to create a file with only the header row
pub fn create_header_only_file() -> String {
    "Carol,29/02/2024".to_string()
}

/// Parser with default configuration
pub fn default_parser() -> MeasurementParser {
    MeasurementParser::default()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
