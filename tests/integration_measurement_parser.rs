//! Integration tests for the measurement parser with files on disk
//!
//! These tests exercise the public API end to end: writing measurement files
//! to a temporary directory, parsing them, and converting them back.

use chrono::{Datelike, NaiveDate};
use pymodaq_processor::app::services::measurement_parser::writer::write_json_file;
use pymodaq_processor::app::services::measurement_parser::{MeasurementWriter, ParseStats};
use pymodaq_processor::{DiagnosticKind, Error, MeasurementParser, ParserConfig};
use std::fs;
use tempfile::TempDir;

const SCAN_FILE: &str = "Alice,01/03/2024
ChanA
1.0,2.0,3.0,4.0,5.0
0,1,2,3,4
ChanB,lock-in
0.25,0.5,0.75
0,0.001,0.002
ChanC
10,20,30
0,1
";

/// Parse a realistic multi-channel scan from disk
///
/// Purpose: Validate end-to-end parsing through the file entry point
/// Benefit: Ensures header, channel order and diagnostics survive the I/O layer
#[test]
fn test_parse_scan_file_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scan.csv");
    fs::write(&path, SCAN_FILE).unwrap();

    let document = MeasurementParser::default().parse_file(&path).unwrap();

    assert_eq!(document.header.subject_name, "Alice");
    assert_eq!(document.header.recorded_at.year(), 2024);
    assert_eq!(document.header.recorded_at.month(), 3);
    assert_eq!(document.header.recorded_at.day(), 1);
    assert_eq!(document.channel_names(), vec!["ChanA", "ChanB", "ChanC"]);
    assert_eq!(document.records[1].time, vec![0.0, 0.001, 0.002]);

    assert_eq!(document.diagnostics.len(), 1);
    assert_eq!(document.diagnostics[0].channel, "ChanC");
    assert_eq!(
        document.diagnostics[0].kind,
        DiagnosticKind::ChannelLengthMismatch {
            intensity_len: 3,
            time_len: 2
        }
    );

    let stats = ParseStats::from_document(&document);
    assert_eq!(stats.channels, 3);
    assert_eq!(stats.mismatched_channels, 1);
}

/// Round-trip a file through the canonical writer
///
/// Purpose: Verify that written files parse back to an equal document
/// Benefit: Guarantees conversions do not lose or reorder channel data
#[test]
fn test_canonical_round_trip_on_disk() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("scan.csv");
    let output = dir.path().join("scan_canonical.csv");
    fs::write(&input, SCAN_FILE).unwrap();

    let parser = MeasurementParser::default();
    let original = parser.parse_file(&input).unwrap();

    MeasurementWriter::default()
        .write_file(&original, &output)
        .unwrap();
    let reparsed = parser.parse_file(&output).unwrap();

    assert_eq!(reparsed, original);

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("Alice,01/03/2024\nChanA\n1,2,3,4,5\n"));
}

/// Truncated files fail without producing a partial document
#[test]
fn test_truncated_file_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("truncated.csv");
    fs::write(&path, "Alice,01/03/2024\nChanA\n1,2,3\n").unwrap();

    let result = MeasurementParser::default().parse_file(&path);
    match result {
        Err(Error::TruncatedBlock {
            channel, missing, ..
        }) => {
            assert_eq!(channel, "ChanA");
            assert_eq!(missing, "time");
        }
        other => panic!("expected TruncatedBlock, got {:?}", other),
    }
}

/// Empty files fail at the header
#[test]
fn test_empty_file_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").unwrap();

    let result = MeasurementParser::default().parse_file(&path);
    assert!(matches!(result, Err(Error::MalformedHeader { .. })));
}

/// Semicolon-delimited files with ISO dates parse with a custom configuration
#[test]
fn test_custom_configuration_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scan_semicolon.csv");
    fs::write(&path, "Bob;2023-11-15\nChanA\n1,5;2\n0;1\n").unwrap();

    let default_result = MeasurementParser::default().parse_file(&path);
    assert!(default_result.is_err());

    let config = ParserConfig::default()
        .with_delimiter(b';')
        .with_date_format("%Y-%m-%d");
    let result = MeasurementParser::new(config).unwrap().parse_file(&path);
    assert!(matches!(result, Err(Error::NumericField { line: 3, field_index: 0, .. })));

    fs::write(&path, "Bob;2023-11-15\nChanA\n1.5;2\n0;1\n").unwrap();
    let config = ParserConfig::default()
        .with_delimiter(b';')
        .with_date_format("%Y-%m-%d");
    let document = MeasurementParser::new(config).unwrap().parse_file(&path).unwrap();
    assert_eq!(
        document.header.recorded_at,
        NaiveDate::from_ymd_opt(2023, 11, 15).unwrap()
    );
    assert_eq!(document.records[0].intensity, vec![1.5, 2.0]);
}

/// JSON export contains the header, all channels and the diagnostics
#[test]
fn test_json_export() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("scan.csv");
    let output = dir.path().join("scan.json");
    fs::write(&input, SCAN_FILE).unwrap();

    let document = MeasurementParser::default().parse_file(&input).unwrap();
    write_json_file(&document, &output).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["header"]["recorded_at"], "2024-03-01");
    assert_eq!(json["records"].as_array().unwrap().len(), 3);
    assert_eq!(json["records"][2]["name"], "ChanC");
    assert_eq!(json["diagnostics"][0]["channel"], "ChanC");
}
