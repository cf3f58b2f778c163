//! Tests for header row parsing

use chrono::NaiveDate;

use super::super::field_parsers::{parse_date, parse_header};
use super::super::reader::Row;
use crate::Error;
use crate::constants::DEFAULT_DATE_FORMAT;

fn row(fields: &[&str]) -> Row {
    Row::new(1, fields.iter().map(|f| f.to_string()).collect())
}

#[test]
fn test_header_parsing_complete() {
    let header = parse_header(&row(&["Alice", "01/03/2024"]), DEFAULT_DATE_FORMAT).unwrap();

    assert_eq!(header.subject_name, "Alice");
    assert_eq!(
        header.recorded_at,
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    );
}

#[test]
fn test_header_day_before_month() {
    let header = parse_header(&row(&["Alice", "13/01/2024"]), DEFAULT_DATE_FORMAT).unwrap();
    assert_eq!(
        header.recorded_at,
        NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()
    );
}

#[test]
fn test_header_extra_fields_ignored() {
    let header = parse_header(
        &row(&["Alice Smith", "01/03/2024", "lab 3", "notes"]),
        DEFAULT_DATE_FORMAT,
    )
    .unwrap();
    assert_eq!(header.subject_name, "Alice Smith");
}

#[test]
fn test_header_subject_name_verbatim() {
    let header = parse_header(&row(&[" Alice ", "01/03/2024"]), DEFAULT_DATE_FORMAT).unwrap();
    assert_eq!(header.subject_name, " Alice ");
}

#[test]
fn test_header_missing_date_field() {
    let result = parse_header(&row(&["Alice"]), DEFAULT_DATE_FORMAT);
    assert!(matches!(result, Err(Error::MalformedHeader { line: 1, .. })));
}

#[test]
fn test_header_invalid_date() {
    for value in ["2024-03-01", "32/01/2024", "01/13/2024", "", "yesterday"] {
        let result = parse_header(&row(&["Alice", value]), DEFAULT_DATE_FORMAT);
        match result {
            Err(Error::InvalidDate {
                value: reported, ..
            }) => assert_eq!(reported, value),
            other => panic!("expected InvalidDate for {:?}, got {:?}", value, other),
        }
    }
}

#[test]
fn test_custom_date_format() {
    let date = parse_date("2024-03-01", 1, "%Y-%m-%d").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

    let result = parse_date("01/03/2024", 4, "%Y-%m-%d");
    assert!(matches!(result, Err(Error::InvalidDate { line: 4, .. })));
}
