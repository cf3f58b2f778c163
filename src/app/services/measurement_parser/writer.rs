//! Serialization of measurement documents
//!
//! Writes a [`MeasurementDocument`] back to the delimited layout read by the
//! parser, or to JSON. Samples use Rust's shortest round-trip float
//! formatting, so writing and re-parsing yields an equal document.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::app::models::{ChannelRecord, MeasurementDocument};
use crate::config::ParserConfig;
use crate::{Error, Result};

/// Writer for the canonical delimited format
#[derive(Debug, Clone, Default)]
pub struct MeasurementWriter {
    config: ParserConfig,
}

impl MeasurementWriter {
    /// Create a writer using the same delimiter and date layout as a parser
    pub fn new(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Write a document in delimited form
    pub fn write_document<W: Write>(&self, document: &MeasurementDocument, out: &mut W) -> Result<()> {
        self.check_writable(document)?;

        let delimiter = self.config.delimiter as char;
        let date = document
            .header
            .recorded_at
            .format(&self.config.date_format)
            .to_string();
        writeln!(out, "{}{}{}", document.header.subject_name, delimiter, date)?;

        for record in &document.records {
            writeln!(out, "{}", record.name)?;
            self.write_samples(out, &record.intensity)?;
            self.write_samples(out, &record.time)?;
        }

        Ok(())
    }

    /// Render a document in delimited form
    pub fn to_delimited_string(&self, document: &MeasurementDocument) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_document(document, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| Error::invalid_document(format!("output is not valid UTF-8: {}", e)))
    }

    /// Write a document in delimited form to a file
    pub fn write_file(&self, document: &MeasurementDocument, output_file: &Path) -> Result<()> {
        let file = File::create(output_file).map_err(|e| {
            Error::io(format!("Failed to create {}", output_file.display()), e)
        })?;
        let mut writer = BufWriter::new(file);

        self.write_document(document, &mut writer)?;
        writer.flush()?;

        info!(
            "Wrote {} channels to {}",
            document.records.len(),
            output_file.display()
        );
        Ok(())
    }

    fn write_samples<W: Write>(&self, out: &mut W, values: &[f64]) -> Result<()> {
        let delimiter = self.config.delimiter as char;
        for (index, value) in values.iter().enumerate() {
            if index > 0 {
                write!(out, "{}", delimiter)?;
            }
            write!(out, "{}", value)?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Reject documents whose delimited form would not parse back unchanged
    fn check_writable(&self, document: &MeasurementDocument) -> Result<()> {
        self.check_text("subject name", &document.header.subject_name)?;
        for record in &document.records {
            self.check_record(record)?;
        }
        Ok(())
    }

    fn check_record(&self, record: &ChannelRecord) -> Result<()> {
        self.check_text("channel name", &record.name)?;
        if record.intensity.is_empty() || record.time.is_empty() {
            return Err(Error::invalid_document(format!(
                "channel '{}' has an empty sample row",
                record.name
            )));
        }
        Ok(())
    }

    fn check_text(&self, what: &str, text: &str) -> Result<()> {
        let delimiter = self.config.delimiter as char;
        if text.contains(delimiter) || text.contains('\n') || text.contains('\r') {
            return Err(Error::invalid_document(format!(
                "{} '{}' contains the delimiter or a line break",
                what,
                text.escape_debug()
            )));
        }
        Ok(())
    }
}

/// Write a document as pretty-printed JSON
pub fn write_json<W: Write>(document: &MeasurementDocument, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, document)
        .map_err(|e| Error::serialization("Failed to write document as JSON", e))?;
    writeln!(out)?;
    Ok(())
}

/// Write a document as pretty-printed JSON to a file
pub fn write_json_file(document: &MeasurementDocument, output_file: &Path) -> Result<()> {
    let file = File::create(output_file)
        .map_err(|e| Error::io(format!("Failed to create {}", output_file.display()), e))?;
    let mut writer = BufWriter::new(file);

    write_json(document, &mut writer)?;
    writer.flush()?;

    info!("Wrote JSON document to {}", output_file.display());
    Ok(())
}
