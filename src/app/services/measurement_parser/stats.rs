//! Parsing statistics for measurement documents
//!
//! This module provides a summary of a parsed document for reporting in the
//! CLI and in JSON output.

use serde::{Deserialize, Serialize};

use crate::app::models::MeasurementDocument;

/// Summary statistics for one parsed document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Number of channel records
    pub channels: usize,

    /// Intensity samples across all channels
    pub intensity_samples: usize,

    /// Time samples across all channels
    pub time_samples: usize,

    /// Channels whose intensity and time lengths differ
    pub mismatched_channels: usize,

    /// Diagnostics attached to the document
    pub diagnostics: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute statistics for a parsed document
    pub fn from_document(document: &MeasurementDocument) -> Self {
        let mut stats = Self::new();
        for record in &document.records {
            stats.channels += 1;
            stats.intensity_samples += record.intensity.len();
            stats.time_samples += record.time.len();
            if !record.lengths_match() {
                stats.mismatched_channels += 1;
            }
        }
        stats.diagnostics = document.diagnostics.len();
        stats
    }

    /// Percentage of channels with consistent lengths
    ///
    /// A document with no channels is fully consistent.
    pub fn consistency_rate(&self) -> f64 {
        if self.channels == 0 {
            100.0
        } else {
            ((self.channels - self.mismatched_channels) as f64 / self.channels as f64) * 100.0
        }
    }

    /// Check if every channel passed validation
    pub fn is_clean(&self) -> bool {
        self.mismatched_channels == 0 && self.diagnostics == 0
    }
}
