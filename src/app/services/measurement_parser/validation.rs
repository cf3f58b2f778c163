//! Per-record validation
//!
//! Validation is advisory: a record that fails a check is kept and a
//! [`Diagnostic`] describing the failure is returned alongside it.

use crate::app::models::{ChannelRecord, Diagnostic};

/// Check a completed channel record
///
/// `record_index` is the record's position in the document and `line` the
/// line of its name row.
pub fn validate_record(record: &ChannelRecord, record_index: usize, line: usize) -> Option<Diagnostic> {
    if record.lengths_match() {
        None
    } else {
        Some(Diagnostic::channel_length_mismatch(record, record_index, line))
    }
}
