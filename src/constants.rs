//! Application constants for PyMoDAQ processor
//!
//! This module contains the file layout constants, default values and
//! unit annotations used throughout the processor.

// =============================================================================
// File Layout
// =============================================================================

/// Default field delimiter for measurement files
pub const DEFAULT_DELIMITER: u8 = b',';

/// Header date layout (day/month/year, e.g. `01/03/2024`)
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Minimum number of fields in the header row (subject name, date)
pub const HEADER_MIN_FIELDS: usize = 2;

/// Row names used when reporting a truncated block
pub mod block_rows {
    pub const INTENSITY: &str = "intensity";
    pub const TIME: &str = "time";
}

// =============================================================================
// Units
// =============================================================================

/// Unit symbols for channel samples
pub mod units {
    /// Intensity samples are recorded in volts
    pub const INTENSITY: &str = "V";

    /// Time samples are recorded in seconds
    pub const TIME: &str = "s";
}

// =============================================================================
// Logging
// =============================================================================

/// Log target used to build the default tracing filter
pub const LOG_TARGET: &str = "pymodaq_processor";

/// Default log level when no verbosity flag is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
