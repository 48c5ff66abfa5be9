//! Error types.

use crate::date::Date;

/// Error type for all fallible operations in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the table for a file-year could not be opened or read.
    #[error("calendar table for {year} unavailable: {source}")]
    Io {
        /// File-year of the table.
        year: i32,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Returned when a table does not follow the expected text format.
    #[error("malformed calendar table for {year} at line {line}: {source}")]
    Format {
        /// File-year of the table.
        year: i32,
        /// 1-based line number within the table.
        line: usize,
        /// What was wrong with the line.
        source: FormatError,
    },

    /// Returned when the queried date is absent from the scanned tables.
    #[error("date not found: {0}")]
    NotFound(Date),
}

/// Describes why a single table line could not be decoded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Returned when a mandatory column is missing from a day line.
    #[error("missing {field} column")]
    MissingField {
        /// Name of the missing column.
        field: &'static str,
    },

    /// Returned when the solar date column does not match the date pattern.
    #[error("invalid solar date '{text}': {source}")]
    SolarDate {
        /// The offending column text.
        text: String,
        /// Parse failure reported by chrono.
        source: chrono::ParseError,
    },

    /// Returned when a solar date is not zero-padded in a table that requires it.
    #[error("solar date '{text}' is not zero-padded")]
    Padding {
        /// The offending column text.
        text: String,
    },

    /// Returned when the table ends inside its header.
    #[error("table ends before its header is complete")]
    TruncatedHeader,
}

/// Result alias defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
