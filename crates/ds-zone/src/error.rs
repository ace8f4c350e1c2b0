//! Zone-subsystem error type.

use thiserror::Error;

/// Errors produced by `ds-zone`.
///
/// Malformed rows and backup tokens are not errors; the loader skips them.
/// Only a file that cannot be read at all, or that lacks the primary-zone
/// column, fails.
#[derive(Debug, Error)]
pub enum ZoneError {
    #[error("zone file is missing required column {0:?}")]
    MissingColumn(&'static str),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("zone file {0} is not CSV and spreadsheet support is not enabled")]
    UnsupportedFormat(String),

    #[cfg(feature = "xlsx")]
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] calamine::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ZoneResult<T> = Result<T, ZoneError>;
