//! Shared error type.
//!
//! Raised by time parsing and config validation.  Sub-crates define their
//! own error enums for file loading.

use thiserror::Error;

/// Errors produced by `ds-core`.
#[derive(Debug, Error)]
pub enum DsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `ds-core`.
pub type DsResult<T> = Result<T, DsError>;
