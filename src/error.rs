use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::EntryId;

/// Errors produced while reading an entry's `dd/mm/yyyy` date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("expected dd/mm/yyyy, got {0:?}")]
    Malformed(String),
    #[error("{day:02}/{month:02}/{year:04} is not a calendar date")]
    Impossible { year: i32, month: u32, day: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigatorError {
    #[error("entry {0} is not in the journal")]
    NotFound(EntryId),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Start-up configuration problems. These abort the program.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: i64 },
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: String },
    #[error("{field} must be at most {max} months (got {value})")]
    TooLarge {
        field: &'static str,
        value: i64,
        max: usize,
    },
    #[error("calendar.max_months ({max}) must hold the initial window of {initial} months")]
    CapBelowWindow { max: usize, initial: usize },
    #[error("calendar.max_months ({max}) must hold one extension batch of {batch} months")]
    CapBelowBatch { max: usize, batch: usize },
    #[error("failed to parse {path:?}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
