//! Core error types for puckguide-core.
//!
//! This module defines the error hierarchy using thiserror. A guide run is
//! all-or-nothing: fetch and validation failures are fatal and no output
//! artifact is produced, so downstream gap analysis never runs on a
//! partial window.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Core error type for puckguide-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Upstream schedule API errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Record or side-table validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the upstream schedule API. Always fatal for the run.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The API answered with a non-success status
    #[error("Schedule request for {date} failed with status {status}")]
    BadStatus { date: NaiveDate, status: u16 },

    /// The request itself failed (connect, timeout, TLS)
    #[error("Schedule request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected schedule shape
    #[error("Malformed schedule response for {date}: {message}")]
    MalformedBody { date: NaiveDate, message: String },
}

/// Validation errors. A malformed record would break numbering uniqueness
/// for the rest of the run, so these propagate as fatal.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Game id cannot be split into season + sequence segments
    #[error("Game id '{id}' is not a valid episode number source: {message}")]
    BadGameId { id: String, message: String },

    /// Invalid time range
    #[error("Invalid time range: stop ({stop}) must be greater than start ({start})")]
    InvalidTimeRange {
        start: DateTime<Utc>,
        stop: DateTime<Utc>,
    },

    /// A row in the artwork side-table could not be parsed
    #[error("Artwork table {path} line {line}: {message}")]
    BadArtworkRow {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dotted-path configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
