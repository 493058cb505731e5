// src/error.rs

//! Unified error handling for the club crawler.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for crawler operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// CSV reading failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Coordinate input could not be read
    #[error("Input error at row {index}: {message}")]
    Input { index: u64, message: String },

    /// Search API answered with a non-success status
    #[error("Search query failed with status {status} (index {index}, lat {latitude}, long {longitude})")]
    RemoteQuery {
        index: u64,
        latitude: f64,
        longitude: f64,
        status: u16,
    },

    /// Detail page is missing the expected contact structure
    #[error("Malformed contact section in {url}: {reason}")]
    MalformedContactSection { url: String, reason: String },

    /// Output sink could not be opened or written
    #[error("Failed to write sink {}: {source}", path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a malformed contact section error.
    pub fn malformed(url: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::MalformedContactSection {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a sink write error for the given path.
    pub fn sink(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SinkWrite {
            path: path.into(),
            source,
        }
    }

    /// Whether this error must abort the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::SinkWrite { .. })
    }
}
