//! Error types shared between the library and the client binary.
//!
//! The `SpotError` enum separates the three ways a spot lookup can fail
//! (fetching, parsing, schema) plus the final write to stdout, so the binary
//! can report each one distinctly.
use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Unified error type for the spot price pipeline.
#[derive(Error, Debug)]
pub enum SpotError {
    /// Transport failure: DNS, connect, TLS, timeout or body read.
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Upstream answered with a non-success HTTP status.
    #[error("Fetch error: upstream returned HTTP {0}")]
    HttpStatus(u16),

    /// Response body is not valid JSON.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid JSON that does not match the upstream contract
    /// (not an array, too few elements, missing or mistyped fields).
    #[error("Schema error: {0}")]
    Schema(String),

    /// I/O error while writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// UTF-8 conversion error when turning encoded output into text.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),
}

impl SpotError {
    /// Short category name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            SpotError::Fetch(_) | SpotError::HttpStatus(_) => "fetch",
            SpotError::Parse(_) => "parse",
            SpotError::Schema(_) => "schema",
            SpotError::Io(_) | SpotError::Utf8(_) => "io",
        }
    }
}
