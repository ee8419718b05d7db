//! Centralized error types for Lexis.

use thiserror::Error;

/// Main error type for Lexis setup and configuration.
///
/// Dispatching an action never returns this type; call failures are
/// reported as [`TransportFailure`] inside a dispatch outcome.
#[derive(Error, Debug)]
pub enum LexisError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for Lexis operations.
pub type LexisResult<T> = Result<T, LexisError>;

impl LexisError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Any non-success outcome of a single analysis call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportFailure {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("network failure: {0}")]
    Network(String),

    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

impl TransportFailure {
    /// Short status description, in the vocabulary browsers report for
    /// failed XHR calls.
    pub fn text_status(&self) -> &'static str {
        match self {
            Self::Timeout(_) => "timeout",
            Self::Network(_) | Self::Status { .. } => "error",
            Self::MalformedBody(_) => "parsererror",
        }
    }
}
