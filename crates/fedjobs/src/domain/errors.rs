//! Domain Errors
//!
//! Error types for parsing, searching and replying.

use thiserror::Error;

/// Errors raised while turning command arguments into a search request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("No search keyword was given")]
    MissingKeyword,

    #[error("Invalid number for {flag}: {value}")]
    InvalidNumber { flag: String, value: String },
}

/// Why a search against the remote API produced no usable results
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchFailure {
    #[error("Search API returned HTTP {code}")]
    HttpStatus { code: u16 },

    #[error("Search API request failed: {message}")]
    Transport { message: String },

    #[error("Search API response was malformed: {message}")]
    MalformedResponse { message: String },
}

impl SearchFailure {
    /// Short machine-readable reason, used in logs
    pub fn reason(&self) -> &'static str {
        match self {
            Self::HttpStatus { .. } => "http-status",
            Self::Transport { .. } => "transport",
            Self::MalformedResponse { .. } => "malformed-response",
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}
