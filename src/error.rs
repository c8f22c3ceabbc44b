//! Error types for pagekit
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for pagekit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pager State Errors
    // ============================================================================
    #[error("the cursor field must not be set when constructing a pager")]
    CursorPreset,

    #[error("no more results available")]
    Exhausted,

    // ============================================================================
    // Token Extraction Errors
    // ============================================================================
    #[error("invalid next page URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Fetch Capability Errors
    // ============================================================================
    #[error("page fetch failed: {message}")]
    Fetch { message: String },

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// True if the pager refused to run rather than the upstream failing
    pub fn is_pager_state(&self) -> bool {
        matches!(self, Error::CursorPreset | Error::Exhausted)
    }
}

/// Result type alias for pagekit
pub type Result<T> = std::result::Result<T, Error>;
