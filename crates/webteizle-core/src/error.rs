//! Error types for the webteizle scraper
//!
//! Internal operations return these errors; the host-facing operations on
//! [`crate::WebteizleScraper`] log them and degrade to empty results.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all webteizle scraper operations
#[derive(Error, Debug)]
pub enum WebteizleError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Transport produced no usable response
    #[error("No response from {0}")]
    NoResponse(String),

    /// Server answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),

    /// Payload did not have the expected shape
    #[error("Failed to parse payload: {0}")]
    ParseError(String),

    /// Expected marker was not found in scraped text
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Header name or value rejected by the HTTP stack
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Search keyword was unusable
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Title or stream not found on the site
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<serde_json::Error> for WebteizleError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError(error.to_string())
    }
}

impl Serialize for WebteizleError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for webteizle operations
pub type Result<T> = std::result::Result<T, WebteizleError>;
