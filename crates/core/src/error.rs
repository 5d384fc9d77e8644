//! Error types for pagelift operations.
//!
//! This module defines the main error type [`PageliftError`] which represents
//! every way an extraction request can fail: invalid input, fetch failures,
//! and failures while building the structured document.
//!
//! # Example
//!
//! ```rust
//! use pagelift_core::{PageliftError, Result};
//!
//! fn require_markup(html: &str) -> Result<&str> {
//!     if html.is_empty() {
//!         return Err(PageliftError::ExtractionFailed("empty document".to_string()));
//!     }
//!     Ok(html)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fetch and extraction operations.
///
/// Transport errors are classified at the fetch boundary, so the variants
/// carry plain data and never wrap the HTTP client's own error type.
///
/// # Example
///
/// ```rust
/// use pagelift_core::PageliftError;
///
/// let err = PageliftError::Upstream { status: 404, status_text: "Not Found".to_string() };
/// assert_eq!(err.user_message(), "Failed to fetch page: Not Found");
/// assert!(!err.is_client_error());
/// ```
#[derive(Error, Debug)]
pub enum PageliftError {
    /// Invalid URL provided.
    ///
    /// Returned before any network call when the URL cannot be parsed or
    /// does not use the http/https scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request timeout.
    ///
    /// Returned when no complete response arrived within the configured deadline.
    #[error("Request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// The remote server answered with a non-success status.
    #[error("Upstream responded with {status} {status_text}")]
    Upstream { status: u16, status_text: String },

    /// DNS, connection, TLS or body transfer failures.
    #[error("Network error: {0}")]
    Network(String),

    /// Catch-all for failures while parsing or classifying the document.
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    /// File not found.
    ///
    /// Returned when attempting to read a local input file that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O errors while reading local input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PageliftError {
    /// Human-readable message that is safe to show to end users.
    ///
    /// Internal details (transport messages, paths) never appear here; they
    /// belong in server-side logs via the `Display` implementation.
    pub fn user_message(&self) -> String {
        match self {
            PageliftError::InvalidUrl(_) => "Invalid URL format".to_string(),
            PageliftError::Timeout { .. } => "Request timed out".to_string(),
            PageliftError::Upstream { status_text, .. } => format!("Failed to fetch page: {}", status_text),
            _ => "Failed to extract content".to_string(),
        }
    }

    /// Whether the failure was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PageliftError::InvalidUrl(_))
    }
}

/// Result type alias for PageliftError.
pub type Result<T> = std::result::Result<T, PageliftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PageliftError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_timeout_error() {
        let err = PageliftError::Timeout { timeout_ms: 10_000 };
        assert!(err.to_string().contains("10000"));
        assert_eq!(err.user_message(), "Request timed out");
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            PageliftError::InvalidUrl("x".into()).user_message(),
            "Invalid URL format"
        );
        assert_eq!(
            PageliftError::Upstream { status: 503, status_text: "Service Unavailable".into() }.user_message(),
            "Failed to fetch page: Service Unavailable"
        );
        assert_eq!(
            PageliftError::Network("connection refused".into()).user_message(),
            "Failed to extract content"
        );
        assert_eq!(
            PageliftError::ExtractionFailed("boom".into()).user_message(),
            "Failed to extract content"
        );
    }

    #[test]
    fn test_user_message_hides_details() {
        let err = PageliftError::Network("dns error: no record for internal.host".into());
        assert!(!err.user_message().contains("internal.host"));
    }

    #[test]
    fn test_client_error_classification() {
        assert!(PageliftError::InvalidUrl("x".into()).is_client_error());
        assert!(!PageliftError::Timeout { timeout_ms: 1 }.is_client_error());
        assert!(!PageliftError::Network("x".into()).is_client_error());
    }
}
