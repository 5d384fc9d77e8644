//! Content fetching from URLs, files, and stdin.
//!
//! This module provides functions for retrieving raw markup from
//! HTTP/HTTPS URLs, local files, and standard input. URL fetching makes a
//! single attempt per call and classifies every transport failure into the
//! [`PageliftError`] taxonomy.

use std::fs;
use std::path::PathBuf;
#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
use url::Url;

use crate::{PageliftError, Result};

/// Desktop browser identity sent with every request. Some sites refuse
/// clients that do not look like a browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default request deadline in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Hard deadline for the whole request, body included, in milliseconds.
    pub timeout_ms: u64,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout_ms: DEFAULT_TIMEOUT_MS, user_agent: DEFAULT_USER_AGENT.to_string() }
    }
}

/// Parses and checks a URL before any network activity.
///
/// Only absolute `http`/`https` URLs are accepted.
pub fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url.trim()).map_err(|e| PageliftError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(PageliftError::InvalidUrl(format!(
            "unsupported scheme '{}': URL must start with http:// or https://",
            other
        ))),
    }
}

/// Fetches raw markup from a URL.
///
/// Performs one GET request with the configured User-Agent and deadline.
/// Redirects are followed. Non-success statuses become
/// [`PageliftError::Upstream`], an elapsed deadline becomes
/// [`PageliftError::Timeout`] and everything else at the transport level
/// becomes [`PageliftError::Network`].
#[cfg(feature = "fetch")]
#[tracing::instrument(skip(config), fields(timeout_ms = config.timeout_ms))]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = validate_url(url)?;

    let client = Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .build()
        .map_err(|e| PageliftError::Network(e.to_string()))?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| classify_transport_error(&e, config))?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!(status = status.as_u16(), "upstream returned non-success status");
        return Err(PageliftError::Upstream {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
        });
    }

    let content = response
        .text()
        .await
        .map_err(|e| classify_transport_error(&e, config))?;

    tracing::debug!(bytes = content.len(), "fetched page");
    Ok(content)
}

#[cfg(feature = "fetch")]
fn classify_transport_error(err: &reqwest::Error, config: &FetchConfig) -> PageliftError {
    if err.is_timeout() {
        PageliftError::Timeout { timeout_ms: config.timeout_ms }
    } else if let Some(status) = err.status() {
        PageliftError::Upstream {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
        }
    } else {
        PageliftError::Network(err.to_string())
    }
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(PageliftError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(PageliftError::from)
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(PageliftError::from)?;

    Ok(buffer)
}
