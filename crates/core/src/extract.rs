//! Extraction orchestration.
//!
//! This module runs the full pipeline for one page: fetch, sanitize, select
//! the content area, classify, render and compute statistics. The main entry
//! point is the [`Extractor`] struct, along with the convenience functions
//! [`extract`] and [`extract_html`].
//!
//! Every call is independent. Nothing is cached or shared between calls, and
//! either a complete [`ExtractionResult`] is produced or an error is
//! returned.
//!
//! # Example
//!
//! ```rust
//! use pagelift_core::extract::extract_html;
//! use pagelift_core::ExtractConfig;
//!
//! let html = "<html><head><title>Doc</title></head><body><article><h1>Intro</h1></article></body></html>";
//! let result = extract_html("https://example.com/doc", html, &ExtractConfig::default()).unwrap();
//! assert_eq!(result.title, "Doc");
//! assert_eq!(result.statistics.heading_count(), 1);
//! ```

use crate::classify::{ClassifyConfig, classify};
use crate::content::select_content_area;
use crate::fetch::FetchConfig;
#[cfg(feature = "fetch")]
use crate::fetch::fetch_url;
use crate::metadata::Metadata;
use crate::parse::Document;
use crate::render::flatten;
use crate::result::ExtractionResult;
use crate::stats::WORDS_PER_MINUTE;
use crate::Result;

/// Configuration for a whole extraction.
///
/// # Example
///
/// ```rust
/// use pagelift_core::ExtractConfig;
///
/// let config = ExtractConfig::builder()
///     .timeout_ms(5_000)
///     .min_paragraph_chars(40)
///     .build();
/// assert_eq!(config.fetch.timeout_ms, 5_000);
/// assert_eq!(config.classify.min_code_chars, 10);
/// ```
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// HTTP settings for the fetch stage.
    pub fetch: FetchConfig,
    /// Length filters for the classify stage.
    pub classify: ClassifyConfig,
    /// Reading speed for the reading-time estimate (default: 200).
    pub words_per_minute: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { fetch: FetchConfig::default(), classify: ClassifyConfig::default(), words_per_minute: WORDS_PER_MINUTE }
    }
}

impl ExtractConfig {
    /// Creates a new builder for ExtractConfig.
    pub fn builder() -> ExtractConfigBuilder {
        ExtractConfigBuilder::new()
    }
}

/// Builder for ExtractConfig.
pub struct ExtractConfigBuilder {
    config: ExtractConfig,
}

impl ExtractConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ExtractConfig::default() }
    }

    /// Sets the request deadline in milliseconds.
    pub fn timeout_ms(mut self, value: u64) -> Self {
        self.config.fetch.timeout_ms = value;
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Sets the paragraph length filter.
    pub fn min_paragraph_chars(mut self, value: usize) -> Self {
        self.config.classify.min_paragraph_chars = value;
        self
    }

    /// Sets the code block length filter.
    pub fn min_code_chars(mut self, value: usize) -> Self {
        self.config.classify.min_code_chars = value;
        self
    }

    pub fn words_per_minute(mut self, value: usize) -> Self {
        self.config.words_per_minute = value;
        self
    }

    pub fn build(self) -> ExtractConfig {
        self.config
    }
}

impl Default for ExtractConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the extraction pipeline with a fixed configuration.
///
/// # Example
///
/// ```rust
/// use pagelift_core::{ExtractConfig, Extractor};
///
/// let extractor = Extractor::with_config(ExtractConfig::builder().words_per_minute(100).build());
/// let result = extractor
///     .extract_html("page.html", "<body><p>A paragraph long enough to keep around.</p></body>")
///     .unwrap();
/// assert_eq!(result.statistics.paragraph_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    /// Creates an extractor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Fetches `url` and extracts it.
    ///
    /// The URL is validated before any network activity. Fetch failures
    /// short-circuit the remaining stages.
    #[cfg(feature = "fetch")]
    pub async fn extract(&self, url: &str) -> Result<ExtractionResult> {
        extract(url, &self.config).await
    }

    /// Extracts already-retrieved markup. `url` is recorded as-is in the
    /// result and is not fetched or validated.
    pub fn extract_html(&self, url: &str, html: &str) -> Result<ExtractionResult> {
        extract_html(url, html, &self.config)
    }
}

/// Fetches and extracts a page.
///
/// # Example
///
/// ```no_run
/// use pagelift_core::{ExtractConfig, extract};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let result = extract("https://example.com/article", &ExtractConfig::default()).await?;
///     println!("{}", result.rendered_content);
///     Ok(())
/// }
/// ```
#[cfg(feature = "fetch")]
pub async fn extract(url: &str, config: &ExtractConfig) -> Result<ExtractionResult> {
    let html = fetch_url(url, &config.fetch).await?;
    extract_html(url, &html, config)
}

/// Extracts already-retrieved markup.
///
/// Metadata fields come from the unsanitized document; title, blocks and
/// statistics come from the sanitized one.
pub fn extract_html(url: &str, html: &str, config: &ExtractConfig) -> Result<ExtractionResult> {
    let raw = Document::parse(html)?;
    let sanitized = Document::parse_sanitized(html)?;
    let metadata = Metadata::extract(&raw, &sanitized);

    let area = select_content_area(&sanitized)?;
    let blocks = classify(&area, &config.classify)?;
    let flattened = flatten(&area);

    let result = ExtractionResult::new(url, metadata, blocks, &flattened, config.words_per_minute);
    tracing::info!(url, blocks = result.blocks.len(), words = result.statistics.word_count(), "extracted page");
    Ok(result)
}
