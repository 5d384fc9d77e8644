//! The extraction result and its export formats.
//!
//! [`ExtractionResult`] is the single value handed back to callers. It
//! carries the page metadata, the classified blocks, the rendered text and
//! the statistics, and can be exported as content, JSON, CSV or a plain-text
//! report through [`ExtractionResult::to_format`].

use serde::Serialize;
use time::OffsetDateTime;

use crate::block::ContentBlock;
use crate::formatters::{JsonConfig, to_csv, to_json_string, to_text_report};
use crate::metadata::Metadata;
use crate::render::render_or_fallback;
use crate::stats::{Statistics, compute_statistics};
use crate::Result;

/// Export formats for an [`ExtractionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// The rendered content only.
    #[default]
    Content,
    /// The full result as pretty-printed JSON.
    Json,
    /// A header row and a single quoted data row.
    Csv,
    /// A labelled plain-text report.
    Text,
}

/// The complete, self-contained outcome of one extraction.
///
/// Serializes with camelCase keys:
///
/// ```json
/// {
///   "url": "https://example.com/",
///   "title": "Example",
///   "description": "",
///   "author": "",
///   "keywords": "",
///   "blocks": [{ "type": "heading", "level": 1, "text": "Example" }],
///   "renderedContent": "...",
///   "statistics": { "wordCount": 1, "...": 0 },
///   "extractedAt": "2026-01-01T00:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub url: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub keywords: String,
    pub blocks: Vec<ContentBlock>,
    pub rendered_content: String,
    pub statistics: Statistics,
    #[serde(with = "time::serde::rfc3339")]
    pub extracted_at: OffsetDateTime,
}

impl ExtractionResult {
    /// Assembles a result from its parts.
    ///
    /// The rendered content is the block rendering, or `flattened` when the
    /// rendering is empty. Statistics are always computed from `flattened`.
    /// The timestamp is the current UTC time.
    pub fn new(
        url: impl Into<String>, metadata: Metadata, blocks: Vec<ContentBlock>, flattened: &str, words_per_minute: usize,
    ) -> Self {
        let rendered_content = render_or_fallback(&blocks, flattened);
        let statistics = compute_statistics(flattened, &blocks, words_per_minute);
        let Metadata { title, description, author, keywords } = metadata;

        Self {
            url: url.into(),
            title,
            description,
            author,
            keywords,
            blocks,
            rendered_content,
            statistics,
            extracted_at: OffsetDateTime::now_utc(),
        }
    }

    /// Gets the result as a JSON value.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| crate::PageliftError::ExtractionFailed(e.to_string()))
    }

    /// Exports the result in the given format.
    pub fn to_format(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Content => Ok(self.rendered_content.clone()),
            ExportFormat::Json => to_json_string(self, &JsonConfig { pretty: true }),
            ExportFormat::Csv => to_csv(self),
            ExportFormat::Text => to_text_report(self),
        }
    }
}
