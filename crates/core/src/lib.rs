pub mod block;
pub mod classify;
pub mod content;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod formatters;
pub mod metadata;
pub mod parse;
pub mod render;
pub mod result;
pub mod sanitize;
pub mod stats;

pub use block::{BlockKind, ContentBlock};
pub use classify::{ClassifyConfig, classify};
pub use content::select_content_area;
pub use error::{PageliftError, Result};
#[cfg(feature = "fetch")]
pub use extract::extract;
pub use extract::{ExtractConfig, ExtractConfigBuilder, Extractor, extract_html};
pub use fetch::{FetchConfig, fetch_file, fetch_stdin, validate_url};
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use formatters::{JsonConfig, JsonFormatter, to_csv, to_json_string, to_text_report};
pub use metadata::Metadata;
pub use parse::{Document, Element, ElementKind};
pub use render::{flatten, render};
pub use result::{ExportFormat, ExtractionResult};
pub use sanitize::sanitize_html;
pub use stats::{Statistics, compute_statistics};
