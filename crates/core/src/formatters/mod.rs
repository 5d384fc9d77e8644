pub mod csv;
pub mod json;
pub mod text;

pub use csv::{CSV_HEADER, to_csv};
pub use json::{JsonConfig, JsonFormatter, to_json_string};
pub use text::to_text_report;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::{PageliftError, Result};

/// Formats a timestamp the same way the JSON export does.
pub(crate) fn format_timestamp(at: OffsetDateTime) -> Result<String> {
    at.format(&Rfc3339).map_err(|e| PageliftError::ExtractionFailed(e.to_string()))
}
