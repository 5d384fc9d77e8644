//! Single-record CSV export.
//!
//! Every field is wrapped in double quotes and embedded quotes are doubled,
//! so commas and newlines inside the content survive a round trip through
//! spreadsheet tools.

use super::format_timestamp;
use crate::Result;
use crate::result::ExtractionResult;

pub const CSV_HEADER: &str = "URL,Title,Content,Extracted At";

/// Exports the URL, title, rendered content and timestamp as one CSV record
/// under [`CSV_HEADER`].
pub fn to_csv(result: &ExtractionResult) -> Result<String> {
    let extracted_at = format_timestamp(result.extracted_at)?;
    let row = [result.url.as_str(), result.title.as_str(), result.rendered_content.as_str(), extracted_at.as_str()]
        .iter()
        .map(|field| quote(field))
        .collect::<Vec<_>>()
        .join(",");

    Ok(format!("{CSV_HEADER}\n{row}"))
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
