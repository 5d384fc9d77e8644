use super::format_timestamp;
use crate::Result;
use crate::result::ExtractionResult;

/// Labelled plain-text report: URL and title, the rendered content, then the
/// extraction timestamp.
pub fn to_text_report(result: &ExtractionResult) -> Result<String> {
    let extracted_at = format_timestamp(result.extracted_at)?;
    Ok(format!(
        "URL: {}\nTitle: {}\n\nContent:\n{}\n\nExtracted At: {}",
        result.url, result.title, result.rendered_content, extracted_at
    ))
}
