//! Page-level metadata: title, description, author and keywords.
//!
//! The title falls back to [`NO_TITLE`]; every other missing field is empty.

use crate::Document;

/// Placeholder title for pages without a usable `<title>`.
pub const NO_TITLE: &str = "No Title Found";

/// Page-level fields reported alongside the extracted content.
///
/// Missing values are empty strings, except `title` which falls back to
/// [`NO_TITLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub author: String,
    pub keywords: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self { title: NO_TITLE.to_string(), description: String::new(), author: String::new(), keywords: String::new() }
    }
}

impl Metadata {
    /// Collects metadata from a page.
    ///
    /// The title is read from the sanitized document. The `<meta>` fields are
    /// read from the unsanitized one, because sanitization removes every
    /// `<meta>` element.
    pub fn extract(raw: &Document, sanitized: &Document) -> Self {
        Self {
            title: sanitized.extract_title().unwrap_or_else(|| NO_TITLE.to_string()),
            description: raw.get_meta_content("description").unwrap_or_default(),
            author: raw.get_meta_content("author").unwrap_or_default(),
            keywords: raw.get_meta_content("keywords").unwrap_or_default(),
        }
    }
}

impl Document {
    /// Trimmed text of the first `<title>` element, if non-empty.
    pub fn extract_title(&self) -> Option<String> {
        let title = self.title()?;
        let title = title.trim();
        if title.is_empty() { None } else { Some(title.to_string()) }
    }

    /// `content` attribute of the first `meta[name="<name>"]` element.
    pub fn get_meta_content(&self, name: &str) -> Option<String> {
        let selector = format!("meta[name=\"{}\"]", name);
        self.select_first(&selector)
            .ok()
            .flatten()
            .and_then(|el| el.attr("content").map(str::to_string))
    }
}
