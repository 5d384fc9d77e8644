//! Content area selection.
//!
//! Picks the single subtree most likely to hold the page's substantive
//! content. Candidates are never merged.

use crate::Result;
use crate::parse::{Document, Element};

/// Containers preferred over `<body>`, matched together in document order.
pub const CONTENT_AREA_SELECTOR: &str = "main, article, .content, .main-content, #content, #main";

/// Returns the first element in document order matching
/// [`CONTENT_AREA_SELECTOR`], or the document body when none does.
///
/// # Example
///
/// ```rust
/// use pagelift_core::content::select_content_area;
/// use pagelift_core::parse::{Document, ElementKind};
///
/// let doc = Document::parse("<body><div id=\"main\"><p>Hi</p></div></body>").unwrap();
/// let area = select_content_area(&doc).unwrap();
/// assert_eq!(area.id(), Some("main"));
///
/// let doc = Document::parse("<body><div><p>Hi</p></div></body>").unwrap();
/// assert_eq!(select_content_area(&doc).unwrap().kind(), ElementKind::Body);
/// ```
pub fn select_content_area(doc: &Document) -> Result<Element<'_>> {
    match doc.select_first(CONTENT_AREA_SELECTOR)? {
        Some(area) => {
            tracing::debug!(tag = %area.tag_name(), "selected content area");
            Ok(area)
        }
        None => {
            tracing::debug!("no content container found, using body");
            Ok(doc.body())
        }
    }
}
