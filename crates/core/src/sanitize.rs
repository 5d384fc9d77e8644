//! Removal of markup that never carries readable content.
//!
//! Scripts, styles, embedded frames, navigation chrome and widget containers
//! (ads, cookie banners, popups) are dropped together with everything inside
//! them, so none of it can leak into titles, blocks or statistics.
//!
//! Raw-text elements are cut from the markup in a single streaming pass
//! before parsing. Everything else is detached from the parsed tree, where
//! the parser has already closed elements whose end tags were omitted.

use lol_html::{HtmlRewriter, Selector, Settings, element};

use crate::parse::Document;
use crate::{PageliftError, Result};

/// Elements whose content is raw text. Their end tag is never optional, so
/// they can be removed before the markup is parsed.
pub const RAW_TEXT_SELECTORS: &[&str] = &["script", "style", "noscript", "iframe"];

/// Structural chrome and widget containers, removed from the parsed tree.
pub const CHROME_SELECTORS: &[&str] = &[
    "link",
    "meta",
    "nav",
    "footer",
    "header",
    "aside",
    ".advertisement",
    ".ad",
    ".sidebar",
    ".cookie",
    ".popup",
];

/// Parses `html` with every non-content element removed.
///
/// # Errors
///
/// Returns [`PageliftError::ExtractionFailed`] if the markup cannot be
/// rewritten.
pub fn sanitize_document(html: &str) -> Result<Document> {
    let streamed = strip_raw_text(html, RAW_TEXT_SELECTORS)?;
    let mut doc = Document::parse(&streamed)?;
    strip_elements(&mut doc, CHROME_SELECTORS)?;
    Ok(doc)
}

/// Removes every non-content element and serializes the result.
///
/// Applying it to its own output changes nothing.
///
/// # Example
///
/// ```rust
/// use pagelift_core::sanitize::sanitize_html;
///
/// let html = r#"<body><nav>Menu</nav><p>Story</p><div class="ad">Buy</div></body>"#;
/// let cleaned = sanitize_html(html).unwrap();
/// assert!(cleaned.contains("<body><p>Story</p></body>"));
/// assert!(!cleaned.contains("Menu"));
/// ```
pub fn sanitize_html(html: &str) -> Result<String> {
    Ok(sanitize_document(html)?.as_string())
}

/// Detaches every element matching any of `selectors` from `doc`, including
/// its subtree. Returns the number of elements removed.
///
/// # Errors
///
/// Returns [`PageliftError::ExtractionFailed`] if a selector is invalid.
pub fn strip_elements(doc: &mut Document, selectors: &[&str]) -> Result<usize> {
    let mut removed = 0;
    for selector in selectors {
        removed += doc.remove(selector)?;
    }
    Ok(removed)
}

/// Streams `html` through `lol_html`, dropping each element matching one of
/// `selectors` along with its content.
///
/// Only safe for elements that always carry an end tag.
pub fn strip_raw_text(html: &str, selectors: &[&str]) -> Result<String> {
    for selector in selectors {
        selector
            .parse::<Selector>()
            .map_err(|e| PageliftError::ExtractionFailed(format!("Invalid selector '{}': {}", selector, e)))?;
    }

    let mut output = Vec::with_capacity(html.len());
    let mut rewriter = HtmlRewriter::new(
        Settings {
            element_content_handlers: selectors
                .iter()
                .map(|selector| {
                    element!(selector, |el| {
                        el.remove();
                        Ok(())
                    })
                })
                .collect(),
            ..Default::default()
        },
        |c: &[u8]| output.extend_from_slice(c),
    );

    rewriter
        .write(html.as_bytes())
        .map_err(|e| PageliftError::ExtractionFailed(format!("Failed to sanitize HTML: {}", e)))?;
    rewriter
        .end()
        .map_err(|e| PageliftError::ExtractionFailed(format!("Failed to sanitize HTML: {}", e)))?;

    Ok(String::from_utf8_lossy(&output).into_owned())
}
