//! Rendering of blocks into readable text.
//!
//! [`render`] lays out a block sequence with per-type formatting;
//! [`flatten`] produces the unstructured fallback used when nothing was
//! classified and as the basis for statistics.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::block::ContentBlock;
use crate::parse::Element;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static pattern is valid"));

const BULLET: &str = "•";
const CODE_OPEN: &str = "[CODE BLOCK]";
const CODE_CLOSE: &str = "[/CODE BLOCK]";

/// Width of the `=` rule framing a heading: 55 for `h1` down to 30 for `h6`.
pub fn heading_rule_width(level: u8) -> usize {
    60usize.saturating_sub(5 * usize::from(level))
}

/// Serializes blocks into a single text document.
///
/// - Headings are upper-cased between two `=` rules whose width shrinks
///   with depth, with a blank line before and after.
/// - Paragraphs are followed by a blank line.
/// - List items are indented with a bullet or their 1-based number.
/// - Code is wrapped in `[CODE BLOCK]` / `[/CODE BLOCK]` delimiter lines.
///
/// # Example
///
/// ```rust
/// use pagelift_core::block::ContentBlock;
/// use pagelift_core::render::render;
///
/// let text = render(&[ContentBlock::List { ordered: true, items: vec!["Mix".into(), "Bake".into()] }]);
/// assert_eq!(text, "  1. Mix\n  2. Bake\n\n");
/// ```
pub fn render(blocks: &[ContentBlock]) -> String {
    let mut out = String::new();

    for block in blocks {
        match block {
            ContentBlock::Heading { level, text } => {
                let rule = "=".repeat(heading_rule_width(*level));
                let _ = write!(out, "\n{rule}\n{}\n{rule}\n\n", text.to_uppercase());
            }
            ContentBlock::Paragraph { text } => {
                let _ = write!(out, "{text}\n\n");
            }
            ContentBlock::List { ordered: false, items } => {
                for item in items {
                    let _ = writeln!(out, "  {BULLET} {item}");
                }
                out.push('\n');
            }
            ContentBlock::List { ordered: true, items } => {
                for (idx, item) in items.iter().enumerate() {
                    let _ = writeln!(out, "  {}. {item}", idx + 1);
                }
                out.push('\n');
            }
            ContentBlock::CodeBlock { text } => {
                let _ = write!(out, "\n{CODE_OPEN}\n{text}\n{CODE_CLOSE}\n\n");
            }
        }
    }

    out
}

/// Concatenates every text node under `area`, collapses whitespace runs to
/// a single space and trims the result.
pub fn flatten(area: &Element<'_>) -> String {
    collapse_whitespace(&area.text())
}

/// Collapses each run of whitespace to one space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// The formatted rendering of `blocks`, or `flattened` when the rendering
/// is empty.
pub fn render_or_fallback(blocks: &[ContentBlock], flattened: &str) -> String {
    let formatted = render(blocks);
    if formatted.is_empty() { flattened.to_string() } else { formatted }
}
