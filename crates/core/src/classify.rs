//! Block classification.
//!
//! Walks a content area and emits [`ContentBlock`]s type by type: every
//! heading first, then every paragraph, then every list, then every code
//! block. Within a type, blocks keep document order; across types they are
//! grouped rather than interleaved by position.

use crate::Result;
use crate::block::ContentBlock;
use crate::parse::{Element, ElementKind};

/// Length filters applied while classifying.
///
/// Lengths are counted in characters after trimming and compared strictly:
/// a paragraph must be *longer* than `min_paragraph_chars` to be kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyConfig {
    /// Paragraphs at or below this length are dropped (default: 20).
    pub min_paragraph_chars: usize,
    /// Code blocks at or below this length are dropped (default: 10).
    pub min_code_chars: usize,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self { min_paragraph_chars: 20, min_code_chars: 10 }
    }
}

/// Classifies the descendants of `area` into content blocks.
///
/// # Example
///
/// ```rust
/// use pagelift_core::block::ContentBlock;
/// use pagelift_core::classify::{ClassifyConfig, classify};
/// use pagelift_core::parse::Document;
///
/// let doc = Document::parse("<body><p>A paragraph that is long enough.</p><h2>Later</h2></body>").unwrap();
/// let blocks = classify(&doc.body(), &ClassifyConfig::default()).unwrap();
///
/// assert_eq!(blocks[0], ContentBlock::Heading { level: 2, text: "Later".to_string() });
/// assert!(matches!(blocks[1], ContentBlock::Paragraph { .. }));
/// ```
pub fn classify(area: &Element<'_>, config: &ClassifyConfig) -> Result<Vec<ContentBlock>> {
    let mut blocks = collect_headings(area)?;
    blocks.extend(collect_paragraphs(area, config)?);
    blocks.extend(collect_lists(area)?);
    blocks.extend(collect_code_blocks(area, config)?);

    tracing::debug!(blocks = blocks.len(), "classified content area");
    Ok(blocks)
}

fn collect_headings(area: &Element<'_>) -> Result<Vec<ContentBlock>> {
    let mut blocks = Vec::new();

    for heading in area.select("h1, h2, h3, h4, h5, h6")? {
        let ElementKind::Heading(level) = heading.kind() else {
            continue;
        };
        let text = heading.text();
        let text = text.trim();
        if !text.is_empty() {
            blocks.push(ContentBlock::Heading { level, text: text.to_string() });
        }
    }

    Ok(blocks)
}

fn collect_paragraphs(area: &Element<'_>, config: &ClassifyConfig) -> Result<Vec<ContentBlock>> {
    Ok(area
        .select("p")?
        .iter()
        .filter_map(|p| longer_than(&p.text(), config.min_paragraph_chars))
        .map(|text| ContentBlock::Paragraph { text })
        .collect())
}

fn collect_lists(area: &Element<'_>) -> Result<Vec<ContentBlock>> {
    let mut blocks = Vec::new();

    for list in area.select("ul, ol")? {
        let ElementKind::List { ordered } = list.kind() else {
            continue;
        };

        let items: Vec<String> = list
            .child_elements()
            .iter()
            .filter(|child| child.kind() == ElementKind::ListItem)
            .map(|li| li.text_outside_lists().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        if !items.is_empty() {
            blocks.push(ContentBlock::List { ordered, items });
        }
    }

    Ok(blocks)
}

fn collect_code_blocks(area: &Element<'_>, config: &ClassifyConfig) -> Result<Vec<ContentBlock>> {
    Ok(area
        .select("pre, code")?
        .iter()
        .filter_map(|el| longer_than(&el.text(), config.min_code_chars))
        .map(|text| ContentBlock::CodeBlock { text })
        .collect())
}

/// Trimmed `text` if it has strictly more than `min` characters.
fn longer_than(text: &str, min: usize) -> Option<String> {
    let trimmed = text.trim();
    (trimmed.chars().count() > min).then(|| trimmed.to_string())
}
