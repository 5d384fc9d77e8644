//! The structured content model.
//!
//! A page is reduced to an ordered sequence of [`ContentBlock`]s. Blocks are
//! serialized as JSON objects with a `type` discriminator (`heading`,
//! `paragraph`, `unordered-list`, `ordered-list`, `code`) next to their
//! type-specific fields.

use serde::{Serialize, Serializer};

/// One classified unit of the extracted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// `h1`..`h6`; `level` is always within `1..=6`.
    Heading { level: u8, text: String },
    Paragraph { text: String },
    /// Items hold each `li`'s own text, never the text of nested lists.
    List { ordered: bool, items: Vec<String> },
    CodeBlock { text: String },
}

/// Discriminant of a [`ContentBlock`], used for counting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Paragraph,
    List,
    CodeBlock,
}

impl ContentBlock {
    pub fn kind(&self) -> BlockKind {
        match self {
            ContentBlock::Heading { .. } => BlockKind::Heading,
            ContentBlock::Paragraph { .. } => BlockKind::Paragraph,
            ContentBlock::List { .. } => BlockKind::List,
            ContentBlock::CodeBlock { .. } => BlockKind::CodeBlock,
        }
    }

    /// The wire name of this block's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            ContentBlock::Heading { .. } => "heading",
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::List { ordered: false, .. } => "unordered-list",
            ContentBlock::List { ordered: true, .. } => "ordered-list",
            ContentBlock::CodeBlock { .. } => "code",
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum BlockRepr<'a> {
    Heading { level: u8, text: &'a str },
    Paragraph { text: &'a str },
    UnorderedList { items: &'a [String] },
    OrderedList { items: &'a [String] },
    Code { text: &'a str },
}

impl<'a> From<&'a ContentBlock> for BlockRepr<'a> {
    fn from(block: &'a ContentBlock) -> Self {
        match block {
            ContentBlock::Heading { level, text } => BlockRepr::Heading { level: *level, text },
            ContentBlock::Paragraph { text } => BlockRepr::Paragraph { text },
            ContentBlock::List { ordered: false, items } => BlockRepr::UnorderedList { items },
            ContentBlock::List { ordered: true, items } => BlockRepr::OrderedList { items },
            ContentBlock::CodeBlock { text } => BlockRepr::Code { text },
        }
    }
}

impl Serialize for ContentBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        BlockRepr::from(self).serialize(serializer)
    }
}
