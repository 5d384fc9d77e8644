//! Derived document statistics.

use serde::Serialize;

use crate::block::{BlockKind, ContentBlock};

/// Default reading speed used for reading-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Counts describing an extracted document.
///
/// Every field is derived by [`compute_statistics`]; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    word_count: usize,
    character_count: usize,
    reading_time_minutes: usize,
    paragraph_count: usize,
    heading_count: usize,
    list_count: usize,
    code_block_count: usize,
}

impl Statistics {
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn character_count(&self) -> usize {
        self.character_count
    }

    pub fn reading_time_minutes(&self) -> usize {
        self.reading_time_minutes
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraph_count
    }

    pub fn heading_count(&self) -> usize {
        self.heading_count
    }

    pub fn list_count(&self) -> usize {
        self.list_count
    }

    pub fn code_block_count(&self) -> usize {
        self.code_block_count
    }
}

/// Computes statistics from the flattened text and the block sequence.
///
/// Word and character counts come from `flattened`; per-type counts come
/// from `blocks`. A `words_per_minute` of zero is treated as one.
///
/// # Example
///
/// ```rust
/// use pagelift_core::stats::compute_statistics;
///
/// let stats = compute_statistics("three little words", &[], 200);
/// assert_eq!(stats.word_count(), 3);
/// assert_eq!(stats.character_count(), 18);
/// assert_eq!(stats.reading_time_minutes(), 1);
/// ```
pub fn compute_statistics(flattened: &str, blocks: &[ContentBlock], words_per_minute: usize) -> Statistics {
    let word_count = count_words(flattened);
    let count = |kind: BlockKind| blocks.iter().filter(|b| b.kind() == kind).count();

    Statistics {
        word_count,
        character_count: flattened.chars().count(),
        reading_time_minutes: reading_time_minutes(word_count, words_per_minute),
        paragraph_count: count(BlockKind::Paragraph),
        heading_count: count(BlockKind::Heading),
        list_count: count(BlockKind::List),
        code_block_count: count(BlockKind::CodeBlock),
    }
}

/// Number of whitespace-delimited tokens. Empty or whitespace-only text has
/// zero words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// `word_count / words_per_minute`, rounded up.
pub fn reading_time_minutes(word_count: usize, words_per_minute: usize) -> usize {
    word_count.div_ceil(words_per_minute.max(1))
}
