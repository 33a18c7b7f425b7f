//! # Pre-token Counter

use compact_str::CompactString;

use crate::errors::BpeResult;
use crate::pretokenize::{Span, TextSplitter};
use crate::types::CommonHashMap;

/// Frequency table over pre-token strings.
///
/// Special-token spans are discarded while counting: they are atomic by
/// construction and are seeded into the vocabulary directly, never
/// participating in merge training.
#[derive(Debug, Clone, Default)]
pub struct PreTokenCounts {
    counts: CommonHashMap<CompactString, u64>,
}

impl PreTokenCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `text` with `splitter` and fold its word spans into the table.
    pub fn add_text(&mut self, splitter: &TextSplitter, text: &str) -> BpeResult<()> {
        for span in splitter.split(text)? {
            if let Span::Word(word) = span {
                *self.counts.entry(CompactString::new(word)).or_insert(0) += 1;
            }
        }
        Ok(())
    }

    /// Fold another counter's entries into this one, additively.
    pub fn merge(&mut self, other: PreTokenCounts) {
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_text_counts_words_not_specials() {
        let splitter = TextSplitter::with_specials(&["<|endoftext|>"]);
        let mut counts = PreTokenCounts::new();
        counts.add_text(&splitter, "ab<|endoftext|>ab").unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.iter().next(), Some(("ab", 2)));
    }

    #[test]
    fn test_merge_is_additive() {
        let splitter = TextSplitter::new();
        let mut a = PreTokenCounts::new();
        a.add_text(&splitter, "ab ab").unwrap();
        let mut b = PreTokenCounts::new();
        b.add_text(&splitter, "ab").unwrap();
        a.merge(b);
        let total: u64 = a.iter().map(|(_, c)| c).sum();
        assert_eq!(total, 3);
    }
}
