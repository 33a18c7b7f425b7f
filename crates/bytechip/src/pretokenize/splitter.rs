//! # Text Splitter
//!
//! Shared pre-tokenization: split a string into special-token delimiters and
//! regex-matched "word" spans. Used by both the trainer (to build a
//! pre-token frequency table over a whole corpus) and the encoder (to split
//! a single input string before merging).

use crate::errors::{BpeError, BpeResult};
use crate::pretokenize::pattern::{alternation_of_literals, PRETOKEN_PATTERN};

/// One piece of a split string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// A literal match of one of the configured special tokens.
    Special(&'a str),

    /// A pre-token matched by the word-split pattern.
    Word(&'a str),
}

/// Splits text into special-token delimiters and pre-token words.
///
/// Special-token splitting always runs first; the word pattern is only
/// applied within the non-special segments, so a special token can never be
/// split by the word pattern, and the word pattern never sees a special
/// token's bytes.
#[derive(Clone)]
pub struct TextSplitter {
    word_re: fancy_regex::Regex,
    special_re: Option<fancy_regex::Regex>,
}

impl TextSplitter {
    /// Build a splitter with no special tokens; only the word pattern applies.
    pub fn new() -> Self {
        Self {
            word_re: Self::compile_word_pattern(),
            special_re: None,
        }
    }

    /// Build a splitter with the given special-token literal strings.
    ///
    /// `specials` should be given in display-form order; that order is not
    /// otherwise significant to the splitter (the alternation itself is
    /// order-independent for disjoint literals), but callers typically pass
    /// them in the same order as the owning [`SpecialTokenMap`](crate::vocab::special::SpecialTokenMap).
    pub fn with_specials<S: AsRef<str>>(specials: &[S]) -> Self {
        let special_re = if specials.is_empty() {
            None
        } else {
            let pattern = alternation_of_literals(specials);
            Some(
                fancy_regex::Regex::new(&pattern)
                    .expect("escaped literal alternation is always a valid pattern"),
            )
        };

        Self {
            word_re: Self::compile_word_pattern(),
            special_re,
        }
    }

    fn compile_word_pattern() -> fancy_regex::Regex {
        fancy_regex::Regex::new(PRETOKEN_PATTERN).expect("pre-token pattern is valid")
    }

    /// Split `text` into an ordered sequence of [`Span`]s.
    pub fn split<'a>(&self, text: &'a str) -> BpeResult<Vec<Span<'a>>> {
        let mut out = Vec::with_capacity(text.len() / 4);

        let Some(special_re) = &self.special_re else {
            self.split_words(text, &mut out)?;
            return Ok(out);
        };

        let mut last = 0;
        for m in special_re.find_iter(text) {
            let m = m.map_err(|e| BpeError::Worker(e.to_string()))?;
            if last < m.start() {
                self.split_words(&text[last..m.start()], &mut out)?;
            }
            out.push(Span::Special(m.as_str()));
            last = m.end();
        }
        if last < text.len() {
            self.split_words(&text[last..], &mut out)?;
        }

        Ok(out)
    }

    fn split_words<'a>(
        &self,
        text: &'a str,
        out: &mut Vec<Span<'a>>,
    ) -> BpeResult<()> {
        for m in self.word_re.find_iter(text) {
            let m = m.map_err(|e| BpeError::Worker(e.to_string()))?;
            out.push(Span::Word(m.as_str()));
        }
        Ok(())
    }
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_no_specials() {
        let splitter = TextSplitter::new();
        let spans = splitter.split("hello world").unwrap();
        assert_eq!(spans, vec![Span::Word("hello"), Span::Word(" world")]);
    }

    #[test]
    fn test_split_with_specials() {
        let splitter = TextSplitter::with_specials(&["<|endoftext|>"]);
        let spans = splitter.split("a<|endoftext|>b").unwrap();
        assert_eq!(
            spans,
            vec![
                Span::Word("a"),
                Span::Special("<|endoftext|>"),
                Span::Word("b"),
            ]
        );
    }

    #[test]
    fn test_split_contraction() {
        let splitter = TextSplitter::new();
        let spans = splitter.split("it's").unwrap();
        assert_eq!(spans, vec![Span::Word("it"), Span::Word("'s")]);
    }

    #[test]
    fn test_split_trailing_whitespace_no_followup() {
        let splitter = TextSplitter::new();
        // trailing run of whitespace with nothing non-space after it: "\s+(?!\S)"
        let spans = splitter.split("foo  ").unwrap();
        assert_eq!(spans, vec![Span::Word("foo"), Span::Word("  ")]);
    }

    #[test]
    fn test_split_special_at_boundaries() {
        let splitter = TextSplitter::with_specials(&["<|endoftext|>"]);
        let spans = splitter.split("<|endoftext|>").unwrap();
        assert_eq!(spans, vec![Span::Special("<|endoftext|>")]);
    }

    #[test]
    fn test_split_numbers_and_punctuation() {
        let splitter = TextSplitter::new();
        let spans = splitter.split("12345 799!").unwrap();
        assert_eq!(
            spans,
            vec![
                Span::Word("12345"),
                Span::Word(" 799"),
                Span::Word("!"),
            ]
        );
    }
}
