//! # Pre-tokenization
//!
//! Splits raw text into special-token spans and regex-matched word spans,
//! ahead of either training (counting words into a frequency table) or
//! encoding (merging one word's bytes at a time).

mod pattern;
mod splitter;

pub use pattern::{alternation_of_literals, PRETOKEN_PATTERN};
pub use splitter::{Span, TextSplitter};
