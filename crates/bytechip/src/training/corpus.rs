//! # Corpus Pre-tokenization
//!
//! Reads a training corpus and turns it into a [`PreTokenCounts`] table,
//! either in one pass or split across chunks and summed.

use crate::errors::{BpeError, BpeResult};
use crate::pretokenize::TextSplitter;
use crate::training::chunk_boundaries::find_chunk_boundaries;
use crate::training::pretoken_counter::PreTokenCounts;

/// Count pre-tokens across the whole of `data` in one pass.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD before
/// regex matching; this lossy fallback is only used for corpus
/// statistics, never on the encoding path.
pub fn count_corpus(splitter: &TextSplitter, data: &[u8]) -> BpeResult<PreTokenCounts> {
    let text = String::from_utf8_lossy(data);
    let mut counts = PreTokenCounts::new();
    counts.add_text(splitter, &text)?;
    Ok(counts)
}

/// Count pre-tokens over `data`, splitting it into `num_chunks` ranges
/// aligned to `sentinel` boundaries and processing each chunk serially.
///
/// This is the sequential reference path; [`count_corpus_parallel`] (the
/// `rayon` feature) processes the same chunks concurrently and must agree
/// with it exactly.
pub fn count_corpus_chunked(
    splitter: &TextSplitter,
    data: &[u8],
    num_chunks: usize,
    sentinel: &[u8],
) -> BpeResult<PreTokenCounts> {
    let boundaries = find_chunk_boundaries(data, num_chunks, sentinel);
    let mut total = PreTokenCounts::new();
    for window in boundaries.windows(2) {
        let (start, end) = (window[0], window[1]);
        if start >= end {
            continue;
        }
        let chunk = count_corpus(splitter, &data[start..end])?;
        total.merge(chunk);
    }
    Ok(total)
}

#[cfg(feature = "rayon")]
/// Count pre-tokens over `data` in parallel across `num_chunks` sentinel-
/// aligned ranges, via `rayon`. Each worker builds an independent counter;
/// the coordinator sums them with a single-writer reduction.
///
/// A worker panic or pre-tokenization failure in any chunk aborts the run
/// and surfaces that chunk's error rather than silently dropping its
/// contribution.
pub fn count_corpus_parallel(
    splitter: &TextSplitter,
    data: &[u8],
    num_chunks: usize,
    sentinel: &[u8],
) -> BpeResult<PreTokenCounts> {
    use rayon::prelude::*;

    let boundaries = find_chunk_boundaries(data, num_chunks, sentinel);
    let ranges: Vec<(usize, usize)> = boundaries
        .windows(2)
        .map(|w| (w[0], w[1]))
        .filter(|&(start, end)| start < end)
        .collect();

    let partials: Vec<BpeResult<PreTokenCounts>> = ranges
        .par_iter()
        .map(|&(start, end)| count_corpus(splitter, &data[start..end]))
        .collect();

    let mut total = PreTokenCounts::new();
    for partial in partials {
        total.merge(partial.map_err(|e| BpeError::Worker(e.to_string()))?);
    }
    Ok(total)
}
