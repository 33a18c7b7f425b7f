//! # Chunk Boundaries

/// Divide `data` into `num_chunks` approximately equal byte ranges, then
/// snap every interior boundary forward to the next occurrence of
/// `sentinel`, so no chunk's pre-tokenization can straddle a boundary that
/// splits a pre-token in half.
///
/// Returns `num_chunks + 1` monotonically increasing offsets (deduplicated,
/// so a chunk with no sentinel before end-of-file collapses to empty rather
/// than to a negative-length range). Ranges are `boundaries[i]..boundaries[i+1]`.
pub fn find_chunk_boundaries(data: &[u8], num_chunks: usize, sentinel: &[u8]) -> Vec<usize> {
    let len = data.len();
    if num_chunks == 0 || len == 0 {
        return vec![0, len];
    }

    let chunk_size = len.div_ceil(num_chunks);
    let mut boundaries: Vec<usize> = (0..=num_chunks)
        .map(|i| (i * chunk_size).min(len))
        .collect();

    for boundary in boundaries.iter_mut().take(num_chunks).skip(1) {
        *boundary = match find_subslice(&data[*boundary..], sentinel) {
            Some(offset) => *boundary + offset,
            None => len,
        };
    }

    boundaries.sort_unstable();
    boundaries.dedup();
    boundaries
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_chunk_is_whole_file() {
        let data = b"hello world";
        assert_eq!(find_chunk_boundaries(data, 1, b"X"), vec![0, data.len()]);
    }

    #[test]
    fn test_snaps_to_sentinel() {
        let data = b"aaaa<SEP>bbbb<SEP>cccc";
        let boundaries = find_chunk_boundaries(data, 3, b"<SEP>");
        for w in boundaries.windows(2) {
            let chunk = &data[w[0]..w[1]];
            assert!(
                chunk.is_empty() || chunk.starts_with(b"<SEP>") || w[0] == 0,
                "chunk {:?} does not start at a sentinel or file start",
                String::from_utf8_lossy(chunk)
            );
        }
    }

    #[test]
    fn test_missing_sentinel_collapses_to_eof() {
        let data = b"no sentinel here at all";
        let boundaries = find_chunk_boundaries(data, 4, b"<SEP>");
        assert_eq!(*boundaries.last().unwrap(), data.len());
        // every interior boundary that found no sentinel becomes len, then
        // dedups away.
        assert!(boundaries.len() < 5);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(find_chunk_boundaries(b"", 4, b"X"), vec![0, 0]);
    }
}
