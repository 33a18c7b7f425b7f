//! # Byte Span Buffer

use crate::types::{Pair, TokenId};

/// A single pre-token's current id sequence, mutated in place as merges are
/// applied during training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteSpanBuf {
    ids: Vec<TokenId>,
}

impl ByteSpanBuf {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            ids: bytes.iter().map(|&b| b as TokenId).collect(),
        }
    }

    pub fn ids(&self) -> &[TokenId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Adjacent pairs in the buffer, left to right.
    pub fn pairs(&self) -> impl Iterator<Item = Pair> + '_ {
        self.ids.windows(2).map(|w| (w[0], w[1]))
    }

    /// Replace every non-overlapping occurrence of `pair` with `replacement`,
    /// left to right, reporting the net change in adjacency count for every
    /// pair affected via `on_delta(pair, delta)`.
    ///
    /// A match advances the cursor by 2, past both consumed elements, so
    /// `a b a b` merges to `c c` rather than re-examining the freshly
    /// inserted `c` as the left half of the next candidate pair; `a a b`
    /// merges to `a c`, since the second `a` is consumed together with `b`.
    pub fn merge_pair_cb(
        &mut self,
        pair: Pair,
        replacement: TokenId,
        mut on_delta: impl FnMut(Pair, i64),
    ) {
        let (a, b) = pair;
        if self.ids.len() < 2 {
            return;
        }

        let mut out = Vec::with_capacity(self.ids.len());
        let mut i = 0;
        let mut merges = 0i64;
        while i < self.ids.len() {
            let is_match = i + 1 < self.ids.len() && self.ids[i] == a && self.ids[i + 1] == b;
            if is_match {
                if let Some(&prev) = out.last() {
                    on_delta((prev, a), -1);
                    on_delta((prev, replacement), 1);
                }
                if i + 2 < self.ids.len() {
                    let next = self.ids[i + 2];
                    on_delta((b, next), -1);
                    on_delta((replacement, next), 1);
                }
                out.push(replacement);
                merges += 1;
                i += 2;
            } else {
                out.push(self.ids[i]);
                i += 1;
            }
        }

        if merges > 0 {
            on_delta(pair, -merges);
        }
        self.ids = out;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deltas(ids: &[TokenId], pair: Pair, replacement: TokenId) -> (Vec<TokenId>, Vec<(Pair, i64)>) {
        let mut buf = ByteSpanBuf { ids: ids.to_vec() };
        let mut seen = Vec::new();
        buf.merge_pair_cb(pair, replacement, |p, d| seen.push((p, d)));
        (buf.ids, seen)
    }

    #[test]
    fn test_adjacent_pair_collapse() {
        let (ids, _) = deltas(&[97, 98, 97, 98], (97, 98), 256);
        assert_eq!(ids, vec![256, 256]);
    }

    #[test]
    fn test_overlap_avoidance() {
        let (ids, _) = deltas(&[97, 97, 98], (97, 98), 256);
        assert_eq!(ids, vec![97, 256]);
    }

    #[test]
    fn test_no_match_is_noop() {
        let (ids, seen) = deltas(&[1, 2, 3], (4, 5), 99);
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(seen.is_empty());
    }

    #[test]
    fn test_self_pair_leaves_odd_remainder() {
        let (ids, _) = deltas(&[256, 256, 256], (256, 256), 300);
        assert_eq!(ids, vec![300, 256]);
    }

    #[test]
    fn test_deltas_net_to_consistent_totals() {
        // [1,2,3,1,2,2,1] merging (1,2)->9: matches at i=0 and i=3.
        // i=0: 1,2 -> 9; no prev; next=3 -> (2,3)-1,(9,3)+1. i=2
        // i=2: 3 != 1, push 3. i=3
        // i=3: 1,2 -> 9; prev=3 -> (3,1)-1,(3,9)+1; next=2 -> (2,2)-1,(9,2)+1. i=5
        // i=5: 2 != 1, push 2. i=6
        // i=6: 1 alone, push 1.
        // result: [9,3,9,2,1]
        let (ids, seen) = deltas(&[1, 2, 3, 1, 2, 2, 1], (1, 2), 9);
        assert_eq!(ids, vec![9, 3, 9, 2, 1]);
        assert!(seen.contains(&((1, 2), -2)));
        assert!(seen.contains(&((2, 3), -1)));
        assert!(seen.contains(&((9, 3), 1)));
        assert!(seen.contains(&((3, 1), -1)));
        assert!(seen.contains(&((3, 9), 1)));
        assert!(seen.contains(&((2, 2), -1)));
        assert!(seen.contains(&((9, 2), 1)));
    }
}
