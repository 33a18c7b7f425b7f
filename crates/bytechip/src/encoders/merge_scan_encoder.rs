//! # Merge Scan Encoder
//!
//! Encodes one pre-token's bytes by repeatedly finding the adjacent pair
//! with the lowest learned rank and replacing it, rather than re-scanning
//! the whole merge list per step. Lowest rank and earliest-learned coincide,
//! because the trainer allocates ids strictly in merge order.

use crate::types::TokenId;
use crate::vocab::MergeList;

/// Apply `merges` to `bytes` until no adjacent pair has a learned rule.
pub fn encode_word(merges: &MergeList, bytes: &[u8]) -> Vec<TokenId> {
    let mut buf: Vec<TokenId> = bytes.iter().map(|&b| b as TokenId).collect();

    loop {
        let best = buf
            .windows(2)
            .enumerate()
            .filter_map(|(i, w)| merges.get((w[0], w[1])).map(|rank| (rank, i)))
            .min();

        let Some((rank, i)) = best else {
            break;
        };

        buf.splice(i..i + 2, [rank]);
    }

    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merges_from(pairs: &[(TokenId, TokenId, TokenId)]) -> MergeList {
        let mut merges = MergeList::new();
        for &(a, b, c) in pairs {
            merges.insert((a, b), c);
        }
        merges
    }

    #[test]
    fn test_single_merge() {
        let merges = merges_from(&[(97, 98, 256)]);
        assert_eq!(encode_word(&merges, b"ab"), vec![256]);
    }

    #[test]
    fn test_lowest_rank_applied_first() {
        // bytes "aaa": (97,97)->256 learned before (256,97)->257.
        // greedy-lowest-rank must merge the first pair before the second,
        // producing [256, 97], not leaving [97, 97, 97] unmerged-then-wrong.
        let merges = merges_from(&[(97, 97, 256), (256, 97, 257)]);
        assert_eq!(encode_word(&merges, b"aaa"), vec![257]);
    }

    #[test]
    fn test_no_applicable_merges_returns_raw_bytes() {
        let merges = merges_from(&[(120, 121, 999)]);
        assert_eq!(encode_word(&merges, b"abc"), vec![97, 98, 99]);
    }

    #[test]
    fn test_overlapping_candidates_prefer_lower_rank_not_leftmost() {
        // "abab": (97,98)->256 is rank 256; (98,97) is never a rule here so
        // only (97,98) can ever apply, collapsing both occurrences.
        let merges = merges_from(&[(97, 98, 256)]);
        assert_eq!(encode_word(&merges, b"abab"), vec![256, 256]);
    }
}
