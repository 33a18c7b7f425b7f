//! # Merge List

use crate::types::{CommonHashMap, Pair, TokenId};

/// The ordered `(a, b) -> c` rules learned by the trainer.
///
/// Order is semantic: encoding applies merges in the order they were
/// learned. Rules are kept in a plain hash map keyed by pair, with learned
/// order recovered by sorting on the assigned target id — the trainer
/// allocates ids strictly in merge order, so the two orders coincide. This
/// mirrors the reference vocabulary's pair map, which recovers order the
/// same way rather than keeping a redundant `Vec`.
#[derive(Debug, Clone, Default)]
pub struct MergeList {
    pairs: CommonHashMap<Pair, TokenId>,
}

impl MergeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Record a newly learned merge.
    ///
    /// Panics if `pair` was already recorded; the trainer never revisits a
    /// pair it has already merged away.
    pub fn insert(&mut self, pair: Pair, target: TokenId) {
        let prior = self.pairs.insert(pair, target);
        debug_assert!(prior.is_none(), "pair merged twice: {pair:?}");
    }

    /// The target id for `pair`, if a rule exists for it.
    pub fn get(&self, pair: Pair) -> Option<TokenId> {
        self.pairs.get(&pair).copied()
    }

    /// Rules in the order they were learned (ascending target id).
    pub fn iter_in_order(&self) -> impl Iterator<Item = (Pair, TokenId)> + '_ {
        let mut entries: Vec<(Pair, TokenId)> = self.pairs.iter().map(|(&p, &c)| (p, c)).collect();
        entries.sort_unstable_by_key(|&(_, c)| c);
        entries.into_iter()
    }
}

impl serde::Serialize for MergeList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let triples: Vec<[TokenId; 3]> = self
            .iter_in_order()
            .map(|((a, b), c)| [a, b, c])
            .collect();
        triples.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for MergeList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let triples: Vec<[TokenId; 3]> = serde::Deserialize::deserialize(deserializer)?;
        let mut pairs: CommonHashMap<Pair, TokenId> = CommonHashMap::default();
        for [a, b, c] in triples {
            pairs.insert((a, b), c);
        }
        Ok(Self { pairs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_in_order_is_target_id_order() {
        let mut merges = MergeList::new();
        merges.insert((99, 100), 258);
        merges.insert((97, 98), 256);
        merges.insert((256, 256), 257);
        let order: Vec<TokenId> = merges.iter_in_order().map(|(_, c)| c).collect();
        assert_eq!(order, vec![256, 257, 258]);
    }

    #[test]
    fn test_json_round_trip_preserves_order() {
        let mut merges = MergeList::new();
        merges.insert((97, 98), 256);
        merges.insert((256, 256), 257);
        let json = serde_json::to_string(&merges).unwrap();
        assert_eq!(json, "[[97,98,256],[256,256,257]]");
        let back: MergeList = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get((97, 98)), Some(256));
        assert_eq!(back.get((256, 256)), Some(257));
    }
}
