//! # Special Token Map

use crate::errors::{BpeError, BpeResult};
use crate::types::{CommonHashSet, TokenId};

/// `display string -> TokenId` for atomic special tokens, in registration
/// order.
///
/// Registration order is authoritative: it is the order ids were assigned
/// in (`first_id`, `first_id + 1`, ...) and the order the vocabulary was
/// seeded in, so it must be preserved across save/load.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpecialTokenMap {
    ordered: Vec<(String, TokenId)>,
}

impl SpecialTokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `literals`, in order, starting at `first_id`.
    pub fn from_literals<S: AsRef<str>>(literals: &[S], first_id: TokenId) -> BpeResult<Self> {
        let mut ordered = Vec::with_capacity(literals.len());
        let mut seen: CommonHashSet<String> = CommonHashSet::default();
        for (i, literal) in literals.iter().enumerate() {
            let s = literal.as_ref().to_string();
            if !seen.insert(s.clone()) {
                return Err(BpeError::DuplicateSpecialToken(s));
            }
            ordered.push((s, first_id + i as TokenId));
        }
        Ok(Self { ordered })
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// The id registered for `literal`, if any.
    pub fn lookup(&self, literal: &str) -> Option<TokenId> {
        self.ordered
            .iter()
            .find(|(s, _)| s == literal)
            .map(|(_, id)| *id)
    }

    /// The literal strings, in registration order.
    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(|(s, _)| s.as_str())
    }

    /// `(literal, id)` pairs, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenId)> {
        self.ordered.iter().map(|(s, id)| (s.as_str(), *id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_literals_assigns_sequential_ids() {
        let specials = SpecialTokenMap::from_literals(&["<|endoftext|>", "<|pad|>"], 256).unwrap();
        assert_eq!(specials.lookup("<|endoftext|>"), Some(256));
        assert_eq!(specials.lookup("<|pad|>"), Some(257));
        assert_eq!(specials.lookup("<|unknown|>"), None);
    }

    #[test]
    fn test_from_literals_rejects_duplicates() {
        let err = SpecialTokenMap::from_literals(&["<|x|>", "<|x|>"], 256).unwrap_err();
        assert!(matches!(err, BpeError::DuplicateSpecialToken(s) if s == "<|x|>"));
    }
}
