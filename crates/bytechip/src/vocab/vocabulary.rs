//! # Vocabulary

use crate::types::TokenId;

/// `TokenId -> byte string`, seeded with the 256 raw byte values and any
/// special tokens, then extended one entry per learned merge.
///
/// Ids `0..256` are always the single raw byte values at their own index;
/// callers rely on this to avoid a separate byte-to-id lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Vocabulary {
    entries: Vec<Vec<u8>>,
}

impl Vocabulary {
    /// Build the base vocabulary: the 256 raw bytes followed by `specials`,
    /// in the order given.
    pub fn seeded<S: AsRef<str>>(specials: &[S]) -> Self {
        let mut entries = Vec::with_capacity(256 + specials.len());
        for byte in 0u16..256 {
            entries.push(vec![byte as u8]);
        }
        for s in specials {
            entries.push(s.as_ref().as_bytes().to_vec());
        }
        Self { entries }
    }

    /// Number of entries currently in the vocabulary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new entry, returning its freshly allocated id.
    ///
    /// Callers must append in strictly increasing id order; the trainer is
    /// the only caller, and `next_id` only ever grows.
    pub fn push(&mut self, bytes: Vec<u8>) -> TokenId {
        let id = self.entries.len() as TokenId;
        self.entries.push(bytes);
        id
    }

    /// The byte string for `id`, if it exists.
    pub fn get(&self, id: TokenId) -> Option<&[u8]> {
        self.entries.get(id as usize).map(Vec::as_slice)
    }

    /// Iterate `(id, bytes)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &[u8])> {
        self.entries
            .iter()
            .enumerate()
            .map(|(id, bytes)| (id as TokenId, bytes.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_raw_bytes_at_own_index() {
        let vocab = Vocabulary::seeded::<&str>(&[]);
        assert_eq!(vocab.len(), 256);
        assert_eq!(vocab.get(0), Some([0u8].as_slice()));
        assert_eq!(vocab.get(255), Some([255u8].as_slice()));
    }

    #[test]
    fn test_seeded_with_specials() {
        let vocab = Vocabulary::seeded(&["<|endoftext|>"]);
        assert_eq!(vocab.len(), 257);
        assert_eq!(vocab.get(256), Some(b"<|endoftext|>".as_slice()));
    }

    #[test]
    fn test_push_allocates_sequential_ids() {
        let mut vocab = Vocabulary::seeded::<&str>(&[]);
        let id = vocab.push(b"ab".to_vec());
        assert_eq!(id, 256);
        assert_eq!(vocab.get(256), Some(b"ab".as_slice()));
    }
}
