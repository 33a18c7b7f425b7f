//! # Decoding

use std::sync::Arc;

use crate::types::TokenId;
use crate::vocab::Artifact;

/// The result of decoding an id sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    /// The decoded text, built from ids up to the first one with no
    /// vocabulary entry.
    pub value: String,
    /// How many trailing ids, starting from the first with no vocabulary
    /// entry, were left unresolved.
    pub remaining: usize,
}

/// Converts [`TokenId`] sequences back into UTF-8 text using a trained
/// [`Artifact`].
///
/// Decoding is pure byte concatenation: `vocab[id]` already carries each
/// id's full byte image, so there is no merge list to replay in reverse.
#[derive(Clone)]
pub struct Decoder {
    artifact: Arc<Artifact>,
}

impl Decoder {
    pub fn new(artifact: Arc<Artifact>) -> Self {
        Self { artifact }
    }

    /// Decode `ids` into text, replacing malformed UTF-8 with U+FFFD.
    ///
    /// Stops at the first id with no vocabulary entry; everything from
    /// there on is reported via `remaining` rather than decoded.
    pub fn decode(&self, ids: &[TokenId]) -> DecodeResult {
        let mut bytes = Vec::new();
        let mut consumed = 0;
        for &id in ids {
            match self.artifact.vocab.get(id) {
                Some(entry) => {
                    bytes.extend_from_slice(entry);
                    consumed += 1;
                }
                None => break,
            }
        }
        DecodeResult {
            value: String::from_utf8_lossy(&bytes).into_owned(),
            remaining: ids.len() - consumed,
        }
    }

    pub fn artifact(&self) -> &Arc<Artifact> {
        &self.artifact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{MergeList, SpecialTokenMap, Vocabulary};

    fn artifact_with_ab() -> Arc<Artifact> {
        let mut vocab = Vocabulary::seeded::<&str>(&[]);
        vocab.push(b"ab".to_vec());
        let mut merges = MergeList::new();
        merges.insert((97, 98), 256);
        Arc::new(Artifact {
            vocab,
            merges,
            special_token_map: SpecialTokenMap::new(),
        })
    }

    #[test]
    fn test_decode_round_trip() {
        let decoder = Decoder::new(artifact_with_ab());
        let result = decoder.decode(&[256, 32, 256]);
        assert_eq!(result.value, "ab ab");
        assert_eq!(result.remaining, 0);
    }

    #[test]
    fn test_decode_reports_unknown_ids() {
        let decoder = Decoder::new(artifact_with_ab());
        let result = decoder.decode(&[256, 9999]);
        assert_eq!(result.value, "ab");
        assert_eq!(result.remaining, 1);
    }

    #[test]
    fn test_decode_stops_at_first_unresolved_id() {
        let decoder = Decoder::new(artifact_with_ab());
        let result = decoder.decode(&[9999, 256]);
        assert_eq!(result.value, "");
        assert_eq!(result.remaining, 2);
    }

    #[test]
    fn test_decode_lossy_on_malformed_bytes() {
        let mut vocab = Vocabulary::seeded::<&str>(&[]);
        let id = vocab.push(vec![0xff]);
        let artifact = Arc::new(Artifact {
            vocab,
            merges: MergeList::new(),
            special_token_map: SpecialTokenMap::new(),
        });
        let decoder = Decoder::new(artifact);
        let result = decoder.decode(&[id]);
        assert_eq!(result.value, "\u{FFFD}");
        assert_eq!(result.remaining, 0);
    }
}
