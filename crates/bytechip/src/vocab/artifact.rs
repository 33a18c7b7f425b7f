//! # Tokenizer Artifact
//!
//! The serialized result of training: vocabulary, ordered merges, and the
//! special-token map, bundled as a single opaque blob.

use std::path::Path;

use crate::errors::{BpeError, BpeResult};
use crate::vocab::{MergeList, SpecialTokenMap, Vocabulary};

/// The trained artifact: everything an encoder/decoder needs, and nothing
/// an encoder/decoder can mutate.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Artifact {
    pub vocab: Vocabulary,
    pub merges: MergeList,
    #[serde(default)]
    pub special_token_map: SpecialTokenMap,
}

impl Artifact {
    /// Write the artifact to `path` as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> BpeResult<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Read and validate an artifact previously written by [`Artifact::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> BpeResult<Self> {
        let file = std::fs::File::open(path)?;
        let artifact: Artifact = serde_json::from_reader(file)?;
        artifact.validate()?;
        Ok(artifact)
    }

    pub fn to_json(&self) -> BpeResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(s: &str) -> BpeResult<Self> {
        let artifact: Artifact = serde_json::from_str(s)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Check that `vocab`, `merges`, and `special_token_map` are mutually
    /// consistent: every merge target's bytes equal the concatenation of its
    /// two sources, and every special token's bytes match its vocab entry.
    pub fn validate(&self) -> BpeResult<()> {
        for ((a, b), c) in self.merges.iter_in_order() {
            let (bytes_a, bytes_b) = match (self.vocab.get(a), self.vocab.get(b)) {
                (Some(ba), Some(bb)) => (ba, bb),
                _ => {
                    return Err(BpeError::VocabConflict(format!(
                        "merge ({a}, {b}) -> {c} references an id outside the vocabulary"
                    )))
                }
            };
            let mut expected = Vec::with_capacity(bytes_a.len() + bytes_b.len());
            expected.extend_from_slice(bytes_a);
            expected.extend_from_slice(bytes_b);

            match self.vocab.get(c) {
                Some(actual) if actual == expected.as_slice() => {}
                Some(_) => {
                    return Err(BpeError::VocabConflict(format!(
                        "vocab[{c}] does not equal the concatenation of ({a}, {b})"
                    )))
                }
                None => {
                    return Err(BpeError::VocabConflict(format!(
                        "merge target {c} has no vocabulary entry"
                    )))
                }
            }
        }

        for (literal, id) in self.special_token_map.iter() {
            match self.vocab.get(id) {
                Some(bytes) if bytes == literal.as_bytes() => {}
                _ => {
                    return Err(BpeError::VocabConflict(format!(
                        "special token {literal:?} at id {id} does not match its vocab entry"
                    )))
                }
            }
        }

        Ok(())
    }
}
