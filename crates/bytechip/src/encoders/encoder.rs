//! # Encoder

use std::sync::Arc;

use crate::encoders::merge_scan_encoder::encode_word;
use crate::encoders::EncoderOptions;
use crate::errors::{BpeError, BpeResult};
use crate::pretokenize::{Span, TextSplitter};
use crate::types::TokenId;
use crate::vocab::Artifact;

/// Converts UTF-8 text into a sequence of [`TokenId`]s using a trained
/// [`Artifact`].
///
/// Cheap to clone: the artifact is held behind an `Arc`, so any number of
/// encoders may run concurrently against the same trained vocabulary.
#[derive(Clone)]
pub struct Encoder {
    artifact: Arc<Artifact>,
    splitter: TextSplitter,
    options: EncoderOptions,
}

impl Encoder {
    pub fn new(artifact: Arc<Artifact>) -> Self {
        Self::with_options(artifact, EncoderOptions::default())
    }

    /// Build an encoder whose batch/line behavior is governed by `options`.
    pub fn with_options(artifact: Arc<Artifact>, options: EncoderOptions) -> Self {
        let literals: Vec<&str> = artifact.special_token_map.literals().collect();
        let splitter = TextSplitter::with_specials(&literals);
        Self {
            artifact,
            splitter,
            options,
        }
    }

    /// Encode `text`, appending ids to `out`.
    pub fn encode_append(&self, text: &str, out: &mut Vec<TokenId>) -> BpeResult<()> {
        for span in self.splitter.split(text)? {
            match span {
                Span::Special(literal) => {
                    let id = self
                        .artifact
                        .special_token_map
                        .lookup(literal)
                        .expect("splitter only emits literals it was built from");
                    out.push(id);
                }
                Span::Word(word) => {
                    out.extend(encode_word(&self.artifact.merges, word.as_bytes()));
                }
            }
        }
        Ok(())
    }

    /// Encode `text` into a fresh vector.
    pub fn encode(&self, text: &str) -> BpeResult<Vec<TokenId>> {
        let mut out = Vec::new();
        self.encode_append(text, &mut out)?;
        Ok(out)
    }

    /// Encode each line of `text` independently and concatenate the results
    /// in input order; equivalent to [`Encoder::encode`] on the whole text
    /// provided no pre-token straddles a line boundary.
    pub fn encode_lines(&self, text: &str) -> BpeResult<Vec<TokenId>> {
        let mut out = Vec::new();
        for line in text.lines() {
            self.encode_append(line, &mut out)?;
        }
        Ok(out)
    }

    /// Encode a batch of independent inputs, returning one id vector each.
    ///
    /// Dispatches to a `rayon`-parallel scan when [`EncoderOptions::parallel`]
    /// is set and the `rayon` feature is enabled; otherwise encodes serially.
    /// Results are always returned in input order.
    pub fn encode_batch<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> BpeResult<Vec<Vec<TokenId>>> {
        if self.options.parallel() {
            return self.encode_batch_parallel(inputs);
        }
        inputs.iter().map(|s| self.encode(s.as_ref())).collect()
    }

    #[cfg(feature = "rayon")]
    fn encode_batch_parallel<S: AsRef<str> + Sync>(
        &self,
        inputs: &[S],
    ) -> BpeResult<Vec<Vec<TokenId>>> {
        use rayon::prelude::*;
        inputs.par_iter().map(|s| self.encode(s.as_ref())).collect()
    }

    #[cfg(not(feature = "rayon"))]
    fn encode_batch_parallel<S: AsRef<str> + Sync>(
        &self,
        inputs: &[S],
    ) -> BpeResult<Vec<Vec<TokenId>>> {
        inputs.iter().map(|s| self.encode(s.as_ref())).collect()
    }

    pub fn artifact(&self) -> &Arc<Artifact> {
        &self.artifact
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }
}

/// Validate that `text` is well-formed UTF-8 before encoding it.
///
/// The encode path never tolerates invalid UTF-8 the way corpus counting
/// does; malformed input here is a caller error, not a statistics nuisance.
pub fn try_encode_bytes(encoder: &Encoder, bytes: &[u8]) -> BpeResult<Vec<TokenId>> {
    let text = std::str::from_utf8(bytes).map_err(BpeError::Encoding)?;
    encoder.encode(text)
}
