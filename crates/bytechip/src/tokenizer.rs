//! # Tokenizer
//!
//! The public facade: a trained [`Artifact`] plus the encoder/decoder pair
//! built on top of it.

use std::path::Path;
use std::sync::Arc;

use crate::decoders::{DecodeResult, Decoder};
use crate::encoders::{Encoder, EncoderOptions};
use crate::errors::BpeResult;
use crate::types::TokenId;
use crate::vocab::Artifact;

/// Builder for constructing or loading a [`Tokenizer`].
///
/// The special-token set and merge rules live in the trained [`Artifact`]
/// itself; what's left to configure here is the ambient encoding behavior
/// not fixed by training, currently just batch parallelism.
#[derive(Debug, Clone, Default)]
pub struct TokenizerOptions {
    encoder: EncoderOptions,
}

impl TokenizerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable `rayon`-backed parallel batch encoding.
    pub fn with_parallel_encoding(mut self, parallel: bool) -> Self {
        self.encoder = self.encoder.with_parallel(parallel);
        self
    }

    pub fn encoder_options(&self) -> &EncoderOptions {
        &self.encoder
    }
}

/// A trained vocabulary plus the encoder/decoder pair that uses it.
///
/// Cheap to clone: the artifact is `Arc`-shared, so cloning a `Tokenizer`
/// never duplicates the vocabulary or merge list.
#[derive(Clone)]
pub struct Tokenizer {
    artifact: Arc<Artifact>,
    encoder: Encoder,
    decoder: Decoder,
}

impl Tokenizer {
    /// Wrap an already-built artifact (e.g. the output of training).
    pub fn from_artifact(artifact: Artifact) -> Self {
        Self::from_artifact_with_options(artifact, TokenizerOptions::default())
    }

    /// Wrap an already-built artifact, governing batch-encoding behavior
    /// with `options`.
    pub fn from_artifact_with_options(artifact: Artifact, options: TokenizerOptions) -> Self {
        let artifact = Arc::new(artifact);
        Self {
            artifact: artifact.clone(),
            encoder: Encoder::with_options(artifact.clone(), options.encoder_options().clone()),
            decoder: Decoder::new(artifact),
        }
    }

    /// Load a previously saved artifact from `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> BpeResult<Self> {
        Self::load_with_options(path, TokenizerOptions::default())
    }

    /// Load a previously saved artifact from `path`, governing batch-encoding
    /// behavior with `options`.
    pub fn load_with_options<P: AsRef<Path>>(path: P, options: TokenizerOptions) -> BpeResult<Self> {
        Ok(Self::from_artifact_with_options(Artifact::load(path)?, options))
    }

    /// Save the underlying artifact to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> BpeResult<()> {
        self.artifact.save(path)
    }

    pub fn encode(&self, text: &str) -> BpeResult<Vec<TokenId>> {
        self.encoder.encode(text)
    }

    pub fn encode_batch<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> BpeResult<Vec<Vec<TokenId>>> {
        self.encoder.encode_batch(inputs)
    }

    pub fn decode(&self, ids: &[TokenId]) -> DecodeResult {
        self.decoder.decode(ids)
    }

    pub fn vocab_size(&self) -> usize {
        self.artifact.vocab.len()
    }

    pub fn artifact(&self) -> &Arc<Artifact> {
        &self.artifact
    }

    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }
}
