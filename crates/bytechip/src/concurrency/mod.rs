//! # Parallel Wrappers
//!
//! `rayon`-backed batch encode/decode, gated behind the `rayon` feature.
//! Each wrapper delegates single-item work to the serial implementation and
//! fans batches out across the thread pool, concatenating results in
//! input order.

#![cfg(feature = "rayon")]

use rayon::prelude::*;

use crate::decoders::{DecodeResult, Decoder};
use crate::encoders::Encoder;
use crate::errors::BpeResult;
use crate::types::TokenId;

/// Parallel batch encoding over an [`Encoder`].
#[derive(Clone)]
pub struct ParallelEncoder {
    inner: Encoder,
}

impl ParallelEncoder {
    pub fn new(inner: Encoder) -> Self {
        Self { inner }
    }

    pub fn encode(&self, text: &str) -> BpeResult<Vec<TokenId>> {
        self.inner.encode(text)
    }

    /// Encode each input concurrently; results are returned in input order.
    pub fn encode_batch<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> BpeResult<Vec<Vec<TokenId>>> {
        inputs
            .par_iter()
            .map(|s| self.inner.encode(s.as_ref()))
            .collect()
    }
}

/// Parallel batch decoding over a [`Decoder`].
#[derive(Clone)]
pub struct ParallelDecoder {
    inner: Decoder,
}

impl ParallelDecoder {
    pub fn new(inner: Decoder) -> Self {
        Self { inner }
    }

    pub fn decode(&self, ids: &[TokenId]) -> DecodeResult {
        self.inner.decode(ids)
    }

    /// Decode each id sequence concurrently; results are returned in input order.
    pub fn decode_batch(&self, batches: &[Vec<TokenId>]) -> Vec<DecodeResult> {
        batches.par_iter().map(|ids| self.inner.decode(ids)).collect()
    }
}
