//! A byte-pair-encoding subword tokenizer.
//!
//! This crate learns a deterministic vocabulary of byte sequences from a
//! UTF-8 text corpus ([`training`]) and applies it to turn arbitrary text
//! into integer token ids and back ([`encoders`], [`decoders`]). Both share
//! a fixed Unicode-aware pre-tokenization step ([`pretokenize`]).
//!
//! ```
//! use bytechip::vocab::{Artifact, MergeList, SpecialTokenMap, Vocabulary};
//! use bytechip::Tokenizer;
//!
//! let mut vocab = Vocabulary::seeded::<&str>(&[]);
//! vocab.push(b"ab".to_vec());
//! let mut merges = MergeList::new();
//! merges.insert((b'a' as u32, b'b' as u32), 256);
//!
//! let tokenizer = Tokenizer::from_artifact(Artifact {
//!     vocab,
//!     merges,
//!     special_token_map: SpecialTokenMap::new(),
//! });
//!
//! let ids = tokenizer.encode("ab").unwrap();
//! assert_eq!(ids, vec![256]);
//! assert_eq!(tokenizer.decode(&ids).value, "ab");
//! ```

pub mod concurrency;
pub mod decoders;
pub mod encoders;
pub mod pretokenize;
#[cfg(feature = "training")]
pub mod training;
pub mod vocab;

mod errors;
mod tokenizer;
mod types;

pub use errors::{BpeError, BpeResult};
pub use tokenizer::{Tokenizer, TokenizerOptions};
pub use types::{CommonHashMap, CommonHashSet, Pair, TokenId};
