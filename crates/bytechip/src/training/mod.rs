//! # Training
//!
//! ```no_run
//! use bytechip::training::{BpeTrainer, PreTokenCounts, TrainerOptions};
//! use bytechip::pretokenize::TextSplitter;
//!
//! let splitter = TextSplitter::with_specials(&["<|endoftext|>"]);
//! let mut counts = PreTokenCounts::new();
//! counts.add_text(&splitter, "the quick brown fox")?;
//!
//! let options = TrainerOptions::new(512).with_special_tokens(&["<|endoftext|>"]);
//! let result = BpeTrainer::new(options).train(&counts)?;
//! # Ok::<(), bytechip::BpeError>(())
//! ```

mod byte_span_buf;
mod chunk_boundaries;
mod corpus;
mod options;
mod pretoken_counter;
mod trainer;

pub use byte_span_buf::ByteSpanBuf;
pub use chunk_boundaries::find_chunk_boundaries;
pub use corpus::{count_corpus, count_corpus_chunked};
#[cfg(feature = "rayon")]
pub use corpus::count_corpus_parallel;
pub use options::TrainerOptions;
pub use pretoken_counter::PreTokenCounts;
pub use trainer::{BpeTrainer, TrainResult};
