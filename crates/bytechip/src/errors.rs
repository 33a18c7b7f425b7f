//! # Error Types

/// Errors from bytechip operations.
#[derive(Debug, thiserror::Error)]
pub enum BpeError {
    /// Requested vocab size is below the floor (256 + number of special tokens).
    #[error("vocab size ({size}) must be >= {floor} (256 bytes + {specials} special tokens)")]
    VocabSizeTooSmall {
        /// The vocab size that was requested.
        size: usize,
        /// The minimum admissible vocab size.
        floor: usize,
        /// The number of special tokens folded into `floor`.
        specials: usize,
    },

    /// A special token string was registered more than once.
    #[error("duplicate special token: {0:?}")]
    DuplicateSpecialToken(String),

    /// The artifact's vocab/merges/special-token-map are mutually inconsistent.
    #[error("corrupt tokenizer artifact: {0}")]
    VocabConflict(String),

    /// I/O error reading or writing a corpus or artifact file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The encode path received input that was not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Failure to parse a serialized artifact.
    #[error("failed to parse tokenizer artifact: {0}")]
    Parse(#[from] serde_json::Error),

    /// A worker thread failed during parallel pre-tokenization or encoding.
    #[error("worker failed: {0}")]
    Worker(String),
}

/// Result type for bytechip operations.
pub type BpeResult<T> = Result<T, BpeError>;
