//! # Common Types

/// The integer type used for token identifiers.
///
/// Ids `0..=255` are reserved for raw bytes, `256..256+specials` for special
/// tokens, and everything above that is allocated by the trainer, one id per
/// learned merge, in merge order.
pub type TokenId = u32;

/// An ordered pair of token ids, the unit the trainer and encoder merge on.
pub type Pair = (TokenId, TokenId);

/// Hash map alias used throughout the crate.
///
/// `ahash` trades a (small, documented) DoS resistance loss for materially
/// faster hashing of the integer and byte-string keys this crate is built
/// around.
pub type CommonHashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;

/// Hash set alias used throughout the crate.
pub type CommonHashSet<V> = std::collections::HashSet<V, ahash::RandomState>;
