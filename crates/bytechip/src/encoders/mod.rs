//! # Encoding

mod encoder;
mod merge_scan_encoder;
mod options;

pub use encoder::{try_encode_bytes, Encoder};
pub use merge_scan_encoder::encode_word;
pub use options::EncoderOptions;
