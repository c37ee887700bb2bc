//! Deterministic WAV encoding and decoding.
//!
//! This module writes canonical 16-bit PCM WAV files: a 44-byte header with
//! no timestamps or optional chunks, followed by interleaved little-endian
//! samples. The same buffer always encodes to the same bytes.

mod asset;
mod decoder;
mod encoder;
mod format;

#[cfg(test)]
mod tests;

pub use asset::{WavAsset, MIME_TYPE};
pub use decoder::{compute_pcm_hash, decode, extract_pcm_data, WavHeader};
pub use encoder::{dequantize, encode, quantize};
pub use format::{WavFormat, HEADER_LEN};
