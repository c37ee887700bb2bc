//! The encoded asset handed to storage.

use crate::clock::SampleClock;
use crate::error::AudioResult;
use crate::pcm::PcmBuffer;

use super::decoder::decode;
use super::encoder::encode;
use super::format::{WavFormat, HEADER_LEN};

/// MIME type declared for every asset.
pub const MIME_TYPE: &str = "audio/wav";

/// A finished WAV file.
///
/// Length and duration are always derived from the encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavAsset {
    bytes: Vec<u8>,
    format: WavFormat,
    clipped_samples: u64,
}

impl WavAsset {
    /// Encodes a PCM buffer, recording how many samples clipped while it was rendered.
    pub fn from_pcm(buffer: PcmBuffer, clipped_samples: u64) -> AudioResult<Self> {
        let format = WavFormat::new(buffer.channels(), buffer.sample_rate())?;
        let bytes = encode(buffer)?;
        Ok(Self {
            bytes,
            format,
            clipped_samples,
        })
    }

    /// The complete WAV file.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the asset, returning the WAV file.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Always `audio/wav`.
    pub fn mime_type(&self) -> &'static str {
        MIME_TYPE
    }

    /// Total file size in bytes.
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// The sample data, without the header.
    pub fn pcm_data(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }

    /// Audio format of the file.
    pub fn format(&self) -> WavFormat {
        self.format
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate
    }

    /// Channel count.
    pub fn channels(&self) -> u16 {
        self.format.channels
    }

    /// Frames in the data chunk.
    pub fn frame_count(&self) -> u64 {
        (self.pcm_data().len() / self.format.block_align() as usize) as u64
    }

    /// Duration derived from the frame count.
    pub fn duration_seconds(&self) -> f64 {
        SampleClock::new(self.format.sample_rate).duration_of(self.frame_count())
    }

    /// Samples hard-limited to full scale while rendering.
    pub fn clipped_samples(&self) -> u64 {
        self.clipped_samples
    }

    /// BLAKE3 hex digest of the sample data.
    pub fn pcm_hash(&self) -> String {
        blake3::hash(self.pcm_data()).to_hex().to_string()
    }

    /// Decodes the file back into a PCM buffer.
    pub fn decode(&self) -> AudioResult<PcmBuffer> {
        decode(&self.bytes)
    }
}
