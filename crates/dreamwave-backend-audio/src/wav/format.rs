//! WAV file format parameters.

use crate::error::{AudioError, AudioResult};
use crate::pcm::BITS_PER_SAMPLE;

/// Size of the canonical RIFF/WAVE header.
pub const HEADER_LEN: usize = 44;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a 16-bit format, rejecting layouts the engine cannot write.
    pub fn new(channels: u16, sample_rate: u32) -> AudioResult<Self> {
        Self {
            channels,
            sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
        }
        .checked()
    }

    /// Verifies channel count, bit depth, and rate.
    pub(crate) fn checked(self) -> AudioResult<Self> {
        if self.channels != 1 && self.channels != 2 {
            return Err(AudioError::encoding(format!(
                "unsupported channel count {}",
                self.channels
            )));
        }
        if self.bits_per_sample != BITS_PER_SAMPLE {
            return Err(AudioError::encoding(format!(
                "unsupported bit depth {} (expected {})",
                self.bits_per_sample, BITS_PER_SAMPLE
            )));
        }
        if self.sample_rate == 0 {
            return Err(AudioError::encoding("sample rate must be non-zero"));
        }
        Ok(self)
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per sample frame.
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes per second.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}
