//! Interleaved 16-bit PCM buffers.

use crate::clock::SampleClock;
use crate::error::{AudioError, AudioResult};
use crate::wav::{dequantize, quantize};

/// Bit depth of every buffer the engine produces or accepts.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Interleaved 16-bit PCM audio.
///
/// The constructor guarantees `channels` is 1 or 2, the sample rate is
/// non-zero, and the sample count is a whole number of frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmBuffer {
    sample_rate: u32,
    channels: u16,
    samples: Vec<i16>,
}

/// A rendered affirmation handed in by a speech collaborator.
pub type SpeechTrack = PcmBuffer;

impl PcmBuffer {
    /// Creates a buffer from interleaved samples.
    pub fn new(sample_rate: u32, channels: u16, samples: Vec<i16>) -> AudioResult<Self> {
        check_layout(sample_rate, channels)?;
        if samples.len() % channels as usize != 0 {
            return Err(AudioError::encoding(format!(
                "{} samples is not a whole number of {}-channel frames",
                samples.len(),
                channels
            )));
        }
        Ok(Self {
            sample_rate,
            channels,
            samples,
        })
    }

    /// Creates a mono buffer.
    pub fn mono(sample_rate: u32, samples: Vec<i16>) -> AudioResult<Self> {
        Self::new(sample_rate, 1, samples)
    }

    /// Creates an empty buffer with room for `frames` frames.
    pub fn with_capacity(sample_rate: u32, channels: u16, frames: usize) -> AudioResult<Self> {
        check_layout(sample_rate, channels)?;
        let len = frames.checked_mul(channels as usize).ok_or_else(|| {
            AudioError::overflow(format!("{} frames does not fit in memory", frames))
        })?;
        Ok(Self {
            sample_rate,
            channels,
            samples: Vec::with_capacity(len),
        })
    }

    /// Creates a silent buffer of `frames` frames.
    pub fn silent(sample_rate: u32, channels: u16, frames: usize) -> AudioResult<Self> {
        let mut buffer = Self::with_capacity(sample_rate, channels, frames)?;
        buffer.samples.resize(frames * channels as usize, 0);
        Ok(buffer)
    }

    /// Quantizes interleaved float samples into a new buffer.
    pub fn from_f64(sample_rate: u32, channels: u16, samples: &[f64]) -> AudioResult<Self> {
        Self::new(
            sample_rate,
            channels,
            samples.iter().map(|&s| quantize(s)).collect(),
        )
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Channel count (1 or 2).
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Always 16.
    pub fn bits_per_sample(&self) -> u16 {
        BITS_PER_SAMPLE
    }

    /// Interleaved samples.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Consumes the buffer, returning its samples.
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }

    /// Number of frames (samples per channel).
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Returns true if the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration derived from the frame count.
    pub fn duration_seconds(&self) -> f64 {
        SampleClock::new(self.sample_rate).duration_of(self.frame_count() as u64)
    }

    /// Samples of frame `index`, one per channel.
    pub fn frame(&self, index: usize) -> &[i16] {
        let ch = self.channels as usize;
        &self.samples[index * ch..(index + 1) * ch]
    }

    /// Extracts one channel as floats in `[-1, 1]`.
    pub fn channel_f64(&self, channel: u16) -> Vec<f64> {
        self.samples
            .iter()
            .skip(channel as usize)
            .step_by(self.channels as usize)
            .map(|&s| dequantize(s))
            .collect()
    }

    /// Quantizes an interleaved float block and appends it.
    pub(crate) fn push_block(&mut self, block: &[f64]) {
        debug_assert_eq!(block.len() % self.channels as usize, 0);
        self.samples.extend(block.iter().map(|&s| quantize(s)));
    }
}

fn check_layout(sample_rate: u32, channels: u16) -> AudioResult<()> {
    if channels != 1 && channels != 2 {
        return Err(AudioError::encoding(format!(
            "unsupported channel count {} (expected 1 or 2)",
            channels
        )));
    }
    if sample_rate == 0 {
        return Err(AudioError::encoding("sample rate must be non-zero"));
    }
    Ok(())
}
