//! Binaural beat composition.
//!
//! The left ear hears `carrier - beat/2` and the right ear `carrier + beat/2`,
//! so the pair averages to the carrier and differs by exactly the beat
//! frequency. Both channels get the same gain; any interaural level
//! difference would weaken the effect.

use crate::error::AudioResult;
use crate::oscillator::ToneOscillator;
use crate::pcm::PcmBuffer;
use crate::render::{render_source, RenderOutput};
use crate::source::SignalSource;

/// Stereo pair of oscillators split around a carrier.
#[derive(Debug, Clone)]
pub struct BinauralSource {
    left: ToneOscillator,
    right: ToneOscillator,
    sample_rate: u32,
}

impl BinauralSource {
    /// Creates the oscillator pair. Frequencies are trusted to be validated.
    pub fn new(carrier_hz: f64, beat_hz: f64, sample_rate: u32) -> Self {
        let (left_hz, right_hz) = split_frequencies(carrier_hz, beat_hz);
        Self {
            left: ToneOscillator::new(left_hz, sample_rate),
            right: ToneOscillator::new(right_hz, sample_rate),
            sample_rate,
        }
    }
}

impl SignalSource for BinauralSource {
    fn channels(&self) -> u16 {
        2
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn fill(&mut self, block: &mut [f64]) {
        for frame in block.chunks_exact_mut(2) {
            frame[0] = self.left.next_sample();
            frame[1] = self.right.next_sample();
        }
    }
}

/// Left and right ear frequencies for a carrier and beat.
pub fn split_frequencies(carrier_hz: f64, beat_hz: f64) -> (f64, f64) {
    let half = beat_hz / 2.0;
    (carrier_hz - half, carrier_hz + half)
}

/// Renders binaural beats in fixed-size blocks.
#[derive(Debug, Clone, Copy)]
pub struct BinauralComposer {
    block_frames: usize,
}

impl BinauralComposer {
    /// Creates a composer rendering `block_frames` frames per block.
    pub fn new(block_frames: usize) -> Self {
        Self {
            block_frames: block_frames.max(1),
        }
    }

    /// Renders `sample_count` stereo frames.
    pub fn render(
        &self,
        carrier_hz: f64,
        beat_hz: f64,
        sample_count: u64,
        sample_rate: u32,
        gain_dbfs: f64,
    ) -> AudioResult<RenderOutput> {
        tracing::debug!(
            carrier_hz,
            beat_hz,
            sample_count,
            sample_rate,
            gain_dbfs,
            "composing binaural beat"
        );
        let mut source = BinauralSource::new(carrier_hz, beat_hz, sample_rate);
        render_source(&mut source, sample_count, gain_dbfs, self.block_frames)
    }
}

/// Renders a stereo binaural buffer using one-second blocks.
pub fn compose(
    carrier_hz: f64,
    beat_hz: f64,
    sample_count: u64,
    sample_rate: u32,
    gain_dbfs: f64,
) -> AudioResult<PcmBuffer> {
    let composer = BinauralComposer::new(sample_rate as usize);
    Ok(composer
        .render(carrier_hz, beat_hz, sample_count, sample_rate, gain_dbfs)?
        .pcm)
}
