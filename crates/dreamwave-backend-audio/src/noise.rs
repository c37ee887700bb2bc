//! Masking sources: seeded white noise and an ambient tone.

use dreamwave_spec::MaskingKind;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::oscillator::ToneOscillator;
use crate::rng::{create_component_rng, create_rng};
use crate::source::SignalSource;

/// Partials of the ambient tone as `(frequency_hz, weight)`: root, fifth, and
/// octave of A2. Weights sum to 0.95.
pub const AMBIENT_PARTIALS: [(f64, f64); 3] = [(110.0, 0.5), (165.0, 0.25), (220.0, 0.2)];

/// Seed derivation keys for the two white-noise channels.
const LEFT_KEY: &str = "masking-left";
const RIGHT_KEY: &str = "masking-right";

/// Generates `sample_count` uniform white-noise samples in `[-1, 1)`.
///
/// The same seed always yields the same samples.
pub fn white_noise(sample_count: usize, seed: u32) -> Vec<f64> {
    let mut rng = create_rng(seed);
    (0..sample_count).map(|_| uniform_sample(&mut rng)).collect()
}

/// Generates `sample_count` samples of the ambient chord.
pub fn ambient_tone(sample_count: usize, sample_rate: u32) -> Vec<f64> {
    let mut chord = AmbientChord::new(sample_rate);
    (0..sample_count).map(|_| chord.next_sample()).collect()
}

#[inline]
fn uniform_sample(rng: &mut Pcg32) -> f64 {
    rng.gen::<f64>() * 2.0 - 1.0
}

#[derive(Debug, Clone)]
struct AmbientChord {
    partials: Vec<(ToneOscillator, f64)>,
}

impl AmbientChord {
    fn new(sample_rate: u32) -> Self {
        Self {
            partials: AMBIENT_PARTIALS
                .iter()
                .map(|&(freq, weight)| (ToneOscillator::new(freq, sample_rate), weight))
                .collect(),
        }
    }

    #[inline]
    fn next_sample(&mut self) -> f64 {
        self.partials
            .iter_mut()
            .map(|(osc, weight)| osc.next_sample() * *weight)
            .sum()
    }
}

#[derive(Debug, Clone)]
enum NoiseState {
    White { left: Pcg32, right: Pcg32 },
    Ambient(AmbientChord),
}

/// Streaming stereo masking source.
///
/// White noise uses an independent stream per channel, each seeded by
/// hashing the caller's seed with a channel key. The ambient tone is the same
/// chord on both channels.
#[derive(Debug, Clone)]
pub struct NoiseSource {
    state: NoiseState,
    sample_rate: u32,
}

impl NoiseSource {
    /// Creates the masking source for `kind`.
    pub fn new(kind: MaskingKind, seed: u32, sample_rate: u32) -> Self {
        match kind {
            MaskingKind::WhiteNoise => Self::white(seed, sample_rate),
            MaskingKind::AmbientTone => Self::ambient(sample_rate),
        }
    }

    /// Creates a decorrelated stereo white-noise source.
    pub fn white(seed: u32, sample_rate: u32) -> Self {
        Self {
            state: NoiseState::White {
                left: create_component_rng(seed, LEFT_KEY),
                right: create_component_rng(seed, RIGHT_KEY),
            },
            sample_rate,
        }
    }

    /// Creates an ambient-tone source.
    pub fn ambient(sample_rate: u32) -> Self {
        Self {
            state: NoiseState::Ambient(AmbientChord::new(sample_rate)),
            sample_rate,
        }
    }
}

impl SignalSource for NoiseSource {
    fn channels(&self) -> u16 {
        2
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn fill(&mut self, block: &mut [f64]) {
        match &mut self.state {
            NoiseState::White { left, right } => {
                for frame in block.chunks_exact_mut(2) {
                    frame[0] = uniform_sample(left);
                    frame[1] = uniform_sample(right);
                }
            }
            NoiseState::Ambient(chord) => {
                for frame in block.chunks_exact_mut(2) {
                    let sample = chord.next_sample();
                    frame[0] = sample;
                    frame[1] = sample;
                }
            }
        }
    }
}
