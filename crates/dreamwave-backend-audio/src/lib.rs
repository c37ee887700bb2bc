//! Dreamwave Audio Backend
//!
//! This crate renders the two kinds of Dreamwave assets as 16-bit PCM WAV
//! files held in memory:
//!
//! - **Binaural beats** - a stereo pair of sines whose frequencies differ by
//!   the beat frequency
//! - **Subliminal tracks** - a quiet speech track centered over white noise or
//!   an ambient tone
//!
//! # Determinism
//!
//! Rendering is deterministic. Identical parameters, configuration, and seed
//! produce byte-identical WAV files. White noise uses PCG32 with per-channel
//! seeds derived via BLAKE3 hashing.
//!
//! # Memory
//!
//! Audio is rendered in fixed-size blocks (one second by default). Floating
//! point samples only exist for the current block; the accumulated output is
//! the quantized `i16` buffer.
//!
//! # Example
//!
//! ```no_run
//! use dreamwave_backend_audio::generate_binaural_beat;
//! use dreamwave_spec::AudioParameters;
//!
//! let asset = generate_binaural_beat(&AudioParameters::new(200.0, 10.0, 60.0))?;
//! assert_eq!(asset.mime_type(), "audio/wav");
//! std::fs::write("theta.wav", asset.bytes())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`generate`] - [`Synthesizer`] and the entry points
//! - [`clock`] - Sample counts and phase increments
//! - [`oscillator`] - Phase-continuous sine oscillator
//! - [`noise`] - Masking sources
//! - [`gain`] - dBFS conversion, gain, and clamping
//! - [`binaural`] - Binaural beat composer
//! - [`mixer`] - Speech over masking mixer
//! - [`wav`] - WAV encoding and decoding
//! - [`speech`] - Pluggable speech sources
//! - [`analysis`] - Spectral and level measurements
//! - [`rng`] - Deterministic RNG with seed derivation

pub mod analysis;
pub mod binaural;
pub mod clock;
pub mod error;
pub mod gain;
pub mod generate;
pub mod mixer;
pub mod noise;
pub mod oscillator;
pub mod pcm;
pub mod render;
pub mod resample;
pub mod rng;
pub mod source;
pub mod speech;
pub mod wav;

// Re-export main types at crate root
pub use binaural::{compose, BinauralComposer};
pub use clock::{SampleClock, MAX_FRAMES};
pub use error::{AudioError, AudioResult};
pub use gain::{db_to_linear, GainStage};
pub use generate::{generate_binaural_beat, generate_subliminal_audio, Synthesizer};
pub use mixer::{mix, TrackMixer};
pub use noise::NoiseSource;
pub use oscillator::ToneOscillator;
pub use pcm::{PcmBuffer, SpeechTrack};
pub use render::RenderOutput;
pub use resample::resample_linear;
pub use source::SignalSource;
pub use speech::{PrerenderedSpeech, SilentSpeech, SpeechError, SpeechSource};
pub use wav::{encode, WavAsset, MIME_TYPE};
