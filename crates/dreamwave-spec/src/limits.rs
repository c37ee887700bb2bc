//! Parameter bounds and defaults.
//!
//! These mirror the limits the journaling service enforces on its audio
//! endpoints. Validation in [`crate::validation`] is the only consumer that
//! should compare against them.

/// Lowest accepted carrier frequency in Hz.
pub const MIN_CARRIER_HZ: f64 = 20.0;
/// Highest accepted carrier frequency in Hz.
pub const MAX_CARRIER_HZ: f64 = 20_000.0;

/// Lowest accepted beat frequency in Hz.
pub const MIN_BEAT_HZ: f64 = 0.5;
/// Highest accepted beat frequency in Hz.
pub const MAX_BEAT_HZ: f64 = 40.0;

/// Shortest accepted asset duration (1 minute).
pub const MIN_DURATION_SECONDS: f64 = 60.0;
/// Longest accepted asset duration (120 minutes).
pub const MAX_DURATION_SECONDS: f64 = 7_200.0;

/// Gains are relative to full scale and never positive.
pub const MAX_GAIN_DBFS: f64 = 0.0;

/// Default output gain for binaural beats.
pub const DEFAULT_BINAURAL_GAIN_DBFS: f64 = -6.0;
/// Default gain of the embedded affirmation track.
pub const DEFAULT_SUBLIMINAL_GAIN_DBFS: f64 = -30.0;
/// Default gain of the masking track.
pub const DEFAULT_MASKING_GAIN_DBFS: f64 = -10.0;

/// Affirmation text length bounds, in characters.
pub const MIN_AFFIRMATION_CHARS: usize = 5;
/// See [`MIN_AFFIRMATION_CHARS`].
pub const MAX_AFFIRMATION_CHARS: usize = 500;

/// Output sample rate used when no configuration is given.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
/// Sample rates the engine renders at.
pub const ALLOWED_SAMPLE_RATES: &[u32] = &[22_050, 44_100, 48_000, 96_000];

/// Default render block length.
pub const DEFAULT_BLOCK_SECONDS: f64 = 1.0;
/// Shortest accepted render block.
pub const MIN_BLOCK_SECONDS: f64 = 0.01;
/// Longest accepted render block.
pub const MAX_BLOCK_SECONDS: f64 = 60.0;
