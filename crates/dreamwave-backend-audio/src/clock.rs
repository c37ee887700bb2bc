//! Sample clock: durations and frequencies expressed in samples.
//!
//! The integer frame count is the source of truth for every render. Durations
//! reported back to callers are derived from it, never accumulated.

use std::f64::consts::TAU;

use crate::error::{AudioError, AudioResult};

/// Largest frame count the engine renders.
///
/// A stereo 16-bit data chunk of this many frames still fits the 32-bit RIFF
/// size fields.
pub const MAX_FRAMES: u64 = (u32::MAX as u64 - 36) / 4;

/// Converts between time and samples at a fixed rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleClock {
    sample_rate: u32,
}

impl SampleClock {
    /// Creates a clock for the given sample rate.
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of frames in `duration_seconds`, rounded to the nearest frame.
    pub fn sample_count(&self, duration_seconds: f64) -> AudioResult<u64> {
        sample_count(duration_seconds, self.sample_rate)
    }

    /// Duration of `frames` frames in seconds.
    pub fn duration_of(&self, frames: u64) -> f64 {
        frames as f64 / self.sample_rate as f64
    }

    /// Phase advance per sample for a tone at `frequency_hz`.
    pub fn phase_increment(&self, frequency_hz: f64) -> f64 {
        phase_increment(frequency_hz, self.sample_rate)
    }
}

/// Number of frames in `duration_seconds` at `sample_rate`, rounded to the
/// nearest frame.
///
/// Negative, non-finite, or oversized results are a [`AudioError::BufferOverflow`]:
/// validated parameters never produce them.
pub fn sample_count(duration_seconds: f64, sample_rate: u32) -> AudioResult<u64> {
    if sample_rate == 0 {
        return Err(AudioError::overflow("sample rate is zero"));
    }
    let exact = duration_seconds * sample_rate as f64;
    if !exact.is_finite() || exact < 0.0 {
        return Err(AudioError::overflow(format!(
            "duration {} s at {} Hz gives no valid frame count",
            duration_seconds, sample_rate
        )));
    }
    let frames = exact.round();
    if frames > MAX_FRAMES as f64 {
        return Err(AudioError::overflow(format!(
            "{} frames exceeds the limit of {}",
            frames, MAX_FRAMES
        )));
    }
    Ok(frames as u64)
}

/// Phase advance per sample, `2π·f / rate`.
#[inline]
pub fn phase_increment(frequency_hz: f64, sample_rate: u32) -> f64 {
    TAU * frequency_hz / sample_rate as f64
}

/// Converts a frame count to `usize`, failing on platforms where it does not fit.
pub(crate) fn frames_to_len(frames: u64, channels: u16) -> AudioResult<usize> {
    frames
        .checked_mul(channels as u64)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| {
            AudioError::overflow(format!(
                "{} frames x {} channels does not fit in memory",
                frames, channels
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_exact() {
        assert_eq!(sample_count(60.0, 44_100).unwrap(), 2_646_000);
        assert_eq!(sample_count(7_200.0, 44_100).unwrap(), 317_520_000);
        assert_eq!(sample_count(0.0, 44_100).unwrap(), 0);
    }

    #[test]
    fn test_sample_count_rounds_to_nearest() {
        // 0.5 / 44100 s is exactly half a frame past 1 s.
        assert_eq!(sample_count(1.0 + 0.4 / 44_100.0, 44_100).unwrap(), 44_100);
        assert_eq!(sample_count(1.0 + 0.6 / 44_100.0, 44_100).unwrap(), 44_101);
    }

    #[test]
    fn test_sample_count_rejects_bad_durations() {
        assert!(matches!(
            sample_count(-1.0, 44_100),
            Err(AudioError::BufferOverflow { .. })
        ));
        assert!(sample_count(f64::NAN, 44_100).is_err());
        assert!(sample_count(f64::INFINITY, 44_100).is_err());
        assert!(sample_count(1.0e9, 96_000).is_err());
        assert!(sample_count(1.0, 0).is_err());
    }

    #[test]
    fn test_max_frames_fits_riff_size() {
        let data_size = MAX_FRAMES * 4;
        assert!(36 + data_size <= u32::MAX as u64);
    }

    #[test]
    fn test_phase_increment() {
        let inc = phase_increment(441.0, 44_100);
        assert!((inc - TAU / 100.0).abs() < 1e-15);
        let clock = SampleClock::new(48_000);
        assert!((clock.phase_increment(48_000.0) - TAU).abs() < 1e-12);
    }

    #[test]
    fn test_duration_derived_from_frames() {
        let clock = SampleClock::new(44_100);
        let frames = clock.sample_count(300.0).unwrap();
        assert_eq!(clock.duration_of(frames), 300.0);
    }

    #[test]
    fn test_frames_to_len() {
        assert_eq!(frames_to_len(10, 2).unwrap(), 20);
        assert!(frames_to_len(u64::MAX, 2).is_err());
    }
}
