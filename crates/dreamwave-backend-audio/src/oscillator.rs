//! Sine oscillator with continuous phase.
//!
//! Phase is accumulated sample by sample and wrapped into `[0, 2π)`, so a
//! render that continues from a previous render's end phase is identical to
//! one long render. Concatenated segments never click.

use std::f64::consts::TAU;

use crate::clock::phase_increment;

/// A running sine oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneOscillator {
    phase: f64,
    increment: f64,
}

impl ToneOscillator {
    /// Creates an oscillator starting at phase zero.
    pub fn new(frequency_hz: f64, sample_rate: u32) -> Self {
        Self::with_phase(frequency_hz, sample_rate, 0.0)
    }

    /// Creates an oscillator starting at `start_phase` (radians, any value).
    pub fn with_phase(frequency_hz: f64, sample_rate: u32, start_phase: f64) -> Self {
        Self {
            phase: wrap_phase(start_phase),
            increment: wrap_phase(phase_increment(frequency_hz, sample_rate)),
        }
    }

    /// Current phase in `[0, 2π)`.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Produces one sample and advances the phase.
    #[inline]
    pub fn next_sample(&mut self) -> f64 {
        let sample = self.phase.sin();
        self.phase += self.increment;
        if self.phase >= TAU {
            self.phase -= TAU;
        }
        sample
    }

    /// Fills `out` with consecutive samples.
    pub fn fill(&mut self, out: &mut [f64]) {
        for sample in out.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// Renders `sample_count` samples of a sine at `frequency_hz`.
///
/// Returns the samples (in `[-1, 1]`) and the phase following the last one,
/// which can be passed as `start_phase` to continue seamlessly.
pub fn render(
    frequency_hz: f64,
    sample_count: usize,
    sample_rate: u32,
    start_phase: f64,
) -> (Vec<f64>, f64) {
    let mut osc = ToneOscillator::with_phase(frequency_hz, sample_rate, start_phase);
    let mut samples = vec![0.0; sample_count];
    osc.fill(&mut samples);
    (samples, osc.phase())
}

#[inline]
fn wrap_phase(phase: f64) -> f64 {
    let wrapped = phase.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_starts_at_zero_and_stays_in_range() {
        let (samples, _) = render(440.0, 44_100, 44_100, 0.0);
        assert_eq!(samples.len(), 44_100);
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
        let peak = samples.iter().fold(0.0_f64, |a, s| a.max(s.abs()));
        assert!(peak > 0.999);
    }

    #[test]
    fn test_quarter_period_reaches_peak() {
        // 441 Hz at 44.1 kHz: 100 samples per period.
        let (samples, _) = render(441.0, 101, 44_100, 0.0);
        assert!((samples[25] - 1.0).abs() < 1e-9);
        assert!((samples[75] + 1.0).abs() < 1e-9);
        assert!(samples[50].abs() < 1e-9);
    }

    #[test]
    fn test_concatenated_renders_match_single_render() {
        let (whole, whole_end) = render(195.0, 10_000, 44_100, 0.0);

        let (first, mid) = render(195.0, 3_333, 44_100, 0.0);
        let (second, end) = render(195.0, 10_000 - 3_333, 44_100, mid);

        let mut joined = first;
        joined.extend(second);
        assert_eq!(joined, whole);
        assert_eq!(end, whole_end);
    }

    #[test]
    fn test_phase_stays_wrapped_over_long_runs() {
        let mut osc = ToneOscillator::new(19_999.0, 44_100);
        for _ in 0..1_000_000 {
            osc.next_sample();
            assert!((0.0..TAU).contains(&osc.phase()));
        }
    }

    #[test]
    fn test_start_phase_is_wrapped() {
        let osc = ToneOscillator::with_phase(100.0, 44_100, -std::f64::consts::FRAC_PI_2);
        assert!((osc.phase() - 1.5 * std::f64::consts::PI).abs() < 1e-12);
        let (samples, _) = render(100.0, 1, 44_100, 5.0 * TAU + 0.25);
        assert!((samples[0] - 0.25_f64.sin()).abs() < 1e-9);
    }

    #[test]
    fn test_zero_length_render_returns_start_phase() {
        let (samples, end) = render(440.0, 0, 44_100, 1.0);
        assert!(samples.is_empty());
        assert_eq!(end, 1.0);
    }
}
