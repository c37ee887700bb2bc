//! Spectral and level measurements on rendered PCM.
//!
//! Used to check rendered assets: the dominant frequency of each ear of a
//! binaural beat, and peak/RMS levels after gain staging.

use std::f64::consts::PI;

use rustfft::{num_complex::Complex, FftPlanner};

use crate::pcm::PcmBuffer;

/// Level reported for silent input, in dBFS.
pub const SILENCE_DBFS: f64 = -100.0;

/// Largest FFT used for frequency estimation.
const MAX_FFT_SIZE: usize = 65_536;

/// Shortest input for which a frequency is reported.
const MIN_FFT_INPUT: usize = 64;

/// Bins below this frequency are ignored (DC and subsonic content).
const MIN_FREQUENCY_HZ: f64 = 20.0;

/// Estimates the strongest frequency in `samples`.
///
/// Uses up to the first 65536 samples with a Hann window and refines the peak
/// bin by parabolic interpolation over log magnitudes. Returns 0.0 for input
/// shorter than 64 samples or without spectral content.
pub fn dominant_frequency(samples: &[f64], sample_rate: u32) -> f64 {
    if samples.len() < MIN_FFT_INPUT {
        return 0.0;
    }

    let fft_size = samples.len().next_power_of_two().min(MAX_FFT_SIZE);
    let taken = samples.len().min(fft_size);
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(fft_size);

    let mut buffer: Vec<Complex<f64>> = samples
        .iter()
        .take(taken)
        .enumerate()
        .map(|(i, &s)| {
            let window = 0.5 * (1.0 - (2.0 * PI * i as f64 / taken as f64).cos());
            Complex::new(s * window, 0.0)
        })
        .collect();
    buffer.resize(fft_size, Complex::new(0.0, 0.0));

    fft.process(&mut buffer);

    let nyquist = fft_size / 2;
    let resolution = sample_rate as f64 / fft_size as f64;
    let min_bin = ((MIN_FREQUENCY_HZ / resolution).ceil() as usize).max(1);
    let magnitudes: Vec<f64> = buffer.iter().take(nyquist).map(|c| c.norm()).collect();

    let mut peak_bin = 0;
    let mut peak = 0.0;
    for (i, &m) in magnitudes.iter().enumerate().skip(min_bin) {
        if m > peak {
            peak = m;
            peak_bin = i;
        }
    }
    if peak_bin == 0 {
        return 0.0;
    }

    (peak_bin as f64 + interpolate_peak(&magnitudes, peak_bin)) * resolution
}

/// Fractional bin offset of the true peak around `bin`, in `[-0.5, 0.5]`.
fn interpolate_peak(magnitudes: &[f64], bin: usize) -> f64 {
    if bin + 1 >= magnitudes.len() {
        return 0.0;
    }
    let [a, b, c] = [magnitudes[bin - 1], magnitudes[bin], magnitudes[bin + 1]]
        .map(|m| m.max(f64::MIN_POSITIVE).ln());
    let denom = a - 2.0 * b + c;
    if denom.abs() < f64::EPSILON {
        return 0.0;
    }
    (0.5 * (a - c) / denom).clamp(-0.5, 0.5)
}

/// Extracts channel `index` of `buffer` as floats, or `None` if it has no such channel.
pub fn channel(buffer: &PcmBuffer, index: u16) -> Option<Vec<f64>> {
    (index < buffer.channels()).then(|| buffer.channel_f64(index))
}

/// Peak absolute level in dBFS.
pub fn peak_dbfs(samples: &[f64]) -> f64 {
    let peak = samples.iter().fold(0.0f64, |acc, s| acc.max(s.abs()));
    to_dbfs(peak)
}

/// RMS level in dBFS.
pub fn rms_dbfs(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return SILENCE_DBFS;
    }
    let mean_square = samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64;
    to_dbfs(mean_square.sqrt())
}

fn to_dbfs(amplitude: f64) -> f64 {
    if amplitude > 0.0 {
        (20.0 * amplitude.log10()).max(SILENCE_DBFS)
    } else {
        SILENCE_DBFS
    }
}

/// Measurements of one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelSummary {
    /// Strongest frequency in Hz, 0.0 when none was found.
    pub dominant_hz: f64,
    /// Peak level in dBFS.
    pub peak_dbfs: f64,
    /// RMS level in dBFS.
    pub rms_dbfs: f64,
}

/// Measures every channel of `buffer`.
pub fn summarize(buffer: &PcmBuffer) -> Vec<ChannelSummary> {
    (0..buffer.channels())
        .map(|ch| {
            let samples = buffer.channel_f64(ch);
            ChannelSummary {
                dominant_hz: dominant_frequency(&samples, buffer.sample_rate()),
                peak_dbfs: peak_dbfs(&samples),
                rms_dbfs: rms_dbfs(&samples),
            }
        })
        .collect()
}
