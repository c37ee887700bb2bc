//! End-to-end tests for binaural beat assets.

use dreamwave_backend_audio::analysis::{channel, dominant_frequency, peak_dbfs};
use dreamwave_backend_audio::wav::{decode, WavHeader, HEADER_LEN};
use dreamwave_backend_audio::{generate_binaural_beat, Synthesizer};
use dreamwave_spec::{AudioParameters, RenderConfig};
use pretty_assertions::assert_eq;

fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn u16_at(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_theta_beat_layout() {
    let asset = generate_binaural_beat(&AudioParameters::new(200.0, 10.0, 60.0).with_gain(-6.0))
        .unwrap();
    let bytes = asset.bytes();

    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WAVE");
    assert_eq!(&bytes[36..40], b"data");
    assert_eq!(HEADER_LEN, 44);
    assert_eq!(u16_at(bytes, 22), 2);
    assert_eq!(u32_at(bytes, 24), 44_100);
    assert_eq!(u32_at(bytes, 40), 10_584_000);
    assert_eq!(bytes.len(), 44 + 10_584_000);
    assert_eq!(asset.frame_count(), 2_646_000);
    assert_eq!(asset.duration_seconds(), 60.0);
}

#[test]
fn test_header_matches_body() {
    let config = RenderConfig::with_sample_rate(48_000);
    let asset = Synthesizer::new(config)
        .unwrap()
        .generate_binaural_beat(&AudioParameters::new(432.0, 4.0, 61.5))
        .unwrap();
    let bytes = asset.bytes();
    let header = WavHeader::parse(bytes).unwrap();

    assert_eq!(u32_at(bytes, 4) as usize, bytes.len() - 8);
    assert_eq!(u32_at(bytes, 28), 48_000 * 4);
    assert_eq!(u16_at(bytes, 32), 4);
    assert_eq!(u16_at(bytes, 34), 16);
    assert_eq!(header.data_offset, HEADER_LEN);
    assert_eq!(header.data_size as usize, bytes.len() - HEADER_LEN);
    assert_eq!(header.frame_count(), 2_952_000);
    assert_eq!(asset.pcm_data().len(), 2_952_000 * 4);
}

#[test]
fn test_frame_count_is_rounded_duration() {
    let config = RenderConfig::with_sample_rate(22_050);
    let synth = Synthesizer::new(config).unwrap();
    for duration in [60.0, 60.00002, 90.5, 123.456_789] {
        let asset = synth
            .generate_binaural_beat(&AudioParameters::new(300.0, 6.0, duration))
            .unwrap();
        let expected = (duration * 22_050.0_f64).round() as u64;
        assert_eq!(asset.frame_count(), expected);
        assert_eq!(decode(asset.bytes()).unwrap().frame_count() as u64, expected);
    }
}

// ============================================================================
// Spectrum and level
// ============================================================================

#[test]
fn test_each_ear_peaks_at_its_frequency() {
    let asset = generate_binaural_beat(&AudioParameters::new(200.0, 10.0, 60.0)).unwrap();
    let pcm = asset.decode().unwrap();

    let left = channel(&pcm, 0).unwrap();
    let right = channel(&pcm, 1).unwrap();
    let left_hz = dominant_frequency(&left, 44_100);
    let right_hz = dominant_frequency(&right, 44_100);

    assert!((left_hz - 195.0).abs() < 0.5, "left ear at {} Hz", left_hz);
    assert!((right_hz - 205.0).abs() < 0.5, "right ear at {} Hz", right_hz);
}

#[test]
fn test_gain_sets_peak_level() {
    let config = RenderConfig::with_sample_rate(22_050);
    let asset = Synthesizer::new(config)
        .unwrap()
        .generate_binaural_beat(&AudioParameters::new(150.0, 2.0, 60.0).with_gain(-12.0))
        .unwrap();
    let pcm = asset.decode().unwrap();
    for ch in 0..2 {
        let peak = peak_dbfs(&channel(&pcm, ch).unwrap());
        assert!((peak - (-12.0)).abs() < 0.05, "channel {} peaks at {}", ch, peak);
    }
    assert_eq!(asset.clipped_samples(), 0);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_carrier_just_below_range_is_rejected() {
    let err = generate_binaural_beat(&AudioParameters::new(19.999, 10.0, 60.0)).unwrap_err();
    assert_eq!(err.field(), Some("carrierFrequencyHz"));
    assert!(err.is_caller_error());
}

#[test]
fn test_bounds_are_inclusive() {
    let config = RenderConfig::with_sample_rate(96_000);
    let synth = Synthesizer::new(config).unwrap();
    let lowest = synth
        .generate_binaural_beat(&AudioParameters::new(20.25, 0.5, 60.0).with_gain(0.0))
        .unwrap();
    let pcm = decode(lowest.bytes()).unwrap();
    let left = channel(&pcm, 0).unwrap();
    let right = channel(&pcm, 1).unwrap();
    assert!(peak_dbfs(&left) > -0.1);
    assert!(peak_dbfs(&right) > -0.1);

    assert!(synth
        .generate_binaural_beat(&AudioParameters::new(20.0, 0.5, 60.0))
        .is_err());
    assert!(synth
        .generate_binaural_beat(&AudioParameters::new(20_000.0, 40.0, 60.0))
        .is_ok());
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_repeated_renders_are_identical() {
    let params = AudioParameters::new(528.0, 7.83, 60.0);
    let a = generate_binaural_beat(&params).unwrap();
    let b = generate_binaural_beat(&params).unwrap();
    assert_eq!(a.pcm_hash(), b.pcm_hash());
    assert!(a.bytes() == b.bytes());
}
