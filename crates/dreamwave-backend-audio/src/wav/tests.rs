//! Tests for the WAV module.

use pretty_assertions::assert_eq;

use crate::error::AudioError;
use crate::pcm::PcmBuffer;

use super::*;

fn u16_at(wav: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([wav[at], wav[at + 1]])
}

fn u32_at(wav: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([wav[at], wav[at + 1], wav[at + 2], wav[at + 3]])
}

// =========================================================================
// WavFormat
// =========================================================================

#[test]
fn test_wav_format_layout() {
    let mono = WavFormat::new(1, 44_100).unwrap();
    assert_eq!(mono.block_align(), 2);
    assert_eq!(mono.byte_rate(), 88_200);

    let stereo = WavFormat::new(2, 44_100).unwrap();
    assert_eq!(stereo.block_align(), 4);
    assert_eq!(stereo.byte_rate(), 176_400);

    assert_eq!(WavFormat::new(2, 48_000).unwrap().byte_rate(), 192_000);
}

#[test]
fn test_wav_format_rejects_bad_layouts() {
    assert!(WavFormat::new(3, 44_100).is_err());
    assert!(WavFormat::new(0, 44_100).is_err());
    assert!(WavFormat::new(1, 0).is_err());
    let eight_bit = WavFormat {
        bits_per_sample: 8,
        ..WavFormat::new(1, 8_000).unwrap()
    };
    assert!(matches!(
        eight_bit.checked(),
        Err(AudioError::Encoding { .. })
    ));
}

// =========================================================================
// Quantization
// =========================================================================

#[test]
fn test_quantize_normal_range() {
    assert_eq!(quantize(0.0), 0);
    assert_eq!(quantize(0.5), 16384); // (0.5 * 32767).round()
    assert_eq!(quantize(-0.5), -16384);
    assert_eq!(quantize(1.0), 32767);
    assert_eq!(quantize(-1.0), -32767);
}

#[test]
fn test_quantize_clamps_to_i16_range() {
    assert_eq!(quantize(1.5), 32767);
    assert_eq!(quantize(f64::MAX), 32767);
    assert_eq!(quantize(-1.00002), -32768);
    assert_eq!(quantize(-10.0), -32768);
    assert_eq!(quantize(f64::NEG_INFINITY), -32768);
    assert_eq!(quantize(f64::NAN), 0);
}

#[test]
fn test_dequantize_inverts_quantize() {
    for s in [-32767i16, -12345, -1, 0, 1, 16384, 32767] {
        assert_eq!(quantize(dequantize(s)), s);
    }
}

// =========================================================================
// Encoding
// =========================================================================

#[test]
fn test_encode_canonical_header() {
    let buffer = PcmBuffer::new(44_100, 2, vec![1, -1, 256, -256]).unwrap();
    let wav = encode(buffer).unwrap();

    assert_eq!(wav.len(), 44 + 8);
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(u32_at(&wav, 4), 36 + 8);
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(u32_at(&wav, 16), 16);
    assert_eq!(u16_at(&wav, 20), 1);
    assert_eq!(u16_at(&wav, 22), 2);
    assert_eq!(u32_at(&wav, 24), 44_100);
    assert_eq!(u32_at(&wav, 28), 176_400);
    assert_eq!(u16_at(&wav, 32), 4);
    assert_eq!(u16_at(&wav, 34), 16);
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(u32_at(&wav, 40), 8);
}

#[test]
fn test_encode_little_endian_samples() {
    let buffer = PcmBuffer::mono(8_000, vec![0x0102, -2]).unwrap();
    let wav = encode(buffer).unwrap();
    assert_eq!(&wav[44..], &[0x02, 0x01, 0xFE, 0xFF]);
}

#[test]
fn test_encode_empty_buffer() {
    let wav = encode(PcmBuffer::mono(44_100, vec![]).unwrap()).unwrap();
    assert_eq!(wav.len(), HEADER_LEN);
    assert_eq!(u32_at(&wav, 4), 36);
    assert_eq!(u32_at(&wav, 40), 0);
}

#[test]
fn test_encode_is_deterministic() {
    let make = || PcmBuffer::new(22_050, 2, (0..200).map(|i| i * 37).collect()).unwrap();
    assert_eq!(encode(make()).unwrap(), encode(make()).unwrap());
}

// =========================================================================
// Decoding
// =========================================================================

#[test]
fn test_decode_recovers_buffer() {
    let buffer = PcmBuffer::new(48_000, 2, vec![100, -100, 32767, -32768]).unwrap();
    let wav = encode(buffer.clone()).unwrap();
    assert_eq!(decode(&wav).unwrap(), buffer);

    let header = WavHeader::parse(&wav).unwrap();
    assert_eq!(header.format, WavFormat::new(2, 48_000).unwrap());
    assert_eq!(header.data_offset, 44);
    assert_eq!(header.data_size, 8);
    assert_eq!(header.frame_count(), 2);
}

#[test]
fn test_decode_skips_unknown_chunks() {
    let wav = encode(PcmBuffer::mono(8_000, vec![7, 8, 9]).unwrap()).unwrap();

    // Splice a LIST chunk with an odd-sized body (plus pad byte) between fmt and data.
    let mut spliced = wav[..36].to_vec();
    spliced.extend_from_slice(b"LIST");
    spliced.extend_from_slice(&3u32.to_le_bytes());
    spliced.extend_from_slice(&[1, 2, 3, 0]);
    spliced.extend_from_slice(&wav[36..]);

    assert_eq!(decode(&spliced).unwrap().samples(), &[7, 8, 9]);
    assert_eq!(extract_pcm_data(&spliced), extract_pcm_data(&wav));
}

#[test]
fn test_decode_rejects_malformed_input() {
    assert!(WavHeader::parse(b"RIFF").is_err());
    assert!(WavHeader::parse(&[0u8; 44]).is_err());

    let mut wav = encode(PcmBuffer::mono(8_000, vec![1, 2]).unwrap()).unwrap();
    wav[20] = 3; // IEEE float
    assert!(decode(&wav).is_err());

    let mut truncated = encode(PcmBuffer::mono(8_000, vec![1, 2]).unwrap()).unwrap();
    truncated.pop();
    assert!(decode(&truncated).is_err());
}

#[test]
fn test_decode_rejects_partial_frames() {
    let mut wav = encode(PcmBuffer::new(8_000, 2, vec![1, 2, 3, 4]).unwrap()).unwrap();
    wav[40] = 6; // declare 1.5 frames
    assert!(decode(&wav).is_err());
}

// =========================================================================
// PCM hashing
// =========================================================================

#[test]
fn test_pcm_hash_ignores_header_changes() {
    let a = encode(PcmBuffer::mono(44_100, vec![1, 2, 3]).unwrap()).unwrap();
    let b = encode(PcmBuffer::mono(48_000, vec![1, 2, 3]).unwrap()).unwrap();
    let c = encode(PcmBuffer::mono(44_100, vec![1, 2, 4]).unwrap()).unwrap();

    assert_eq!(compute_pcm_hash(&a), compute_pcm_hash(&b));
    assert_ne!(compute_pcm_hash(&a), compute_pcm_hash(&c));
    assert_eq!(compute_pcm_hash(b"not a wav"), None);
}

// =========================================================================
// WavAsset
// =========================================================================

#[test]
fn test_asset_derives_lengths_from_bytes() {
    let buffer = PcmBuffer::silent(44_100, 2, 44_100 * 3).unwrap();
    let asset = WavAsset::from_pcm(buffer, 5).unwrap();

    assert_eq!(asset.mime_type(), "audio/wav");
    assert_eq!(asset.byte_length(), 44 + 44_100 * 3 * 4);
    assert_eq!(asset.frame_count(), 44_100 * 3);
    assert_eq!(asset.duration_seconds(), 3.0);
    assert_eq!(asset.channels(), 2);
    assert_eq!(asset.sample_rate(), 44_100);
    assert_eq!(asset.clipped_samples(), 5);
    assert_eq!(Some(asset.pcm_hash()), compute_pcm_hash(asset.bytes()));
    assert_eq!(asset.decode().unwrap().frame_count(), 44_100 * 3);
}
