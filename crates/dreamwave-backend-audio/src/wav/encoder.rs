//! PCM quantization and canonical WAV serialization.

use crate::error::{AudioError, AudioResult};
use crate::pcm::PcmBuffer;

use super::format::{WavFormat, HEADER_LEN};

/// Converts a float sample to 16-bit PCM: `round(sample * 32767)`, clamped to
/// the i16 range. NaN maps to silence.
#[inline]
pub fn quantize(sample: f64) -> i16 {
    let scaled = (sample * 32767.0).round();
    if scaled.is_nan() {
        0
    } else {
        scaled.clamp(i16::MIN as f64, i16::MAX as f64) as i16
    }
}

/// Converts a 16-bit PCM sample back to float, the inverse of [`quantize`].
#[inline]
pub fn dequantize(sample: i16) -> f64 {
    sample as f64 / 32767.0
}

/// Serializes a PCM buffer as a canonical RIFF/WAVE file.
///
/// | Offset | Field | Value |
/// |---|---|---|
/// | 0 | ChunkID | `RIFF` |
/// | 4 | ChunkSize | `36 + dataSize` |
/// | 8 | Format | `WAVE` |
/// | 12 | Subchunk1ID | `fmt ` |
/// | 16 | Subchunk1Size | 16 |
/// | 20 | AudioFormat | 1 (PCM) |
/// | 22 | NumChannels | channels |
/// | 24 | SampleRate | rate |
/// | 28 | ByteRate | `rate * channels * 2` |
/// | 32 | BlockAlign | `channels * 2` |
/// | 34 | BitsPerSample | 16 |
/// | 36 | Subchunk2ID | `data` |
/// | 40 | Subchunk2Size | dataSize |
/// | 44 | data | interleaved little-endian i16 |
pub fn encode(buffer: PcmBuffer) -> AudioResult<Vec<u8>> {
    let format = WavFormat::new(buffer.channels(), buffer.sample_rate())?;
    let samples = buffer.into_samples();

    let data_size = samples
        .len()
        .checked_mul(format.bytes_per_sample() as usize)
        .and_then(|size| u32::try_from(size).ok())
        .filter(|size| size.checked_add(36).is_some())
        .ok_or_else(|| {
            AudioError::encoding(format!(
                "{} samples exceed the 4 GiB RIFF size limit",
                samples.len()
            ))
        })?;

    let mut wav = Vec::with_capacity(HEADER_LEN + data_size as usize);
    write_header(&mut wav, &format, data_size);
    for sample in samples {
        wav.extend_from_slice(&sample.to_le_bytes());
    }
    Ok(wav)
}

fn write_header(wav: &mut Vec<u8>, format: &WavFormat, data_size: u32) {
    // RIFF header
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_size).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    // fmt chunk
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&format.channels.to_le_bytes());
    wav.extend_from_slice(&format.sample_rate.to_le_bytes());
    wav.extend_from_slice(&format.byte_rate().to_le_bytes());
    wav.extend_from_slice(&format.block_align().to_le_bytes());
    wav.extend_from_slice(&format.bits_per_sample.to_le_bytes());

    // data chunk
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
}
