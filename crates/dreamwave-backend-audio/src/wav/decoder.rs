//! Reading 16-bit PCM WAV files back into buffers.
//!
//! Accepts any RIFF/WAVE layout with a PCM `fmt ` chunk and a `data` chunk,
//! skipping unknown chunks, so files from other tools decode too.

use crate::error::{AudioError, AudioResult};
use crate::pcm::PcmBuffer;

use super::format::WavFormat;

/// Parsed header of a PCM WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Audio format.
    pub format: WavFormat,
    /// Byte offset of the first sample.
    pub data_offset: usize,
    /// Declared data chunk size in bytes.
    pub data_size: u32,
}

impl WavHeader {
    /// Parses the RIFF header and locates the format and data chunks.
    pub fn parse(wav_data: &[u8]) -> AudioResult<Self> {
        if wav_data.len() < 12 {
            return Err(AudioError::encoding(format!(
                "{} bytes is too short for a RIFF header",
                wav_data.len()
            )));
        }
        if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
            return Err(AudioError::encoding("missing RIFF/WAVE signature"));
        }

        let mut format = None;
        let mut pos = 12;
        while pos + 8 <= wav_data.len() {
            let chunk_id = &wav_data[pos..pos + 4];
            let chunk_size = read_u32(wav_data, pos + 4) as usize;
            let body = pos + 8;

            if chunk_id == b"fmt " {
                if chunk_size < 16 || body + 16 > wav_data.len() {
                    return Err(AudioError::encoding("fmt chunk too short"));
                }
                let audio_format = read_u16(wav_data, body);
                if audio_format != 1 {
                    return Err(AudioError::encoding(format!(
                        "unsupported audio format {} (expected 1, PCM)",
                        audio_format
                    )));
                }
                format = Some(
                    WavFormat {
                        channels: read_u16(wav_data, body + 2),
                        sample_rate: read_u32(wav_data, body + 4),
                        bits_per_sample: read_u16(wav_data, body + 14),
                    }
                    .checked()?,
                );
            } else if chunk_id == b"data" {
                let format =
                    format.ok_or_else(|| AudioError::encoding("data chunk before fmt chunk"))?;
                if chunk_size > wav_data.len() - body {
                    return Err(AudioError::encoding(format!(
                        "data chunk declares {} bytes but only {} remain",
                        chunk_size,
                        wav_data.len() - body
                    )));
                }
                return Ok(Self {
                    format,
                    data_offset: body,
                    data_size: chunk_size as u32,
                });
            }

            pos = body.saturating_add(chunk_size).saturating_add(chunk_size & 1);
        }

        Err(AudioError::encoding("missing data chunk"))
    }

    /// Number of sample frames in the data chunk.
    pub fn frame_count(&self) -> u64 {
        self.data_size as u64 / self.format.block_align() as u64
    }

    /// Duration derived from the frame count.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / self.format.sample_rate as f64
    }
}

/// Decodes a 16-bit PCM WAV file.
pub fn decode(wav_data: &[u8]) -> AudioResult<PcmBuffer> {
    let header = WavHeader::parse(wav_data)?;
    let block_align = header.format.block_align() as usize;
    let data_size = header.data_size as usize;
    if data_size % block_align != 0 {
        return Err(AudioError::encoding(format!(
            "data size {} is not a whole number of {}-byte frames",
            data_size, block_align
        )));
    }

    let data = &wav_data[header.data_offset..header.data_offset + data_size];
    let samples = data
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();
    PcmBuffer::new(header.format.sample_rate, header.format.channels, samples)
}

/// Extracts the data chunk of a WAV file.
///
/// Used for comparing WAV files by their audio content only.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    let header = WavHeader::parse(wav_data).ok()?;
    Some(&wav_data[header.data_offset..header.data_offset + header.data_size as usize])
}

/// BLAKE3 hex digest of the data chunk, or None if the file is not valid PCM.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}

fn read_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}
