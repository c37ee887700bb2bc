//! Inspect command implementation
//!
//! Reports the format, levels, and dominant frequency of each channel of a
//! WAV file. Useful for checking that a binaural asset puts each ear at the
//! intended frequency.

use anyhow::{Context, Result};
use colored::Colorize;
use dreamwave_backend_audio::analysis::summarize;
use dreamwave_backend_audio::wav::{compute_pcm_hash, decode};
use dreamwave_backend_audio::PcmBuffer;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use crate::speech::load_speech_track;

/// Measurements of one channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelReport {
    /// Strongest frequency in Hz.
    pub dominant_hz: f64,
    /// Peak level in dBFS.
    pub peak_dbfs: f64,
    /// RMS level in dBFS.
    pub rms_dbfs: f64,
}

/// Everything `inspect` reports about a file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectReport {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u16,
    /// Frames per channel.
    pub frames: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// BLAKE3 of the data chunk, for canonical 16-bit files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    /// Per-channel measurements.
    pub channel_reports: Vec<ChannelReport>,
}

/// Builds a report for a decoded buffer.
pub fn report_for(pcm: &PcmBuffer, pcm_hash: Option<String>) -> InspectReport {
    InspectReport {
        sample_rate: pcm.sample_rate(),
        channels: pcm.channels(),
        frames: pcm.frame_count(),
        duration_seconds: pcm.duration_seconds(),
        pcm_hash,
        channel_reports: summarize(pcm)
            .into_iter()
            .map(|s| ChannelReport {
                dominant_hz: s.dominant_hz,
                peak_dbfs: s.peak_dbfs,
                rms_dbfs: s.rms_dbfs,
            })
            .collect(),
    }
}

/// Reads and measures the WAV file at `path`.
///
/// 16-bit PCM files are decoded directly; other bit depths go through the
/// speech loader.
pub fn inspect_file(path: &Path) -> Result<InspectReport> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read WAV file: {}", path.display()))?;
    match decode(&bytes) {
        Ok(pcm) => Ok(report_for(&pcm, compute_pcm_hash(&bytes))),
        Err(e) => {
            tracing::debug!(error = %e, "not canonical 16-bit PCM, reading with hound");
            let pcm = load_speech_track(path)
                .with_context(|| format!("Failed to decode WAV file: {}", path.display()))?;
            Ok(report_for(&pcm, None))
        }
    }
}

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let report = inspect_file(Path::new(input))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Inspecting:".cyan().bold(), input);
    println!(
        "  {} Hz, {} ch, {} frames, {:.3} s",
        report.sample_rate, report.channels, report.frames, report.duration_seconds
    );
    if let Some(hash) = &report.pcm_hash {
        println!("  {} {}", "PCM hash:".dimmed(), hash);
    }
    for (index, channel) in report.channel_reports.iter().enumerate() {
        println!(
            "  {} {}: {:.2} Hz, peak {:.2} dBFS, rms {:.2} dBFS",
            "channel".dimmed(),
            index,
            channel.dominant_hz,
            channel.peak_dbfs,
            channel.rms_dbfs
        );
    }
    Ok(ExitCode::SUCCESS)
}
