//! Writing rendered assets and reporting results.

use anyhow::{Context, Result};
use colored::Colorize;
use dreamwave_backend_audio::{AudioError, AudioResult, WavAsset};
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

/// Writes `asset` to `path`, creating parent directories.
pub(crate) fn write_asset(asset: &WavAsset, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, asset.bytes())
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}

/// Prints a rejected parameter or unusable speech input.
pub(crate) fn print_failure(err: &AudioError) {
    println!("{} [{}] {}", "FAILED".red().bold(), err.code(), err);
}

/// Writes a finished render, or reports why it failed.
///
/// Caller errors map to exit code 1; engine faults and I/O errors propagate.
pub(crate) fn finish_render(
    result: AudioResult<WavAsset>,
    output: &Path,
    start: Instant,
) -> Result<ExitCode> {
    let asset = match result {
        Ok(asset) => asset,
        Err(e) if e.is_caller_error() => {
            print_failure(&e);
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e.into()),
    };

    write_asset(&asset, output)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    println!("{} {}", "Wrote:".dimmed(), output.display());
    println!(
        "  {} Hz, {} ch, {:.3} s, {} bytes",
        asset.sample_rate(),
        asset.channels(),
        asset.duration_seconds(),
        asset.byte_length()
    );
    if asset.clipped_samples() > 0 {
        println!(
            "  {} {} samples clipped",
            "!".yellow(),
            asset.clipped_samples()
        );
    }
    println!("  {} {}", "PCM hash:".dimmed(), asset.pcm_hash());
    println!(
        "\n{} Asset rendered ({}ms)",
        "SUCCESS".green().bold(),
        duration_ms
    );
    Ok(ExitCode::SUCCESS)
}
