//! Binaural command implementation
//!
//! Renders a binaural beat to a WAV file.

use anyhow::Result;
use colored::Colorize;
use dreamwave_backend_audio::Synthesizer;
use dreamwave_spec::{AudioParameters, RenderConfig};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::output::{finish_render, print_failure};

/// Run the binaural command
///
/// # Returns
/// Exit code: 0 on success, 1 if the parameters were rejected
pub fn run(params: &AudioParameters, config: RenderConfig, output: &Path) -> Result<ExitCode> {
    let start = Instant::now();

    println!(
        "{} {} Hz carrier, {} Hz beat, {} s",
        "Binaural:".cyan().bold(),
        params.carrier_frequency_hz,
        params.beat_frequency_hz,
        params.duration_seconds
    );

    let synth = match Synthesizer::new(config) {
        Ok(synth) => synth,
        Err(e) => {
            print_failure(&e);
            return Ok(ExitCode::from(1));
        }
    };
    finish_render(synth.generate_binaural_beat(params), output, start)
}
