//! Subliminal command implementation
//!
//! Mixes a pre-rendered speech WAV over a masking layer.

use anyhow::Result;
use colored::Colorize;
use dreamwave_backend_audio::Synthesizer;
use dreamwave_spec::{RenderConfig, SubliminalParameters};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::output::{finish_render, print_failure};
use crate::speech::{load_speech_track, WavFileSpeech};

/// Run the subliminal command
///
/// # Arguments
/// * `params` - Masking, duration, gains, and seed
/// * `speech_path` - WAV file holding the rendered affirmation
/// * `affirmation` - Affirmation text; when given, its length is validated
/// * `config` - Render configuration
/// * `output` - Output WAV path
///
/// # Returns
/// Exit code: 0 on success, 1 if the inputs were rejected
pub fn run(
    params: &SubliminalParameters,
    speech_path: &Path,
    affirmation: Option<&str>,
    config: RenderConfig,
    output: &Path,
) -> Result<ExitCode> {
    let start = Instant::now();

    println!(
        "{} {} masking, {} s, seed {}",
        "Subliminal:".cyan().bold(),
        params.masking_kind,
        params.duration_seconds,
        params.seed
    );
    println!("{} {}", "Speech:".dimmed(), speech_path.display());

    let synth = match Synthesizer::new(config) {
        Ok(synth) => synth,
        Err(e) => {
            print_failure(&e);
            return Ok(ExitCode::from(1));
        }
    };

    let result = match affirmation {
        Some(text) => {
            synth.generate_subliminal_from_text(params, text, &WavFileSpeech::new(speech_path))
        }
        None => load_speech_track(speech_path)
            .map_err(Into::into)
            .and_then(|speech| synth.generate_subliminal_audio(params, &speech)),
    };
    finish_render(result, output, start)
}
