//! Render command implementation
//!
//! Renders the asset described by a JSON job file.

use anyhow::{Context, Result};
use colored::Colorize;
use dreamwave_backend_audio::{AudioError, Synthesizer};
use dreamwave_spec::{Job, JobFile};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use super::output::{finish_render, print_failure};
use crate::speech::{load_speech_track, WavFileSpeech};

/// Reads and parses a job file without validating its values.
pub fn load_job(job_path: &Path) -> Result<JobFile> {
    let json = fs::read_to_string(job_path)
        .with_context(|| format!("Failed to read job file: {}", job_path.display()))?;
    JobFile::from_json(&json)
        .with_context(|| format!("Failed to parse job file: {}", job_path.display()))
}

/// Resolves `path` against the directory holding the job file.
pub fn resolve_relative(job_path: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match job_path.parent() {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    }
}

/// Where the rendered asset goes: the override, the job's `output`, or the
/// job file path with a `.wav` extension.
pub fn output_path(job_path: &Path, job: &JobFile, output_override: Option<&str>) -> PathBuf {
    match (output_override, &job.output) {
        (Some(path), _) => PathBuf::from(path),
        (None, Some(path)) => resolve_relative(job_path, path),
        (None, None) => job_path.with_extension("wav"),
    }
}

/// Run the render command
///
/// # Arguments
/// * `job_path` - Path to the JSON job file
/// * `output_override` - Output path taking precedence over the job's own
///
/// # Returns
/// Exit code: 0 on success, 1 if the job was rejected
pub fn run(job_path: &str, output_override: Option<&str>) -> Result<ExitCode> {
    let start = Instant::now();
    let job_path = Path::new(job_path);

    println!("{} {}", "Rendering:".cyan().bold(), job_path.display());

    let job = load_job(job_path)?;
    if let Err(e) = job.validate() {
        print_failure(&AudioError::from(e));
        return Ok(ExitCode::from(1));
    }
    let output = output_path(job_path, &job, output_override);

    println!(
        "{} {} ({} s at {} Hz)",
        "Job:".dimmed(),
        job.job.kind(),
        job.job.duration_seconds(),
        job.config.sample_rate
    );

    let synth = Synthesizer::new(job.config)?;
    let result = match &job.job {
        Job::Binaural(params) => synth.generate_binaural_beat(params),
        Job::Subliminal(sub) => {
            let speech_path = resolve_relative(job_path, &sub.speech_path);
            match &sub.affirmation {
                Some(text) => synth.generate_subliminal_from_text(
                    &sub.params,
                    text,
                    &WavFileSpeech::new(speech_path),
                ),
                None => load_speech_track(&speech_path)
                    .map_err(Into::into)
                    .and_then(|speech| synth.generate_subliminal_audio(&sub.params, &speech)),
            }
        }
    };
    finish_render(result, &output, start)
}
