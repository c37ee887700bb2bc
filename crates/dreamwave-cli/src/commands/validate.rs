//! Validate command implementation
//!
//! Checks a job file without rendering anything.

use anyhow::Result;
use colored::Colorize;
use dreamwave_backend_audio::AudioError;
use dreamwave_spec::{Job, JobError, JobFile};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::render::resolve_relative;

/// Error codes for problems found outside parameter validation.
pub mod error_codes {
    /// The job file could not be read.
    pub const READ_FAILED: &str = "JOB_001";
    /// The job file is not valid job JSON.
    pub const PARSE_FAILED: &str = "JOB_002";
    /// The speech file named by a subliminal job does not exist.
    pub const SPEECH_MISSING: &str = "JOB_003";
}

/// A validation problem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidateError {
    /// Stable error code.
    pub code: &'static str,
    /// Rejected field, for parameter errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    /// Human-readable message.
    pub message: String,
}

/// Result of validating one job file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateOutput {
    /// Whether the job can be rendered.
    pub ok: bool,
    /// Path of the job file.
    pub job: String,
    /// Job kind, when the file parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    /// Requested duration, when the file parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    /// The first problem found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidateError>,
}

/// Validates the job file at `job_path`.
pub fn validate_job(job_path: &Path) -> ValidateOutput {
    let mut output = ValidateOutput {
        ok: false,
        job: job_path.display().to_string(),
        kind: None,
        duration_seconds: None,
        error: None,
    };

    let json = match fs::read_to_string(job_path) {
        Ok(json) => json,
        Err(e) => {
            output.error = Some(ValidateError {
                code: error_codes::READ_FAILED,
                field: None,
                message: format!("failed to read job file: {}", e),
            });
            return output;
        }
    };

    let job = match JobFile::parse(&json) {
        Ok(job) => job,
        Err(JobError::Invalid(e)) => {
            let err = AudioError::from(e);
            output.error = Some(ValidateError {
                code: err.code(),
                field: err.field(),
                message: err.to_string(),
            });
            return output;
        }
        Err(e) => {
            output.error = Some(ValidateError {
                code: error_codes::PARSE_FAILED,
                field: None,
                message: e.to_string(),
            });
            return output;
        }
    };

    output.kind = Some(job.job.kind());
    output.duration_seconds = Some(job.job.duration_seconds());

    if let Job::Subliminal(sub) = &job.job {
        let speech_path = resolve_relative(job_path, &sub.speech_path);
        if !speech_path.is_file() {
            output.error = Some(ValidateError {
                code: error_codes::SPEECH_MISSING,
                field: Some("speechPath"),
                message: format!("speech file not found: {}", speech_path.display()),
            });
            return output;
        }
    }

    output.ok = true;
    output
}

/// Run the validate command
///
/// # Arguments
/// * `job_path` - Path to the JSON job file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(job_path: &str, json_output: bool) -> Result<ExitCode> {
    let output = validate_job(Path::new(job_path));
    let code = if output.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(code);
    }

    println!("{} {}", "Validating:".cyan().bold(), job_path);
    if let (Some(kind), Some(duration)) = (output.kind, output.duration_seconds) {
        println!("{} {} ({} s)", "Job:".dimmed(), kind, duration);
    }
    match &output.error {
        None => println!("\n{} Job is valid", "SUCCESS".green().bold()),
        Some(err) => println!("\n{} [{}] {}", "FAILED".red().bold(), err.code, err.message),
    }
    Ok(code)
}
