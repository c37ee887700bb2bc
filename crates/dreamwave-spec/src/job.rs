//! JSON job files.
//!
//! A job file bundles one render request with optional configuration:
//!
//! ```json
//! {
//!   "config": { "sampleRate": 44100 },
//!   "output": "focus.wav",
//!   "job": {
//!     "kind": "binaural",
//!     "carrierFrequencyHz": 200,
//!     "beatFrequencyHz": 10,
//!     "durationSeconds": 600
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::error::{JobError, ParameterError};
use crate::params::{AudioParameters, SubliminalParameters};
use crate::validation::{
    validate_affirmation_text, validate_audio_parameters, validate_subliminal_parameters,
};

/// A subliminal render request: parameters plus where the speech comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubliminalJob {
    /// Masking, duration, gains, and seed.
    #[serde(flatten)]
    pub params: SubliminalParameters,
    /// Path to the pre-rendered affirmation WAV.
    pub speech_path: String,
    /// The affirmation text, kept for length validation and reporting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affirmation: Option<String>,
}

/// One render request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Job {
    /// Binaural beat asset.
    Binaural(AudioParameters),
    /// Speech over a masking layer.
    Subliminal(SubliminalJob),
}

impl Job {
    /// Returns the job kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            Job::Binaural(_) => "binaural",
            Job::Subliminal(_) => "subliminal",
        }
    }

    /// Requested asset length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        match self {
            Job::Binaural(params) => params.duration_seconds,
            Job::Subliminal(job) => job.params.duration_seconds,
        }
    }
}

/// A parsed job file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFile {
    /// Render configuration; defaults apply when omitted.
    #[serde(default)]
    pub config: RenderConfig,
    /// Output path, relative to the job file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// The render request.
    pub job: Job,
}

impl JobFile {
    /// Parses a job file without validating its values.
    pub fn from_json(json: &str) -> Result<Self, JobError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses and validates a job file.
    pub fn parse(json: &str) -> Result<Self, JobError> {
        let file = Self::from_json(json)?;
        file.validate()?;
        Ok(file)
    }

    /// Validates configuration, parameters, and affirmation text.
    pub fn validate(&self) -> Result<(), ParameterError> {
        self.config.validate()?;
        match &self.job {
            Job::Binaural(params) => validate_audio_parameters(params, self.config.sample_rate),
            Job::Subliminal(job) => {
                validate_subliminal_parameters(&job.params)?;
                if let Some(text) = &job.affirmation {
                    validate_affirmation_text(text)?;
                }
                Ok(())
            }
        }
    }

    /// Serializes the job file as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, JobError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
