//! Error types for the audio backend.

use dreamwave_spec::{Bound, ParameterError};
use thiserror::Error;

use crate::speech::SpeechError;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis.
#[derive(Debug, Error)]
pub enum AudioError {
    /// A caller-supplied parameter is out of range. Raised before any rendering.
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),

    /// Sample arithmetic produced a count the engine cannot hold. Indicates a bug.
    #[error("buffer overflow: {message}")]
    BufferOverflow {
        /// What overflowed.
        message: String,
    },

    /// A PCM buffer or WAV stream does not match the expected layout.
    #[error("encoding error: {message}")]
    Encoding {
        /// Error message.
        message: String,
    },

    /// The speech source could not render the affirmation.
    #[error(transparent)]
    Speech(#[from] SpeechError),
}

impl AudioError {
    /// Creates a buffer overflow error.
    pub fn overflow(message: impl Into<String>) -> Self {
        Self::BufferOverflow {
            message: message.into(),
        }
    }

    /// Creates an encoding error.
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// Name of the rejected field for parameter errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            AudioError::InvalidParameter(err) => Some(err.field),
            _ => None,
        }
    }

    /// Violated bound for parameter errors.
    pub fn bound(&self) -> Option<Bound> {
        match self {
            AudioError::InvalidParameter(err) => Some(err.bound),
            _ => None,
        }
    }

    /// Stable error code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidParameter(_) => "AUDIO_001",
            AudioError::BufferOverflow { .. } => "AUDIO_002",
            AudioError::Encoding { .. } => "AUDIO_003",
            AudioError::Speech(_) => "AUDIO_004",
        }
    }

    /// Returns true for errors caused by caller input rather than engine bugs.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            AudioError::InvalidParameter(_) | AudioError::Speech(_)
        )
    }
}
