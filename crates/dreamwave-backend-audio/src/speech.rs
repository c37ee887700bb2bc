//! Pluggable speech rendering.
//!
//! The engine never talks to a text-to-speech service. Callers hand it a
//! [`SpeechSource`] and the engine asks it for a waveform, which keeps
//! synthesis testable offline.

use thiserror::Error;

use crate::pcm::PcmBuffer;

/// Errors reported by speech sources.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// The source could not produce a waveform for the text.
    #[error("speech rendering failed: {message}")]
    Render {
        /// What went wrong.
        message: String,
    },
}

impl SpeechError {
    /// Creates a render error.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}

/// Something that turns affirmation text into speech.
pub trait SpeechSource {
    /// Renders `text` to PCM.
    fn render(&self, text: &str) -> Result<PcmBuffer, SpeechError>;
}

impl<F> SpeechSource for F
where
    F: Fn(&str) -> Result<PcmBuffer, SpeechError>,
{
    fn render(&self, text: &str) -> Result<PcmBuffer, SpeechError> {
        self(text)
    }
}

/// Returns the same pre-rendered track for any text.
#[derive(Debug, Clone)]
pub struct PrerenderedSpeech {
    track: PcmBuffer,
}

impl PrerenderedSpeech {
    /// Wraps an already rendered track.
    pub fn new(track: PcmBuffer) -> Self {
        Self { track }
    }
}

impl SpeechSource for PrerenderedSpeech {
    fn render(&self, _text: &str) -> Result<PcmBuffer, SpeechError> {
        Ok(self.track.clone())
    }
}

/// Renders nothing: a zero-length track, leaving only the masking layer.
#[derive(Debug, Clone, Copy)]
pub struct SilentSpeech {
    sample_rate: u32,
}

impl SilentSpeech {
    /// Creates a silent source at `sample_rate`.
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }
}

impl SpeechSource for SilentSpeech {
    fn render(&self, _text: &str) -> Result<PcmBuffer, SpeechError> {
        PcmBuffer::mono(self.sample_rate, Vec::new())
            .map_err(|e| SpeechError::render(e.to_string()))
    }
}
