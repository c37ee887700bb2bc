//! Speech tracks read from WAV files.

use std::path::{Path, PathBuf};

use dreamwave_backend_audio::wav::quantize;
use dreamwave_backend_audio::{PcmBuffer, SpeechError, SpeechSource};

/// Loads a WAV file as a speech track.
///
/// Accepts mono or stereo files with integer samples of 8 to 32 bits or
/// 32-bit float samples. The track keeps the file's sample rate; the engine
/// resamples it when needed.
pub fn load_speech_track(path: &Path) -> Result<PcmBuffer, SpeechError> {
    let reader = hound::WavReader::open(path).map_err(|e| {
        SpeechError::render(format!("failed to open '{}': {}", path.display(), e))
    })?;
    let spec = reader.spec();

    if spec.channels != 1 && spec.channels != 2 {
        return Err(SpeechError::render(format!(
            "'{}' has {} channels (supported: 1 or 2)",
            path.display(),
            spec.channels
        )));
    }

    let read_error =
        |e: hound::Error| SpeechError::render(format!("failed to read '{}': {}", path.display(), e));

    let samples: Vec<i16> = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Int, 16) => reader
            .into_samples::<i16>()
            .collect::<Result<_, _>>()
            .map_err(read_error)?,
        (hound::SampleFormat::Int, bits @ 8..=32) => {
            let full_scale = (1i64 << (bits - 1)) as f64;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| quantize(v as f64 / full_scale)))
                .collect::<Result<_, _>>()
                .map_err(read_error)?
        }
        (hound::SampleFormat::Float, 32) => reader
            .into_samples::<f32>()
            .map(|s| s.map(|v| quantize(v as f64)))
            .collect::<Result<_, _>>()
            .map_err(read_error)?,
        (format, bits) => {
            return Err(SpeechError::render(format!(
                "'{}' uses unsupported {:?} samples of {} bits",
                path.display(),
                format,
                bits
            )));
        }
    };

    let track = PcmBuffer::new(spec.sample_rate, spec.channels, samples)
        .map_err(|e| SpeechError::render(format!("'{}': {}", path.display(), e)))?;
    tracing::debug!(
        path = %path.display(),
        sample_rate = track.sample_rate(),
        channels = track.channels(),
        frames = track.frame_count(),
        "loaded speech track"
    );
    Ok(track)
}

/// A speech source backed by a pre-rendered WAV file.
///
/// The file is read on each render; the text only matters for validation.
#[derive(Debug, Clone)]
pub struct WavFileSpeech {
    path: PathBuf,
}

impl WavFileSpeech {
    /// Creates a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the WAV file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SpeechSource for WavFileSpeech {
    fn render(&self, _text: &str) -> Result<PcmBuffer, SpeechError> {
        load_speech_track(&self.path)
    }
}
