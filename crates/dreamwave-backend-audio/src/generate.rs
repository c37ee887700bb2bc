//! Entry points that turn validated parameters into WAV assets.
//!
//! Every call validates its inputs once, derives the integer frame count from
//! the [`SampleClock`], renders block by block into a [`PcmBuffer`], and
//! encodes the result. Nothing is written to disk.

use dreamwave_spec::{
    validate_affirmation_text, validate_audio_parameters, validate_subliminal_parameters,
    AudioParameters, RenderConfig, SubliminalParameters,
};

use crate::binaural::BinauralComposer;
use crate::clock::SampleClock;
use crate::error::AudioResult;
use crate::mixer::TrackMixer;
use crate::noise::NoiseSource;
use crate::pcm::{PcmBuffer, SpeechTrack};
use crate::resample::resample_linear;
use crate::speech::SpeechSource;
use crate::wav::WavAsset;

/// Synthesizes assets for one render configuration.
///
/// Holds no mutable state, so a single instance can serve any number of
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Synthesizer {
    config: RenderConfig,
}

impl Synthesizer {
    /// Creates a synthesizer after validating `config`.
    pub fn new(config: RenderConfig) -> AudioResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The render configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn clock(&self) -> SampleClock {
        SampleClock::new(self.config.sample_rate)
    }

    /// Renders a stereo binaural beat.
    pub fn generate_binaural_beat(&self, params: &AudioParameters) -> AudioResult<WavAsset> {
        validate_audio_parameters(params, self.config.sample_rate)?;
        let frames = self.clock().sample_count(params.duration_seconds)?;

        let output = BinauralComposer::new(self.config.block_frames()).render(
            params.carrier_frequency_hz,
            params.beat_frequency_hz,
            frames,
            self.config.sample_rate,
            params.gain_dbfs,
        )?;
        let asset = WavAsset::from_pcm(output.pcm, output.clipped_samples)?;

        tracing::info!(
            carrier_hz = params.carrier_frequency_hz,
            beat_hz = params.beat_frequency_hz,
            frames,
            bytes = asset.byte_length(),
            "generated binaural beat"
        );
        Ok(asset)
    }

    /// Renders `speech` centered over a masking track.
    ///
    /// Speech at another sample rate is resampled to the render rate first.
    /// Shorter speech is padded with masking on both sides; longer speech is
    /// truncated to the requested duration.
    pub fn generate_subliminal_audio(
        &self,
        params: &SubliminalParameters,
        speech: &SpeechTrack,
    ) -> AudioResult<WavAsset> {
        validate_subliminal_parameters(params)?;
        let rate = self.config.sample_rate;
        let frames = self.clock().sample_count(params.duration_seconds)?;

        let resampled;
        let speech = if speech.sample_rate() == rate {
            speech
        } else {
            resampled = resample_linear(speech, rate)?;
            &resampled
        };

        let mut masking = NoiseSource::new(params.masking_kind, params.seed, rate);
        let output = TrackMixer::new(self.config.block_frames()).render(
            speech,
            params.subliminal_gain_dbfs,
            &mut masking,
            params.masking_gain_dbfs,
            frames,
        )?;
        let asset = WavAsset::from_pcm(output.pcm, output.clipped_samples)?;

        tracing::info!(
            masking = %params.masking_kind,
            speech_frames = speech.frame_count(),
            frames,
            bytes = asset.byte_length(),
            "generated subliminal audio"
        );
        Ok(asset)
    }

    /// Renders `text` through `source` and mixes it as
    /// [`generate_subliminal_audio`](Self::generate_subliminal_audio) does.
    pub fn generate_subliminal_from_text(
        &self,
        params: &SubliminalParameters,
        text: &str,
        source: &dyn SpeechSource,
    ) -> AudioResult<WavAsset> {
        validate_subliminal_parameters(params)?;
        validate_affirmation_text(text)?;
        let speech: PcmBuffer = source.render(text)?;
        self.generate_subliminal_audio(params, &speech)
    }
}

/// Renders a binaural beat at the default configuration.
pub fn generate_binaural_beat(params: &AudioParameters) -> AudioResult<WavAsset> {
    Synthesizer::default().generate_binaural_beat(params)
}

/// Renders a subliminal track at the default configuration.
pub fn generate_subliminal_audio(
    params: &SubliminalParameters,
    speech: &SpeechTrack,
) -> AudioResult<WavAsset> {
    Synthesizer::default().generate_subliminal_audio(params, speech)
}
