//! Synthesis parameter types.
//!
//! Both parameter sets are plain values. They are validated once per
//! synthesis call and never modified afterwards; out-of-range values are
//! rejected, not clamped.

use serde::{Deserialize, Serialize};

use crate::limits::{
    DEFAULT_BINAURAL_GAIN_DBFS, DEFAULT_MASKING_GAIN_DBFS, DEFAULT_SUBLIMINAL_GAIN_DBFS,
};

/// Parameters for a binaural-beat asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioParameters {
    /// Perceived pitch of the tone pair, in Hz.
    pub carrier_frequency_hz: f64,
    /// Difference between the right and left ear frequencies, in Hz.
    pub beat_frequency_hz: f64,
    /// Asset length in seconds.
    pub duration_seconds: f64,
    /// Output level relative to full scale.
    #[serde(default = "default_binaural_gain")]
    pub gain_dbfs: f64,
}

impl AudioParameters {
    /// Creates binaural parameters at the default gain.
    pub fn new(carrier_frequency_hz: f64, beat_frequency_hz: f64, duration_seconds: f64) -> Self {
        Self {
            carrier_frequency_hz,
            beat_frequency_hz,
            duration_seconds,
            gain_dbfs: DEFAULT_BINAURAL_GAIN_DBFS,
        }
    }

    /// Sets the output gain.
    pub fn with_gain(mut self, gain_dbfs: f64) -> Self {
        self.gain_dbfs = gain_dbfs;
        self
    }

    /// Frequency presented to the left ear.
    pub fn left_frequency_hz(&self) -> f64 {
        self.carrier_frequency_hz - self.beat_frequency_hz / 2.0
    }

    /// Frequency presented to the right ear.
    pub fn right_frequency_hz(&self) -> f64 {
        self.carrier_frequency_hz + self.beat_frequency_hz / 2.0
    }
}

/// Kind of masking layer rendered under the affirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaskingKind {
    /// Seeded uniform white noise.
    WhiteNoise,
    /// Soft chord of low sine partials.
    AmbientTone,
}

impl MaskingKind {
    /// Returns the serialized name (`white-noise` / `ambient-tone`).
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskingKind::WhiteNoise => "white-noise",
            MaskingKind::AmbientTone => "ambient-tone",
        }
    }
}

impl std::fmt::Display for MaskingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MaskingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white-noise" => Ok(MaskingKind::WhiteNoise),
            "ambient-tone" => Ok(MaskingKind::AmbientTone),
            other => Err(format!(
                "unknown masking kind '{}', expected white-noise or ambient-tone",
                other
            )),
        }
    }
}

/// Parameters for a subliminal-affirmation asset.
///
/// The affirmation itself arrives separately as a rendered speech track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubliminalParameters {
    /// Masking layer rendered at full length.
    pub masking_kind: MaskingKind,
    /// Asset length in seconds.
    pub duration_seconds: f64,
    /// Level of the speech track.
    #[serde(default = "default_subliminal_gain")]
    pub subliminal_gain_dbfs: f64,
    /// Level of the masking track.
    #[serde(default = "default_masking_gain")]
    pub masking_gain_dbfs: f64,
    /// Noise seed. Identical seeds give byte-identical white-noise assets.
    #[serde(default)]
    pub seed: u32,
}

impl SubliminalParameters {
    /// Creates subliminal parameters at the default gains and seed 0.
    pub fn new(masking_kind: MaskingKind, duration_seconds: f64) -> Self {
        Self {
            masking_kind,
            duration_seconds,
            subliminal_gain_dbfs: DEFAULT_SUBLIMINAL_GAIN_DBFS,
            masking_gain_dbfs: DEFAULT_MASKING_GAIN_DBFS,
            seed: 0,
        }
    }

    /// Sets the speech and masking gains.
    pub fn with_gains(mut self, subliminal_gain_dbfs: f64, masking_gain_dbfs: f64) -> Self {
        self.subliminal_gain_dbfs = subliminal_gain_dbfs;
        self.masking_gain_dbfs = masking_gain_dbfs;
        self
    }

    /// Sets the noise seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}

fn default_binaural_gain() -> f64 {
    DEFAULT_BINAURAL_GAIN_DBFS
}
fn default_subliminal_gain() -> f64 {
    DEFAULT_SUBLIMINAL_GAIN_DBFS
}
fn default_masking_gain() -> f64 {
    DEFAULT_MASKING_GAIN_DBFS
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_audio_parameters_serde_camel_case() {
        let params = AudioParameters::new(200.0, 10.0, 60.0);
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("carrierFrequencyHz"));
        assert!(json.contains("beatFrequencyHz"));
        let parsed: AudioParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, params);
    }

    #[test]
    fn test_audio_parameters_default_gain() {
        let parsed: AudioParameters = serde_json::from_str(
            r#"{"carrierFrequencyHz": 200, "beatFrequencyHz": 10, "durationSeconds": 60}"#,
        )
        .unwrap();
        assert_eq!(parsed.gain_dbfs, -6.0);
    }

    #[test]
    fn test_ear_frequencies_split_symmetrically() {
        let params = AudioParameters::new(200.0, 10.0, 60.0);
        assert_eq!(params.left_frequency_hz(), 195.0);
        assert_eq!(params.right_frequency_hz(), 205.0);
    }

    #[test]
    fn test_subliminal_defaults() {
        let parsed: SubliminalParameters =
            serde_json::from_str(r#"{"maskingKind": "ambient-tone", "durationSeconds": 300}"#)
                .unwrap();
        assert_eq!(
            parsed,
            SubliminalParameters::new(MaskingKind::AmbientTone, 300.0)
        );
        assert_eq!(parsed.subliminal_gain_dbfs, -30.0);
        assert_eq!(parsed.masking_gain_dbfs, -10.0);
    }

    #[test]
    fn test_masking_kind_names() {
        assert_eq!(
            "white-noise".parse::<MaskingKind>(),
            Ok(MaskingKind::WhiteNoise)
        );
        assert_eq!(MaskingKind::AmbientTone.to_string(), "ambient-tone");
        assert!("pink-noise".parse::<MaskingKind>().is_err());
    }
}
