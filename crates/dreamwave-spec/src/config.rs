//! Render configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Bound, ParameterError};
use crate::limits::{
    ALLOWED_SAMPLE_RATES, DEFAULT_BLOCK_SECONDS, DEFAULT_SAMPLE_RATE, MAX_BLOCK_SECONDS,
    MIN_BLOCK_SECONDS,
};
use crate::validation::check_between;

/// Engine-wide render settings.
///
/// Assets are always 16-bit PCM; only the rate and the size of the blocks the
/// renderer works in are configurable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Length of one render block in seconds. Float intermediates never
    /// outlive a block.
    pub block_seconds: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            block_seconds: DEFAULT_BLOCK_SECONDS,
        }
    }
}

impl RenderConfig {
    /// Creates a configuration at the given rate with one-second blocks.
    pub fn with_sample_rate(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            ..Self::default()
        }
    }

    /// Checks the sample rate and block length.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !ALLOWED_SAMPLE_RATES.contains(&self.sample_rate) {
            return Err(ParameterError::new(
                "sampleRate",
                self.sample_rate as f64,
                Bound::OneOf(ALLOWED_SAMPLE_RATES),
            ));
        }
        check_between(
            "blockSeconds",
            self.block_seconds,
            MIN_BLOCK_SECONDS,
            MAX_BLOCK_SECONDS,
        )
    }

    /// Number of frames per render block, at least one.
    pub fn block_frames(&self) -> usize {
        ((self.block_seconds * self.sample_rate as f64).round() as usize).max(1)
    }
}
