//! Parameter validation.
//!
//! Both synthesis entry points, the CLI, and job files validate through these
//! functions. Checks run in field order and stop at the first violation.

use crate::error::{Bound, ParameterError};
use crate::limits::{
    MAX_AFFIRMATION_CHARS, MAX_BEAT_HZ, MAX_CARRIER_HZ, MAX_DURATION_SECONDS, MAX_GAIN_DBFS,
    MIN_AFFIRMATION_CHARS, MIN_BEAT_HZ, MIN_CARRIER_HZ, MIN_DURATION_SECONDS,
};
use crate::params::{AudioParameters, SubliminalParameters};

/// Validates binaural parameters for rendering at `sample_rate`.
///
/// Besides the fixed bounds, the left-ear frequency must not drop below the
/// carrier floor and the right-ear frequency must stay below the Nyquist
/// frequency of the render rate.
pub fn validate_audio_parameters(
    params: &AudioParameters,
    sample_rate: u32,
) -> Result<(), ParameterError> {
    check_between(
        "carrierFrequencyHz",
        params.carrier_frequency_hz,
        MIN_CARRIER_HZ,
        MAX_CARRIER_HZ,
    )?;
    check_between(
        "beatFrequencyHz",
        params.beat_frequency_hz,
        MIN_BEAT_HZ,
        MAX_BEAT_HZ,
    )?;
    check_duration(params.duration_seconds)?;
    check_gain("gainDbfs", params.gain_dbfs)?;

    if params.left_frequency_hz() < MIN_CARRIER_HZ {
        return Err(ParameterError::new(
            "carrierFrequencyHz",
            params.carrier_frequency_hz,
            Bound::AboveFloor {
                min_hz: MIN_CARRIER_HZ,
            },
        ));
    }

    let nyquist_hz = sample_rate as f64 / 2.0;
    if params.right_frequency_hz() >= nyquist_hz {
        return Err(ParameterError::new(
            "carrierFrequencyHz",
            params.carrier_frequency_hz,
            Bound::BelowNyquist { nyquist_hz },
        ));
    }

    Ok(())
}

/// Validates subliminal parameters.
pub fn validate_subliminal_parameters(params: &SubliminalParameters) -> Result<(), ParameterError> {
    check_duration(params.duration_seconds)?;
    check_gain("subliminalGainDbfs", params.subliminal_gain_dbfs)?;
    check_gain("maskingGainDbfs", params.masking_gain_dbfs)?;
    Ok(())
}

/// Validates affirmation text length (in characters, not bytes).
///
/// The engine never consumes text directly; callers check it before asking a
/// speech source to render it.
pub fn validate_affirmation_text(text: &str) -> Result<(), ParameterError> {
    let chars = text.chars().count();
    if !(MIN_AFFIRMATION_CHARS..=MAX_AFFIRMATION_CHARS).contains(&chars) {
        return Err(ParameterError::new(
            "affirmationText",
            chars as f64,
            Bound::Length {
                min: MIN_AFFIRMATION_CHARS,
                max: MAX_AFFIRMATION_CHARS,
            },
        ));
    }
    Ok(())
}

fn check_duration(duration_seconds: f64) -> Result<(), ParameterError> {
    check_between(
        "durationSeconds",
        duration_seconds,
        MIN_DURATION_SECONDS,
        MAX_DURATION_SECONDS,
    )
}

pub(crate) fn check_between(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::new(field, value, Bound::Finite));
    }
    if value < min || value > max {
        return Err(ParameterError::new(field, value, Bound::Between { min, max }));
    }
    Ok(())
}

fn check_gain(field: &'static str, value: f64) -> Result<(), ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::new(field, value, Bound::Finite));
    }
    if value > MAX_GAIN_DBFS {
        return Err(ParameterError::new(
            field,
            value,
            Bound::AtMost(MAX_GAIN_DBFS),
        ));
    }
    Ok(())
}
