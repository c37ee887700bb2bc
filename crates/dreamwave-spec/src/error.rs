//! Error types for parameter validation and job parsing.

use std::fmt;

use thiserror::Error;

/// The contract a rejected parameter violated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Value must be a finite number.
    Finite,
    /// Value must lie in `min..=max`.
    Between {
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// Value must not exceed `max`.
    AtMost(f64),
    /// Value must be one of a fixed set.
    OneOf(&'static [u32]),
    /// Text length (in characters) must lie in `min..=max`.
    Length {
        /// Inclusive lower bound.
        min: usize,
        /// Inclusive upper bound.
        max: usize,
    },
    /// The lowest rendered frequency must stay at or above `min_hz`.
    AboveFloor {
        /// Lowest audible frequency the engine renders.
        min_hz: f64,
    },
    /// The highest rendered frequency must stay below the Nyquist frequency.
    BelowNyquist {
        /// Half the configured sample rate.
        nyquist_hz: f64,
    },
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Finite => write!(f, "must be a finite number"),
            Bound::Between { min, max } => write!(f, "must be between {} and {}", min, max),
            Bound::AtMost(max) => write!(f, "must be at most {}", max),
            Bound::OneOf(values) => write!(f, "must be one of {:?}", values),
            Bound::Length { min, max } => {
                write!(f, "length must be between {} and {} characters", min, max)
            }
            Bound::AboveFloor { min_hz } => {
                write!(f, "must keep carrier - beat/2 at or above {} Hz", min_hz)
            }
            Bound::BelowNyquist { nyquist_hz } => write!(
                f,
                "must keep carrier + beat/2 below the Nyquist frequency ({} Hz)",
                nyquist_hz
            ),
        }
    }
}

/// A rejected parameter: which field, the offending value, and the bound it broke.
///
/// `field` is the serialized (camelCase) name, so messages line up with the
/// JSON the caller sent.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid parameter '{field}' = {value}: {bound}")]
pub struct ParameterError {
    /// Serialized field name (e.g. `carrierFrequencyHz`).
    pub field: &'static str,
    /// The rejected value (character count for text fields).
    pub value: f64,
    /// The violated bound.
    pub bound: Bound,
}

impl ParameterError {
    /// Creates a new parameter error.
    pub fn new(field: &'static str, value: f64, bound: Bound) -> Self {
        Self {
            field,
            value,
            bound,
        }
    }
}

/// Errors raised while loading a job file.
#[derive(Debug, Error)]
pub enum JobError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The job parsed but carries invalid parameters.
    #[error(transparent)]
    Invalid(#[from] ParameterError),
}
