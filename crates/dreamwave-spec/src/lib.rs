//! Dreamwave Parameter Library
//!
//! This crate provides the value types, bounds, and validation shared by the
//! Dreamwave synthesis engine and its front ends. Every entry point validates
//! through the functions in [`validation`], so there is exactly one definition
//! of each bound.
//!
//! # Example
//!
//! ```
//! use dreamwave_spec::{validate_audio_parameters, AudioParameters, DEFAULT_SAMPLE_RATE};
//!
//! let params = AudioParameters::new(200.0, 10.0, 60.0);
//! assert!(validate_audio_parameters(&params, DEFAULT_SAMPLE_RATE).is_ok());
//!
//! let too_low = AudioParameters::new(19.999, 10.0, 60.0);
//! let err = validate_audio_parameters(&too_low, DEFAULT_SAMPLE_RATE).unwrap_err();
//! assert_eq!(err.field, "carrierFrequencyHz");
//! ```
//!
//! # Modules
//!
//! - [`config`]: Render configuration (sample rate, block size)
//! - [`error`]: Parameter and job errors
//! - [`job`]: JSON job files consumed by the CLI
//! - [`limits`]: Parameter bounds and defaults
//! - [`params`]: Binaural and subliminal parameter types
//! - [`validation`]: The validation functions

pub mod config;
pub mod error;
pub mod job;
pub mod limits;
pub mod params;
pub mod validation;

pub use config::RenderConfig;
pub use error::{Bound, JobError, ParameterError};
pub use job::{Job, JobFile, SubliminalJob};
pub use limits::*;
pub use params::{AudioParameters, MaskingKind, SubliminalParameters};
pub use validation::{
    validate_affirmation_text, validate_audio_parameters, validate_subliminal_parameters,
};
