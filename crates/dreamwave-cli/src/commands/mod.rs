//! CLI command implementations

pub mod binaural;
pub mod inspect;
pub mod render;
pub mod subliminal;
pub mod validate;

mod output;
