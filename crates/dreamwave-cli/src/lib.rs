//! Dreamwave CLI library.
//!
//! This crate provides the command implementations behind the `dreamwave`
//! binary, plus the WAV-file speech source and logging setup. It is the only
//! part of Dreamwave that touches the filesystem.

pub mod commands;
pub mod logging;
pub mod speech;
