//! Tuning constants shared by the round engine, audio, and the shell.

pub mod constants;

pub use constants::*;
