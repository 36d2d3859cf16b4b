//! Playroom - learning games for kids in the terminal.
//!
//! This module exposes the game logic for testing and the binary.

pub mod app;
pub mod audio;
pub mod core;
pub mod games;
pub mod input;
pub mod round;
pub mod ui;
pub mod utils;
