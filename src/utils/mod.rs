//! Utility modules: build info, settings, file helpers, logging.

pub mod build_info;
pub mod logging;
pub mod persistence;
pub mod settings;

pub use settings::{Command, Overrides, Settings};
