//! Player settings from ~/.playroom/settings.json and command-line overrides.
//!
//! Settings are only read, never written: the file is there for parents who
//! want to mute the music or slow the pacing down.

use super::persistence::load_json_or_default;
use crate::audio::AudioOptions;
use crate::core::constants::*;
use crate::round::RoundTiming;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sound_enabled: bool,
    pub music_volume: f32,
    pub asset_dir: PathBuf,
    pub feedback_ms: u64,
    pub advance_ms: u64,
    pub effect_timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            music_volume: BACKGROUND_VOLUME,
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            feedback_ms: FEEDBACK_DISPLAY_MS,
            advance_ms: ADVANCE_DELAY_MS,
            effect_timeout_ms: EFFECT_CLEANUP_TIMEOUT_MS,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        let settings: Settings = load_json_or_default(SETTINGS_FILE);
        settings.sanitized()
    }

    /// Clamp out-of-range values instead of rejecting the whole file.
    pub fn sanitized(mut self) -> Self {
        if !self.music_volume.is_finite() {
            self.music_volume = BACKGROUND_VOLUME;
        }
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self
    }

    pub fn round_timing(&self) -> RoundTiming {
        RoundTiming {
            feedback: Duration::from_millis(self.feedback_ms),
            advance: Duration::from_millis(self.advance_ms),
        }
    }

    pub fn audio_options(&self) -> AudioOptions {
        AudioOptions {
            enabled: self.sound_enabled,
            music_volume: self.music_volume,
            effect_timeout: Duration::from_millis(self.effect_timeout_ms),
        }
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if overrides.mute {
            self.sound_enabled = false;
        }
        if let Some(dir) = &overrides.asset_dir {
            self.asset_dir = dir.clone();
        }
    }
}

/// Values given on the command line, which win over the settings file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub mute: bool,
    pub asset_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Overrides),
    Version,
    Help,
    Invalid(String),
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Command {
    let mut overrides = Overrides::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => return Command::Version,
            "--help" | "-h" => return Command::Help,
            "--mute" => overrides.mute = true,
            "--assets" => match iter.next() {
                Some(dir) => overrides.asset_dir = Some(PathBuf::from(dir)),
                None => return Command::Invalid("--assets needs a directory".to_string()),
            },
            other => return Command::Invalid(format!("Unknown argument: {}", other)),
        }
    }
    Command::Run(overrides)
}

pub const HELP_TEXT: &str = "\
Playroom - learning games for kids

Usage: playroom [options]

Options:
  --mute          Start with sound off
  --assets <dir>  Directory holding background.mp3, correct.mp3, wrong.mp3
  --version       Show version information
  --help          Show this help message";
