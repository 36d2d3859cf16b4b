// Main loop
pub const TICK_INTERVAL_MS: u64 = 50;

// Round timing
pub const FEEDBACK_DISPLAY_MS: u64 = 1500;
pub const ADVANCE_DELAY_MS: u64 = 500;

// Audio
pub const BACKGROUND_VOLUME: f32 = 0.3;
pub const EFFECT_VOLUME: f32 = 1.0;
pub const EFFECT_CLEANUP_TIMEOUT_MS: u64 = 2000;

// Sound asset file names, resolved against the asset directory
pub const BACKGROUND_TRACK_FILE: &str = "background.mp3";
pub const CORRECT_EFFECT_FILE: &str = "correct.mp3";
pub const WRONG_EFFECT_FILE: &str = "wrong.mp3";
pub const DEFAULT_ASSET_DIR: &str = "assets/sounds";

// Settings and logs live under ~/.playroom/
pub const DATA_DIR_NAME: &str = ".playroom";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "playroom.log";
pub const LOG_FILTER_ENV: &str = "PLAYROOM_LOG";
pub const DEFAULT_LOG_FILTER: &str = "playroom=info";
