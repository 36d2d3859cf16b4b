//! The app-wide audio session: looping background music plus one-shot
//! answer effects.
//!
//! The session is created once at the application root and lent to whoever
//! needs it. Every backend failure is logged here and swallowed, so the worst
//! case for the player is a game without sound.

use super::backend::{AudioBackend, SoundCue, SoundId};
use super::error::AudioResult;
use crate::core::constants::{BACKGROUND_VOLUME, EFFECT_CLEANUP_TIMEOUT_MS, EFFECT_VOLUME};
use crate::round::{EffectPlayer, Outcome};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioOptions {
    pub enabled: bool,
    pub music_volume: f32,
    /// Upper bound on how long an effect handle is kept alive.
    pub effect_timeout: Duration,
}

impl Default for AudioOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            music_volume: BACKGROUND_VOLUME,
            effect_timeout: Duration::from_millis(EFFECT_CLEANUP_TIMEOUT_MS),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct LiveEffect {
    id: SoundId,
    cue: SoundCue,
    deadline: Duration,
}

pub struct AudioSession {
    backend: Box<dyn AudioBackend>,
    options: AudioOptions,
    background: Option<SoundId>,
    playing: bool,
    effects: Vec<LiveEffect>,
    clock: Duration,
}

impl AudioSession {
    pub fn new(backend: Box<dyn AudioBackend>, options: AudioOptions) -> Self {
        tracing::info!(backend = backend.name(), enabled = options.enabled, "audio session created");
        Self {
            backend,
            options,
            background: None,
            playing: false,
            effects: Vec::new(),
            clock: Duration::ZERO,
        }
    }

    // ── Background music ────────────────────────────────────────────

    /// Load and start the looping background track.
    ///
    /// Does nothing if a track is already loaded or sound is disabled. A load
    /// failure is logged and leaves the session silent until the next call.
    pub fn start(&mut self) {
        if self.background.is_some() {
            return;
        }
        if !self.options.enabled {
            tracing::debug!("sound disabled, background music not started");
            return;
        }

        let id = match self.backend.load(SoundCue::Background) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(error = %e, "could not load background music");
                return;
            }
        };
        if let Err(e) = self.begin_background(id) {
            tracing::warn!(error = %e, "could not play background music");
            self.backend.unload(id);
            return;
        }

        self.background = Some(id);
        self.playing = true;
        tracing::info!(volume = self.options.music_volume, "background music started");
    }

    fn begin_background(&mut self, id: SoundId) -> AudioResult<()> {
        self.backend.set_looping(id, true)?;
        self.backend.set_volume(id, self.options.music_volume)?;
        self.backend.play(id)
    }

    /// Halt and release the background track. Does nothing if none is loaded.
    pub fn stop(&mut self) {
        let Some(id) = self.background.take() else {
            return;
        };
        if let Err(e) = self.backend.stop(id) {
            tracing::warn!(error = %e, "could not stop background music");
        }
        self.backend.unload(id);
        self.playing = false;
        tracing::info!("background music stopped");
    }

    /// True while a background track is loaded and playing.
    pub fn is_playing(&self) -> bool {
        self.background.is_some() && self.playing
    }

    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    // ── Enable / disable ────────────────────────────────────────────

    pub fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    /// Turn sound on or off. Off pauses the music and mutes new effects; on
    /// resumes the music, starting it if it was never loaded.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        tracing::info!(enabled, "sound toggled");

        match (enabled, self.background) {
            (false, Some(id)) => {
                if let Err(e) = self.backend.pause(id) {
                    tracing::warn!(error = %e, "could not pause background music");
                }
                self.playing = false;
            }
            (true, Some(id)) => match self.backend.play(id) {
                Ok(()) => self.playing = true,
                Err(e) => tracing::warn!(error = %e, "could not resume background music"),
            },
            (true, None) => self.start(),
            (false, None) => {}
        }
    }

    /// Flip sound on/off and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.options.enabled);
        self.options.enabled
    }

    // ── Effects ─────────────────────────────────────────────────────

    /// Fire-and-forget effect for an answer outcome.
    ///
    /// Each call owns its own handle, released once the backend reports the
    /// sound finished or the cleanup timeout passes.
    pub fn play_effect(&mut self, outcome: Outcome) {
        if !self.options.enabled {
            return;
        }
        let cue = SoundCue::for_outcome(outcome);
        let id = match self.backend.load(cue) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(?cue, error = %e, "could not load effect");
                return;
            }
        };
        let started = self
            .backend
            .set_volume(id, EFFECT_VOLUME)
            .and_then(|()| self.backend.play(id));
        if let Err(e) = started {
            tracing::warn!(?cue, error = %e, "could not play effect");
            self.backend.unload(id);
            return;
        }

        self.effects.push(LiveEffect {
            id,
            cue,
            deadline: self.clock + self.options.effect_timeout,
        });
    }

    pub fn live_effects(&self) -> usize {
        self.effects.len()
    }

    /// Advance the session clock and release finished or expired effects.
    pub fn tick(&mut self, elapsed: Duration) {
        self.clock += elapsed;
        let now = self.clock;
        let backend = &mut self.backend;
        self.effects.retain(|fx| {
            let finished = backend.is_finished(fx.id);
            if finished || now >= fx.deadline {
                tracing::trace!(cue = ?fx.cue, finished, "effect released");
                backend.unload(fx.id);
                false
            } else {
                true
            }
        });
    }

    /// Release every sound this session holds.
    pub fn shutdown(&mut self) {
        self.stop();
        for fx in self.effects.drain(..) {
            self.backend.unload(fx.id);
        }
    }

    /// Handles the backend still holds (background plus live effects).
    pub fn loaded_sounds(&self) -> usize {
        self.backend.loaded_count()
    }
}

impl EffectPlayer for AudioSession {
    fn play_effect(&mut self, outcome: Outcome) {
        AudioSession::play_effect(self, outcome);
    }
}

impl Drop for AudioSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
