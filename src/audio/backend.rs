//! The audio subsystem seam: what the session needs from a sound library.

use super::error::{AudioError, AudioResult};
use crate::core::constants::{BACKGROUND_TRACK_FILE, CORRECT_EFFECT_FILE, WRONG_EFFECT_FILE};
use crate::round::Outcome;
use std::collections::HashSet;

/// The sounds the game knows how to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Background,
    Correct,
    Wrong,
}

impl SoundCue {
    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Correct => Self::Correct,
            Outcome::Incorrect => Self::Wrong,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Background => BACKGROUND_TRACK_FILE,
            Self::Correct => CORRECT_EFFECT_FILE,
            Self::Wrong => WRONG_EFFECT_FILE,
        }
    }
}

/// Handle to a sound loaded by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SoundId(pub u64);

/// A sound library: loads cues into handles and controls their playback.
///
/// Every loaded handle is owned by exactly one caller, who must `unload` it.
pub trait AudioBackend {
    fn load(&mut self, cue: SoundCue) -> AudioResult<SoundId>;
    fn play(&mut self, id: SoundId) -> AudioResult<()>;
    fn pause(&mut self, id: SoundId) -> AudioResult<()>;
    fn stop(&mut self, id: SoundId) -> AudioResult<()>;
    fn unload(&mut self, id: SoundId);
    fn set_volume(&mut self, id: SoundId, volume: f32) -> AudioResult<()>;
    fn set_looping(&mut self, id: SoundId, looping: bool) -> AudioResult<()>;

    /// Playback status: true once the sound has played to its end, or if
    /// the handle is unknown.
    fn is_finished(&self, id: SoundId) -> bool;

    /// Number of handles currently loaded.
    fn loaded_count(&self) -> usize;

    fn name(&self) -> &'static str;
}

/// Backend that accepts every call and makes no sound. Played sounds count
/// as finished straight away.
#[derive(Debug, Default)]
pub struct SilentBackend {
    next_id: u64,
    loaded: HashSet<SoundId>,
}

impl SilentBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&self, id: SoundId) -> AudioResult<()> {
        if self.loaded.contains(&id) {
            Ok(())
        } else {
            Err(AudioError::UnknownSound(id))
        }
    }
}

impl AudioBackend for SilentBackend {
    fn load(&mut self, _cue: SoundCue) -> AudioResult<SoundId> {
        let id = SoundId(self.next_id);
        self.next_id += 1;
        self.loaded.insert(id);
        Ok(id)
    }

    fn play(&mut self, id: SoundId) -> AudioResult<()> {
        self.check(id)
    }

    fn pause(&mut self, id: SoundId) -> AudioResult<()> {
        self.check(id)
    }

    fn stop(&mut self, id: SoundId) -> AudioResult<()> {
        self.check(id)
    }

    fn unload(&mut self, id: SoundId) {
        self.loaded.remove(&id);
    }

    fn set_volume(&mut self, id: SoundId, _volume: f32) -> AudioResult<()> {
        self.check(id)
    }

    fn set_looping(&mut self, id: SoundId, _looping: bool) -> AudioResult<()> {
        self.check(id)
    }

    fn is_finished(&self, _id: SoundId) -> bool {
        true
    }

    fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    fn name(&self) -> &'static str {
        "silent"
    }
}
