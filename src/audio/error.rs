//! Audio failures. None of these ever reach the player: the session logs
//! them and carries on without sound.

use super::backend::SoundId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("sound asset not found: {}", .0.display())]
    MissingAsset(PathBuf),

    #[error("failed to read sound asset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode sound: {0}")]
    Decode(String),

    #[error("audio output unavailable: {0}")]
    Output(String),

    #[error("unknown sound handle {0:?}")]
    UnknownSound(SoundId),
}

pub type AudioResult<T> = Result<T, AudioError>;
