//! Sound: the backend seam, the rodio implementation, and the app-wide
//! session that owns background music and answer effects.

pub mod backend;
pub mod error;
#[cfg(feature = "audio")]
pub mod rodio_backend;
pub mod session;

pub use backend::{AudioBackend, SilentBackend, SoundCue, SoundId};
pub use error::{AudioError, AudioResult};
pub use session::{AudioOptions, AudioSession};

use std::path::Path;

/// Pick the best available backend: rodio when built with the `audio`
/// feature and an output device opens, otherwise silence.
#[cfg(feature = "audio")]
pub fn open_backend(asset_dir: &Path) -> Box<dyn AudioBackend> {
    match rodio_backend::RodioBackend::new(asset_dir) {
        Ok(backend) => Box::new(backend),
        Err(e) => {
            tracing::warn!(error = %e, "no audio output, continuing without sound");
            Box::new(SilentBackend::new())
        }
    }
}

#[cfg(not(feature = "audio"))]
pub fn open_backend(asset_dir: &Path) -> Box<dyn AudioBackend> {
    tracing::info!(assets = %asset_dir.display(), "built without audio support");
    Box::new(SilentBackend::new())
}
