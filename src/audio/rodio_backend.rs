//! Sound output through rodio. Built with the `audio` feature.

use super::backend::{AudioBackend, SoundCue, SoundId};
use super::error::{AudioError, AudioResult};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

struct LoadedSound {
    bytes: Vec<u8>,
    sink: Sink,
    volume: f32,
    looping: bool,
    /// A decoded source has been appended to the sink.
    queued: bool,
}

/// Plays sound files from an asset directory on the default output device.
pub struct RodioBackend {
    // Output stops when the stream is dropped.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    asset_dir: PathBuf,
    next_id: u64,
    sounds: HashMap<SoundId, LoadedSound>,
}

impl RodioBackend {
    pub fn new(asset_dir: impl Into<PathBuf>) -> AudioResult<Self> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| AudioError::Output(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            handle,
            asset_dir: asset_dir.into(),
            next_id: 0,
            sounds: HashMap::new(),
        })
    }

    fn new_sink(handle: &OutputStreamHandle) -> AudioResult<Sink> {
        let sink = Sink::try_new(handle).map_err(|e| AudioError::Output(e.to_string()))?;
        sink.pause();
        Ok(sink)
    }

    fn decode(bytes: &[u8]) -> AudioResult<Decoder<Cursor<Vec<u8>>>> {
        Decoder::new(Cursor::new(bytes.to_vec())).map_err(|e| AudioError::Decode(e.to_string()))
    }

    fn sound_mut(&mut self, id: SoundId) -> AudioResult<&mut LoadedSound> {
        self.sounds.get_mut(&id).ok_or(AudioError::UnknownSound(id))
    }
}

impl AudioBackend for RodioBackend {
    fn load(&mut self, cue: SoundCue) -> AudioResult<SoundId> {
        let path = self.asset_dir.join(cue.file_name());
        if !path.is_file() {
            return Err(AudioError::MissingAsset(path));
        }
        let bytes = fs::read(&path)?;
        // Surface undecodable files at load time rather than on first play.
        Self::decode(&bytes)?;

        let sink = Self::new_sink(&self.handle)?;
        let id = SoundId(self.next_id);
        self.next_id += 1;
        self.sounds.insert(
            id,
            LoadedSound {
                bytes,
                sink,
                volume: 1.0,
                looping: false,
                queued: false,
            },
        );
        tracing::debug!(?cue, ?id, path = %path.display(), "sound loaded");
        Ok(id)
    }

    fn play(&mut self, id: SoundId) -> AudioResult<()> {
        let sound = self.sound_mut(id)?;
        if !sound.queued || sound.sink.empty() {
            let source = Self::decode(&sound.bytes)?;
            if sound.looping {
                sound.sink.append(source.repeat_infinite());
            } else {
                sound.sink.append(source);
            }
            sound.queued = true;
        }
        sound.sink.play();
        Ok(())
    }

    fn pause(&mut self, id: SoundId) -> AudioResult<()> {
        self.sound_mut(id)?.sink.pause();
        Ok(())
    }

    fn stop(&mut self, id: SoundId) -> AudioResult<()> {
        let sound = self
            .sounds
            .get_mut(&id)
            .ok_or(AudioError::UnknownSound(id))?;
        let fresh = Self::new_sink(&self.handle)?;
        fresh.set_volume(sound.volume);
        sound.sink.stop();
        sound.sink = fresh;
        sound.queued = false;
        Ok(())
    }

    fn unload(&mut self, id: SoundId) {
        if let Some(sound) = self.sounds.remove(&id) {
            sound.sink.stop();
        }
    }

    fn set_volume(&mut self, id: SoundId, volume: f32) -> AudioResult<()> {
        let sound = self.sound_mut(id)?;
        sound.volume = volume;
        sound.sink.set_volume(volume);
        Ok(())
    }

    fn set_looping(&mut self, id: SoundId, looping: bool) -> AudioResult<()> {
        self.sound_mut(id)?.looping = looping;
        Ok(())
    }

    fn is_finished(&self, id: SoundId) -> bool {
        self.sounds
            .get(&id)
            .map_or(true, |sound| sound.queued && sound.sink.empty())
    }

    fn loaded_count(&self) -> usize {
        self.sounds.len()
    }

    fn name(&self) -> &'static str {
        "rodio"
    }
}
