//! Background music.

use std::{fs, io::Cursor, path::Path};

use log::info;
use rodio::{Decoder, OutputStream, Sink};

use crate::error::AudioError;

/// Volume of the background loop, relative to the source.
const MUSIC_VOLUME: f32 = 0.35;

/// Handle on a music loop playing on the default output device.
///
/// Playback runs on the audio backend's own thread and never blocks the game loop. Dropping the
/// player stops the music.
#[expect(
    clippy::module_name_repetitions,
    reason = "A bare `Player` would be confused with the maze's player."
)]
pub struct AudioPlayer {
    /// Output stream, which must outlive the sink.
    _stream: OutputStream,
    /// Sink the loop is playing on.
    sink: Sink,
}

impl AudioPlayer {
    /// Starts looping the music file at `path`.
    ///
    /// The file is read and decoded before the output device is opened, so a missing or broken
    /// file is reported even on machines without sound.
    ///
    /// # Errors
    ///
    /// Returns an [`AudioError`] when the file cannot be read or decoded, or when no output device
    /// is available. Callers are expected to carry on without music.
    pub fn play_looped(path: &Path) -> Result<Self, AudioError> {
        let bytes = fs::read(path).map_err(|source| AudioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new_looped(Cursor::new(bytes))?;

        let (stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;
        sink.set_volume(MUSIC_VOLUME);
        sink.append(source);

        info!("playing {} in a loop", path.display());

        Ok(Self {
            _stream: stream,
            sink,
        })
    }

    /// Stops the music.
    pub fn stop(&self) {
        self.sink.stop();
    }
}
