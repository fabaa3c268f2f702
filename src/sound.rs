//! Alarm sound playback.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::mpsc::Sender,
    thread,
};

use rodio::{Decoder, OutputStreamBuilder, Sink};

use crate::{communication::Message, error::PlaybackError};

/// Something that can start playing a sound file without blocking the caller.
pub trait SoundPlayer {
    fn play(&self, path: PathBuf);
}

/// Plays each alarm on its own detached thread.
///
/// The outcome is reported through `sender`, nothing waits for the thread or
/// can stop it once it started.
#[derive(Debug, Clone)]
pub struct RodioPlayer {
    sender: Sender<Message>,
}

impl RodioPlayer {
    #[must_use]
    pub const fn new(sender: Sender<Message>) -> Self {
        Self { sender }
    }
}

impl SoundPlayer for RodioPlayer {
    fn play(&self, path: PathBuf) {
        let sender = self.sender.clone();
        thread::spawn(move || {
            let result = play_file(&path, || {
                // the gui may already be gone, nothing to report to then
                let _ = sender.send(Message::PlaybackStarted(path.clone()));
            });
            if let Err(error) = result {
                log::warn!("couldn't play {}: {error}", path.display());
                let _ = sender.send(Message::PlaybackFailed { path, error });
            }
        });
    }
}

/// Decodes `path`, opens the default output and blocks until it finished
/// playing. `started` runs once the sound is audible.
pub fn play_file(path: &Path, started: impl FnOnce()) -> Result<(), PlaybackError> {
    let file = File::open(path).map_err(|source| PlaybackError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let source = Decoder::new(BufReader::new(file))?;
    let mut stream = OutputStreamBuilder::open_default_stream()?;
    stream.log_on_drop(false);
    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.play();
    log::info!("playing {}", path.display());
    started();
    sink.sleep_until_end();
    Ok(())
}
