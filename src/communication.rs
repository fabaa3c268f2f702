use std::path::PathBuf;

/// sent from the playback thread back to the gui
#[derive(Debug)]
pub enum Message {
    PlaybackStarted(PathBuf),
    PlaybackFailed {
        path: PathBuf,
        error: crate::error::PlaybackError,
    },
}
