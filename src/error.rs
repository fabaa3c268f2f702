//! Error handling.

use std::{io, path::PathBuf};

/// Reasons the alarm sound could not be played.
#[derive(thiserror::Error, Debug)]
pub enum PlaybackError {
    #[error("couldn't open sound file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("audio stream error: {0}")]
    Stream(#[from] rodio::StreamError),
    #[error("couldn't decode sound file: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
}

/// Reasons the config file could not be loaded or saved.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("couldn't find a home directory for the config file")]
    NoProjectDirs,
    #[error("couldn't read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("couldn't write config file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("couldn't parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("couldn't serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ConfigError {
    /// True when the config file simply doesn't exist yet.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
