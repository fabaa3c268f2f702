use std::{
    ops::Not,
    path::{Path, PathBuf},
};

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Not for Theme {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl From<Theme> for egui::Visuals {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }
}

/// user settings, alarms themselves are never stored here
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
    /// where the sound picker starts, falls back to the users audio folder
    #[serde(default)]
    pub sound_directory: Option<PathBuf>,
    #[serde(default = "default_sound_extensions")]
    pub sound_extensions: Vec<String>,
}

fn default_sound_extensions() -> Vec<String> {
    vec!["mp3".to_string(), "wav".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            sound_directory: None,
            sound_extensions: default_sound_extensions(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&config)?)
    }

    /// like [`Config::load`] but any problem gives the default config
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) if e.is_not_found() => {
                log::info!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let config = toml::to_string(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, config).map_err(write_err)
    }

    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let mut path = directories::ProjectDirs::from("", "", "roosty_alarm")
            .ok_or(ConfigError::NoProjectDirs)?
            .config_dir()
            .to_path_buf();
        path.push("config.toml");
        Ok(path)
    }

    /// the directory the sound picker should open in
    #[must_use]
    pub fn sound_dialog_directory(&self) -> Option<PathBuf> {
        self.sound_directory.clone().or_else(|| {
            directories::UserDirs::new().and_then(|u| u.audio_dir().map(Path::to_path_buf))
        })
    }
}
