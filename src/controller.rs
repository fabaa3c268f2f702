//! Alarm state and the logic driven by button presses and the clock tick.

use std::{
    collections::VecDeque,
    fmt,
    path::{Path, PathBuf},
};

use chrono::{NaiveTime, Timelike};

use crate::{communication::Message, sound::SoundPlayer};

/// shown when no alarm is counting down
pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_FILE_SELECTED: &str = "No file selected";

/// the armed alarm (if any) and the sound it should play
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AlarmState {
    pub alarm_time: Option<NaiveTime>,
    pub is_active: bool,
    pub sound_file: Option<PathBuf>,
}

/// a modal message waiting for the user to dismiss it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    AlarmSet(NaiveTime),
    AlarmCanceled,
    NoSoundSelected,
    SoundError(String),
}

impl Notification {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::AlarmSet(_) => "Alarm Set",
            Self::AlarmCanceled => "Alarm Canceled",
            Self::NoSoundSelected => "No Sound Selected",
            Self::SoundError(_) => "Sound Error",
        }
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::NoSoundSelected | Self::SoundError(_))
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlarmSet(time) => write!(f, "Alarm set for {}", time.format("%H:%M")),
            Self::AlarmCanceled => write!(f, "Alarm has been canceled."),
            Self::NoSoundSelected => write!(f, "Please choose a sound file for the alarm."),
            Self::SoundError(error) => write!(f, "Could not play sound:\n{error}"),
        }
    }
}

pub struct AlarmController<P> {
    state: AlarmState,
    player: P,
    current_time: String,
    remaining: String,
    sound_name: String,
    cancel_enabled: bool,
    notifications: VecDeque<Notification>,
}

impl<P: SoundPlayer> AlarmController<P> {
    #[must_use]
    pub fn new(player: P, now: NaiveTime) -> Self {
        Self {
            state: AlarmState::default(),
            player,
            current_time: format_clock(now),
            remaining: NOT_AVAILABLE.to_string(),
            sound_name: NO_FILE_SELECTED.to_string(),
            cancel_enabled: false,
            notifications: VecDeque::new(),
        }
    }

    /// `None` means the file dialog was closed without picking anything
    pub fn on_file_chosen(&mut self, path: Option<PathBuf>) {
        let Some(path) = path else {
            return;
        };
        self.sound_name = file_name(&path);
        log::info!("alarm sound set to {}", path.display());
        self.state.sound_file = Some(path);
    }

    pub fn set_alarm(&mut self, selected_time: NaiveTime) {
        if self.state.sound_file.is_none() {
            log::warn!("tried to set an alarm without a sound");
            self.notify(Notification::NoSoundSelected);
            return;
        }
        // the picker only has minute granularity
        let time = selected_time.with_second(0).unwrap_or(selected_time);
        let time = time.with_nanosecond(0).unwrap_or(time);
        self.state.alarm_time = Some(time);
        self.state.is_active = true;
        self.cancel_enabled = true;
        log::info!("alarm set for {}", time.format("%H:%M"));
        self.notify(Notification::AlarmSet(time));
    }

    pub fn cancel_alarm(&mut self) {
        self.state.alarm_time = None;
        self.state.is_active = false;
        self.cancel_enabled = false;
        self.remaining = NOT_AVAILABLE.to_string();
        log::info!("alarm canceled");
        self.notify(Notification::AlarmCanceled);
    }

    /// called once a second with the current local time
    pub fn tick(&mut self, now: NaiveTime) {
        self.current_time = format_clock(now);

        let Some(alarm_time) = self.state.alarm_time.filter(|_| self.state.is_active) else {
            return;
        };
        let seconds_left = seconds_between(now, alarm_time);
        if seconds_left <= 0 {
            self.fire();
        } else {
            log::debug!("{seconds_left}s until alarm");
            self.remaining = format_remaining(seconds_left);
        }
    }

    fn fire(&mut self) {
        self.state.is_active = false;
        self.state.alarm_time = None;
        self.cancel_enabled = false;
        self.remaining = NOT_AVAILABLE.to_string();
        if let Some(sound) = &self.state.sound_file {
            log::info!("alarm ringing with {}", sound.display());
            self.player.play(sound.clone());
        }
    }

    pub fn report_playback(&mut self, message: Message) {
        match message {
            Message::PlaybackStarted(path) => {
                log::info!("alarm sound {} started", path.display());
            }
            Message::PlaybackFailed { path, error } => {
                log::warn!("alarm sound {} failed: {error}", path.display());
                self.notify(Notification::SoundError(error.to_string()));
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
    }

    /// the oldest notification that has not been dismissed
    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.pop_front();
    }

    #[must_use]
    pub const fn state(&self) -> &AlarmState {
        &self.state
    }

    #[must_use]
    pub fn current_time(&self) -> &str {
        &self.current_time
    }

    #[must_use]
    pub fn remaining(&self) -> &str {
        &self.remaining
    }

    #[must_use]
    pub fn sound_name(&self) -> &str {
        &self.sound_name
    }

    #[must_use]
    pub const fn cancel_enabled(&self) -> bool {
        self.cancel_enabled
    }
}

/// whole seconds from `now` until `alarm` on the same day, negative once passed.
/// there is no wrap around to the next day
#[must_use]
pub fn seconds_between(now: NaiveTime, alarm: NaiveTime) -> i64 {
    let now = now.with_nanosecond(0).unwrap_or(now);
    alarm.signed_duration_since(now).num_seconds()
}

/// `MM:SS`, minutes keep counting past 59
#[must_use]
pub fn format_remaining(seconds: i64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
