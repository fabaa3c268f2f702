#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![deny(clippy::use_self, rust_2018_idioms)]
#![allow(clippy::multiple_crate_versions, clippy::module_name_repetitions)]

use std::{
    path::PathBuf,
    sync::mpsc::Receiver,
    time::{Duration, Instant},
};

use config::Config;
use controller::AlarmController;
use eframe::egui::{self, Button, CentralPanel, Id, Layout, Modal, RichText, TopBottomPanel};
use sound::RodioPlayer;
use time_picker::TimePicker;

pub mod communication;
pub mod config;
pub mod controller;
pub mod error;
pub mod sound;
/// hour and minute selection for egui
pub mod time_picker;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickSchedule {
    /// a notification is open, no tick until it is dismissed
    Blocked,
    Due,
    /// repaint again after this long
    Wait(Duration),
}

/// at most one tick however long it has been, seconds missed are dropped
fn tick_schedule(elapsed: Duration, notification_open: bool) -> TickSchedule {
    if notification_open {
        TickSchedule::Blocked
    } else if elapsed >= TICK {
        TickSchedule::Due
    } else {
        TickSchedule::Wait(TICK - elapsed)
    }
}

pub struct AlarmClock {
    config: Config,
    config_path: Option<PathBuf>,
    controller: AlarmController<RodioPlayer>,
    receiver: Receiver<communication::Message>,
    picker: TimePicker,
    last_tick: Instant,
}

impl AlarmClock {
    #[must_use]
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        player: RodioPlayer,
        receiver: Receiver<communication::Message>,
    ) -> Self {
        Self {
            config,
            config_path,
            controller: AlarmController::new(player, chrono::Local::now().time()),
            receiver,
            picker: TimePicker::default(),
            last_tick: Instant::now(),
        }
    }

    fn drive_clock(&mut self, ctx: &egui::Context) {
        let schedule = tick_schedule(
            self.last_tick.elapsed(),
            self.controller.notification().is_some(),
        );
        match schedule {
            TickSchedule::Blocked => {}
            TickSchedule::Due => {
                self.controller.tick(chrono::Local::now().time());
                self.last_tick = Instant::now();
                ctx.request_repaint_after(TICK);
            }
            TickSchedule::Wait(delay) => ctx.request_repaint_after(delay),
        }
    }

    fn choose_sound(&mut self) {
        let file_dialog = rfd::FileDialog::new()
            .set_title("Choose Sound File")
            .add_filter("Audio Files", self.config.sound_extensions.as_slice());
        let file_dialog = match self.config.sound_dialog_directory() {
            Some(directory) => file_dialog.set_directory(directory),
            None => file_dialog,
        };
        self.controller.on_file_chosen(file_dialog.pick_file());
    }

    fn toggle_theme(&mut self) {
        self.config.theme = !self.config.theme;
        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save(path) {
                log::warn!("{e}");
            }
        }
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("time_and_ctrl").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("Current time: {}", self.controller.current_time()))
                        .heading(),
                );
                ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_btn = ui.add(Button::new({
                        if self.config.theme == config::Theme::Dark {
                            "🌞"
                        } else {
                            "🌙"
                        }
                    }));
                    if theme_btn.on_hover_text("switch theme").clicked() {
                        self.toggle_theme();
                    }
                });
            });
        });
    }

    fn render_alarm_settings(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label(RichText::new("Alarm Settings").strong());
            self.picker.render(ui);
            ui.label(format!("Time remaining: {}", self.controller.remaining()));
            ui.horizontal(|ui| {
                if ui.button("Choose Alarm Sound").clicked() {
                    self.choose_sound();
                }
                ui.label(self.controller.sound_name());
            });
            ui.horizontal(|ui| {
                if ui.button("Set Alarm").clicked() {
                    self.controller.set_alarm(self.picker.time());
                }
                if ui
                    .add_enabled(self.controller.cancel_enabled(), Button::new("Cancel"))
                    .clicked()
                {
                    self.controller.cancel_alarm();
                }
            });
        });
    }

    fn render_notification(&mut self, ctx: &egui::Context) {
        let Some(notification) = self.controller.notification() else {
            return;
        };
        let title = notification.title();
        let body = notification.to_string();
        let warning = notification.is_warning();
        let mut dismissed = false;
        let response = Modal::new(Id::new("notification")).show(ctx, |ui| {
            let heading = if warning {
                RichText::new(format!("⚠ {title}")).color(ui.visuals().warn_fg_color)
            } else {
                RichText::new(title)
            };
            ui.heading(heading);
            ui.label(body);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
        if dismissed || response.should_close() {
            self.controller.dismiss_notification();
            ctx.request_repaint();
        }
    }
}

impl eframe::App for AlarmClock {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(message) = self.receiver.try_recv() {
            self.controller.report_playback(message);
        }
        self.drive_clock(ctx);

        ctx.set_visuals(self.config.theme.into());
        self.render_header(ctx);
        CentralPanel::default().show(ctx, |ui| {
            self.render_alarm_settings(ui);
        });
        self.render_notification(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_notification_blocks_tick() {
        assert_eq!(
            tick_schedule(Duration::from_secs(5), true),
            TickSchedule::Blocked
        );
        assert_eq!(
            tick_schedule(Duration::from_millis(100), true),
            TickSchedule::Blocked
        );
    }

    #[test]
    fn late_frame_ticks_once() {
        assert_eq!(
            tick_schedule(Duration::from_millis(2500), false),
            TickSchedule::Due
        );
        // the tick resets the clock, so the next frame waits a full second
        assert_eq!(
            tick_schedule(Duration::ZERO, false),
            TickSchedule::Wait(TICK)
        );
    }

    #[test]
    fn early_frame_waits_for_rest_of_second() {
        assert_eq!(
            tick_schedule(Duration::from_millis(400), false),
            TickSchedule::Wait(Duration::from_millis(600))
        );
        assert_eq!(tick_schedule(TICK, false), TickSchedule::Due);
    }
}
