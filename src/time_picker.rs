use chrono::{NaiveTime, Timelike};
use eframe::egui::{self, TextEdit, Widget};

const MAX_HOUR: u8 = 23;
const MAX_MINUTE: u8 = 59;

/// 24 hour `HH:mm` picker with up/down buttons and a text field per part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePicker {
    hour: u8,
    minute: u8,
    // what is typed, synced with the value when the field loses focus
    hour_string: String,
    minute_string: String,
}

impl Default for TimePicker {
    fn default() -> Self {
        Self::new(chrono::Local::now().time())
    }
}

impl TimePicker {
    #[must_use]
    pub fn new(time: NaiveTime) -> Self {
        // hour() and minute() are always in range
        #[allow(clippy::cast_possible_truncation)]
        let (hour, minute) = (time.hour() as u8, time.minute() as u8);
        Self {
            hour,
            minute,
            hour_string: format!("{hour:02}"),
            minute_string: format!("{minute:02}"),
        }
    }

    #[must_use]
    pub fn time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }

    pub fn render(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            Self::render_selector(ui, "Hour", &mut self.hour, &mut self.hour_string, MAX_HOUR);
            ui.label(":");
            Self::render_selector(
                ui,
                "Minute",
                &mut self.minute,
                &mut self.minute_string,
                MAX_MINUTE,
            );
        });
    }

    fn render_selector(ui: &mut egui::Ui, label: &str, value: &mut u8, text: &mut String, max: u8) {
        ui.vertical(|ui| {
            ui.label(label);
            if ui.button("Up").clicked() {
                step_up(value, text, max);
            }
            if {
                TextEdit::singleline(text)
                    .desired_width(20.0)
                    .char_limit(2)
                    .ui(&mut *ui)
            }
            .lost_focus()
            {
                commit_text(value, text, max);
            }
            if ui.button("Down").clicked() {
                step_down(value, text);
            }
        });
    }
}

fn step_up(value: &mut u8, text: &mut String, max: u8) {
    if *value < max {
        *value += 1;
    }
    *text = format!("{value:02}");
}

fn step_down(value: &mut u8, text: &mut String) {
    *value = value.saturating_sub(1);
    *text = format!("{value:02}");
}

fn commit_text(value: &mut u8, text: &mut String, max: u8) {
    // if the input value is vaild, update the value
    if let Ok(parsed_value) = text.trim().parse::<u8>() {
        *value = parsed_value.min(max);
    }
    // sync the input value and the value regardless
    *text = format!("{value:02}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker(hour: u32, minute: u32) -> TimePicker {
        TimePicker::new(NaiveTime::from_hms_opt(hour, minute, 42).unwrap())
    }

    #[test]
    fn drops_seconds() {
        assert_eq!(picker(7, 5).time(), NaiveTime::from_hms_opt(7, 5, 0).unwrap());
        assert_eq!(picker(7, 5).hour_string, "07");
        assert_eq!(picker(7, 5).minute_string, "05");
    }

    #[test]
    fn up_and_down_stop_at_bounds() {
        let mut p = picker(23, 0);
        step_up(&mut p.hour, &mut p.hour_string, MAX_HOUR);
        assert_eq!(p.hour, 23);
        step_down(&mut p.minute, &mut p.minute_string);
        assert_eq!(p.minute, 0);
        assert_eq!(p.minute_string, "00");

        let mut p = picker(0, 59);
        step_up(&mut p.minute, &mut p.minute_string, MAX_MINUTE);
        assert_eq!(p.minute, 59);
        step_up(&mut p.hour, &mut p.hour_string, MAX_HOUR);
        assert_eq!(p.time(), NaiveTime::from_hms_opt(1, 59, 0).unwrap());
    }

    #[test]
    fn typed_values_are_clamped() {
        let mut p = picker(12, 30);
        p.minute_string = "75".to_string();
        commit_text(&mut p.minute, &mut p.minute_string, MAX_MINUTE);
        assert_eq!(p.minute, 59);
        p.hour_string = "99".to_string();
        commit_text(&mut p.hour, &mut p.hour_string, MAX_HOUR);
        assert_eq!(p.hour, 23);
        assert_eq!(p.hour_string, "23");
    }

    #[test]
    fn invalid_text_is_reverted() {
        let mut p = picker(12, 30);
        p.hour_string = "ab".to_string();
        commit_text(&mut p.hour, &mut p.hour_string, MAX_HOUR);
        assert_eq!(p.hour, 12);
        assert_eq!(p.hour_string, "12");
    }
}
