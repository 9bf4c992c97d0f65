use crate::domain::entities::StationAlarm;
use chrono::Local;
use std::collections::VecDeque;

/// Queue of alarms raised by the monitor, shown one at a time until dismissed.
pub struct AlarmModal {
    pending: VecDeque<StationAlarm>,
}

impl AlarmModal {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    pub fn push(&mut self, alarm: StationAlarm) {
        self.pending.push_back(alarm);
    }

    pub fn dismiss(&mut self) {
        self.pending.pop_front();
    }

    pub fn render(&mut self, ctx: &egui::Context) {
        let Some(alarm) = self.pending.front().cloned() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Station alarm")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(format!("Approaching {}", alarm.station_name));
                    ui.add_space(6.0);
                    ui.label(format!("{:.0} m away", alarm.distance_m));
                    ui.label(
                        egui::RichText::new(format!(
                            "at {}",
                            alarm.triggered_at.with_timezone(&Local).format("%H:%M:%S")
                        ))
                        .color(egui::Color32::GRAY),
                    );
                    ui.add_space(10.0);
                    if ui.button("Dismiss").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.dismiss();
        }
    }
}

impl Default for AlarmModal {
    fn default() -> Self {
        Self::new()
    }
}
