use crate::domain::entities::AppConfig;
use eframe::egui;

pub enum SettingsAction {
    SaveConfig,
    PickTrackFile,
    ClearTrackFile,
}

pub struct SettingsTab;

impl SettingsTab {
    pub fn show(ui: &mut egui::Ui, config: &mut AppConfig) -> Vec<SettingsAction> {
        let mut actions = Vec::new();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Settings");
            ui.separator();

            ui.group(|ui| {
                ui.heading("Monitoring");

                egui::Grid::new("monitoring_settings")
                    .num_columns(2)
                    .spacing([10.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Sampling interval (ms):");
                        ui.add(
                            egui::DragValue::new(&mut config.poll_interval_ms)
                                .range(250..=600_000)
                                .speed(50),
                        );
                        ui.end_row();

                        ui.label("Max fix inaccuracy (m):");
                        ui.add(
                            egui::DragValue::new(&mut config.max_fix_accuracy_m)
                                .range(1.0..=10_000.0)
                                .speed(5.0),
                        );
                        ui.end_row();

                        ui.label("Default alarm radius (m):");
                        ui.add(
                            egui::DragValue::new(&mut config.default_radius_m)
                                .range(10.0..=100_000.0)
                                .speed(10.0),
                        );
                        ui.end_row();
                    });

                ui.checkbox(
                    &mut config.stop_when_all_alarmed,
                    "Stop the alarm once every active station was reached",
                );
                ui.checkbox(&mut config.confirm_before_delete, "Confirm before deleting stations");
            });

            ui.add_space(10.0);

            ui.group(|ui| {
                ui.heading("Location source");
                ui.horizontal(|ui| {
                    ui.label("Track file:");
                    match &config.track_file {
                        Some(path) => ui.monospace(path.display().to_string()),
                        None => ui.label(egui::RichText::new("none").color(egui::Color32::GRAY)),
                    };
                });
                ui.horizontal(|ui| {
                    if ui.button("Choose…").clicked() {
                        actions.push(SettingsAction::PickTrackFile);
                    }
                    if ui
                        .add_enabled(config.track_file.is_some(), egui::Button::new("Clear"))
                        .clicked()
                    {
                        actions.push(SettingsAction::ClearTrackFile);
                    }
                });
                ui.label(
                    egui::RichText::new("Changes apply after the app is restarted.")
                        .small()
                        .color(egui::Color32::GRAY),
                );
            });

            ui.add_space(10.0);

            if ui.button("Save settings").clicked() {
                actions.push(SettingsAction::SaveConfig);
            }
        });

        actions
    }
}
