use crate::presentation::components::LogManager;
use eframe::egui;

pub enum LogAction {
    CopyAll,
    Clear,
}

pub struct LogTab;

impl LogTab {
    pub fn show(ui: &mut egui::Ui, log_manager: &LogManager) -> Vec<LogAction> {
        let mut actions = Vec::new();

        ui.heading("Log");
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("📋 Copy All").clicked() {
                actions.push(LogAction::CopyAll);
            }
            if ui.button("🗑 Clear").clicked() {
                actions.push(LogAction::Clear);
            }
        });

        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                for entry in log_manager.all_logs() {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("[{}]", entry.format_timestamp()))
                                .color(egui::Color32::GRAY)
                                .monospace(),
                        );
                        ui.monospace(&entry.message);
                    });
                }
            });

        actions
    }
}
