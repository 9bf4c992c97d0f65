use crate::domain::entities::{ServiceButtons, ServiceState, Station, StationCommand, StationId};
use crate::presentation::components::StationGrid;
use eframe::egui;

pub enum StationsAction {
    StartMonitoring,
    StopMonitoring,
    AddStation,
    Command(StationCommand, StationId),
}

pub struct StationsTab;

impl StationsTab {
    pub fn show(
        ui: &mut egui::Ui,
        state: ServiceState,
        buttons: ServiceButtons,
        stations: &[Station],
        commands_for: &dyn Fn(StationId) -> Option<[StationCommand; 3]>,
    ) -> Vec<StationsAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            if buttons.start_visible() && ui.button("▶ Start alarm").clicked() {
                actions.push(StationsAction::StartMonitoring);
            }
            if buttons.stop_visible() && ui.button("⏹ Stop alarm").clicked() {
                actions.push(StationsAction::StopMonitoring);
            }

            ui.separator();

            match state {
                ServiceState::Running => {
                    ui.spinner();
                    ui.label("Watching your position");
                }
                ServiceState::Stopped => {
                    ui.label(egui::RichText::new("Alarm off").color(egui::Color32::GRAY));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("➕ Add station").clicked() {
                    actions.push(StationsAction::AddStation);
                }
            });
        });

        ui.separator();

        let mut command = None;
        StationGrid::show(ui, stations, commands_for, &mut command);
        if let Some((command, id)) = command {
            actions.push(StationsAction::Command(command, id));
        }

        actions
    }
}
