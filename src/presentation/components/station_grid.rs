use crate::domain::entities::{Station, StationCommand, StationId};
use egui::{Color32, RichText, ScrollArea};

const TILE_SIZE: [f32; 2] = [170.0, 64.0];

pub struct StationGrid;

impl StationGrid {
    /// Draws one tile per station. A secondary click opens the station's
    /// context menu; the chosen command is written to `on_command`.
    pub fn show(
        ui: &mut egui::Ui,
        stations: &[Station],
        commands_for: &dyn Fn(StationId) -> Option<[StationCommand; 3]>,
        on_command: &mut Option<(StationCommand, StationId)>,
    ) {
        if stations.is_empty() {
            ui.label(RichText::new("No stations yet. Add one to get started.").color(Color32::GRAY));
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);

                    for station in stations {
                        let Some(id) = station.id else {
                            continue;
                        };
                        let commands =
                            commands_for(id).unwrap_or_else(|| StationCommand::for_station(station));

                        let text = RichText::new(format!(
                            "{}\n{:.0} m · {}",
                            station.name,
                            station.radius_m,
                            if station.active { "active" } else { "inactive" }
                        ));
                        let text = if station.active {
                            text.strong()
                        } else {
                            text.color(Color32::GRAY)
                        };

                        let response =
                            ui.add_sized(TILE_SIZE, egui::SelectableLabel::new(station.active, text));

                        response.context_menu(|ui| {
                            ui.label(RichText::new(&station.name).strong());
                            ui.separator();
                            for command in commands {
                                if ui.button(command.label()).clicked() {
                                    *on_command = Some((command, id));
                                    ui.close_menu();
                                }
                            }
                        });
                    }
                });
            });
    }
}
