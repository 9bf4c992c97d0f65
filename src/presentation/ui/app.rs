use crate::application::MainController;
use crate::domain::entities::{AppConfig, CommandOutcome, StationAlarm, StationCommand, StationId};
use crate::domain::error::ControlError;
use crate::infrastructure::ConfigRepository;
use crate::presentation::components::{
    AlarmModal, LogManager, Notifications, StationForm, Tab, TabManager,
};
use crate::presentation::services::AsyncExecutor;
use crate::presentation::ui::tabs::{
    LogAction, LogTab, SettingsAction, SettingsTab, StationsAction, StationsTab,
};
use std::sync::mpsc::Receiver;
use std::time::Duration;

const STATE_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub struct StationAlarmApp {
    controller: MainController,
    executor: AsyncExecutor,

    config: AppConfig,
    config_draft: AppConfig,
    config_repository: ConfigRepository,

    tab_manager: TabManager,
    station_form: StationForm,
    alarm_modal: AlarmModal,
    notifications: Notifications,
    log_manager: LogManager,

    log_rx: Receiver<String>,
    alarm_rx: Receiver<StationAlarm>,

    pending_delete: Option<StationId>,
    initialized: bool,
}

impl StationAlarmApp {
    pub fn new(
        controller: MainController,
        executor: AsyncExecutor,
        config: AppConfig,
        config_repository: ConfigRepository,
        log_rx: Receiver<String>,
        alarm_rx: Receiver<StationAlarm>,
    ) -> Self {
        Self {
            controller,
            executor,
            config_draft: config.clone(),
            config,
            config_repository,
            tab_manager: TabManager::new(),
            station_form: StationForm::new(),
            alarm_modal: AlarmModal::new(),
            notifications: Notifications::new(),
            log_manager: LogManager::new(),
            log_rx,
            alarm_rx,
            pending_delete: None,
            initialized: false,
        }
    }

    fn initialize(&mut self) {
        self.initialized = true;
        if let Err(e) = self.executor.execute(self.controller.initialize()) {
            tracing::error!("Failed to load stations: {:#}", e);
            self.notifications.error(format!("Failed to load stations: {}", e));
        }
    }

    fn activate(&mut self) {
        if let Err(e) = self.executor.execute(self.controller.on_activate()) {
            tracing::error!("Failed to reload stations: {:#}", e);
            self.notifications.error(format!("Failed to reload stations: {}", e));
        }
    }

    fn start_monitoring(&mut self) {
        match self.executor.execute(self.controller.start_monitoring()) {
            Ok(()) => self.notifications.info("Station alarm started"),
            Err(e) => match e.downcast_ref::<ControlError>() {
                Some(control_error) => self.notifications.error(control_error.to_string()),
                None => {
                    tracing::error!("Failed to start monitoring: {:#}", e);
                    self.notifications.error(format!("Failed to start: {}", e));
                }
            },
        }
    }

    fn stop_monitoring(&mut self) {
        self.controller.stop_monitoring();
        self.notifications.info("Station alarm stopped");
    }

    fn handle_command(&mut self, command: StationCommand, id: StationId) {
        if command == StationCommand::Delete && self.config.confirm_before_delete {
            self.pending_delete = Some(id);
            return;
        }
        self.dispatch(command, id);
    }

    fn dispatch(&mut self, command: StationCommand, id: StationId) {
        match self.executor.execute(self.controller.dispatch(command, id)) {
            Ok(CommandOutcome::Edit(station)) => self.station_form.open_edit(&station),
            Ok(CommandOutcome::Deleted(_)) => self.notifications.info("Station deleted"),
            Ok(CommandOutcome::Updated) => {}
            Err(e) => {
                tracing::error!("{} failed for station {}: {:#}", command, id, e);
                self.notifications.error(format!("{} failed: {}", command, e));
            }
        }
    }

    fn handle_settings_action(&mut self, action: SettingsAction) {
        match action {
            SettingsAction::SaveConfig => match self.config_repository.save(&self.config_draft) {
                Ok(()) => {
                    self.config = self.config_draft.clone();
                    tracing::info!("Settings saved");
                    self.notifications.info("Settings saved");
                }
                Err(e) => {
                    tracing::error!("Failed to save settings: {:#}", e);
                    self.notifications.error(format!("Failed to save settings: {}", e));
                }
            },
            SettingsAction::PickTrackFile => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("GPS track", &["json"])
                    .pick_file()
                {
                    self.config_draft.track_file = Some(path);
                }
            }
            SettingsAction::ClearTrackFile => self.config_draft.track_file = None,
        }
    }

    fn poll_logs(&mut self) {
        self.log_manager.extend(self.log_rx.try_iter());
    }

    fn poll_alarms(&mut self, ctx: &egui::Context) {
        let mut raised = false;
        while let Ok(alarm) = self.alarm_rx.try_recv() {
            self.alarm_modal.push(alarm);
            raised = true;
        }
        if raised {
            ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
            ctx.send_viewport_cmd(egui::ViewportCommand::RequestUserAttention(
                egui::UserAttentionType::Critical,
            ));
        }
    }

    fn render_delete_confirmation(&mut self, ctx: &egui::Context) {
        let Some(id) = self.pending_delete else {
            return;
        };
        let name = self
            .controller
            .station(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| id.to_string());

        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Delete station")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Delete \"{}\"?", name));
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        confirmed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if confirmed {
            self.pending_delete = None;
            self.dispatch(StationCommand::Delete, id);
        } else if cancelled {
            self.pending_delete = None;
        }
    }

    fn render_station_form(&mut self, ctx: &egui::Context) {
        let Some(station) = self.station_form.render(ctx) else {
            return;
        };

        match self.executor.execute(self.controller.save_station(station)) {
            Ok(saved) => {
                self.station_form.close();
                self.notifications.info(format!("Saved {}", saved.name));
            }
            Err(e) => self.station_form.set_error(e.to_string()),
        }
    }
}

impl eframe::App for StationAlarmApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_logs();
        self.poll_alarms(ctx);
        ctx.request_repaint_after(STATE_POLL_INTERVAL);

        if !self.initialized {
            self.initialize();
        }

        // The monitor may stop on its own once every station has alarmed.
        self.controller.refresh();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Station Alarm");
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();

                for (tab, label) in [
                    (Tab::Stations, "Stations"),
                    (Tab::Settings, "Settings"),
                    (Tab::Log, "Log"),
                ] {
                    if ui
                        .selectable_label(self.tab_manager.is_current(tab), label)
                        .clicked()
                        && self.tab_manager.switch_to(tab)
                    {
                        self.activate();
                    }
                }
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let active = self.controller.stations().iter().filter(|s| s.active).count();
                ui.label(format!(
                    "{} station(s), {} active",
                    self.controller.stations().len(),
                    active
                ));
                ui.separator();
                ui.label(if self.controller.state().is_running() {
                    "Monitoring"
                } else {
                    "Idle"
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.tab_manager.current() {
            Tab::Stations => {
                let controller = &self.controller;
                let actions = StationsTab::show(
                    ui,
                    controller.state(),
                    controller.buttons(),
                    controller.stations(),
                    &|id| controller.context_commands(id),
                );
                for action in actions {
                    match action {
                        StationsAction::StartMonitoring => self.start_monitoring(),
                        StationsAction::StopMonitoring => self.stop_monitoring(),
                        StationsAction::AddStation => {
                            self.station_form.open_new(self.config.default_radius_m)
                        }
                        StationsAction::Command(command, id) => self.handle_command(command, id),
                    }
                }
            }
            Tab::Settings => {
                for action in SettingsTab::show(ui, &mut self.config_draft) {
                    self.handle_settings_action(action);
                }
            }
            Tab::Log => {
                for action in LogTab::show(ui, &self.log_manager) {
                    match action {
                        LogAction::CopyAll => {
                            let output = self
                                .log_manager
                                .all_logs()
                                .map(|entry| {
                                    format!("[{}] {}", entry.format_timestamp(), entry.message)
                                })
                                .collect::<Vec<_>>()
                                .join("\n");
                            ctx.copy_text(output);
                        }
                        LogAction::Clear => self.log_manager.clear(),
                    }
                }
            }
        });

        self.render_station_form(ctx);
        self.render_delete_confirmation(ctx);
        self.alarm_modal.render(ctx);
        self.notifications.render(ctx);
    }
}
