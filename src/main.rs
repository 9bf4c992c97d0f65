use anyhow::Result;
use station_alarm::application::{MainController, UseCaseContainer};
use station_alarm::domain::repositories::{LocationSource, MonitoringService, StationRepository};
use station_alarm::infrastructure::monitor::{
    LocationMonitorService, MonitorSettings, ReplayLocationSource,
};
use station_alarm::infrastructure::{ConfigRepository, JsonStationRepository};
use station_alarm::presentation::services::AsyncExecutor;
use station_alarm::presentation::services::log_capture::init_log_capture;
use station_alarm::presentation::ui::StationAlarmApp;
use std::sync::Arc;
use std::sync::mpsc::channel;

fn main() -> Result<()> {
    let log_rx = init_log_capture()?;

    let config_repository = ConfigRepository::new();
    let config = config_repository.load().unwrap_or_else(|e| {
        tracing::error!("Failed to load config, using defaults: {:#}", e);
        Default::default()
    });

    let executor = AsyncExecutor::new()?;

    let station_repository: Arc<dyn StationRepository> = Arc::new(JsonStationRepository::open(
        config_repository.stations_path(&config),
    )?);

    let replay = ReplayLocationSource::open_or_empty(config.track_file.as_deref());
    if replay.is_empty() {
        tracing::warn!("No track loaded, the monitor will not receive positions");
    }
    let location_source: Arc<dyn LocationSource> = Arc::new(replay);

    let (alarm_tx, alarm_rx) = channel();
    let monitor: Arc<dyn MonitoringService> = Arc::new(LocationMonitorService::new(
        executor.handle(),
        Arc::clone(&station_repository),
        location_source,
        alarm_tx,
        MonitorSettings::from(&config),
    ));

    let use_cases = Arc::new(UseCaseContainer::new(station_repository));
    let controller = MainController::new(use_cases, monitor);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([520.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Station Alarm",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(StationAlarmApp::new(
                controller,
                executor,
                config,
                config_repository,
                log_rx,
                alarm_rx,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run the UI: {}", e))
}
