use crate::application::UseCaseContainer;
use crate::application::controllers::ServiceToggleController;
use crate::domain::entities::{
    CommandOutcome, ServiceButtons, ServiceState, Station, StationCommand, StationId,
};
use crate::domain::repositories::MonitoringService;
use anyhow::Result;
use std::sync::Arc;

/// Main screen logic: the station list snapshot, the monitoring toggle and
/// per-station command dispatch. The hosting UI calls `initialize` once and
/// `on_activate` whenever the screen becomes visible again.
pub struct MainController {
    toggle: ServiceToggleController,
    use_cases: Arc<UseCaseContainer>,
    stations: Vec<Station>,
}

impl MainController {
    pub fn new(use_cases: Arc<UseCaseContainer>, monitor: Arc<dyn MonitoringService>) -> Self {
        Self {
            toggle: ServiceToggleController::new(monitor),
            use_cases,
            stations: Vec::new(),
        }
    }

    pub async fn initialize(&mut self) -> Result<()> {
        tracing::debug!("Initializing main controller");
        self.on_activate().await
    }

    pub async fn on_activate(&mut self) -> Result<()> {
        self.toggle.refresh();
        self.reload_stations().await
    }

    pub async fn reload_stations(&mut self) -> Result<()> {
        self.stations = self.use_cases.list_stations.execute().await?;
        Ok(())
    }

    pub fn refresh(&mut self) -> ServiceState {
        self.toggle.refresh();
        self.toggle.state()
    }

    pub async fn start_monitoring(&mut self) -> Result<()> {
        let active = self.use_cases.count_active.execute().await?;
        self.toggle.request_start(active)?;
        Ok(())
    }

    pub fn stop_monitoring(&mut self) {
        self.toggle.request_stop();
    }

    pub async fn dispatch(&mut self, command: StationCommand, id: StationId) -> Result<CommandOutcome> {
        tracing::debug!("Dispatching {} for station {}", command, id);

        let outcome = match command {
            StationCommand::Activate => {
                self.use_cases.set_station_active.execute(id, true).await?;
                CommandOutcome::Updated
            }
            StationCommand::Deactivate => {
                self.use_cases.set_station_active.execute(id, false).await?;
                CommandOutcome::Updated
            }
            StationCommand::Delete => {
                self.use_cases.delete_station.execute(id).await?;
                CommandOutcome::Deleted(id)
            }
            StationCommand::Edit => {
                let station = self.use_cases.get_station.execute(id).await?;
                return Ok(CommandOutcome::Edit(station));
            }
        };

        self.reload_stations().await?;
        Ok(outcome)
    }

    pub async fn save_station(&mut self, station: Station) -> Result<Station> {
        let saved = self.use_cases.save_station.execute(station).await?;
        self.reload_stations().await?;
        Ok(saved)
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == Some(id))
    }

    pub fn context_commands(&self, id: StationId) -> Option<[StationCommand; 3]> {
        self.station(id).map(StationCommand::for_station)
    }

    pub fn state(&self) -> ServiceState {
        self.toggle.state()
    }

    pub fn buttons(&self) -> ServiceButtons {
        self.toggle.buttons()
    }
}
