use crate::domain::entities::{ServiceButtons, ServiceState};
use crate::domain::error::ControlError;
use crate::domain::repositories::MonitoringService;
use std::sync::Arc;

/// Keeps the start/stop affordances in line with the monitoring service and
/// forwards start/stop requests to it.
pub struct ServiceToggleController {
    monitor: Arc<dyn MonitoringService>,
    state: ServiceState,
}

impl ServiceToggleController {
    pub fn new(monitor: Arc<dyn MonitoringService>) -> Self {
        Self {
            monitor,
            state: ServiceState::Stopped,
        }
    }

    pub fn state(&self) -> ServiceState {
        self.state
    }

    pub fn buttons(&self) -> ServiceButtons {
        ServiceButtons::from(self.state)
    }

    /// Re-reads the monitor's run flag. Returns true if the state changed.
    pub fn refresh(&mut self) -> bool {
        let state = ServiceState::from_running(self.monitor.is_running());
        let changed = state != self.state;
        if changed {
            tracing::debug!("Monitoring state changed externally: {:?} -> {:?}", self.state, state);
        }
        self.state = state;
        changed
    }

    pub fn request_start(&mut self, active_station_count: usize) -> Result<(), ControlError> {
        if active_station_count < 1 {
            tracing::warn!("Refusing to start monitoring without an active station");
            return Err(ControlError::NoActiveStation);
        }

        self.monitor.start();
        self.state = ServiceState::Running;
        tracing::info!("Monitoring started for {} active station(s)", active_station_count);
        Ok(())
    }

    pub fn request_stop(&mut self) {
        self.monitor.stop();
        if self.state.is_running() {
            tracing::info!("Monitoring stopped");
        }
        self.state = ServiceState::Stopped;
    }
}
