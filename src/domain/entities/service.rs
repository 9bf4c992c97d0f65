use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceState {
    #[default]
    Stopped,
    Running,
}

impl ServiceState {
    pub fn from_running(running: bool) -> Self {
        if running {
            ServiceState::Running
        } else {
            ServiceState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, ServiceState::Running)
    }
}

/// Visibility of the start and stop controls. Only constructible from a
/// `ServiceState`, so exactly one of the two is ever visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceButtons {
    start_visible: bool,
    stop_visible: bool,
}

impl ServiceButtons {
    pub fn start_visible(&self) -> bool {
        self.start_visible
    }

    pub fn stop_visible(&self) -> bool {
        self.stop_visible
    }
}

impl From<ServiceState> for ServiceButtons {
    fn from(state: ServiceState) -> Self {
        let running = state.is_running();
        Self {
            start_visible: !running,
            stop_visible: running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_button_visible() {
        for state in [ServiceState::Stopped, ServiceState::Running] {
            let buttons = ServiceButtons::from(state);
            assert!(buttons.start_visible() ^ buttons.stop_visible());
        }
    }

    #[test]
    fn stopped_shows_start() {
        let buttons = ServiceButtons::from(ServiceState::Stopped);
        assert!(buttons.start_visible());
        assert!(!buttons.stop_visible());
    }

    #[test]
    fn initial_state_is_stopped() {
        assert_eq!(ServiceState::default(), ServiceState::Stopped);
    }
}
