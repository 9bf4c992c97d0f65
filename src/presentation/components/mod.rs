pub mod alarm_modal;
pub mod log_manager;
pub mod notifications;
pub mod station_form;
pub mod station_grid;
pub mod tab_manager;

pub use alarm_modal::AlarmModal;
pub use log_manager::{LogEntry, LogManager};
pub use notifications::{NotificationLevel, Notifications};
pub use station_form::StationForm;
pub use station_grid::StationGrid;
pub use tab_manager::{Tab, TabManager};
