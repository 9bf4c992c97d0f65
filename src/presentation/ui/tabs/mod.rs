pub mod log;
pub mod settings;
pub mod stations;

pub use log::{LogAction, LogTab};
pub use settings::{SettingsAction, SettingsTab};
pub use stations::{StationsAction, StationsTab};
