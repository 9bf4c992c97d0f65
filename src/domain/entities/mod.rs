pub mod command;
pub mod config;
pub mod location;
pub mod service;
pub mod station;

pub use command::{CommandOutcome, StationCommand};
pub use config::AppConfig;
pub use location::{GeoFix, StationAlarm};
pub use service::{ServiceButtons, ServiceState};
pub use station::{GeoPoint, Station, StationId};
