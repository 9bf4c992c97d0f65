pub mod config_repository;
pub mod monitor;
pub mod station_repository;

pub use config_repository::ConfigRepository;
pub use station_repository::JsonStationRepository;
