pub mod location_source;
pub mod monitoring_service;
pub mod station_repository;

pub use location_source::LocationSource;
pub use monitoring_service::MonitoringService;
pub use station_repository::StationRepository;
