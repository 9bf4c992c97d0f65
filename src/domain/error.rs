use crate::domain::entities::StationId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    #[error("no active station: activate at least one station before starting the alarm")]
    NoActiveStation,
}

#[derive(Debug, Error, PartialEq)]
pub enum StationError {
    #[error("station name must not be empty")]
    InvalidName,
    #[error("invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
    #[error("alarm radius must be a positive number of meters, got {0}")]
    InvalidRadius(f64),
    #[error("station {0} not found")]
    NotFound(StationId),
}
