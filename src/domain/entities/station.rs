use geo::Point;
use geo::algorithm::haversine_distance::HaversineDistance;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Great-circle distance in meters (haversine).
    pub fn distance_m(&self, other: &GeoPoint) -> f64 {
        Point::from(*self).haversine_distance(&Point::from(*other))
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(p: GeoPoint) -> Self {
        Point::new(p.longitude, p.latitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: Option<StationId>,
    pub name: String,
    pub location: GeoPoint,
    pub radius_m: f64,
    pub active: bool,
}

impl Station {
    pub fn new(name: String, location: GeoPoint, radius_m: f64) -> Self {
        Self {
            id: None,
            name,
            location,
            radius_m,
            active: true,
        }
    }

    pub fn with_id(mut self, id: StationId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn is_within(&self, point: &GeoPoint) -> bool {
        self.location.distance_m(point) <= self.radius_m
    }
}
