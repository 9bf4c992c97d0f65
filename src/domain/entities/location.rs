use super::{GeoPoint, StationId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFix {
    pub point: GeoPoint,
    pub accuracy_m: f64,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl GeoFix {
    pub fn new(point: GeoPoint, accuracy_m: f64) -> Self {
        Self {
            point,
            accuracy_m,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationAlarm {
    pub station_id: StationId,
    pub station_name: String,
    pub distance_m: f64,
    pub triggered_at: DateTime<Utc>,
}
