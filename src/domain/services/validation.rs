use crate::domain::entities::Station;
use crate::domain::error::StationError;

pub struct StationValidator;

impl StationValidator {
    pub fn validate_name(name: &str) -> bool {
        !name.trim().is_empty()
    }

    pub fn validate_station(station: &Station) -> Result<(), StationError> {
        if !Self::validate_name(&station.name) {
            return Err(StationError::InvalidName);
        }

        let latitude = station.location.latitude;
        let longitude = station.location.longitude;
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(StationError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        if !station.radius_m.is_finite() || station.radius_m <= 0.0 {
            return Err(StationError::InvalidRadius(station.radius_m));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::GeoPoint;

    fn station(name: &str, lat: f64, lon: f64, radius: f64) -> Station {
        Station::new(name.to_string(), GeoPoint::new(lat, lon), radius)
    }

    #[test]
    fn accepts_valid_station() {
        assert!(StationValidator::validate_station(&station("Hbf", 48.14, 11.56, 800.0)).is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            StationValidator::validate_station(&station("   ", 48.14, 11.56, 800.0)),
            Err(StationError::InvalidName)
        );
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(matches!(
            StationValidator::validate_station(&station("Hbf", 91.0, 11.56, 800.0)),
            Err(StationError::InvalidCoordinates { .. })
        ));
        assert!(matches!(
            StationValidator::validate_station(&station("Hbf", 48.0, -180.5, 800.0)),
            Err(StationError::InvalidCoordinates { .. })
        ));
        assert!(matches!(
            StationValidator::validate_station(&station("Hbf", f64::NAN, 11.0, 800.0)),
            Err(StationError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_radius() {
        assert_eq!(
            StationValidator::validate_station(&station("Hbf", 48.14, 11.56, 0.0)),
            Err(StationError::InvalidRadius(0.0))
        );
    }
}
