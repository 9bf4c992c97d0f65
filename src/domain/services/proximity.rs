use crate::domain::entities::{GeoFix, Station};

/// Active stations whose alarm radius contains the fix, nearest first,
/// paired with their distance in meters.
pub fn stations_in_range<'a>(fix: &GeoFix, stations: &'a [Station]) -> Vec<(&'a Station, f64)> {
    let mut hits: Vec<(&Station, f64)> = stations
        .iter()
        .filter(|s| s.active)
        .map(|s| (s, s.location.distance_m(&fix.point)))
        .filter(|(s, d)| *d <= s.radius_m)
        .collect();

    hits.sort_by(|a, b| a.1.total_cmp(&b.1));
    hits
}

pub fn is_precise_enough(fix: &GeoFix, max_accuracy_m: f64) -> bool {
    fix.point.is_finite() && fix.accuracy_m.is_finite() && fix.accuracy_m <= max_accuracy_m
}
