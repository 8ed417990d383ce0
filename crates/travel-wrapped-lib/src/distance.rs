//! Great-circle distance between trip endpoints

use crate::Location;

/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two locations, rounded to the nearest kilometer
///
/// Coordinates are not range-checked. Identical points yield 0.
#[inline]
pub fn distance_km(from: &Location, to: &Location) -> u64 {
    let lat1 = from.lat().to_radians();
    let lat2 = to.lat().to_radians();
    let delta_lat = (to.lat() - from.lat()).to_radians();
    let delta_lng = (to.lng() - from.lng()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for antipodal points
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_KM * c).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paris() -> Location {
        Location::new("Paris", 48.8566, 2.3522)
    }

    fn london() -> Location {
        Location::new("London", 51.5074, -0.1278)
    }

    #[test]
    fn test_paris_london() {
        assert_eq!(distance_km(&paris(), &london()), 344);
    }

    #[test]
    fn test_identical_points() {
        assert_eq!(distance_km(&paris(), &paris()), 0);
    }

    #[test]
    fn test_long_haul() {
        let new_york = Location::new("New York", 40.7128, -74.0060);
        let tokyo = Location::new("Tokyo", 35.6762, 139.6503);
        assert_eq!(distance_km(&new_york, &tokyo), 10852);
    }

    #[test]
    fn test_antipodes_is_half_circumference() {
        let a = Location::new("A", 0.0, 0.0);
        let b = Location::new("B", 0.0, 180.0);
        let half = (std::f64::consts::PI * EARTH_RADIUS_KM).round() as u64;
        assert_eq!(distance_km(&a, &b), half);
    }

    #[test]
    fn test_near_antipodal_points() {
        for (lat, lng) in [(-87.843, 0.0), (12.5, 33.3), (-45.0, 90.0), (89.9, -179.9)] {
            let a = Location::new("A", lat, lng);
            let b = Location::new("B", -lat, lng - 180.0);
            assert_eq!(distance_km(&a, &b), 20015, "({lat}, {lng})");
        }
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0f64..=90.0, lng1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lng2 in -180.0f64..=180.0,
        ) {
            let a = Location::new("a", lat1, lng1);
            let b = Location::new("b", lat2, lng2);
            prop_assert_eq!(distance_km(&a, &b), distance_km(&b, &a));
        }

        #[test]
        fn distance_to_self_is_zero(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            let p = Location::new("p", lat, lng);
            prop_assert_eq!(distance_km(&p, &p), 0);
        }

        #[test]
        fn antipodal_distance_is_half_circumference(
            lat in -90.0f64..=90.0, lng in -180.0f64..=180.0,
        ) {
            let a = Location::new("a", lat, lng);
            let b = Location::new("b", -lat, lng - 180.0);
            prop_assert_eq!(distance_km(&a, &b), 20015);
        }
    }
}
