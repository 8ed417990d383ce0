//! Utility functions for coordinate and date handling

/// Scale of E7 fixed-point coordinates (degrees × 10^7)
pub const E7_SCALE: f64 = 10_000_000.0;

/// Convert an E7-encoded coordinate to decimal degrees
#[inline(always)]
pub fn e7_to_degrees(e7: f64) -> f64 {
    e7 / E7_SCALE
}

/// Format a coordinate pair as a fallback display name, e.g. `"48.86, 2.35"`
///
/// Ties round away from zero (`48.125` becomes `"48.13"`), unlike `{:.2}` alone.
pub fn format_coordinates(lat: f64, lng: f64) -> String {
    format!("{:.2}, {:.2}", round_hundredths(lat), round_hundredths(lng))
}

#[inline(always)]
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Keep only the date portion of an ISO-8601 timestamp (everything before `T`)
#[inline]
pub fn date_portion(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Today's date (UTC) as `YYYY-MM-DD`
pub fn today_iso() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Guess a city from a free-text address like `"street, city, region, country"`
///
/// Takes the second-to-last comma-separated part; an address without commas
/// is returned whole.
pub fn city_from_address(address: &str) -> &str {
    let parts: Vec<&str> = address.split(',').collect();
    if parts.len() >= 2 {
        parts[parts.len() - 2].trim()
    } else {
        address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_e7_to_degrees() {
        assert!((e7_to_degrees(488_566_000.0) - 48.8566).abs() < 1e-9);
        assert!((e7_to_degrees(-1_278_000.0) + 0.1278).abs() < 1e-9);
    }

    #[test]
    fn test_format_coordinates() {
        assert_eq!(format_coordinates(48.8566, 2.3522), "48.86, 2.35");
        assert_eq!(format_coordinates(-33.8688, 151.2093), "-33.87, 151.21");
    }

    #[test]
    fn test_format_coordinates_ties_round_away_from_zero() {
        assert_eq!(format_coordinates(48.125, 2.375), "48.13, 2.38");
        assert_eq!(format_coordinates(-48.125, -2.375), "-48.13, -2.38");
        assert_eq!(format_coordinates(10.0, 0.5), "10.00, 0.50");
    }

    #[test]
    fn test_date_portion() {
        assert_eq!(date_portion("2024-03-15T08:30:00.000Z"), "2024-03-15");
        assert_eq!(date_portion("2024-03-15"), "2024-03-15");
        assert_eq!(date_portion(""), "");
    }

    #[test]
    fn test_today_iso_shape() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_city_from_address() {
        assert_eq!(
            city_from_address("10 Downing St, London, England, United Kingdom"),
            "England"
        );
        assert_eq!(city_from_address("Rue de Rivoli, Paris, France"), "Paris");
        assert_eq!(city_from_address("Paris"), "Paris");
    }
}
