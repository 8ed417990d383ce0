//! Sample city table for manual trip entry

use crate::{ImportError, Location, Result};

/// Immutable lookup of known cities by display name
///
/// Built once at startup and passed by reference to whatever needs it.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    cities: Vec<Location>,
}

impl CityCatalog {
    /// Create a catalog from a list of locations. Later duplicates are ignored on lookup.
    pub fn new(cities: Vec<Location>) -> Self {
        Self { cities }
    }

    /// The built-in sample cities
    pub fn sample() -> Self {
        const SAMPLE: [(&str, f64, f64); 15] = [
            ("Paris", 48.8566, 2.3522),
            ("London", 51.5074, -0.1278),
            ("New York", 40.7128, -74.0060),
            ("Tokyo", 35.6762, 139.6503),
            ("Berlin", 52.5200, 13.4050),
            ("Rome", 41.9028, 12.4964),
            ("Barcelona", 41.3851, 2.1734),
            ("Amsterdam", 52.3676, 4.9041),
            ("Dubai", 25.2048, 55.2708),
            ("Singapore", 1.3521, 103.8198),
            ("Sydney", -33.8688, 151.2093),
            ("Los Angeles", 34.0522, -118.2437),
            ("Zurich", 47.3769, 8.5417),
            ("Vienna", 48.2082, 16.3738),
            ("Prague", 50.0755, 14.4378),
        ];

        Self::new(
            SAMPLE
                .iter()
                .map(|&(name, lat, lng)| Location::new(name, lat, lng))
                .collect(),
        )
    }

    /// Look up a city by its exact name
    pub fn get(&self, name: &str) -> Option<&Location> {
        self.cities.iter().find(|city| city.name() == name)
    }

    /// Like [`CityCatalog::get`], but an unknown name is an error
    pub fn require(&self, name: &str) -> Result<&Location> {
        self.get(name)
            .ok_or_else(|| ImportError::UnknownCity(name.to_string()))
    }

    /// City names in table order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(Location::name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl Default for CityCatalog {
    fn default() -> Self {
        Self::sample()
    }
}
