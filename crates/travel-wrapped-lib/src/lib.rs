//! Travel Wrapped Library - Trip Statistics and Carbon Accounting
//!
//! This library turns a list of personal trips into the figures shown on a
//! "travel wrapped" summary: how far the user went, which cities they saw,
//! which routes they repeat, and roughly how much CO2 it cost. It also imports
//! trips from location-history exports (E7-encoded timeline JSON).
//!
//! # Architecture
//!
//! - **[`distance_km`]**: Haversine great-circle distance, rounded to whole km
//! - **[`compute_stats`]**: Trip counts, distance, cities and top routes
//! - **[`compute_carbon`]**: Per-mode emissions and everyday equivalents
//! - **[`timeline`]**: Validation and parsing of timeline exports into [`Trip`]s
//! - **[`TripLog`]**: Ordered trip collection with recompute-on-read summaries
//! - **[`CityCatalog`]**: Immutable table of sample cities for manual entry
//!
//! All derived values are pure functions of the trip list. Nothing is cached,
//! so the functions can be called from any thread at any time.

mod carbon;
mod catalog;
mod collection;
mod distance;
mod stats;
pub mod timeline;
mod trip;
pub mod utils;

// Public API exports
pub use carbon::{CarbonReport, Equivalents, compute_carbon};
pub use catalog::CityCatalog;
pub use collection::TripLog;
pub use distance::{EARTH_RADIUS_KM, distance_km};
pub use stats::{MAX_TOP_ROUTES, RouteCount, TripStats, compute_stats, route_key};
pub use timeline::ImportConfig;
pub use trip::{Location, TransportMode, Trip};

/// Error types for trip import and manual entry
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Invalid timeline format: expected an object with a `timelineObjects` or `semanticSegments` array")]
    InvalidFormat,

    #[error("No trips found in the timeline data")]
    NoTripsFound,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Unknown transport mode: {0}")]
    UnknownTransportMode(String),
}

pub type Result<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        // Verify that all public types are accessible
        let _: fn() -> TripLog = TripLog::new;
        let _: fn() -> ImportConfig = ImportConfig::default;
        let _: fn(&[Trip]) -> TripStats = compute_stats;
        let _: fn(&[Trip]) -> CarbonReport = compute_carbon;
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ImportError::NoTripsFound.to_string(),
            "No trips found in the timeline data"
        );
        assert_eq!(
            ImportError::UnknownCity("Atlantis".to_string()).to_string(),
            "Unknown city: Atlantis"
        );
    }
}
