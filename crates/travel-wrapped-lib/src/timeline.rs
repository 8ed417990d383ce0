//! Location-history (timeline) import
//!
//! Timeline exports are third-party JSON with several variants in the wild, so
//! this module inspects a generic [`serde_json::Value`] for the fields it needs
//! instead of deserializing into a fixed schema. Elements that do not look like
//! a movement between two known points are skipped, never reported as errors.
//!
//! The expected element shape is:
//!
//! ```json
//! {
//!   "activitySegment": {
//!     "startLocation": { "latitudeE7": 488566000, "longitudeE7": 23522000, "name": "Paris" },
//!     "endLocation":   { "latitudeE7": 515074000, "longitudeE7": -1278000, "address": "..., London, UK" },
//!     "duration": { "startTimestamp": "2024-03-15T08:30:00Z", "endTimestamp": "..." },
//!     "activityType": "IN_TRAIN",
//!     "distance": 344000
//!   }
//! }
//! ```

use crate::{ImportError, Location, Result, TransportMode, Trip, utils};
use serde_json::Value;
use std::path::Path;

/// Top-level keys that hold the element array, in order of preference
pub const TIMELINE_KEYS: [&str; 2] = ["timelineObjects", "semanticSegments"];

/// Segments shorter than this (in meters) are local movement, not trips
pub const DEFAULT_MIN_TRIP_DISTANCE_M: f64 = 10_000.0;

/// Settings for timeline import
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Minimum declared segment distance in meters. Default: 10 km
    pub min_trip_distance_m: f64,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            min_trip_distance_m: DEFAULT_MIN_TRIP_DISTANCE_M,
        }
    }
}

/// Why a timeline element did not become a trip
#[derive(Debug, thiserror::Error)]
enum Skip {
    #[error("no activity segment")]
    NoActivity,

    #[error("missing start or end location")]
    MissingEndpoint,

    #[error("missing or zero E7 coordinates")]
    MissingCoordinates,

    #[error("too short ({0} m)")]
    TooShort(f64),
}

/// Check that a document has a `timelineObjects` or `semanticSegments` array
pub fn validate(document: &Value) -> bool {
    let Some(object) = document.as_object() else {
        return false;
    };
    TIMELINE_KEYS
        .iter()
        .any(|key| object.get(*key).is_some_and(Value::is_array))
}

/// Extract trips using the default [`ImportConfig`]
pub fn parse(document: &Value) -> Vec<Trip> {
    parse_with(document, &ImportConfig::default())
}

/// Extract trips from a timeline document
///
/// Never fails: invalid documents and malformed elements yield no trips.
pub fn parse_with(document: &Value, config: &ImportConfig) -> Vec<Trip> {
    let elements = elements(document);
    let mut trips = Vec::new();

    for (index, element) in elements.iter().enumerate() {
        match parse_element(element, config) {
            Ok(trip) => trips.push(trip),
            Err(reason) => tracing::debug!("Skipping timeline element {index}: {reason}"),
        }
    }

    tracing::debug!(
        "Parsed {} trips from {} timeline elements",
        trips.len(),
        elements.len()
    );
    trips
}

/// Validate and parse a document, turning the two failure shapes into errors
///
/// Returns [`ImportError::InvalidFormat`] when [`validate`] fails and
/// [`ImportError::NoTripsFound`] when a valid document yields no trips.
pub fn import_value(document: &Value, config: &ImportConfig) -> Result<Vec<Trip>> {
    if !validate(document) {
        tracing::warn!("Rejected timeline document: unrecognized format");
        return Err(ImportError::InvalidFormat);
    }

    let trips = parse_with(document, config);
    if trips.is_empty() {
        return Err(ImportError::NoTripsFound);
    }

    tracing::info!("Imported {} trips from timeline", trips.len());
    Ok(trips)
}

/// Parse JSON text and import it, see [`import_value`]
pub fn import_str(json: &str, config: &ImportConfig) -> Result<Vec<Trip>> {
    let document: Value = serde_json::from_str(json)?;
    import_value(&document, config)
}

/// Read a timeline export from disk and import it, see [`import_value`]
pub fn import_file<P: AsRef<Path>>(path: P, config: &ImportConfig) -> Result<Vec<Trip>> {
    let file = std::fs::File::open(path.as_ref())?;
    let reader = std::io::BufReader::new(file);
    let document: Value = serde_json::from_reader(reader)?;
    import_value(&document, config)
}

/// The element array, preferring `timelineObjects` when both keys hold arrays
fn elements(document: &Value) -> &[Value] {
    TIMELINE_KEYS
        .iter()
        .find_map(|key| document.get(*key).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn parse_element(element: &Value, config: &ImportConfig) -> std::result::Result<Trip, Skip> {
    let activity = element
        .get("activitySegment")
        .filter(|v| v.is_object())
        .ok_or(Skip::NoActivity)?;

    let start = object_field(activity, "startLocation").ok_or(Skip::MissingEndpoint)?;
    let end = object_field(activity, "endLocation").ok_or(Skip::MissingEndpoint)?;

    let (start_lat, start_lng) = e7_coordinates(start).ok_or(Skip::MissingCoordinates)?;
    let (end_lat, end_lng) = e7_coordinates(end).ok_or(Skip::MissingCoordinates)?;

    let distance = activity
        .get("distance")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    if distance < config.min_trip_distance_m {
        return Err(Skip::TooShort(distance));
    }

    let date = activity
        .get("duration")
        .and_then(|duration| {
            non_empty_str(duration, "startTimestamp")
                .or_else(|| non_empty_str(duration, "endTimestamp"))
        })
        .map(|timestamp| utils::date_portion(timestamp).to_string())
        .unwrap_or_else(utils::today_iso);

    let from = Location::new(location_name(start, start_lat, start_lng), start_lat, start_lng);
    let to = Location::new(location_name(end, end_lat, end_lng), end_lat, end_lng);
    let mode = TransportMode::from_activity_type(non_empty_str(activity, "activityType"));

    Ok(Trip::new(from, to, date, Some(mode)))
}

fn object_field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| v.is_object())
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Decode `latitudeE7`/`longitudeE7` to degrees.
///
/// A zero value is treated like a missing one, so points exactly on the
/// equator or prime meridian are dropped.
fn e7_coordinates(location: &Value) -> Option<(f64, f64)> {
    let field = |key: &str| {
        location
            .get(key)
            .and_then(Value::as_f64)
            .filter(|v| *v != 0.0)
            .map(utils::e7_to_degrees)
    };
    Some((field("latitudeE7")?, field("longitudeE7")?))
}

/// Explicit name, else the city part of the address, else the coordinates
fn location_name(location: &Value, lat: f64, lng: f64) -> String {
    if let Some(name) = non_empty_str(location, "name") {
        return name.to_string();
    }
    if let Some(address) = non_empty_str(location, "address") {
        return utils::city_from_address(address).to_string();
    }
    utils::format_coordinates(lat, lng)
}
