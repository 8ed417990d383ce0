//! Trip value types
//!
//! A [`Trip`] is an immutable journey between two [`Location`]s on a given
//! date. "Editing" a trip means removing it and adding a new one.

use crate::ImportError;
use chrono::{Datelike, NaiveDate};
use geo::Point;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named geographic point in WGS84 degrees
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    name: String,
    lat: f64,
    lng: f64,
}

impl Location {
    /// Create a new location. Coordinates are trusted, not range-checked.
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
        }
    }

    /// Display name (not guaranteed unique)
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Convert to a `geo` point (x = longitude, y = latitude)
    #[inline]
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

/// How a trip was travelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransportMode {
    Plane,
    Train,
    Car,
    Bus,
    Boat,
}

impl TransportMode {
    /// Every mode, in display order
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Plane,
        TransportMode::Train,
        TransportMode::Car,
        TransportMode::Bus,
        TransportMode::Boat,
    ];

    /// Emission factor in grams of CO2 per passenger-kilometer
    #[inline]
    pub const fn grams_co2_per_km(self) -> u64 {
        match self {
            TransportMode::Plane => 255,
            TransportMode::Train => 41,
            TransportMode::Car => 171,
            TransportMode::Bus => 89,
            TransportMode::Boat => 245,
        }
    }

    /// Lowercase identifier, as used in serialized data
    pub const fn as_str(self) -> &'static str {
        match self {
            TransportMode::Plane => "plane",
            TransportMode::Train => "train",
            TransportMode::Car => "car",
            TransportMode::Bus => "bus",
            TransportMode::Boat => "boat",
        }
    }

    /// Human-readable label for summaries
    pub const fn label(self) -> &'static str {
        match self {
            TransportMode::Plane => "Plane",
            TransportMode::Train => "Train",
            TransportMode::Car => "Car",
            TransportMode::Bus => "Bus",
            TransportMode::Boat => "Boat",
        }
    }

    /// Map a free-text activity label from a location-history export.
    ///
    /// Matching is a case-insensitive substring test, checked in order:
    /// `FLY`/`PLANE`, `TRAIN`/`RAIL`, `BUS`, `BOAT`/`FERRY`, `CAR`/`DRIVE`/`VEHICLE`.
    /// Missing, empty or unrecognized labels map to [`TransportMode::Car`].
    pub fn from_activity_type(activity_type: Option<&str>) -> Self {
        let Some(activity_type) = activity_type.filter(|s| !s.is_empty()) else {
            return TransportMode::Car;
        };

        let upper = activity_type.to_uppercase();
        let has_any = |needles: &[&str]| needles.iter().any(|n| upper.contains(n));

        if has_any(&["FLY", "PLANE"]) {
            TransportMode::Plane
        } else if has_any(&["TRAIN", "RAIL"]) {
            TransportMode::Train
        } else if has_any(&["BUS"]) {
            TransportMode::Bus
        } else if has_any(&["BOAT", "FERRY"]) {
            TransportMode::Boat
        } else {
            // CAR / DRIVE / VEHICLE and anything unknown
            TransportMode::Car
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ImportError::UnknownTransportMode(s.to_string()))
    }
}

/// One journey from `from` to `to`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Trip {
    id: String,
    from: Location,
    to: Location,
    /// Calendar date as `YYYY-MM-DD`
    date: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    transport_mode: Option<TransportMode>,
}

impl Trip {
    /// Create a trip with a freshly generated unique id
    pub fn new(
        from: Location,
        to: Location,
        date: impl Into<String>,
        transport_mode: Option<TransportMode>,
    ) -> Self {
        Self::with_id(
            uuid::Uuid::new_v4().to_string(),
            from,
            to,
            date,
            transport_mode,
        )
    }

    /// Create a trip with a caller-supplied id
    pub fn with_id(
        id: impl Into<String>,
        from: Location,
        to: Location,
        date: impl Into<String>,
        transport_mode: Option<TransportMode>,
    ) -> Self {
        Self {
            id: id.into(),
            from,
            to,
            date: date.into(),
            transport_mode,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn from(&self) -> &Location {
        &self.from
    }

    #[inline]
    pub fn to(&self) -> &Location {
        &self.to
    }

    #[inline]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The mode as recorded, which may be unset
    #[inline]
    pub fn transport_mode(&self) -> Option<TransportMode> {
        self.transport_mode
    }

    /// The mode used for distance and emissions: unset counts as a flight
    #[inline]
    pub fn effective_mode(&self) -> TransportMode {
        self.transport_mode.unwrap_or(TransportMode::Plane)
    }

    /// Great-circle distance of this trip in whole kilometers
    #[inline]
    pub fn distance_km(&self) -> u64 {
        crate::distance_km(&self.from, &self.to)
    }

    /// Calendar year of the trip, if the date is a valid `YYYY-MM-DD`
    pub fn year(&self) -> Option<i32> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }
}
