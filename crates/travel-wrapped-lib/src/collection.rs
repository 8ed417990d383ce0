//! TripLog - Ordered owner of the user's trips
//!
//! This module provides the high-level API for adding, removing and importing
//! trips, and for deriving summaries from the current list. Summaries are
//! recomputed on every call: the list can change between any two reads, so
//! nothing derived is kept around.

use crate::timeline::{self, ImportConfig};
use crate::{
    CarbonReport, ImportError, Location, Result, TransportMode, Trip, TripStats, compute_carbon,
    compute_stats,
};

use geo::{BoundingRect, MultiPoint, Rect};
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Trips in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TripLog {
    trips: Vec<Trip>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl TripLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new trip with a fresh id and return it
    pub fn add(
        &mut self,
        from: Location,
        to: Location,
        date: impl Into<String>,
        transport_mode: Option<TransportMode>,
    ) -> &Trip {
        self.push(Trip::new(from, to, date, transport_mode))
    }

    /// Append an existing trip and return it
    pub fn push(&mut self, trip: Trip) -> &Trip {
        tracing::trace!("Adding trip {} ({})", trip.id(), crate::route_key(&trip));
        let index = self.trips.len();
        self.trips.push(trip);
        &self.trips[index]
    }

    /// Append imported trips, keeping their order
    pub fn import(&mut self, trips: impl IntoIterator<Item = Trip>) {
        let before = self.trips.len();
        self.trips.extend(trips);
        tracing::debug!("Imported {} trips", self.trips.len() - before);
    }

    /// Remove the trip with the given id
    pub fn remove(&mut self, id: &str) -> Option<Trip> {
        let index = self.trips.iter().position(|trip| trip.id() == id)?;
        Some(self.trips.remove(index))
    }

    /// Remove every trip
    pub fn clear(&mut self) {
        self.trips.clear();
    }

    #[inline]
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&Trip> {
        self.trips.iter().find(|trip| trip.id() == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Summary statistics for the current trips
    pub fn stats(&self) -> TripStats {
        compute_stats(&self.trips)
    }

    /// Emissions estimate for the current trips
    pub fn carbon(&self) -> CarbonReport {
        compute_carbon(&self.trips)
    }

    /// Trips whose date falls in `year`, in log order
    ///
    /// Trips with a date that is not `YYYY-MM-DD` are left out.
    pub fn trips_in_year(&self, year: i32) -> Vec<Trip> {
        self.trips
            .iter()
            .filter(|trip| trip.year() == Some(year))
            .cloned()
            .collect()
    }

    /// Bounding box of all trip endpoints as (min_lat, min_lng, max_lat, max_lng)
    pub fn bounding_box_wgs84(&self) -> Option<(f64, f64, f64, f64)> {
        let rect = self.bounding_rect()?;
        Some((rect.min().y, rect.min().x, rect.max().y, rect.max().x))
    }

    /// Center of the endpoint bounding box as (lat, lng)
    #[inline]
    pub fn center_wgs84(&self) -> Option<(f64, f64)> {
        let center = self.bounding_rect()?.center();
        Some((center.y, center.x))
    }

    fn bounding_rect(&self) -> Option<Rect<f64>> {
        let points: MultiPoint<f64> = self
            .trips
            .iter()
            .flat_map(|trip| [trip.from().point(), trip.to().point()])
            .collect();
        points.bounding_rect()
    }

    /// Import timeline exports from files in parallel
    ///
    /// Files are read and parsed concurrently, then appended in the order the
    /// paths were given. Any unreadable or invalid file aborts the whole load
    /// and leaves the log unchanged. Files that are valid but contain no trips
    /// are allowed, as long as the load as a whole yields at least one.
    pub fn load_timeline_files<P: AsRef<Path> + Send + Sync>(
        &mut self,
        paths: Vec<P>,
        config: &ImportConfig,
    ) -> Result<usize> {
        let per_file: Result<Vec<Vec<Trip>>> = paths
            .into_par_iter()
            .map(|path| {
                let path = path.as_ref();
                match timeline::import_file(path, config) {
                    Ok(trips) => Ok(trips),
                    Err(ImportError::NoTripsFound) => {
                        tracing::warn!("No trips found in {}", path.display());
                        Ok(Vec::new())
                    }
                    Err(e) => {
                        tracing::error!("Failed to import {}: {e}", path.display());
                        Err(e)
                    }
                }
            })
            .collect();

        let imported: Vec<Trip> = per_file?.into_iter().flatten().collect();
        if imported.is_empty() {
            return Err(ImportError::NoTripsFound);
        }

        let count = imported.len();
        self.import(imported);
        Ok(count)
    }
}

impl FromIterator<Trip> for TripLog {
    fn from_iter<I: IntoIterator<Item = Trip>>(iter: I) -> Self {
        Self {
            trips: iter.into_iter().collect(),
        }
    }
}
