//! Aggregate statistics over a trip list

use crate::Trip;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Maximum number of entries in [`TripStats::top_routes`]
pub const MAX_TOP_ROUTES: usize = 5;

/// Summary of a trip list
///
/// Derived on demand and never stored back onto trips. An empty input gives
/// an all-zero value, which callers use to hide the summary entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TripStats {
    /// Number of trips
    pub total_trips: usize,
    /// Sum of per-trip distances, each rounded to whole km before summing
    pub total_distance: u64,
    /// Distinct location names, in first-seen order
    pub cities_visited: Vec<String>,
    /// Most frequent directional routes, at most [`MAX_TOP_ROUTES`]
    pub top_routes: Vec<RouteCount>,
}

/// How many times a directional route was travelled
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteCount {
    pub route: String,
    pub count: usize,
}

/// Directional, case-sensitive route key: `"<from> → <to>"`
pub fn route_key(trip: &Trip) -> String {
    format!("{} → {}", trip.from().name(), trip.to().name())
}

/// Compute summary statistics for a trip list
pub fn compute_stats(trips: &[Trip]) -> TripStats {
    let mut seen_cities: HashSet<&str> = HashSet::new();
    let mut cities_visited = Vec::new();
    let mut total_distance: u64 = 0;

    // Routes in first-seen order, with an index for O(1) lookups
    let mut routes: Vec<RouteCount> = Vec::new();
    let mut route_index: HashMap<String, usize> = HashMap::new();

    for trip in trips {
        for name in [trip.from().name(), trip.to().name()] {
            if seen_cities.insert(name) {
                cities_visited.push(name.to_string());
            }
        }

        total_distance += trip.distance_km();

        let key = route_key(trip);
        match route_index.get(&key) {
            Some(&i) => routes[i].count += 1,
            None => {
                route_index.insert(key.clone(), routes.len());
                routes.push(RouteCount {
                    route: key,
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts
    routes.sort_by(|a, b| b.count.cmp(&a.count));
    routes.truncate(MAX_TOP_ROUTES);

    TripStats {
        total_trips: trips.len(),
        total_distance,
        cities_visited,
        top_routes: routes,
    }
}
