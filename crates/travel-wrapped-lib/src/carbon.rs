//! Carbon emission estimates for a trip list

use crate::{TransportMode, Trip};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// CO2 a tree absorbs per year, in kilograms
pub const TREE_KG_PER_YEAR: f64 = 21.0;

/// Car emissions per kilometer, in kilograms
pub const CAR_KG_PER_KM: f64 = 0.171;

/// Emissions summary in whole kilograms of CO2
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CarbonReport {
    #[cfg_attr(feature = "serde", serde(rename = "totalCO2"))]
    pub total_co2: u64,
    /// Only modes that actually occur have an entry
    pub by_transport: BTreeMap<TransportMode, u64>,
    pub equivalents: Equivalents,
}

/// Everyday comparisons for a CO2 total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Equivalents {
    /// Tree-years needed to absorb the total
    pub trees: u64,
    /// Kilometers of driving that emit the same amount
    pub driving_km: u64,
}

impl Equivalents {
    fn for_total_kg(total_co2: u64) -> Self {
        let total = total_co2 as f64;
        Self {
            trees: (total / TREE_KG_PER_YEAR).round() as u64,
            driving_km: (total / CAR_KG_PER_KM).round() as u64,
        }
    }
}

/// Estimate emissions for a trip list
///
/// Grams are summed exactly and converted to kilograms once per bucket, unlike
/// [`crate::compute_stats`] which rounds each trip's distance before summing.
/// Trips without a mode are counted as flights.
pub fn compute_carbon(trips: &[Trip]) -> CarbonReport {
    let mut total_grams: u64 = 0;
    let mut grams_by_mode: BTreeMap<TransportMode, u64> = BTreeMap::new();

    for trip in trips {
        let mode = trip.effective_mode();
        let grams = trip.distance_km() * mode.grams_co2_per_km();
        total_grams += grams;
        *grams_by_mode.entry(mode).or_insert(0) += grams;
    }

    let total_co2 = grams_to_kg(total_grams);
    CarbonReport {
        total_co2,
        by_transport: grams_by_mode
            .into_iter()
            .map(|(mode, grams)| (mode, grams_to_kg(grams)))
            .collect(),
        equivalents: Equivalents::for_total_kg(total_co2),
    }
}

#[inline]
fn grams_to_kg(grams: u64) -> u64 {
    (grams as f64 / 1000.0).round() as u64
}
