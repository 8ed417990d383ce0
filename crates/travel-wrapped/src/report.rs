//! Rendering of the "wrapped" summary card

use serde::Serialize;
use std::fmt;
use travel_wrapped_lib::{CarbonReport, Trip, TripStats, compute_carbon, compute_stats};

/// Everything shown on the summary card
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub stats: TripStats,
    pub carbon: CarbonReport,
}

impl Summary {
    pub fn new(trips: &[Trip], year: Option<i32>) -> Self {
        Self {
            year,
            stats: compute_stats(trips),
            carbon: compute_carbon(trips),
        }
    }

    /// Plain-text card. An empty trip list renders a single notice instead.
    pub fn render_text(&self, top_routes: usize) -> String {
        TextCard {
            summary: self,
            top_routes,
        }
        .to_string()
    }
}

/// Text rendering of a [`Summary`], showing at most `top_routes` routes
struct TextCard<'a> {
    summary: &'a Summary,
    top_routes: usize,
}

impl fmt::Display for TextCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.summary.stats;
        if stats.total_trips == 0 {
            return writeln!(f, "No trips to summarize.");
        }

        match self.summary.year {
            Some(year) => writeln!(f, "Your Travel Wrapped {year}")?,
            None => writeln!(f, "Your Travel Wrapped")?,
        }
        writeln!(f, "  Trips:          {}", stats.total_trips)?;
        writeln!(f, "  Kilometers:     {}", thousands(stats.total_distance))?;
        writeln!(f, "  Cities visited: {}", stats.cities_visited.len())?;

        if !stats.top_routes.is_empty() && self.top_routes > 0 {
            writeln!(f, "\nTop routes")?;
            for (index, route) in stats.top_routes.iter().take(self.top_routes).enumerate() {
                writeln!(f, "  {}. {} ({}x)", index + 1, route.route, route.count)?;
            }
        }

        let carbon = &self.summary.carbon;
        writeln!(f, "\nCarbon footprint: {} kg CO2", thousands(carbon.total_co2))?;
        for (mode, kg) in &carbon.by_transport {
            writeln!(f, "  {:<6} {} kg", mode.label(), thousands(*kg))?;
        }
        writeln!(
            f,
            "  That is {} trees absorbing CO2 for a year, or {} km of driving.",
            thousands(carbon.equivalents.trees),
            thousands(carbon.equivalents.driving_km)
        )
    }
}

/// Group digits in threes: 1234567 -> "1,234,567"
fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
