use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;
use travel_wrapped_lib::TransportMode;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Travel Wrapped - Summarize your trips, distances and carbon footprint
pub struct Settings {
    /// Timeline exports (timelineObjects / semanticSegments JSON) to import
    #[clap(short, long, value_name = "FILE")]
    pub timeline: Vec<PathBuf>,

    /// Manual trip between sample cities, e.g. "Paris,London,2024-03-01,train"
    #[clap(long, value_name = "FROM,TO,DATE[,MODE]")]
    pub trip: Vec<TripArg>,

    /// Only summarize trips from this year
    #[clap(short, long)]
    pub year: Option<i32>,

    /// Ignore timeline segments shorter than this many kilometers
    #[clap(long, default_value = "10")]
    pub min_distance_km: f64,

    /// Output format
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Number of top routes shown in text output
    #[clap(long, default_value = "3")]
    pub top: usize,

    /// Print the sample city names accepted by --trip and exit
    #[clap(long, default_value = "false")]
    pub list_cities: bool,
}

impl Settings {
    /// Parse from the process arguments, exiting with usage help on error
    pub fn from_cli() -> Self {
        match Settings::try_parse() {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// A trip given on the command line, before its cities are looked up
#[derive(Debug, Clone, PartialEq)]
pub struct TripArg {
    pub from: String,
    pub to: String,
    pub date: String,
    pub mode: Option<TransportMode>,
}

#[derive(Debug, thiserror::Error)]
pub enum TripArgError {
    #[error("expected FROM,TO,DATE[,MODE], got {0:?}")]
    Shape(String),

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    Date(String),

    #[error(transparent)]
    Mode(#[from] travel_wrapped_lib::ImportError),
}

impl FromStr for TripArg {
    type Err = TripArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let (from, to, date, mode) = match parts.as_slice() {
            [from, to, date] => (*from, *to, *date, None),
            [from, to, date, mode] => {
                let mode: TransportMode = mode.parse()?;
                (*from, *to, *date, Some(mode))
            }
            _ => return Err(TripArgError::Shape(s.to_string())),
        };

        if from.is_empty() || to.is_empty() {
            return Err(TripArgError::Shape(s.to_string()));
        }
        if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            return Err(TripArgError::Date(date.to_string()));
        }

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            date: date.to_string(),
            mode,
        })
    }
}
