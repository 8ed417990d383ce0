//! Travel Wrapped - command line front end
//!
//! Imports timeline exports and manually entered trips, then prints the
//! travel summary and carbon estimate as text or JSON.

mod logging;
mod report;
mod settings;

use report::Summary;
use settings::{OutputFormat, Settings};
use std::process::ExitCode;
use travel_wrapped_lib::{CityCatalog, ImportConfig, ImportError, Trip, TripLog};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("JSON output error: {0}")]
    Output(#[from] serde_json::Error),

    #[error("--min-distance-km must be a non-negative number, got {0}")]
    MinDistance(f64),
}

impl CliError {
    /// Message shown to the user, worded per failure kind
    fn user_message(&self) -> String {
        match self {
            CliError::Import(ImportError::InvalidFormat) => {
                "Invalid timeline format. Please export your location history from Google Takeout."
                    .to_string()
            }
            CliError::Import(ImportError::NoTripsFound) => {
                "No trips found in the file. Make sure you have location history with travel segments."
                    .to_string()
            }
            CliError::Import(ImportError::Json(e)) => {
                format!("Invalid JSON file ({e}). Please select a valid timeline export.")
            }
            other => other.to_string(),
        }
    }
}

fn main() -> ExitCode {
    logging::setup_logging();
    let settings = Settings::from_cli();

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Run failed: {e:?}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> Result<(), CliError> {
    #[cfg(feature = "profiling")]
    profiling::scope!("travel_wrapped::run");

    let catalog = CityCatalog::sample();
    if settings.list_cities {
        for name in catalog.names() {
            println!("{name}");
        }
        return Ok(());
    }

    if settings.min_distance_km.is_nan() || settings.min_distance_km < 0.0 {
        return Err(CliError::MinDistance(settings.min_distance_km));
    }
    let config = ImportConfig {
        min_trip_distance_m: settings.min_distance_km * 1000.0,
    };

    let log = build_log(settings, &catalog, &config)?;

    let trips: Vec<Trip> = match settings.year {
        Some(year) => log.trips_in_year(year),
        None => log.trips().to_vec(),
    };
    tracing::info!("Summarizing {} of {} trips", trips.len(), log.len());

    let summary = Summary::new(&trips, settings.year);
    match settings.format {
        OutputFormat::Text => print!("{}", summary.render_text(settings.top)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

/// Collect manual trips first, then timeline imports, in argument order
///
/// Timeline files that yield no trips only fail the run when there are no
/// manual trips either.
fn build_log(
    settings: &Settings,
    catalog: &CityCatalog,
    config: &ImportConfig,
) -> Result<TripLog, CliError> {
    let mut log = TripLog::new();

    for arg in &settings.trip {
        let from = catalog.require(&arg.from)?.clone();
        let to = catalog.require(&arg.to)?.clone();
        let trip = log.add(from, to, arg.date.clone(), arg.mode);
        tracing::debug!("Added manual trip {}", trip.id());
    }

    if !settings.timeline.is_empty() {
        match log.load_timeline_files(settings.timeline.clone(), config) {
            Ok(count) => tracing::info!(
                "Imported {count} trips from {} timeline file(s)",
                settings.timeline.len()
            ),
            // Manual trips still make a summary
            Err(ImportError::NoTripsFound) if !log.is_empty() => tracing::warn!(
                "No trips found in {} timeline file(s), keeping {} manual trip(s)",
                settings.timeline.len(),
                log.len()
            ),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn short_segment_file() -> tempfile::NamedTempFile {
        let doc = serde_json::json!({ "timelineObjects": [{ "activitySegment": {
            "startLocation": { "latitudeE7": 488566000, "longitudeE7": 23522000 },
            "endLocation": { "latitudeE7": 488600000, "longitudeE7": 23600000 },
            "distance": 800,
            "duration": { "startTimestamp": "2024-03-15T08:30:00Z" }
        } }] });
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{doc}").unwrap();
        file
    }

    #[test]
    fn test_build_log_manual_trips() {
        let settings = Settings::try_parse_from([
            "travel-wrapped",
            "--trip",
            "Paris,London,2024-03-01,train",
            "--trip",
            "London,Paris,2024-03-05",
        ])
        .unwrap();
        let log = build_log(&settings, &CityCatalog::sample(), &ImportConfig::default()).unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log.stats().total_distance, 688);
        assert_eq!(log.trips()[1].transport_mode(), None);
    }

    #[test]
    fn test_build_log_unknown_city() {
        let settings =
            Settings::try_parse_from(["travel-wrapped", "--trip", "Paris,Atlantis,2024-03-01"])
                .unwrap();
        let result = build_log(&settings, &CityCatalog::sample(), &ImportConfig::default());
        assert!(matches!(
            result,
            Err(CliError::Import(ImportError::UnknownCity(name))) if name == "Atlantis"
        ));
    }

    #[test]
    fn test_empty_timeline_keeps_manual_trips() {
        let file = short_segment_file();
        let path = file.path().to_str().unwrap();
        let settings = Settings::try_parse_from([
            "travel-wrapped",
            "--trip",
            "Paris,London,2024-03-01,train",
            "-t",
            path,
        ])
        .unwrap();
        let log = build_log(&settings, &CityCatalog::sample(), &ImportConfig::default()).unwrap();

        assert_eq!(log.len(), 1);
        assert_eq!(log.trips()[0].from().name(), "Paris");
    }

    #[test]
    fn test_empty_timeline_without_manual_trips_fails() {
        let file = short_segment_file();
        let path = file.path().to_str().unwrap();
        let settings = Settings::try_parse_from(["travel-wrapped", "-t", path]).unwrap();
        let result = build_log(&settings, &CityCatalog::sample(), &ImportConfig::default());

        assert!(matches!(
            result,
            Err(CliError::Import(ImportError::NoTripsFound))
        ));
    }

    #[test]
    fn test_user_messages_distinguish_failures() {
        let invalid = CliError::Import(ImportError::InvalidFormat).user_message();
        let empty = CliError::Import(ImportError::NoTripsFound).user_message();
        assert!(invalid.starts_with("Invalid timeline format"));
        assert!(empty.starts_with("No trips found"));
        assert_ne!(invalid, empty);
    }

    #[test]
    fn test_negative_min_distance_rejected() {
        let settings =
            Settings::try_parse_from(["travel-wrapped", "--min-distance-km=-1"]).unwrap();
        assert!(matches!(run(&settings), Err(CliError::MinDistance(_))));
    }
}
