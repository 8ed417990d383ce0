//! Performance benchmarks for travel-wrapped-lib
//!
//! Run with: cargo bench --package travel-wrapped-lib

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::{Value, json};
use std::hint::black_box;
use travel_wrapped_lib::{
    CityCatalog, TransportMode, Trip, compute_carbon, compute_stats, timeline,
};

/// Generate trips cycling through the sample cities and transport modes
fn generate_trips(num_trips: usize) -> Vec<Trip> {
    let catalog = CityCatalog::sample();
    let cities: Vec<_> = catalog.names().filter_map(|n| catalog.get(n)).collect();

    (0..num_trips)
        .map(|i| {
            let from = cities[i % cities.len()].clone();
            let to = cities[(i * 7 + 3) % cities.len()].clone();
            let mode = TransportMode::ALL.get(i % 6).copied();
            Trip::new(from, to, format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1), mode)
        })
        .collect()
}

/// Generate a timeline document with a mix of trips, short hops and place visits
fn generate_timeline(num_elements: usize) -> Value {
    let elements: Vec<Value> = (0..num_elements)
        .map(|i| match i % 3 {
            0 => json!({ "placeVisit": { "location": { "latitudeE7": 488566000, "longitudeE7": 23522000 } } }),
            _ => {
                let start_lat_e7 = 488_566_000 + i as i64;
                let distance_m = if i % 3 == 1 { 344_000 } else { 2_000 };
                json!({
                    "activitySegment": {
                        "startLocation": { "latitudeE7": start_lat_e7, "longitudeE7": 23522000 },
                        "endLocation": { "latitudeE7": 515074000, "longitudeE7": -1278000, "address": "Euston Rd, London, UK" },
                        "duration": { "startTimestamp": "2024-03-15T08:30:00.000Z" },
                        "activityType": "IN_TRAIN",
                        "distance": distance_m
                    }
                })
            }
        })
        .collect();
    json!({ "timelineObjects": elements })
}

// ============================================================================
// Core Benchmarks
// ============================================================================

fn bench_summaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("summaries");

    for &num_trips in &[100usize, 10_000] {
        let trips = generate_trips(num_trips);
        group.throughput(Throughput::Elements(num_trips as u64));

        group.bench_with_input(BenchmarkId::new("stats", num_trips), &trips, |b, trips| {
            b.iter(|| compute_stats(black_box(trips)))
        });
        group.bench_with_input(BenchmarkId::new("carbon", num_trips), &trips, |b, trips| {
            b.iter(|| compute_carbon(black_box(trips)))
        });
    }

    group.finish();
}

fn bench_timeline_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline");

    for &num_elements in &[1_000usize, 20_000] {
        let document = generate_timeline(num_elements);
        group.throughput(Throughput::Elements(num_elements as u64));
        group.bench_with_input(
            BenchmarkId::new("parse", num_elements),
            &document,
            |b, document| b.iter(|| timeline::parse(black_box(document))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_summaries, bench_timeline_parse);
criterion_main!(benches);
