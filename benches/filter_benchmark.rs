//! Benchmarks for schedule and speaker filtering
//!
//! Run with: cargo bench

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use confdeck::models::ConferenceData;
use confdeck::view_model::{build_schedule, filter_speakers};

/// Generate a document with `sessions` sessions spread over three days
fn generate_conference(sessions: usize) -> ConferenceData {
    let speakers: Vec<String> = (0..sessions / 2 + 1)
        .map(|i| {
            format!(
                r#"{{"id": "p{i}", "fullName": "Speaker {i}", "tagLine": "Engineer at Company {i}", "bio": "Works on compilers and runtimes."}}"#
            )
        })
        .collect();
    let sessions: Vec<String> = (0..sessions)
        .map(|i| {
            let day = 7 + i % 3;
            let hour = 9 + i % 8;
            format!(
                r#"{{"id": "s{i}", "title": "Session {i} on rendering", "description": "Talk number {i}", "startsAt": "2025-10-{day:02}T{hour:02}:00:00", "endsAt": "2025-10-{day:02}T{hour:02}:30:00", "roomId": 1, "speakers": ["p{}"]}}"#,
                i / 2
            )
        })
        .collect();

    let json = format!(
        r#"{{"sessions": [{}], "speakers": [{}], "rooms": [{{"id": 1, "name": "Main Hall"}}]}}"#,
        sessions.join(","),
        speakers.join(",")
    );
    serde_json::from_str(&json).expect("benchmark fixture parses")
}

fn bench_build_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_schedule");

    for size in [50, 200, 500].iter() {
        let data = generate_conference(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("no_query", size), &data, |b, data| {
            b.iter(|| black_box(build_schedule(black_box(data), "", 1, &Utc).rows.len()));
        });
        group.bench_with_input(BenchmarkId::new("speaker_query", size), &data, |b, data| {
            b.iter(|| black_box(build_schedule(black_box(data), "speaker 4", 1, &Utc).rows.len()));
        });
    }

    group.finish();
}

fn bench_filter_speakers(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_speakers");

    for size in [50, 200, 500].iter() {
        let data = generate_conference(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(filter_speakers(black_box(&data.speakers), "compilers").speakers.len()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_schedule, bench_filter_speakers);
criterion_main!(benches);
