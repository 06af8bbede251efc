use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use dialstat_core::algorithms::split_hold_interval;
use dialstat_core::clocks::map_to_bucket;
use dialstat_core::models::{ClockConfig, ClockKind};
use dialstat_core::solar::NoaaEphemeris;

fn config() -> ClockConfig {
    ClockConfig::new(chrono_tz::Europe::Madrid, 40.4168, -3.7038).unwrap()
}

fn bench_map_to_bucket(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock_mapping");
    let cfg = config();
    let base = Utc
        .with_ymd_and_hms(2026, 8, 3, 0, 0, 0)
        .unwrap()
        .timestamp_millis();

    for clock in ClockKind::ALL {
        group.bench_with_input(
            BenchmarkId::new("map_to_bucket", clock.to_string()),
            &clock,
            |b, &clock| {
                b.iter(|| {
                    for i in 0..1000i64 {
                        let instant = base + i * 97_000;
                        black_box(map_to_bucket(clock, black_box(instant), &cfg, &NoaaEphemeris));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_split_hold_interval(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_hold_interval");
    let cfg = config();
    let t0 = Utc
        .with_ymd_and_hms(2026, 8, 3, 14, 30, 0)
        .unwrap()
        .timestamp_millis();

    for hours in [1i64, 8, 24] {
        let t1 = t0 + hours * 3_600_000;
        for clock in [ClockKind::Utc, ClockKind::Local, ClockKind::UnequalHours] {
            group.bench_with_input(
                BenchmarkId::new(clock.to_string(), format!("{}h", hours)),
                &(t0, t1, clock),
                |b, &(t0, t1, clock)| {
                    b.iter(|| {
                        black_box(split_hold_interval(
                            black_box(t0),
                            black_box(t1),
                            clock,
                            &cfg,
                            &NoaaEphemeris,
                        ))
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_map_to_bucket, bench_split_hold_interval);
criterion_main!(benches);
