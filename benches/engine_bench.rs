// ABOUTME: Criterion benchmarks for the metrics engine
// ABOUTME: Measures energy target calculation and batch daily reports against sequential evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

//! Criterion benchmarks for the metrics engine.
//!
//! Batch reports fan out over rayon; the sequential group is the baseline.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vitalis_core::models::{
    AchievementState, ActivityLevel, BiometricProfile, DailyAggregate, FitnessGoal, Sex, UserId,
};
use vitalis_intelligence::{CycleMode, CycleTracking, DailySnapshot, MetricsEngine};

const BATCH_SIZES: [usize; 3] = [10, 100, 1_000];

fn aggregate(date: NaiveDate, seed: usize) -> DailyAggregate {
    DailyAggregate {
        calories_eaten: 1_600.0 + (seed % 7) as f64 * 100.0,
        calories_burned_exercise: 300.0,
        calories_burned_steps: 120.0,
        steps: 6_000 + (seed % 5) as u32 * 1_000,
        water_volume_ml: 1_800.0,
        mood_rating: Some((seed % 5) as u8 + 1),
        minutes_exercised: 40.0,
        workout_count: u32::from(seed % 3 != 0),
        meals_logged: 3,
        ..DailyAggregate::empty(date)
    }
}

fn generate_snapshots(count: usize) -> Vec<DailySnapshot> {
    let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 30, 20, 0, 0).unwrap();

    (0..count)
        .map(|i| {
            let history = (1..30_i64)
                .rev()
                .map(|back| aggregate(today - Duration::days(back), i + back as usize))
                .collect();
            DailySnapshot {
                user_id: UserId::new(),
                profile: BiometricProfile::new(
                    if i % 2 == 0 { Sex::Male } else { Sex::Female },
                    20 + (i % 50) as u32,
                    55.0 + (i % 40) as f64,
                    155.0 + (i % 35) as f64,
                )
                .with_activity_level(ActivityLevel::LightlyActive)
                .with_goal(FitnessGoal::Maintain),
                today: aggregate(today, i),
                history,
                unlocked: AchievementState::new(),
                lifetime_workouts: (i % 60) as u32,
                step_goal: None,
                water_goal_ml: None,
                cycle: (i % 2 == 1).then(|| {
                    CycleTracking::from_date(CycleMode::Cycle, today - Duration::days(12))
                }),
                now,
            }
        })
        .collect()
}

fn bench_energy_targets(c: &mut Criterion) {
    let engine = MetricsEngine::default();
    let profile = BiometricProfile::new(Sex::Female, 34, 68.0, 170.0)
        .with_activity_level(ActivityLevel::ModeratelyActive)
        .with_goal(FitnessGoal::LoseWeight);

    c.bench_function("energy_targets", |b| {
        b.iter(|| engine.energy_targets(black_box(&profile)));
    });
}

/// Parallel batch against a plain sequential map over the same snapshots
fn bench_daily_reports(c: &mut Criterion) {
    let engine = MetricsEngine::default();
    let mut group = c.benchmark_group("daily_reports");

    for count in BATCH_SIZES {
        let snapshots = generate_snapshots(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(
            BenchmarkId::new("evaluate_batch", count),
            &snapshots,
            |b, snapshots| b.iter(|| engine.evaluate_batch(black_box(snapshots))),
        );
        group.bench_with_input(
            BenchmarkId::new("sequential", count),
            &snapshots,
            |b, snapshots| {
                b.iter(|| {
                    black_box(snapshots)
                        .iter()
                        .map(|snapshot| engine.daily_report(snapshot))
                        .collect::<Vec<_>>()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_energy_targets, bench_daily_reports);
criterion_main!(benches);
