// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, sample profiles, raw logs and seeded in-memory stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `vitalis`

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::sync::{Arc, Once};
use vitalis::providers::memory::InMemoryStore;
use vitalis::providers::ProfileRecord;
use vitalis::services::daily_metrics::DailyMetricsService;
use vitalis_core::models::{
    ActivityLevel, BiometricProfile, ExerciseLog, FitnessGoal, LogEntry, MealLog, MoodLog, Sex,
    StepLog, UserId, WaterLog,
};
use vitalis_intelligence::MetricsEngine;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date in June 2025
pub fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

/// Evening of a June 2025 day, UTC
pub fn june_evening(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, day, 20, 0, 0).unwrap()
}

/// 30 year old, 80 kg, 180 cm, moderately active male
pub fn male_profile(goal: FitnessGoal) -> BiometricProfile {
    BiometricProfile::new(Sex::Male, 30, 80.0, 180.0)
        .with_activity_level(ActivityLevel::ModeratelyActive)
        .with_goal(goal)
}

/// A workout logged on `date`
pub fn workout(date: NaiveDate, minutes: f64, met: f64) -> LogEntry {
    LogEntry::Exercise(ExerciseLog {
        date,
        name: None,
        duration_minutes: minutes,
        met,
        calories_burned: (met * 80.0 * minutes / 60.0).round(),
    })
}

/// A meal logged on `date`
pub fn meal(date: NaiveDate, calories: f64) -> LogEntry {
    LogEntry::Meal(MealLog {
        date,
        name: None,
        calories,
        protein_g: 30.0,
        carbs_g: 60.0,
        fat_g: 20.0,
    })
}

/// Steps without device calories
pub fn steps(date: NaiveDate, count: u32) -> LogEntry {
    LogEntry::Steps(StepLog {
        date,
        steps: count,
        calories_burned: None,
    })
}

/// Water drunk on `date`
pub fn water(date: NaiveDate, volume_ml: f64) -> LogEntry {
    LogEntry::Water(WaterLog { date, volume_ml })
}

/// Mood check-in at noon on `date`
pub fn mood(date: NaiveDate, rating: u8) -> LogEntry {
    LogEntry::Mood(MoodLog {
        date,
        logged_at: date.and_hms_opt(12, 0, 0).unwrap().and_utc(),
        rating,
    })
}

/// A full, on-target day: workout, meals, 10k steps, 2 l water and a mood of 5
pub fn full_day(date: NaiveDate) -> Vec<LogEntry> {
    vec![
        workout(date, 45.0, 8.0),
        meal(date, 900.0),
        meal(date, 1300.0),
        steps(date, 10_000),
        water(date, 2000.0),
        mood(date, 5),
    ]
}

/// Store seeded with an onboarded user, plus the service over it
pub fn seeded_service(
    profile: BiometricProfile,
    logs: Vec<LogEntry>,
) -> (UserId, Arc<InMemoryStore>, DailyMetricsService) {
    init_test_logging();
    let user_id = UserId::new();
    let store = Arc::new(InMemoryStore::new());
    store.put_profile(user_id, ProfileRecord::new(profile));
    store.append_logs(user_id, logs);

    let service = DailyMetricsService::with_store(Arc::new(MetricsEngine::default()), store.clone());
    (user_id, store, service)
}
