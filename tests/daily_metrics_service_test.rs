// ABOUTME: Integration tests for DailyMetricsService over the in-memory store
// ABOUTME: Covers onboarding gating, history windows, unlock persistence and batch reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{full_day, june, june_evening, male_profile, meal, seeded_service, workout};
use std::sync::Arc;
use vitalis::providers::memory::InMemoryStore;
use vitalis::providers::{AchievementStore, LogAggregator, ProfileReader, ProfileRecord};
use vitalis::services::daily_metrics::DailyMetricsService;
use vitalis_core::errors::ErrorCode;
use vitalis_core::models::{BiometricProfile, FitnessGoal, Sex, UnlockEvent, UserId};
use vitalis_intelligence::{
    CycleMode, CycleTracking, MetricsEngine, OnboardingStep, PhaseReport,
};

#[tokio::test]
async fn test_missing_profile_is_not_found() {
    common::init_test_logging();
    let store = Arc::new(InMemoryStore::new());
    let service = DailyMetricsService::with_store(Arc::new(MetricsEngine::default()), store);

    let error = service
        .daily_report(UserId::new(), june(10), june_evening(10))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_missing_profile_error_names_the_record() {
    let store = Arc::new(InMemoryStore::new());
    let service = DailyMetricsService::with_store(Arc::new(MetricsEngine::default()), store);
    let user_id = UserId::new();

    let error = service
        .daily_report(user_id, june(10), june_evening(10))
        .await
        .unwrap_err();
    assert_eq!(error.context.user_id, Some(user_id.as_uuid()));
    assert_eq!(
        error.context.resource_id.as_deref(),
        Some(format!("profile:{user_id}").as_str())
    );
}

#[tokio::test]
async fn test_incomplete_biometrics_are_not_onboarded() {
    let partial = BiometricProfile {
        sex: Some(Sex::Female),
        age: Some(28),
        weight_kg: Some(0.0),
        ..BiometricProfile::default()
    };
    let (user_id, _store, service) = seeded_service(partial, Vec::new());

    let error = service
        .daily_report(user_id, june(10), june_evening(10))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::NotOnboarded);
    assert_eq!(error.context.user_id, Some(user_id.as_uuid()));
    assert_eq!(
        service.onboarding_step(user_id).await.unwrap(),
        OnboardingStep::Height
    );
}

#[tokio::test]
async fn test_report_persists_unlocks_once() {
    let (user_id, store, service) =
        seeded_service(male_profile(FitnessGoal::Maintain), full_day(june(10)));

    let first = service
        .daily_report(user_id, june(10), june_evening(10))
        .await
        .unwrap();
    let unlocked: Vec<&str> = first
        .achievements
        .unlocks
        .iter()
        .map(|event| event.achievement_id.as_str())
        .collect();
    assert!(unlocked.contains(&"first_workout"));
    assert!(unlocked.contains(&"step_goal"));
    assert!(unlocked.contains(&"hydration_goal"));

    let second = service
        .daily_report(user_id, june(10), june_evening(10))
        .await
        .unwrap();
    assert!(second.achievements.unlocks.is_empty());
    assert_eq!(store.unlock_history(user_id).len(), first.achievements.unlocks.len());
}

#[tokio::test]
async fn test_history_window_feeds_streaks() {
    let logs: Vec<_> = (1..=7).flat_map(|day| full_day(june(day))).collect();
    let (user_id, store, service) = seeded_service(male_profile(FitnessGoal::Maintain), logs);

    let report = service
        .daily_report(user_id, june(7), june_evening(7))
        .await
        .unwrap();
    assert!(report
        .achievements
        .unlocks
        .iter()
        .any(|event| event.achievement_id == "workout_streak_7"));

    let state = store.unlocked(user_id).await.unwrap();
    assert!(state.is_unlocked("workout_streak_3"));
    assert!(state.is_unlocked("logging_streak_7"));
}

#[tokio::test]
async fn test_day_without_logs_has_no_vitality_data() {
    let (user_id, _store, service) =
        seeded_service(male_profile(FitnessGoal::Maintain), full_day(june(1)));

    let report = service
        .daily_report(user_id, june(15), june_evening(15))
        .await
        .unwrap();
    assert!(report.vitality.value().is_none());
    assert!(report.net_calories.abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_cycle_tracking_from_profile_record() {
    common::init_test_logging();
    let user_id = UserId::new();
    let store = Arc::new(InMemoryStore::new());
    store.put_profile(
        user_id,
        ProfileRecord {
            cycle: Some(CycleTracking::from_date(CycleMode::Cycle, june(1))),
            step_goal: Some(5_000),
            ..ProfileRecord::new(BiometricProfile::new(Sex::Female, 32, 62.0, 168.0))
        },
    );
    store.append_logs(user_id, vec![meal(june(3), 1600.0)]);
    let service = DailyMetricsService::with_store(Arc::new(MetricsEngine::default()), store);

    let report = service
        .daily_report(user_id, june(3), june_evening(3))
        .await
        .unwrap();
    match report.phase {
        Some(PhaseReport::Cycle(status)) => assert_eq!(status.cycle_day, 3),
        other => panic!("expected cycle phase, got {other:?}"),
    }
}

#[tokio::test]
async fn test_batch_reports_keep_user_order() {
    common::init_test_logging();
    let store = Arc::new(InMemoryStore::new());
    let users: Vec<UserId> = (0..8).map(|_| UserId::new()).collect();
    for (i, user_id) in users.iter().enumerate() {
        store.put_profile(
            *user_id,
            ProfileRecord::new(male_profile(FitnessGoal::LoseWeight)),
        );
        store.append_log(*user_id, workout(june(12), 20.0 + i as f64, 6.0));
    }
    let service = DailyMetricsService::with_store(Arc::new(MetricsEngine::default()), store.clone());

    let reports = service
        .daily_reports(&users, june(12), june_evening(12))
        .await
        .unwrap();

    let order: Vec<UserId> = reports.iter().map(|report| report.user_id).collect();
    assert_eq!(order, users);
    for user_id in &users {
        assert!(store.unlocked(*user_id).await.unwrap().is_unlocked("first_workout"));
    }
}

#[tokio::test]
async fn test_store_record_unlocks_is_idempotent() {
    let store = InMemoryStore::new();
    let user_id = UserId::new();
    let event = UnlockEvent {
        achievement_id: "first_workout".to_owned(),
        unlocked_at: june_evening(1),
    };

    assert_eq!(store.record_unlocks(user_id, &[event.clone()]).await.unwrap(), 1);
    assert_eq!(store.record_unlocks(user_id, &[event]).await.unwrap(), 0);
    assert_eq!(store.unlock_history(user_id).len(), 1);
}

#[tokio::test]
async fn test_store_range_and_lifetime_counts() {
    let store = InMemoryStore::new();
    let user_id = UserId::new();
    store.append_logs(user_id, (1..=5).flat_map(|day| full_day(june(day))));

    let range = store.daily_range(user_id, june(2), june(4)).await.unwrap();
    let dates: Vec<_> = range.iter().map(|day| day.date).collect();
    assert_eq!(dates, vec![june(2), june(3), june(4)]);

    assert_eq!(store.lifetime_workouts(user_id, june(3)).await.unwrap(), 3);
    assert_eq!(store.lifetime_workouts(user_id, june(9)).await.unwrap(), 5);
    assert!(store.daily_aggregate(user_id, june(9)).await.unwrap().is_none());
    assert!(store.read_profile(user_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_workouts_logged_after_the_report_date_do_not_count() {
    let logs: Vec<_> = (1..=12).flat_map(|day| full_day(june(day))).collect();
    let (user_id, _store, service) = seeded_service(male_profile(FitnessGoal::Maintain), logs);

    let report = service
        .daily_report(user_id, june(1), june_evening(1))
        .await
        .unwrap();
    let unlocked: Vec<&str> = report
        .achievements
        .unlocks
        .iter()
        .map(|event| event.achievement_id.as_str())
        .collect();
    assert!(unlocked.contains(&"first_workout"));
    assert!(!unlocked.contains(&"workouts_10"));

    let snapshot = service
        .snapshot(user_id, june(4), june_evening(4))
        .await
        .unwrap();
    assert_eq!(snapshot.lifetime_workouts, 4);
}
