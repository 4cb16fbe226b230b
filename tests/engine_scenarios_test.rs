// ABOUTME: Integration tests for the metrics engine's documented scenarios and properties
// ABOUTME: Covers energy targets, MET clamping, vitality bounds, cycle ranges and achievement monotonicity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{full_day, june, june_evening, male_profile};
use vitalis_core::models::{
    AchievementState, BiometricProfile, DailyAggregate, FitnessGoal, NutritionApproach, Sex,
    UserId,
};
use vitalis_intelligence::achievements::evaluate_achievements;
use vitalis_intelligence::conversion::{kg_to_lbs, lbs_to_kg, ml_to_oz, oz_to_ml};
use vitalis_intelligence::cycle::{elapsed_days, Trimester};
use vitalis_intelligence::{
    default_catalog, AchievementStats, CycleMode, CyclePhase, CyclePhaseInputs, CycleTracking,
    DailySnapshot, MetricsEngine, PhaseReport, VitalityInputs, VitalityScore,
};

const DAY_MS: i64 = 86_400_000;

#[test]
fn test_maintenance_targets_follow_mifflin_st_jeor() {
    let engine = MetricsEngine::default();
    let targets = engine.energy_targets(&male_profile(FitnessGoal::Maintain));

    // 800 + 1125 - 150 + 5
    assert_eq!(targets.bmr, 1780);
    // 1780 * 1.55 = 2759
    assert_eq!(targets.tdee, 2759);
    assert_eq!(targets.daily_calories, 2759);
    assert!(targets.defaults_applied.is_empty());
}

#[test]
fn test_weight_loss_goal_subtracts_500() {
    let targets = MetricsEngine::default().energy_targets(&male_profile(FitnessGoal::LoseWeight));
    assert_eq!(targets.daily_calories, 2259);
    // 80 kg * 2.0 g/kg
    assert_eq!(targets.daily_protein, 160);
}

#[test]
fn test_carb_floor_holds_for_extreme_profiles() {
    let engine = MetricsEngine::default();
    let profiles = [
        BiometricProfile::new(Sex::Female, 90, 35.0, 120.0)
            .with_goal(FitnessGoal::LoseWeight)
            .with_nutrition_approach(NutritionApproach::HighProtein),
        BiometricProfile::new(Sex::Male, 20, 180.0, 160.0)
            .with_goal(FitnessGoal::LoseWeight)
            .with_nutrition_approach(NutritionApproach::LowCarb),
        BiometricProfile::default(),
    ];

    for profile in &profiles {
        assert!(engine.energy_targets(profile).daily_carbs >= 50);
    }
}

#[test]
fn test_reverse_met_is_always_finite_and_clamped() {
    let engine = MetricsEngine::default();
    for weight in [0.5, 1.0, 70.0, 300.0] {
        for minutes in [0.1, 1.0, 30.0, 600.0] {
            for calories in [0.0, 1.0, 250.0, 1.0e9] {
                let met = engine.implied_met(calories, weight, minutes);
                assert!(met.is_finite());
                assert!(met >= 0.1);
            }
        }
    }
}

#[test]
fn test_vitality_perfect_day_and_no_data() {
    let engine = MetricsEngine::default();
    let perfect = VitalityInputs {
        steps: 10_000,
        step_goal: 10_000,
        mood_rating: Some(5),
        calories_eaten: 2000.0,
        calorie_goal: 2000.0,
        water_volume_ml: 2000.0,
        water_goal_ml: 2000.0,
    };
    assert_eq!(engine.vitality(&perfect).value(), Some(100));

    let empty = VitalityInputs {
        steps: 0,
        mood_rating: None,
        calories_eaten: 0.0,
        ..perfect
    };
    assert_eq!(engine.vitality(&empty), VitalityScore::NoData);
}

#[test]
fn test_vitality_stays_within_bounds() {
    let engine = MetricsEngine::default();
    for steps in [0, 1, 5_000, 50_000] {
        for mood in [None, Some(0), Some(1), Some(5), Some(9)] {
            for calories in [0.0, 500.0, 6000.0] {
                let inputs = VitalityInputs {
                    steps,
                    step_goal: 0,
                    mood_rating: mood,
                    calories_eaten: calories,
                    calorie_goal: 2000.0,
                    water_volume_ml: 4000.0,
                    water_goal_ml: 0.0,
                };
                if let Some(score) = engine.vitality(&inputs).value() {
                    assert!(score <= 100);
                }
            }
        }
    }
}

#[test]
fn test_cycle_day_twenty_is_luteal() {
    let engine = MetricsEngine::default();
    let now = 1_750_000_000_000;
    let inputs = CyclePhaseInputs {
        reference_ms: now - 20 * DAY_MS,
        now_ms: now,
        mode: CycleMode::Cycle,
    };

    match engine.phase(&inputs) {
        PhaseReport::Cycle(status) => {
            assert_eq!(status.cycle_day, 20);
            assert_eq!(status.phase, CyclePhase::Luteal);
        }
        PhaseReport::Pregnancy(_) => panic!("expected cycle report"),
    }
}

#[test]
fn test_cycle_day_always_in_range() {
    let engine = MetricsEngine::default();
    for days in 0..120 {
        let inputs = CyclePhaseInputs {
            reference_ms: 0,
            now_ms: days * DAY_MS,
            mode: CycleMode::Cycle,
        };
        if let PhaseReport::Cycle(status) = engine.phase(&inputs) {
            assert!((1..=28).contains(&status.cycle_day));
        }
    }
}

#[test]
fn test_pregnancy_week_fourteen_is_second_trimester() {
    let engine = MetricsEngine::default();
    let inputs = CyclePhaseInputs {
        reference_ms: 0,
        now_ms: 98 * DAY_MS,
        mode: CycleMode::Pregnancy,
    };

    match engine.phase(&inputs) {
        PhaseReport::Pregnancy(status) => {
            assert_eq!(status.weeks, 14);
            assert_eq!(status.days, 0);
            assert_eq!(status.trimester, Trimester::Second);
        }
        PhaseReport::Cycle(_) => panic!("expected pregnancy report"),
    }
}

#[test]
fn test_now_before_reference_counts_as_zero_elapsed() {
    assert_eq!(elapsed_days(10 * DAY_MS, 0), 0);

    let engine = MetricsEngine::default();
    let inputs = CyclePhaseInputs {
        reference_ms: 10 * DAY_MS,
        now_ms: 0,
        mode: CycleMode::Pregnancy,
    };
    if let PhaseReport::Pregnancy(status) = engine.phase(&inputs) {
        assert_eq!(status.weeks, 0);
        assert!(status.progress >= 0.0);
    }
}

#[test]
fn test_weight_and_volume_round_trip() {
    for tenth in 0..5_000 {
        let kg = f64::from(tenth) / 10.0;
        assert!((lbs_to_kg(kg_to_lbs(kg)) - kg).abs() < 0.01);
    }
    assert!((oz_to_ml(ml_to_oz(750.0)) - 750.0).abs() < 1e-9);
}

#[test]
fn test_achievements_are_monotonic_across_days() {
    let catalog = default_catalog();
    let mut state = AchievementState::new();
    let mut history: Vec<DailyAggregate> = Vec::new();

    for day in 1..=7 {
        let engine = MetricsEngine::default();
        let today = engine.aggregate(&full_day(june(day))).remove(0);
        history.push(today);

        let stats = AchievementStats::new(june(day), history.clone());
        let before: Vec<String> = state.iter().map(ToOwned::to_owned).collect();
        let evaluation = evaluate_achievements(&catalog, &state, &stats, june_evening(day));

        for event in &evaluation.unlocks {
            assert!(!state.is_unlocked(&event.achievement_id));
        }
        state.apply(&evaluation.unlocks);
        for id in before {
            assert!(state.is_unlocked(&id));
        }
    }

    assert!(state.is_unlocked("first_workout"));
    assert!(state.is_unlocked("workout_streak_7"));
    assert!(state.is_unlocked("logging_streak_7"));
    assert!(state.is_unlocked("mood_week"));
}

#[test]
fn test_batch_matches_sequential_reports() {
    let engine = MetricsEngine::default();
    let snapshots: Vec<DailySnapshot> = (1..=20)
        .map(|day| DailySnapshot {
            user_id: UserId::new(),
            profile: male_profile(FitnessGoal::BuildMuscle),
            today: engine.aggregate(&full_day(june(day))).remove(0),
            history: Vec::new(),
            unlocked: AchievementState::new(),
            lifetime_workouts: day,
            step_goal: None,
            water_goal_ml: None,
            cycle: Some(CycleTracking::from_date(CycleMode::Cycle, june(1))),
            now: june_evening(day),
        })
        .collect();

    let batch = engine.evaluate_batch(&snapshots);
    let sequential: Vec<_> = snapshots.iter().map(|s| engine.daily_report(s)).collect();
    assert_eq!(batch, sequential);
}
