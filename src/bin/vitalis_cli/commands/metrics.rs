// ABOUTME: Single-metric commands for vitalis-cli: targets, burn, vitality and phase
// ABOUTME: Each command builds engine inputs from arguments and prints the result as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

use crate::helpers::{display::print_json, input::json_arg};
use chrono::{NaiveDate, Utc};
use serde_json::json;
use tracing::warn;
use vitalis_core::errors::AppResult;
use vitalis_core::models::{BiometricProfile, LocalizedText, LogEntry};
use vitalis_intelligence::{
    CycleMode, CyclePhaseInputs, CycleTracking, ExerciseEffort, MetricsEngine, OnboardingStep,
    VitalityInputs,
};

/// Raw burn arguments
pub struct BurnArgs {
    pub weight_kg: f64,
    pub minutes: f64,
    pub met: Option<f64>,
    pub calories: Option<f64>,
    pub date: Option<NaiveDate>,
    pub name: Option<String>,
}

/// Raw vitality arguments
pub struct VitalityArgs {
    pub steps: u32,
    pub mood: Option<u8>,
    pub calories: f64,
    pub calorie_goal: f64,
    pub water: f64,
    pub water_goal: Option<f64>,
    pub step_goal: Option<u32>,
}

/// Energy and macro targets plus the first unanswered onboarding step
pub fn targets(engine: &MetricsEngine, profile_arg: &str) -> AppResult<()> {
    let profile: BiometricProfile = json_arg(profile_arg)?;
    let targets = engine.energy_targets(&profile);
    if !targets.defaults_applied.is_empty() {
        warn!(fields = ?targets.defaults_applied, "Profile incomplete, defaults substituted");
    }

    print_json(&json!({
        "targets": targets,
        "onboarding_step": OnboardingStep::resume_point(&profile),
    }))
}

/// Workout calories from a MET, or the MET implied by a calorie count
///
/// With a date the estimate is printed as an exercise log entry that can be
/// appended to a user data file.
pub fn burn(engine: &MetricsEngine, args: BurnArgs) -> AppResult<()> {
    // clap's required group guarantees one of the two is present
    let effort = args.calories.map_or_else(
        || ExerciseEffort::Met(args.met.unwrap_or(engine.config().activity.default_met)),
        ExerciseEffort::TargetCalories,
    );
    let estimate = engine.estimate_exercise(effort, args.weight_kg, args.minutes);

    match args.date {
        Some(date) => {
            let log = estimate.into_log(date, args.name.map(LocalizedText::plain));
            print_json(&LogEntry::Exercise(log))
        }
        None => print_json(&estimate),
    }
}

/// Composite vitality score
pub fn vitality(engine: &MetricsEngine, args: VitalityArgs) -> AppResult<()> {
    let defaults = &engine.config().vitality;
    let inputs = VitalityInputs {
        steps: args.steps,
        step_goal: args.step_goal.unwrap_or(defaults.default_step_goal),
        mood_rating: args.mood,
        calories_eaten: args.calories,
        calorie_goal: args.calorie_goal,
        water_volume_ml: args.water,
        water_goal_ml: args.water_goal.unwrap_or(defaults.default_water_goal_ml),
    };
    print_json(&engine.vitality(&inputs))
}

/// Cycle phase or pregnancy progress at `now`, defaulting to the current time
pub fn phase(
    engine: &MetricsEngine,
    mode: CycleMode,
    reference: NaiveDate,
    now: Option<NaiveDate>,
) -> AppResult<()> {
    let inputs = match now {
        Some(date) => CyclePhaseInputs::from_dates(mode, reference, date),
        None => CycleTracking::from_date(mode, reference).at(Utc::now().timestamp_millis()),
    };
    print_json(&engine.phase(&inputs))
}
