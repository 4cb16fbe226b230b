// ABOUTME: MET-based activity calorie estimation and reverse MET derivation
// ABOUTME: Keeps stored MET values consistent with the calories a user sees or edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

//! Activity Calorie Estimator
//!
//! Forward: `calories = MET x weight_kg x hours`.
//! Reverse: `MET = calories / (max(1, weight_kg) x max(0.01, hours))`, falling
//! back to the default MET when the quotient is not finite and never going below
//! the MET floor. A stored MET is therefore always finite and positive.
//!
//! # Reference
//!
//! - Ainsworth, B.E., et al. (2011). 2011 Compendium of Physical Activities.
//!   *Medicine & Science in Sports & Exercise*, 43(8), 1575-1581.
//!   <https://doi.org/10.1249/MSS.0b013e31821ece12>

use crate::config::ActivityCalorieConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use vitalis_core::constants::units::MINUTES_PER_HOUR;
use vitalis_core::models::{ExerciseLog, LocalizedText};

fn whole_calories(value: f64) -> u32 {
    if value.is_finite() {
        value.round().max(0.0) as u32
    } else {
        0
    }
}

/// Calories burned for `duration_minutes` at `met`, rounded to a whole calorie
#[must_use]
pub fn calories_burned(met: f64, weight_kg: f64, duration_minutes: f64) -> u32 {
    whole_calories(met * weight_kg * (duration_minutes / MINUTES_PER_HOUR))
}

/// MET implied by a target calorie count
///
/// Weight and duration are floored before dividing so that zero or tiny values
/// cannot blow up the quotient. The result is always finite and at least
/// `config.min_met`.
#[must_use]
pub fn implied_met(
    target_calories: f64,
    weight_kg: f64,
    duration_minutes: f64,
    config: &ActivityCalorieConfig,
) -> f64 {
    let weight = weight_kg.max(config.min_weight_kg);
    let hours = (duration_minutes / MINUTES_PER_HOUR).max(config.min_duration_hours);
    let met = target_calories / (weight * hours);

    let met = if met.is_finite() {
        met
    } else {
        config.default_met
    };
    met.max(config.min_met)
}

/// Calories for a step count when no MET-based walking entry exists
#[must_use]
pub fn step_calories(steps: u32, config: &ActivityCalorieConfig) -> f64 {
    f64::from(steps) * config.step_calorie_factor
}

/// Exercise from the library catalog
///
/// Entries carry an explicit MET, a calories-per-minute figure, or neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLibraryEntry {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: LocalizedText,
    /// Metabolic equivalent, if the catalog lists one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub met: Option<f64>,
    /// Calories per minute, if the catalog lists one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_per_minute: Option<f64>,
}

impl ExerciseLibraryEntry {
    /// Resolve the MET to use for a person of `weight_kg`
    ///
    /// Order: the explicit MET, then the MET implied by calories-per-minute for
    /// this weight, then the configured default.
    #[must_use]
    pub fn resolve_met(&self, weight_kg: f64, config: &ActivityCalorieConfig) -> f64 {
        if let Some(met) = self.met.filter(|met| met.is_finite() && *met > 0.0) {
            return met.max(config.min_met);
        }
        if let Some(per_minute) = self
            .calories_per_minute
            .filter(|cpm| cpm.is_finite() && *cpm > 0.0)
        {
            return implied_met(per_minute * MINUTES_PER_HOUR, weight_kg, MINUTES_PER_HOUR, config);
        }
        config.default_met
    }
}

/// What the user supplied for a workout's intensity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ExerciseEffort {
    /// A MET value, from the library or entered directly
    Met(f64),
    /// A calorie count the user typed or overrode
    TargetCalories(f64),
}

/// Consistent MET and calorie pair ready to store
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEstimate {
    /// Stored MET, finite and at least the MET floor
    pub met: f64,
    /// Calories shown to the user
    pub calories_burned: u32,
    /// Duration (minutes)
    pub duration_minutes: f64,
}

impl ExerciseEstimate {
    /// Build the log entry to persist for `date`
    #[must_use]
    pub fn into_log(self, date: NaiveDate, name: Option<LocalizedText>) -> ExerciseLog {
        ExerciseLog {
            date,
            name,
            duration_minutes: self.duration_minutes,
            met: self.met,
            calories_burned: f64::from(self.calories_burned),
        }
    }
}

/// Produce a `(met, calories)` pair from whichever effort figure the user gave
///
/// A MET input is sanitised (non-positive or non-finite becomes the default) and
/// drives the calorie estimate. A calorie input is kept as entered and the stored
/// MET is derived from it.
#[must_use]
pub fn estimate_exercise(
    effort: ExerciseEffort,
    weight_kg: f64,
    duration_minutes: f64,
    config: &ActivityCalorieConfig,
) -> ExerciseEstimate {
    let duration_minutes = if duration_minutes.is_finite() {
        duration_minutes.max(0.0)
    } else {
        0.0
    };

    match effort {
        ExerciseEffort::Met(met) => {
            let met = if met.is_finite() && met > 0.0 {
                met.max(config.min_met)
            } else {
                config.default_met
            };
            ExerciseEstimate {
                met,
                calories_burned: calories_burned(met, weight_kg.max(0.0), duration_minutes),
                duration_minutes,
            }
        }
        ExerciseEffort::TargetCalories(calories) => ExerciseEstimate {
            met: implied_met(calories, weight_kg, duration_minutes, config),
            calories_burned: whole_calories(calories),
            duration_minutes,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_estimate_rounds_to_whole_calorie() {
        // 8 MET x 70 kg x 0.5 h = 280
        assert_eq!(calories_burned(8.0, 70.0, 30.0), 280);
        // 3.5 x 62 x 0.75 = 162.75
        assert_eq!(calories_burned(3.5, 62.0, 45.0), 163);
    }

    #[test]
    fn test_calorie_estimate_becomes_consistent_log() {
        let config = ActivityCalorieConfig::default();
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let log = estimate_exercise(ExerciseEffort::TargetCalories(280.0), 70.0, 30.0, &config)
            .into_log(date, Some(LocalizedText::plain("Rowing")));

        assert_eq!(log.date, date);
        assert_eq!(log.name, Some(LocalizedText::plain("Rowing")));
        assert!((log.calories_burned - 280.0).abs() < f64::EPSILON);
        assert!((log.met - 8.0).abs() < 1e-9);
        assert!((log.duration_minutes - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_implied_met_inverts_forward_estimate() {
        let config = ActivityCalorieConfig::default();
        let met = implied_met(280.0, 70.0, 30.0, &config);
        assert!((met - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_implied_met_floors_weight_and_duration() {
        let config = ActivityCalorieConfig::default();
        // weight floored to 1 kg, duration floored to 0.01 h
        let met = implied_met(1.0, 0.0, 0.0, &config);
        assert!((met - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_implied_met_non_finite_falls_back_to_default() {
        let config = ActivityCalorieConfig::default();
        assert!((implied_met(f64::NAN, 70.0, 30.0, &config) - 6.0).abs() < f64::EPSILON);
        assert!((implied_met(f64::INFINITY, 70.0, 30.0, &config) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_implied_met_clamped_to_floor() {
        let config = ActivityCalorieConfig::default();
        assert!((implied_met(0.0, 70.0, 30.0, &config) - 0.1).abs() < f64::EPSILON);
        assert!((implied_met(-50.0, 70.0, 30.0, &config) - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_step_calories_heuristic() {
        let config = ActivityCalorieConfig::default();
        assert!((step_calories(10_000, &config) - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_library_met_resolution_order() {
        let config = ActivityCalorieConfig::default();
        let mut entry = ExerciseLibraryEntry {
            id: "rowing".to_owned(),
            name: LocalizedText::plain("Rowing"),
            met: Some(7.0),
            calories_per_minute: Some(10.0),
        };
        assert!((entry.resolve_met(80.0, &config) - 7.0).abs() < f64::EPSILON);

        entry.met = None;
        // 10 kcal/min = 600 kcal/h over 80 kg
        assert!((entry.resolve_met(80.0, &config) - 7.5).abs() < 1e-9);

        entry.calories_per_minute = None;
        assert!((entry.resolve_met(80.0, &config) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_estimate_from_calories_keeps_pair_consistent() {
        let config = ActivityCalorieConfig::default();
        let estimate = estimate_exercise(ExerciseEffort::TargetCalories(350.0), 70.0, 60.0, &config);

        assert_eq!(estimate.calories_burned, 350);
        assert_eq!(
            calories_burned(estimate.met, 70.0, estimate.duration_minutes),
            350
        );
    }

    #[test]
    fn test_estimate_from_invalid_met_uses_default() {
        let config = ActivityCalorieConfig::default();
        let estimate = estimate_exercise(ExerciseEffort::Met(0.0), 50.0, 60.0, &config);

        assert!((estimate.met - 6.0).abs() < f64::EPSILON);
        assert_eq!(estimate.calories_burned, 300);
    }
}
