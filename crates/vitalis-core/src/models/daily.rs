// ABOUTME: Per-day totals produced by summing raw log entries for one date
// ABOUTME: DailyAggregate is the opaque input the engine consumes for scores and achievements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Totals for a single calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    /// Calendar date (serialized as ISO `YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Calories eaten (kcal)
    #[serde(default)]
    pub calories_eaten: f64,
    /// Calories burned by logged exercise (kcal)
    #[serde(default)]
    pub calories_burned_exercise: f64,
    /// Calories burned by walking (kcal)
    #[serde(default)]
    pub calories_burned_steps: f64,
    /// Step count
    #[serde(default)]
    pub steps: u32,
    /// Water drunk (ml)
    #[serde(default)]
    pub water_volume_ml: f64,
    /// Mood rating 1-5, absent when nothing was logged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_rating: Option<u8>,
    /// Minutes of logged exercise
    #[serde(default)]
    pub minutes_exercised: f64,
    /// Number of logged workouts
    #[serde(default)]
    pub workout_count: u32,
    /// Number of logged meals
    #[serde(default)]
    pub meals_logged: u32,
}

impl DailyAggregate {
    /// An aggregate with nothing logged
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            calories_eaten: 0.0,
            calories_burned_exercise: 0.0,
            calories_burned_steps: 0.0,
            steps: 0,
            water_volume_ml: 0.0,
            mood_rating: None,
            minutes_exercised: 0.0,
            workout_count: 0,
            meals_logged: 0,
        }
    }

    /// Mood rating when one was logged; a stored `0` counts as absent
    #[must_use]
    pub fn logged_mood(&self) -> Option<u8> {
        self.mood_rating.filter(|rating| *rating > 0)
    }

    /// At least one workout was logged
    #[must_use]
    pub const fn has_workout(&self) -> bool {
        self.workout_count > 0
    }

    /// Anything at all was logged on this day
    #[must_use]
    pub fn has_any_log(&self) -> bool {
        self.meals_logged > 0
            || self.workout_count > 0
            || self.steps > 0
            || self.water_volume_ml > 0.0
            || self.logged_mood().is_some()
    }

    /// Exercise plus step calories
    #[must_use]
    pub fn total_calories_burned(&self) -> f64 {
        self.calories_burned_exercise + self.calories_burned_steps
    }

    /// Calories eaten minus calories burned by activity
    #[must_use]
    pub fn net_calories(&self) -> f64 {
        self.calories_eaten - self.total_calories_burned()
    }
}
