// ABOUTME: Raw log entries as written by the app for meals, exercise, steps, water and mood
// ABOUTME: LogEntry tagged enum with one payload struct per log kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

use crate::models::LocalizedText;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealLog {
    /// Day the meal belongs to
    pub date: NaiveDate,
    /// Meal name from the recipe catalog or free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<LocalizedText>,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    #[serde(default)]
    pub protein_g: f64,
    /// Carbohydrates (grams)
    #[serde(default)]
    pub carbs_g: f64,
    /// Fat (grams)
    #[serde(default)]
    pub fat_g: f64,
}

/// A logged workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    /// Day the workout belongs to
    pub date: NaiveDate,
    /// Exercise name from the library or free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<LocalizedText>,
    /// Duration (minutes)
    pub duration_minutes: f64,
    /// Stored MET value, always kept consistent with `calories_burned`
    pub met: f64,
    /// Energy burned (kcal)
    pub calories_burned: f64,
}

/// A step count sync
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepLog {
    /// Day the steps belong to
    pub date: NaiveDate,
    /// Steps walked
    pub steps: u32,
    /// Calories reported by the device, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
}

/// A drink of water
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterLog {
    /// Day the drink belongs to
    pub date: NaiveDate,
    /// Volume (ml)
    pub volume_ml: f64,
}

/// A mood check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodLog {
    /// Day the check-in belongs to
    pub date: NaiveDate,
    /// When the check-in was recorded
    pub logged_at: DateTime<Utc>,
    /// Rating 1-5
    pub rating: u8,
}

/// Any raw log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogEntry {
    /// Meal log
    Meal(MealLog),
    /// Exercise log
    Exercise(ExerciseLog),
    /// Step log
    Steps(StepLog),
    /// Water log
    Water(WaterLog),
    /// Mood log
    Mood(MoodLog),
}

impl LogEntry {
    /// Day this entry counts towards
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        match self {
            Self::Meal(log) => log.date,
            Self::Exercise(log) => log.date,
            Self::Steps(log) => log.date,
            Self::Water(log) => log.date,
            Self::Mood(log) => log.date,
        }
    }
}
