// ABOUTME: Value models consumed by the metrics engine
// ABOUTME: Re-exports profile, daily aggregate, raw log, localized text and achievement types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

//! Value models
//!
//! Every type here is a plain snapshot. The engine never holds references across
//! calls; callers build fresh values from store reads for each evaluation.

/// Achievement state and unlock events
pub mod achievement;
/// Per-day totals
pub mod daily;
/// Localized display text
pub mod localized;
/// Raw log entries
pub mod logs;
/// Biometric profile and unit preferences
pub mod profile;
/// User identifier
pub mod user;

pub use achievement::{AchievementState, UnlockEvent};
pub use daily::DailyAggregate;
pub use localized::{LocalizedText, FALLBACK_LOCALE};
pub use logs::{ExerciseLog, LogEntry, MealLog, MoodLog, StepLog, WaterLog};
pub use profile::{
    ActivityLevel, BiometricProfile, FitnessGoal, HeightUnit, NutritionApproach, Sex,
    UnitPreference, VolumeUnit, WeightUnit,
};
pub use user::UserId;
