// ABOUTME: Achievement catalog, built-in criteria and the unlock/progress evaluator
// ABOUTME: Proposes idempotent unlock events and 0-100 progress for still-locked achievements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

//! Achievement Evaluator
//!
//! The catalog is immutable configuration. Evaluation reads the user's unlocked
//! set and a stats bundle, and returns unlock events for newly satisfied
//! achievements plus display progress for the rest. It never revokes anything:
//! an id already in the unlocked set is skipped entirely.
//!
//! Streak criteria look at a contiguous run of dates ending today. Their progress
//! is always reported as 0.

use crate::config::ConfigError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt::Debug;
use std::sync::Arc;
use vitalis_core::constants::daily_goals;
use vitalis_core::models::{AchievementState, DailyAggregate, LocalizedText, UnlockEvent};

/// Aggregated stats an achievement is judged against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementStats {
    /// Evaluation day
    pub today: NaiveDate,
    /// Recent daily aggregates, including today when anything was logged
    pub history: Vec<DailyAggregate>,
    /// Workouts logged over the account lifetime, when the store tracks it
    #[serde(default)]
    pub lifetime_workouts: u32,
    /// The user's daily calorie target, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_calorie_target: Option<f64>,
    /// Daily step goal
    pub step_goal: u32,
    /// Daily water goal (ml)
    pub water_goal_ml: f64,
}

impl AchievementStats {
    /// Stats with default goals and no calorie target
    #[must_use]
    pub fn new(today: NaiveDate, history: Vec<DailyAggregate>) -> Self {
        Self {
            today,
            history,
            lifetime_workouts: 0,
            daily_calorie_target: None,
            step_goal: daily_goals::STEP_GOAL,
            water_goal_ml: daily_goals::WATER_GOAL_ML,
        }
    }

    /// Set the daily calorie target
    #[must_use]
    pub fn with_calorie_target(mut self, target: f64) -> Self {
        self.daily_calorie_target = Some(target);
        self
    }

    /// Set the daily step and water goals
    #[must_use]
    pub fn with_goals(mut self, step_goal: u32, water_goal_ml: f64) -> Self {
        self.step_goal = step_goal;
        self.water_goal_ml = water_goal_ml;
        self
    }

    /// Set the lifetime workout count
    #[must_use]
    pub fn with_lifetime_workouts(mut self, count: u32) -> Self {
        self.lifetime_workouts = count;
        self
    }

    /// History keyed by date; a later duplicate replaces an earlier one
    fn by_date(&self) -> BTreeMap<NaiveDate, &DailyAggregate> {
        self.history.iter().map(|day| (day.date, day)).collect()
    }

    /// Today's aggregate, if anything was logged
    #[must_use]
    pub fn today_aggregate(&self) -> Option<&DailyAggregate> {
        self.history.iter().rev().find(|day| day.date == self.today)
    }

    /// Workouts logged, taking the larger of the lifetime count and the history sum
    #[must_use]
    pub fn total_workouts(&self) -> u32 {
        let in_history = self
            .by_date()
            .values()
            .map(|day| day.workout_count)
            .fold(0_u32, u32::saturating_add);
        self.lifetime_workouts.max(in_history)
    }

    /// Distinct days in the history satisfying `predicate`
    pub fn days_matching(&self, predicate: impl Fn(&DailyAggregate) -> bool) -> u32 {
        self.by_date()
            .values()
            .filter(|&&day| predicate(day))
            .count() as u32
    }

    /// Length of the unbroken run of days ending today that satisfy `predicate`
    ///
    /// A day missing from the history breaks the run.
    pub fn streak_ending_today(&self, predicate: impl Fn(&DailyAggregate) -> bool) -> u32 {
        let days = self.by_date();
        let mut streak = 0;
        let mut cursor = Some(self.today);
        while let Some(date) = cursor {
            match days.get(&date) {
                Some(&day) if predicate(day) => streak += 1,
                _ => break,
            }
            cursor = date.pred_opt();
        }
        streak
    }
}

/// Injected achievement predicate
pub trait AchievementRule: Debug + Send + Sync {
    /// Whether the stats earn the achievement
    fn is_satisfied(&self, stats: &AchievementStats) -> bool;

    /// Display progress 0-100 while locked
    fn progress(&self, _stats: &AchievementStats) -> f64 {
        0.0
    }
}

/// Condition under which an achievement unlocks
#[derive(Debug, Clone)]
pub enum AchievementCriterion {
    /// At least one workout ever
    FirstWorkout,
    /// At least `count` workouts
    WorkoutCount {
        /// Workouts required
        count: u32,
    },
    /// Today's steps reach the step goal
    StepGoalReached,
    /// Today's steps reach a fixed count
    StepsInDay {
        /// Steps required
        steps: u32,
    },
    /// Today's water reaches the water goal
    HydrationGoalReached,
    /// Mood logged on at least `days` days of the history
    MoodLoggedDays {
        /// Days required
        days: u32,
    },
    /// A workout on each of the last `days` days, ending today
    WorkoutStreak {
        /// Consecutive days required
        days: u32,
    },
    /// Something logged on each of the last `days` days, ending today
    LoggingStreak {
        /// Consecutive days required
        days: u32,
    },
    /// Today's calories within `tolerance_percent` of the calorie target
    CalorieTargetHit {
        /// Allowed deviation from the target, in percent
        tolerance_percent: f64,
    },
    /// Caller-supplied predicate
    Custom(Arc<dyn AchievementRule>),
}

/// Capped ratio as a percentage
fn percent_of(actual: f64, required: f64) -> f64 {
    if required <= 0.0 {
        return 100.0;
    }
    (actual / required * 100.0).clamp(0.0, 100.0)
}

impl AchievementCriterion {
    /// Whether `stats` satisfies this criterion
    #[must_use]
    pub fn is_satisfied(&self, stats: &AchievementStats) -> bool {
        let today = stats.today_aggregate();
        match self {
            Self::FirstWorkout => stats.total_workouts() >= 1,
            Self::WorkoutCount { count } => stats.total_workouts() >= *count,
            Self::StepGoalReached => {
                today.is_some_and(|day| day.steps >= stats.step_goal.max(1))
            }
            Self::StepsInDay { steps } => today.is_some_and(|day| day.steps >= *steps),
            Self::HydrationGoalReached => {
                today.is_some_and(|day| day.water_volume_ml >= stats.water_goal_ml.max(1.0))
            }
            Self::MoodLoggedDays { days } => {
                stats.days_matching(|day| day.logged_mood().is_some()) >= *days
            }
            Self::WorkoutStreak { days } => {
                stats.streak_ending_today(DailyAggregate::has_workout) >= *days
            }
            Self::LoggingStreak { days } => {
                stats.streak_ending_today(DailyAggregate::has_any_log) >= *days
            }
            Self::CalorieTargetHit { tolerance_percent } => {
                match (today, stats.daily_calorie_target) {
                    (Some(day), Some(target)) if target > 0.0 && day.calories_eaten > 0.0 => {
                        let deviation = (day.calories_eaten - target).abs() / target * 100.0;
                        deviation <= *tolerance_percent
                    }
                    _ => false,
                }
            }
            Self::Custom(rule) => rule.is_satisfied(stats),
        }
    }

    /// Display progress 0-100; streak criteria always report 0
    #[must_use]
    pub fn progress(&self, stats: &AchievementStats) -> u8 {
        let today = stats.today_aggregate();
        let percent = match self {
            Self::FirstWorkout => percent_of(f64::from(stats.total_workouts()), 1.0),
            Self::WorkoutCount { count } => {
                percent_of(f64::from(stats.total_workouts()), f64::from(*count))
            }
            Self::StepGoalReached => percent_of(
                f64::from(today.map_or(0, |day| day.steps)),
                f64::from(stats.step_goal.max(1)),
            ),
            Self::StepsInDay { steps } => percent_of(
                f64::from(today.map_or(0, |day| day.steps)),
                f64::from(*steps),
            ),
            Self::HydrationGoalReached => percent_of(
                today.map_or(0.0, |day| day.water_volume_ml),
                stats.water_goal_ml.max(1.0),
            ),
            Self::MoodLoggedDays { days } => percent_of(
                f64::from(stats.days_matching(|day| day.logged_mood().is_some())),
                f64::from(*days),
            ),
            Self::WorkoutStreak { .. } | Self::LoggingStreak { .. } => 0.0,
            Self::CalorieTargetHit { .. } => match (today, stats.daily_calorie_target) {
                (Some(day), Some(target)) => percent_of(day.calories_eaten, target),
                _ => 0.0,
            },
            Self::Custom(rule) => rule.progress(stats),
        };

        if percent.is_finite() {
            percent.clamp(0.0, 100.0).round() as u8
        } else {
            0
        }
    }
}

/// One catalog entry
#[derive(Debug, Clone)]
pub struct AchievementDefinition {
    /// Unique id
    pub id: String,
    /// Display name
    pub name: LocalizedText,
    /// Unlock condition
    pub criterion: AchievementCriterion,
}

impl AchievementDefinition {
    /// Create a definition
    pub fn new(
        id: impl Into<String>,
        name: impl Into<LocalizedText>,
        criterion: AchievementCriterion,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            criterion,
        }
    }
}

/// Immutable list of achievements with unique ids
#[derive(Debug, Clone, Default)]
pub struct AchievementCatalog {
    definitions: Vec<AchievementDefinition>,
}

impl AchievementCatalog {
    /// Build a catalog, rejecting duplicate ids
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateAchievement` naming the first repeated id
    pub fn new(definitions: Vec<AchievementDefinition>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for definition in &definitions {
            if !seen.insert(definition.id.as_str()) {
                return Err(ConfigError::DuplicateAchievement(definition.id.clone()));
            }
        }
        Ok(Self { definitions })
    }

    /// Definitions in catalog order
    #[must_use]
    pub fn definitions(&self) -> &[AchievementDefinition] {
        &self.definitions
    }

    /// Look up a definition by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AchievementDefinition> {
        self.definitions.iter().find(|definition| definition.id == id)
    }

    /// Number of definitions
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True for an empty catalog
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// The built-in achievement catalog
#[must_use]
pub fn default_catalog() -> AchievementCatalog {
    use AchievementCriterion::{
        CalorieTargetHit, FirstWorkout, HydrationGoalReached, LoggingStreak, MoodLoggedDays,
        StepGoalReached, StepsInDay, WorkoutCount, WorkoutStreak,
    };

    let localized = |en: &str, fr: &str, es: &str| {
        LocalizedText::Localized(BTreeMap::from([
            ("en".to_owned(), en.to_owned()),
            ("es".to_owned(), es.to_owned()),
            ("fr".to_owned(), fr.to_owned()),
        ]))
    };

    AchievementCatalog {
        definitions: vec![
            AchievementDefinition::new(
                "first_workout",
                localized("First Workout", "Premier entraînement", "Primer entrenamiento"),
                FirstWorkout,
            ),
            AchievementDefinition::new("workouts_10", "10 Workouts", WorkoutCount { count: 10 }),
            AchievementDefinition::new("workouts_50", "50 Workouts", WorkoutCount { count: 50 }),
            AchievementDefinition::new(
                "step_goal",
                localized("Step Goal Reached", "Objectif de pas atteint", "Meta de pasos"),
                StepGoalReached,
            ),
            AchievementDefinition::new("steps_20k", "20,000 Steps", StepsInDay { steps: 20_000 }),
            AchievementDefinition::new(
                "hydration_goal",
                localized("Fully Hydrated", "Bien hydraté", "Bien hidratado"),
                HydrationGoalReached,
            ),
            AchievementDefinition::new(
                "mood_week",
                "Mood Tracker",
                MoodLoggedDays { days: 7 },
            ),
            AchievementDefinition::new(
                "workout_streak_3",
                "3-Day Workout Streak",
                WorkoutStreak { days: 3 },
            ),
            AchievementDefinition::new(
                "workout_streak_7",
                "7-Day Workout Streak",
                WorkoutStreak { days: 7 },
            ),
            AchievementDefinition::new(
                "logging_streak_7",
                "Week of Logging",
                LoggingStreak { days: 7 },
            ),
            AchievementDefinition::new(
                "calorie_target",
                "On Target",
                CalorieTargetHit {
                    tolerance_percent: 10.0,
                },
            ),
        ],
    }
}

/// Display progress for a locked achievement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementProgress {
    /// Catalog id
    pub achievement_id: String,
    /// Progress 0-100; reaching 100 does not unlock anything
    pub progress: u8,
}

/// Outcome of evaluating a catalog for one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementEvaluation {
    /// Newly satisfied achievements, in catalog order
    pub unlocks: Vec<UnlockEvent>,
    /// Progress for achievements that remain locked
    pub progress: Vec<AchievementProgress>,
}

/// Evaluate every locked achievement in `catalog`
///
/// Ids already in `state` are skipped, so re-running with the same state never
/// emits the same unlock twice.
#[must_use]
pub fn evaluate_achievements(
    catalog: &AchievementCatalog,
    state: &AchievementState,
    stats: &AchievementStats,
    now: DateTime<Utc>,
) -> AchievementEvaluation {
    let mut evaluation = AchievementEvaluation::default();

    for definition in catalog
        .definitions()
        .iter()
        .filter(|definition| !state.is_unlocked(&definition.id))
    {
        if definition.criterion.is_satisfied(stats) {
            evaluation.unlocks.push(UnlockEvent {
                achievement_id: definition.id.clone(),
                unlocked_at: now,
            });
        } else {
            evaluation.progress.push(AchievementProgress {
                achievement_id: definition.id.clone(),
                progress: definition.criterion.progress(stats),
            });
        }
    }

    evaluation
}
