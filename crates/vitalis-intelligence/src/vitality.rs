// ABOUTME: Composite daily vitality score blending steps, mood and fuel adherence
// ABOUTME: Returns a 0-100 score with its breakdown, or NoData when nothing was logged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

//! Composite Vitality Score
//!
//! `score = round(steps x 0.4 + mood x 0.3 + fuel x 0.3)` where each sub-score is
//! on a 0-100 scale and fuel averages calorie and water adherence. The weights are
//! a fixed product decision and are not configurable per user.

use crate::config::VitalityConfig;
use serde::{Deserialize, Serialize};
use vitalis_core::constants::daily_goals::MAX_MOOD_RATING;
use vitalis_core::models::DailyAggregate;

/// Weight of the steps sub-score
pub const STEPS_WEIGHT: f64 = 0.4;
/// Weight of the mood sub-score
pub const MOOD_WEIGHT: f64 = 0.3;
/// Weight of the fuel sub-score
pub const FUEL_WEIGHT: f64 = 0.3;

/// Inputs for one day's score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalityInputs {
    /// Steps walked today
    pub steps: u32,
    /// Step goal; zero is treated as one
    pub step_goal: u32,
    /// Mood rating 1-5; `None` or `Some(0)` means nothing was logged
    pub mood_rating: Option<u8>,
    /// Calories eaten today
    pub calories_eaten: f64,
    /// Calorie target; zero is treated as one
    pub calorie_goal: f64,
    /// Water drunk today (ml)
    pub water_volume_ml: f64,
    /// Water goal (ml); zero is treated as one
    pub water_goal_ml: f64,
}

impl VitalityInputs {
    /// Build inputs from a daily aggregate, the user's calorie target and the configured goals
    #[must_use]
    pub fn from_aggregate(
        aggregate: &DailyAggregate,
        calorie_goal: f64,
        config: &VitalityConfig,
    ) -> Self {
        Self {
            steps: aggregate.steps,
            step_goal: config.default_step_goal,
            mood_rating: aggregate.logged_mood(),
            calories_eaten: aggregate.calories_eaten,
            calorie_goal,
            water_volume_ml: aggregate.water_volume_ml,
            water_goal_ml: config.default_water_goal_ml,
        }
    }

    fn logged_mood(&self) -> Option<u8> {
        self.mood_rating.filter(|rating| *rating > 0)
    }
}

/// Sub-scores behind a vitality score, each 0-100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalityBreakdown {
    /// Step goal adherence
    pub steps_score: f64,
    /// Mood rating scaled to 100
    pub mood_score: f64,
    /// Average of calorie and water adherence
    pub fuel_score: f64,
    /// Calorie goal adherence, capped at 100
    pub calorie_score: f64,
    /// Water goal adherence, capped at 100
    pub water_score: f64,
}

/// Result of scoring a day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VitalityScore {
    /// No steps, no calories and no mood were logged
    NoData,
    /// A real score
    Scored {
        /// Composite score 0-100
        score: u8,
        /// Sub-scores
        breakdown: VitalityBreakdown,
    },
}

impl VitalityScore {
    /// The numeric score, if there was data
    #[must_use]
    pub const fn value(&self) -> Option<u8> {
        match self {
            Self::NoData => None,
            Self::Scored { score, .. } => Some(*score),
        }
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Ratio of `actual` to `goal`, capped at 1
fn adherence(actual: f64, goal: f64) -> f64 {
    (non_negative(actual) / non_negative(goal).max(1.0)).min(1.0)
}

/// Score a day
///
/// Any one of steps, calories or mood is enough to produce a score; only when all
/// three are missing is [`VitalityScore::NoData`] returned.
#[must_use]
pub fn calculate_vitality(inputs: &VitalityInputs) -> VitalityScore {
    let mood = inputs.logged_mood();
    let calories = non_negative(inputs.calories_eaten);
    if inputs.steps == 0 && calories <= 0.0 && mood.is_none() {
        return VitalityScore::NoData;
    }

    let steps_score = adherence(f64::from(inputs.steps), f64::from(inputs.step_goal)) * 100.0;
    let mood_score = mood.map_or(0.0, |rating| {
        f64::from(rating.min(MAX_MOOD_RATING)) / f64::from(MAX_MOOD_RATING) * 100.0
    });
    let calorie_score = adherence(calories, inputs.calorie_goal) * 100.0;
    let water_score = adherence(inputs.water_volume_ml, inputs.water_goal_ml) * 100.0;
    let fuel_score = (calorie_score + water_score) / 2.0;

    let blended = FUEL_WEIGHT.mul_add(
        fuel_score,
        STEPS_WEIGHT.mul_add(steps_score, MOOD_WEIGHT * mood_score),
    );

    VitalityScore::Scored {
        score: blended.round().clamp(0.0, 100.0) as u8,
        breakdown: VitalityBreakdown {
            steps_score,
            mood_score,
            fuel_score,
            calorie_score,
            water_score,
        },
    }
}
