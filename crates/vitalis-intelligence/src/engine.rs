// ABOUTME: MetricsEngine facade owning injected configuration and the achievement catalog
// ABOUTME: Produces a DailyReport per snapshot, sequentially or as a parallel batch with rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

//! Metrics Engine
//!
//! The engine holds no per-user state. Each call receives a fresh snapshot and
//! returns plain values; the caller persists whatever must be durable, including
//! the unlock events in [`DailyReport::achievements`].

use crate::achievements::{
    default_catalog, evaluate_achievements, AchievementCatalog, AchievementEvaluation,
    AchievementStats,
};
use crate::activity_calories::{
    estimate_exercise, implied_met, step_calories, ExerciseEffort, ExerciseEstimate,
};
use crate::aggregation::aggregate_by_date;
use crate::config::EngineConfig;
use crate::cycle::{calculate_phase, CyclePhaseInputs, CycleTracking, PhaseReport};
use crate::nutrition_calculator::{calculate_energy_targets, EnergyTargets};
use crate::vitality::{calculate_vitality, VitalityInputs, VitalityScore};
use chrono::{DateTime, NaiveDate, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use vitalis_core::models::{
    AchievementState, BiometricProfile, DailyAggregate, LogEntry, UserId,
};

/// Everything needed to derive one user's metrics for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySnapshot {
    /// Whose snapshot this is
    pub user_id: UserId,
    /// Current biometrics
    pub profile: BiometricProfile,
    /// Today's totals
    pub today: DailyAggregate,
    /// Earlier days inside the history window
    #[serde(default)]
    pub history: Vec<DailyAggregate>,
    /// Achievements unlocked so far
    #[serde(default)]
    pub unlocked: AchievementState,
    /// Workouts logged over the account lifetime
    #[serde(default)]
    pub lifetime_workouts: u32,
    /// User-set step goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_goal: Option<u32>,
    /// User-set water goal (ml)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_goal_ml: Option<f64>,
    /// Cycle or pregnancy tracking, when enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle: Option<CycleTracking>,
    /// Evaluation time
    pub now: DateTime<Utc>,
}

/// Derived metrics for one user and day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    /// Whose report this is
    pub user_id: UserId,
    /// Day the report covers
    pub date: NaiveDate,
    /// Energy and macro targets
    pub energy: EnergyTargets,
    /// Vitality score
    pub vitality: VitalityScore,
    /// Calories eaten minus calories burned by activity
    pub net_calories: f64,
    /// Cycle or pregnancy phase, when tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<PhaseReport>,
    /// Unlock events to persist and progress for locked achievements
    pub achievements: AchievementEvaluation,
}

/// Engine facade with injected configuration and catalog
#[derive(Debug, Clone)]
pub struct MetricsEngine {
    config: Arc<EngineConfig>,
    catalog: Arc<AchievementCatalog>,
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new(Arc::new(EngineConfig::default()), default_catalog())
    }
}

impl MetricsEngine {
    /// Create an engine over `config` and `catalog`
    #[must_use]
    pub fn new(config: Arc<EngineConfig>, catalog: AchievementCatalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }

    /// Injected configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Injected achievement catalog
    #[must_use]
    pub fn catalog(&self) -> &AchievementCatalog {
        &self.catalog
    }

    /// Energy and macro targets for `profile`
    #[must_use]
    pub fn energy_targets(&self, profile: &BiometricProfile) -> EnergyTargets {
        calculate_energy_targets(profile, &self.config.nutrition)
    }

    /// Consistent MET and calorie pair for a workout
    #[must_use]
    pub fn estimate_exercise(
        &self,
        effort: ExerciseEffort,
        weight_kg: f64,
        duration_minutes: f64,
    ) -> ExerciseEstimate {
        estimate_exercise(effort, weight_kg, duration_minutes, &self.config.activity)
    }

    /// MET implied by a calorie count
    #[must_use]
    pub fn implied_met(&self, target_calories: f64, weight_kg: f64, duration_minutes: f64) -> f64 {
        implied_met(
            target_calories,
            weight_kg,
            duration_minutes,
            &self.config.activity,
        )
    }

    /// Heuristic calories for a step count
    #[must_use]
    pub fn step_calories(&self, steps: u32) -> f64 {
        step_calories(steps, &self.config.activity)
    }

    /// Vitality score for a day
    #[must_use]
    pub fn vitality(&self, inputs: &VitalityInputs) -> VitalityScore {
        calculate_vitality(inputs)
    }

    /// Cycle or pregnancy phase
    #[must_use]
    pub fn phase(&self, inputs: &CyclePhaseInputs) -> PhaseReport {
        calculate_phase(inputs, &self.config.cycle, &self.config.pregnancy)
    }

    /// Unlock events and progress for the catalog
    #[must_use]
    pub fn evaluate_achievements(
        &self,
        state: &AchievementState,
        stats: &AchievementStats,
        now: DateTime<Utc>,
    ) -> AchievementEvaluation {
        evaluate_achievements(&self.catalog, state, stats, now)
    }

    /// Reduce raw logs into per-day aggregates
    #[must_use]
    pub fn aggregate(&self, entries: &[LogEntry]) -> Vec<DailyAggregate> {
        aggregate_by_date(entries, &self.config.activity)
    }

    /// Derive every daily metric for one snapshot
    #[must_use]
    pub fn daily_report(&self, snapshot: &DailySnapshot) -> DailyReport {
        let energy = self.energy_targets(&snapshot.profile);
        let step_goal = snapshot
            .step_goal
            .unwrap_or(self.config.vitality.default_step_goal);
        let water_goal_ml = snapshot
            .water_goal_ml
            .unwrap_or(self.config.vitality.default_water_goal_ml);

        let vitality = self.vitality(&VitalityInputs {
            step_goal,
            water_goal_ml,
            ..VitalityInputs::from_aggregate(
                &snapshot.today,
                f64::from(energy.daily_calories),
                &self.config.vitality,
            )
        });

        let phase = snapshot
            .cycle
            .map(|tracking| self.phase(&tracking.at(snapshot.now.timestamp_millis())));

        let mut history = snapshot.history.clone();
        history.push(snapshot.today.clone());
        let stats = AchievementStats::new(snapshot.today.date, history)
            .with_goals(step_goal, water_goal_ml)
            .with_calorie_target(f64::from(energy.daily_calories))
            .with_lifetime_workouts(snapshot.lifetime_workouts);
        let achievements = self.evaluate_achievements(&snapshot.unlocked, &stats, snapshot.now);

        DailyReport {
            user_id: snapshot.user_id,
            date: snapshot.today.date,
            net_calories: snapshot.today.net_calories(),
            energy,
            vitality,
            phase,
            achievements,
        }
    }

    /// Derive daily reports for many snapshots in parallel
    ///
    /// Reports come back in the same order as `snapshots`.
    #[must_use]
    pub fn evaluate_batch(&self, snapshots: &[DailySnapshot]) -> Vec<DailyReport> {
        snapshots
            .par_iter()
            .map(|snapshot| self.daily_report(snapshot))
            .collect()
    }
}
