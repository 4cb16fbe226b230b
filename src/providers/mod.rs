// ABOUTME: Collaborator traits the daily metrics service reads from and writes to
// ABOUTME: ProfileReader, LogAggregator and AchievementStore, plus the stored ProfileRecord shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

//! Collaborator providers
//!
//! The engine never touches storage. These traits describe the three stores it
//! is fed from: profiles, logs (already reduced to daily aggregates) and the
//! append-only set of unlocked achievements.

/// Dashmap-backed store implementing every provider trait
pub mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use vitalis_core::errors::AppResult;
use vitalis_core::models::{
    AchievementState, BiometricProfile, DailyAggregate, UnitPreference, UnlockEvent, UserId,
};
use vitalis_intelligence::CycleTracking;

/// Everything stored about a user that the engine consumes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Biometrics, always metric
    pub profile: BiometricProfile,
    /// Display unit choices
    #[serde(default)]
    pub units: UnitPreference,
    /// Cycle or pregnancy tracking, when enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle: Option<CycleTracking>,
    /// User-set daily step goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_goal: Option<u32>,
    /// User-set daily water goal (ml)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_goal_ml: Option<f64>,
}

impl ProfileRecord {
    /// Record with metric units and no optional tracking
    #[must_use]
    pub fn new(profile: BiometricProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }
}

/// Reads the current profile for a user
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// Profile record, or `None` when the user has never saved one
    async fn read_profile(&self, user_id: UserId) -> AppResult<Option<ProfileRecord>>;
}

/// Reads logs reduced to per-day totals
#[async_trait]
pub trait LogAggregator: Send + Sync {
    /// Totals for one day, or `None` when nothing was logged
    async fn daily_aggregate(
        &self,
        user_id: UserId,
        date: NaiveDate,
    ) -> AppResult<Option<DailyAggregate>>;

    /// Totals for every logged day in `from..=to`, ascending
    async fn daily_range(
        &self,
        user_id: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<DailyAggregate>>;

    /// Workouts logged over the account lifetime up to and including `through`
    async fn lifetime_workouts(&self, user_id: UserId, through: NaiveDate) -> AppResult<u32>;
}

/// Append-only store of unlocked achievements
#[async_trait]
pub trait AchievementStore: Send + Sync {
    /// Ids the user has unlocked so far
    async fn unlocked(&self, user_id: UserId) -> AppResult<AchievementState>;

    /// Persist unlock events, returning how many were new
    ///
    /// Recording an id that is already present is a no-op.
    async fn record_unlocks(&self, user_id: UserId, events: &[UnlockEvent]) -> AppResult<usize>;
}
