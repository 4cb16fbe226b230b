// ABOUTME: In-memory implementation of the profile, log and achievement provider traits
// ABOUTME: Uses DashMap keyed by UserId and reduces raw log entries with the engine's aggregators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

use super::{AchievementStore, LogAggregator, ProfileReader, ProfileRecord};
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use std::sync::Arc;
use vitalis_core::errors::AppResult;
use vitalis_core::models::{AchievementState, DailyAggregate, LogEntry, UnlockEvent, UserId};
use vitalis_intelligence::aggregation::{aggregate_by_date, aggregate_day};
use vitalis_intelligence::config::ActivityCalorieConfig;

/// Unlocked ids plus the events that recorded them, oldest first
#[derive(Debug, Clone, Default)]
struct UnlockLedger {
    state: AchievementState,
    events: Vec<UnlockEvent>,
}

/// Process-local store for tests, the CLI and single-node deployments
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    profiles: Arc<DashMap<UserId, ProfileRecord>>,
    logs: Arc<DashMap<UserId, Vec<LogEntry>>>,
    unlocks: Arc<DashMap<UserId, UnlockLedger>>,
    activity: ActivityCalorieConfig,
}

impl InMemoryStore {
    /// Empty store using the default step calorie heuristic
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store reducing step logs with `activity`
    #[must_use]
    pub fn with_activity_config(activity: ActivityCalorieConfig) -> Self {
        Self {
            activity,
            ..Self::default()
        }
    }

    /// Insert or replace a user's profile
    pub fn put_profile(&self, user_id: UserId, record: ProfileRecord) {
        self.profiles.insert(user_id, record);
    }

    /// Append one raw log entry
    pub fn append_log(&self, user_id: UserId, entry: LogEntry) {
        self.logs.entry(user_id).or_default().push(entry);
    }

    /// Append many raw log entries
    pub fn append_logs(&self, user_id: UserId, entries: impl IntoIterator<Item = LogEntry>) {
        self.logs.entry(user_id).or_default().extend(entries);
    }

    /// Every unlock event recorded for a user, oldest first
    #[must_use]
    pub fn unlock_history(&self, user_id: UserId) -> Vec<UnlockEvent> {
        self.unlocks
            .get(&user_id)
            .map(|ledger| ledger.events.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ProfileReader for InMemoryStore {
    async fn read_profile(&self, user_id: UserId) -> AppResult<Option<ProfileRecord>> {
        Ok(self.profiles.get(&user_id).map(|record| record.value().clone()))
    }
}

#[async_trait]
impl LogAggregator for InMemoryStore {
    async fn daily_aggregate(
        &self,
        user_id: UserId,
        date: NaiveDate,
    ) -> AppResult<Option<DailyAggregate>> {
        Ok(self.logs.get(&user_id).and_then(|entries| {
            entries
                .iter()
                .any(|entry| entry.date() == date)
                .then(|| aggregate_day(date, &entries, &self.activity))
        }))
    }

    async fn daily_range(
        &self,
        user_id: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<DailyAggregate>> {
        let Some(entries) = self.logs.get(&user_id) else {
            return Ok(Vec::new());
        };
        let in_range: Vec<LogEntry> = entries
            .iter()
            .filter(|entry| (from..=to).contains(&entry.date()))
            .cloned()
            .collect();
        drop(entries);

        Ok(aggregate_by_date(&in_range, &self.activity))
    }

    async fn lifetime_workouts(&self, user_id: UserId, through: NaiveDate) -> AppResult<u32> {
        Ok(self.logs.get(&user_id).map_or(0, |entries| {
            let count = entries
                .iter()
                .filter(|entry| matches!(entry, LogEntry::Exercise(_)) && entry.date() <= through)
                .count();
            u32::try_from(count).unwrap_or(u32::MAX)
        }))
    }
}

#[async_trait]
impl AchievementStore for InMemoryStore {
    async fn unlocked(&self, user_id: UserId) -> AppResult<AchievementState> {
        Ok(self
            .unlocks
            .get(&user_id)
            .map(|ledger| ledger.state.clone())
            .unwrap_or_default())
    }

    async fn record_unlocks(&self, user_id: UserId, events: &[UnlockEvent]) -> AppResult<usize> {
        let mut ledger = self.unlocks.entry(user_id).or_default();
        let mut added = 0;
        for event in events {
            if ledger.state.apply([event]) > 0 {
                ledger.events.push(event.clone());
                added += 1;
            }
        }
        Ok(added)
    }
}
