// ABOUTME: Daily report commands for vitalis-cli
// ABOUTME: Evaluates snapshot files directly or replays profile-and-log files through the service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

use crate::helpers::{display::print_json, input::read_json_file};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use vitalis::providers::memory::InMemoryStore;
use vitalis::providers::{AchievementStore, ProfileRecord};
use vitalis::services::daily_metrics::DailyMetricsService;
use vitalis_core::errors::AppResult;
use vitalis_core::models::{LogEntry, UnlockEvent, UserId};
use vitalis_intelligence::{DailySnapshot, MetricsEngine};

/// A snapshot file holds either one snapshot or a batch
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    One(Box<DailySnapshot>),
    Batch(Vec<DailySnapshot>),
}

/// Stored state for one user: profile, raw logs and ids already unlocked
#[derive(Deserialize)]
struct UserData {
    #[serde(default)]
    user_id: Option<UserId>,
    profile: ProfileRecord,
    #[serde(default)]
    logs: Vec<LogEntry>,
    #[serde(default)]
    unlocked: Vec<String>,
}

/// Evaluate a snapshot file; batches run in parallel and keep file order
pub fn report(engine: &MetricsEngine, path: &Path) -> AppResult<()> {
    match read_json_file(path)? {
        SnapshotFile::One(snapshot) => print_json(&engine.daily_report(&snapshot)),
        SnapshotFile::Batch(snapshots) => {
            info!(count = snapshots.len(), "Evaluating snapshot batch");
            print_json(&engine.evaluate_batch(&snapshots))
        }
    }
}

/// Load a user's data into a fresh store and compute the report for `date`
pub async fn daily(engine: MetricsEngine, path: &Path, date: Option<NaiveDate>) -> AppResult<()> {
    let data: UserData = read_json_file(path)?;
    let now = Utc::now();
    let date = date.unwrap_or_else(|| now.date_naive());
    let user_id = data.user_id.unwrap_or_default();

    let store = Arc::new(InMemoryStore::with_activity_config(
        engine.config().activity.clone(),
    ));
    store.put_profile(user_id, data.profile);
    store.append_logs(user_id, data.logs);
    let previously_unlocked: Vec<UnlockEvent> = data
        .unlocked
        .into_iter()
        .map(|achievement_id| UnlockEvent {
            achievement_id,
            unlocked_at: now,
        })
        .collect();
    store.record_unlocks(user_id, &previously_unlocked).await?;

    let service = DailyMetricsService::with_store(Arc::new(engine), store.clone());
    let report = service.daily_report(user_id, date, now).await?;

    print_json(&json!({
        "report": report,
        "onboarding_step": service.onboarding_step(user_id).await?,
        "unlocked": store.unlocked(user_id).await?,
    }))
}
