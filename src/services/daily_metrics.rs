// ABOUTME: Daily metrics service assembling snapshots from providers and running the engine
// ABOUTME: Gates on onboarding, persists new achievement unlocks and logs substituted defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

use crate::logging::MetricsLogger;
use crate::providers::memory::InMemoryStore;
use crate::providers::{AchievementStore, LogAggregator, ProfileReader};
use chrono::{DateTime, Days, NaiveDate, Utc};
use std::sync::Arc;
use std::time::Instant;
use tokio::task;
use tracing::{debug, instrument};
use vitalis_core::errors::{AppError, AppResult};
use vitalis_core::models::{DailyAggregate, UserId};
use vitalis_intelligence::{DailyReport, DailySnapshot, MetricsEngine, OnboardingStep};

/// Produces daily reports for users and records the unlocks they earn
#[derive(Clone)]
pub struct DailyMetricsService {
    engine: Arc<MetricsEngine>,
    profiles: Arc<dyn ProfileReader>,
    logs: Arc<dyn LogAggregator>,
    achievements: Arc<dyn AchievementStore>,
}

impl DailyMetricsService {
    /// Create a service over separate collaborator stores
    #[must_use]
    pub fn new(
        engine: Arc<MetricsEngine>,
        profiles: Arc<dyn ProfileReader>,
        logs: Arc<dyn LogAggregator>,
        achievements: Arc<dyn AchievementStore>,
    ) -> Self {
        Self {
            engine,
            profiles,
            logs,
            achievements,
        }
    }

    /// Create a service where one in-memory store plays every collaborator
    #[must_use]
    pub fn with_store(engine: Arc<MetricsEngine>, store: Arc<InMemoryStore>) -> Self {
        Self::new(engine, store.clone(), store.clone(), store)
    }

    /// The engine this service evaluates with
    #[must_use]
    pub fn engine(&self) -> &MetricsEngine {
        &self.engine
    }

    /// First onboarding step the user has not answered
    ///
    /// # Errors
    ///
    /// Returns an error if the profile store fails
    pub async fn onboarding_step(&self, user_id: UserId) -> AppResult<OnboardingStep> {
        let record = self.profiles.read_profile(user_id).await?;
        Ok(record.map_or(OnboardingStep::Welcome, |record| {
            OnboardingStep::resume_point(&record.profile)
        }))
    }

    /// Gather everything the engine needs for `user_id` on `date`
    ///
    /// History covers the configured window before `date`; days with nothing
    /// logged are simply absent.
    ///
    /// # Errors
    ///
    /// Returns `NotOnboarded` when age, weight or height is missing or not
    /// positive, `ResourceNotFound` when no profile exists, and any store error.
    pub async fn snapshot(
        &self,
        user_id: UserId,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> AppResult<DailySnapshot> {
        let record = self
            .profiles
            .read_profile(user_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("profile")
                    .with_user_id(user_id.as_uuid())
                    .with_resource_id(format!("profile:{user_id}"))
            })?;
        if !record.profile.is_onboarded() {
            return Err(AppError::not_onboarded(user_id.as_uuid())
                .with_resource_id(format!("profile:{user_id}")));
        }

        let window = u64::from(self.engine.config().achievements.history_window_days);
        let from = date
            .checked_sub_days(Days::new(window.saturating_sub(1)))
            .unwrap_or(NaiveDate::MIN);
        let history = match date.pred_opt() {
            Some(yesterday) if from <= yesterday => {
                self.logs.daily_range(user_id, from, yesterday).await?
            }
            _ => Vec::new(),
        };

        let today = self
            .logs
            .daily_aggregate(user_id, date)
            .await?
            .unwrap_or_else(|| DailyAggregate::empty(date));

        Ok(DailySnapshot {
            user_id,
            profile: record.profile,
            today,
            history,
            unlocked: self.achievements.unlocked(user_id).await?,
            lifetime_workouts: self.logs.lifetime_workouts(user_id, date).await?,
            step_goal: record.step_goal,
            water_goal_ml: record.water_goal_ml,
            cycle: record.cycle,
            now,
        })
    }

    /// Compute the report for `user_id` on `date` and persist any new unlocks
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::snapshot`] and any achievement store error
    #[instrument(skip(self), fields(user.id = %user_id))]
    pub async fn daily_report(
        &self,
        user_id: UserId,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> AppResult<DailyReport> {
        let started = Instant::now();
        let snapshot = self.snapshot(user_id, date, now).await?;
        let report = self.engine.daily_report(&snapshot);

        self.persist(&report).await?;
        MetricsLogger::log_report(
            user_id,
            report.vitality.value(),
            report.achievements.unlocks.len(),
            started.elapsed().as_millis() as u64,
        );
        Ok(report)
    }

    /// Reports for many users on one date
    ///
    /// Snapshots are gathered first, then evaluated in parallel on a blocking
    /// thread so the async runtime is never stalled by the rayon batch. Reports
    /// come back in the order of `user_ids`.
    ///
    /// # Errors
    ///
    /// Fails on the first user whose snapshot cannot be built, or if the batch
    /// task panics
    pub async fn daily_reports(
        &self,
        user_ids: &[UserId],
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<DailyReport>> {
        let mut snapshots = Vec::with_capacity(user_ids.len());
        for user_id in user_ids {
            snapshots.push(self.snapshot(*user_id, date, now).await?);
        }

        let engine = Arc::clone(&self.engine);
        let reports = task::spawn_blocking(move || engine.evaluate_batch(&snapshots))
            .await
            .map_err(|e| AppError::internal(format!("Batch evaluation failed: {e}")))?;

        for report in &reports {
            self.persist(report).await?;
        }
        debug!(users = reports.len(), "Batch of daily reports computed");
        Ok(reports)
    }

    async fn persist(&self, report: &DailyReport) -> AppResult<()> {
        MetricsLogger::log_defaults_applied(report.user_id, &report.energy.defaults_applied);

        if report.achievements.unlocks.is_empty() {
            return Ok(());
        }
        self.achievements
            .record_unlocks(report.user_id, &report.achievements.unlocks)
            .await?;
        for event in &report.achievements.unlocks {
            MetricsLogger::log_unlock(report.user_id, event);
        }
        Ok(())
    }
}
