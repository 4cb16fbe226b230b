// ABOUTME: Per-user achievement state and the unlock events the engine proposes
// ABOUTME: AchievementState is insert-only; applying an already-present unlock is a no-op
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Request to record that an achievement was earned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockEvent {
    /// Catalog id of the achievement
    pub achievement_id: String,
    /// Evaluation time that satisfied the achievement
    pub unlocked_at: DateTime<Utc>,
}

/// Set of achievement ids a user has unlocked
///
/// Unlocking is monotonic: ids are only ever inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AchievementState {
    unlocked: BTreeSet<String>,
}

impl AchievementState {
    /// Empty state for a user evaluated for the first time
    #[must_use]
    pub const fn new() -> Self {
        Self {
            unlocked: BTreeSet::new(),
        }
    }

    /// Whether `id` has been unlocked
    #[must_use]
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }

    /// Insert the ids carried by `events`, returning how many were new
    pub fn apply<'a>(&mut self, events: impl IntoIterator<Item = &'a UnlockEvent>) -> usize {
        events
            .into_iter()
            .filter(|event| self.unlocked.insert(event.achievement_id.clone()))
            .count()
    }

    /// Number of unlocked achievements
    #[must_use]
    pub fn len(&self) -> usize {
        self.unlocked.len()
    }

    /// True when nothing is unlocked yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unlocked.is_empty()
    }

    /// Unlocked ids in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.unlocked.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for AchievementState {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            unlocked: iter.into_iter().map(Into::into).collect(),
        }
    }
}
