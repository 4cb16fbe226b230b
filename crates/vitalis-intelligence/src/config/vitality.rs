// ABOUTME: Vitality score configuration
// ABOUTME: Default daily goals used when the caller supplies none
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

use serde::{Deserialize, Serialize};
use vitalis_core::constants::daily_goals;

/// Vitality score configuration
///
/// Sub-score weights are fixed product constants and live in the scorer, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalityConfig {
    /// Step goal when the user has not set one
    pub default_step_goal: u32,
    /// Water goal (ml) when the user has not set one
    pub default_water_goal_ml: f64,
}

impl Default for VitalityConfig {
    fn default() -> Self {
        Self {
            default_step_goal: daily_goals::STEP_GOAL,
            default_water_goal_ml: daily_goals::WATER_GOAL_ML,
        }
    }
}
