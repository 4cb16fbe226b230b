// ABOUTME: Activity calorie estimator configuration
// ABOUTME: Default MET, MET floor, reverse-derivation floors and the step calorie heuristic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

use serde::{Deserialize, Serialize};

/// Activity calorie estimator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityCalorieConfig {
    /// MET used when a library entry carries neither MET nor calories-per-minute
    pub default_met: f64,
    /// Smallest MET ever stored
    pub min_met: f64,
    /// Weight floor (kg) for reverse MET derivation
    pub min_weight_kg: f64,
    /// Duration floor (hours) for reverse MET derivation
    pub min_duration_hours: f64,
    /// Calories per step when no MET-based step entry exists
    pub step_calorie_factor: f64,
}

impl Default for ActivityCalorieConfig {
    fn default() -> Self {
        Self {
            default_met: 6.0,
            min_met: 0.1,
            min_weight_kg: 1.0,
            min_duration_hours: 0.01,
            step_calorie_factor: 0.04,
        }
    }
}
