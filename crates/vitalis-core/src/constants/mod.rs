// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the Vitalis metrics platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// Macronutrient energy density (kcal per gram)
pub mod energy_density {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrate: 4 kcal/g
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_G_FAT: f64 = 9.0;
    /// Approximate energy stored in one kilogram of body mass
    pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;
}

/// Macronutrient target bounds
pub mod macronutrients {
    /// Daily carbohydrate target never drops below this many grams
    pub const MIN_DAILY_CARBS_G: f64 = 50.0;
}

/// Profile fallbacks used when a biometric field is missing or non-positive
pub mod profile_defaults {
    /// Fallback body weight (kg)
    pub const WEIGHT_KG: f64 = 70.0;
    /// Fallback height (cm)
    pub const HEIGHT_CM: f64 = 170.0;
    /// Fallback age (years)
    pub const AGE_YEARS: u32 = 30;
    /// Youngest age the app accepts at onboarding
    pub const MIN_AGE_YEARS: u32 = 13;
}

/// Daily goal defaults
pub mod daily_goals {
    /// Default daily step goal
    pub const STEP_GOAL: u32 = 10_000;
    /// Default daily water goal (ml)
    pub const WATER_GOAL_ML: f64 = 2000.0;
    /// Mood ratings are logged on a 1-5 scale
    pub const MAX_MOOD_RATING: u8 = 5;
}
