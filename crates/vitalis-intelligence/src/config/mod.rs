// ABOUTME: Engine configuration tables injected into the metrics engine at construction
// ABOUTME: Orchestrates domain-specific configs and provides validation and env overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

//! Engine Configuration Module
//!
//! Every constant the calculators use lives in one of these tables so that the
//! engine receives its configuration by injection instead of reading globals.
//! `EngineConfig::default()` reproduces the product constants exactly.
//!
//! # Module Structure
//!
//! - `nutrition` - BMR, activity multipliers, goal adjustments, macros, profile defaults
//! - `activity` - MET defaults and floors, step calorie heuristic
//! - `vitality` - Default daily goals
//! - `cycle` - Cycle phase boundaries and pregnancy tables
//! - `error` - Validation errors

/// MET defaults and the step calorie heuristic
pub mod activity;
/// Cycle phase boundaries and pregnancy tables
pub mod cycle;
/// Configuration validation and parse errors
pub mod error;
/// BMR, activity multipliers, goal adjustments and macro factors
pub mod nutrition;
/// Default daily goals
pub mod vitality;

pub use activity::ActivityCalorieConfig;
pub use cycle::{CycleConfig, PregnancyConfig};
pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacronutrientConfig,
    NutritionConfig, ProfileDefaultsConfig,
};
pub use vitality::VitalityConfig;

use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use vitalis_core::constants::macronutrients::MIN_DAILY_CARBS_G;

/// Achievement evaluation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementConfig {
    /// Days of history supplied to achievement predicates
    pub history_window_days: u32,
}

impl Default for AchievementConfig {
    fn default() -> Self {
        Self {
            history_window_days: 30,
        }
    }
}

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Energy & macro calculator tables
    pub nutrition: NutritionConfig,
    /// Activity calorie estimator tables
    pub activity: ActivityCalorieConfig,
    /// Vitality score defaults
    pub vitality: VitalityConfig,
    /// Cycle phase model
    pub cycle: CycleConfig,
    /// Pregnancy progress model
    pub pregnancy: PregnancyConfig,
    /// Achievement evaluation settings
    pub achievements: AchievementConfig,
}

impl EngineConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first table that is inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.real_values().iter().any(|value| !value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "Configuration values must be finite numbers",
            ));
        }
        self.validate_nutrition()?;
        self.validate_activity()?;
        self.validate_cycle()?;

        if self.vitality.default_step_goal == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_step_goal must be at least 1",
            ));
        }
        if self.achievements.history_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "history_window_days must be at least 1",
            ));
        }

        Ok(())
    }

    /// Every floating-point setting, in table order
    fn real_values(&self) -> Vec<f64> {
        let nutr = &self.nutrition;
        let bmr = &nutr.bmr;
        let factors = &nutr.activity_factors;
        let goals = &nutr.goal_adjustments;
        let macros = &nutr.macronutrients;
        let activity = &self.activity;

        vec![
            bmr.msj_weight_coef,
            bmr.msj_height_coef,
            bmr.msj_age_coef,
            bmr.msj_male_constant,
            bmr.msj_female_constant,
            factors.sedentary,
            factors.lightly_active,
            factors.moderately_active,
            factors.very_active,
            factors.extremely_active,
            goals.lose_weight_kcal,
            goals.build_muscle_kcal,
            goals.maintain_kcal,
            goals.improve_endurance_kcal,
            goals.general_health_kcal,
            macros.protein_high_protein_g_per_kg,
            macros.protein_build_muscle_g_per_kg,
            macros.protein_lose_weight_g_per_kg,
            macros.protein_default_g_per_kg,
            macros.fat_fraction_low_carb,
            macros.fat_fraction_default,
            macros.carb_floor_g,
            nutr.profile_defaults.weight_kg,
            nutr.profile_defaults.height_cm,
            activity.default_met,
            activity.min_met,
            activity.min_weight_kg,
            activity.min_duration_hours,
            activity.step_calorie_factor,
            self.vitality.default_water_goal_ml,
        ]
    }

    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        if nutr.bmr.msj_weight_coef <= 0.0 || nutr.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &nutr.activity_factors;
        if factors.sedentary < 1.0 || factors.extremely_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.lightly_active
            || factors.lightly_active >= factors.moderately_active
            || factors.moderately_active >= factors.very_active
            || factors.very_active >= factors.extremely_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let macros = &nutr.macronutrients;
        let fractions = [macros.fat_fraction_default, macros.fat_fraction_low_carb];
        if fractions.iter().any(|f| !(0.0..1.0).contains(f)) {
            return Err(ConfigError::ValueOutOfRange(
                "Fat fractions must be between 0.0 and 1.0",
            ));
        }
        if macros.carb_floor_g < MIN_DAILY_CARBS_G {
            return Err(ConfigError::ValueOutOfRange(
                "carb_floor_g must be at least 50 grams",
            ));
        }

        let defaults = &nutr.profile_defaults;
        if defaults.weight_kg <= 0.0 || defaults.height_cm <= 0.0 || defaults.age_years == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Profile defaults must all be positive",
            ));
        }

        Ok(())
    }

    fn validate_activity(&self) -> Result<(), ConfigError> {
        let activity = &self.activity;

        if activity.min_met <= 0.0 || activity.default_met < activity.min_met {
            return Err(ConfigError::ValueOutOfRange(
                "MET values must be positive and default_met >= min_met",
            ));
        }
        if activity.min_weight_kg <= 0.0 || activity.min_duration_hours <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Reverse MET floors must be positive",
            ));
        }
        if activity.step_calorie_factor < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "step_calorie_factor must be >= 0",
            ));
        }

        Ok(())
    }

    fn validate_cycle(&self) -> Result<(), ConfigError> {
        let cycle = &self.cycle;
        if !(1 < cycle.follicular_start_day
            && cycle.follicular_start_day < cycle.ovulation_start_day
            && cycle.ovulation_start_day < cycle.luteal_start_day
            && cycle.luteal_start_day <= cycle.cycle_length_days)
        {
            return Err(ConfigError::InvalidRange(
                "Cycle phase boundaries must be ascending within the cycle length",
            ));
        }
        if cycle.fertile_window_start_day > cycle.fertile_window_end_day
            || cycle.fertile_window_end_day > cycle.cycle_length_days
        {
            return Err(ConfigError::InvalidRange(
                "Fertile window must lie inside the cycle",
            ));
        }

        let pregnancy = &self.pregnancy;
        if pregnancy.second_trimester_week >= pregnancy.third_trimester_week
            || pregnancy.third_trimester_week >= pregnancy.term_weeks
        {
            return Err(ConfigError::InvalidRange(
                "Trimester boundaries must be ascending and before term",
            ));
        }
        if pregnancy.baby_sizes.is_empty() {
            return Err(ConfigError::ValueOutOfRange(
                "baby_sizes table must not be empty",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    ///
    /// An unset variable leaves `target` untouched; a value that is not valid
    /// unicode is an error rather than silently ignored.
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(VarError::NotPresent) => Ok(()),
            Err(err @ VarError::NotUnicode(_)) => Err(ConfigError::EnvVar(err)),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("VITALIS_DEFAULT_MET", &mut self.activity.default_met)?;
        Self::apply_env_var(
            "VITALIS_STEP_CALORIE_FACTOR",
            &mut self.activity.step_calorie_factor,
        )?;
        Self::apply_env_var("VITALIS_STEP_GOAL", &mut self.vitality.default_step_goal)?;
        Self::apply_env_var(
            "VITALIS_CARB_FLOOR_G",
            &mut self.nutrition.macronutrients.carb_floor_g,
        )?;
        Self::apply_env_var(
            "VITALIS_HISTORY_WINDOW_DAYS",
            &mut self.achievements.history_window_days,
        )?;
        Ok(self)
    }
}
