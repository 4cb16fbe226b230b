// ABOUTME: Energy and macro configuration tables injected into the calculator
// ABOUTME: BMR coefficients, activity multipliers, goal adjustments, protein factors, fat fractions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

//! Energy & Macro Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use serde::{Deserialize, Serialize};
use vitalis_core::constants::{macronutrients, profile_defaults};
use vitalis_core::models::{ActivityLevel, FitnessGoal};

/// Energy & macro calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// TDEE multipliers per activity level
    pub activity_factors: ActivityFactorsConfig,
    /// Daily calorie adjustment per fitness goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Protein factors, fat fractions and the carb floor
    pub macronutrients: MacronutrientConfig,
    /// Values substituted for missing biometrics
    pub profile_defaults: ProfileDefaultsConfig,
}

/// Mifflin-St Jeor formula coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161), also used when sex is unknown
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Lightly active: 1.375
    pub lightly_active: f64,
    /// Moderately active: 1.55
    pub moderately_active: f64,
    /// Very active: 1.725
    pub very_active: f64,
    /// Extremely active: 1.9
    pub extremely_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for `level`
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtremelyActive => self.extremely_active,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extremely_active: 1.9,
        }
    }
}

/// Daily calorie adjustment (kcal) added to TDEE per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Lose weight: -500
    pub lose_weight_kcal: f64,
    /// Build muscle: +300
    pub build_muscle_kcal: f64,
    /// Maintain: 0
    pub maintain_kcal: f64,
    /// Improve endurance: 0
    pub improve_endurance_kcal: f64,
    /// General health: 0
    pub general_health_kcal: f64,
}

impl GoalAdjustmentConfig {
    /// Adjustment for `goal`
    #[must_use]
    pub const fn adjustment(&self, goal: FitnessGoal) -> f64 {
        match goal {
            FitnessGoal::LoseWeight => self.lose_weight_kcal,
            FitnessGoal::BuildMuscle => self.build_muscle_kcal,
            FitnessGoal::Maintain => self.maintain_kcal,
            FitnessGoal::ImproveEndurance => self.improve_endurance_kcal,
            FitnessGoal::GeneralHealth => self.general_health_kcal,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose_weight_kcal: -500.0,
            build_muscle_kcal: 300.0,
            maintain_kcal: 0.0,
            improve_endurance_kcal: 0.0,
            general_health_kcal: 0.0,
        }
    }
}

/// Macronutrient targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein (g/kg) for the high-protein approach: 2.5
    pub protein_high_protein_g_per_kg: f64,
    /// Protein (g/kg) when building muscle: 2.2
    pub protein_build_muscle_g_per_kg: f64,
    /// Protein (g/kg) when losing weight: 2.0
    pub protein_lose_weight_g_per_kg: f64,
    /// Protein (g/kg) otherwise: 1.6
    pub protein_default_g_per_kg: f64,
    /// Share of calories from fat on low carb: 0.4
    pub fat_fraction_low_carb: f64,
    /// Share of calories from fat otherwise: 0.3
    pub fat_fraction_default: f64,
    /// Carbohydrate target never drops below this (grams): 50
    pub carb_floor_g: f64,
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_high_protein_g_per_kg: 2.5,
            protein_build_muscle_g_per_kg: 2.2,
            protein_lose_weight_g_per_kg: 2.0,
            protein_default_g_per_kg: 1.6,
            fat_fraction_low_carb: 0.4,
            fat_fraction_default: 0.3,
            carb_floor_g: macronutrients::MIN_DAILY_CARBS_G,
        }
    }
}

/// Substitutes for missing or non-positive biometrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDefaultsConfig {
    /// Weight (kg): 70
    pub weight_kg: f64,
    /// Height (cm): 170
    pub height_cm: f64,
    /// Age (years): 30
    pub age_years: u32,
}

impl Default for ProfileDefaultsConfig {
    fn default() -> Self {
        Self {
            weight_kg: profile_defaults::WEIGHT_KG,
            height_cm: profile_defaults::HEIGHT_CM,
            age_years: profile_defaults::AGE_YEARS,
        }
    }
}
