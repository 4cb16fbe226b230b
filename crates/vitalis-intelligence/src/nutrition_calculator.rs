// ABOUTME: Energy and macronutrient targets using peer-reviewed formulas
// ABOUTME: BMR, TDEE, daily calorie target, protein/carb/fat grams, BMI and goal timeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

//! Energy & Macro Calculator
//!
//! Every function in this module is total. Missing or non-positive biometrics are
//! replaced by the configured profile defaults, unknown enum values by their
//! documented defaults, and [`EnergyTargets::defaults_applied`] lists every
//! substitution so the caller can warn the user.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use crate::config::{
    ActivityFactorsConfig, BmrConfig, MacronutrientConfig, NutritionConfig, ProfileDefaultsConfig,
};
use serde::{Deserialize, Serialize};
use vitalis_core::constants::energy_density::{
    KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN, KCAL_PER_KG_BODY_MASS,
};
use vitalis_core::constants::macronutrients::MIN_DAILY_CARBS_G;
use vitalis_core::constants::units::DAYS_PER_WEEK;
use vitalis_core::models::{ActivityLevel, BiometricProfile, FitnessGoal, NutritionApproach, Sex};

/// A profile field the calculator had to substitute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    /// Sex missing or unrecognised; female constant used
    Sex,
    /// Age missing or zero
    Age,
    /// Weight missing, non-finite or non-positive
    Weight,
    /// Height missing, non-finite or non-positive
    Height,
    /// Activity level missing or unrecognised; lightly active used
    ActivityLevel,
    /// Fitness goal missing or unrecognised; maintain used
    FitnessGoal,
    /// Nutrition approach missing or unrecognised; balanced used
    NutritionApproach,
}

/// Profile with every field present, plus the list of fields that were defaulted
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProfile {
    /// Biological sex
    pub sex: Sex,
    /// Age (years)
    pub age: u32,
    /// Weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Fitness goal
    pub fitness_goal: FitnessGoal,
    /// Nutrition approach
    pub nutrition_approach: NutritionApproach,
    /// Fields that were substituted, in declaration order
    pub defaults_applied: Vec<ProfileField>,
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Fill every missing field of `profile` with its documented default
#[must_use]
pub fn resolve_profile(
    profile: &BiometricProfile,
    defaults: &ProfileDefaultsConfig,
) -> ResolvedProfile {
    let mut applied = Vec::new();
    let mut or_default = |present: bool, field: ProfileField| {
        if !present {
            applied.push(field);
        }
    };

    or_default(profile.sex.is_some(), ProfileField::Sex);
    let age = profile.age.filter(|age| *age > 0);
    or_default(age.is_some(), ProfileField::Age);
    let weight_kg = positive(profile.weight_kg);
    or_default(weight_kg.is_some(), ProfileField::Weight);
    let height_cm = positive(profile.height_cm);
    or_default(height_cm.is_some(), ProfileField::Height);
    or_default(profile.activity_level.is_some(), ProfileField::ActivityLevel);
    or_default(profile.fitness_goal.is_some(), ProfileField::FitnessGoal);
    or_default(
        profile.nutrition_approach.is_some(),
        ProfileField::NutritionApproach,
    );

    ResolvedProfile {
        sex: profile.sex.unwrap_or(Sex::Female),
        age: age.unwrap_or(defaults.age_years),
        weight_kg: weight_kg.unwrap_or(defaults.weight_kg),
        height_cm: height_cm.unwrap_or(defaults.height_cm),
        activity_level: profile.activity_level.unwrap_or_default(),
        fitness_goal: profile.fitness_goal.unwrap_or_default(),
        nutrition_approach: profile.nutrition_approach.unwrap_or_default(),
        defaults_applied: applied,
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Women: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    config.msj_weight_coef.mul_add(
        weight_kg,
        config
            .msj_height_coef
            .mul_add(height_cm, config.msj_age_coef.mul_add(f64::from(age), sex_constant)),
    )
}

/// Calculate Total Daily Energy Expenditure from BMR and activity level
#[must_use]
pub fn calculate_tdee(bmr: f64, level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * config.factor(level)
}

/// Protein grams per kg of body weight
///
/// The nutrition approach is checked before the goal, so a high-protein
/// preference wins over any goal-based factor.
#[must_use]
pub fn protein_factor(
    approach: NutritionApproach,
    goal: FitnessGoal,
    config: &MacronutrientConfig,
) -> f64 {
    if approach == NutritionApproach::HighProtein {
        config.protein_high_protein_g_per_kg
    } else if goal == FitnessGoal::BuildMuscle {
        config.protein_build_muscle_g_per_kg
    } else if goal == FitnessGoal::LoseWeight {
        config.protein_lose_weight_g_per_kg
    } else {
        config.protein_default_g_per_kg
    }
}

/// Unrounded daily macronutrient targets (grams)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroGrams {
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g), never below the configured floor
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

/// Split a daily calorie budget into protein, fat and carbohydrate grams
///
/// Carbohydrates take whatever calories protein and fat leave over, but never
/// drop below `carb_floor_g` even when protein and fat already exceed the budget.
/// A configured floor under 50 g is raised to 50 g.
#[must_use]
pub fn calculate_macros(
    daily_calories: f64,
    weight_kg: f64,
    approach: NutritionApproach,
    goal: FitnessGoal,
    config: &MacronutrientConfig,
) -> MacroGrams {
    let budget = daily_calories.max(0.0);
    let protein_g = weight_kg * protein_factor(approach, goal, config);

    let fat_fraction = if approach == NutritionApproach::LowCarb {
        config.fat_fraction_low_carb
    } else {
        config.fat_fraction_default
    };
    let fat_g = budget * fat_fraction / KCAL_PER_G_FAT;

    let remaining = protein_g.mul_add(-KCAL_PER_G_PROTEIN, fat_g.mul_add(-KCAL_PER_G_FAT, budget));
    let floor_g = config.carb_floor_g.max(MIN_DAILY_CARBS_G);
    let carbs_g = (remaining / KCAL_PER_G_CARBS).max(floor_g);

    MacroGrams {
        protein_g,
        carbs_g,
        fat_g,
    }
}

/// Share of the daily calorie target supplied by each macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroPercentages {
    /// Protein as percentage of total calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of total calories
    pub carbs_percent: f64,
    /// Fat as percentage of total calories
    pub fat_percent: f64,
}

impl MacroPercentages {
    /// Percentages rounded to one decimal place; all zero for a zero budget
    ///
    /// They may sum past 100 when the carbohydrate floor applies.
    #[must_use]
    pub fn from_grams(macros: &MacroGrams, daily_calories: f64) -> Self {
        if daily_calories <= 0.0 {
            return Self {
                protein_percent: 0.0,
                carbs_percent: 0.0,
                fat_percent: 0.0,
            };
        }
        let percent = |grams: f64, kcal_per_g: f64| {
            (grams * kcal_per_g / daily_calories * 1000.0).round() / 10.0
        };
        Self {
            protein_percent: percent(macros.protein_g, KCAL_PER_G_PROTEIN),
            carbs_percent: percent(macros.carbs_g, KCAL_PER_G_CARBS),
            fat_percent: percent(macros.fat_g, KCAL_PER_G_FAT),
        }
    }
}

/// WHO adult BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 to below 25
    Normal,
    /// 25 to below 30
    Overweight,
    /// 30 and above
    Obese,
}

/// Body mass index with its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bmi {
    /// kg/m², one decimal place
    pub value: f64,
    /// Classification of `value`
    pub category: BmiCategory,
}

/// Body mass index from weight and height
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Bmi {
    let height_m = height_cm / 100.0;
    let raw = weight_kg / (height_m * height_m);
    let value = if raw.is_finite() { raw.max(0.0) } else { 0.0 };

    let category = if value < 18.5 {
        BmiCategory::Underweight
    } else if value < 25.0 {
        BmiCategory::Normal
    } else if value < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };

    Bmi {
        value: (value * 10.0).round() / 10.0,
        category,
    }
}

/// Projected time to reach the target weight at the goal's calorie adjustment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalTimeline {
    /// Expected weight change per week (kg, negative when losing)
    pub weekly_change_kg: f64,
    /// Whole weeks until the target is reached
    pub weeks_to_target: u32,
}

/// Weeks to reach `target_kg` given a daily calorie adjustment
///
/// Returns `None` without a target, for a zero adjustment, or when the target lies
/// in the opposite direction of the adjustment.
#[must_use]
pub fn goal_timeline(
    current_kg: f64,
    target_kg: Option<f64>,
    daily_adjustment_kcal: f64,
) -> Option<GoalTimeline> {
    let target_kg = positive(target_kg)?;
    if daily_adjustment_kcal.abs() < f64::EPSILON {
        return None;
    }

    let weekly_kcal = daily_adjustment_kcal * DAYS_PER_WEEK as f64;
    let weekly_change_kg = weekly_kcal / KCAL_PER_KG_BODY_MASS;
    let weeks = (target_kg - current_kg) * KCAL_PER_KG_BODY_MASS / weekly_kcal;
    if !weeks.is_finite() || weeks < 0.0 {
        return None;
    }

    Some(GoalTimeline {
        weekly_change_kg: (weekly_change_kg * 100.0).round() / 100.0,
        weeks_to_target: weeks.ceil() as u32,
    })
}

/// Complete daily energy targets for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyTargets {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: u32,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: u32,
    /// TDEE plus the goal adjustment (kcal/day)
    pub daily_calories: u32,
    /// Protein target (g)
    pub daily_protein: u32,
    /// Carbohydrate target (g)
    pub daily_carbs: u32,
    /// Fat target (g)
    pub daily_fat: u32,
    /// Calorie share per macronutrient
    pub macro_percentages: MacroPercentages,
    /// Body mass index
    pub bmi: Bmi,
    /// Projection towards the target weight, when one applies
    pub goal_timeline: Option<GoalTimeline>,
    /// Profile fields that were substituted with defaults
    pub defaults_applied: Vec<ProfileField>,
}

/// Round to a whole non-negative unit
fn whole(value: f64) -> u32 {
    if value.is_finite() {
        value.round().max(0.0) as u32
    } else {
        0
    }
}

/// Calculate complete daily energy targets for a profile
///
/// Intermediate values stay unrounded; only the reported figures are rounded.
#[must_use]
pub fn calculate_energy_targets(
    profile: &BiometricProfile,
    config: &NutritionConfig,
) -> EnergyTargets {
    let resolved = resolve_profile(profile, &config.profile_defaults);

    let bmr = calculate_mifflin_st_jeor(
        resolved.weight_kg,
        resolved.height_cm,
        resolved.age,
        resolved.sex,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, resolved.activity_level, &config.activity_factors);
    let adjustment = config.goal_adjustments.adjustment(resolved.fitness_goal);
    let daily_calories = (tdee + adjustment).max(0.0);

    let macros = calculate_macros(
        daily_calories,
        resolved.weight_kg,
        resolved.nutrition_approach,
        resolved.fitness_goal,
        &config.macronutrients,
    );

    EnergyTargets {
        bmr: whole(bmr),
        tdee: whole(tdee),
        daily_calories: whole(daily_calories),
        daily_protein: whole(macros.protein_g),
        daily_carbs: whole(macros.carbs_g),
        daily_fat: whole(macros.fat_g),
        macro_percentages: MacroPercentages::from_grams(&macros, daily_calories),
        bmi: calculate_bmi(resolved.weight_kg, resolved.height_cm),
        goal_timeline: goal_timeline(resolved.weight_kg, profile.target_weight_kg, adjustment),
        defaults_applied: resolved.defaults_applied,
    }
}
