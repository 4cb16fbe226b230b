// ABOUTME: Biometric profile and unit preference models for a single user
// ABOUTME: Sex, ActivityLevel, FitnessGoal, NutritionApproach enums with lossy and strict parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

use crate::errors::AppError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used by the BMR formula
///
/// Only two categories are modeled. A missing or unrecognised value resolves to
/// [`Sex::Female`] in the energy calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 kcal BMR constant)
    Male,
    /// Female (-161 kcal BMR constant)
    Female,
}

impl Sex {
    /// Parse leniently, mapping anything unrecognised to `Female`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Self::Female)
    }

    /// Canonical snake case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!("Unknown sex: {other}"))),
        }
    }
}

/// Self-reported activity level, ordered from least to most active
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Physical job or twice-daily training
    ExtremelyActive,
}

impl ActivityLevel {
    /// Every level in ascending order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtremelyActive,
    ];

    /// Parse leniently, mapping anything unrecognised to the default level
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Canonical snake case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtremelyActive => "extremely_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly_active" | "light" => Ok(Self::LightlyActive),
            "moderately_active" | "moderate" => Ok(Self::ModeratelyActive),
            "very_active" => Ok(Self::VeryActive),
            "extremely_active" | "extra_active" => Ok(Self::ExtremelyActive),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level: {other}"
            ))),
        }
    }
}

/// Primary fitness goal chosen during onboarding
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Caloric deficit
    LoseWeight,
    /// Caloric surplus
    BuildMuscle,
    /// Caloric balance
    #[default]
    Maintain,
    /// Endurance focus, caloric balance
    ImproveEndurance,
    /// General wellbeing, caloric balance
    GeneralHealth,
}

impl FitnessGoal {
    /// Parse leniently, mapping anything unrecognised to `Maintain`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Canonical snake case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::BuildMuscle => "build_muscle",
            Self::Maintain => "maintain",
            Self::ImproveEndurance => "improve_endurance",
            Self::GeneralHealth => "general_health",
        }
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "lose_weight" | "weight_loss" => Ok(Self::LoseWeight),
            "build_muscle" | "muscle_gain" => Ok(Self::BuildMuscle),
            "maintain" | "maintenance" => Ok(Self::Maintain),
            "improve_endurance" | "endurance" => Ok(Self::ImproveEndurance),
            "general_health" => Ok(Self::GeneralHealth),
            other => Err(AppError::invalid_input(format!(
                "Unknown fitness goal: {other}"
            ))),
        }
    }
}

/// Diet style preference that shapes macro targets
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NutritionApproach {
    /// Default split
    #[default]
    Balanced,
    /// 2.5 g/kg protein
    HighProtein,
    /// 40% of calories from fat
    LowCarb,
    /// Plant-based, default split
    PlantBased,
    /// Flexible, default split
    Flexible,
}

impl NutritionApproach {
    /// Parse leniently, mapping anything unrecognised to `Balanced`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Canonical snake case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::HighProtein => "high_protein",
            Self::LowCarb => "low_carb",
            Self::PlantBased => "plant_based",
            Self::Flexible => "flexible",
        }
    }
}

impl FromStr for NutritionApproach {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "balanced" => Ok(Self::Balanced),
            "high_protein" => Ok(Self::HighProtein),
            "low_carb" => Ok(Self::LowCarb),
            "plant_based" | "vegan" | "vegetarian" => Ok(Self::PlantBased),
            "flexible" => Ok(Self::Flexible),
            other => Err(AppError::invalid_input(format!(
                "Unknown nutrition approach: {other}"
            ))),
        }
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

impl_display_via_as_str!(Sex, ActivityLevel, FitnessGoal, NutritionApproach);

/// Deserialize an optional enum field, treating unknown strings as absent
///
/// Absent enum fields fall back to documented defaults in the calculator, so a
/// stored record written by a newer client still loads.
fn lossy_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.parse().ok()))
}

/// Biometric snapshot for one user, always in metric units
///
/// Numeric fields are optional because partially onboarded users exist; the
/// energy calculator substitutes documented defaults for anything missing or
/// non-positive and reports which fields it substituted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiometricProfile {
    /// Biological sex
    #[serde(default, deserialize_with = "lossy_enum")]
    pub sex: Option<Sex>,
    /// Age in whole years
    #[serde(default)]
    pub age: Option<u32>,
    /// Body weight in kilograms
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Goal body weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
    /// Self-reported activity level
    #[serde(default, deserialize_with = "lossy_enum")]
    pub activity_level: Option<ActivityLevel>,
    /// Primary fitness goal
    #[serde(default, deserialize_with = "lossy_enum")]
    pub fitness_goal: Option<FitnessGoal>,
    /// Diet style preference
    #[serde(default, deserialize_with = "lossy_enum")]
    pub nutrition_approach: Option<NutritionApproach>,
}

impl BiometricProfile {
    /// Create a profile with the four core biometrics
    #[must_use]
    pub const fn new(sex: Sex, age: u32, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            sex: Some(sex),
            age: Some(age),
            weight_kg: Some(weight_kg),
            height_cm: Some(height_cm),
            target_weight_kg: None,
            activity_level: None,
            fitness_goal: None,
            nutrition_approach: None,
        }
    }

    /// Set the activity level
    #[must_use]
    pub const fn with_activity_level(mut self, level: ActivityLevel) -> Self {
        self.activity_level = Some(level);
        self
    }

    /// Set the fitness goal
    #[must_use]
    pub const fn with_goal(mut self, goal: FitnessGoal) -> Self {
        self.fitness_goal = Some(goal);
        self
    }

    /// Set the nutrition approach
    #[must_use]
    pub const fn with_nutrition_approach(mut self, approach: NutritionApproach) -> Self {
        self.nutrition_approach = Some(approach);
        self
    }

    /// Set the goal body weight
    #[must_use]
    pub const fn with_target_weight(mut self, target_weight_kg: f64) -> Self {
        self.target_weight_kg = Some(target_weight_kg);
        self
    }

    /// Onboarding is complete when age, weight and height are all positive
    #[must_use]
    pub fn is_onboarded(&self) -> bool {
        self.age.is_some_and(|age| age > 0)
            && self.weight_kg.is_some_and(|w| w.is_finite() && w > 0.0)
            && self.height_cm.is_some_and(|h| h.is_finite() && h > 0.0)
    }
}

/// Display unit for body weight
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    Kg,
    /// Pounds
    Lbs,
}

/// Display unit for height
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HeightUnit {
    /// Centimeters
    #[default]
    Cm,
    /// Feet and inches
    Ft,
}

/// Display unit for fluid volume
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
    /// Milliliters
    #[default]
    Ml,
    /// US fluid ounces
    Oz,
}

/// Per-user display unit choices; storage stays metric regardless
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnitPreference {
    /// Weight display unit
    #[serde(default)]
    pub weight: WeightUnit,
    /// Height display unit
    #[serde(default)]
    pub height: HeightUnit,
    /// Volume display unit
    #[serde(default)]
    pub volume: VolumeUnit,
}

impl UnitPreference {
    /// Metric everywhere
    #[must_use]
    pub const fn metric() -> Self {
        Self {
            weight: WeightUnit::Kg,
            height: HeightUnit::Cm,
            volume: VolumeUnit::Ml,
        }
    }

    /// Imperial everywhere
    #[must_use]
    pub const fn imperial() -> Self {
        Self {
            weight: WeightUnit::Lbs,
            height: HeightUnit::Ft,
            volume: VolumeUnit::Oz,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_enum_strings_deserialize_as_absent() {
        let profile: BiometricProfile = serde_json::from_str(
            r#"{"sex": "other", "age": 40, "weight_kg": 82.0, "height_cm": 178.0,
                "activity_level": "couch_athlete", "fitness_goal": "lose_weight"}"#,
        )
        .unwrap();

        assert_eq!(profile.sex, None);
        assert_eq!(profile.activity_level, None);
        assert_eq!(profile.fitness_goal, Some(FitnessGoal::LoseWeight));
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert!("couch".parse::<ActivityLevel>().is_err());
        assert_eq!(
            "Moderately Active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::ModeratelyActive
        );
    }

    #[test]
    fn test_lossy_parse_uses_documented_defaults() {
        assert_eq!(Sex::from_str_lossy("nonbinary"), Sex::Female);
        assert_eq!(ActivityLevel::from_str_lossy("??"), ActivityLevel::LightlyActive);
        assert_eq!(FitnessGoal::from_str_lossy(""), FitnessGoal::Maintain);
        assert_eq!(
            NutritionApproach::from_str_lossy("keto"),
            NutritionApproach::Balanced
        );
    }

    #[test]
    fn test_onboarding_requires_positive_biometrics() {
        let complete = BiometricProfile::new(Sex::Male, 30, 80.0, 180.0);
        assert!(complete.is_onboarded());

        let zero_weight = BiometricProfile {
            weight_kg: Some(0.0),
            ..complete.clone()
        };
        assert!(!zero_weight.is_onboarded());

        assert!(!BiometricProfile::default().is_onboarded());
    }
}
