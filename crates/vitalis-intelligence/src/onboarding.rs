// ABOUTME: Onboarding wizard steps as an explicit enum with total next/previous transitions
// ABOUTME: Each step knows which profile field it collects and which derived metric it previews
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

use serde::{Deserialize, Serialize};
use vitalis_core::constants::profile_defaults::MIN_AGE_YEARS;
use vitalis_core::models::BiometricProfile;

/// Derived value shown to the user once a step's answer is known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricPreview {
    /// Nothing to preview yet
    None,
    /// Basal metabolic rate
    Bmr,
    /// Total daily energy expenditure
    Tdee,
    /// Daily calorie target
    DailyCalories,
    /// Protein, carbohydrate and fat targets
    Macros,
}

/// Wizard step, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    /// Introduction
    Welcome,
    /// Biological sex
    Sex,
    /// Age
    Age,
    /// Height
    Height,
    /// Weight
    Weight,
    /// Activity level
    ActivityLevel,
    /// Fitness goal and optional target weight
    FitnessGoal,
    /// Nutrition approach
    NutritionApproach,
    /// Summary of the computed targets
    Summary,
}

impl OnboardingStep {
    /// Every step in order
    pub const ALL: [Self; 9] = [
        Self::Welcome,
        Self::Sex,
        Self::Age,
        Self::Height,
        Self::Weight,
        Self::ActivityLevel,
        Self::FitnessGoal,
        Self::NutritionApproach,
        Self::Summary,
    ];

    /// Following step; the summary stays put
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Welcome => Self::Sex,
            Self::Sex => Self::Age,
            Self::Age => Self::Height,
            Self::Height => Self::Weight,
            Self::Weight => Self::ActivityLevel,
            Self::ActivityLevel => Self::FitnessGoal,
            Self::FitnessGoal => Self::NutritionApproach,
            Self::NutritionApproach | Self::Summary => Self::Summary,
        }
    }

    /// Preceding step; the welcome screen stays put
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Welcome | Self::Sex => Self::Welcome,
            Self::Age => Self::Sex,
            Self::Height => Self::Age,
            Self::Weight => Self::Height,
            Self::ActivityLevel => Self::Weight,
            Self::FitnessGoal => Self::ActivityLevel,
            Self::NutritionApproach => Self::FitnessGoal,
            Self::Summary => Self::NutritionApproach,
        }
    }

    /// Metric that becomes computable once this step is answered
    #[must_use]
    pub const fn preview(self) -> MetricPreview {
        match self {
            Self::Welcome | Self::Sex | Self::Age | Self::Height => MetricPreview::None,
            Self::Weight => MetricPreview::Bmr,
            Self::ActivityLevel => MetricPreview::Tdee,
            Self::FitnessGoal => MetricPreview::DailyCalories,
            Self::NutritionApproach | Self::Summary => MetricPreview::Macros,
        }
    }

    /// Whether `profile` already answers this step
    ///
    /// Age must be at least the minimum supported age; weight and height must be
    /// positive and finite.
    #[must_use]
    pub fn is_answered(self, profile: &BiometricProfile) -> bool {
        let positive = |value: Option<f64>| value.is_some_and(|v| v.is_finite() && v > 0.0);
        match self {
            Self::Welcome | Self::Summary => true,
            Self::Sex => profile.sex.is_some(),
            Self::Age => profile.age.is_some_and(|age| age >= MIN_AGE_YEARS),
            Self::Height => positive(profile.height_cm),
            Self::Weight => positive(profile.weight_kg),
            Self::ActivityLevel => profile.activity_level.is_some(),
            Self::FitnessGoal => profile.fitness_goal.is_some(),
            Self::NutritionApproach => profile.nutrition_approach.is_some(),
        }
    }

    /// First step `profile` has not answered, or the summary when all are answered
    #[must_use]
    pub fn resume_point(profile: &BiometricProfile) -> Self {
        Self::ALL
            .into_iter()
            .find(|step| !step.is_answered(profile))
            .unwrap_or(Self::Summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitalis_core::models::{ActivityLevel, Sex};

    #[test]
    fn test_transitions_are_inverse_inside_the_wizard() {
        for step in &OnboardingStep::ALL[1..OnboardingStep::ALL.len() - 1] {
            assert_eq!(step.next().previous(), *step);
            assert_eq!(step.previous().next(), *step);
        }
    }

    #[test]
    fn test_transitions_saturate_at_the_ends() {
        assert_eq!(OnboardingStep::Summary.next(), OnboardingStep::Summary);
        assert_eq!(OnboardingStep::Welcome.previous(), OnboardingStep::Welcome);
    }

    #[test]
    fn test_walking_forward_visits_every_step_in_order() {
        let mut step = OnboardingStep::Welcome;
        let mut visited = vec![step];
        while step != OnboardingStep::Summary {
            step = step.next();
            visited.push(step);
        }
        assert_eq!(visited, OnboardingStep::ALL.to_vec());
    }

    #[test]
    fn test_resume_point() {
        assert_eq!(
            OnboardingStep::resume_point(&BiometricProfile::default()),
            OnboardingStep::Sex
        );

        let partial = BiometricProfile::new(Sex::Female, 29, 61.0, 165.0);
        assert_eq!(
            OnboardingStep::resume_point(&partial),
            OnboardingStep::ActivityLevel
        );

        let too_young = BiometricProfile::new(Sex::Male, 12, 45.0, 150.0)
            .with_activity_level(ActivityLevel::VeryActive);
        assert_eq!(
            OnboardingStep::resume_point(&too_young),
            OnboardingStep::Age
        );
    }

    #[test]
    fn test_previews() {
        assert_eq!(OnboardingStep::Weight.preview(), MetricPreview::Bmr);
        assert_eq!(OnboardingStep::FitnessGoal.preview(), MetricPreview::DailyCalories);
    }
}
