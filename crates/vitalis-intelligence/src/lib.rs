// ABOUTME: Health metrics and recommendation engine for the Vitalis platform
// ABOUTME: Pure, total calculations over biometric profiles, daily aggregates and achievement state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

#![deny(unsafe_code)]

//! # Vitalis Intelligence
//!
//! The computation layer that turns logged facts into derived values. Every
//! function here is synchronous and side-effect free; the only "write" the engine
//! ever proposes is the list of achievement unlock events it returns.
//!
//! ## Modules
//!
//! - **conversion**: metric/imperial conversion and display helpers
//! - **`nutrition_calculator`**: BMR, TDEE, daily calorie and macro targets
//! - **`activity_calories`**: MET-based burn estimates and reverse MET derivation
//! - **vitality**: composite 0-100 daily score
//! - **cycle**: menstrual cycle phase and pregnancy progress
//! - **achievements**: catalog evaluation, unlocks and progress
//! - **aggregation**: reducers from raw logs to daily aggregates
//! - **onboarding**: wizard steps and the metric each one previews
//! - **config**: injected configuration tables
//! - **engine**: `MetricsEngine` facade

/// Achievement catalog and evaluator
pub mod achievements;
/// MET-based activity calorie estimation
pub mod activity_calories;
/// Raw log reducers
pub mod aggregation;
/// Injected configuration tables
pub mod config;
/// Metric and imperial unit conversion
pub mod conversion;
/// Cycle and pregnancy phase calculation
pub mod cycle;
/// Engine facade
pub mod engine;
/// Energy and macro targets
pub mod nutrition_calculator;
/// Onboarding wizard steps
pub mod onboarding;
/// Composite vitality score
pub mod vitality;

pub use achievements::{
    default_catalog, AchievementCatalog, AchievementCriterion, AchievementDefinition,
    AchievementEvaluation, AchievementProgress, AchievementRule, AchievementStats,
};
pub use activity_calories::{ExerciseEffort, ExerciseEstimate, ExerciseLibraryEntry};
pub use config::{ConfigError, EngineConfig};
pub use cycle::{CycleMode, CyclePhase, CyclePhaseInputs, CycleTracking, PhaseReport};
pub use engine::{DailyReport, DailySnapshot, MetricsEngine};
pub use nutrition_calculator::{EnergyTargets, ProfileField};
pub use onboarding::OnboardingStep;
pub use vitality::{VitalityBreakdown, VitalityInputs, VitalityScore};
