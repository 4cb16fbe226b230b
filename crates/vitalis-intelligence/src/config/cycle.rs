// ABOUTME: Menstrual cycle and pregnancy phase configuration
// ABOUTME: Fixed 28-day phase boundaries, trimester cut-offs and the weekly baby size table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

use serde::{Deserialize, Serialize};

/// Cycle phase model
///
/// The cycle length is fixed; per-user cycle length is not tracked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleConfig {
    /// Modelled cycle length (days): 28
    pub cycle_length_days: u32,
    /// First follicular day: 6
    pub follicular_start_day: u32,
    /// First ovulation day: 14
    pub ovulation_start_day: u32,
    /// First luteal day: 17
    pub luteal_start_day: u32,
    /// First fertile day: 9
    pub fertile_window_start_day: u32,
    /// Last fertile day: 14
    pub fertile_window_end_day: u32,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            cycle_length_days: 28,
            follicular_start_day: 6,
            ovulation_start_day: 14,
            luteal_start_day: 17,
            fertile_window_start_day: 9,
            fertile_window_end_day: 14,
        }
    }
}

/// Pregnancy progress model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PregnancyConfig {
    /// Full term (weeks): 40
    pub term_weeks: u32,
    /// Second trimester starts at week 14
    pub second_trimester_week: u32,
    /// Third trimester starts at week 28
    pub third_trimester_week: u32,
    /// Days from reference date to estimated due date: 280
    pub gestation_days: u32,
    /// Baby size comparison indexed by completed week
    pub baby_sizes: Vec<String>,
    /// Label for weeks beyond the table
    pub baby_size_fallback: String,
}

/// Baby size by completed gestational week, starting at week 0
const BABY_SIZES: [&str; 23] = [
    "Poppy seed",
    "Poppy seed",
    "Poppy seed",
    "Poppy seed",
    "Sesame seed",
    "Lentil",
    "Blueberry",
    "Kidney bean",
    "Raspberry",
    "Grape",
    "Kumquat",
    "Fig",
    "Lime",
    "Pea pod",
    "Lemon",
    "Apple",
    "Avocado",
    "Turnip",
    "Bell pepper",
    "Heirloom tomato",
    "Banana",
    "Carrot",
    "Spaghetti squash",
];

impl Default for PregnancyConfig {
    fn default() -> Self {
        Self {
            term_weeks: 40,
            second_trimester_week: 14,
            third_trimester_week: 28,
            gestation_days: 280,
            baby_sizes: BABY_SIZES.iter().map(|&size| size.to_owned()).collect(),
            baby_size_fallback: "Watermelon".to_owned(),
        }
    }
}
