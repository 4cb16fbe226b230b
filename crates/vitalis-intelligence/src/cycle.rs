// ABOUTME: Menstrual cycle phase and pregnancy progress from a single reference date
// ABOUTME: Fixed 28-day cycle model, gestational week, trimester, baby size and due date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

//! Cycle / Pregnancy Phase Calculator
//!
//! Elapsed days are `ceil((now - reference) / 1 day)` and never negative: a `now`
//! before the reference date counts as zero elapsed time.
//!
//! The cycle model has a fixed length. Actual per-user cycle length is not
//! tracked, so phases are positions within that fixed model rather than
//! predictions.

use crate::config::{CycleConfig, PregnancyConfig};
use chrono::{DateTime, Days, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use vitalis_core::constants::units::{DAYS_PER_WEEK, MS_PER_DAY};

/// What the reference date marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleMode {
    /// Last period start
    Cycle,
    /// Pregnancy or conception start
    Pregnancy,
}

/// Reference date, evaluation time and mode, all in epoch milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePhaseInputs {
    /// Last period start or conception date (epoch ms)
    pub reference_ms: i64,
    /// Evaluation time (epoch ms)
    pub now_ms: i64,
    /// Cycle or pregnancy
    pub mode: CycleMode,
}

impl CyclePhaseInputs {
    /// Build inputs from calendar dates at UTC midnight
    #[must_use]
    pub fn from_dates(mode: CycleMode, reference: NaiveDate, now: NaiveDate) -> Self {
        Self {
            reference_ms: midnight_ms(reference),
            now_ms: midnight_ms(now),
            mode,
        }
    }
}

/// A user's tracked reference date, without an evaluation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleTracking {
    /// Cycle or pregnancy
    pub mode: CycleMode,
    /// Last period start or conception date (epoch ms)
    pub reference_ms: i64,
}

impl CycleTracking {
    /// Tracking from a calendar date at UTC midnight
    #[must_use]
    pub fn from_date(mode: CycleMode, reference: NaiveDate) -> Self {
        Self {
            mode,
            reference_ms: midnight_ms(reference),
        }
    }

    /// Inputs for evaluating at `now_ms`
    #[must_use]
    pub const fn at(self, now_ms: i64) -> CyclePhaseInputs {
        CyclePhaseInputs {
            reference_ms: self.reference_ms,
            now_ms,
            mode: self.mode,
        }
    }
}

fn midnight_ms(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Menstrual cycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    /// Days 1-5
    Menstrual,
    /// Days 6-13
    Follicular,
    /// Days 14-16
    Ovulation,
    /// Days 17-28
    Luteal,
}

/// Position within the modelled cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleStatus {
    /// Whole days since the reference date
    pub elapsed_days: i64,
    /// Day of cycle, 1 through the cycle length
    pub cycle_day: u32,
    /// Phase for `cycle_day`
    pub phase: CyclePhase,
    /// Days until the next modelled period starts
    pub days_until_next_period: u32,
    /// Inside the five days before ovulation or on ovulation day
    pub is_fertile_window: bool,
}

/// Pregnancy trimester
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trimester {
    /// Weeks 0-13
    First,
    /// Weeks 14-27
    Second,
    /// Weeks 28 onwards
    Third,
}

impl Trimester {
    /// Trimester number, 1-3
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }
}

/// Gestational progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PregnancyStatus {
    /// Whole days since the reference date
    pub elapsed_days: i64,
    /// Completed weeks
    pub weeks: u32,
    /// Days into the current week, 0-6
    pub days: u32,
    /// Trimester for `weeks`
    pub trimester: Trimester,
    /// Baby size comparison for `weeks`
    pub baby_size: String,
    /// Fraction of full term elapsed, 0-1
    pub progress: f64,
    /// Estimated due date, when the reference time is representable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Days until the due date, never negative
    pub days_until_due: u32,
}

/// Result of a phase calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PhaseReport {
    /// Cycle mode result
    Cycle(CycleStatus),
    /// Pregnancy mode result
    Pregnancy(PregnancyStatus),
}

/// Whole days from `reference_ms` to `now_ms`, rounded up, never negative
#[must_use]
pub fn elapsed_days(reference_ms: i64, now_ms: i64) -> i64 {
    let diff = now_ms.saturating_sub(reference_ms);
    if diff <= 0 {
        return 0;
    }
    diff / MS_PER_DAY + i64::from(diff % MS_PER_DAY != 0)
}

/// Phase for a 1-indexed cycle day
///
/// A day exactly on a boundary belongs to the later phase.
#[must_use]
pub const fn phase_for_day(cycle_day: u32, config: &CycleConfig) -> CyclePhase {
    if cycle_day < config.follicular_start_day {
        CyclePhase::Menstrual
    } else if cycle_day < config.ovulation_start_day {
        CyclePhase::Follicular
    } else if cycle_day < config.luteal_start_day {
        CyclePhase::Ovulation
    } else {
        CyclePhase::Luteal
    }
}

/// Cycle day and phase for `elapsed_days`
///
/// The cycle day is `elapsed mod length` with `0` mapped to the last day, so it
/// always lies in `1..=length`.
#[must_use]
pub fn cycle_status(elapsed_days: i64, config: &CycleConfig) -> CycleStatus {
    let length = i64::from(config.cycle_length_days.max(1));
    let position = elapsed_days.max(0) % length;
    let cycle_day = u32::try_from(if position == 0 { length } else { position })
        .unwrap_or(config.cycle_length_days);

    CycleStatus {
        elapsed_days: elapsed_days.max(0),
        cycle_day,
        phase: phase_for_day(cycle_day, config),
        days_until_next_period: config.cycle_length_days.max(1) + 1 - cycle_day,
        is_fertile_window: (config.fertile_window_start_day..=config.fertile_window_end_day)
            .contains(&cycle_day),
    }
}

/// Gestational week, trimester and baby size for `elapsed_days`
#[must_use]
pub fn pregnancy_status(
    elapsed_days: i64,
    reference_ms: i64,
    config: &PregnancyConfig,
) -> PregnancyStatus {
    let elapsed = elapsed_days.max(0);
    let weeks = u32::try_from(elapsed / DAYS_PER_WEEK).unwrap_or(u32::MAX);
    let days = u32::try_from(elapsed % DAYS_PER_WEEK).unwrap_or(0);

    let trimester = if weeks < config.second_trimester_week {
        Trimester::First
    } else if weeks < config.third_trimester_week {
        Trimester::Second
    } else {
        Trimester::Third
    };

    let baby_size = config
        .baby_sizes
        .get(weeks as usize)
        .unwrap_or(&config.baby_size_fallback)
        .clone();

    let progress = (f64::from(weeks) / f64::from(config.term_weeks.max(1))).min(1.0);

    let due_date = DateTime::from_timestamp_millis(reference_ms).and_then(|reference| {
        reference
            .date_naive()
            .checked_add_days(Days::new(u64::from(config.gestation_days)))
    });
    let days_until_due =
        u32::try_from((i64::from(config.gestation_days) - elapsed).max(0)).unwrap_or(0);

    PregnancyStatus {
        elapsed_days: elapsed,
        weeks,
        days,
        trimester,
        baby_size,
        progress,
        due_date,
        days_until_due,
    }
}

/// Phase report for `inputs`
#[must_use]
pub fn calculate_phase(
    inputs: &CyclePhaseInputs,
    cycle: &CycleConfig,
    pregnancy: &PregnancyConfig,
) -> PhaseReport {
    let elapsed = elapsed_days(inputs.reference_ms, inputs.now_ms);
    match inputs.mode {
        CycleMode::Cycle => PhaseReport::Cycle(cycle_status(elapsed, cycle)),
        CycleMode::Pregnancy => {
            PhaseReport::Pregnancy(pregnancy_status(elapsed, inputs.reference_ms, pregnancy))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = MS_PER_DAY;

    #[test]
    fn test_elapsed_days_rounds_up_and_clamps() {
        assert_eq!(elapsed_days(0, 0), 0);
        assert_eq!(elapsed_days(0, 1), 1);
        assert_eq!(elapsed_days(0, 20 * DAY), 20);
        assert_eq!(elapsed_days(0, 20 * DAY + 1), 21);
        assert_eq!(elapsed_days(10 * DAY, 0), 0);
        assert_eq!(elapsed_days(i64::MAX, i64::MIN), 0);
    }

    #[test]
    fn test_day_twenty_is_luteal() {
        let status = cycle_status(20, &CycleConfig::default());
        assert_eq!(status.cycle_day, 20);
        assert_eq!(status.phase, CyclePhase::Luteal);
        assert_eq!(status.days_until_next_period, 9);
        assert!(!status.is_fertile_window);
    }

    #[test]
    fn test_phase_boundaries_belong_to_later_phase() {
        let config = CycleConfig::default();
        assert_eq!(phase_for_day(1, &config), CyclePhase::Menstrual);
        assert_eq!(phase_for_day(5, &config), CyclePhase::Menstrual);
        assert_eq!(phase_for_day(6, &config), CyclePhase::Follicular);
        assert_eq!(phase_for_day(13, &config), CyclePhase::Follicular);
        assert_eq!(phase_for_day(14, &config), CyclePhase::Ovulation);
        assert_eq!(phase_for_day(16, &config), CyclePhase::Ovulation);
        assert_eq!(phase_for_day(17, &config), CyclePhase::Luteal);
        assert_eq!(phase_for_day(28, &config), CyclePhase::Luteal);
    }

    #[test]
    fn test_cycle_day_wraps_with_zero_as_last_day() {
        let config = CycleConfig::default();
        assert_eq!(cycle_status(0, &config).cycle_day, 28);
        assert_eq!(cycle_status(28, &config).cycle_day, 28);
        assert_eq!(cycle_status(29, &config).cycle_day, 1);
        assert_eq!(cycle_status(29, &config).days_until_next_period, 28);
        for elapsed in 0..200 {
            let day = cycle_status(elapsed, &config).cycle_day;
            assert!((1..=28).contains(&day));
        }
    }

    #[test]
    fn test_fertile_window() {
        let config = CycleConfig::default();
        assert!(!cycle_status(8, &config).is_fertile_window);
        assert!(cycle_status(9, &config).is_fertile_window);
        assert!(cycle_status(14, &config).is_fertile_window);
        assert!(!cycle_status(15, &config).is_fertile_window);
    }

    #[test]
    fn test_pregnancy_week_fourteen_is_second_trimester() {
        let status = pregnancy_status(98, 0, &PregnancyConfig::default());
        assert_eq!(status.weeks, 14);
        assert_eq!(status.days, 0);
        assert_eq!(status.trimester, Trimester::Second);
        assert_eq!(status.baby_size, "Lemon");
        assert!((status.progress - 0.35).abs() < 1e-9);
        assert_eq!(status.days_until_due, 182);
        assert_eq!(status.due_date, NaiveDate::from_ymd_opt(1970, 10, 8));
    }

    #[test]
    fn test_pregnancy_beyond_table_and_term() {
        let config = PregnancyConfig::default();
        let late = pregnancy_status(7 * 42 + 3, 0, &config);
        assert_eq!(late.trimester, Trimester::Third);
        assert_eq!(late.baby_size, "Watermelon");
        assert!((late.progress - 1.0).abs() < f64::EPSILON);
        assert_eq!(late.days_until_due, 0);
        assert_eq!(late.days, 3);
    }

    #[test]
    fn test_pregnancy_weeks_saturate_for_huge_elapsed() {
        let config = PregnancyConfig::default();
        let status = pregnancy_status(i64::MAX, 0, &config);
        assert_eq!(status.weeks, u32::MAX);
        assert_eq!(status.trimester, Trimester::Third);
        assert_eq!(status.baby_size, "Watermelon");
        assert!((status.progress - 1.0).abs() < f64::EPSILON);
        assert_eq!(status.days_until_due, 0);
    }

    #[test]
    fn test_now_before_reference_is_zero_elapsed() {
        let inputs = CyclePhaseInputs {
            reference_ms: 50 * DAY,
            now_ms: 10 * DAY,
            mode: CycleMode::Pregnancy,
        };
        let report = calculate_phase(&inputs, &CycleConfig::default(), &PregnancyConfig::default());
        let PhaseReport::Pregnancy(status) = report else {
            unreachable!("pregnancy mode yields a pregnancy report");
        };
        assert_eq!(status.weeks, 0);
        assert!(status.progress.abs() < f64::EPSILON);
        assert_eq!(status.trimester, Trimester::First);
        assert_eq!(status.baby_size, "Poppy seed");
    }

    #[test]
    fn test_inputs_from_dates() {
        let reference = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let now = NaiveDate::from_ymd_opt(2025, 3, 21).unwrap();
        let inputs = CyclePhaseInputs::from_dates(CycleMode::Cycle, reference, now);

        let report = calculate_phase(&inputs, &CycleConfig::default(), &PregnancyConfig::default());
        assert!(matches!(
            report,
            PhaseReport::Cycle(CycleStatus {
                cycle_day: 20,
                phase: CyclePhase::Luteal,
                ..
            })
        ));
    }
}
