// ABOUTME: Reducers from raw meal, exercise, step, water and mood logs into daily aggregates
// ABOUTME: Groups entries by ISO date; the latest mood check-in of a day wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

use crate::activity_calories::step_calories;
use crate::config::ActivityCalorieConfig;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;
use vitalis_core::models::{DailyAggregate, LogEntry};

fn amount(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Running totals for one day plus the timestamp of the mood currently held
struct DayAccumulator {
    aggregate: DailyAggregate,
    mood_logged_at: Option<DateTime<Utc>>,
}

impl DayAccumulator {
    const fn new(date: NaiveDate) -> Self {
        Self {
            aggregate: DailyAggregate::empty(date),
            mood_logged_at: None,
        }
    }

    fn add(&mut self, entry: &LogEntry, config: &ActivityCalorieConfig) {
        let day = &mut self.aggregate;
        match entry {
            LogEntry::Meal(meal) => {
                day.calories_eaten += amount(meal.calories);
                day.meals_logged += 1;
            }
            LogEntry::Exercise(exercise) => {
                day.calories_burned_exercise += amount(exercise.calories_burned);
                day.minutes_exercised += amount(exercise.duration_minutes);
                day.workout_count += 1;
            }
            LogEntry::Steps(steps) => {
                day.steps = day.steps.saturating_add(steps.steps);
                day.calories_burned_steps += steps
                    .calories_burned
                    .map_or_else(|| step_calories(steps.steps, config), amount);
            }
            LogEntry::Water(water) => day.water_volume_ml += amount(water.volume_ml),
            LogEntry::Mood(mood) => {
                let newer = self
                    .mood_logged_at
                    .is_none_or(|held| mood.logged_at >= held);
                if mood.rating > 0 && newer {
                    day.mood_rating = Some(mood.rating);
                    self.mood_logged_at = Some(mood.logged_at);
                }
            }
        }
    }
}

/// Reduce every entry dated `date` into one aggregate; other dates are ignored
#[must_use]
pub fn aggregate_day(
    date: NaiveDate,
    entries: &[LogEntry],
    config: &ActivityCalorieConfig,
) -> DailyAggregate {
    let mut accumulator = DayAccumulator::new(date);
    for entry in entries.iter().filter(|entry| entry.date() == date) {
        accumulator.add(entry, config);
    }
    accumulator.aggregate
}

/// Reduce entries into one aggregate per date, in ascending date order
#[must_use]
pub fn aggregate_by_date(
    entries: &[LogEntry],
    config: &ActivityCalorieConfig,
) -> Vec<DailyAggregate> {
    let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();
    for entry in entries {
        days.entry(entry.date())
            .or_insert_with(|| DayAccumulator::new(entry.date()))
            .add(entry, config);
    }
    days.into_values().map(|day| day.aggregate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use vitalis_core::models::{ExerciseLog, MealLog, MoodLog, StepLog, WaterLog};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    fn mood(day: u32, hour: u32, rating: u8) -> LogEntry {
        LogEntry::Mood(MoodLog {
            date: date(day),
            logged_at: Utc.with_ymd_and_hms(2025, 4, day, hour, 0, 0).unwrap(),
            rating,
        })
    }

    fn sample_logs() -> Vec<LogEntry> {
        vec![
            LogEntry::Meal(MealLog {
                date: date(2),
                name: None,
                calories: 650.0,
                protein_g: 40.0,
                carbs_g: 60.0,
                fat_g: 20.0,
            }),
            LogEntry::Meal(MealLog {
                date: date(2),
                name: None,
                calories: 800.0,
                protein_g: 35.0,
                carbs_g: 90.0,
                fat_g: 25.0,
            }),
            LogEntry::Exercise(ExerciseLog {
                date: date(2),
                name: None,
                duration_minutes: 45.0,
                met: 8.0,
                calories_burned: 420.0,
            }),
            LogEntry::Steps(StepLog {
                date: date(2),
                steps: 6000,
                calories_burned: None,
            }),
            LogEntry::Water(WaterLog {
                date: date(2),
                volume_ml: 500.0,
            }),
            LogEntry::Water(WaterLog {
                date: date(1),
                volume_ml: 750.0,
            }),
            mood(2, 20, 2),
            mood(2, 9, 4),
        ]
    }

    #[test]
    fn test_aggregate_day_sums_entries() {
        let day = aggregate_day(date(2), &sample_logs(), &ActivityCalorieConfig::default());

        assert!((day.calories_eaten - 1450.0).abs() < f64::EPSILON);
        assert_eq!(day.meals_logged, 2);
        assert_eq!(day.workout_count, 1);
        assert!((day.minutes_exercised - 45.0).abs() < f64::EPSILON);
        assert_eq!(day.steps, 6000);
        assert!((day.calories_burned_steps - 240.0).abs() < 1e-9);
        assert!((day.water_volume_ml - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_latest_mood_wins_regardless_of_order() {
        let day = aggregate_day(date(2), &sample_logs(), &ActivityCalorieConfig::default());
        assert_eq!(day.mood_rating, Some(2));
    }

    #[test]
    fn test_zero_mood_rating_is_ignored() {
        let logs = vec![mood(3, 8, 3), mood(3, 21, 0)];
        let day = aggregate_day(date(3), &logs, &ActivityCalorieConfig::default());
        assert_eq!(day.mood_rating, Some(3));
    }

    #[test]
    fn test_device_step_calories_take_precedence() {
        let logs = vec![LogEntry::Steps(StepLog {
            date: date(4),
            steps: 8000,
            calories_burned: Some(275.0),
        })];
        let day = aggregate_day(date(4), &logs, &ActivityCalorieConfig::default());
        assert!((day.calories_burned_steps - 275.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_aggregate_by_date_groups_and_orders() {
        let days = aggregate_by_date(&sample_logs(), &ActivityCalorieConfig::default());

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, date(1));
        assert!((days[0].water_volume_ml - 750.0).abs() < f64::EPSILON);
        assert_eq!(days[1].date, date(2));
        assert_eq!(days[1].meals_logged, 2);
    }
}
