// ABOUTME: Unit conversion constants for weight, length, volume, and time
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

/// Pounds per kilogram; the inverse conversion divides by the same factor
pub const LBS_PER_KG: f64 = 2.204_622_621_8;

/// Centimeters per foot
pub const CM_PER_FOOT: f64 = 30.48;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Inches per foot
pub const INCHES_PER_FOOT: u32 = 12;

/// US fluid ounces per milliliter; ounces convert back by dividing by this factor
pub const FL_OZ_PER_ML: f64 = 0.033_814;

/// Milliseconds per day
pub const MS_PER_DAY: i64 = 86_400_000;

/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Days per week
pub const DAYS_PER_WEEK: i64 = 7;
