// ABOUTME: Bidirectional metric/imperial conversion for weight, height and fluid volume
// ABOUTME: Display helpers that render stored metric values in the user's preferred units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

//! Unit Conversion
//!
//! Storage is always metric. Imperial values are converted here at the boundary,
//! before they enter any calculator. Every function is total: negative or
//! non-finite inputs are treated as zero, so no conversion ever yields a negative
//! quantity.
//!
//! A single constant is used per dimension in both directions so that a value
//! converted out and back lands within floating-point tolerance of where it started.

use serde::{Deserialize, Serialize};
use vitalis_core::constants::units::{
    CM_PER_FOOT, CM_PER_INCH, FL_OZ_PER_ML, INCHES_PER_FOOT, LBS_PER_KG,
};
use vitalis_core::models::{HeightUnit, UnitPreference, VolumeUnit, WeightUnit};

/// Clamp negative and non-finite inputs to zero
fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Kilograms to pounds
#[must_use]
pub fn kg_to_lbs(kg: f64) -> f64 {
    non_negative(kg) * LBS_PER_KG
}

/// Pounds to kilograms
#[must_use]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    non_negative(lbs) / LBS_PER_KG
}

/// Milliliters to US fluid ounces
#[must_use]
pub fn ml_to_oz(ml: f64) -> f64 {
    non_negative(ml) * FL_OZ_PER_ML
}

/// US fluid ounces to milliliters, dividing by the same factor `ml_to_oz` multiplies by
#[must_use]
pub fn oz_to_ml(oz: f64) -> f64 {
    non_negative(oz) / FL_OZ_PER_ML
}

/// A height split into whole feet and whole inches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeetInches {
    /// Whole feet
    pub feet: u32,
    /// Whole inches, always 0-11
    pub inches: u32,
}

/// Centimeters to feet and inches
///
/// Feet are the floor of `cm / 30.48`; inches are the rounded fractional foot.
/// When that rounding reaches 12 the inch count carries into the next foot, so
/// 182.8 cm renders as 6'0" rather than 5'12".
#[must_use]
pub fn cm_to_feet_inches(cm: f64) -> FeetInches {
    let total_feet = non_negative(cm) / CM_PER_FOOT;
    let feet = total_feet.floor() as u32;
    let inches = (total_feet.fract() * f64::from(INCHES_PER_FOOT)).round() as u32;

    if inches >= INCHES_PER_FOOT {
        FeetInches {
            feet: feet.saturating_add(1),
            inches: inches - INCHES_PER_FOOT,
        }
    } else {
        FeetInches { feet, inches }
    }
}

/// Feet and inches to centimeters
#[must_use]
pub fn feet_inches_to_cm(feet: u32, inches: f64) -> f64 {
    f64::from(feet).mul_add(CM_PER_FOOT, non_negative(inches) * CM_PER_INCH)
}

/// Weight rendered in the preferred unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayWeight {
    /// Numeric value in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: WeightUnit,
}

/// Height rendered in the preferred unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum DisplayHeight {
    /// Whole centimeters
    Cm {
        /// Rounded centimeters
        cm: u32,
    },
    /// Feet and inches
    Ft(FeetInches),
}

/// Volume rendered in the preferred unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayVolume {
    /// Numeric value in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: VolumeUnit,
}

/// Render a stored weight for display, to one decimal place
#[must_use]
pub fn display_weight(kg: f64, prefs: &UnitPreference) -> DisplayWeight {
    let value = match prefs.weight {
        WeightUnit::Kg => non_negative(kg),
        WeightUnit::Lbs => kg_to_lbs(kg),
    };
    DisplayWeight {
        value: round_to_tenth(value),
        unit: prefs.weight,
    }
}

/// Render a stored height for display
#[must_use]
pub fn display_height(cm: f64, prefs: &UnitPreference) -> DisplayHeight {
    match prefs.height {
        HeightUnit::Cm => DisplayHeight::Cm {
            cm: non_negative(cm).round() as u32,
        },
        HeightUnit::Ft => DisplayHeight::Ft(cm_to_feet_inches(cm)),
    }
}

/// Render a stored volume for display, ml whole and oz to one decimal place
#[must_use]
pub fn display_volume(ml: f64, prefs: &UnitPreference) -> DisplayVolume {
    let value = match prefs.volume {
        VolumeUnit::Ml => non_negative(ml).round(),
        VolumeUnit::Oz => round_to_tenth(ml_to_oz(ml)),
    };
    DisplayVolume {
        value,
        unit: prefs.volume,
    }
}

/// Convert a user-entered weight to kilograms
#[must_use]
pub fn to_metric_weight(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => non_negative(value),
        WeightUnit::Lbs => lbs_to_kg(value),
    }
}

/// Convert a user-entered height to centimeters
#[must_use]
pub fn to_metric_height(height: DisplayHeight) -> f64 {
    match height {
        DisplayHeight::Cm { cm } => f64::from(cm),
        DisplayHeight::Ft(FeetInches { feet, inches }) => {
            feet_inches_to_cm(feet, f64::from(inches))
        }
    }
}

/// Convert a user-entered volume to milliliters
#[must_use]
pub fn to_metric_volume(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Ml => non_negative(value),
        VolumeUnit::Oz => oz_to_ml(value),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
