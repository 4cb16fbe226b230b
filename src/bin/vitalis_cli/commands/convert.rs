// ABOUTME: Unit conversion command for vitalis-cli
// ABOUTME: Converts weight, volume and height between metric and imperial units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

use crate::helpers::display::print_json;
use crate::ConversionKind;
use serde_json::{json, Value};
use vitalis_core::constants::units::INCHES_PER_FOOT;
use vitalis_core::errors::AppResult;
use vitalis_intelligence::conversion::{
    cm_to_feet_inches, feet_inches_to_cm, kg_to_lbs, lbs_to_kg, ml_to_oz, oz_to_ml,
};

fn converted(kind: ConversionKind, value: f64) -> Value {
    match kind {
        ConversionKind::KgToLbs => json!(kg_to_lbs(value)),
        ConversionKind::LbsToKg => json!(lbs_to_kg(value)),
        ConversionKind::MlToOz => json!(ml_to_oz(value)),
        ConversionKind::OzToMl => json!(oz_to_ml(value)),
        ConversionKind::CmToFt => json!(cm_to_feet_inches(value)),
        ConversionKind::FtToCm => {
            let feet = value.max(0.0);
            json!(feet_inches_to_cm(
                feet.floor() as u32,
                feet.fract() * f64::from(INCHES_PER_FOOT)
            ))
        }
    }
}

/// Print the conversion of `value`
pub fn convert(kind: ConversionKind, value: f64) -> AppResult<()> {
    print_json(&json!({
        "kind": format!("{kind:?}"),
        "input": value,
        "output": converted(kind, value),
    }))
}
