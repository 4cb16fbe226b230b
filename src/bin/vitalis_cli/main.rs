// ABOUTME: Vitalis CLI - command-line front end for the health metrics engine
// ABOUTME: Computes energy targets, workout burn, vitality, cycle phase, conversions and daily reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors
//!
//! Usage:
//! ```bash
//! # Energy and macro targets for a profile (inline JSON or a file path)
//! vitalis-cli targets --profile '{"sex":"male","age":30,"weight_kg":80,"height_cm":180}'
//!
//! # Calories for a 45 minute workout at MET 8
//! vitalis-cli burn --weight 70 --minutes 45 --met 8
//!
//! # MET implied by an edited calorie count
//! vitalis-cli burn --weight 70 --minutes 30 --calories 300
//!
//! # Vitality score for a day
//! vitalis-cli vitality --steps 8000 --mood 4 --calories 1800 --calorie-goal 2000 --water 1500
//!
//! # Cycle or pregnancy phase
//! vitalis-cli phase --mode cycle --reference 2025-05-01 --now 2025-05-15
//!
//! # Unit conversion
//! vitalis-cli convert kg-to-lbs 80
//!
//! # Full daily report(s) from a snapshot file
//! vitalis-cli report --snapshot snapshot.json
//!
//! # Daily report from a profile plus raw logs
//! vitalis-cli daily --data user.json --date 2025-05-21
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use vitalis::logging::LoggingConfig;
use vitalis_core::errors::{AppError, AppResult};
use vitalis_intelligence::{default_catalog, CycleMode, EngineConfig, MetricsEngine};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "vitalis-cli",
    about = "Vitalis health metrics CLI",
    long_about = "Command-line front end for the Vitalis metrics engine: energy targets, workout calories, vitality, cycle phase and daily reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Energy and macro targets for a biometric profile
    Targets {
        /// Profile as inline JSON or a path to a JSON file
        #[arg(long)]
        profile: String,
    },

    /// Calories for a workout, or the MET implied by a calorie count
    #[command(group(ArgGroup::new("effort").required(true).args(["met", "calories"])))]
    Burn {
        /// Body weight (kg)
        #[arg(long)]
        weight: f64,

        /// Duration (minutes)
        #[arg(long)]
        minutes: f64,

        /// MET value of the activity
        #[arg(long)]
        met: Option<f64>,

        /// Calorie count entered by the user
        #[arg(long)]
        calories: Option<f64>,

        /// Emit a log entry for this day (YYYY-MM-DD) instead of the estimate
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Exercise name stored with the log entry
        #[arg(long, requires = "date")]
        name: Option<String>,
    },

    /// Composite vitality score for a day
    Vitality {
        /// Steps walked
        #[arg(long, default_value = "0")]
        steps: u32,

        /// Mood rating 1-5
        #[arg(long)]
        mood: Option<u8>,

        /// Calories eaten
        #[arg(long, default_value = "0")]
        calories: f64,

        /// Daily calorie target
        #[arg(long)]
        calorie_goal: f64,

        /// Water drunk (ml)
        #[arg(long, default_value = "0")]
        water: f64,

        /// Water goal (ml), defaults to the configured goal
        #[arg(long)]
        water_goal: Option<f64>,

        /// Step goal, defaults to the configured goal
        #[arg(long)]
        step_goal: Option<u32>,
    },

    /// Menstrual cycle phase or pregnancy progress
    Phase {
        /// Tracking mode
        #[arg(long, value_enum, default_value = "cycle")]
        mode: ModeArg,

        /// Last period start or conception date (YYYY-MM-DD)
        #[arg(long)]
        reference: NaiveDate,

        /// Evaluation date (YYYY-MM-DD), defaults to now
        #[arg(long)]
        now: Option<NaiveDate>,
    },

    /// Convert a value between metric and imperial units
    Convert {
        /// Conversion to perform
        #[arg(value_enum)]
        kind: ConversionKind,

        /// Value to convert
        value: f64,
    },

    /// Daily report(s) from a snapshot JSON file (one snapshot or an array)
    Report {
        /// Path to the snapshot file
        #[arg(long)]
        snapshot: PathBuf,
    },

    /// Daily report for one user from a profile-and-logs JSON file
    Daily {
        /// Path to the user data file
        #[arg(long)]
        data: PathBuf,

        /// Report date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Print the effective engine configuration
    Config,
}

/// Tracking mode accepted on the command line
#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Cycle,
    Pregnancy,
}

impl From<ModeArg> for CycleMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Cycle => Self::Cycle,
            ModeArg::Pregnancy => Self::Pregnancy,
        }
    }
}

/// Supported unit conversions
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ConversionKind {
    /// Kilograms to pounds
    KgToLbs,
    /// Pounds to kilograms
    LbsToKg,
    /// Milliliters to US fluid ounces
    MlToOz,
    /// US fluid ounces to milliliters
    OzToMl,
    /// Centimeters to feet and inches
    CmToFt,
    /// Decimal feet to centimeters
    FtToCm,
}

fn build_engine() -> Result<MetricsEngine> {
    let config = EngineConfig::load()?;
    Ok(MetricsEngine::new(Arc::new(config), default_catalog()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::for_cli(log_level)
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let engine = build_engine()?;
    debug!(catalog = engine.catalog().len(), "Metrics engine ready");

    match cli.command {
        Command::Targets { profile } => commands::metrics::targets(&engine, &profile),
        Command::Burn {
            weight,
            minutes,
            met,
            calories,
            date,
            name,
        } => commands::metrics::burn(
            &engine,
            commands::metrics::BurnArgs {
                weight_kg: weight,
                minutes,
                met,
                calories,
                date,
                name,
            },
        ),
        Command::Vitality {
            steps,
            mood,
            calories,
            calorie_goal,
            water,
            water_goal,
            step_goal,
        } => commands::metrics::vitality(
            &engine,
            commands::metrics::VitalityArgs {
                steps,
                mood,
                calories,
                calorie_goal,
                water,
                water_goal,
                step_goal,
            },
        ),
        Command::Phase {
            mode,
            reference,
            now,
        } => commands::metrics::phase(&engine, mode.into(), reference, now),
        Command::Convert { kind, value } => commands::convert::convert(kind, value),
        Command::Report { snapshot } => commands::report::report(&engine, &snapshot),
        Command::Daily { data, date } => commands::report::daily(engine, &data, date).await,
        Command::Config => helpers::display::print_json(engine.config()),
    }
}
