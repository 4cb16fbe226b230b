// ABOUTME: Configuration error types for engine configuration validation
// ABOUTME: Defines error variants for invalid ranges, parse failures and env access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

//! Configuration error types for engine configuration validation.

use std::env;
use thiserror::Error;
use vitalis_core::errors::AppError;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds out of order (e.g., phase boundaries not ascending)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable is set but not valid unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Two catalog entries share an id
    #[error("Duplicate achievement id: {0}")]
    DuplicateAchievement(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
