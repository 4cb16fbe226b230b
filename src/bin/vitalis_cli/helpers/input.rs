// ABOUTME: JSON input loading for vitalis-cli
// ABOUTME: Accepts inline JSON or a file path and maps IO and parse failures to AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use vitalis_core::errors::{AppError, AppResult};

/// Read and parse a JSON file
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
    })?;
    parse_json(&raw)
}

/// Parse `arg` as inline JSON when it looks like an object, otherwise as a file path
pub fn json_arg<T: DeserializeOwned>(arg: &str) -> AppResult<T> {
    if arg.trim_start().starts_with('{') {
        parse_json(arg)
    } else {
        read_json_file(Path::new(arg))
    }
}

fn parse_json<T: DeserializeOwned>(raw: &str) -> AppResult<T> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::invalid_input(format!("Invalid JSON input: {e}")).with_source(e))
}
