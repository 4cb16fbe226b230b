// ABOUTME: Output formatting helpers for vitalis-cli
// ABOUTME: Every command prints one pretty JSON document to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

use serde::Serialize;
use vitalis_core::errors::AppResult;

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
