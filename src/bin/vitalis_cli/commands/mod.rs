// ABOUTME: Re-exports command modules for vitalis-cli
// ABOUTME: Provides access to metric, conversion and report commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

pub mod convert;
pub mod metrics;
pub mod report;
