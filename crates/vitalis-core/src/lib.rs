// ABOUTME: Core types and constants for the Vitalis health metrics platform
// ABOUTME: Foundation crate with error handling, unit constants, and value models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

#![deny(unsafe_code)]

//! # Vitalis Core
//!
//! Foundation crate providing shared types and constants for the Vitalis health
//! metrics platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Unit conversion factors and physiological constants
//! - **models**: Value snapshots consumed by the metrics engine (profiles, daily aggregates,
//!   raw log entries, achievement state)

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversion factors and time constants
pub mod constants;

/// Value models consumed by the metrics engine
pub mod models;
