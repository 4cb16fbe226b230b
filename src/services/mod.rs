// ABOUTME: Domain service layer orchestrating the metrics engine over collaborator stores
// ABOUTME: Provides protocol-agnostic services reusable from the CLI or any future transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

//! Domain service layer
//!
//! Services read from the providers, hand plain snapshots to the engine and
//! persist what the engine proposes. They own all logging and error mapping.

/// Daily report orchestration: snapshot assembly, evaluation, unlock persistence
pub mod daily_metrics;
