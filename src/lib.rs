// ABOUTME: Main library entry point for the Vitalis health metrics application layer
// ABOUTME: Wires collaborator stores, the daily metrics service and logging around the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

#![deny(unsafe_code)]

//! # Vitalis
//!
//! Application layer around the `vitalis-intelligence` metrics engine. The engine
//! is pure and synchronous; this crate supplies everything around it: reading
//! profiles and logs from collaborator stores, persisting achievement unlocks,
//! structured logging and the `vitalis-cli` binary.
//!
//! ## Architecture
//!
//! - **providers**: async collaborator traits and an in-memory implementation
//! - **services**: daily metrics orchestration over the providers
//! - **logging**: tracing subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chrono::Utc;
//! use vitalis::providers::memory::InMemoryStore;
//! use vitalis::services::daily_metrics::DailyMetricsService;
//! use vitalis_core::errors::AppResult;
//! use vitalis_core::models::UserId;
//! use vitalis_intelligence::MetricsEngine;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = Arc::new(InMemoryStore::new());
//!     let service = DailyMetricsService::with_store(Arc::new(MetricsEngine::default()), store);
//!
//!     let now = Utc::now();
//!     let report = service.daily_report(UserId::new(), now.date_naive(), now).await?;
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//!     Ok(())
//! }
//! ```

/// Production logging and structured output
pub mod logging;

/// Collaborator traits for profiles, logs and achievement state
pub mod providers;

/// Domain service layer orchestrating the engine over the providers
pub mod services;

pub use vitalis_core::errors::{AppError, AppResult, ErrorCode};
pub use vitalis_intelligence::{DailyReport, DailySnapshot, EngineConfig, MetricsEngine};
