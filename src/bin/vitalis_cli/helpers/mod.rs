// ABOUTME: Helper modules for vitalis-cli
// ABOUTME: JSON input loading and output formatting shared by the commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

pub mod display;
pub mod input;
