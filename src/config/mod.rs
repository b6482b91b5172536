// ABOUTME: Configuration management module for hydration engine parameters
// ABOUTME: Exposes the hydration config with its defaults, env overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the hydration planner
//!
//! - **Hydration**: sweat buckets, discipline percentages, intake phases,
//!   electrolyte table, recommendation thresholds and validation bounds

/// Hydration engine and validator configuration
pub mod hydration;

pub use hydration::{ConfigError, HydrationConfig};
