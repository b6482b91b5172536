// ABOUTME: Main library entry point for the hydration planner
// ABOUTME: Turns athlete profiles into pre/during/post fluid and electrolyte plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Hydration Planner
//!
//! A deterministic hydration-plan engine for endurance athletes. Given an
//! athlete profile (and optionally wearable telemetry) it produces a
//! three-phase fluid and electrolyte plan with an ordered rationale and a
//! step-by-step calculation log.
//!
//! ## Architecture
//!
//! - **`hydration_core`**: errors, models and constants shared by everything
//! - **Validation**: gates untrusted profile input and sanitizes free text
//! - **Intelligence**: pace conversion, triathlon segments, session duration
//!   resolution and the plan engine
//! - **Config**: engine constants with environment overrides
//! - **Logging**: optional `tracing` subscriber setup for host applications
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use hydration_planner::config::HydrationConfig;
//! use hydration_planner::errors::AppResult;
//! use hydration_planner::intelligence::{calculate_hydration_plan, with_resolved_duration};
//! use hydration_planner::models::{AthleteProfile, Sex};
//!
//! fn main() -> AppResult<()> {
//!     let profile = AthleteProfile::builder()
//!         .age(35)
//!         .sex(Sex::Male)
//!         .weight_kg(70.0)
//!         .discipline("Running")
//!         .training_temp_range(15.0, 25.0)
//!         .race_distance("Marathon")
//!         .run_pace("5:00")
//!         .build()?;
//!
//!     let profile = with_resolved_duration(&profile).unwrap_or(profile);
//!     let plan = calculate_hydration_plan(&profile, None, HydrationConfig::global())?;
//!     println!("Drink {} ml per hour", plan.during_activity.water_ml_per_hour);
//!     Ok(())
//! }
//! ```

/// Engine configuration with defaults and environment overrides
pub mod config;

/// Hydration derivation algorithms
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Profile validation and sanitization
pub mod validation;

/// Re-exported foundation types
pub use hydration_core::{constants, errors, models};

pub use config::HydrationConfig;
pub use errors::{AppError, AppResult, ErrorCode};
pub use intelligence::{calculate_hydration_plan, compute_plan};
pub use models::{AthleteProfile, HydrationPlan, WearableTelemetry};
pub use validation::{
    sanitize_text, validate_profile, validate_profile_json, validate_profile_str, FieldViolation,
    ProfileValidationError,
};
