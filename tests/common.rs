// ABOUTME: Shared test utilities and profile fixtures for integration tests
// ABOUTME: Provides quiet tracing setup and representative athlete profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `hydration_planner`

use hydration_planner::models::{AthleteProfile, AthleteProfileBuilder, Sex};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Required fields only; everything else defaulted
pub fn base_builder(discipline: &str, min_c: f64, max_c: f64) -> AthleteProfileBuilder {
    AthleteProfile::builder()
        .age(35)
        .sex(Sex::Male)
        .weight_kg(70.0)
        .discipline(discipline)
        .training_temp_range(min_c, max_c)
}

/// 70 kg runner, 18-22 °C, 3.5 h marathon at sea level in partial sun
pub fn marathon_profile() -> AthleteProfile {
    init_test_logging();
    base_builder("Running", 18.0, 22.0)
        .session_duration_hours(3.5)
        .race_distance("Marathon")
        .build()
        .unwrap()
}

/// 60 kg swimmer, 10-20 °C (avg 15), one hour
pub fn cold_swim_profile() -> AthleteProfile {
    init_test_logging();
    base_builder("Swimming", 10.0, 20.0)
        .weight_kg(60.0)
        .session_duration_hours(1.0)
        .build()
        .unwrap()
}

/// Olympic triathlete with all three leg paces
pub fn olympic_triathlon_profile() -> AthleteProfile {
    init_test_logging();
    base_builder("Triathlon", 18.0, 24.0)
        .race_distance("Olympic")
        .swim_pace("1:45")
        .bike_speed("30 km/h")
        .run_pace("5:00")
        .build()
        .unwrap()
}

/// Assert two floats are within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
