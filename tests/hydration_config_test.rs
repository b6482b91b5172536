// ABOUTME: Integration tests for hydration configuration defaults, env overrides and validation
// ABOUTME: Environment-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use hydration_planner::{
    config::hydration::{ConfigError, HydrationConfig},
    errors::{AppError, ErrorCode},
    intelligence::calculate_hydration_plan,
};
use serial_test::serial;
use std::env;

mod common;

/// Remove every override these tests touch
fn clear_overrides() {
    for name in [
        "HYDRATION_COOL_THRESHOLD_C",
        "HYDRATION_HOT_THRESHOLD_C",
        "HYDRATION_DURING_REPLACEMENT_FRACTION",
        "HYDRATION_POST_REPLACEMENT_FACTOR",
        "HYDRATION_SACHET_WATER_ML",
        "HYDRATION_PRE_ML_PER_KG",
        "HYDRATION_FREQUENT_INTAKE_HOURS",
        "HYDRATION_ELEVATION_GAIN_THRESHOLD_M",
    ] {
        env::remove_var(name);
    }
}

#[test]
fn test_defaults_are_valid() {
    let config = HydrationConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.sweat_rate.moderate_ml_per_hour, 800);
    assert_eq!(config.discipline_adjustments.swimming_percent, -15);
    assert!((config.during_activity.replacement_fraction - 0.70).abs() < f64::EPSILON);
    assert!((config.post_activity.water_ml_per_sachet - 2000.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_env_overrides_are_applied() {
    clear_overrides();
    env::set_var("HYDRATION_DURING_REPLACEMENT_FRACTION", "0.8");
    env::set_var("HYDRATION_PRE_ML_PER_KG", " 7 ");

    let config = HydrationConfig::load().unwrap();
    clear_overrides();

    assert!((config.during_activity.replacement_fraction - 0.8).abs() < f64::EPSILON);
    assert!((config.pre_activity.ml_per_kg - 7.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("HYDRATION_POST_REPLACEMENT_FACTOR", "lots");

    let result = HydrationConfig::load();
    clear_overrides();

    match result {
        Err(ConfigError::Parse(message)) => {
            assert!(message.contains("HYDRATION_POST_REPLACEMENT_FACTOR"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_inconsistent_override_fails_validation() {
    clear_overrides();
    env::set_var("HYDRATION_COOL_THRESHOLD_C", "30");

    let result = HydrationConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_nan_threshold_override_is_rejected() {
    clear_overrides();
    env::set_var("HYDRATION_HOT_THRESHOLD_C", "NaN");

    let result = HydrationConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_negative_recommendation_threshold_override_is_rejected() {
    clear_overrides();
    env::set_var("HYDRATION_FREQUENT_INTAKE_HOURS", "-5");

    let result = HydrationConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
fn test_non_finite_settings_fail_validation() {
    let mut config = HydrationConfig::default();
    config.pre_activity.full_sun_adjustment = f64::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = HydrationConfig::default();
    config.recommendations.thresholds.elevation_gain_m = f64::INFINITY;
    assert!(config.validate().is_err());

    let mut config = HydrationConfig::default();
    config.validation.weight_kg.max = f64::NAN;
    assert!(config.validate().is_err());

    let mut config = HydrationConfig::default();
    config.recommendations.thresholds.elevation_gain_m = -1.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_replacement_fraction_must_be_a_fraction() {
    let mut config = HydrationConfig::default();
    config.during_activity.replacement_fraction = 1.5;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    config.during_activity.replacement_fraction = 0.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_misordered_validation_bounds_rejected() {
    let mut config = HydrationConfig::default();
    config.validation.age_years.min = 200.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_config_errors_map_to_app_error_codes() {
    let parse: AppError = ConfigError::Parse("Invalid HYDRATION_PRE_ML_PER_KG".into()).into();
    assert_eq!(parse.code, ErrorCode::ConfigError);

    let invalid: AppError = ConfigError::InvalidRange("cool_threshold_c must be < hot_threshold_c").into();
    assert_eq!(invalid.code, ErrorCode::ConfigInvalid);
    assert!(!invalid.code.is_client_error());
}

#[test]
fn test_custom_config_drives_engine() {
    let mut config = HydrationConfig::default();
    config.sweat_rate.moderate_ml_per_hour = 1000;
    config.during_activity.replacement_fraction = 0.5;

    let plan = calculate_hydration_plan(&common::marathon_profile(), None, &config).unwrap();

    // 1000 ml/h base, +10% running
    assert_eq!(plan.sweat_rate_ml_per_hour, 1100);
    assert_eq!(plan.during_activity.water_ml_per_hour, 550);
}

#[test]
fn test_config_serializes_for_inspection() {
    let json = serde_json::to_value(HydrationConfig::default()).unwrap();
    assert_eq!(json["sweat_rate"]["hot_ml_per_hour"], 1100);
    assert_eq!(
        json["pre_activity"]["timing_label"],
        "2-4 hours before activity"
    );
}
