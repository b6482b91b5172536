// ABOUTME: Integration tests for the hydration plan engine
// ABOUTME: Covers literal scenarios, bucket edges, decision tables, preconditions and rationale order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Hydration plan engine tests
//!
//! - Marathon and cold-swim literal plans
//! - Temperature bucket edges (18 and 25 inclusive for the moderate band)
//! - Electrolyte decision table and post-activity sachet floor
//! - Total-loss identity and idempotence
//! - Precondition failures naming the offending field
//! - Recommendation ordering and the telemetry note

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use hydration_planner::{
    config::HydrationConfig,
    errors::ErrorCode,
    intelligence::{calculate_hydration_plan, compute_plan},
    models::{Altitude, CrampTiming, Level, SunExposure, WearableTelemetry},
    validation::validate_profile_json,
};
use serde_json::json;

mod common;

// ============================================================================
// LITERAL SCENARIOS
// ============================================================================

#[test]
fn test_marathon_plan_literal() {
    let config = HydrationConfig::default();
    let plan = calculate_hydration_plan(&common::marathon_profile(), None, &config).unwrap();

    assert_eq!(plan.sweat_rate_ml_per_hour, 880);
    common::assert_close(plan.total_fluid_loss_ml, 3080.0, 1e-9);
    assert_eq!(plan.pre_activity.water_ml, 588);
    common::assert_close(plan.pre_activity.electrolyte_sachets, 1.0, 0.0);
    assert_eq!(plan.during_activity.water_ml_per_hour, 616);
    common::assert_close(plan.during_activity.electrolyte_sachets_per_hour, 1.0, 0.0);
    assert_eq!(plan.post_activity.water_ml, 1386);
    common::assert_close(plan.post_activity.electrolyte_sachets, 1.0, 0.0);

    assert_eq!(plan.pre_activity.timing_label, "2-4 hours before activity");
    assert_eq!(plan.during_activity.frequency_label, "Every 15-20 minutes");
    assert_eq!(plan.post_activity.timing_label, "Within 2 hours after activity");
    assert!(!plan.enhanced);
}

#[test]
fn test_marathon_plan_from_literal_json_profile() {
    let config = HydrationConfig::default();
    let input = json!({
        "age": 35,
        "sex": "male",
        "weightKg": 70,
        "disciplines": ["Running"],
        "sessionDurationHours": 3.5,
        "trainingTempRange": { "min": 18, "max": 22 },
        "sweatRate": "medium",
        "sweatSaltiness": "medium",
        "altitude": "sea-level",
        "sunExposure": "partial",
        "dailySaltIntake": "medium"
    });
    let profile = validate_profile_json(&input, &config.validation).unwrap();
    let plan = calculate_hydration_plan(&profile, None, &config).unwrap();

    assert_eq!(plan.sweat_rate_ml_per_hour, 880);
    common::assert_close(plan.total_fluid_loss_ml, 3080.0, 1e-9);
    assert_eq!(plan.during_activity.water_ml_per_hour, 616);
    common::assert_close(plan.during_activity.electrolyte_sachets_per_hour, 1.0, 0.0);
}

#[test]
fn test_cold_swim_plan_literal() {
    let config = HydrationConfig::default();
    let plan = calculate_hydration_plan(&common::cold_swim_profile(), None, &config).unwrap();

    // 600 ml/h base, -15% for swimming
    assert_eq!(plan.sweat_rate_ml_per_hour, 510);
    // 60 kg x 6 ml/kg x (1 - 0.10 cool - 0.15 swimming)
    assert_eq!(plan.pre_activity.water_ml, 270);
    assert_eq!(plan.during_activity.water_ml_per_hour, 357);
    // (510 - 357) x 1.5 = 229.5
    assert_eq!(plan.post_activity.water_ml, 230);
    common::assert_close(plan.post_activity.electrolyte_sachets, 1.0, 0.0);
}

#[test]
fn test_pre_activity_steps_record_each_adjustment() {
    let config = HydrationConfig::default();
    let plan = calculate_hydration_plan(&common::marathon_profile(), None, &config).unwrap();

    let steps = &plan.calculation_steps;
    assert!(steps
        .iter()
        .any(|s| s == "Pre-activity adjustment (running/triathlon): +15%"));
    assert!(steps
        .iter()
        .any(|s| s == "Pre-activity adjustment (long session): +25%"));
    assert!(steps
        .iter()
        .any(|s| s == "Pre-activity net adjustment +40%: 588 ml"));
    assert!(
        !steps.iter().any(|s| s.contains("conditions")),
        "moderate temperature applies no temperature term"
    );
}

#[test]
fn test_steps_follow_computation_order() {
    let config = HydrationConfig::default();
    let plan = calculate_hydration_plan(&common::marathon_profile(), None, &config).unwrap();

    let position = |prefix: &str| {
        plan.calculation_steps
            .iter()
            .position(|s| s.starts_with(prefix))
            .unwrap_or_else(|| panic!("missing step {prefix}"))
    };
    assert!(position("Average temperature") < position("Discipline adjustment"));
    assert!(position("Discipline adjustment") < position("Total fluid loss"));
    assert!(position("Total fluid loss") < position("Pre-activity base"));
    assert!(position("Pre-activity electrolytes") < position("During-activity water"));
    assert!(position("During-activity electrolytes") < position("Post-activity water"));
    assert!(position("Post-activity water") < position("Post-activity electrolytes"));
}

// ============================================================================
// TEMPERATURE BUCKETS
// ============================================================================

fn cycling_sweat_rate(min_c: f64, max_c: f64) -> u32 {
    let profile = common::base_builder("Cycling", min_c, max_c)
        .session_duration_hours(1.0)
        .build()
        .unwrap();
    calculate_hydration_plan(&profile, None, &HydrationConfig::default())
        .unwrap()
        .sweat_rate_ml_per_hour
}

#[test]
fn test_temperature_bucket_edges() {
    assert_eq!(cycling_sweat_rate(17.99, 17.99), 600);
    assert_eq!(cycling_sweat_rate(18.0, 18.0), 800);
    assert_eq!(cycling_sweat_rate(25.0, 25.0), 800);
    assert_eq!(cycling_sweat_rate(25.0001, 25.0001), 1100);
}

#[test]
fn test_average_temperature_not_extremes_selects_bucket() {
    // 10..40 averages to exactly 25, the top of the moderate band
    assert_eq!(cycling_sweat_rate(10.0, 40.0), 800);
}

#[test]
fn test_unknown_discipline_gets_no_adjustment() {
    let profile = common::base_builder("Underwater Hockey", 20.0, 20.0)
        .session_duration_hours(1.0)
        .build()
        .unwrap();
    let plan = calculate_hydration_plan(&profile, None, &HydrationConfig::default()).unwrap();
    assert_eq!(plan.sweat_rate_ml_per_hour, 800);
}

#[test]
fn test_low_intensity_disciplines_reduce_sweat_rate() {
    for discipline in ["Gym", "CrossFit", "Walking", "Hiking"] {
        let profile = common::base_builder(discipline, 20.0, 20.0)
            .session_duration_hours(1.0)
            .build()
            .unwrap();
        let plan = calculate_hydration_plan(&profile, None, &HydrationConfig::default()).unwrap();
        assert_eq!(plan.sweat_rate_ml_per_hour, 640, "{discipline}");
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_total_fluid_loss_identity() {
    let config = HydrationConfig::default();
    for hours in [0.25, 1.0, 2.5, 7.75, 24.0] {
        let profile = common::marathon_profile().with_session_duration(hours);
        let plan = calculate_hydration_plan(&profile, None, &config).unwrap();
        common::assert_close(
            plan.total_fluid_loss_ml,
            f64::from(plan.sweat_rate_ml_per_hour) * hours,
            1e-9,
        );
    }
}

#[test]
fn test_pre_electrolytes_constant_and_post_floor() {
    let config = HydrationConfig::default();
    for hours in [0.25, 0.5, 1.0, 4.0] {
        let profile = common::cold_swim_profile().with_session_duration(hours);
        let plan = calculate_hydration_plan(&profile, None, &config).unwrap();
        common::assert_close(plan.pre_activity.electrolyte_sachets, 1.0, 0.0);
        assert!(plan.post_activity.electrolyte_sachets >= 1.0);
    }
}

#[test]
fn test_post_sachets_scale_with_long_hot_sessions() {
    let profile = common::base_builder("Running", 30.0, 30.0)
        .session_duration_hours(10.0)
        .build()
        .unwrap();
    let plan = calculate_hydration_plan(&profile, None, &HydrationConfig::default()).unwrap();

    assert_eq!(plan.sweat_rate_ml_per_hour, 1210);
    assert_eq!(plan.during_activity.water_ml_per_hour, 847);
    assert_eq!(plan.post_activity.water_ml, 5445);
    common::assert_close(plan.post_activity.electrolyte_sachets, 3.0, 0.0);
}

#[test]
fn test_during_electrolyte_decision_table() {
    let config = HydrationConfig::default();
    let allowed = [0.5, 1.0, 1.5, 2.0];

    for &rate in Level::ALL {
        for &saltiness in Level::ALL {
            let profile = common::base_builder("Cycling", 20.0, 20.0)
                .session_duration_hours(1.0)
                .sweat_rate(rate)
                .sweat_saltiness(saltiness)
                .build()
                .unwrap();
            let value = calculate_hydration_plan(&profile, None, &config)
                .unwrap()
                .during_activity
                .electrolyte_sachets_per_hour;

            assert!(allowed.contains(&value), "{rate}/{saltiness} gave {value}");
            let expected = match (rate, saltiness) {
                (Level::High, Level::High) => 2.0,
                (Level::High, _) | (_, Level::High) => 1.5,
                (Level::Low, Level::Low) => 0.5,
                _ => 1.0,
            };
            common::assert_close(value, expected, 0.0);
        }
    }
}

#[test]
fn test_plan_is_idempotent_and_profile_untouched() {
    let config = HydrationConfig::default();
    let profile = common::marathon_profile();
    let before = profile.clone();

    let first = calculate_hydration_plan(&profile, None, &config).unwrap();
    let second = calculate_hydration_plan(&profile, None, &config).unwrap();

    assert_eq!(first, second);
    assert_eq!(profile, before);
}

#[test]
fn test_during_water_is_not_capped() {
    let profile = common::base_builder("Running", 35.0, 40.0)
        .session_duration_hours(6.0)
        .sweat_rate(Level::High)
        .build()
        .unwrap();
    let plan = calculate_hydration_plan(&profile, None, &HydrationConfig::default()).unwrap();
    assert_eq!(plan.during_activity.water_ml_per_hour, 847);
}

// ============================================================================
// PRECONDITIONS
// ============================================================================

#[test]
fn test_missing_session_duration_names_field() {
    let profile = common::base_builder("Running", 15.0, 20.0).build().unwrap();
    let error = calculate_hydration_plan(&profile, None, &HydrationConfig::default()).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.field(), Some("sessionDurationHours"));
}

#[test]
fn test_non_positive_or_non_finite_duration_rejected() {
    for hours in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let profile = common::marathon_profile().with_session_duration(hours);
        let error =
            calculate_hydration_plan(&profile, None, &HydrationConfig::default()).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.field(), Some("sessionDurationHours"));
    }
}

#[test]
fn test_non_positive_weight_rejected() {
    let profile = common::base_builder("Running", 15.0, 20.0)
        .weight_kg(0.0)
        .session_duration_hours(1.0)
        .build()
        .unwrap();
    let error = calculate_hydration_plan(&profile, None, &HydrationConfig::default()).unwrap_err();
    assert_eq!(error.field(), Some("weightKg"));
}

#[test]
fn test_inverted_temperature_range_rejected() {
    let profile = common::base_builder("Running", 25.0, 15.0)
        .session_duration_hours(1.0)
        .build()
        .unwrap();
    let error = calculate_hydration_plan(&profile, None, &HydrationConfig::default()).unwrap_err();
    assert_eq!(error.field(), Some("trainingTempRange"));
    assert!(error.code.is_client_error());
}

// ============================================================================
// RECOMMENDATIONS
// ============================================================================

#[test]
fn test_minimal_plan_has_only_trailing_notes() {
    let config = HydrationConfig::default();
    let messages = &config.recommendations.messages;
    let plan = calculate_hydration_plan(&common::cold_swim_profile(), None, &config).unwrap();

    assert_eq!(
        plan.recommendations,
        vec![
            messages.urine_color.clone(),
            messages.sachet_composition.clone(),
            messages.no_mixing.clone(),
        ]
    );
}

#[test]
fn test_recommendations_follow_fixed_order() {
    let config = HydrationConfig::default();
    let messages = &config.recommendations.messages;
    let profile = common::base_builder("Running", 28.0, 34.0)
        .session_duration_hours(3.0)
        .sweat_saltiness(Level::High)
        .altitude(Altitude::High)
        .sun_exposure(SunExposure::FullSun)
        .elevation_gain_m(800.0)
        .cramp_timing(CrampTiming::Late)
        .daily_salt_intake(Level::Low)
        .build()
        .unwrap();
    let telemetry = WearableTelemetry::new(Some("garmin".into()), json!({ "avgHr": 152 }));

    let plan = calculate_hydration_plan(&profile, Some(&telemetry), &config).unwrap();

    assert_eq!(
        plan.recommendations,
        vec![
            messages.electrolyte_attention.clone(),
            messages.heat.clone(),
            messages.frequent_intake.clone(),
            messages.altitude.clone(),
            messages.sun.clone(),
            messages.elevation.clone(),
            messages.cramps.clone(),
            messages.low_salt.clone(),
            messages.urine_color.clone(),
            messages.sachet_composition.clone(),
            messages.no_mixing.clone(),
            messages.telemetry_enhanced.clone(),
        ]
    );
}

#[test]
fn test_recommendation_thresholds_are_strict() {
    let config = HydrationConfig::default();
    let messages = &config.recommendations.messages;
    let profile = common::base_builder("Cycling", 25.0, 25.0)
        .session_duration_hours(2.0)
        .elevation_gain_m(500.0)
        .build()
        .unwrap();
    let plan = calculate_hydration_plan(&profile, None, &config).unwrap();

    assert!(!plan.recommendations.contains(&messages.heat));
    assert!(!plan.recommendations.contains(&messages.frequent_intake));
    assert!(!plan.recommendations.contains(&messages.elevation));
}

#[test]
fn test_sachet_composition_mentions_sodium_dose() {
    let config = HydrationConfig::default();
    let plan = calculate_hydration_plan(&common::marathon_profile(), None, &config).unwrap();
    assert!(plan
        .recommendations
        .iter()
        .any(|r| r.contains("500 mg of sodium")));
}

// ============================================================================
// TELEMETRY
// ============================================================================

#[test]
fn test_telemetry_never_changes_numbers() {
    let config = HydrationConfig::default();
    let profile = common::marathon_profile();
    let telemetry = WearableTelemetry::new(None, json!([{ "hr": 140 }, { "hr": 150 }]));

    let plain = calculate_hydration_plan(&profile, None, &config).unwrap();
    let enhanced = calculate_hydration_plan(&profile, Some(&telemetry), &config).unwrap();

    assert!(enhanced.enhanced);
    assert_eq!(plain.pre_activity, enhanced.pre_activity);
    assert_eq!(plain.during_activity, enhanced.during_activity);
    assert_eq!(plain.post_activity, enhanced.post_activity);
    assert_eq!(
        enhanced.recommendations.last(),
        Some(&config.recommendations.messages.telemetry_enhanced)
    );
}

#[test]
fn test_empty_or_malformed_telemetry_is_ignored() {
    let config = HydrationConfig::default();
    let profile = common::marathon_profile();
    let plain = calculate_hydration_plan(&profile, None, &config).unwrap();

    for data in [json!({}), json!([]), json!(null), json!("garbage"), json!(42)] {
        let telemetry = WearableTelemetry::new(Some("file".into()), data);
        let plan = calculate_hydration_plan(&profile, Some(&telemetry), &config).unwrap();
        assert_eq!(plan, plain);
    }
}

// ============================================================================
// OUTPUT CONTRACT
// ============================================================================

#[test]
fn test_plan_serializes_with_stable_names() {
    let plan = compute_plan(&common::marathon_profile(), None).unwrap();
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["preActivity"]["waterMl"], 588);
    assert_eq!(json["duringActivity"]["waterMlPerHour"], 616);
    assert_eq!(json["duringActivity"]["electrolyteSachetsPerHour"], 1.0);
    assert_eq!(json["postActivity"]["timingLabel"], "Within 2 hours after activity");
    assert_eq!(json["totalFluidLossMl"], 3080.0);
    assert!(json["calculationSteps"].is_array());
}
