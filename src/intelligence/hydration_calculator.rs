// ABOUTME: Hydration plan engine turning an athlete profile into pre/during/post dosing
// ABOUTME: Sweat rate, fluid loss, water volumes, electrolyte sachets and ordered rationale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Hydration Plan Engine
//!
//! Deterministic, stateless computation of a three-phase hydration plan. Every
//! intermediate value is recorded in `calculation_steps` in computation order.
//!
//! # Algorithm
//!
//! 1. Base sweat rate from the mean training temperature (600 / 800 / 1100 ml/h)
//! 2. Primary-discipline percentage, rounded to whole ml/h
//! 3. Total loss = sweat rate x session hours
//! 4. Pre water = weight x 6 ml/kg x additive factor (terms summed, never compounded)
//! 5. Pre electrolytes = 1 sachet
//! 6. During water = 70% of hourly sweat rate, uncapped
//! 7. During electrolytes from the sweat-rate / saltiness decision table
//! 8. Post water = 150% of the unreplaced deficit (clamped at zero first)
//! 9. Post electrolytes = one sachet per 2 L of post water, minimum one
//!
//! # Scientific References
//!
//! - Sawka, M.N., et al. (2007). ACSM position stand: Exercise and fluid replacement.
//!   *Medicine & Science in Sports & Exercise*, 39(2), 377-390.
//!   <https://doi.org/10.1249/mss.0b013e31802ca597>
//! - Shirreffs, S.M., et al. (1996). Post-exercise rehydration in man.
//!   *Medicine & Science in Sports & Exercise*, 28(10), 1260-1271.
//!   <https://doi.org/10.1097/00005768-199610000-00009>

use tracing::{debug, warn};

use crate::config::hydration::HydrationConfig;
use hydration_core::errors::{AppError, AppResult};
use hydration_core::models::{
    Altitude, AthleteProfile, CrampTiming, Discipline, DuringActivityPlan, HydrationPlan, Level,
    PostActivityPlan, PreActivityPlan, SunExposure, WearableTelemetry,
};

/// Compute a plan using the process-wide configuration
///
/// # Errors
///
/// See [`calculate_hydration_plan`].
pub fn compute_plan(
    profile: &AthleteProfile,
    telemetry: Option<&WearableTelemetry>,
) -> AppResult<HydrationPlan> {
    calculate_hydration_plan(profile, telemetry, HydrationConfig::global())
}

/// Compute a three-phase hydration plan
///
/// Telemetry only marks the plan as enhanced; it never changes a number.
///
/// # Errors
///
/// Returns an error naming the offending field when `sessionDurationHours`
/// is absent or not positive, `weightKg` is not positive, or
/// `trainingTempRange` is not finite and ordered.
pub fn calculate_hydration_plan(
    profile: &AthleteProfile,
    telemetry: Option<&WearableTelemetry>,
    config: &HydrationConfig,
) -> AppResult<HydrationPlan> {
    let hours = check_preconditions(profile)?;
    let mut steps = Vec::new();

    let average_temp = profile.average_temperature_c();
    let discipline = profile.primary_discipline();
    if let Some(Discipline::Other(label)) = &discipline {
        warn!(discipline = %label, "Unknown primary discipline, no sweat rate adjustment applied");
    }

    // 1-2. Sweat rate
    let base_rate = config.sweat_rate.base_rate_for(average_temp);
    steps.push(format!(
        "Average temperature {average_temp:.1}°C: base sweat rate {base_rate} ml/h"
    ));
    let percent = discipline
        .as_ref()
        .map_or(0, |d| config.discipline_adjustments.percent_for(d));
    let sweat_rate = calculate_sweat_rate(base_rate, percent);
    steps.push(format!(
        "Discipline adjustment ({}): {percent:+}% -> sweat rate {sweat_rate} ml/h",
        discipline.as_ref().map_or("none", Discipline::as_str)
    ));

    // 3. Total loss
    let total_fluid_loss_ml = f64::from(sweat_rate) * hours;
    steps.push(format!(
        "Total fluid loss: {sweat_rate} ml/h x {hours:.2} h = {total_fluid_loss_ml:.0} ml"
    ));

    // 4-5. Pre-activity
    let pre_activity = pre_activity_plan(profile, discipline.as_ref(), hours, config, &mut steps);

    // 6-7. During activity
    let during_water = calculate_during_water(sweat_rate, config.during_activity.replacement_fraction);
    steps.push(format!(
        "During-activity water: {sweat_rate} ml/h x {:.0}% = {during_water} ml/h",
        config.during_activity.replacement_fraction * 100.0
    ));
    let during_sachets = config
        .electrolytes
        .per_hour_for(profile.sweat_rate, profile.sweat_saltiness);
    steps.push(format!(
        "During-activity electrolytes (sweat rate {}, saltiness {}): {during_sachets:.1} sachets/h",
        profile.sweat_rate, profile.sweat_saltiness
    ));

    // 8-9. Post activity
    let deficit = (total_fluid_loss_ml - f64::from(during_water) * hours).max(0.0);
    let post_water = (deficit * config.post_activity.replacement_factor).round() as u32;
    steps.push(format!(
        "Post-activity water: deficit {deficit:.0} ml x {:.0}% = {post_water} ml",
        config.post_activity.replacement_factor * 100.0
    ));
    let post_sachets = (f64::from(post_water) / config.post_activity.water_ml_per_sachet)
        .round()
        .max(config.post_activity.min_sachets);
    steps.push(format!(
        "Post-activity electrolytes: {post_sachets:.0} sachets (1 per {:.0} ml, minimum {:.0})",
        config.post_activity.water_ml_per_sachet, config.post_activity.min_sachets
    ));

    let enhanced = telemetry.is_some_and(WearableTelemetry::is_usable);
    let recommendations = build_recommendations(profile, hours, enhanced, config);

    debug!(
        sweat_rate,
        total_fluid_loss_ml,
        pre_water = pre_activity.water_ml,
        during_water,
        post_water,
        enhanced,
        "Calculated hydration plan"
    );

    Ok(HydrationPlan {
        pre_activity,
        during_activity: DuringActivityPlan {
            water_ml_per_hour: during_water,
            electrolyte_sachets_per_hour: during_sachets,
            frequency_label: config.during_activity.frequency_label.clone(),
        },
        post_activity: PostActivityPlan {
            water_ml: post_water,
            electrolyte_sachets: post_sachets,
            timing_label: config.post_activity.timing_label.clone(),
        },
        sweat_rate_ml_per_hour: sweat_rate,
        total_fluid_loss_ml,
        enhanced,
        recommendations,
        calculation_steps: steps,
    })
}

/// Apply a whole-percent adjustment to a base sweat rate, rounding to ml/h
#[must_use]
pub fn calculate_sweat_rate(base_ml_per_hour: u32, percent: i32) -> u32 {
    let adjusted = f64::from(base_ml_per_hour) * f64::from(100 + percent) / 100.0;
    adjusted.round().max(0.0) as u32
}

/// Hourly during-activity water for a sweat rate and replacement fraction
#[must_use]
pub fn calculate_during_water(sweat_rate_ml_per_hour: u32, replacement_fraction: f64) -> u32 {
    (f64::from(sweat_rate_ml_per_hour) * replacement_fraction).round() as u32
}

/// Validated session duration, or the first violated precondition
fn check_preconditions(profile: &AthleteProfile) -> AppResult<f64> {
    let hours = profile
        .session_duration_hours
        .ok_or_else(|| AppError::missing_field("sessionDurationHours"))?;
    if !is_positive(hours) {
        return Err(AppError::out_of_range(
            "sessionDurationHours",
            format!("sessionDurationHours must be a positive number of hours, got {hours}"),
        ));
    }

    if !is_positive(profile.weight_kg) {
        return Err(AppError::out_of_range(
            "weightKg",
            format!("weightKg must be positive, got {}", profile.weight_kg),
        ));
    }

    let range = profile.training_temp_range_c;
    if !range.is_resolved() {
        return Err(AppError::out_of_range(
            "trainingTempRange",
            format!(
                "trainingTempRange must be finite with min <= max, got {}..{}",
                range.min, range.max
            ),
        ));
    }

    Ok(hours)
}

/// Pre-activity water with its additive adjustment factor
fn pre_activity_plan(
    profile: &AthleteProfile,
    discipline: Option<&Discipline>,
    hours: f64,
    config: &HydrationConfig,
    steps: &mut Vec<String>,
) -> PreActivityPlan {
    let pre = &config.pre_activity;
    let thresholds = &config.sweat_rate;
    let average_temp = profile.average_temperature_c();

    let base = profile.weight_kg * pre.ml_per_kg;
    steps.push(format!(
        "Pre-activity base: {:.1} kg x {} ml/kg = {base:.0} ml",
        profile.weight_kg, pre.ml_per_kg
    ));

    let mut adjustments: Vec<(&str, f64)> = Vec::new();
    if average_temp > thresholds.hot_threshold_c {
        adjustments.push(("hot conditions", pre.hot_adjustment));
    } else if average_temp < thresholds.cool_threshold_c {
        adjustments.push(("cool conditions", pre.cool_adjustment));
    }
    match discipline {
        Some(Discipline::Running | Discipline::Triathlon) => {
            adjustments.push(("running/triathlon", pre.running_adjustment));
        }
        Some(Discipline::Swimming) => adjustments.push(("swimming", pre.swimming_adjustment)),
        _ => {}
    }
    if hours >= pre.long_session_hours {
        adjustments.push(("long session", pre.long_session_adjustment));
    } else if hours >= pre.medium_session_hours {
        adjustments.push(("medium session", pre.medium_session_adjustment));
    }
    match profile.altitude {
        Altitude::High => adjustments.push(("high altitude", pre.high_altitude_adjustment)),
        Altitude::Moderate => {
            adjustments.push(("moderate altitude", pre.moderate_altitude_adjustment));
        }
        Altitude::SeaLevel => {}
    }
    if profile.sun_exposure == SunExposure::FullSun {
        adjustments.push(("full sun", pre.full_sun_adjustment));
    }

    let mut factor = 1.0;
    for (reason, adjustment) in &adjustments {
        factor += adjustment;
        steps.push(format!(
            "Pre-activity adjustment ({reason}): {}",
            format_percent(*adjustment)
        ));
    }

    let water_ml = (base * factor).round() as u32;
    steps.push(format!(
        "Pre-activity net adjustment {}: {water_ml} ml",
        format_percent(factor - 1.0)
    ));
    steps.push(format!(
        "Pre-activity electrolytes: {:.0} sachet",
        pre.electrolyte_sachets
    ));

    PreActivityPlan {
        timing_label: pre.timing_label.clone(),
        water_ml,
        electrolyte_sachets: pre.electrolyte_sachets,
    }
}

/// Ordered rationale: conditional notes, fixed trailing notes, then the telemetry note
fn build_recommendations(
    profile: &AthleteProfile,
    hours: f64,
    enhanced: bool,
    config: &HydrationConfig,
) -> Vec<String> {
    let messages = &config.recommendations.messages;
    let thresholds = &config.recommendations.thresholds;

    let conditional = [
        (
            profile.sweat_rate == Level::High || profile.sweat_saltiness == Level::High,
            &messages.electrolyte_attention,
        ),
        (
            profile.average_temperature_c() > config.sweat_rate.hot_threshold_c,
            &messages.heat,
        ),
        (hours > thresholds.frequent_intake_hours, &messages.frequent_intake),
        (profile.altitude != Altitude::SeaLevel, &messages.altitude),
        (profile.sun_exposure == SunExposure::FullSun, &messages.sun),
        (
            profile
                .elevation_gain_m
                .is_some_and(|gain| gain > thresholds.elevation_gain_m),
            &messages.elevation,
        ),
        (profile.cramp_timing != CrampTiming::None, &messages.cramps),
        (profile.daily_salt_intake == Level::Low, &messages.low_salt),
    ];

    let mut recommendations: Vec<String> = conditional
        .into_iter()
        .filter_map(|(applies, message)| applies.then(|| message.clone()))
        .collect();

    recommendations.extend([
        messages.urine_color.clone(),
        messages.sachet_composition.clone(),
        messages.no_mixing.clone(),
    ]);

    if enhanced {
        recommendations.push(messages.telemetry_enhanced.clone());
    }

    recommendations
}

fn format_percent(fraction: f64) -> String {
    format!("{:+.0}%", fraction * 100.0)
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
