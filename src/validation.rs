// ABOUTME: Profile validator and sanitizer gating untrusted input before the engine runs
// ABOUTME: Aggregates field violations for range, enum and required checks and strips markup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Profile Validation
//!
//! A gate, not a calculation: every violation is collected (never just the
//! first) and reported as `"field: message"`. On success the sanitized profile
//! is returned with the same shape it came in with.
//!
//! Sanitization strips `<` and `>`, trims whitespace, and caps free text at
//! 200 characters and discipline labels at 50. Empty discipline entries are
//! dropped and at most 10 disciplines are kept.

use serde::Serialize;
use serde_json::{json, Map, Value};
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::config::hydration::{Bounds, ValidationLimits};
use hydration_core::errors::{AppError, AppResult};
use hydration_core::models::{
    Altitude, AthleteProfile, ClothingType, CrampTiming, Level, ProfileDefaults, Sex,
    SunExposure, TemperatureRange, TrainingLocation, WindConditions,
};

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// camelCase field path, e.g. `trainingTempRange.min`
    pub field: String,
    /// What is wrong with it
    pub message: String,
}

impl FieldViolation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every violation found in a profile
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Profile validation failed: {}", render(.violations))]
pub struct ProfileValidationError {
    violations: Vec<FieldViolation>,
}

impl ProfileValidationError {
    /// Violations in the order they were found
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// `"field: message"` strings
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Whether a given field was rejected
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl From<ProfileValidationError> for AppError {
    fn from(error: ProfileValidationError) -> Self {
        let details = json!({ "violations": error.violations });
        Self::invalid_input(error.to_string()).with_details(details)
    }
}

fn render(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Strip angle brackets, trim, and cap at `max_chars` characters
#[must_use]
pub fn sanitize_text(text: &str, max_chars: usize) -> String {
    let stripped: String = text.chars().filter(|c| !matches!(c, '<' | '>')).collect();
    let capped: String = stripped.trim().chars().take(max_chars).collect();
    capped.trim_end().to_owned()
}

/// Validate and sanitize a typed profile
///
/// # Errors
///
/// Returns every range and required-ness violation found.
pub fn validate_profile(
    profile: &AthleteProfile,
    limits: &ValidationLimits,
) -> Result<AthleteProfile, ProfileValidationError> {
    let sanitized = sanitize_profile(profile, limits);
    let mut violations = Vec::new();

    if sanitized.disciplines.is_empty() {
        violations.push(FieldViolation::new(
            "disciplines",
            "at least one discipline is required",
        ));
    }

    check_range(&mut violations, "age", Some(f64::from(sanitized.age)), limits.age_years);
    check_range(&mut violations, "weightKg", Some(sanitized.weight_kg), limits.weight_kg);
    check_range(&mut violations, "heightCm", sanitized.height_cm, limits.height_cm);
    check_range(
        &mut violations,
        "sessionDurationHours",
        sanitized.session_duration_hours,
        limits.session_hours,
    );

    let range = sanitized.training_temp_range_c;
    check_range(
        &mut violations,
        "trainingTempRange.min",
        Some(range.min),
        limits.temperature_c,
    );
    check_range(
        &mut violations,
        "trainingTempRange.max",
        Some(range.max),
        limits.temperature_c,
    );
    if range.min.is_finite() && range.max.is_finite() && range.min > range.max {
        violations.push(FieldViolation::new(
            "trainingTempRange",
            "min must not exceed max",
        ));
    }

    check_range(
        &mut violations,
        "humidityPct",
        Some(sanitized.humidity_pct),
        limits.humidity_pct,
    );
    check_range(
        &mut violations,
        "caffeineIntakeMg",
        sanitized.caffeine_intake_mg,
        limits.caffeine_mg,
    );
    check_range(
        &mut violations,
        "elevationGainM",
        sanitized.elevation_gain_m,
        limits.elevation_gain_m,
    );
    check_range(&mut violations, "altitudeM", sanitized.altitude_m, limits.altitude_m);

    if violations.is_empty() {
        Ok(sanitized)
    } else {
        debug!(count = violations.len(), "Profile failed validation");
        Err(ProfileValidationError { violations })
    }
}

/// Validate a raw JSON request body into a sanitized profile
///
/// # Errors
///
/// Returns `SerializationError` when the text is not JSON and `InvalidInput`
/// (violations in the details) when the profile fails validation.
pub fn validate_profile_str(text: &str, limits: &ValidationLimits) -> AppResult<AthleteProfile> {
    let value: Value = serde_json::from_str(text)?;
    Ok(validate_profile_json(&value, limits)?)
}

/// Validate untrusted JSON into a sanitized profile
///
/// Type, enum and required-field problems are collected for every field
/// first; range validation only runs once the profile could be assembled.
///
/// # Errors
///
/// Returns every violation found at the first stage that reported any.
pub fn validate_profile_json(
    value: &Value,
    limits: &ValidationLimits,
) -> Result<AthleteProfile, ProfileValidationError> {
    let Some(object) = value.as_object() else {
        return Err(ProfileValidationError {
            violations: vec![FieldViolation::new("profile", "must be a JSON object")],
        });
    };

    let mut reader = FieldReader::new(object);
    let profile = reader.read_profile();

    match profile {
        Some(profile) if reader.violations.is_empty() => validate_profile(&profile, limits),
        _ => {
            debug!(
                count = reader.violations.len(),
                "Profile JSON failed structural validation"
            );
            Err(ProfileValidationError {
                violations: reader.violations,
            })
        }
    }
}

fn check_range(
    violations: &mut Vec<FieldViolation>,
    field: &str,
    value: Option<f64>,
    bounds: Bounds,
) {
    if let Some(value) = value {
        if !bounds.contains(value) {
            violations.push(FieldViolation::new(
                field,
                format!("must be between {} and {}", bounds.min, bounds.max),
            ));
        }
    }
}

fn sanitize_profile(profile: &AthleteProfile, limits: &ValidationLimits) -> AthleteProfile {
    let free_text = |text: Option<&str>| {
        text.map(|t| sanitize_text(t, limits.max_free_text_chars))
            .filter(|t| !t.is_empty())
    };

    let disciplines: Vec<String> = profile
        .disciplines
        .iter()
        .map(|d| sanitize_text(d, limits.max_discipline_chars))
        .filter(|d| !d.is_empty())
        .take(limits.max_disciplines)
        .collect();

    AthleteProfile {
        disciplines,
        race_distance: free_text(profile.race_distance.as_deref()),
        avg_pace: free_text(profile.avg_pace.as_deref()),
        swim_pace: free_text(profile.swim_pace.as_deref()),
        bike_speed: free_text(profile.bike_speed.as_deref()),
        bike_power: free_text(profile.bike_power.as_deref()),
        run_pace: free_text(profile.run_pace.as_deref()),
        ..profile.clone()
    }
}

/// Reads typed fields out of a JSON object, recording a violation per bad field
struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    violations: Vec<FieldViolation>,
}

impl<'a> FieldReader<'a> {
    const fn new(object: &'a Map<String, Value>) -> Self {
        Self {
            object,
            violations: Vec::new(),
        }
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field).filter(|v| !v.is_null())
    }

    fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.violations.push(FieldViolation::new(field, message));
    }

    fn required<T>(&mut self, field: &str, value: Option<T>, present: bool) -> Option<T> {
        if !present {
            self.reject(field, "is required");
        }
        value
    }

    fn number(&mut self, field: &str) -> Option<f64> {
        let value = self.get(field)?;
        let number = value.as_f64();
        if number.is_none() {
            self.reject(field, "must be a number");
        }
        number
    }

    fn text(&mut self, field: &str) -> Option<String> {
        let value = self.get(field)?;
        let text = value.as_str().map(ToOwned::to_owned);
        if text.is_none() {
            self.reject(field, "must be a string");
        }
        text
    }

    fn flag(&mut self, field: &str) -> Option<bool> {
        let value = self.get(field)?;
        let flag = value.as_bool();
        if flag.is_none() {
            self.reject(field, "must be true or false");
        }
        flag
    }

    fn label<T: Copy + fmt::Display>(
        &mut self,
        field: &str,
        parse: fn(&str) -> Option<T>,
        allowed: &[T],
    ) -> Option<T> {
        let value = self.get(field)?;
        let parsed = value.as_str().and_then(parse);
        if parsed.is_none() {
            let options: Vec<String> = allowed.iter().map(ToString::to_string).collect();
            self.reject(field, format!("must be one of: {}", options.join(", ")));
        }
        parsed
    }

    fn age(&mut self) -> Option<u32> {
        let value = self.get("age");
        let present = value.is_some();
        let age = value.and_then(|v| {
            let age = whole_number(v);
            if age.is_none() {
                self.reject("age", "must be a whole number of years");
            }
            age
        });
        self.required("age", age, present)
    }

    fn disciplines(&mut self) -> Option<Vec<String>> {
        let Some(value) = self.get("disciplines") else {
            self.reject("disciplines", "is required");
            return None;
        };
        let labels: Option<Vec<String>> = value.as_array().and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(ToOwned::to_owned))
                .collect()
        });
        if labels.is_none() {
            self.reject("disciplines", "must be a list of strings");
        }
        labels
    }

    fn temperature_range(&mut self) -> Option<(f64, f64)> {
        let Some(value) = self.get("trainingTempRange") else {
            self.reject("trainingTempRange", "is required");
            return None;
        };
        let Some(range) = value.as_object() else {
            self.reject("trainingTempRange", "must be an object with min and max");
            return None;
        };

        let mut bound = |name: &str| {
            let path = format!("trainingTempRange.{name}");
            match range.get(name).filter(|v| !v.is_null()) {
                None => {
                    self.reject(&path, "is required");
                    None
                }
                Some(v) => {
                    let number = v.as_f64();
                    if number.is_none() {
                        self.reject(&path, "must be a number");
                    }
                    number
                }
            }
        };
        let min = bound("min");
        let max = bound("max");
        Some((min?, max?))
    }

    fn read_profile(&mut self) -> Option<AthleteProfile> {
        let age = self.age();
        let sex_present = self.get("sex").is_some();
        let sex = self.label("sex", Sex::from_label, Sex::ALL);
        let sex = self.required("sex", sex, sex_present);
        let weight_present = self.get("weightKg").is_some();
        let weight_kg = self.number("weightKg");
        let weight_kg = self.required("weightKg", weight_kg, weight_present);
        let disciplines = self.disciplines();
        let temperature = self.temperature_range();

        let height_cm = self.number("heightCm");
        let session_duration_hours = self.number("sessionDurationHours");
        let race_distance = self.text("raceDistance");
        let has_upcoming_race = self.flag("hasUpcomingRace");
        let elevation_gain_m = self.number("elevationGainM");
        let humidity_pct = self.number("humidityPct");
        let altitude = self.label("altitude", Altitude::from_label, Altitude::ALL);
        let altitude_m = self.number("altitudeM");
        let sun_exposure = self.label("sunExposure", SunExposure::from_label, SunExposure::ALL);
        let wind_conditions =
            self.label("windConditions", WindConditions::from_label, WindConditions::ALL);
        let clothing_type = self.label("clothingType", ClothingType::from_label, ClothingType::ALL);
        let indoor_outdoor =
            self.label("indoorOutdoor", TrainingLocation::from_label, TrainingLocation::ALL);
        let sweat_rate = self.label("sweatRate", Level::from_label, Level::ALL);
        let sweat_saltiness = self.label("sweatSaltiness", Level::from_label, Level::ALL);
        let cramp_timing = self.label("crampTiming", CrampTiming::from_label, CrampTiming::ALL);
        let daily_salt_intake = self.label("dailySaltIntake", Level::from_label, Level::ALL);
        let caffeine_intake_mg = self.number("caffeineIntakeMg");
        let avg_pace = self.text("avgPace");
        let swim_pace = self.text("swimPace");
        let bike_speed = self.text("bikeSpeed");
        let bike_power = self.text("bikePower");
        let run_pace = self.text("runPace");

        let (min, max) = temperature?;
        let defaults = ProfileDefaults::default();

        Some(AthleteProfile {
            age: age?,
            sex: sex?,
            weight_kg: weight_kg?,
            height_cm,
            disciplines: disciplines?,
            session_duration_hours,
            race_distance,
            has_upcoming_race: has_upcoming_race.unwrap_or(false),
            elevation_gain_m,
            training_temp_range_c: TemperatureRange::new(min, max),
            humidity_pct: humidity_pct.unwrap_or(defaults.humidity_pct),
            altitude: altitude.unwrap_or(defaults.altitude),
            altitude_m,
            sun_exposure: sun_exposure.unwrap_or(defaults.sun_exposure),
            wind_conditions: wind_conditions.unwrap_or(defaults.wind_conditions),
            clothing_type: clothing_type.unwrap_or(defaults.clothing_type),
            indoor_outdoor: indoor_outdoor.unwrap_or(defaults.indoor_outdoor),
            sweat_rate: sweat_rate.unwrap_or(defaults.sweat_rate),
            sweat_saltiness: sweat_saltiness.unwrap_or(defaults.sweat_saltiness),
            cramp_timing: cramp_timing.unwrap_or(defaults.cramp_timing),
            daily_salt_intake: daily_salt_intake.unwrap_or(defaults.daily_salt_intake),
            caffeine_intake_mg,
            avg_pace,
            swim_pace,
            bike_speed,
            bike_power,
            run_pace,
        })
    }
}

/// Non-negative integer, also accepting float encodings such as `30.0`
fn whole_number(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    let n = value.as_f64()?;
    (n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n)).then_some(n as u32)
}
