// ABOUTME: Athlete profile model consumed by the hydration engine
// ABOUTME: Profile enums, temperature range, defaults and the required/defaulted builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::discipline::Discipline;
use crate::errors::{AppError, AppResult};

/// Generates `as_str`, `from_label`, `ALL` and `Display` for a kebab-case label enum.
///
/// `from_label` is lenient about case, surrounding whitespace, and `_`/space
/// separators so that form values like `"Sea Level"` resolve to `sea-level`.
macro_rules! label_enum {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire label (kebab-case)
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// Parse a label, tolerating case and separator differences
            #[must_use]
            pub fn from_label(label: &str) -> Option<Self> {
                let normalized = label.trim().to_lowercase().replace(['_', ' '], "-");
                match normalized.as_str() {
                    $($label => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Biological sex as reported by the athlete
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
    /// Other / not disclosed
    Other,
}

label_enum!(Sex { Male => "male", Female => "female", Other => "other" });

/// Three-step self-assessment scale (sweat rate, saltiness, salt intake)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    /// Below average
    Low,
    /// Average
    Medium,
    /// Above average
    High,
}

label_enum!(Level { Low => "low", Medium => "medium", High => "high" });

/// Training altitude band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Altitude {
    /// Below roughly 1000 m
    SeaLevel,
    /// Roughly 1000-2500 m
    Moderate,
    /// Above roughly 2500 m
    High,
}

label_enum!(Altitude { SeaLevel => "sea-level", Moderate => "moderate", High => "high" });

/// Sun exposure during training
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SunExposure {
    /// Mostly shaded
    Shade,
    /// Mixed sun and shade
    Partial,
    /// Exposed for the whole session
    FullSun,
}

label_enum!(SunExposure { Shade => "shade", Partial => "partial", FullSun => "full-sun" });

/// Typical wind conditions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum WindConditions {
    /// Little or no wind
    Calm,
    /// Noticeable wind
    Moderate,
    /// Strong wind
    Windy,
}

label_enum!(WindConditions { Calm => "calm", Moderate => "moderate", Windy => "windy" });

/// Clothing worn during training
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ClothingType {
    /// Race kit or swimwear
    Minimal,
    /// Shorts and t-shirt
    Light,
    /// Long sleeves / tights
    Moderate,
    /// Layers or protective gear
    Heavy,
}

label_enum!(ClothingType {
    Minimal => "minimal",
    Light => "light",
    Moderate => "moderate",
    Heavy => "heavy",
});

/// Where the athlete usually trains
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TrainingLocation {
    /// Indoors only
    Indoor,
    /// Outdoors only
    Outdoor,
    /// Mix of both
    Both,
}

label_enum!(TrainingLocation { Indoor => "indoor", Outdoor => "outdoor", Both => "both" });

/// When during a session cramps usually appear
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CrampTiming {
    /// No cramping history
    None,
    /// Early in the session
    Early,
    /// Mid-session
    Mid,
    /// Late in the session
    Late,
    /// After the session
    Post,
}

label_enum!(CrampTiming {
    None => "none",
    Early => "early",
    Mid => "mid",
    Late => "late",
    Post => "post",
});

/// Typical training temperature range in degrees Celsius
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TemperatureRange {
    /// Lowest typical temperature
    pub min: f64,
    /// Highest typical temperature
    pub max: f64,
}

impl TemperatureRange {
    /// Create a range from its bounds
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Mean of the two bounds
    #[must_use]
    pub fn average(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Both bounds finite and ordered
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Complete athlete profile handed to the hydration engine
///
/// A profile is a value: deriving a session duration or changing the race
/// distance produces a new profile rather than mutating this one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AthleteProfile {
    // Identity / body
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,

    // Activity
    /// Ordered discipline labels; the first one is the primary discipline
    pub disciplines: Vec<String>,
    /// Session duration in hours, resolved before the engine runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_duration_hours: Option<f64>,
    /// Race distance as free text or a canonical race name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race_distance: Option<String>,
    /// Whether the plan targets an upcoming race
    #[serde(default)]
    pub has_upcoming_race: bool,
    /// Total elevation gain for the session in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,

    // Environment
    /// Typical training temperature range
    #[serde(rename = "trainingTempRange")]
    pub training_temp_range_c: TemperatureRange,
    /// Relative humidity percentage
    pub humidity_pct: f64,
    /// Altitude band
    pub altitude: Altitude,
    /// Exact altitude in meters, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude_m: Option<f64>,
    /// Sun exposure
    pub sun_exposure: SunExposure,
    /// Wind conditions
    pub wind_conditions: WindConditions,
    /// Clothing type
    pub clothing_type: ClothingType,
    /// Indoor / outdoor training
    pub indoor_outdoor: TrainingLocation,

    // Sweat profile
    /// Self-assessed sweat rate
    pub sweat_rate: Level,
    /// Self-assessed sweat saltiness
    pub sweat_saltiness: Level,
    /// Cramp timing history
    pub cramp_timing: CrampTiming,

    // Nutrition
    /// Daily salt intake
    pub daily_salt_intake: Level,
    /// Daily caffeine intake in milligrams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caffeine_intake_mg: Option<f64>,

    // Pace text, parsed at the conversion boundary
    /// Average pace for single-discipline sessions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_pace: Option<String>,
    /// Swim pace (`M:SS` per 100 m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swim_pace: Option<String>,
    /// Bike speed (`<number> km/h`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bike_speed: Option<String>,
    /// Bike power (free text, informational only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bike_power: Option<String>,
    /// Run pace (`M:SS` per km)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_pace: Option<String>,
}

impl AthleteProfile {
    /// Start a builder
    #[must_use]
    pub fn builder() -> AthleteProfileBuilder {
        AthleteProfileBuilder::default()
    }

    /// Primary discipline (first entry), if any discipline was selected
    #[must_use]
    pub fn primary_discipline(&self) -> Option<Discipline> {
        self.disciplines
            .first()
            .map(|label| Discipline::from_label(label))
    }

    /// Mean training temperature
    #[must_use]
    pub fn average_temperature_c(&self) -> f64 {
        self.training_temp_range_c.average()
    }

    /// New profile value with the session duration replaced
    #[must_use]
    pub fn with_session_duration(&self, hours: f64) -> Self {
        Self {
            session_duration_hours: Some(hours),
            ..self.clone()
        }
    }

    /// New profile value with the race distance replaced and the duration cleared
    ///
    /// The duration must be re-derived for the new distance.
    #[must_use]
    pub fn with_race_distance(&self, race_distance: impl Into<String>) -> Self {
        Self {
            race_distance: Some(race_distance.into()),
            session_duration_hours: None,
            ..self.clone()
        }
    }
}

/// Values applied to every optional profile field the caller leaves unset
///
/// This is the single place profile defaults are decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileDefaults {
    /// Relative humidity percentage
    pub humidity_pct: f64,
    /// Altitude band
    pub altitude: Altitude,
    /// Sun exposure
    pub sun_exposure: SunExposure,
    /// Wind conditions
    pub wind_conditions: WindConditions,
    /// Clothing type
    pub clothing_type: ClothingType,
    /// Training location
    pub indoor_outdoor: TrainingLocation,
    /// Sweat rate
    pub sweat_rate: Level,
    /// Sweat saltiness
    pub sweat_saltiness: Level,
    /// Cramp timing
    pub cramp_timing: CrampTiming,
    /// Daily salt intake
    pub daily_salt_intake: Level,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            humidity_pct: 50.0,
            altitude: Altitude::SeaLevel,
            sun_exposure: SunExposure::Partial,
            wind_conditions: WindConditions::Calm,
            clothing_type: ClothingType::Light,
            indoor_outdoor: TrainingLocation::Outdoor,
            sweat_rate: Level::Medium,
            sweat_saltiness: Level::Medium,
            cramp_timing: CrampTiming::None,
            daily_salt_intake: Level::Medium,
        }
    }
}

/// Builder separating required profile fields from defaulted ones
///
/// Required: `age`, `sex`, `weight_kg`, `disciplines`, `training_temp_range`.
/// Everything else falls back to [`ProfileDefaults`] or stays `None`.
#[derive(Debug, Clone, Default)]
pub struct AthleteProfileBuilder {
    // Required
    age: Option<u32>,
    sex: Option<Sex>,
    weight_kg: Option<f64>,
    disciplines: Vec<String>,
    training_temp_range: Option<TemperatureRange>,

    // Defaulted
    humidity_pct: Option<f64>,
    altitude: Option<Altitude>,
    sun_exposure: Option<SunExposure>,
    wind_conditions: Option<WindConditions>,
    clothing_type: Option<ClothingType>,
    indoor_outdoor: Option<TrainingLocation>,
    sweat_rate: Option<Level>,
    sweat_saltiness: Option<Level>,
    cramp_timing: Option<CrampTiming>,
    daily_salt_intake: Option<Level>,
    has_upcoming_race: bool,

    // Optional
    height_cm: Option<f64>,
    session_duration_hours: Option<f64>,
    race_distance: Option<String>,
    elevation_gain_m: Option<f64>,
    altitude_m: Option<f64>,
    caffeine_intake_mg: Option<f64>,
    avg_pace: Option<String>,
    swim_pace: Option<String>,
    bike_speed: Option<String>,
    bike_power: Option<String>,
    run_pace: Option<String>,
}

impl AthleteProfileBuilder {
    /// Age in years
    #[must_use]
    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Biological sex
    #[must_use]
    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    /// Body weight in kilograms
    #[must_use]
    pub fn weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Replace the discipline list
    #[must_use]
    pub fn disciplines<I, S>(mut self, disciplines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disciplines = disciplines.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single discipline
    #[must_use]
    pub fn discipline(mut self, discipline: impl Into<String>) -> Self {
        self.disciplines.push(discipline.into());
        self
    }

    /// Training temperature range in Celsius
    #[must_use]
    pub fn training_temp_range(mut self, min: f64, max: f64) -> Self {
        self.training_temp_range = Some(TemperatureRange::new(min, max));
        self
    }

    /// Relative humidity percentage
    #[must_use]
    pub fn humidity_pct(mut self, humidity_pct: f64) -> Self {
        self.humidity_pct = Some(humidity_pct);
        self
    }

    /// Altitude band
    #[must_use]
    pub fn altitude(mut self, altitude: Altitude) -> Self {
        self.altitude = Some(altitude);
        self
    }

    /// Exact altitude in meters
    #[must_use]
    pub fn altitude_m(mut self, altitude_m: f64) -> Self {
        self.altitude_m = Some(altitude_m);
        self
    }

    /// Sun exposure
    #[must_use]
    pub fn sun_exposure(mut self, sun_exposure: SunExposure) -> Self {
        self.sun_exposure = Some(sun_exposure);
        self
    }

    /// Wind conditions
    #[must_use]
    pub fn wind_conditions(mut self, wind_conditions: WindConditions) -> Self {
        self.wind_conditions = Some(wind_conditions);
        self
    }

    /// Clothing type
    #[must_use]
    pub fn clothing_type(mut self, clothing_type: ClothingType) -> Self {
        self.clothing_type = Some(clothing_type);
        self
    }

    /// Indoor / outdoor training
    #[must_use]
    pub fn indoor_outdoor(mut self, indoor_outdoor: TrainingLocation) -> Self {
        self.indoor_outdoor = Some(indoor_outdoor);
        self
    }

    /// Self-assessed sweat rate
    #[must_use]
    pub fn sweat_rate(mut self, sweat_rate: Level) -> Self {
        self.sweat_rate = Some(sweat_rate);
        self
    }

    /// Self-assessed sweat saltiness
    #[must_use]
    pub fn sweat_saltiness(mut self, sweat_saltiness: Level) -> Self {
        self.sweat_saltiness = Some(sweat_saltiness);
        self
    }

    /// Cramp timing history
    #[must_use]
    pub fn cramp_timing(mut self, cramp_timing: CrampTiming) -> Self {
        self.cramp_timing = Some(cramp_timing);
        self
    }

    /// Daily salt intake
    #[must_use]
    pub fn daily_salt_intake(mut self, daily_salt_intake: Level) -> Self {
        self.daily_salt_intake = Some(daily_salt_intake);
        self
    }

    /// Whether the plan targets an upcoming race
    #[must_use]
    pub fn has_upcoming_race(mut self, has_upcoming_race: bool) -> Self {
        self.has_upcoming_race = has_upcoming_race;
        self
    }

    /// Height in centimeters
    #[must_use]
    pub fn height_cm(mut self, height_cm: f64) -> Self {
        self.height_cm = Some(height_cm);
        self
    }

    /// Session duration in hours
    #[must_use]
    pub fn session_duration_hours(mut self, hours: f64) -> Self {
        self.session_duration_hours = Some(hours);
        self
    }

    /// Race distance (free text or canonical race name)
    #[must_use]
    pub fn race_distance(mut self, race_distance: impl Into<String>) -> Self {
        self.race_distance = Some(race_distance.into());
        self
    }

    /// Session elevation gain in meters
    #[must_use]
    pub fn elevation_gain_m(mut self, elevation_gain_m: f64) -> Self {
        self.elevation_gain_m = Some(elevation_gain_m);
        self
    }

    /// Daily caffeine intake in milligrams
    #[must_use]
    pub fn caffeine_intake_mg(mut self, caffeine_intake_mg: f64) -> Self {
        self.caffeine_intake_mg = Some(caffeine_intake_mg);
        self
    }

    /// Average pace text
    #[must_use]
    pub fn avg_pace(mut self, pace: impl Into<String>) -> Self {
        self.avg_pace = Some(pace.into());
        self
    }

    /// Swim pace text
    #[must_use]
    pub fn swim_pace(mut self, pace: impl Into<String>) -> Self {
        self.swim_pace = Some(pace.into());
        self
    }

    /// Bike speed text
    #[must_use]
    pub fn bike_speed(mut self, speed: impl Into<String>) -> Self {
        self.bike_speed = Some(speed.into());
        self
    }

    /// Bike power text
    #[must_use]
    pub fn bike_power(mut self, power: impl Into<String>) -> Self {
        self.bike_power = Some(power.into());
        self
    }

    /// Run pace text
    #[must_use]
    pub fn run_pace(mut self, pace: impl Into<String>) -> Self {
        self.run_pace = Some(pace.into());
        self
    }

    /// Build using [`ProfileDefaults::default`] for unset defaulted fields
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming the first absent required field.
    pub fn build(self) -> AppResult<AthleteProfile> {
        self.build_with_defaults(&ProfileDefaults::default())
    }

    /// Build using caller-supplied defaults
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming the first absent required field.
    pub fn build_with_defaults(self, defaults: &ProfileDefaults) -> AppResult<AthleteProfile> {
        let age = self.age.ok_or_else(|| AppError::missing_field("age"))?;
        let sex = self.sex.ok_or_else(|| AppError::missing_field("sex"))?;
        let weight_kg = self
            .weight_kg
            .ok_or_else(|| AppError::missing_field("weightKg"))?;
        if self.disciplines.is_empty() {
            return Err(AppError::missing_field("disciplines"));
        }
        let training_temp_range_c = self
            .training_temp_range
            .ok_or_else(|| AppError::missing_field("trainingTempRange"))?;

        Ok(AthleteProfile {
            age,
            sex,
            weight_kg,
            height_cm: self.height_cm,
            disciplines: self.disciplines,
            session_duration_hours: self.session_duration_hours,
            race_distance: self.race_distance,
            has_upcoming_race: self.has_upcoming_race,
            elevation_gain_m: self.elevation_gain_m,
            training_temp_range_c,
            humidity_pct: self.humidity_pct.unwrap_or(defaults.humidity_pct),
            altitude: self.altitude.unwrap_or(defaults.altitude),
            altitude_m: self.altitude_m,
            sun_exposure: self.sun_exposure.unwrap_or(defaults.sun_exposure),
            wind_conditions: self.wind_conditions.unwrap_or(defaults.wind_conditions),
            clothing_type: self.clothing_type.unwrap_or(defaults.clothing_type),
            indoor_outdoor: self.indoor_outdoor.unwrap_or(defaults.indoor_outdoor),
            sweat_rate: self.sweat_rate.unwrap_or(defaults.sweat_rate),
            sweat_saltiness: self.sweat_saltiness.unwrap_or(defaults.sweat_saltiness),
            cramp_timing: self.cramp_timing.unwrap_or(defaults.cramp_timing),
            daily_salt_intake: self.daily_salt_intake.unwrap_or(defaults.daily_salt_intake),
            caffeine_intake_mg: self.caffeine_intake_mg,
            avg_pace: self.avg_pace,
            swim_pace: self.swim_pace,
            bike_speed: self.bike_speed,
            bike_power: self.bike_power,
            run_pace: self.run_pace,
        })
    }
}
