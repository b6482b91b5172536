// ABOUTME: Core data models for hydration planning
// ABOUTME: Athlete profile and builder, disciplines, telemetry, and the hydration plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models shared by the converters, the validator and the engine.
//!
//! All types serialize with camelCase field names and kebab-case enum labels.

/// Athlete profile, profile enums and builder
pub mod athlete;
/// Discipline categories
pub mod discipline;
/// Hydration plan output
pub mod plan;
/// Optional wearable telemetry
pub mod telemetry;

pub use athlete::{
    Altitude, AthleteProfile, AthleteProfileBuilder, ClothingType, CrampTiming, Level,
    ProfileDefaults, Sex, SunExposure, TemperatureRange, TrainingLocation, WindConditions,
};
pub use discipline::Discipline;
pub use plan::{DuringActivityPlan, HydrationPlan, PostActivityPlan, PreActivityPlan};
pub use telemetry::WearableTelemetry;
