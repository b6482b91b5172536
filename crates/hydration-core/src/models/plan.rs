// ABOUTME: Hydration plan output model with pre/during/post dosing phases
// ABOUTME: Immutable value handed to presentation, export and persistence collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Intake before the session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreActivityPlan {
    /// When to drink, relative to the session start
    pub timing_label: String,
    /// Water volume (ml)
    pub water_ml: u32,
    /// Electrolyte sachets
    pub electrolyte_sachets: f64,
}

/// Hourly intake while training
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DuringActivityPlan {
    /// Water per hour (ml)
    pub water_ml_per_hour: u32,
    /// Electrolyte sachets per hour
    pub electrolyte_sachets_per_hour: f64,
    /// How often to drink
    pub frequency_label: String,
}

/// Recovery intake after the session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostActivityPlan {
    /// Water volume (ml)
    pub water_ml: u32,
    /// Electrolyte sachets
    pub electrolyte_sachets: f64,
    /// When to drink, relative to the session end
    pub timing_label: String,
}

/// Complete fluid and electrolyte plan for one session
///
/// Field names are part of the export contract; renaming one breaks stored
/// plans and CSV/PDF mappings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HydrationPlan {
    /// Pre-activity phase
    pub pre_activity: PreActivityPlan,
    /// During-activity phase
    pub during_activity: DuringActivityPlan,
    /// Post-activity phase
    pub post_activity: PostActivityPlan,
    /// Modelled sweat rate (ml/h)
    pub sweat_rate_ml_per_hour: u32,
    /// Sweat rate multiplied by session duration (ml)
    pub total_fluid_loss_ml: f64,
    /// Whether wearable telemetry contributed to the rationale
    pub enhanced: bool,
    /// Rationale strings, displayed by index
    pub recommendations: Vec<String>,
    /// One entry per derivation step, in computation order
    pub calculation_steps: Vec<String>,
}
