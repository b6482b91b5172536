// ABOUTME: Recommendation configuration for hydration plan rationale
// ABOUTME: Configures trigger thresholds and message templates for the ordered recommendation list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Configuration
//!
//! Message order is fixed by the engine; this only controls thresholds and text.

use hydration_core::constants::sachet;
use serde::{Deserialize, Serialize};

/// Recommendation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Threshold values for triggering conditional notes
    pub thresholds: RecommendationThresholds,
    /// Template messages
    pub messages: RecommendationMessages,
}

/// Thresholds for conditional notes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Sessions strictly longer than this (h) get the frequent-intake note: 2
    pub frequent_intake_hours: f64,
    /// Elevation gain strictly above this (m) gets the elevation note: 500
    pub elevation_gain_m: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            frequent_intake_hours: 2.0,
            elevation_gain_m: 500.0,
        }
    }
}

/// Message templates, in the order the engine emits them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationMessages {
    /// High sweat rate or high saltiness
    pub electrolyte_attention: String,
    /// Hot training conditions
    pub heat: String,
    /// Long session
    pub frequent_intake: String,
    /// Moderate or high altitude
    pub altitude: String,
    /// Full sun exposure
    pub sun: String,
    /// Large elevation gain
    pub elevation: String,
    /// Cramp history
    pub cramps: String,
    /// Low dietary salt
    pub low_salt: String,
    /// Trailing: urine colour monitoring
    pub urine_color: String,
    /// Trailing: sachet composition
    pub sachet_composition: String,
    /// Trailing: no mixing required
    pub no_mixing: String,
    /// Appended when wearable telemetry enriched the plan
    pub telemetry_enhanced: String,
}

impl Default for RecommendationMessages {
    fn default() -> Self {
        Self {
            electrolyte_attention:
                "Your sweat profile indicates higher sodium losses - pay extra attention to electrolyte replacement"
                    .into(),
            heat: "Hot conditions increase sweat loss - start hydrated and drink consistently".into(),
            frequent_intake:
                "For sessions over 2 hours, drink small amounts frequently rather than large volumes at once"
                    .into(),
            altitude: "Altitude increases respiratory water loss - increase fluid intake".into(),
            sun: "Full sun exposure raises heat load - wear a hat and seek shade when possible".into(),
            elevation: "Significant elevation gain increases effort - plan extra fluid on climbs".into(),
            cramps: "You reported cramping - keep up electrolyte intake throughout the session".into(),
            low_salt: "Your daily salt intake is low - consider adding a pinch of salt to meals before long sessions"
                .into(),
            urine_color: "Monitor urine color: pale yellow indicates good hydration".into(),
            sachet_composition: format!(
                "Each electrolyte sachet provides {} mg of sodium",
                sachet::SODIUM_MG
            ),
            no_mixing: "Sachets dissolve directly in water - no mixing equipment required".into(),
            telemetry_enhanced: "Plan enhanced with wearable data".into(),
        }
    }
}
