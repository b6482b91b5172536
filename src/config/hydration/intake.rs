// ABOUTME: Intake configuration for the pre, during and post activity phases
// ABOUTME: Configures ml/kg loading, additive pre-water factors, replacement fractions and sachet rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intake Phase Configuration
//!
//! # Scientific References
//!
//! - Pre-exercise 5-7 ml/kg: Sawka et al. (2007) DOI: 10.1249/mss.0b013e31802ca597
//! - 150% post-exercise replacement: Shirreffs, S.M., et al. (1996). Post-exercise
//!   rehydration in man. *Medicine & Science in Sports & Exercise*, 28(10), 1260-1271.
//!   <https://doi.org/10.1097/00005768-199610000-00009>

use hydration_core::models::Level;
use serde::{Deserialize, Serialize};

/// Pre-activity loading
///
/// The adjustment factor starts at 1.0 and each applicable term is *added*
/// (never compounded) before multiplying the weight-based base volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreActivityConfig {
    /// Base volume per kg body weight (ml/kg): 6, midpoint of 5-7
    pub ml_per_kg: f64,
    /// Hot conditions (mean above hot threshold): +0.20
    pub hot_adjustment: f64,
    /// Cool conditions (mean below cool threshold): -0.10
    pub cool_adjustment: f64,
    /// Running or triathlon primary discipline: +0.15
    pub running_adjustment: f64,
    /// Swimming primary discipline: -0.15
    pub swimming_adjustment: f64,
    /// Long-session threshold (h): 3
    pub long_session_hours: f64,
    /// Long session: +0.25
    pub long_session_adjustment: f64,
    /// Medium-session threshold (h): 2
    pub medium_session_hours: f64,
    /// Medium session (at least 2 h, under 3 h): +0.15
    pub medium_session_adjustment: f64,
    /// High altitude: +0.15
    pub high_altitude_adjustment: f64,
    /// Moderate altitude: +0.10
    pub moderate_altitude_adjustment: f64,
    /// Full sun: +0.10
    pub full_sun_adjustment: f64,
    /// Fixed pre-activity sachets: 1
    pub electrolyte_sachets: f64,
    /// Timing label shown with the pre-activity dose
    pub timing_label: String,
}

impl Default for PreActivityConfig {
    fn default() -> Self {
        Self {
            ml_per_kg: 6.0,
            hot_adjustment: 0.20,
            cool_adjustment: -0.10,
            running_adjustment: 0.15,
            swimming_adjustment: -0.15,
            long_session_hours: 3.0,
            long_session_adjustment: 0.25,
            medium_session_hours: 2.0,
            medium_session_adjustment: 0.15,
            high_altitude_adjustment: 0.15,
            moderate_altitude_adjustment: 0.10,
            full_sun_adjustment: 0.10,
            electrolyte_sachets: 1.0,
            timing_label: "2-4 hours before activity".into(),
        }
    }
}

/// During-activity replacement
///
/// No per-discipline carrying-capacity cap is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuringActivityConfig {
    /// Fraction of hourly sweat loss replaced while training: 0.70
    pub replacement_fraction: f64,
    /// Drinking frequency label
    pub frequency_label: String,
}

impl Default for DuringActivityConfig {
    fn default() -> Self {
        Self {
            replacement_fraction: 0.70,
            frequency_label: "Every 15-20 minutes".into(),
        }
    }
}

/// During-activity electrolyte decision table (sachets per hour)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElectrolyteConfig {
    /// Neither high nor both low: 1.0
    pub base_per_hour: f64,
    /// High sweat rate and high saltiness: 2.0
    pub both_high_per_hour: f64,
    /// Exactly one of sweat rate / saltiness high: 1.5
    pub one_high_per_hour: f64,
    /// Low sweat rate and low saltiness: 0.5
    pub both_low_per_hour: f64,
}

impl Default for ElectrolyteConfig {
    fn default() -> Self {
        Self {
            base_per_hour: 1.0,
            both_high_per_hour: 2.0,
            one_high_per_hour: 1.5,
            both_low_per_hour: 0.5,
        }
    }
}

impl ElectrolyteConfig {
    /// Sachets per hour for a sweat-rate / saltiness pair
    ///
    /// "Both high" is checked before "either high"; "both low" only applies
    /// when neither is high.
    #[must_use]
    pub fn per_hour_for(&self, sweat_rate: Level, saltiness: Level) -> f64 {
        match (sweat_rate, saltiness) {
            (Level::High, Level::High) => self.both_high_per_hour,
            (Level::High, _) | (_, Level::High) => self.one_high_per_hour,
            (Level::Low, Level::Low) => self.both_low_per_hour,
            _ => self.base_per_hour,
        }
    }
}

/// Post-activity recovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostActivityConfig {
    /// Multiplier applied to the unreplaced deficit: 1.5
    pub replacement_factor: f64,
    /// Water volume one sachet is dosed for (ml): 2000
    pub water_ml_per_sachet: f64,
    /// Minimum post-activity sachets: 1
    pub min_sachets: f64,
    /// Timing label shown with the post-activity dose
    pub timing_label: String,
}

impl Default for PostActivityConfig {
    fn default() -> Self {
        Self {
            replacement_factor: 1.5,
            water_ml_per_sachet: f64::from(hydration_core::constants::sachet::WATER_ML),
            min_sachets: 1.0,
            timing_label: "Within 2 hours after activity".into(),
        }
    }
}
