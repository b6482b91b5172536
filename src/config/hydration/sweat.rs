// ABOUTME: Sweat rate configuration for temperature buckets and discipline adjustments
// ABOUTME: Configures base sweat rates per temperature band and per-discipline percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sweat Rate Configuration
//!
//! Base sweat rate is chosen from the mean training temperature, then scaled by
//! a percentage keyed on the athlete's primary discipline.
//!
//! # Scientific References
//!
//! - Sawka, M.N., et al. (2007). ACSM position stand: Exercise and fluid replacement.
//!   *Medicine & Science in Sports & Exercise*, 39(2), 377-390.
//!   <https://doi.org/10.1249/mss.0b013e31802ca597>
//! - Barnes, K.A., et al. (2019). Normative data for sweating rate, sweat sodium
//!   concentration, and sweat sodium loss in athletes. *Journal of Sports Sciences*, 37(20).
//!   <https://doi.org/10.1080/02640414.2019.1633159>

use hydration_core::models::Discipline;
use serde::{Deserialize, Serialize};

/// Temperature-bucketed base sweat rates
///
/// `avg < cool_threshold` is cool, `cool_threshold..=hot_threshold` is
/// moderate (both edges inclusive), `avg > hot_threshold` is hot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweatRateConfig {
    /// Below this mean temperature (°C) the cool rate applies: 18
    pub cool_threshold_c: f64,
    /// Above this mean temperature (°C) the hot rate applies: 25
    pub hot_threshold_c: f64,
    /// Cool-bucket sweat rate (ml/h): 600
    pub cool_ml_per_hour: u32,
    /// Moderate-bucket sweat rate (ml/h): 800
    pub moderate_ml_per_hour: u32,
    /// Hot-bucket sweat rate (ml/h): 1100
    pub hot_ml_per_hour: u32,
}

impl Default for SweatRateConfig {
    fn default() -> Self {
        Self {
            cool_threshold_c: 18.0,
            hot_threshold_c: 25.0,
            cool_ml_per_hour: 600,
            moderate_ml_per_hour: 800,
            hot_ml_per_hour: 1100,
        }
    }
}

impl SweatRateConfig {
    /// Base sweat rate (ml/h) for a mean training temperature
    #[must_use]
    pub fn base_rate_for(&self, average_temp_c: f64) -> u32 {
        if average_temp_c < self.cool_threshold_c {
            self.cool_ml_per_hour
        } else if average_temp_c > self.hot_threshold_c {
            self.hot_ml_per_hour
        } else {
            self.moderate_ml_per_hour
        }
    }
}

/// Whole-percent sweat rate adjustment per primary discipline
///
/// Unknown disciplines receive no adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisciplineAdjustmentConfig {
    /// Running: +10
    pub running_percent: i32,
    /// Triathlon: +10
    pub triathlon_percent: i32,
    /// Cycling: 0
    pub cycling_percent: i32,
    /// Swimming: -15 (water dissipates heat)
    pub swimming_percent: i32,
    /// Gym, `CrossFit`, walking and hiking: -20
    pub low_intensity_percent: i32,
}

impl Default for DisciplineAdjustmentConfig {
    fn default() -> Self {
        Self {
            running_percent: 10,
            triathlon_percent: 10,
            cycling_percent: 0,
            swimming_percent: -15,
            low_intensity_percent: -20,
        }
    }
}

impl DisciplineAdjustmentConfig {
    /// Whole-percent adjustment for the primary discipline
    #[must_use]
    pub const fn percent_for(&self, discipline: &Discipline) -> i32 {
        match discipline {
            Discipline::Running => self.running_percent,
            Discipline::Triathlon => self.triathlon_percent,
            Discipline::Cycling => self.cycling_percent,
            Discipline::Swimming => self.swimming_percent,
            Discipline::Gym | Discipline::CrossFit | Discipline::Walking | Discipline::Hiking => {
                self.low_intensity_percent
            }
            Discipline::TrailRunning | Discipline::Other(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_edges_are_inclusive_for_moderate() {
        let config = SweatRateConfig::default();
        assert_eq!(config.base_rate_for(17.999), 600);
        assert_eq!(config.base_rate_for(18.0), 800);
        assert_eq!(config.base_rate_for(25.0), 800);
        assert_eq!(config.base_rate_for(25.0001), 1100);
    }

    #[test]
    fn test_unknown_discipline_is_unadjusted() {
        let config = DisciplineAdjustmentConfig::default();
        assert_eq!(config.percent_for(&Discipline::from_label("Rowing")), 0);
        assert_eq!(config.percent_for(&Discipline::Hiking), -20);
    }
}
