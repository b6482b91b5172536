// ABOUTME: Validation limits for untrusted athlete profile input
// ABOUTME: Domain-informed numeric bounds and free-text caps used by the profile validator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile input bounds and free-text caps

use hydration_core::constants::text_limits;
use serde::{Deserialize, Serialize};

/// Inclusive numeric bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    /// Lowest accepted value
    pub min: f64,
    /// Highest accepted value
    pub max: f64,
}

impl Bounds {
    /// Create inclusive bounds
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Finite and within bounds
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && (self.min..=self.max).contains(&value)
    }
}

/// Bounds applied by the profile validator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Age in years: 13-120
    pub age_years: Bounds,
    /// Body weight: 30-300 kg
    pub weight_kg: Bounds,
    /// Height: 100-250 cm
    pub height_cm: Bounds,
    /// Session duration: 0.25-168 h
    pub session_hours: Bounds,
    /// Training temperature: -20 to 50 °C
    pub temperature_c: Bounds,
    /// Relative humidity: 0-100 %
    pub humidity_pct: Bounds,
    /// Daily caffeine: 0-2000 mg
    pub caffeine_mg: Bounds,
    /// Session elevation gain: 0-10000 m
    pub elevation_gain_m: Bounds,
    /// Exact altitude: 0-9000 m
    pub altitude_m: Bounds,
    /// Free-text cap (characters)
    pub max_free_text_chars: usize,
    /// Discipline label cap (characters)
    pub max_discipline_chars: usize,
    /// Maximum disciplines kept
    pub max_disciplines: usize,
}

impl ValidationLimits {
    /// Every numeric bound, for consistency checks
    #[must_use]
    pub const fn bounds(&self) -> [Bounds; 9] {
        [
            self.age_years,
            self.weight_kg,
            self.height_cm,
            self.session_hours,
            self.temperature_c,
            self.humidity_pct,
            self.caffeine_mg,
            self.elevation_gain_m,
            self.altitude_m,
        ]
    }
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            age_years: Bounds::new(13.0, 120.0),
            weight_kg: Bounds::new(30.0, 300.0),
            height_cm: Bounds::new(100.0, 250.0),
            session_hours: Bounds::new(0.25, 168.0),
            temperature_c: Bounds::new(-20.0, 50.0),
            humidity_pct: Bounds::new(0.0, 100.0),
            caffeine_mg: Bounds::new(0.0, 2000.0),
            elevation_gain_m: Bounds::new(0.0, 10_000.0),
            altitude_m: Bounds::new(0.0, 9000.0),
            max_free_text_chars: text_limits::MAX_FREE_TEXT_CHARS,
            max_discipline_chars: text_limits::MAX_DISCIPLINE_CHARS,
            max_disciplines: text_limits::MAX_DISCIPLINES,
        }
    }
}
