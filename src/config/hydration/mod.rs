// ABOUTME: Hydration engine configuration with defaults, env overrides and validation
// ABOUTME: Orchestrates sweat, intake, electrolyte, recommendation and validation configs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Hydration Configuration Module
//!
//! Every constant the engine and validator use lives here with a documented
//! default. Deployments may override selected values through `HYDRATION_*`
//! environment variables; the result is validated before use.
//!
//! # Module Structure
//!
//! - `sweat` - Temperature buckets and discipline adjustments
//! - `intake` - Pre/during/post phases and the electrolyte decision table
//! - `recommendation` - Recommendation thresholds and messages
//! - `validation` - Profile input bounds

pub mod error;
pub mod intake;
pub mod recommendation;
pub mod sweat;
pub mod validation;

pub use error::ConfigError;
pub use intake::{DuringActivityConfig, ElectrolyteConfig, PostActivityConfig, PreActivityConfig};
pub use recommendation::{RecommendationConfig, RecommendationMessages, RecommendationThresholds};
pub use sweat::{DisciplineAdjustmentConfig, SweatRateConfig};
pub use validation::{Bounds, ValidationLimits};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static HYDRATION_CONFIG: OnceLock<HydrationConfig> = OnceLock::new();

/// Main hydration configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Base sweat rate buckets
    pub sweat_rate: SweatRateConfig,
    /// Per-discipline sweat rate percentages
    pub discipline_adjustments: DisciplineAdjustmentConfig,
    /// Pre-activity loading
    pub pre_activity: PreActivityConfig,
    /// During-activity replacement
    pub during_activity: DuringActivityConfig,
    /// During-activity electrolyte decision table
    pub electrolytes: ElectrolyteConfig,
    /// Post-activity recovery
    pub post_activity: PostActivityConfig,
    /// Recommendation thresholds and messages
    pub recommendations: RecommendationConfig,
    /// Profile validation bounds
    pub validation: ValidationLimits,
}

impl HydrationConfig {
    /// Get the global configuration instance
    ///
    /// Falls back to defaults (with a warning) when the environment holds
    /// unparseable or inconsistent overrides.
    pub fn global() -> &'static Self {
        HYDRATION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load hydration config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate internal consistency
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` for misordered thresholds and `ValueOutOfRange`
    /// for non-finite settings or fractions and volumes outside their
    /// meaningful range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_finite()?;

        if self.sweat_rate.cool_threshold_c >= self.sweat_rate.hot_threshold_c {
            return Err(ConfigError::InvalidRange(
                "cool_threshold_c must be < hot_threshold_c",
            ));
        }

        if self.sweat_rate.cool_ml_per_hour == 0
            || self.sweat_rate.moderate_ml_per_hour == 0
            || self.sweat_rate.hot_ml_per_hour == 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "base sweat rates must be positive",
            ));
        }

        if self.pre_activity.medium_session_hours >= self.pre_activity.long_session_hours {
            return Err(ConfigError::InvalidRange(
                "medium_session_hours must be < long_session_hours",
            ));
        }

        if !is_positive(self.pre_activity.ml_per_kg) {
            return Err(ConfigError::ValueOutOfRange("ml_per_kg must be positive"));
        }

        let fraction = self.during_activity.replacement_fraction;
        if !is_positive(fraction) || fraction > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "during replacement_fraction must be in (0, 1]",
            ));
        }

        if !is_positive(self.post_activity.replacement_factor) {
            return Err(ConfigError::ValueOutOfRange(
                "post replacement_factor must be positive",
            ));
        }

        if !is_positive(self.post_activity.water_ml_per_sachet) {
            return Err(ConfigError::ValueOutOfRange(
                "water_ml_per_sachet must be positive",
            ));
        }

        if self.post_activity.min_sachets < 0.0 || self.pre_activity.electrolyte_sachets < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "sachet counts must not be negative",
            ));
        }

        let thresholds = &self.recommendations.thresholds;
        if thresholds.frequent_intake_hours < 0.0 || thresholds.elevation_gain_m < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "recommendation thresholds must not be negative",
            ));
        }

        if self.validation.bounds().iter().any(|b| b.min > b.max) {
            return Err(ConfigError::InvalidRange(
                "validation bounds must have min <= max",
            ));
        }

        Ok(())
    }

    /// Reject NaN and infinite values, which slip past every ordering check
    fn validate_finite(&self) -> Result<(), ConfigError> {
        let pre = &self.pre_activity;
        let electrolytes = &self.electrolytes;
        let post = &self.post_activity;
        let thresholds = &self.recommendations.thresholds;

        let values = [
            self.sweat_rate.cool_threshold_c,
            self.sweat_rate.hot_threshold_c,
            pre.ml_per_kg,
            pre.hot_adjustment,
            pre.cool_adjustment,
            pre.running_adjustment,
            pre.swimming_adjustment,
            pre.long_session_hours,
            pre.long_session_adjustment,
            pre.medium_session_hours,
            pre.medium_session_adjustment,
            pre.high_altitude_adjustment,
            pre.moderate_altitude_adjustment,
            pre.full_sun_adjustment,
            pre.electrolyte_sachets,
            self.during_activity.replacement_fraction,
            electrolytes.base_per_hour,
            electrolytes.both_high_per_hour,
            electrolytes.one_high_per_hour,
            electrolytes.both_low_per_hour,
            post.replacement_factor,
            post.water_ml_per_sachet,
            post.min_sachets,
            thresholds.frequent_intake_hours,
            thresholds.elevation_gain_m,
        ];
        if !values.into_iter().all(f64::is_finite) {
            return Err(ConfigError::ValueOutOfRange(
                "numeric settings must be finite",
            ));
        }

        if !self
            .validation
            .bounds()
            .iter()
            .all(|b| b.min.is_finite() && b.max.is_finite())
        {
            return Err(ConfigError::ValueOutOfRange(
                "validation bounds must be finite",
            ));
        }

        Ok(())
    }

    /// Parse an environment variable into `target` when it is set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Sweat rate buckets
        Self::apply_env_var(
            "HYDRATION_COOL_THRESHOLD_C",
            &mut self.sweat_rate.cool_threshold_c,
        )?;
        Self::apply_env_var(
            "HYDRATION_HOT_THRESHOLD_C",
            &mut self.sweat_rate.hot_threshold_c,
        )?;
        Self::apply_env_var(
            "HYDRATION_COOL_SWEAT_ML_PER_HOUR",
            &mut self.sweat_rate.cool_ml_per_hour,
        )?;
        Self::apply_env_var(
            "HYDRATION_MODERATE_SWEAT_ML_PER_HOUR",
            &mut self.sweat_rate.moderate_ml_per_hour,
        )?;
        Self::apply_env_var(
            "HYDRATION_HOT_SWEAT_ML_PER_HOUR",
            &mut self.sweat_rate.hot_ml_per_hour,
        )?;

        // Phases
        Self::apply_env_var("HYDRATION_PRE_ML_PER_KG", &mut self.pre_activity.ml_per_kg)?;
        Self::apply_env_var(
            "HYDRATION_DURING_REPLACEMENT_FRACTION",
            &mut self.during_activity.replacement_fraction,
        )?;
        Self::apply_env_var(
            "HYDRATION_POST_REPLACEMENT_FACTOR",
            &mut self.post_activity.replacement_factor,
        )?;
        Self::apply_env_var(
            "HYDRATION_SACHET_WATER_ML",
            &mut self.post_activity.water_ml_per_sachet,
        )?;

        // Recommendation thresholds
        Self::apply_env_var(
            "HYDRATION_FREQUENT_INTAKE_HOURS",
            &mut self.recommendations.thresholds.frequent_intake_hours,
        )?;
        Self::apply_env_var(
            "HYDRATION_ELEVATION_GAIN_THRESHOLD_M",
            &mut self.recommendations.thresholds.elevation_gain_m,
        )?;

        Ok(self)
    }
}

/// Finite and strictly positive
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
