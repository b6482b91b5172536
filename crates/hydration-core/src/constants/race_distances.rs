// ABOUTME: Canonical race distances for running events and triathlon segments
// ABOUTME: Fixed kilometer values consumed by the distance resolver and triathlon calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// 5 km road race
pub const DISTANCE_5K_KM: f64 = 5.0;
/// 10 km road race
pub const DISTANCE_10K_KM: f64 = 10.0;
/// Half marathon (21.0975 km)
pub const DISTANCE_HALF_MARATHON_KM: f64 = 21.0975;
/// Marathon (42.195 km)
pub const DISTANCE_MARATHON_KM: f64 = 42.195;
/// 50 km ultra
pub const DISTANCE_50K_KM: f64 = 50.0;
/// 100 km ultra
pub const DISTANCE_100K_KM: f64 = 100.0;
/// 100 mile ultra
pub const DISTANCE_100_MILES_KM: f64 = 160.934;

/// Fallback distance when no number can be recovered from free text
pub const DEFAULT_DISTANCE_KM: f64 = DISTANCE_5K_KM;

/// Triathlon segment distances (swim, bike, run) in kilometers
pub mod triathlon {
    /// Sprint: 750 m / 20 km / 5 km
    pub const SPRINT: (f64, f64, f64) = (0.75, 20.0, 5.0);
    /// Olympic: 1.5 km / 40 km / 10 km
    pub const OLYMPIC: (f64, f64, f64) = (1.5, 40.0, 10.0);
    /// Half Ironman / 70.3: 1.9 km / 90 km / 21.1 km
    pub const HALF_IRONMAN: (f64, f64, f64) = (1.9, 90.0, 21.1);
    /// Full Ironman / 140.6: 3.8 km / 180 km / 42.2 km
    pub const FULL_IRONMAN: (f64, f64, f64) = (3.8, 180.0, 42.2);
}
