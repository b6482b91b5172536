// ABOUTME: Unit conversion constants for distance and time
// ABOUTME: Named factors used by the pace, triathlon and hydration calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Swim pace reference length in meters
pub const SWIM_PACE_METERS: f64 = 100.0;

/// Kilometers per statute mile
pub const KM_PER_MILE: f64 = 1.609_344;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;
