// ABOUTME: Intelligence module grouping the hydration derivation algorithms
// ABOUTME: Pace conversion, triathlon segments, session duration and the plan engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure, synchronous algorithms over immutable inputs. Leaves first:
//! pace conversion, triathlon segments, session duration resolution, and
//! finally the hydration plan engine that consumes a completed profile.

/// Bidirectional pace/duration conversion and race-distance resolution
pub mod pace_conversion;
/// Triathlon race formats and segment breakdowns
pub mod triathlon;
/// Session duration derivation from direct input, triathlon legs or pace
pub mod session_duration;
/// Three-phase hydration plan engine
pub mod hydration_calculator;

pub use hydration_calculator::{
    calculate_during_water, calculate_hydration_plan, calculate_sweat_rate, compute_plan,
};
pub use pace_conversion::{
    duration_from_pace, duration_from_pace_km, pace_from_duration, resolve_distance_km,
    resolve_leg_distance_km, Pace, PaceDiscipline,
};
pub use session_duration::{resolve_session_duration, with_resolved_duration};
pub use triathlon::{
    compute_total_duration, get_breakdown, SegmentBreakdown, SegmentDistances,
    TriathlonBreakdown, TriathlonRace,
};
