// ABOUTME: Resolves a profile's session duration from direct input, triathlon legs or pace
// ABOUTME: The single place that derives durations before the hydration engine runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session duration resolution.
//!
//! Order of precedence:
//!
//! 1. An explicit, positive `session_duration_hours`
//! 2. Triathlon primary discipline with a recognised race and all three leg paces
//! 3. A single-discipline pace (`run_pace` / `swim_pace` / `bike_speed`, then `avg_pace`)
//!    applied to the race distance
//!
//! Anything else is unresolved; the caller re-prompts for a duration.

use tracing::debug;

use hydration_core::models::{AthleteProfile, Discipline};

use super::pace_conversion::{self, PaceDiscipline};
use super::triathlon;

/// Session duration (hours) for the profile, if it can be determined
#[must_use]
pub fn resolve_session_duration(profile: &AthleteProfile) -> Option<f64> {
    if let Some(hours) = profile
        .session_duration_hours
        .filter(|h| h.is_finite() && *h > 0.0)
    {
        return Some(hours);
    }

    let discipline = profile.primary_discipline()?;
    let race_distance = profile.race_distance.as_deref()?;

    let hours = if discipline == Discipline::Triathlon {
        triathlon::compute_total_duration(
            race_distance,
            profile.swim_pace.as_deref()?,
            profile.bike_speed.as_deref()?,
            profile.run_pace.as_deref()?,
        )
    } else {
        let pace_discipline = PaceDiscipline::from_discipline(&discipline)?;
        let distance_km = pace_conversion::resolve_leg_distance_km(pace_discipline, race_distance)?;
        pace_candidates(profile, pace_discipline).find_map(|pace| {
            pace_conversion::duration_from_pace_km(pace_discipline, pace, distance_km)
        })
    };

    debug!(
        discipline = discipline.as_str(),
        race_distance,
        ?hours,
        "Derived session duration"
    );
    hours
}

/// New profile value with the session duration filled in
#[must_use]
pub fn with_resolved_duration(profile: &AthleteProfile) -> Option<AthleteProfile> {
    resolve_session_duration(profile).map(|hours| profile.with_session_duration(hours))
}

/// Pace fields to try for a discipline, most specific first
fn pace_candidates(
    profile: &AthleteProfile,
    discipline: PaceDiscipline,
) -> impl Iterator<Item = &str> {
    let specific = match discipline {
        PaceDiscipline::Run => profile.run_pace.as_deref(),
        PaceDiscipline::Swim => profile.swim_pace.as_deref(),
        PaceDiscipline::Cycle => profile.bike_speed.as_deref(),
    };
    specific.into_iter().chain(profile.avg_pace.as_deref())
}
