// ABOUTME: Triathlon segment calculator for standard race formats
// ABOUTME: Splits a named race into swim/bike/run legs and sums their durations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Triathlon Segment Calculator
//!
//! | Race | Swim | Bike | Run |
//! |------|------|------|-----|
//! | Sprint | 0.75 km | 20 km | 5 km |
//! | Olympic | 1.5 km | 40 km | 10 km |
//! | Half Ironman / 70.3 | 1.9 km | 90 km | 21.1 km |
//! | Full Ironman / 140.6 | 3.8 km | 180 km | 42.2 km |
//!
//! A total is produced only when all three segment inputs parse. Transition
//! time (T1/T2) is not included; the total is the strict sum of the legs.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use hydration_core::constants::race_distances::triathlon;

use super::pace_conversion::{contains_phrase, normalize, Pace, PaceDiscipline};

/// Race-name aliases checked in order; an alias must precede every alias it is a substring of
const TRIATHLON_ALIASES: &[(&str, TriathlonRace)] = &[
    ("half ironman", TriathlonRace::HalfIronman),
    ("half-ironman", TriathlonRace::HalfIronman),
    ("ironman 70.3", TriathlonRace::HalfIronman),
    ("70.3", TriathlonRace::HalfIronman),
    ("full ironman", TriathlonRace::FullIronman),
    ("ironman 140.6", TriathlonRace::FullIronman),
    ("140.6", TriathlonRace::FullIronman),
    ("ironman", TriathlonRace::FullIronman),
    ("olympic", TriathlonRace::Olympic),
    ("standard distance", TriathlonRace::Olympic),
    ("sprint", TriathlonRace::Sprint),
];

/// Standard triathlon formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriathlonRace {
    /// 750 m / 20 km / 5 km
    Sprint,
    /// 1.5 km / 40 km / 10 km
    Olympic,
    /// 1.9 km / 90 km / 21.1 km
    HalfIronman,
    /// 3.8 km / 180 km / 42.2 km
    FullIronman,
}

/// Leg lengths of one race format
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentDistances {
    /// Swim leg (km)
    pub swim_km: f64,
    /// Bike leg (km)
    pub bike_km: f64,
    /// Run leg (km)
    pub run_km: f64,
}

impl From<(f64, f64, f64)> for SegmentDistances {
    fn from((swim_km, bike_km, run_km): (f64, f64, f64)) -> Self {
        Self {
            swim_km,
            bike_km,
            run_km,
        }
    }
}

impl TriathlonRace {
    /// Recognise a race name, ignoring case and extra whitespace
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = normalize(name);
        TRIATHLON_ALIASES
            .iter()
            .find(|(alias, _)| contains_phrase(&normalized, alias))
            .map(|(_, race)| *race)
    }

    /// Segment distances for this format
    #[must_use]
    pub fn segments(self) -> SegmentDistances {
        match self {
            Self::Sprint => triathlon::SPRINT,
            Self::Olympic => triathlon::OLYMPIC,
            Self::HalfIronman => triathlon::HALF_IRONMAN,
            Self::FullIronman => triathlon::FULL_IRONMAN,
        }
        .into()
    }

    /// Display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sprint => "Sprint",
            Self::Olympic => "Olympic",
            Self::HalfIronman => "Half Ironman (70.3)",
            Self::FullIronman => "Full Ironman (140.6)",
        }
    }
}

impl fmt::Display for TriathlonRace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exposes the ordered alias table for invariant checks
#[must_use]
pub fn triathlon_aliases() -> &'static [(&'static str, TriathlonRace)] {
    TRIATHLON_ALIASES
}

/// One leg of a breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentBreakdown {
    /// Leg distance (km)
    pub distance_km: f64,
    /// Normalised pace text (`M:SS/100m`, `X.X km/h`, `M:SS`)
    pub pace: String,
    /// Leg duration (hours)
    pub duration_hours: f64,
}

/// Per-leg durations and their sum
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriathlonBreakdown {
    /// Race format
    pub race: TriathlonRace,
    /// Swim leg
    pub swim: SegmentBreakdown,
    /// Bike leg
    pub bike: SegmentBreakdown,
    /// Run leg
    pub run: SegmentBreakdown,
    /// Sum of the three legs, transitions excluded
    pub total_hours: f64,
}

/// Total race duration in hours, or `None` unless every input parses
#[must_use]
pub fn compute_total_duration(
    race_name: &str,
    swim_pace: &str,
    bike_speed: &str,
    run_pace: &str,
) -> Option<f64> {
    get_breakdown(race_name, swim_pace, bike_speed, run_pace).map(|b| b.total_hours)
}

/// Per-leg breakdown, or `None` unless every input parses
#[must_use]
pub fn get_breakdown(
    race_name: &str,
    swim_pace: &str,
    bike_speed: &str,
    run_pace: &str,
) -> Option<TriathlonBreakdown> {
    let race = TriathlonRace::from_name(race_name)?;
    let distances = race.segments();

    let swim = segment(PaceDiscipline::Swim, swim_pace, distances.swim_km)?;
    let bike = segment(PaceDiscipline::Cycle, bike_speed, distances.bike_km)?;
    let run = segment(PaceDiscipline::Run, run_pace, distances.run_km)?;
    let total_hours = swim.duration_hours + bike.duration_hours + run.duration_hours;

    debug!(
        race = race.as_str(),
        swim_hours = swim.duration_hours,
        bike_hours = bike.duration_hours,
        run_hours = run.duration_hours,
        total_hours,
        "Computed triathlon breakdown"
    );

    Some(TriathlonBreakdown {
        race,
        swim,
        bike,
        run,
        total_hours,
    })
}

fn segment(discipline: PaceDiscipline, text: &str, distance_km: f64) -> Option<SegmentBreakdown> {
    let pace = Pace::parse(discipline, text)?;
    Some(SegmentBreakdown {
        distance_km,
        pace: pace.to_string(),
        duration_hours: pace.duration_hours(distance_km)?,
    })
}
