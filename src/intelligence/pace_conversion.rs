// ABOUTME: Bidirectional pace/duration conversion for running, swimming and cycling
// ABOUTME: Parses discipline-specific pace grammars once and resolves race names to kilometers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pace / Duration Converter
//!
//! Converts a stated pace (or speed) and a race distance into an elapsed
//! session duration, and back.
//!
//! | Discipline | Pace grammar | Duration |
//! |------------|--------------|----------|
//! | Run / hike | `M:SS` per km | `km × min_per_km / 60` |
//! | Swim | `M:SS` per 100 m | `(km × 10) × min_per_100m / 60` |
//! | Cycle | `<number> km/h` | `km / kmh` |
//!
//! Text that does not match the discipline's grammar yields `None`; it is never
//! an error and never silently replaced by a guessed number.
//!
//! Race names resolve through an explicitly ordered alias list so that longer,
//! more specific names (`half marathon`, `ironman 70.3`) are checked before the
//! shorter names they contain (`marathon`, `ironman`).

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

use hydration_core::constants::race_distances::{
    DEFAULT_DISTANCE_KM, DISTANCE_100K_KM, DISTANCE_100_MILES_KM, DISTANCE_10K_KM,
    DISTANCE_50K_KM, DISTANCE_5K_KM, DISTANCE_HALF_MARATHON_KM, DISTANCE_MARATHON_KM,
};
use hydration_core::constants::units::{
    KM_PER_MILE, METERS_PER_KM, MINUTES_PER_HOUR, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
    SWIM_PACE_METERS,
};
use hydration_core::models::Discipline;

use super::triathlon::TriathlonRace;

static RUN_PACE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 5:00, 5:00/km, 5:00 min/km, 12:30 per km
    Regex::new(r"(?i)^\s*(\d+):([0-5]\d)\s*(?:(?:min\s*)?/\s*km|per\s*km)?\s*$").ok()
});

static SWIM_PACE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 1:45, 1:45/100m, 1:45 min/100 m, 2:05 per 100m
    Regex::new(r"(?i)^\s*(\d+):([0-5]\d)\s*(?:(?:min\s*)?/\s*100\s*m|per\s*100\s*m)?\s*$")
        .ok()
});

static SPEED_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 30 km/h, 27.5km/h, 32 kph, 30 kmh
    Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*(?:km\s*/\s*h|kmh|kph)\s*$").ok()
});

static DISTANCE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 10K, 42.2km, 26.2mi, 100 miles, 1500m, 21.1
    Regex::new(
        r"(?i)(\d+(?:\.\d+)?)\s*(kilometers?|kilometres?|km|k|miles?|mi|meters?|metres?|m)?\b",
    )
    .ok()
});

/// Race-name aliases checked in order; an alias must precede every alias it is a substring of
const RACE_DISTANCE_ALIASES: &[(&str, f64)] = &[
    ("100 miles", DISTANCE_100_MILES_KM),
    ("100 mile", DISTANCE_100_MILES_KM),
    ("half ironman", 21.1),
    ("half-ironman", 21.1),
    ("ironman 70.3", 21.1),
    ("70.3", 21.1),
    ("full ironman", 42.2),
    ("ironman 140.6", 42.2),
    ("140.6", 42.2),
    ("ironman", 42.2),
    ("olympic triathlon", 10.0),
    ("olympic", 10.0),
    ("standard distance", 10.0),
    ("sprint triathlon", 5.0),
    ("sprint", 5.0),
    ("half marathon", DISTANCE_HALF_MARATHON_KM),
    ("half-marathon", DISTANCE_HALF_MARATHON_KM),
    ("marathon", DISTANCE_MARATHON_KM),
    ("100 km", DISTANCE_100K_KM),
    ("50 km", DISTANCE_50K_KM),
    ("10 km", DISTANCE_10K_KM),
    ("5 km", DISTANCE_5K_KM),
];

/// Exposes the ordered alias table for invariant checks
#[must_use]
pub fn race_distance_aliases() -> &'static [(&'static str, f64)] {
    RACE_DISTANCE_ALIASES
}

/// Pace grammar family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaceDiscipline {
    /// Running, trail running, walking, hiking: minutes per kilometer
    Run,
    /// Swimming: minutes per 100 m
    Swim,
    /// Cycling: kilometers per hour
    Cycle,
}

impl PaceDiscipline {
    /// Map a discipline onto its pace grammar, if it has one
    #[must_use]
    pub const fn from_discipline(discipline: &Discipline) -> Option<Self> {
        match discipline {
            Discipline::Running
            | Discipline::TrailRunning
            | Discipline::Walking
            | Discipline::Hiking => Some(Self::Run),
            Discipline::Swimming => Some(Self::Swim),
            Discipline::Cycling => Some(Self::Cycle),
            Discipline::Triathlon
            | Discipline::Gym
            | Discipline::CrossFit
            | Discipline::Other(_) => None,
        }
    }

    /// Map a free-text discipline label onto its pace grammar
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::from_discipline(&Discipline::from_label(label))
    }
}

/// A parsed pace, carrying its own unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pace {
    /// Seconds per kilometer
    PerKilometer {
        /// Seconds to cover one kilometer
        seconds: f64,
    },
    /// Seconds per 100 meters
    Per100Meters {
        /// Seconds to cover 100 meters
        seconds: f64,
    },
    /// Speed in km/h
    Speed {
        /// Kilometers per hour
        kmh: f64,
    },
}

impl Pace {
    /// Parse pace text using the grammar of `discipline`
    ///
    /// Zero paces and speeds are rejected since they cannot produce a duration.
    #[must_use]
    pub fn parse(discipline: PaceDiscipline, text: &str) -> Option<Self> {
        let pace = match discipline {
            PaceDiscipline::Run => {
                parse_minutes_seconds(&RUN_PACE_PATTERN, text).map(|seconds| Self::PerKilometer {
                    seconds,
                })
            }
            PaceDiscipline::Swim => parse_minutes_seconds(&SWIM_PACE_PATTERN, text)
                .map(|seconds| Self::Per100Meters { seconds }),
            PaceDiscipline::Cycle => {
                let captures = SPEED_PATTERN.as_ref()?.captures(text)?;
                let kmh: f64 = captures.get(1)?.as_str().parse().ok()?;
                Some(Self::Speed { kmh })
            }
        }?;

        (pace.rate() > 0.0).then_some(pace)
    }

    /// Pace expressed in minutes per unit (min/km, min/100m) or km/h for speed
    #[must_use]
    pub fn rate(&self) -> f64 {
        match self {
            Self::PerKilometer { seconds } | Self::Per100Meters { seconds } => {
                seconds / SECONDS_PER_MINUTE
            }
            Self::Speed { kmh } => *kmh,
        }
    }

    /// Elapsed hours to cover `distance_km` at this pace
    #[must_use]
    pub fn duration_hours(&self, distance_km: f64) -> Option<f64> {
        if !is_positive(distance_km) {
            return None;
        }
        let hours = match self {
            Self::PerKilometer { .. } => distance_km * self.rate() / MINUTES_PER_HOUR,
            Self::Per100Meters { .. } => {
                (distance_km * METERS_PER_KM / SWIM_PACE_METERS) * self.rate() / MINUTES_PER_HOUR
            }
            Self::Speed { kmh } => distance_km / kmh,
        };
        is_positive(hours).then_some(hours)
    }

    /// Pace that covers `distance_km` in `hours`
    #[must_use]
    pub fn from_duration(discipline: PaceDiscipline, hours: f64, distance_km: f64) -> Option<Self> {
        if !is_positive(hours) || !is_positive(distance_km) {
            return None;
        }
        let total_seconds = hours * SECONDS_PER_HOUR;
        Some(match discipline {
            PaceDiscipline::Run => Self::PerKilometer {
                seconds: total_seconds / distance_km,
            },
            PaceDiscipline::Swim => Self::Per100Meters {
                seconds: total_seconds / (distance_km * METERS_PER_KM / SWIM_PACE_METERS),
            },
            PaceDiscipline::Cycle => Self::Speed {
                kmh: distance_km / hours,
            },
        })
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerKilometer { seconds } => f.write_str(&format_minutes_seconds(*seconds)),
            Self::Per100Meters { seconds } => {
                write!(f, "{}/100m", format_minutes_seconds(*seconds))
            }
            Self::Speed { kmh } => write!(f, "{kmh:.1} km/h"),
        }
    }
}

/// Session duration (hours) for a pace and a race distance given as text
///
/// Returns `None` when the discipline has no pace grammar, the pace text does
/// not match it, or the distance cannot be resolved.
#[must_use]
pub fn duration_from_pace(discipline: &str, pace_text: &str, distance_text: &str) -> Option<f64> {
    let pace_discipline = PaceDiscipline::from_label(discipline)?;
    let distance_km = resolve_leg_distance_km(pace_discipline, distance_text)?;
    let hours = duration_from_pace_km(pace_discipline, pace_text, distance_km);
    debug!(
        discipline,
        pace_text, distance_text, distance_km, ?hours, "Converted pace to duration"
    );
    hours
}

/// Session duration (hours) for a pace and an already resolved distance
#[must_use]
pub fn duration_from_pace_km(
    discipline: PaceDiscipline,
    pace_text: &str,
    distance_km: f64,
) -> Option<f64> {
    Pace::parse(discipline, pace_text)?.duration_hours(distance_km)
}

/// Formatted pace that covers `distance_km` in `hours`
///
/// Output grammar: `M:SS` (run), `M:SS/100m` (swim), `X.X km/h` (cycle).
/// Returns `None` when the pace rounds to zero in its display unit, so every
/// returned string parses back with [`duration_from_pace`].
#[must_use]
pub fn pace_from_duration(discipline: &str, hours: f64, distance_km: f64) -> Option<String> {
    let pace_discipline = PaceDiscipline::from_label(discipline)?;
    let text = Pace::from_duration(pace_discipline, hours, distance_km)?.to_string();
    Pace::parse(pace_discipline, &text).map(|_| text)
}

/// Resolve race text to kilometers
///
/// Canonical names come from the ordered alias table; anything else falls back
/// to the first number in the text (with `km`/`mi`/`m` units), then to 5 km.
/// Empty text is unresolved.
#[must_use]
pub fn resolve_distance_km(text: &str) -> Option<f64> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return None;
    }

    if let Some((alias, km)) = RACE_DISTANCE_ALIASES
        .iter()
        .find(|(alias, _)| contains_phrase(&normalized, alias))
    {
        debug!(text, alias, km, "Resolved race distance from alias");
        return Some(*km);
    }

    match extract_distance_km(&normalized) {
        Some(km) if is_positive(km) => Some(km),
        Some(_) => None,
        None => {
            debug!(
                text,
                default_km = DEFAULT_DISTANCE_KM,
                "No distance in text, using default"
            );
            Some(DEFAULT_DISTANCE_KM)
        }
    }
}

/// Resolve race text to the distance of the leg this discipline covers
///
/// A triathlon name gives swimmers and cyclists their own segment length;
/// every other case defers to [`resolve_distance_km`].
#[must_use]
pub fn resolve_leg_distance_km(discipline: PaceDiscipline, text: &str) -> Option<f64> {
    if discipline != PaceDiscipline::Run {
        if let Some(race) = TriathlonRace::from_name(text) {
            let segments = race.segments();
            return Some(match discipline {
                PaceDiscipline::Swim => segments.swim_km,
                PaceDiscipline::Cycle => segments.bike_km,
                PaceDiscipline::Run => segments.run_km,
            });
        }
    }
    resolve_distance_km(text)
}

/// Parse the `M:SS` captures of `pattern` into total seconds
fn parse_minutes_seconds(pattern: &LazyLock<Option<Regex>>, text: &str) -> Option<f64> {
    let captures = pattern.as_ref()?.captures(text)?;
    let minutes: u32 = captures.get(1)?.as_str().parse().ok()?;
    let seconds: u32 = captures.get(2)?.as_str().parse().ok()?;
    Some(f64::from(minutes) * SECONDS_PER_MINUTE + f64::from(seconds))
}

/// Format seconds as `M:SS`, rounding to the nearest second
fn format_minutes_seconds(seconds: f64) -> String {
    let total = seconds.round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// First number in the text, converted to kilometers by its unit
fn extract_distance_km(normalized: &str) -> Option<f64> {
    let captures = DISTANCE_PATTERN.as_ref()?.captures(normalized)?;
    let value: f64 = captures.get(1)?.as_str().parse().ok()?;
    let unit = captures.get(2).map_or("", |m| m.as_str());

    let km = if unit.starts_with("mi") {
        value * KM_PER_MILE
    } else if unit == "m" || unit.starts_with("meter") || unit.starts_with("metre") {
        value / METERS_PER_KM
    } else {
        value
    };
    Some(km)
}

/// Lowercase and collapse whitespace runs to single spaces
pub(crate) fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whether `needle` occurs in `haystack` without touching a neighbouring digit or letter
///
/// A `.` only extends a word when it sits between digits (`70.35`), so
/// sentence punctuation after a race name still matches.
pub(crate) fn contains_phrase(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, matched)| {
        let mut before = haystack[..start].chars().rev();
        let mut after = haystack[start + matched.len()..].chars();
        let first = needle.chars().next();
        let last = needle.chars().next_back();
        !extends_word(before.next(), before.next(), first)
            && !extends_word(after.next(), after.next(), last)
    })
}

/// Whether `adjacent` continues the word whose edge character is `edge`
fn extends_word(adjacent: Option<char>, beyond: Option<char>, edge: Option<char>) -> bool {
    match adjacent {
        Some('.') => {
            beyond.is_some_and(|c| c.is_ascii_digit()) && edge.is_some_and(|c| c.is_ascii_digit())
        }
        Some(c) => c.is_alphanumeric(),
        None => false,
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
