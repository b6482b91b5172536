// ABOUTME: Training discipline enumeration derived from free-text discipline labels
// ABOUTME: Maps the athlete's primary discipline onto the categories the engine adjusts for
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

/// Discipline categories recognised by the hydration rules
///
/// Profiles store disciplines as an ordered list of labels; only the first one
/// (the primary discipline) is consulted by discipline-conditional rules. Labels
/// that do not map onto a known category are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Discipline {
    /// Road or track running
    Running,
    /// Trail running (sweat-wise treated as running only for pace grammar)
    TrailRunning,
    /// Swim-bike-run multisport
    Triathlon,
    /// Road, gravel or indoor cycling
    Cycling,
    /// Pool or open water swimming
    Swimming,
    /// Gym / strength session
    Gym,
    /// `CrossFit` session
    CrossFit,
    /// Walking
    Walking,
    /// Hiking
    Hiking,
    /// Unrecognised label
    Other(String),
}

impl Discipline {
    /// Parse a discipline from a free-text label, case-insensitively
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match normalized.as_str() {
            "running" | "run" => Self::Running,
            "trailrunning" | "trailrun" => Self::TrailRunning,
            "triathlon" => Self::Triathlon,
            "cycling" | "ride" | "bike" => Self::Cycling,
            "swimming" | "swim" => Self::Swimming,
            "gym" => Self::Gym,
            "crossfit" => Self::CrossFit,
            "walking" | "walk" => Self::Walking,
            "hiking" | "hike" => Self::Hiking,
            _ => Self::Other(label.trim().to_owned()),
        }
    }

    /// Canonical display label
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Running => "Running",
            Self::TrailRunning => "Trail Running",
            Self::Triathlon => "Triathlon",
            Self::Cycling => "Cycling",
            Self::Swimming => "Swimming",
            Self::Gym => "Gym",
            Self::CrossFit => "CrossFit",
            Self::Walking => "Walking",
            Self::Hiking => "Hiking",
            Self::Other(label) => label,
        }
    }

    /// Whether the label mapped onto a known category
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
