// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for units, race distances and electrolyte sachets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. Tunable thresholds live in the main crate's
//! hydration configuration; the values here are fixed facts (unit factors,
//! sanctioned race distances, sachet composition).

/// Canonical race and triathlon segment distances
pub mod race_distances;
/// Unit conversion and measurement constants
pub mod units;

/// Electrolyte sachet composition
pub mod sachet {
    /// Sodium per sachet (mg)
    pub const SODIUM_MG: u32 = 500;
    /// Water volume one sachet is dosed for (ml)
    pub const WATER_ML: u32 = 2000;
}

/// Free-text limits applied by the profile sanitizer
pub mod text_limits {
    /// Maximum characters kept for free-text profile fields
    pub const MAX_FREE_TEXT_CHARS: usize = 200;
    /// Maximum characters kept for a single discipline label
    pub const MAX_DISCIPLINE_CHARS: usize = 50;
    /// Maximum number of disciplines accepted
    pub const MAX_DISCIPLINES: usize = 10;
}
