// ABOUTME: Core types and constants for the hydration planning engine
// ABOUTME: Foundation crate with error handling, data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Hydration Core
//!
//! Foundation crate providing shared types and constants for the hydration
//! planner. It is designed to change infrequently so the algorithm crate can
//! rebuild incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Athlete profile, telemetry and hydration plan values
//! - **constants**: Unit factors, race distances, sachet composition

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profile, plan, telemetry)
pub mod models;
