// ABOUTME: Opaque wearable telemetry attached to a plan request
// ABOUTME: Presence only enriches rationale; the numeric plan never depends on it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Wearable-derived data produced by an external file parser
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WearableTelemetry {
    /// Device or file source, e.g. `"garmin-fit"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Unstructured payload
    #[serde(default)]
    pub data: serde_json::Value,
}

impl WearableTelemetry {
    /// Wrap a payload
    #[must_use]
    pub fn new(source: Option<String>, data: serde_json::Value) -> Self {
        Self { source, data }
    }

    /// True when the payload carries at least one entry
    ///
    /// Null, scalar, empty object and empty array payloads count as absent.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        match &self.data {
            serde_json::Value::Object(map) => !map.is_empty(),
            serde_json::Value::Array(items) => !items.is_empty(),
            _ => false,
        }
    }
}
