// ABOUTME: Snapshot of external health data consumed by the tip engine
// ABOUTME: Carries body weight, body fat, and the body weight trend over recent weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Direction of the body weight trend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "direction")]
pub enum WeightTrend {
    /// Weight went up
    Increasing {
        /// Kilograms gained
        amount_kg: f64,
        /// Over how many weeks
        weeks: u32,
    },
    /// Weight went down
    Decreasing {
        /// Kilograms lost
        amount_kg: f64,
        /// Over how many weeks
        weeks: u32,
    },
    /// No meaningful change
    Stable,
}

/// Health data synchronized from a wearable or health store
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct HealthSnapshot {
    /// Current body weight in kilograms
    pub body_weight_kg: Option<f64>,
    /// Body fat percentage
    pub body_fat_percent: Option<f64>,
    /// Trend of body weight
    pub weight_trend: Option<WeightTrend>,
}
