// ABOUTME: Training tip model produced by the rule-based tip engine
// ABOUTME: Defines tip categories, ordered priority tiers, and optional display metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Tip category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TipCategory {
    /// Increase weight or reps
    Progression,
    /// Muscle group distribution
    Balance,
    /// Rest recommendations
    Recovery,
    /// Training frequency
    Consistency,
    /// Goal specific advice
    Goal,
    /// Celebrating success
    Motivation,
}

impl TipCategory {
    /// Human readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Progression => "Progression",
            Self::Balance => "Balance",
            Self::Recovery => "Recovery",
            Self::Consistency => "Consistency",
            Self::Goal => "Goal",
            Self::Motivation => "Motivation",
        }
    }
}

/// Tip priority, ordered `Low < Medium < High`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TipPriority {
    /// Nice to know
    Low,
    /// Worth acting on
    Medium,
    /// Act now
    High,
}

/// Optional values displayed alongside a tip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TipMetadata {
    /// Exercise the tip refers to
    pub exercise_name: Option<String>,
    /// Muscle group the tip refers to
    pub muscle_group: Option<String>,
    /// Current value (weight, reps)
    pub current_value: Option<f64>,
    /// Suggested value (weight, reps)
    pub suggested_value: Option<f64>,
}

/// A coaching tip
///
/// Ephemeral: generated per analysis run and never persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingTip {
    /// Category
    pub category: TipCategory,
    /// Short headline
    pub title: String,
    /// Full message
    pub message: String,
    /// Decorative emoji
    pub emoji: String,
    /// Priority tier
    pub priority: TipPriority,
    /// Optional display metadata
    pub metadata: Option<TipMetadata>,
}

impl TrainingTip {
    /// Create a tip without metadata
    #[must_use]
    pub fn new(
        category: TipCategory,
        priority: TipPriority,
        emoji: &str,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            message: message.into(),
            emoji: emoji.to_owned(),
            priority,
            metadata: None,
        }
    }

    /// Attach display metadata
    #[must_use]
    pub fn with_metadata(mut self, metadata: TipMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
