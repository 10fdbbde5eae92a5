// ABOUTME: Plateau detection over per-exercise session history
// ABOUTME: Flags exercises whose working weight stalled for weeks and suggests the next step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use gymbo_core::models::CompletedSession;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::analysis_config::{AnalysisConfig, ProgressionThresholds};
use crate::history::{exercise_histories, mean, population_variance, ExerciseHistory};

/// An exercise ready for more load
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressionOpportunity {
    /// Exercise identifier
    pub exercise_id: Uuid,
    /// Exercise name
    pub exercise_name: String,
    /// Mean weight over the most recent sessions
    pub current_weight: f64,
    /// Mean reps over the most recent sessions, truncated
    pub current_reps: u32,
    /// Whole weeks the per-session weight stayed flat
    pub weeks_at_same_level: i64,
    /// Next weight to try
    pub suggested_weight: f64,
    /// Next rep target
    pub suggested_reps: u32,
    /// Confidence in the suggestion (0.0 - 1.0)
    pub confidence: f64,
}

/// Detects training plateaus
#[derive(Debug, Clone)]
pub struct ProgressionAnalyzer {
    thresholds: ProgressionThresholds,
}

impl Default for ProgressionAnalyzer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl ProgressionAnalyzer {
    /// Create an analyzer from configuration
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            thresholds: config.progression.clone(),
        }
    }

    /// Find every plateaued exercise
    ///
    /// Sorted by plateau length descending, then exercise name.
    #[must_use]
    pub fn analyze(&self, sessions: &[CompletedSession]) -> Vec<ProgressionOpportunity> {
        let mut opportunities: Vec<ProgressionOpportunity> = exercise_histories(sessions)
            .iter()
            .filter(|history| history.entries.len() >= self.thresholds.min_sessions)
            .filter_map(|history| self.opportunity_for(history))
            .collect();

        opportunities.sort_by(|a, b| {
            b.weeks_at_same_level
                .cmp(&a.weeks_at_same_level)
                .then_with(|| a.exercise_name.cmp(&b.exercise_name))
        });

        debug!(
            opportunities = opportunities.len(),
            "Progression analysis complete"
        );
        opportunities
    }

    fn opportunity_for(&self, history: &ExerciseHistory) -> Option<ProgressionOpportunity> {
        let weeks = self.weeks_at_same_level(history);
        if weeks < self.thresholds.min_plateau_weeks {
            return None;
        }

        let recent = history
            .entries
            .iter()
            .take(self.thresholds.recent_sessions)
            .flat_map(|entry| entry.sets.iter());
        let (weights, reps): (Vec<f64>, Vec<f64>) = recent
            .map(|(weight, reps)| (*weight, f64::from(*reps)))
            .unzip();
        let current_weight = mean(&weights)?;
        let average_reps = mean(&reps)?;
        let current_reps = average_reps.trunc() as u32;

        Some(ProgressionOpportunity {
            exercise_id: history.exercise_id,
            exercise_name: history.exercise_name.clone(),
            current_weight,
            current_reps,
            weeks_at_same_level: weeks,
            suggested_weight: current_weight * self.thresholds.weight_increase_factor,
            suggested_reps: current_reps + 1,
            confidence: self.thresholds.opportunity_confidence,
        })
    }

    /// Whole weeks spanned by the plateau window, zero when weight still moves
    fn weeks_at_same_level(&self, history: &ExerciseHistory) -> i64 {
        let window: Vec<_> = history
            .entries
            .iter()
            .take(self.thresholds.plateau_window_sessions)
            .collect();
        let (Some(newest), Some(oldest)) = (window.first(), window.last()) else {
            return 0;
        };
        if window.len() < 2 {
            return 0;
        }

        let averages: Vec<f64> = window.iter().map(|entry| entry.average_weight).collect();
        match population_variance(&averages) {
            Some(variance) if variance < self.thresholds.plateau_variance_threshold => {
                (newest.date - oldest.date).num_weeks()
            }
            _ => 0,
        }
    }
}
