// ABOUTME: Compares recent rep ranges and session volume with the user's training goal
// ABOUTME: Emits alignment verdicts plus a human readable suggestion for every mismatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use gymbo_core::models::{CompletedSession, FitnessGoal, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis_config::{AnalysisConfig, GoalAlignmentThresholds};
use crate::history::{mean, newest_first};

/// Rep range verdict
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RepRangeAlignment {
    /// Within the goal band
    #[default]
    Good,
    /// Below the goal band
    TooLow,
    /// Above the goal band
    TooHigh,
}

/// Session volume verdict
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum VolumeAlignment {
    /// Between the low and high thresholds
    #[default]
    Good,
    /// Below the low threshold
    TooLow,
    /// Above the high threshold
    TooHigh,
}

/// Goal alignment snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalAlignment {
    /// Goal evaluated against
    pub goal: FitnessGoal,
    /// Rep range verdict
    pub rep_range: RepRangeAlignment,
    /// Volume verdict
    pub volume: VolumeAlignment,
    /// Mean reps per completed set, when any set was completed
    pub average_reps: Option<f64>,
    /// Mean volume per session
    pub average_session_volume: f64,
    /// One suggestion per mismatch
    pub suggestions: Vec<String>,
}

impl GoalAlignment {
    /// Alignment reported without any sessions
    #[must_use]
    pub const fn aligned(goal: FitnessGoal) -> Self {
        Self {
            goal,
            rep_range: RepRangeAlignment::Good,
            volume: VolumeAlignment::Good,
            average_reps: None,
            average_session_volume: 0.0,
            suggestions: Vec::new(),
        }
    }
}

/// Compares recent training with the goal
#[derive(Debug, Clone)]
pub struct GoalAlignmentAnalyzer {
    recent_sessions: usize,
    thresholds: GoalAlignmentThresholds,
}

impl Default for GoalAlignmentAnalyzer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl GoalAlignmentAnalyzer {
    /// Create an analyzer from configuration
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            recent_sessions: config.timeframes.goal_alignment_sessions,
            thresholds: config.goal_alignment.clone(),
        }
    }

    /// Alignment of the most recent sessions with `profile.goal`
    #[must_use]
    pub fn analyze(&self, sessions: &[CompletedSession], profile: &UserProfile) -> GoalAlignment {
        if sessions.is_empty() {
            return GoalAlignment::aligned(profile.goal);
        }

        let recent: Vec<&CompletedSession> = newest_first(sessions)
            .into_iter()
            .take(self.recent_sessions)
            .collect();
        let reps: Vec<f64> = recent
            .iter()
            .flat_map(|session| session.completed_sets())
            .map(|set| f64::from(set.reps))
            .collect();
        let average_reps = mean(&reps);
        let total_volume: f64 = recent.iter().map(|session| session.total_volume()).sum();
        let average_session_volume = total_volume / recent.len() as f64;

        let mut suggestions = Vec::new();
        let rep_range = average_reps.map_or(RepRangeAlignment::Good, |reps| {
            self.rep_range_alignment(profile.goal, reps, &mut suggestions)
        });

        let volume = if average_session_volume < self.thresholds.low_session_volume {
            suggestions.push("Increase your training volume for better results".to_owned());
            VolumeAlignment::TooLow
        } else if average_session_volume > self.thresholds.high_session_volume {
            suggestions.push("Reduce your volume to avoid overtraining".to_owned());
            VolumeAlignment::TooHigh
        } else {
            VolumeAlignment::Good
        };

        debug!(
            goal = %profile.goal,
            ?rep_range,
            ?volume,
            "Goal alignment analysis complete"
        );

        GoalAlignment {
            goal: profile.goal,
            rep_range,
            volume,
            average_reps,
            average_session_volume,
            suggestions,
        }
    }

    fn rep_range_alignment(
        &self,
        goal: FitnessGoal,
        average_reps: f64,
        suggestions: &mut Vec<String>,
    ) -> RepRangeAlignment {
        match goal {
            FitnessGoal::MuscleBuilding => {
                let (low, high) = self.thresholds.muscle_building_reps;
                let band = format!("{low:.0}-{high:.0}");
                if average_reps < low {
                    suggestions.push(format!(
                        "Increase your reps to {band} for optimal muscle growth"
                    ));
                    RepRangeAlignment::TooLow
                } else if average_reps > high {
                    suggestions.push(format!(
                        "Reduce your reps to {band} and increase the weight"
                    ));
                    RepRangeAlignment::TooHigh
                } else {
                    RepRangeAlignment::Good
                }
            }
            FitnessGoal::Strength => {
                let (low, high) = self.thresholds.strength_reps;
                let band = format!("{low:.0}-{high:.0}");
                if average_reps < low {
                    suggestions.push(format!("Increase your reps to {band} to build strength"));
                    RepRangeAlignment::TooLow
                } else if average_reps > high {
                    suggestions.push(format!(
                        "Reduce your reps to {band} and increase the weight for strength gains"
                    ));
                    RepRangeAlignment::TooHigh
                } else {
                    RepRangeAlignment::Good
                }
            }
            FitnessGoal::Endurance => {
                let minimum = self.thresholds.endurance_min_reps;
                if average_reps < minimum {
                    suggestions.push(format!(
                        "Increase your reps to {minimum:.0}+ for endurance training"
                    ));
                    RepRangeAlignment::TooLow
                } else {
                    RepRangeAlignment::Good
                }
            }
            FitnessGoal::WeightLoss | FitnessGoal::General => RepRangeAlignment::Good,
        }
    }
}
