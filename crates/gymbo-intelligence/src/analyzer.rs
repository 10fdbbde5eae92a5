// ABOUTME: Coordinates every training analyzer over one snapshot of history and profile
// ABOUTME: Produces the AnalysisResult consumed by the tip engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use gymbo_core::models::{CompletedSession, HealthSnapshot, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::achievements::{Achievement, AchievementDetector};
use crate::analysis_config::AnalysisConfig;
use crate::balance_analyzer::{BalanceAnalyzer, MuscleGroupBalance};
use crate::consistency_analyzer::{ConsistencyAnalyzer, ConsistencyMetrics};
use crate::goal_alignment::{GoalAlignment, GoalAlignmentAnalyzer};
use crate::progression_analyzer::{ProgressionAnalyzer, ProgressionOpportunity};
use crate::recovery_analyzer::{RecoveryAnalyzer, RecoveryStatus};

/// Combined output of every analyzer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// Plateaued exercises, longest plateau first
    pub progression_opportunities: Vec<ProgressionOpportunity>,
    /// Muscle group distribution
    pub muscle_balance: MuscleGroupBalance,
    /// Rest status
    pub recovery: RecoveryStatus,
    /// Streak and frequency
    pub consistency: ConsistencyMetrics,
    /// Goal alignment
    pub goal_alignment: GoalAlignment,
    /// Recent achievements
    pub achievements: Vec<Achievement>,
    /// Health data the analysis was run with
    pub health: Option<HealthSnapshot>,
}

/// Runs the six analyzers over the same inputs
#[derive(Debug, Clone)]
pub struct WorkoutAnalysisCoordinator {
    progression: ProgressionAnalyzer,
    balance: BalanceAnalyzer,
    recovery: RecoveryAnalyzer,
    consistency: ConsistencyAnalyzer,
    goal_alignment: GoalAlignmentAnalyzer,
    achievements: AchievementDetector,
}

impl Default for WorkoutAnalysisCoordinator {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl WorkoutAnalysisCoordinator {
    /// Build every analyzer from one configuration
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            progression: ProgressionAnalyzer::new(config),
            balance: BalanceAnalyzer::new(config),
            recovery: RecoveryAnalyzer::new(config),
            consistency: ConsistencyAnalyzer::new(config),
            goal_alignment: GoalAlignmentAnalyzer::new(config),
            achievements: AchievementDetector::new(config),
        }
    }

    /// Analyze as of the current time
    #[must_use]
    pub fn analyze(
        &self,
        sessions: &[CompletedSession],
        profile: &UserProfile,
        health: Option<&HealthSnapshot>,
    ) -> AnalysisResult {
        self.analyze_at(sessions, profile, health, Utc::now())
    }

    /// Analyze as of `now`
    ///
    /// Empty history yields neutral findings; this never fails.
    #[must_use]
    #[instrument(skip_all, fields(sessions = sessions.len()))]
    pub fn analyze_at(
        &self,
        sessions: &[CompletedSession],
        profile: &UserProfile,
        health: Option<&HealthSnapshot>,
        now: DateTime<Utc>,
    ) -> AnalysisResult {
        let result = AnalysisResult {
            progression_opportunities: self.progression.analyze(sessions),
            muscle_balance: self.balance.analyze(sessions, now),
            recovery: self.recovery.analyze(sessions, now),
            consistency: self.consistency.analyze(sessions, now),
            goal_alignment: self.goal_alignment.analyze(sessions, profile),
            achievements: self.achievements.analyze(sessions, now),
            health: health.copied(),
        };

        debug!(
            opportunities = result.progression_opportunities.len(),
            imbalances = result.muscle_balance.imbalances.len(),
            achievements = result.achievements.len(),
            "Workout analysis complete"
        );
        result
    }
}
