// ABOUTME: Recovery status from the time since the last session and the weekly session count
// ABOUTME: Flags overtraining risk and same-day fatigue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, Utc};
use gymbo_core::constants::recovery::NO_HISTORY_DAYS;
use gymbo_core::models::CompletedSession;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis_config::{AnalysisConfig, RecoveryThresholds};
use crate::history::{sessions_since, window_start};

/// Recovery snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecoveryStatus {
    /// Whole days since the most recent session, `i64::MAX` without history
    pub days_since_last_workout: i64,
    /// Trained today after a busy week
    pub needs_rest: bool,
    /// Too many sessions in the trailing week
    pub overtraining_risk: bool,
    /// Sessions in the trailing week
    pub workouts_in_last_week: usize,
}

impl RecoveryStatus {
    /// Status reported for an empty history
    #[must_use]
    pub const fn no_history() -> Self {
        Self {
            days_since_last_workout: NO_HISTORY_DAYS,
            needs_rest: false,
            overtraining_risk: false,
            workouts_in_last_week: 0,
        }
    }

    /// Whether any session exists
    #[must_use]
    pub const fn has_history(&self) -> bool {
        self.days_since_last_workout != NO_HISTORY_DAYS
    }
}

impl Default for RecoveryStatus {
    fn default() -> Self {
        Self::no_history()
    }
}

/// Computes recovery status
#[derive(Debug, Clone)]
pub struct RecoveryAnalyzer {
    window_days: i64,
    thresholds: RecoveryThresholds,
}

impl Default for RecoveryAnalyzer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl RecoveryAnalyzer {
    /// Create an analyzer from configuration
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            window_days: config.timeframes.recovery_window_days,
            thresholds: config.recovery.clone(),
        }
    }

    /// Recovery status as of `now`
    #[must_use]
    pub fn analyze(&self, sessions: &[CompletedSession], now: DateTime<Utc>) -> RecoveryStatus {
        let Some(last) = sessions.iter().map(|session| session.date).max() else {
            return RecoveryStatus::no_history();
        };

        let days_since_last_workout = (now - last).num_days().max(0);
        let workouts_in_last_week =
            sessions_since(sessions, window_start(now, Duration::try_days(self.window_days)))
                .count();

        let status = RecoveryStatus {
            days_since_last_workout,
            needs_rest: days_since_last_workout < 1
                && workouts_in_last_week >= self.thresholds.needs_rest_sessions,
            overtraining_risk: workouts_in_last_week >= self.thresholds.overtraining_sessions,
            workouts_in_last_week,
        };

        debug!(
            days_since_last_workout,
            workouts_in_last_week,
            overtraining_risk = status.overtraining_risk,
            "Recovery analysis complete"
        );
        status
    }
}
