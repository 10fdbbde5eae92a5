// ABOUTME: Training consistency: current streak, weekly frequency, totals
// ABOUTME: The streak walks back from now while every gap stays within the allowed days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, Utc};
use gymbo_core::models::CompletedSession;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis_config::AnalysisConfig;
use crate::history::{newest_first, sessions_since, window_start};

/// Consistency snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ConsistencyMetrics {
    /// Sessions in the current streak
    pub current_streak: u32,
    /// Mean sessions per week over the frequency window
    pub average_workouts_per_week: f64,
    /// All sessions ever
    pub total_workouts: usize,
    /// Most recent session
    pub last_workout_date: Option<DateTime<Utc>>,
}

/// Computes consistency metrics
#[derive(Debug, Clone)]
pub struct ConsistencyAnalyzer {
    max_gap_days: i64,
    frequency_window_weeks: i64,
}

impl Default for ConsistencyAnalyzer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl ConsistencyAnalyzer {
    /// Create an analyzer from configuration
    #[must_use]
    pub const fn new(config: &AnalysisConfig) -> Self {
        Self {
            max_gap_days: config.timeframes.streak_max_gap_days,
            frequency_window_weeks: config.timeframes.frequency_window_weeks,
        }
    }

    /// Consistency as of `now`
    #[must_use]
    pub fn analyze(&self, sessions: &[CompletedSession], now: DateTime<Utc>) -> ConsistencyMetrics {
        if sessions.is_empty() {
            return ConsistencyMetrics::default();
        }

        let sorted = newest_first(sessions);
        let cutoff = window_start(now, Duration::try_weeks(self.frequency_window_weeks));
        let recent = sessions_since(sessions, cutoff).count();

        let metrics = ConsistencyMetrics {
            current_streak: self.current_streak(&sorted, now),
            average_workouts_per_week: recent as f64 / self.frequency_window_weeks as f64,
            total_workouts: sessions.len(),
            last_workout_date: sorted.first().map(|session| session.date),
        };

        debug!(
            streak = metrics.current_streak,
            per_week = metrics.average_workouts_per_week,
            "Consistency analysis complete"
        );
        metrics
    }

    fn current_streak(&self, newest_first: &[&CompletedSession], now: DateTime<Utc>) -> u32 {
        let mut cursor = now;
        let mut streak = 0;
        for session in newest_first {
            if (cursor - session.date).num_days() > self.max_gap_days {
                break;
            }
            streak += 1;
            cursor = session.date;
        }
        streak
    }
}
