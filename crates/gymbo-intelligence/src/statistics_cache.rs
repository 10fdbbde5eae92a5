// ABOUTME: Explicit memo of per-exercise statistics and the weekly training streak
// ABOUTME: Owned by the engine instance and invalidated by the persistence collaborator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Datelike, Duration, IsoWeek, NaiveDate, Utc};
use gymbo_core::models::{CompletedSession, OneRepMaxFormula};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// One session's contribution to an exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionDataPoint {
    /// Session date
    pub date: DateTime<Utc>,
    /// Completed volume in the session
    pub volume: f64,
    /// Best estimated one-rep max in the session
    pub estimated_one_rep_max: f64,
}

/// Lifetime statistics of one exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseStatistics {
    /// Exercise identifier
    pub exercise_id: Uuid,
    /// Completed volume across all sessions
    pub total_volume: f64,
    /// Completed reps across all sessions
    pub total_reps: u64,
    /// Heaviest completed set
    pub max_weight: f64,
    /// Best estimated one-rep max
    pub best_estimated_one_rep_max: f64,
    /// Per-session history, oldest first
    pub history: Vec<SessionDataPoint>,
}

/// Memoized statistics with explicit invalidation
///
/// Results are served from memory until [`Self::invalidate`] or
/// [`Self::invalidate_exercise`] is called; callers must invalidate after
/// any session mutation.
#[derive(Debug, Default)]
pub struct StatisticsCache {
    formula: OneRepMaxFormula,
    exercise_stats: HashMap<Uuid, ExerciseStatistics>,
    week_streak: Option<(NaiveDate, u32)>,
}

impl StatisticsCache {
    /// Create an empty cache estimating with `formula`
    #[must_use]
    pub fn new(formula: OneRepMaxFormula) -> Self {
        Self {
            formula,
            ..Self::default()
        }
    }

    /// Statistics of one exercise, computed on first access
    pub fn exercise_stats(
        &mut self,
        exercise_id: Uuid,
        sessions: &[CompletedSession],
    ) -> &ExerciseStatistics {
        let formula = self.formula;
        self.exercise_stats
            .entry(exercise_id)
            .or_insert_with(|| compute_exercise_stats(exercise_id, sessions, formula))
    }

    /// Consecutive ISO weeks with a session, ending with the week of `today`
    ///
    /// Zero when the current week has no session. Memoized per calendar day.
    pub fn week_streak(&mut self, sessions: &[CompletedSession], today: DateTime<Utc>) -> u32 {
        let day = today.date_naive();
        if let Some((cached_day, streak)) = self.week_streak {
            if cached_day == day {
                return streak;
            }
        }

        let streak = compute_week_streak(sessions, day);
        self.week_streak = Some((day, streak));
        streak
    }

    /// Drop every memoized value
    pub fn invalidate(&mut self) {
        debug!(
            exercises = self.exercise_stats.len(),
            "Invalidating statistics cache"
        );
        self.exercise_stats.clear();
        self.week_streak = None;
    }

    /// Drop the memoized statistics of one exercise and the week streak
    pub fn invalidate_exercise(&mut self, exercise_id: Uuid) {
        self.exercise_stats.remove(&exercise_id);
        self.week_streak = None;
    }

    /// Whether statistics for the exercise are currently memoized
    #[must_use]
    pub fn is_cached(&self, exercise_id: Uuid) -> bool {
        self.exercise_stats.contains_key(&exercise_id)
    }
}

fn compute_exercise_stats(
    exercise_id: Uuid,
    sessions: &[CompletedSession],
    formula: OneRepMaxFormula,
) -> ExerciseStatistics {
    let mut stats = ExerciseStatistics {
        exercise_id,
        total_volume: 0.0,
        total_reps: 0,
        max_weight: 0.0,
        best_estimated_one_rep_max: 0.0,
        history: Vec::new(),
    };

    let mut ordered: Vec<&CompletedSession> = sessions.iter().collect();
    ordered.sort_by(|a, b| a.date.cmp(&b.date));

    for session in ordered {
        let sets: Vec<_> = session
            .exercises
            .iter()
            .filter(|performed| performed.exercise.id == exercise_id)
            .flat_map(|performed| performed.completed_sets())
            .collect();
        if sets.is_empty() {
            continue;
        }

        let volume: f64 = sets.iter().map(|set| set.volume()).sum();
        let best = sets
            .iter()
            .map(|set| formula.estimate(set.weight_kg, set.reps))
            .fold(0.0_f64, f64::max);

        stats.total_volume += volume;
        stats.total_reps += sets.iter().map(|set| u64::from(set.reps)).sum::<u64>();
        stats.max_weight = sets
            .iter()
            .map(|set| set.weight_kg)
            .fold(stats.max_weight, f64::max);
        stats.best_estimated_one_rep_max = stats.best_estimated_one_rep_max.max(best);
        stats.history.push(SessionDataPoint {
            date: session.date,
            volume,
            estimated_one_rep_max: best,
        });
    }

    stats
}

fn compute_week_streak(sessions: &[CompletedSession], today: NaiveDate) -> u32 {
    let weeks: BTreeSet<IsoWeek> = sessions
        .iter()
        .map(|session| session.date.date_naive().iso_week())
        .collect();

    let mut streak = 0;
    let mut cursor = today;
    while weeks.contains(&cursor.iso_week()) {
        streak += 1;
        match cursor.checked_sub_signed(Duration::weeks(1)) {
            Some(previous) => cursor = previous,
            None => break,
        }
    }
    streak
}
