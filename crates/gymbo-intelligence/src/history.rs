// ABOUTME: Session history helpers shared by the analyzers and the statistics cache
// ABOUTME: Per-exercise grouping of completed sets, time windows, and small statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use gymbo_core::models::{CompletedSession, ExerciseSet};
use uuid::Uuid;

/// Completed work on one exercise within one session
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseEntry {
    /// Session identifier
    pub session_id: Uuid,
    /// Session date
    pub date: DateTime<Utc>,
    /// Mean weight over completed sets
    pub average_weight: f64,
    /// Mean reps over completed sets
    pub average_reps: f64,
    /// Sum of `weight × reps` over completed sets
    pub volume: f64,
    /// Completed sets as `(weight, reps)`
    pub sets: Vec<(f64, u32)>,
}

/// Every session containing completed sets of one exercise
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseHistory {
    /// Exercise identifier
    pub exercise_id: Uuid,
    /// Exercise name as seen in the newest session
    pub exercise_name: String,
    /// Entries, newest first
    pub entries: Vec<ExerciseEntry>,
}

/// Sessions sorted newest first
///
/// Sessions sharing a timestamp keep their input order.
#[must_use]
pub fn newest_first(sessions: &[CompletedSession]) -> Vec<&CompletedSession> {
    let mut sorted: Vec<&CompletedSession> = sessions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Start of a trailing window of length `span` ending at `now`
///
/// A span that cannot be represented, or reaches past the earliest
/// representable instant, opens the window to the whole history.
#[must_use]
pub fn window_start(now: DateTime<Utc>, span: Option<Duration>) -> DateTime<Utc> {
    span.and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Sessions dated at or after `cutoff`
pub fn sessions_since(
    sessions: &[CompletedSession],
    cutoff: DateTime<Utc>,
) -> impl Iterator<Item = &CompletedSession> {
    sessions.iter().filter(move |session| session.date >= cutoff)
}

/// Group completed sets per exercise, newest session first
///
/// An exercise appearing twice in one session contributes a single entry.
#[must_use]
pub fn exercise_histories(sessions: &[CompletedSession]) -> Vec<ExerciseHistory> {
    let mut histories: BTreeMap<Uuid, ExerciseHistory> = BTreeMap::new();

    for session in newest_first(sessions) {
        let mut per_exercise: BTreeMap<Uuid, (&str, Vec<&ExerciseSet>)> = BTreeMap::new();
        for performed in &session.exercises {
            let sets: Vec<&ExerciseSet> = performed.completed_sets().collect();
            if sets.is_empty() {
                continue;
            }
            per_exercise
                .entry(performed.exercise.id)
                .or_insert_with(|| (performed.exercise.name.as_str(), Vec::new()))
                .1
                .extend(sets);
        }

        for (exercise_id, (name, sets)) in per_exercise {
            let weights: Vec<f64> = sets.iter().map(|set| set.weight_kg).collect();
            let reps: Vec<f64> = sets.iter().map(|set| f64::from(set.reps)).collect();
            let entry = ExerciseEntry {
                session_id: session.id,
                date: session.date,
                average_weight: mean(&weights).unwrap_or(0.0),
                average_reps: mean(&reps).unwrap_or(0.0),
                volume: sets.iter().map(|set| set.volume()).sum(),
                sets: sets.iter().map(|set| (set.weight_kg, set.reps)).collect(),
            };
            histories
                .entry(exercise_id)
                .or_insert_with(|| ExerciseHistory {
                    exercise_id,
                    exercise_name: name.to_owned(),
                    entries: Vec::new(),
                })
                .entries
                .push(entry);
        }
    }

    histories.into_values().collect()
}

/// Arithmetic mean, `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance, `None` for an empty slice
#[must_use]
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let average = mean(values)?;
    let squared: Vec<f64> = values
        .iter()
        .map(|value| (value - average).powi(2))
        .collect();
    mean(&squared)
}
