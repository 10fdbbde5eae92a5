// ABOUTME: Personal record bookkeeping over session history with deterministic reconciliation
// ABOUTME: Rebuilds one record per exercise and derives record statistics and training weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Record store
//!
//! Records are rebuilt by folding every completed set in chronological order.
//! Sessions sharing a timestamp are ordered by id, then by input order, so a
//! replay of the same history always yields identical records. Exercises are
//! independent and are folded in parallel on the rayon pool.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use gymbo_core::constants::records::{RECENT_RECORD_DAYS, TRAINING_WEIGHT_PERCENTAGES};
use gymbo_core::models::{CompletedSession, ExerciseRecord, OneRepMaxFormula};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

/// A completed set ready to be folded into a record
#[derive(Debug, Clone, PartialEq)]
struct Performance {
    weight: f64,
    reps: u32,
    date: DateTime<Utc>,
}

/// Sets of one exercise in chronological order
#[derive(Debug, Clone)]
struct ExerciseTimeline {
    exercise_name: String,
    performances: Vec<Performance>,
}

/// Aggregate view over all records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordStatistics {
    /// Exercises with a record
    pub total_records: usize,
    /// Mean of the heaviest weights
    pub average_max_weight: f64,
    /// Mean of the highest rep counts
    pub average_max_reps: f64,
    /// Mean of the best estimated one-rep maxes
    pub average_one_rep_max: f64,
    /// Records updated within the trailing 30 days
    pub recently_updated: usize,
}

/// Ordering used by [`RecordStore::top_records`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecordSortCriteria {
    /// Heaviest weight first
    MaxWeight,
    /// Most reps first
    MaxReps,
    /// Best estimated 1RM first
    EstimatedOneRepMax,
    /// Most recently broken first
    RecentlyBroken,
}

/// Suggested working weight for a rep range
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingWeight {
    /// Rep range label
    pub rep_range: String,
    /// Fraction of the estimated 1RM
    pub percentage: f64,
    /// Suggested load in kilograms
    pub weight_kg: f64,
}

/// Record arithmetic bound to a one-rep-max formula
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordStore {
    formula: OneRepMaxFormula,
}

impl RecordStore {
    /// Create a store estimating with `formula`
    #[must_use]
    pub const fn new(formula: OneRepMaxFormula) -> Self {
        Self { formula }
    }

    /// Formula used for new records
    #[must_use]
    pub const fn formula(&self) -> OneRepMaxFormula {
        self.formula
    }

    /// Fold one performance into an optional existing record
    ///
    /// Returns `None` only when there is no record yet and the weight is not a
    /// finite, non-negative number.
    #[must_use]
    pub fn apply(
        &self,
        existing: Option<&ExerciseRecord>,
        exercise_id: Uuid,
        exercise_name: &str,
        weight: f64,
        reps: u32,
        date: DateTime<Utc>,
    ) -> Option<ExerciseRecord> {
        if !is_valid_weight(weight) {
            warn!(
                exercise_id = %exercise_id,
                weight,
                reps,
                "Skipping set with invalid weight"
            );
            return existing.cloned();
        }

        Some(existing.map_or_else(
            || {
                ExerciseRecord::from_first_set(
                    exercise_id,
                    exercise_name,
                    weight,
                    reps,
                    date,
                    self.formula,
                )
            },
            |record| record.updated_with(weight, reps, date),
        ))
    }

    /// Rebuild every record from scratch
    ///
    /// Idempotent: reconciling the same sessions twice yields equal maps.
    #[must_use]
    pub fn reconcile(&self, sessions: &[CompletedSession]) -> BTreeMap<Uuid, ExerciseRecord> {
        let timelines = chronological_timelines(sessions);

        let records: BTreeMap<Uuid, ExerciseRecord> = timelines
            .into_par_iter()
            .filter_map(|(exercise_id, timeline)| {
                let record = timeline
                    .performances
                    .iter()
                    .fold(None, |record: Option<ExerciseRecord>, performance| {
                        self.apply(
                            record.as_ref(),
                            exercise_id,
                            &timeline.exercise_name,
                            performance.weight,
                            performance.reps,
                            performance.date,
                        )
                    })?;
                Some((
                    exercise_id,
                    ExerciseRecord {
                        exercise_name: timeline.exercise_name,
                        ..record
                    },
                ))
            })
            .collect();

        debug!(
            sessions = sessions.len(),
            records = records.len(),
            "Reconciled exercise records"
        );
        records
    }

    /// Aggregate statistics over a set of records
    #[must_use]
    pub fn statistics<'a>(
        records: impl IntoIterator<Item = &'a ExerciseRecord>,
        now: DateTime<Utc>,
    ) -> RecordStatistics {
        let records: Vec<&ExerciseRecord> = records.into_iter().collect();
        if records.is_empty() {
            return RecordStatistics {
                total_records: 0,
                average_max_weight: 0.0,
                average_max_reps: 0.0,
                average_one_rep_max: 0.0,
                recently_updated: 0,
            };
        }

        let count = records.len() as f64;
        let cutoff = now - Duration::days(RECENT_RECORD_DAYS);
        RecordStatistics {
            total_records: records.len(),
            average_max_weight: records.iter().map(|r| r.max_weight).sum::<f64>() / count,
            average_max_reps: records.iter().map(|r| f64::from(r.max_reps)).sum::<f64>() / count,
            average_one_rep_max: records
                .iter()
                .map(|r| r.best_estimated_one_rep_max)
                .sum::<f64>()
                / count,
            recently_updated: records.iter().filter(|r| r.updated_at >= cutoff).count(),
        }
    }

    /// Best `limit` records by `criteria`, ties broken by exercise name
    #[must_use]
    pub fn top_records<'a>(
        records: impl IntoIterator<Item = &'a ExerciseRecord>,
        criteria: RecordSortCriteria,
        limit: usize,
    ) -> Vec<ExerciseRecord> {
        let mut sorted: Vec<&ExerciseRecord> = records.into_iter().collect();
        sorted.sort_by(|a, b| {
            let primary = match criteria {
                RecordSortCriteria::MaxWeight => b.max_weight.total_cmp(&a.max_weight),
                RecordSortCriteria::MaxReps => b.max_reps.cmp(&a.max_reps),
                RecordSortCriteria::EstimatedOneRepMax => b
                    .best_estimated_one_rep_max
                    .total_cmp(&a.best_estimated_one_rep_max),
                RecordSortCriteria::RecentlyBroken => b.last_broken_at().cmp(&a.last_broken_at()),
            };
            primary.then_with(|| a.exercise_name.cmp(&b.exercise_name))
        });
        sorted.into_iter().take(limit).cloned().collect()
    }

    /// Suggested working weights per rep range from the best estimated 1RM
    #[must_use]
    pub fn training_weights(record: &ExerciseRecord) -> Vec<TrainingWeight> {
        TRAINING_WEIGHT_PERCENTAGES
            .iter()
            .map(|(rep_range, percentage)| TrainingWeight {
                rep_range: (*rep_range).to_owned(),
                percentage: *percentage,
                weight_kg: record.best_estimated_one_rep_max * percentage,
            })
            .collect()
    }
}

fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}

/// Completed sets grouped per exercise in fold order
fn chronological_timelines(sessions: &[CompletedSession]) -> BTreeMap<Uuid, ExerciseTimeline> {
    let mut ordered: Vec<&CompletedSession> = sessions.iter().collect();
    ordered.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

    let mut timelines: BTreeMap<Uuid, ExerciseTimeline> = BTreeMap::new();
    for session in ordered {
        for performed in &session.exercises {
            let timeline = timelines
                .entry(performed.exercise.id)
                .or_insert_with(|| ExerciseTimeline {
                    exercise_name: performed.exercise.name.clone(),
                    performances: Vec::new(),
                });
            timeline.exercise_name.clone_from(&performed.exercise.name);
            timeline
                .performances
                .extend(performed.completed_sets().map(|set| Performance {
                    weight: set.weight_kg,
                    reps: set.reps,
                    date: session.date,
                }));
        }
    }
    timelines
}
