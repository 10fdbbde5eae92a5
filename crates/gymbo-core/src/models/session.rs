// ABOUTME: Completed workout session model with session exercises and individual sets
// ABOUTME: Provides completed-set iteration and volume helpers used by every analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::exercise::Exercise;

/// A single set within a session exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseSet {
    /// Repetitions performed (or planned)
    pub reps: u32,
    /// Load in kilograms, zero for bodyweight or cardio
    pub weight_kg: f64,
    /// Duration for cardio-mode sets
    pub duration_seconds: Option<u32>,
    /// Rest target after the set
    pub rest_seconds: u32,
    /// Only completed sets count toward analysis, records, and volume
    pub completed: bool,
}

impl ExerciseSet {
    /// A completed strength set with no rest target
    #[must_use]
    pub const fn completed(weight_kg: f64, reps: u32) -> Self {
        Self {
            reps,
            weight_kg,
            duration_seconds: None,
            rest_seconds: 0,
            completed: true,
        }
    }

    /// A planned, not yet completed set
    #[must_use]
    pub const fn planned(weight_kg: f64, reps: u32, rest_seconds: u32) -> Self {
        Self {
            reps,
            weight_kg,
            duration_seconds: None,
            rest_seconds,
            completed: false,
        }
    }

    /// Volume of the set (`weight × reps`)
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight_kg * f64::from(self.reps)
    }
}

/// An exercise performed within a session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionExercise {
    /// Exercise performed
    pub exercise: Exercise,
    /// Sets in performed order
    pub sets: Vec<ExerciseSet>,
}

impl SessionExercise {
    /// Iterate over completed sets only
    pub fn completed_sets(&self) -> impl Iterator<Item = &ExerciseSet> {
        self.sets.iter().filter(|set| set.completed)
    }

    /// Volume across completed sets
    #[must_use]
    pub fn completed_volume(&self) -> f64 {
        self.completed_sets().map(ExerciseSet::volume).sum()
    }
}

/// Heart rate summary recorded by a wearable during the session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HeartRateSummary {
    /// Average heart rate in bpm
    pub average_bpm: u32,
    /// Maximum heart rate in bpm
    pub max_bpm: u32,
}

/// A finished workout
///
/// Immutable once created; deleted only by explicit user action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletedSession {
    /// Unique identifier
    pub id: Uuid,
    /// Workout template the session was started from
    pub template_id: Option<Uuid>,
    /// When the session was finished
    pub date: DateTime<Utc>,
    /// Exercises in display order
    pub exercises: Vec<SessionExercise>,
    /// Total duration
    pub duration_seconds: Option<u64>,
    /// Heart rate summary
    pub heart_rate: Option<HeartRateSummary>,
}

impl CompletedSession {
    /// Create a session without template, duration, or heart rate data
    #[must_use]
    pub fn new(date: DateTime<Utc>, exercises: Vec<SessionExercise>) -> Self {
        Self {
            id: Uuid::new_v4(),
            template_id: None,
            date,
            exercises,
            duration_seconds: None,
            heart_rate: None,
        }
    }

    /// Iterate over completed sets of every exercise
    pub fn completed_sets(&self) -> impl Iterator<Item = &ExerciseSet> {
        self.exercises
            .iter()
            .flat_map(SessionExercise::completed_sets)
    }

    /// Session volume across completed sets
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.exercises
            .iter()
            .map(SessionExercise::completed_volume)
            .sum()
    }
}
