// ABOUTME: Workout plan model produced by the workout generator
// ABOUTME: Holds the planned exercises with their sets, the default rest time, and notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::exercise::Exercise;
use super::session::ExerciseSet;

/// A planned exercise with its sets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutExercise {
    /// Catalog exercise
    pub exercise: Exercise,
    /// Planned sets (not completed)
    pub sets: Vec<ExerciseSet>,
}

/// A generated workout plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    /// Display name
    pub name: String,
    /// Exercises in execution order
    pub exercises: Vec<WorkoutExercise>,
    /// Default rest between sets
    pub default_rest_seconds: u32,
    /// Multi-line notes
    pub notes: String,
}

impl Workout {
    /// Total planned sets
    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|exercise| exercise.sets.len()).sum()
    }
}
