// ABOUTME: Benchmark fixtures generating realistic strength training histories
// ABOUTME: Deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures.
//!
//! Histories rotate through push, pull, and leg days with slowly rising loads
//! so every analyzer has real work to do.

use chrono::{DateTime, Duration, TimeZone, Utc};
use gymbo::models::{
    CompletedSession, DifficultyLevel, EquipmentType, Exercise, ExerciseSet, MuscleGroup,
    SessionExercise,
};

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// One month of training
    Month,
    /// Half a year of training
    HalfYear,
    /// Several years of training
    Years,
}

impl HistorySize {
    #[must_use]
    pub const fn sessions(self) -> usize {
        match self {
            Self::Month => 12,
            Self::HalfYear => 80,
            Self::Years => 500,
        }
    }
}

/// Instant every generated history ends at
#[must_use]
pub fn bench_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 18, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Catalog used for both history generation and workout generation
#[must_use]
pub fn catalog() -> Vec<Exercise> {
    use DifficultyLevel::{Advanced, Beginner, Intermediate};
    use EquipmentType::{Bodyweight, Cable, FreeWeights, Machine};
    use MuscleGroup::{Abs, Back, Biceps, Chest, Glutes, Legs, Shoulders, Triceps};

    vec![
        Exercise::new("Bench Press", vec![Chest, Triceps, Shoulders], FreeWeights, Intermediate),
        Exercise::new("Overhead Press", vec![Shoulders, Triceps], FreeWeights, Intermediate),
        Exercise::new("Barbell Row", vec![Back, Biceps], FreeWeights, Intermediate),
        Exercise::new("Pull-Up", vec![Back, Biceps], Bodyweight, Intermediate),
        Exercise::new("Barbell Squat", vec![Legs, Glutes], FreeWeights, Intermediate),
        Exercise::new("Deadlift", vec![Back, Legs, Glutes], FreeWeights, Advanced),
        Exercise::new("Dumbbell Curl", vec![Biceps], FreeWeights, Beginner),
        Exercise::new("Lateral Raise", vec![Shoulders], FreeWeights, Beginner),
        Exercise::new("Crunch", vec![Abs], Bodyweight, Beginner),
        Exercise::new("Triceps Pushdown", vec![Triceps], Cable, Beginner),
        Exercise::new("Leg Press Machine", vec![Legs, Glutes], Machine, Beginner),
        Exercise::new("Lat Pulldown Machine", vec![Back, Biceps], Machine, Beginner),
    ]
}

/// Session rotation: push, pull, legs
const SPLIT: [&[usize]; 3] = [&[0, 1, 7, 9], &[2, 3, 6, 11], &[4, 5, 10, 8]];

/// Generate a history of `size` sessions, every other day, newest last
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub fn generate_history(size: HistorySize, catalog: &[Exercise]) -> Vec<CompletedSession> {
    let count = size.sessions();
    let now = bench_now();

    (0..count)
        .map(|index| {
            let days_ago = ((count - index) * 2) as i64;
            let progression = (index / 6) as f64 * 2.5;
            let exercises = SPLIT[index % SPLIT.len()]
                .iter()
                .filter_map(|position| catalog.get(*position))
                .map(|exercise| SessionExercise {
                    exercise: exercise.clone(),
                    sets: (0..4_u32)
                        .map(|set| {
                            ExerciseSet::completed(40.0 + progression, 8 + (set + index as u32) % 4)
                        })
                        .collect(),
                })
                .collect();
            CompletedSession::new(now - Duration::days(days_ago), exercises)
        })
        .collect()
}
