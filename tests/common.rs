// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, a fixed clock, exercise and session builders, and a sample catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `gymbo`
//!
//! Every test builds its history relative to [`fixed_now`] so time windows
//! are deterministic.

use std::env;
use std::sync::Once;

use chrono::{DateTime, Duration, TimeZone, Utc};
use gymbo::models::{
    CompletedSession, DifficultyLevel, EquipmentType, Exercise, ExerciseSet, MuscleGroup,
    SessionExercise,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Reference instant every test history is anchored to
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 18, 0, 0).unwrap()
}

/// `fixed_now()` minus whole days
pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}

/// Intermediate free-weight exercise
pub fn exercise(name: &str, groups: &[MuscleGroup]) -> Exercise {
    Exercise::new(
        name,
        groups.to_vec(),
        EquipmentType::FreeWeights,
        DifficultyLevel::Intermediate,
    )
}

pub fn bench_press() -> Exercise {
    exercise(
        "Bench Press",
        &[MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Shoulders],
    )
}

pub fn barbell_row() -> Exercise {
    exercise("Barbell Row", &[MuscleGroup::Back, MuscleGroup::Biceps])
}

pub fn squat() -> Exercise {
    exercise("Squat", &[MuscleGroup::Legs, MuscleGroup::Glutes])
}

/// Exercise performed with completed `(weight, reps)` sets
pub fn performed(exercise: &Exercise, sets: &[(f64, u32)]) -> SessionExercise {
    SessionExercise {
        exercise: exercise.clone(),
        sets: sets
            .iter()
            .map(|(weight, reps)| ExerciseSet::completed(*weight, *reps))
            .collect(),
    }
}

/// Session on `date` with the given exercises
pub fn session(date: DateTime<Utc>, exercises: Vec<SessionExercise>) -> CompletedSession {
    CompletedSession::new(date, exercises)
}

/// Session with a single exercise
pub fn single_exercise_session(
    date: DateTime<Utc>,
    exercise: &Exercise,
    sets: &[(f64, u32)],
) -> CompletedSession {
    session(date, vec![performed(exercise, sets)])
}

/// Catalog mixing compound, isolation, free-weight, and machine exercises
pub fn sample_catalog() -> Vec<Exercise> {
    use DifficultyLevel::{Advanced, Beginner, Intermediate};
    use EquipmentType::{Bodyweight, Cable, FreeWeights, Machine};
    use MuscleGroup::{Abs, Back, Biceps, Chest, Glutes, Legs, Shoulders, Triceps};

    vec![
        Exercise::new("Bench Press", vec![Chest, Triceps, Shoulders], FreeWeights, Intermediate),
        Exercise::new("Barbell Squat", vec![Legs, Glutes], FreeWeights, Intermediate),
        Exercise::new("Deadlift", vec![Back, Legs, Glutes], FreeWeights, Advanced),
        Exercise::new("Pull-Up", vec![Back, Biceps], Bodyweight, Intermediate),
        Exercise::new("Overhead Press", vec![Shoulders, Triceps], FreeWeights, Intermediate),
        Exercise::new("Goblet Squat", vec![Legs, Glutes], FreeWeights, Beginner),
        Exercise::new("Push-Up", vec![Chest, Triceps], Bodyweight, Beginner),
        Exercise::new("Dumbbell Curl", vec![Biceps], FreeWeights, Beginner),
        Exercise::new("Lateral Raise", vec![Shoulders], FreeWeights, Beginner),
        Exercise::new("Crunch", vec![Abs], Bodyweight, Beginner),
        Exercise::new("Triceps Pushdown", vec![Triceps], Cable, Beginner),
        Exercise::new("Chest Press Machine", vec![Chest, Triceps], Machine, Beginner),
        Exercise::new("Leg Press Machine", vec![Legs, Glutes], Machine, Beginner),
        Exercise::new("Lat Pulldown Machine", vec![Back, Biceps], Machine, Beginner),
        Exercise::new("Leg Curl Machine", vec![Legs], Machine, Beginner),
    ]
}
