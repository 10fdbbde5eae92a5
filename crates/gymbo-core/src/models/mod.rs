// ABOUTME: Core data models for training sessions, exercise catalog, records, and tips
// ABOUTME: Re-exports all model types so callers can import from gymbo_core::models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Sessions and exercises are owned by the persistence collaborator and are
//! read-only inputs here. Records are the only engine-maintained state.

/// Exercise catalog entries and their enumerations
pub mod exercise;
/// Optional external health data (body weight trend)
pub mod health;
/// User profile and generator preferences
pub mod profile;
/// Personal record bookkeeping and one-rep-max math
pub mod record;
/// Completed sessions, session exercises, and sets
pub mod session;
/// Coaching tips produced by the tip engine
pub mod tip;
/// Generated workout plans
pub mod workout;

pub use exercise::{DifficultyLevel, EquipmentType, Exercise, MuscleGroup};
pub use health::{HealthSnapshot, WeightTrend};
pub use profile::{
    EquipmentPreference, ExperienceLevel, FitnessGoal, UserProfile, WorkoutDuration,
    WorkoutPreferences,
};
pub use record::{estimate_one_rep_max, ExerciseRecord, OneRepMaxFormula, RecordKind};
pub use session::{CompletedSession, ExerciseSet, HeartRateSummary, SessionExercise};
pub use tip::{TipCategory, TipMetadata, TipPriority, TrainingTip};
pub use workout::{Workout, WorkoutExercise};
