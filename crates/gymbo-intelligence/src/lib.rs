// ABOUTME: Training intelligence crate: analyzers, tip engine, workout generator, caches
// ABOUTME: Turns a history of completed sessions into records, findings, tips, and new workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Gymbo Intelligence
//!
//! Deterministic, explainable training analytics over in-memory session
//! snapshots. Six independent analyzers feed a coordinator whose
//! [`AnalysisResult`] drives the rule-based [`TipEngine`]. The
//! [`WorkoutGenerator`] is independent and assembles new sessions from the
//! exercise catalog.

/// Configuration-driven thresholds
pub mod analysis_config;
/// Session history helpers shared by the analyzers
pub mod history;
/// Batch record reconciliation and record statistics
pub mod record_store;

/// Plateau detection
pub mod progression_analyzer;
/// Muscle group volume distribution
pub mod balance_analyzer;
/// Rest and overtraining status
pub mod recovery_analyzer;
/// Streaks and weekly frequency
pub mod consistency_analyzer;
/// Rep range and volume alignment with the training goal
pub mod goal_alignment;
/// Personal records, volume increases, and streak milestones
pub mod achievements;

/// Runs every analyzer over the same snapshot
pub mod analyzer;
/// Rule-based coaching tips
pub mod tip_engine;
/// Constraint-driven workout generation
pub mod workout_generator;
/// Memoized per-exercise statistics and week streak
pub mod statistics_cache;

pub use achievements::{Achievement, AchievementDetector, AchievementKind};
pub use analysis_config::{AnalysisConfig, AnalysisConfigError};
pub use analyzer::{AnalysisResult, WorkoutAnalysisCoordinator};
pub use balance_analyzer::{BalanceAnalyzer, ImbalanceKind, MuscleGroupBalance, MuscleGroupImbalance};
pub use consistency_analyzer::{ConsistencyAnalyzer, ConsistencyMetrics};
pub use goal_alignment::{GoalAlignment, GoalAlignmentAnalyzer, RepRangeAlignment, VolumeAlignment};
pub use progression_analyzer::{ProgressionAnalyzer, ProgressionOpportunity};
pub use record_store::{RecordSortCriteria, RecordStatistics, RecordStore, TrainingWeight};
pub use recovery_analyzer::{RecoveryAnalyzer, RecoveryStatus};
pub use statistics_cache::{ExerciseStatistics, SessionDataPoint, StatisticsCache};
pub use tip_engine::TipEngine;
pub use workout_generator::{GenerationError, WorkoutGenerator};
