// ABOUTME: Main library entry point for the GymBo training analytics engine
// ABOUTME: Wires the analyzers, tip engine, and generator behind one service facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # GymBo
//!
//! Training analytics and recommendation engine for a strength training
//! tracker. Given a history of completed sessions, it maintains personal
//! records, detects plateaus, muscle imbalances, recovery and consistency
//! status, produces prioritized coaching tips, and generates new workouts
//! from an exercise catalog.
//!
//! ## Architecture
//!
//! - **`gymbo_core`**: errors, constants, and domain models
//! - **`gymbo_intelligence`**: pure, synchronous analyzers and generators
//! - **engine**: the [`TrainingEngine`] facade with record locking and caches
//! - **repository**: the persistence collaborator contract
//! - **logging**: structured logging setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use gymbo::{InMemoryRepository, TrainingEngine, UserProfile};
//! use gymbo::errors::AppResult;
//! use gymbo::logging::init_logging;
//!
//! fn main() -> AppResult<()> {
//!     if let Err(error) = init_logging() {
//!         eprintln!("logging disabled: {error}");
//!     }
//!     let repository = Arc::new(InMemoryRepository::new());
//!     let engine = TrainingEngine::from_environment()?.with_repository(repository);
//!
//!     let analysis = engine.analyze(&[], &UserProfile::default(), None);
//!     let tips = engine.generate_tips(&analysis, &UserProfile::default(), None, None);
//!     println!("{} tips", tips.len());
//!     Ok(())
//! }
//! ```

/// Training engine service facade
pub mod engine;

/// Structured logging configuration
pub mod logging;

/// Persistence collaborator contract and in-memory implementation
pub mod repository;

pub use gymbo_core::{constants, errors, models};
pub use gymbo_core::{AppError, AppResult, ErrorCode};
pub use gymbo_core::models::{
    CompletedSession, Exercise, ExerciseRecord, ExerciseSet, HealthSnapshot, RecordKind,
    SessionExercise, TrainingTip, UserProfile, Workout, WorkoutPreferences,
};
pub use gymbo_intelligence::{
    AnalysisConfig, AnalysisResult, GenerationError, RecordSortCriteria, StatisticsCache,
    TipEngine, WorkoutAnalysisCoordinator, WorkoutGenerator,
};

pub use engine::TrainingEngine;
pub use repository::{InMemoryRepository, TrainingRepository};
