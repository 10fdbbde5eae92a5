// ABOUTME: Training engine service exposing analysis, tips, records, generation, and statistics
// ABOUTME: Serializes record updates per exercise and owns the statistics cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Engine
//!
//! Facade over the intelligence crate. Pure operations (`analyze`,
//! `generate_tips`, `generate_workout`) work on caller-provided snapshots;
//! record and convenience operations go through the attached
//! [`TrainingRepository`].
//!
//! Record updates for the same exercise are serialized through a per-key lock
//! map so two sessions finishing the same exercise cannot interleave their
//! read-modify-write of one record.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use gymbo_core::models::{
    CompletedSession, Exercise, ExerciseRecord, HealthSnapshot, RecordKind, TrainingTip,
    UserProfile, Workout, WorkoutPreferences,
};
use gymbo_core::{AppError, AppResult};
use gymbo_intelligence::{
    AnalysisConfig, AnalysisResult, ExerciseStatistics, GenerationError, RecordSortCriteria,
    RecordStatistics, RecordStore, StatisticsCache, TipEngine, TrainingWeight,
    WorkoutAnalysisCoordinator, WorkoutGenerator,
};
use rand::Rng;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::repository::TrainingRepository;

/// Training analytics and recommendation service
pub struct TrainingEngine {
    config: AnalysisConfig,
    coordinator: WorkoutAnalysisCoordinator,
    tip_engine: TipEngine,
    generator: WorkoutGenerator,
    record_store: RecordStore,
    repository: Option<Arc<dyn TrainingRepository>>,
    record_locks: DashMap<Uuid, Arc<Mutex<()>>>,
    cache: Mutex<StatisticsCache>,
}

impl Default for TrainingEngine {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl TrainingEngine {
    /// Create an engine without a storage context
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            coordinator: WorkoutAnalysisCoordinator::new(&config),
            tip_engine: TipEngine::new(&config),
            generator: WorkoutGenerator::new(),
            record_store: RecordStore::new(config.one_rep_max_formula),
            repository: None,
            record_locks: DashMap::new(),
            cache: Mutex::new(StatisticsCache::new(config.one_rep_max_formula)),
            config,
        }
    }

    /// Create an engine configured from `GYMBO_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if an override cannot be parsed or validated
    pub fn from_environment() -> AppResult<Self> {
        Ok(Self::new(AnalysisConfig::from_environment()?))
    }

    /// Attach the persistence collaborator
    #[must_use]
    pub fn with_repository(mut self, repository: Arc<dyn TrainingRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    // ================================================================================================
    // Analysis and tips
    // ================================================================================================

    /// Run every analyzer over a session snapshot as of now
    #[must_use]
    pub fn analyze(
        &self,
        sessions: &[CompletedSession],
        profile: &UserProfile,
        health: Option<&HealthSnapshot>,
    ) -> AnalysisResult {
        self.coordinator.analyze(sessions, profile, health)
    }

    /// Run every analyzer over a session snapshot as of `now`
    #[must_use]
    pub fn analyze_at(
        &self,
        sessions: &[CompletedSession],
        profile: &UserProfile,
        health: Option<&HealthSnapshot>,
        now: DateTime<Utc>,
    ) -> AnalysisResult {
        self.coordinator.analyze_at(sessions, profile, health, now)
    }

    /// Prioritized tips, `max_tips` defaulting to the configured count
    #[must_use]
    pub fn generate_tips(
        &self,
        analysis: &AnalysisResult,
        profile: &UserProfile,
        health: Option<&HealthSnapshot>,
        max_tips: Option<usize>,
    ) -> Vec<TrainingTip> {
        let max_tips = max_tips.unwrap_or_else(|| self.tip_engine.default_max_tips());
        self.tip_engine.generate(analysis, profile, health, max_tips)
    }

    /// Analyze stored history and return tips for the stored profile
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_CONTEXT_MISSING` without a repository, or the
    /// repository's error
    #[instrument(skip_all)]
    pub fn coaching_tips(&self, health: Option<&HealthSnapshot>) -> AppResult<Vec<TrainingTip>> {
        let repository = self.repository("generate coaching tips", None)?;
        let sessions = repository.fetch_sessions(None)?;
        let profile = repository.fetch_profile()?;
        let analysis = self.analyze(&sessions, &profile, health);
        Ok(self.generate_tips(&analysis, &profile, health, None))
    }

    // ================================================================================================
    // Workout generation
    // ================================================================================================

    /// Generate a workout with the thread-local random source
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] for invalid preferences or an unusable catalog
    pub fn generate_workout(
        &self,
        preferences: &WorkoutPreferences,
        catalog: &[Exercise],
    ) -> Result<Workout, GenerationError> {
        self.generator.generate(preferences, catalog)
    }

    /// Generate a workout drawing rep counts from `rng`
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] for invalid preferences or an unusable catalog
    pub fn generate_workout_with_rng<R: Rng + ?Sized>(
        &self,
        preferences: &WorkoutPreferences,
        catalog: &[Exercise],
        rng: &mut R,
    ) -> Result<Workout, GenerationError> {
        self.generator.generate_with_rng(preferences, catalog, rng)
    }

    // ================================================================================================
    // Personal records
    // ================================================================================================

    /// Which record a set would break, if any
    ///
    /// Without an existing record any set with positive weight and reps
    /// counts as a new heaviest-weight record.
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_CONTEXT_MISSING` without a repository, or the
    /// repository's error
    pub fn check_for_new_record(
        &self,
        exercise: &Exercise,
        weight: f64,
        reps: u32,
    ) -> AppResult<Option<RecordKind>> {
        let repository = self.repository("check for a new record", Some(exercise.id))?;
        Ok(match repository.fetch_record(exercise.id)? {
            Some(record) => record.has_new_record(weight, reps),
            None if weight > 0.0 && reps > 0 => Some(RecordKind::MaxWeight),
            None => None,
        })
    }

    /// Check several sets at once, keyed by exercise id
    ///
    /// A later set of the same exercise overrides an earlier result.
    ///
    /// # Errors
    ///
    /// Returns the first error of [`Self::check_for_new_record`]
    pub fn check_multiple_for_new_records(
        &self,
        sets: &[(&Exercise, f64, u32)],
    ) -> AppResult<HashMap<Uuid, RecordKind>> {
        let mut records = HashMap::new();
        for (exercise, weight, reps) in sets {
            if let Some(kind) = self.check_for_new_record(exercise, *weight, *reps)? {
                records.insert(exercise.id, kind);
            }
        }
        Ok(records)
    }

    /// Fold a completed set into the exercise's record and persist it
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_CONTEXT_MISSING` without a repository, `INVALID_INPUT`
    /// for a non-finite or negative weight on a new record, or the
    /// repository's error
    pub fn update_record(
        &self,
        exercise: &Exercise,
        weight: f64,
        reps: u32,
        date: DateTime<Utc>,
    ) -> AppResult<ExerciseRecord> {
        let repository = self.repository("update a record", Some(exercise.id))?;

        let lock = self.record_lock(exercise.id);
        let _guard = lock
            .lock()
            .map_err(|_| AppError::internal("record lock poisoned"))?;

        let existing = repository.fetch_record(exercise.id)?;
        let record = self
            .record_store
            .apply(
                existing.as_ref(),
                exercise.id,
                &exercise.name,
                weight,
                reps,
                date,
            )
            .ok_or_else(|| {
                AppError::invalid_input(format!("invalid weight {weight} for a new record"))
                    .with_resource_id(exercise.id.to_string())
            })?;

        repository.upsert_record(record.clone())?;
        self.cache()?.invalidate_exercise(exercise.id);

        info!(
            exercise_id = %exercise.id,
            exercise = %exercise.name,
            weight,
            reps,
            max_weight = record.max_weight,
            "Updated exercise record"
        );
        Ok(record)
    }

    /// Rebuild every record from the stored history and persist the result
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_CONTEXT_MISSING` without a repository, or the
    /// repository's error
    #[instrument(skip_all)]
    pub fn reconcile_records(&self) -> AppResult<BTreeMap<Uuid, ExerciseRecord>> {
        let repository = self.repository("reconcile records", None)?;
        let sessions = repository.fetch_sessions(None)?;
        let records = self.record_store.reconcile(&sessions);

        for (exercise_id, record) in &records {
            let lock = self.record_lock(*exercise_id);
            let _guard = lock
                .lock()
                .map_err(|_| AppError::internal("record lock poisoned"))?;
            repository.upsert_record(record.clone())?;
        }
        self.cache()?.invalidate();

        info!(records = records.len(), "Reconciled exercise records");
        Ok(records)
    }

    /// Aggregate statistics over every stored record
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_CONTEXT_MISSING` without a repository, or the
    /// repository's error
    pub fn record_statistics(&self, now: DateTime<Utc>) -> AppResult<RecordStatistics> {
        let records = self.repository("compute record statistics", None)?.fetch_records()?;
        Ok(RecordStore::statistics(&records, now))
    }

    /// Best stored records by `criteria`
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_CONTEXT_MISSING` without a repository, or the
    /// repository's error
    pub fn top_records(
        &self,
        criteria: RecordSortCriteria,
        limit: usize,
    ) -> AppResult<Vec<ExerciseRecord>> {
        let records = self.repository("list top records", None)?.fetch_records()?;
        Ok(RecordStore::top_records(&records, criteria, limit))
    }

    /// Working weights per rep range for an exercise
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` when the exercise has no record,
    /// `STORAGE_CONTEXT_MISSING` without a repository, or the repository's error
    pub fn training_weights(&self, exercise: &Exercise) -> AppResult<Vec<TrainingWeight>> {
        let record = self
            .repository("compute training weights", Some(exercise.id))?
            .fetch_record(exercise.id)?
            .ok_or_else(|| {
                AppError::not_found(format!("record for {}", exercise.name))
                    .with_resource_id(exercise.id.to_string())
            })?;
        Ok(RecordStore::training_weights(&record))
    }

    // ================================================================================================
    // Statistics cache
    // ================================================================================================

    /// Lifetime statistics of one exercise, memoized until invalidated
    ///
    /// # Errors
    ///
    /// Returns `INTERNAL_ERROR` if the cache lock is poisoned
    pub fn exercise_stats(
        &self,
        exercise_id: Uuid,
        sessions: &[CompletedSession],
    ) -> AppResult<ExerciseStatistics> {
        Ok(self.cache()?.exercise_stats(exercise_id, sessions).clone())
    }

    /// Consecutive ISO weeks with a session ending this week, memoized per day
    ///
    /// # Errors
    ///
    /// Returns `INTERNAL_ERROR` if the cache lock is poisoned
    pub fn week_streak(&self, sessions: &[CompletedSession], today: DateTime<Utc>) -> AppResult<u32> {
        Ok(self.cache()?.week_streak(sessions, today))
    }

    /// Drop every memoized statistic
    ///
    /// # Errors
    ///
    /// Returns `INTERNAL_ERROR` if the cache lock is poisoned
    pub fn invalidate_caches(&self) -> AppResult<()> {
        self.cache()?.invalidate();
        Ok(())
    }

    /// Drop memoized statistics of one exercise
    ///
    /// # Errors
    ///
    /// Returns `INTERNAL_ERROR` if the cache lock is poisoned
    pub fn invalidate_exercise_cache(&self, exercise_id: Uuid) -> AppResult<()> {
        self.cache()?.invalidate_exercise(exercise_id);
        Ok(())
    }

    // ================================================================================================
    // Internals
    // ================================================================================================

    fn repository(
        &self,
        operation: &str,
        exercise_id: Option<Uuid>,
    ) -> AppResult<&Arc<dyn TrainingRepository>> {
        self.repository.as_ref().ok_or_else(|| {
            error!(
                operation,
                exercise_id = ?exercise_id,
                "Storage context missing"
            );
            let err = AppError::storage_context_missing(operation);
            match exercise_id {
                Some(id) => err.with_resource_id(id.to_string()),
                None => err,
            }
        })
    }

    fn record_lock(&self, exercise_id: Uuid) -> Arc<Mutex<()>> {
        self.record_locks
            .entry(exercise_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    fn cache(&self) -> AppResult<MutexGuard<'_, StatisticsCache>> {
        self.cache
            .lock()
            .map_err(|_| AppError::internal("statistics cache lock poisoned"))
    }
}
